use smallvec::SmallVec;

use crate::foundation::math::{MAX_ALPHA, flip};
use crate::foundation::parallel::{PARALLEL_CUTOFF, run_tasks};
use crate::hull::chain::{Chain, ChainSet, Corner};
use crate::plane::alpha::{AlphaPlaneMut, AlphaRowMut};
use crate::raster::walker::PixelWalker;

/// Per-row rasterization boundaries for one side of the hull.
///
/// `a..b` is the anti-aliased edge run for the row (empty without
/// anti-aliasing); `run` indexes the first of its coverage samples in the
/// owning chain's run buffer. On the left side everything before `a` is
/// transparent and opaque fill starts at `b`; on the right side opaque fill
/// ends at `a` and everything from `b` on is transparent.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct RowSpan {
    pub(crate) a: i32,
    pub(crate) b: i32,
    pub(crate) run: u32,
}

/// Rasterizes the hull into the destination plane.
///
/// Six subtasks walk the four chains and fill the two vertical corner gaps,
/// writing disjoint segments of the row index maps plus chain-private
/// coverage runs; a final row-parallel pass then writes every destination
/// sample from the maps.
pub(crate) fn rasterize(
    chains: &ChainSet,
    left_map: &mut [RowSpan],
    right_map: &mut [RowSpan],
    runs: &mut [Vec<i16>; 4],
    margin: i32,
    antialias: bool,
    dst: &mut AlphaPlaneMut<'_>,
) {
    let e = margin;
    let lt_btm_e = (chains.lt.btm + e) as usize;
    let lb_top_e = (chains.lb.top + e) as usize;
    let rt_btm_e = (chains.rt.btm + e) as usize;
    let rb_top_e = (chains.rb.top + e) as usize;

    let parallel = 2 * (chains.lb.btm + 1 - chains.lt.top) >= PARALLEL_CUTOFF;

    {
        let (seg_lt, rest) = left_map.split_at_mut(lt_btm_e);
        let (seg_lgap, seg_lb) = rest.split_at_mut(lb_top_e + 1 - lt_btm_e);
        let (seg_rt, rest) = right_map.split_at_mut(rt_btm_e);
        let (seg_rgap, seg_rb) = rest.split_at_mut(rb_top_e + 1 - rt_btm_e);
        let [run_lt, run_lb, run_rt, run_rb] = &mut *runs;

        let lt = &chains.lt;
        let lb = &chains.lb;
        let rt = &chains.rt;
        let rb = &chains.rb;

        // Constant boundary for the rows between the paired chains' inner
        // extremes.
        let x12 = lb.pts[0].x + e;
        let x34 = flip(rb.pts[0].x) + 1 + e;

        let tasks: Vec<Box<dyn FnOnce() + Send + '_>> = vec![
            Box::new(move || walk_chain(lt, Corner::LeftTop, e, antialias, seg_lt, 0, run_lt)),
            Box::new(move || {
                walk_chain(lb, Corner::LeftBottom, e, antialias, seg_lb, lb_top_e + 1, run_lb)
            }),
            Box::new(move || walk_chain(rt, Corner::RightTop, e, antialias, seg_rt, 0, run_rt)),
            Box::new(move || {
                walk_chain(rb, Corner::RightBottom, e, antialias, seg_rb, rb_top_e + 1, run_rb)
            }),
            Box::new(move || {
                for span in seg_lgap.iter_mut() {
                    *span = RowSpan { a: x12, b: x12, run: 0 };
                }
            }),
            Box::new(move || {
                for span in seg_rgap.iter_mut() {
                    *span = RowSpan { a: x34, b: x34, run: 0 };
                }
            }),
        ];
        run_tasks(parallel, tasks);
    }

    let top = chains.lt.top + e;
    let btm = chains.rb.btm + e;
    let dst_w = dst.width() as i32;
    let left_map = &*left_map;
    let right_map = &*right_map;
    let [run_lt, run_lb, run_rt, run_rb] = &*runs;

    dst.for_each_row_par(|y, mut row| {
        let yi = y as i32;
        if yi < top || yi > btm {
            fill_band(&mut row, 0, dst_w, dst_w, 0);
            return;
        }
        let l = left_map[y];
        let r = right_map[y];
        let lruns: &[i16] = if y < lt_btm_e { run_lt } else { run_lb };
        let rruns: &[i16] = if y < rt_btm_e { run_rt } else { run_rb };

        fill_band(&mut row, 0, l.a, dst_w, 0);
        write_run(&mut row, l, lruns);
        fill_band(&mut row, l.b, r.a, dst_w, MAX_ALPHA);
        write_run(&mut row, r, rruns);
        fill_band(&mut row, r.b, dst_w, dst_w, 0);
    });
}

/// Walks one chain's edges, recording a [`RowSpan`] per covered row into the
/// map segment (indexed relative to `base`) and, with anti-aliasing, the
/// row's coverage samples into the chain's run buffer in left-to-right order.
fn walk_chain(
    chain: &Chain,
    corner: Corner,
    e: i32,
    antialias: bool,
    map: &mut [RowSpan],
    base: usize,
    runs: &mut Vec<i16>,
) {
    if chain.pts.len() < 2 {
        return;
    }
    let right = corner.is_right();
    let bottom = corner.is_bottom();
    // Direction the edge moves along x as rows advance.
    let sign: i32 = if bottom != right { 1 } else { -1 };
    let to_dst_x = |x: i32| (if right { flip(x) } else { x }) + e;

    let mut stage: SmallVec<[i16; 8]> = SmallVec::new();
    let mut x0 = to_dst_x(chain.pts[0].x);
    let mut y0 = chain.pts[0].y + e;

    for p in &chain.pts[1..] {
        let x1 = to_dst_x(p.x);
        let y1 = p.y + e;
        let n = (x1 - x0) * sign;
        let d = y1 - y0;

        if !bottom {
            // Top chains cover rows [y0, y1); the terminal row belongs to the
            // corner gap fill or the bottom chain.
            if y0 < y1 {
                let mut pw = PixelWalker::new(n, d);
                let mut x = x0 + sign;
                let mut y = y0;
                while y < y1 {
                    if antialias {
                        let x_start = x;
                        stage.clear();
                        loop {
                            stage.push(pw.fill_rate());
                            if !pw.is_next_up() {
                                break;
                            }
                            pw.move_up();
                            x += sign;
                        }
                        write_span(map, base, y, x_start, x, sign, runs, &stage);
                    } else {
                        if pw.adjust_fullness() {
                            x += sign;
                        }
                        let split = if right { x } else { x + 1 };
                        map[y as usize - base] = RowSpan {
                            a: split,
                            b: split,
                            run: 0,
                        };
                        x += sign * pw.move_to_top() as i32;
                    }
                    pw.move_right();
                    y += 1;
                }
            }
        } else {
            // Bottom chains cover rows (y0, y1].
            if y0 < y1 {
                let mut pw = PixelWalker::new(n, d);
                let mut x = x0;
                let mut y = y0 + 1;
                while y <= y1 {
                    if antialias {
                        let x_start = x;
                        stage.clear();
                        loop {
                            stage.push(MAX_ALPHA - pw.fill_rate());
                            if !pw.is_next_up() {
                                break;
                            }
                            pw.move_up();
                            x += sign;
                        }
                        write_span(map, base, y, x_start, x, sign, runs, &stage);
                    } else {
                        x += sign * pw.move_to_top() as i32;
                        let split = if right { x } else { x + 1 };
                        map[y as usize - base] = RowSpan {
                            a: split,
                            b: split,
                            run: 0,
                        };
                    }
                    pw.move_right();
                    y += 1;
                }
            }
        }

        x0 = x1;
        y0 = y1;
    }
}

#[allow(clippy::too_many_arguments)]
fn write_span(
    map: &mut [RowSpan],
    base: usize,
    y: i32,
    x_start: i32,
    x_end: i32,
    sign: i32,
    runs: &mut Vec<i16>,
    stage: &[i16],
) {
    let (a, b) = if sign < 0 {
        (x_end, x_start + 1)
    } else {
        (x_start, x_end + 1)
    };
    let run = runs.len() as u32;
    if sign < 0 {
        runs.extend(stage.iter().rev().copied());
    } else {
        runs.extend_from_slice(stage);
    }
    map[y as usize - base] = RowSpan { a, b, run };
}

fn fill_band(row: &mut AlphaRowMut<'_>, from: i32, to: i32, width: i32, value: i16) {
    let from = from.clamp(0, width);
    let to = to.clamp(0, width);
    for x in from..to {
        row.set(x as usize, value);
    }
}

fn write_run(row: &mut AlphaRowMut<'_>, span: RowSpan, runs: &[i16]) {
    let n = (span.b - span.a).max(0) as usize;
    let start = span.run as usize;
    for (k, &value) in runs[start..start + n].iter().enumerate() {
        row.set((span.a + k as i32) as usize, value);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/scanline.rs"]
mod tests;
