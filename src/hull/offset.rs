use crate::foundation::math::flip;
use crate::foundation::parallel::run_tasks;
use crate::hull::chain::{Chain, ChainPoint, ChainSet, Corner};

/// Offsets every chain outward by `margin`, one worker per chain when
/// `parallel` is set.
///
/// Offset vertices are written to `out` so the un-offset vertices of all
/// chains stay readable while neighbors borrow edge directions across shared
/// corners; the results are then swapped into the chains and each chain's row
/// extremes recomputed from its new vertices.
pub(crate) fn offset_chains(
    chains: &mut ChainSet,
    out: &mut [Vec<ChainPoint>; 4],
    margin: i32,
    width: i32,
    height: i32,
    handle_corner: bool,
    parallel: bool,
) {
    {
        let shared = &*chains;
        let [o_lt, o_lb, o_rt, o_rb] = &mut *out;
        let tasks: Vec<Box<dyn FnOnce() + Send + '_>> = vec![
            Box::new(move || {
                offset_chain(Corner::LeftTop, shared, margin, width, height, handle_corner, o_lt)
            }),
            Box::new(move || {
                offset_chain(Corner::LeftBottom, shared, margin, width, height, handle_corner, o_lb)
            }),
            Box::new(move || {
                offset_chain(Corner::RightTop, shared, margin, width, height, handle_corner, o_rt)
            }),
            Box::new(move || {
                offset_chain(Corner::RightBottom, shared, margin, width, height, handle_corner, o_rb)
            }),
        ];
        run_tasks(parallel, tasks);
    }

    for (i, corner) in Corner::ALL.iter().enumerate() {
        let chain = chains.get_mut(*corner);
        std::mem::swap(&mut chain.pts, &mut out[i]);
        chain.top = chain.pts[0].y;
        chain.btm = chain.pts[chain.pts.len() - 1].y;
    }
}

#[allow(clippy::too_many_arguments)]
fn offset_chain(
    corner: Corner,
    chains: &ChainSet,
    margin: i32,
    width: i32,
    height: i32,
    handle_corner: bool,
    out: &mut Vec<ChainPoint>,
) {
    let quad = chains.get(corner);
    let pts = quad.points();
    out.clear();

    if pts.len() < 2 {
        // Degenerate chain: translate the single vertex outward along both
        // axes (chain-local x always moves by -margin).
        let p = pts[0];
        out.push(ChainPoint {
            x: p.x - margin,
            y: p.y + if corner.is_bottom() { margin } else { -margin },
        });
        return;
    }

    // Clamp boundaries for the corner fallback, in chain-local coordinates.
    let (ext1, ext2, bd1, bd2) = match corner {
        Corner::LeftTop => (
            chains.get(Corner::RightTop),
            chains.get(Corner::LeftBottom),
            -margin,
            -margin,
        ),
        Corner::LeftBottom => (
            chains.get(Corner::LeftTop),
            chains.get(Corner::RightBottom),
            -margin,
            height + margin - 1,
        ),
        Corner::RightTop => (
            chains.get(Corner::LeftTop),
            chains.get(Corner::RightBottom),
            -margin,
            flip(width + margin - 1),
        ),
        Corner::RightBottom => (
            chains.get(Corner::RightTop),
            chains.get(Corner::LeftBottom),
            flip(width + margin - 1),
            height + margin - 1,
        ),
    };

    let mut p1 = pts[0];
    let (mut dx1, mut dy1) = head_direction(corner, p1, ext1, handle_corner);
    for p2 in &pts[1..] {
        let (dx2, dy2) = (p2.x - p1.x, p2.y - p1.y);
        out.push(extend_point(
            margin,
            p1,
            dx1,
            dy1,
            dx2,
            dy2,
            bd1,
            true,
            handle_corner,
        ));
        p1 = *p2;
        (dx1, dy1) = (dx2, dy2);
    }
    let (dx2, dy2) = tail_direction(corner, p1, ext2, handle_corner);
    out.push(extend_point(
        margin,
        p1,
        dx1,
        dy1,
        dx2,
        dy2,
        bd2,
        false,
        handle_corner,
    ));
}

/// Incoming edge direction for a chain's head vertex.
///
/// Borrowed from the neighbor across the shared corner when the neighbor has
/// at least two vertices and actually meets this chain there; otherwise the
/// corner's default cardinal direction.
fn head_direction(
    corner: Corner,
    head: ChainPoint,
    ext1: &Chain,
    handle_corner: bool,
) -> (i32, i32) {
    let npts = ext1.points();
    if corner.is_bottom() {
        if handle_corner && npts.len() > 1 && head.y == ext1.btm() {
            let p = npts[npts.len() - 2];
            (head.x - p.x, head.y - p.y)
        } else {
            (0, 1)
        }
    } else {
        // The opposite-side chain stores x flipped.
        if handle_corner && npts.len() > 1 && head.x == flip(npts[0].x) {
            let p = npts[1];
            (head.x - flip(p.x), head.y - p.y)
        } else {
            (-1, 0)
        }
    }
}

/// Outgoing edge direction for a chain's terminal vertex.
fn tail_direction(
    corner: Corner,
    tail: ChainPoint,
    ext2: &Chain,
    handle_corner: bool,
) -> (i32, i32) {
    let npts = ext2.points();
    if corner.is_bottom() {
        if handle_corner && npts.len() > 1 && tail.x == flip(npts[npts.len() - 1].x) {
            let p = npts[npts.len() - 2];
            (flip(p.x) - tail.x, p.y - tail.y)
        } else {
            (1, 0)
        }
    } else if handle_corner && npts.len() > 1 && tail.y == ext2.top() {
        let p = npts[1];
        (p.x - tail.x, p.y - tail.y)
    } else {
        (0, 1)
    }
}

/// Moves the two lines through `p1` with directions (dx1, dy1) and
/// (dx2, dy2) outward by `length` pixels along their own normals and returns
/// the rounded intersection of the moved lines.
///
/// When the slope signs of the two edges are inconsistent (concave or
/// axis-crossing join) and `handle_corner` is set, the miter intersection can
/// run away; the point is instead clamped to the extended-image boundary line
/// `bound` and slid along one edge (the outgoing edge for head vertices, the
/// incoming edge for the tail) until it sits on that boundary exactly.
#[allow(clippy::too_many_arguments)]
fn extend_point(
    length: i32,
    p1: ChainPoint,
    dx1: i32,
    dy1: i32,
    dx2: i32,
    dy2: i32,
    bound: i32,
    is_head: bool,
    handle_corner: bool,
) -> ChainPoint {
    let l1 = ((dx1 * dx1 + dy1 * dy1) as f32).sqrt();
    let l2 = ((dx2 * dx2 + dy2 * dy2) as f32).sqrt();

    if handle_corner && (dy1 < 0 || dy2 < 0 || dx1 * dx2 < 0) {
        let t = (dx1 * dy2 - dx2 * dy1) as f32;
        let mut ofs_x = -(dx1 as f32 * l2 - dx2 as f32 * l1) * length as f32 / t;
        let mut ofs_y = -(dy1 as f32 * l2 - dy2 as f32 * l1) * length as f32 / t;

        if dy1 < 0 || dy2 < 0 {
            let mut y = p1.y + ofs_y.round() as i32;
            let exceeds = if is_head { y < bound } else { y > bound };
            if exceeds {
                y = bound;
                ofs_y -= (bound - p1.y) as f32;
                ofs_x -= if is_head {
                    ofs_y * dx2 as f32 / dy2 as f32
                } else {
                    ofs_y * dx1 as f32 / dy1 as f32
                };
            }
            ChainPoint {
                x: p1.x + ofs_x.round() as i32,
                y,
            }
        } else {
            let mut x = p1.x + ofs_x.round() as i32;
            if x < bound {
                x = bound;
                ofs_x -= (bound - p1.x) as f32;
                ofs_y -= if is_head {
                    ofs_x * dy2 as f32 / dx2 as f32
                } else {
                    ofs_x * dy1 as f32 / dx1 as f32
                };
            }
            ChainPoint {
                x,
                y: p1.y + ofs_y.round() as i32,
            }
        }
    } else {
        // Convex join with consistent slopes: plain miter. The offset stays
        // within `length * sqrt(2)` of the vertex, inside the extended image.
        let s = ((dx1 as i64 * dy2 as i64 + dx2 as i64 * dy1 as i64) * length as i64) as f32;
        let ofs_x = -s / (dx2 as f32 * l1 + dx1 as f32 * l2);
        let ofs_y = s / (dy2 as f32 * l1 + dy1 as f32 * l2);
        ChainPoint {
            x: p1.x + ofs_x.round() as i32,
            y: p1.y + ofs_y.round() as i32,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hull/offset.rs"]
mod tests;
