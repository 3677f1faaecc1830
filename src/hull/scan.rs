use rayon::prelude::*;

use crate::foundation::math::flip;
use crate::foundation::parallel::parallel_for;
use crate::plane::alpha::AlphaPlane;

/// Global extrema of the opaque region, produced by [`scan_bounds`].
///
/// `l_min_top..=l_min_btm` is the contiguous row range attaining the smallest
/// left boundary, `r_max_top..=r_max_btm` the range attaining the largest
/// right boundary; together with `top`/`btm` they define the four chain spans.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BoundsSummary {
    pub(crate) top: i32,
    pub(crate) btm: i32,
    pub(crate) l_min_top: i32,
    pub(crate) l_min_btm: i32,
    pub(crate) r_max_top: i32,
    pub(crate) r_max_btm: i32,
}

/// Per-worker partial extrema; the right boundary is tracked in flipped
/// coordinates so smaller means further right.
#[derive(Clone, Copy, Debug)]
struct BoundsPartial {
    top: i32,
    btm: i32,
    l_min: i32,
    l_min_top: i32,
    l_min_btm: i32,
    r_max: i32,
    r_max_top: i32,
    r_max_btm: i32,
}

impl BoundsPartial {
    fn empty(width: i32, height: i32) -> Self {
        Self {
            top: height,
            btm: -1,
            l_min: width,
            l_min_top: height,
            l_min_btm: -1,
            r_max: flip(-1),
            r_max_top: height,
            r_max_btm: -1,
        }
    }

    fn fold_row(&mut self, y: i32, left_x: i32, right_x: i32) {
        if self.top > y {
            self.top = y;
        }
        self.btm = y;

        if left_x <= self.l_min {
            if left_x < self.l_min {
                self.l_min = left_x;
                self.l_min_top = y;
            }
            self.l_min_btm = y;
        }

        if right_x <= self.r_max {
            if right_x < self.r_max {
                self.r_max = right_x;
                self.r_max_top = y;
            }
            self.r_max_btm = y;
        }
    }

    fn merge(&mut self, other: &BoundsPartial) {
        if other.top > other.btm {
            return;
        }

        self.top = self.top.min(other.top);
        self.btm = self.btm.max(other.btm);

        if self.l_min == other.l_min {
            self.l_min_top = self.l_min_top.min(other.l_min_top);
            self.l_min_btm = self.l_min_btm.max(other.l_min_btm);
        } else if self.l_min > other.l_min {
            self.l_min = other.l_min;
            self.l_min_top = other.l_min_top;
            self.l_min_btm = other.l_min_btm;
        }

        if self.r_max == other.r_max {
            self.r_max_top = self.r_max_top.min(other.r_max_top);
            self.r_max_btm = self.r_max_btm.max(other.r_max_btm);
        } else if self.r_max > other.r_max {
            self.r_max = other.r_max;
            self.r_max_top = other.r_max_top;
            self.r_max_btm = other.r_max_btm;
        }
    }
}

/// Scans the mask for per-row opaque boundaries and reduces them to the
/// global extrema.
///
/// Fills `left` with the first opaque column per row (sentinel `width` for
/// rows with none) and `right` with the flipped last opaque column (sentinel
/// `flip(-1)`), then reduces ordered per-worker partials sequentially.
/// Returns `None` when no sample exceeds the threshold.
pub(crate) fn scan_bounds(
    src: &AlphaPlane<'_>,
    threshold: i16,
    left: &mut [i32],
    right: &mut [i32],
) -> Option<BoundsSummary> {
    let w = src.width();
    let h = src.height();

    left.par_iter_mut()
        .zip(right.par_iter_mut())
        .enumerate()
        .for_each(|(y, (l, r))| {
            let row = src.row(y);
            let mut x = 0;
            while x < w {
                if row.get(x) > threshold {
                    break;
                }
                x += 1;
            }
            if x == w {
                // Row is fully transparent.
                *l = w as i32;
                *r = flip(-1);
                return;
            }
            *l = x as i32;

            let mut xr = w - 1;
            while row.get(xr) <= threshold {
                xr -= 1;
            }
            *r = flip(xr as i32);
        });

    let partials = parallel_for(h, |worker, workers| {
        let y0 = h * worker / workers;
        let y1 = h * (worker + 1) / workers;
        let mut p = BoundsPartial::empty(w as i32, h as i32);
        for y in y0..y1 {
            let l = left[y];
            if l == w as i32 {
                continue;
            }
            p.fold_row(y as i32, l, right[y]);
        }
        p
    });

    let mut acc = BoundsPartial::empty(w as i32, h as i32);
    for p in &partials {
        acc.merge(p);
    }

    if acc.top > acc.btm {
        return None;
    }
    Some(BoundsSummary {
        top: acc.top,
        btm: acc.btm,
        l_min_top: acc.l_min_top,
        l_min_btm: acc.l_min_btm,
        r_max_top: acc.r_max_top,
        r_max_btm: acc.r_max_btm,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/hull/scan.rs"]
mod tests;
