use crate::foundation::math::MAX_ALPHA;

/// Fixed-point state machine for walking one hull edge a row at a time.
///
/// Models the area `d*y <= n*(x-1) + s` inside the unit cell `0 <= x,y <= 1`:
/// `slope_n`/`slope_d` are the edge's positive slope numerator and
/// denominator, `state` the fractional remainder. Stepping to the next row
/// adds `n` ([`move_right`](Self::move_right)); crossing into the next pixel
/// column subtracts `d` ([`move_up`](Self::move_up)). All three values stay
/// positive across the walk.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PixelWalker {
    slope_n: u32,
    slope_d: u32,
    state: u32,
}

impl PixelWalker {
    /// `n` is the edge's span along x (non-negative for hull chains), `d` its
    /// span along y (callers only walk edges with `d >= 1`).
    pub(crate) fn new(n: i32, d: i32) -> Self {
        debug_assert!(d >= 1);
        Self {
            slope_n: n as u32,
            slope_d: d as u32,
            state: n as u32,
        }
    }

    /// Whether the walk crosses into the next pixel column before the next
    /// row.
    pub(crate) fn is_next_up(&self) -> bool {
        self.state > self.slope_d
    }

    /// Steps all remaining columns of the current row at once and returns how
    /// many were crossed. Requires `state >= 1`.
    pub(crate) fn move_to_top(&mut self) -> u32 {
        debug_assert!(self.state >= 1);
        let q = (self.state - 1) / self.slope_d;
        let r = (self.state - 1) % self.slope_d;
        self.state = r + 1;
        q
    }

    /// Consumes a fully covered cell if present; returns whether one was
    /// stepped over.
    pub(crate) fn adjust_fullness(&mut self) -> bool {
        if self.state >= self.slope_n + self.slope_d {
            self.move_up();
            true
        } else {
            false
        }
    }

    /// Crosses into the next pixel column.
    pub(crate) fn move_up(&mut self) {
        self.state -= self.slope_d;
    }

    /// Advances to the next row.
    pub(crate) fn move_right(&mut self) {
        self.state += self.slope_n;
    }

    /// Quantized coverage of the line within the current unit cell.
    ///
    /// One of three closed-form quadratics depending on whether the line
    /// crosses the cell through its top, its sides, or its bottom:
    ///
    /// - `s >= d, s >= n`: `1 - (n+d-s)^2 / (2nd)` (corner cut at the top)
    /// - `s >= d, s <  n`: `(s - d/2) / n` (crosses left and right sides)
    /// - `s <  d, s >= n`: `(s - n/2) / d` (crosses top and bottom)
    /// - `s <  n, s <  d`: `s^2 / (2nd)` (corner cut at the bottom)
    pub(crate) fn fill_rate(&self) -> i16 {
        let n = u64::from(self.slope_n);
        let d = u64::from(self.slope_d);
        let s = u64::from(self.state);
        let max = MAX_ALPHA as u64;
        if s >= d {
            if s >= n {
                let a = n + d - s;
                (max - (max * a * a) / (2 * n * d)) as i16
            } else {
                ((max * (2 * s - d)) / (2 * n)) as i16
            }
        } else if s >= n {
            ((max * (2 * s - n)) / (2 * d)) as i16
        } else {
            ((max * s * s) / (2 * n * d)) as i16
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/walker.rs"]
mod tests;
