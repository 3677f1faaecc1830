use rayon::prelude::*;

use crate::foundation::error::{MaskhullError, MaskhullResult};

/// Read-only strided view over a width×height grid of fixed-point alpha
/// samples.
///
/// Rows and columns have independent strides (in `i16` elements) so the view
/// can address non-contiguous layouts, e.g. the alpha channel of an
/// interleaved frame (`col_step` 4) or a padded row pitch.
#[derive(Clone, Copy, Debug)]
pub struct AlphaPlane<'a> {
    data: &'a [i16],
    width: usize,
    height: usize,
    col_step: usize,
    row_stride: usize,
}

/// Mutable counterpart of [`AlphaPlane`].
#[derive(Debug)]
pub struct AlphaPlaneMut<'a> {
    data: &'a mut [i16],
    width: usize,
    height: usize,
    col_step: usize,
    row_stride: usize,
}

fn check_layout(
    len: usize,
    width: usize,
    height: usize,
    col_step: usize,
    row_stride: usize,
) -> MaskhullResult<()> {
    if width == 0 || height == 0 {
        return Err(MaskhullError::validation("plane dimensions must be > 0"));
    }
    if col_step == 0 {
        return Err(MaskhullError::validation("plane col_step must be > 0"));
    }
    let row_extent = (width - 1) * col_step + 1;
    // Rows must not overlap; parallel stages hand out rows as disjoint slices.
    if row_stride < row_extent {
        return Err(MaskhullError::validation(
            "plane row_stride must cover a full row",
        ));
    }
    let needed = (height - 1) * row_stride + row_extent;
    if len < needed {
        return Err(MaskhullError::validation(format!(
            "plane buffer too small: {len} elements, layout needs {needed}"
        )));
    }
    Ok(())
}

impl<'a> AlphaPlane<'a> {
    /// Creates a validated view with explicit strides.
    pub fn new(
        data: &'a [i16],
        width: usize,
        height: usize,
        col_step: usize,
        row_stride: usize,
    ) -> MaskhullResult<Self> {
        check_layout(data.len(), width, height, col_step, row_stride)?;
        Ok(Self {
            data,
            width,
            height,
            col_step,
            row_stride,
        })
    }

    /// Creates a view over a dense row-major buffer (`col_step` 1,
    /// `row_stride` = width).
    pub fn from_rows(data: &'a [i16], width: usize, height: usize) -> MaskhullResult<Self> {
        Self::new(data, width, height, 1, width)
    }

    /// Plane width in samples.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Plane height in samples.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Reads the sample at (x, y).
    pub fn sample(&self, x: usize, y: usize) -> i16 {
        self.data[y * self.row_stride + x * self.col_step]
    }

    pub(crate) fn row(&self, y: usize) -> AlphaRow<'a> {
        AlphaRow {
            data: &self.data[y * self.row_stride..],
            col_step: self.col_step,
        }
    }
}

/// Read access to a single plane row.
pub(crate) struct AlphaRow<'a> {
    data: &'a [i16],
    col_step: usize,
}

impl AlphaRow<'_> {
    pub(crate) fn get(&self, x: usize) -> i16 {
        self.data[x * self.col_step]
    }
}

impl<'a> AlphaPlaneMut<'a> {
    /// Creates a validated mutable view with explicit strides.
    pub fn new(
        data: &'a mut [i16],
        width: usize,
        height: usize,
        col_step: usize,
        row_stride: usize,
    ) -> MaskhullResult<Self> {
        check_layout(data.len(), width, height, col_step, row_stride)?;
        Ok(Self {
            data,
            width,
            height,
            col_step,
            row_stride,
        })
    }

    /// Creates a mutable view over a dense row-major buffer.
    pub fn from_rows(data: &'a mut [i16], width: usize, height: usize) -> MaskhullResult<Self> {
        Self::new(data, width, height, 1, width)
    }

    /// Plane width in samples.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Plane height in samples.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Reads the sample at (x, y).
    pub fn sample(&self, x: usize, y: usize) -> i16 {
        self.data[y * self.row_stride + x * self.col_step]
    }

    /// Writes the sample at (x, y).
    pub fn set(&mut self, x: usize, y: usize, value: i16) {
        self.data[y * self.row_stride + x * self.col_step] = value;
    }

    /// Runs `f` over every row in parallel; rows are handed out as disjoint
    /// mutable slices so no synchronization is needed.
    pub(crate) fn for_each_row_par<F>(&mut self, f: F)
    where
        F: Fn(usize, AlphaRowMut<'_>) + Sync,
    {
        let col_step = self.col_step;
        self.data
            .par_chunks_mut(self.row_stride)
            .take(self.height)
            .enumerate()
            .for_each(|(y, chunk)| {
                f(
                    y,
                    AlphaRowMut {
                        data: chunk,
                        col_step,
                    },
                )
            });
    }
}

/// Write access to a single plane row.
pub(crate) struct AlphaRowMut<'a> {
    data: &'a mut [i16],
    col_step: usize,
}

impl AlphaRowMut<'_> {
    pub(crate) fn set(&mut self, x: usize, value: i16) {
        self.data[x * self.col_step] = value;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plane/alpha.rs"]
mod tests;
