use crate::foundation::error::{MaskhullError, MaskhullResult};
use crate::plane::alpha::{AlphaPlane, AlphaPlaneMut};

/// 8-bit RGB color sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// Owned frame with planar color and fixed-point alpha channels.
///
/// Color and alpha are parallel row-major buffers of `width * height`
/// samples; alpha is on the 0..=4096 scale ([`crate::MAX_ALPHA`]). The alpha
/// channel doubles as an [`AlphaPlane`] for the closure kernel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    color: Vec<Rgb8>,
    alpha: Vec<i16>,
}

impl Frame {
    /// Creates a transparent black frame.
    pub fn new(width: usize, height: usize) -> MaskhullResult<Self> {
        if width == 0 || height == 0 {
            return Err(MaskhullError::validation("frame dimensions must be > 0"));
        }
        Ok(Self {
            width,
            height,
            color: vec![Rgb8::default(); width * height],
            alpha: vec![0; width * height],
        })
    }

    /// Creates a frame from existing channel buffers.
    pub fn from_parts(
        width: usize,
        height: usize,
        color: Vec<Rgb8>,
        alpha: Vec<i16>,
    ) -> MaskhullResult<Self> {
        if width == 0 || height == 0 {
            return Err(MaskhullError::validation("frame dimensions must be > 0"));
        }
        let n = width * height;
        if color.len() != n || alpha.len() != n {
            return Err(MaskhullError::validation(format!(
                "frame channels must hold {n} samples"
            )));
        }
        Ok(Self {
            width,
            height,
            color,
            alpha,
        })
    }

    /// Frame width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Color channel, row-major.
    pub fn color(&self) -> &[Rgb8] {
        &self.color
    }

    /// Alpha channel, row-major, 0..=4096 scale.
    pub fn alpha(&self) -> &[i16] {
        &self.alpha
    }

    /// Writes one pixel.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgb8, alpha: i16) {
        let i = y * self.width + x;
        self.color[i] = color;
        self.alpha[i] = alpha;
    }

    /// Views the alpha channel as a read-only plane.
    pub fn alpha_plane(&self) -> AlphaPlane<'_> {
        AlphaPlane::from_rows(&self.alpha, self.width, self.height)
            .expect("frame invariant: alpha buffer matches dimensions")
    }

    /// Views the alpha channel as a mutable plane.
    pub fn alpha_plane_mut(&mut self) -> AlphaPlaneMut<'_> {
        AlphaPlaneMut::from_rows(&mut self.alpha, self.width, self.height)
            .expect("frame invariant: alpha buffer matches dimensions")
    }

    pub(crate) fn parts(&self) -> (&[Rgb8], &[i16]) {
        (&self.color, &self.alpha)
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut [Rgb8], &mut [i16]) {
        (&mut self.color, &mut self.alpha)
    }
}

/// Repeating pattern sampled with wrapping coordinates and a phase offset.
///
/// Used by [`crate::backdrop`] to paint a tiled backdrop; the pattern's own
/// alpha scales the backdrop weight per pixel.
#[derive(Clone, Debug)]
pub struct TilePattern {
    width: usize,
    height: usize,
    phase_x: usize,
    phase_y: usize,
    color: Vec<Rgb8>,
    alpha: Vec<i16>,
}

impl TilePattern {
    /// Creates a pattern from channel buffers and a (possibly negative) phase
    /// offset in pixels.
    pub fn new(
        width: usize,
        height: usize,
        color: Vec<Rgb8>,
        alpha: Vec<i16>,
        phase_x: i32,
        phase_y: i32,
    ) -> MaskhullResult<Self> {
        if width == 0 || height == 0 {
            return Err(MaskhullError::validation("pattern dimensions must be > 0"));
        }
        let n = width * height;
        if color.len() != n || alpha.len() != n {
            return Err(MaskhullError::validation(format!(
                "pattern channels must hold {n} samples"
            )));
        }
        Ok(Self {
            width,
            height,
            phase_x: phase_x.rem_euclid(width as i32) as usize,
            phase_y: phase_y.rem_euclid(height as i32) as usize,
            color,
            alpha,
        })
    }

    /// Pattern width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Pattern height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Samples the pattern at destination coordinates, wrapping modulo the
    /// pattern size after applying the phase offset.
    pub fn sample(&self, x: usize, y: usize) -> (Rgb8, i16) {
        let px = (x + self.phase_x) % self.width;
        let py = (y + self.phase_y) % self.height;
        let i = py * self.width + px;
        (self.color[i], self.alpha[i])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plane/frame.rs"]
mod tests;
