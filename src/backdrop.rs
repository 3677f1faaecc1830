//! Composites the rasterized closure plane as a backdrop under a source
//! frame.
//!
//! After [`compute_convex_closure`](crate::compute_convex_closure) has
//! written the closure mask into the destination frame's alpha channel, these
//! passes paint a solid color or a tiled pattern under the source using that
//! mask as the backdrop weight. When the kernel reported an empty mask,
//! [`pass_through`] provides the degraded behavior instead.

use rayon::prelude::*;

use crate::foundation::error::{MaskhullError, MaskhullResult};
use crate::foundation::math::{LOG2_MAX_ALPHA, MAX_ALPHA, scale_alpha};
use crate::plane::frame::{Frame, Rgb8, TilePattern};

/// Opacity weights for backdrop compositing, both on the 0..=4096 scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BackdropParams {
    /// Weight applied to the closure mask before it paints the backdrop.
    pub backdrop_alpha: i32,
    /// Weight applied to the source frame's own alpha.
    pub source_alpha: i32,
}

impl BackdropParams {
    /// Creates validated weights.
    pub fn new(backdrop_alpha: i32, source_alpha: i32) -> MaskhullResult<Self> {
        for (name, v) in [
            ("backdrop_alpha", backdrop_alpha),
            ("source_alpha", source_alpha),
        ] {
            if !(0..=i32::from(MAX_ALPHA)).contains(&v) {
                return Err(MaskhullError::validation(format!(
                    "{name} must be in 0..={MAX_ALPHA}"
                )));
            }
        }
        Ok(Self {
            backdrop_alpha,
            source_alpha,
        })
    }
}

impl Default for BackdropParams {
    fn default() -> Self {
        Self {
            backdrop_alpha: i32::from(MAX_ALPHA),
            source_alpha: i32::from(MAX_ALPHA),
        }
    }
}

fn check_dims(dst: &Frame, src: &Frame, margin: usize) -> MaskhullResult<()> {
    if dst.width() != src.width() + 2 * margin || dst.height() != src.height() + 2 * margin {
        return Err(MaskhullError::validation(
            "destination frame must be the source plus margin on every side",
        ));
    }
    Ok(())
}

/// Straight-alpha weighted-average blend of the source pixel over the
/// backdrop color.
fn blend(
    back: i16,
    src_color: Rgb8,
    src_alpha: i16,
    col: Rgb8,
    col_alpha: Option<i16>,
    params: &BackdropParams,
) -> (Rgb8, i16) {
    let a = (params.source_alpha * i32::from(src_alpha)) >> LOG2_MAX_ALPHA;
    if a >= i32::from(MAX_ALPHA) {
        return (src_color, src_alpha);
    }

    let mut big_a = (params.backdrop_alpha * i32::from(back)) >> LOG2_MAX_ALPHA;
    if big_a <= 0 {
        return (src_color, a as i16);
    }
    if let Some(ca) = col_alpha {
        big_a = (big_a * i32::from(ca)) >> LOG2_MAX_ALPHA;
    }
    if a <= 0 {
        return (col, big_a as i16);
    }

    big_a = ((i32::from(MAX_ALPHA) - a) * big_a) >> LOG2_MAX_ALPHA;
    let mix = |s: u8, c: u8| -> u8 {
        ((a * i32::from(s) + big_a * i32::from(c)) / (a + big_a)) as u8
    };
    (
        Rgb8 {
            r: mix(src_color.r, col.r),
            g: mix(src_color.g, col.g),
            b: mix(src_color.b, col.b),
        },
        (a + big_a) as i16,
    )
}

/// Paints the closure mask under `src` as a solid color.
///
/// `dst`'s alpha channel must hold the closure plane written by
/// [`compute_convex_closure`](crate::compute_convex_closure); its pixels are
/// replaced with the composited result.
pub fn composite_solid(
    dst: &mut Frame,
    src: &Frame,
    margin: usize,
    color: Rgb8,
    params: &BackdropParams,
) -> MaskhullResult<()> {
    check_dims(dst, src, margin)?;
    let dst_w = dst.width();
    let dst_h = dst.height();
    let src_w = src.width();
    let (src_color, src_alpha) = src.parts();
    let (dc, da) = dst.parts_mut();

    dc.par_chunks_mut(dst_w)
        .zip(da.par_chunks_mut(dst_w))
        .enumerate()
        .for_each(|(y, (crow, arow))| {
            let border_row = y < margin || y >= dst_h - margin;
            for x in 0..dst_w {
                let inside = !border_row && x >= margin && x < margin + src_w;
                if inside {
                    let i = (y - margin) * src_w + (x - margin);
                    let (c, a) = blend(arow[x], src_color[i], src_alpha[i], color, None, params);
                    crow[x] = c;
                    arow[x] = a;
                } else {
                    crow[x] = color;
                    arow[x] = scale_alpha(params.backdrop_alpha, arow[x]);
                }
            }
        });
    Ok(())
}

/// Paints the closure mask under `src` as a tiled pattern; the pattern's own
/// alpha scales the backdrop weight per pixel.
pub fn composite_pattern(
    dst: &mut Frame,
    src: &Frame,
    margin: usize,
    pattern: &TilePattern,
    params: &BackdropParams,
) -> MaskhullResult<()> {
    check_dims(dst, src, margin)?;
    let dst_w = dst.width();
    let dst_h = dst.height();
    let src_w = src.width();
    let (src_color, src_alpha) = src.parts();
    let (dc, da) = dst.parts_mut();

    dc.par_chunks_mut(dst_w)
        .zip(da.par_chunks_mut(dst_w))
        .enumerate()
        .for_each(|(y, (crow, arow))| {
            let border_row = y < margin || y >= dst_h - margin;
            for x in 0..dst_w {
                let inside = !border_row && x >= margin && x < margin + src_w;
                if inside {
                    let i = (y - margin) * src_w + (x - margin);
                    let (pc, pa) = pattern.sample(x, y);
                    let (c, a) = blend(
                        arow[x],
                        src_color[i],
                        src_alpha[i],
                        pc,
                        Some(pa),
                        params,
                    );
                    crow[x] = c;
                    arow[x] = a;
                } else {
                    let weight = scale_alpha(params.backdrop_alpha, arow[x]);
                    if weight <= 0 {
                        arow[x] = 0;
                        continue;
                    }
                    let (pc, pa) = pattern.sample(x, y);
                    crow[x] = pc;
                    arow[x] = scale_alpha(i32::from(weight), pa);
                }
            }
        });
    Ok(())
}

/// Degraded behavior for an empty mask: centers the source in the expanded
/// output, clears the margin border, and scales the source alpha by
/// `source_alpha` when it is below full.
pub fn pass_through(
    dst: &mut Frame,
    src: &Frame,
    margin: usize,
    params: &BackdropParams,
) -> MaskhullResult<()> {
    check_dims(dst, src, margin)?;
    let dst_w = dst.width();
    let dst_h = dst.height();
    let src_w = src.width();
    let scale = params.source_alpha < i32::from(MAX_ALPHA);
    let (src_color, src_alpha) = src.parts();
    let (dc, da) = dst.parts_mut();

    dc.par_chunks_mut(dst_w)
        .zip(da.par_chunks_mut(dst_w))
        .enumerate()
        .for_each(|(y, (crow, arow))| {
            if y < margin || y >= dst_h - margin {
                arow.fill(0);
                return;
            }
            arow[..margin].fill(0);
            arow[margin + src_w..].fill(0);
            let i0 = (y - margin) * src_w;
            crow[margin..margin + src_w].copy_from_slice(&src_color[i0..i0 + src_w]);
            if scale {
                for (a, &sa) in arow[margin..margin + src_w]
                    .iter_mut()
                    .zip(&src_alpha[i0..i0 + src_w])
                {
                    *a = scale_alpha(params.source_alpha, sa);
                }
            } else {
                arow[margin..margin + src_w].copy_from_slice(&src_alpha[i0..i0 + src_w]);
            }
        });
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/backdrop.rs"]
mod tests;
