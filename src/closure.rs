use crate::foundation::error::{MaskhullError, MaskhullResult};
use crate::foundation::math::MAX_ALPHA;
use crate::foundation::parallel::PARALLEL_CUTOFF;
use crate::hull::chain::{ChainPoint, ChainSet};
use crate::hull::graham::build_chains;
use crate::hull::offset::offset_chains;
use crate::hull::scan::scan_bounds;
use crate::plane::alpha::{AlphaPlane, AlphaPlaneMut};
use crate::raster::scanline::{RowSpan, rasterize};

/// Maximum supported width or height of the output plane.
///
/// Bounding the plane keeps every coordinate product in the kernel within
/// `i32` (margin-scaled offset products are widened to `i64` where needed).
pub const MAX_PLANE_DIM: usize = 1 << 13;

/// Validated configuration for one closure computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClosureParams {
    /// Outward offset applied to the hull, in pixels; the output plane grows
    /// by `margin` on every side.
    pub margin: u32,
    /// Opacity threshold: a sample is opaque iff it exceeds this value.
    pub threshold: i16,
    /// Whether edges get fractional coverage values.
    pub antialias: bool,
    /// Whether the offsetter clamps runaway miters at concave or
    /// axis-crossing joins; leave on unless replicating the unclamped
    /// geometry is required.
    pub handle_corner: bool,
}

impl ClosureParams {
    /// Creates validated params.
    pub fn new(
        margin: u32,
        threshold: i16,
        antialias: bool,
        handle_corner: bool,
    ) -> MaskhullResult<Self> {
        if !(0..MAX_ALPHA).contains(&threshold) {
            return Err(MaskhullError::validation(format!(
                "threshold must be in 0..{MAX_ALPHA}"
            )));
        }
        if 2 * margin as usize >= MAX_PLANE_DIM {
            return Err(MaskhullError::validation(format!(
                "margin {margin} leaves no room within the maximum plane size"
            )));
        }
        Ok(Self {
            margin,
            threshold,
            antialias,
            handle_corner,
        })
    }
}

impl Default for ClosureParams {
    fn default() -> Self {
        Self {
            margin: 0,
            threshold: (MAX_ALPHA - 1) / 2,
            antialias: true,
            handle_corner: true,
        }
    }
}

/// Reusable scratch arena for the closure kernel.
///
/// Holds the per-row boundary maps, the four chains, the offset vertex
/// buffers, the rasterization row maps and the coverage runs. The kernel
/// takes it by exclusive reference, so one arena serves exactly one
/// invocation at a time; buffer capacity is retained across calls.
#[derive(Debug, Default)]
pub struct ClosureScratch {
    pub(crate) left_bound: Vec<i32>,
    pub(crate) right_bound: Vec<i32>,
    pub(crate) chains: ChainSet,
    pub(crate) offset_pts: [Vec<ChainPoint>; 4],
    pub(crate) left_map: Vec<RowSpan>,
    pub(crate) right_map: Vec<RowSpan>,
    pub(crate) runs: [Vec<i16>; 4],
}

impl ClosureScratch {
    /// Creates an empty arena; buffers grow on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// The hull chains from the most recent computation.
    pub fn chains(&self) -> &ChainSet {
        &self.chains
    }

    fn prepare(&mut self, height: usize, dst_height: usize) {
        self.left_bound.clear();
        self.left_bound.resize(height, 0);
        self.right_bound.clear();
        self.right_bound.resize(height, 0);
        self.left_map.clear();
        self.left_map.resize(dst_height + 1, RowSpan::default());
        self.right_map.clear();
        self.right_map.resize(dst_height + 1, RowSpan::default());
        for run in &mut self.runs {
            run.clear();
        }
    }
}

fn check_src_dims(src: &AlphaPlane<'_>) -> MaskhullResult<()> {
    if src.width() > MAX_PLANE_DIM || src.height() > MAX_PLANE_DIM {
        return Err(MaskhullError::validation(format!(
            "source plane exceeds the maximum supported dimension {MAX_PLANE_DIM}"
        )));
    }
    Ok(())
}

/// Scan + chain construction; `scratch` must be prepared. Returns false for
/// an empty mask.
fn build_hull(src: &AlphaPlane<'_>, threshold: i16, scratch: &mut ClosureScratch) -> bool {
    let Some(bounds) = scan_bounds(
        src,
        threshold,
        &mut scratch.left_bound,
        &mut scratch.right_bound,
    ) else {
        return false;
    };
    scratch
        .chains
        .init(&bounds, &scratch.left_bound, &scratch.right_bound);

    let parallel = 2 * (bounds.btm - bounds.top + 1) >= PARALLEL_CUTOFF;
    build_chains(
        &mut scratch.chains,
        &scratch.left_bound,
        &scratch.right_bound,
        parallel,
    );
    true
}

/// Computes the convex hull chains of the opaque region without rasterizing.
///
/// Returns `Ok(false)` when no sample exceeds `threshold`. On success the
/// chains are available through [`ClosureScratch::chains`].
pub fn compute_hull(
    src: &AlphaPlane<'_>,
    threshold: i16,
    scratch: &mut ClosureScratch,
) -> MaskhullResult<bool> {
    check_src_dims(src)?;
    scratch.prepare(src.height(), 0);
    Ok(build_hull(src, threshold, scratch))
}

/// Computes the convex closure of the opaque region of `src` and rasterizes
/// it into `dst`.
///
/// `dst` must be sized `(width + 2*margin) x (height + 2*margin)`. Returns
/// `Ok(false)` when the mask has no opaque sample; `dst` is left unwritten in
/// that case and the caller must treat the operation as a no-op (see
/// [`crate::backdrop::pass_through`]). With anti-aliasing enabled, edge
/// pixels hold fractional coverage in `0..=4096`; otherwise every sample is
/// exactly 0 or 4096.
#[tracing::instrument(skip_all, fields(
    width = src.width(),
    height = src.height(),
    margin = params.margin,
))]
pub fn compute_convex_closure(
    src: &AlphaPlane<'_>,
    dst: &mut AlphaPlaneMut<'_>,
    params: &ClosureParams,
    scratch: &mut ClosureScratch,
) -> MaskhullResult<bool> {
    check_src_dims(src)?;
    let m = params.margin as usize;
    let dst_w = src.width() + 2 * m;
    let dst_h = src.height() + 2 * m;
    if dst_w > MAX_PLANE_DIM || dst_h > MAX_PLANE_DIM {
        return Err(MaskhullError::validation(format!(
            "output plane exceeds the maximum supported dimension {MAX_PLANE_DIM}"
        )));
    }
    if dst.width() != dst_w || dst.height() != dst_h {
        return Err(MaskhullError::validation(format!(
            "destination plane must be {dst_w}x{dst_h} (source plus margin on every side)"
        )));
    }

    scratch.prepare(src.height(), dst_h);
    if !build_hull(src, params.threshold, scratch) {
        tracing::debug!("mask has no opaque sample");
        return Ok(false);
    }

    if params.margin > 0 {
        let total = total_vertices(&scratch.chains);
        offset_chains(
            &mut scratch.chains,
            &mut scratch.offset_pts,
            params.margin as i32,
            src.width() as i32,
            src.height() as i32,
            params.handle_corner,
            total >= PARALLEL_CUTOFF,
        );
    }

    rasterize(
        &scratch.chains,
        &mut scratch.left_map,
        &mut scratch.right_map,
        &mut scratch.runs,
        params.margin as i32,
        params.antialias,
        dst,
    );
    Ok(true)
}

fn total_vertices(chains: &ChainSet) -> i32 {
    (chains.lt.pts.len() + chains.lb.pts.len() + chains.rt.pts.len() + chains.rb.pts.len()) as i32
}

#[cfg(test)]
#[path = "../tests/unit/closure.rs"]
mod tests;
