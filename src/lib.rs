//! Maskhull computes the convex closure of the opaque region of a fixed-point
//! alpha mask and rasterizes it back into an alpha plane.
//!
//! The pipeline has four data-parallel stages:
//!
//! - Scan the mask for per-row opaque boundaries and global extrema
//! - Build the four monotone hull chains with a streaming Graham scan
//! - Optionally offset the hull polygon outward by a margin
//! - Rasterize the polygon into the destination plane, with optional
//!   anti-aliased edges
//!
//! The main entry point is [`compute_convex_closure`]; [`compute_hull`] stops
//! after hull construction for callers that only need the polygon. The
//! [`backdrop`] module composites the rasterized closure as a solid or tiled
//! fill under a source frame.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod closure;
mod foundation;
mod hull;
mod plane;
mod raster;

pub mod backdrop;

pub use crate::closure::{
    ClosureParams, ClosureScratch, MAX_PLANE_DIM, compute_convex_closure, compute_hull,
};
pub use crate::foundation::error::{MaskhullError, MaskhullResult};
pub use crate::foundation::math::{LOG2_MAX_ALPHA, MAX_ALPHA};
pub use crate::foundation::parallel::{parallel_for, parallel_for_if};
pub use crate::hull::chain::{Chain, ChainPoint, ChainSet, Corner};
pub use crate::plane::alpha::{AlphaPlane, AlphaPlaneMut};
pub use crate::plane::frame::{Frame, Rgb8, TilePattern};
