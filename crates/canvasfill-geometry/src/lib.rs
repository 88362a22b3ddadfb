//! # Canvasfill Geometry
//!
//! Pure 2D geometry for computing the regions a raster canvas exposes when it
//! is rotated or cropped:
//!
//! - **Point**: 2D point/vector arithmetic, rotation about the origin,
//!   normalization
//! - **Rect**: axis-aligned rectangles with corner extraction, bounds folding
//!   and rectilinear subtraction into residual strips
//! - **Polygon**: ordered vertex lists forming simple closed shapes
//! - **Clipper**: convex polygon intersection and subtraction via successive
//!   half-plane clipping
//!
//! Everything in this crate is synchronous, side-effect free and never
//! panics on degenerate input; malformed configurations produce empty
//! results for the callers to interpret as "nothing to fill".

pub mod clip;
pub mod point;
pub mod polygon;
pub mod rect;

pub use clip::{clip_convex, ClipMode, CLIP_EPSILON};
pub use point::Point;
pub use polygon::Polygon;
pub use rect::Rect;
