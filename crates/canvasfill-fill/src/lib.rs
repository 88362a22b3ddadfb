//! # Canvasfill Fill
//!
//! Computes the regions a canvas exposes when rotated and/or cropped, and
//! dispatches them to the host's selection and synthesis capabilities.
//!
//! Three case builders produce the exposed-region polygons:
//!
//! - [`rotate_only_region`]: rotation without cropping leaves four corner
//!   slivers between the rotated canvas and its bounding box
//! - [`crop_region`]: cropping without rotation leaves up to four
//!   axis-aligned residual strips
//! - [`crop_rotate_region`]: the general case, resolved either as a single
//!   compound ring (crop fully contains the canvas) or via the convex
//!   polygon clipper
//!
//! [`FillDispatcher`] then converts a region into replace/add selection
//! calls plus exactly one synthesis invocation, wrapped in a single undo
//! history entry.

pub mod crop;
pub mod crop_rotate;
pub mod dispatch;
pub mod overlap;
pub mod rotate_only;

pub use crop::crop_region;
pub use crop_rotate::crop_rotate_region;
pub use dispatch::{FillDispatcher, FillOutcome};
pub use overlap::overlap_amount;
pub use rotate_only::{compute_rotation, rotate_only_region};

use canvasfill_geometry::Polygon;

/// An ordered list of disjoint exposed-region polygons.
///
/// The first polygon replaces the host selection; every subsequent polygon
/// is added to it.
pub type Region = Vec<Polygon>;
