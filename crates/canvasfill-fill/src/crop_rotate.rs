//! Exposed-region builder for the general rotated-crop case.
//!
//! The canvas has been rotated and a crop rect (given by its four corners in
//! final, rotated coordinates) applied over it. Both corner sets are brought
//! back into a common unrotated frame, the canvas is shrunk slightly to
//! create the overlap margin, and the exposed area is the crop outside the
//! canvas: either a single compound ring (canvas fully inside the crop) or
//! the output of the convex polygon clipper.

use canvasfill_core::FillMethod;
use canvasfill_geometry::{clip_convex, ClipMode, Point, Polygon, Rect};
use tracing::debug;

use crate::overlap::overlap_amount;
use crate::Region;

/// Computes the exposed region for a canvas of the given size rotated by
/// `angle_deg` degrees under the crop whose corners are `crop_corners`
/// (final coordinates, same order as [`Rect::corner_points`]).
///
/// Output polygons are in crop-relative coordinates with the crop bounds'
/// top-left at the origin.
pub fn crop_rotate_region(
    width: f64,
    height: f64,
    angle_deg: f64,
    crop_corners: [Point; 4],
    method: FillMethod,
) -> Region {
    let angle = angle_deg.to_radians();
    let canvas = Rect::from_size(width, height);

    // Undo the crop's rotation, applying the same turn to the canvas so both
    // are compared in one unrotated frame.
    let crop_center = Rect::bounds_of(&crop_corners).center();
    let mut doc_points = canvas.corner_points();
    let mut crop_points = crop_corners;
    for i in 0..4 {
        doc_points[i] = (doc_points[i] - crop_center).rotated(angle) + crop_center;
        crop_points[i] = (crop_points[i] - crop_center).rotated(angle) + crop_center;
    }

    // Re-offset so the crop bounds' top-left is the coordinate origin.
    let mut crop_rect = Rect::bounds_of(&crop_points);
    let offset = -crop_rect.top_left();
    crop_rect.offset(offset);
    for i in 0..4 {
        doc_points[i] = doc_points[i] + offset;
        crop_points[i] = crop_points[i] + offset;
    }

    // Shrink the canvas toward its center so the fill bleeds into the valid
    // image; the factor scales the overlap with the canvas diagonal.
    let diag = (width * width + height * height).sqrt();
    if diag == 0.0 {
        return Vec::new();
    }
    let shrink = (diag - overlap_amount(&canvas, method) * 2.0) / diag;
    let doc_center = Rect::bounds_of(&doc_points).center();
    for p in &mut doc_points {
        *p = (*p - doc_center) * shrink + doc_center;
    }

    // If the canvas sits completely inside the crop, no clipping is needed:
    // the exposed area is one ring, crop boundary minus canvas boundary.
    let doc_rect = Rect::bounds_of(&doc_points);
    if crop_rect.contains(&doc_rect) {
        debug!("canvas contained in crop, emitting compound ring");
        let mut ring: Vec<Point> = crop_points.to_vec();
        let mut inner: Vec<Point> = doc_points.to_vec();
        inner.reverse();
        inner.push(inner[0]); // close the inner boundary
        ring.extend(inner);
        // Close the outer boundary back along the seam.
        ring.push(ring[3]);
        ring.push(ring[0]);
        return vec![Polygon::new(ring)];
    }

    clip_convex(
        &Polygon::new(doc_points.to_vec()),
        &Polygon::new(crop_points.to_vec()),
        ClipMode::MinusSubject,
    )
}
