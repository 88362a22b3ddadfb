//! Exposed-region builder for rotation without cropping.
//!
//! Rotating a rectangular canvas inside its enclosing bounding box exposes
//! four slivers, one per corner. Each sliver is emitted as a 6-vertex
//! polygon: the triangle between the bounding-box corner and the rotated
//! edge, extended inward along that edge by the overlap margin.

use canvasfill_core::FillMethod;
use canvasfill_geometry::{Point, Polygon, Rect};
use tracing::debug;

use crate::overlap::overlap_amount;
use crate::Region;

/// Rotates `rect` about its own center and reports the rotated corners
/// together with their bounding box, re-origined so the bounding box's
/// top-left corner sits at (0, 0).
///
/// Corner order follows [`Rect::corner_points`]: top-left first, clockwise
/// in the y-down frame.
pub fn compute_rotation(angle_rad: f64, rect: Rect) -> ([Point; 4], Rect) {
    let mut rect = rect;
    rect.set_center(Point::ORIGIN);

    let mut points = rect.corner_points();
    for p in &mut points {
        *p = p.rotated(angle_rad);
    }

    let mut bounds = Rect::bounds_of(&points);
    bounds.offset(-bounds.top_left());
    let center = bounds.center();
    for p in &mut points {
        *p = *p + center;
    }
    (points, bounds)
}

/// Computes the four corner slivers exposed by rotating a canvas of the
/// given size by `angle_deg` degrees about its center.
///
/// Quarter-turn angles expose nothing and produce an empty region. For any
/// other angle the result is exactly four 6-vertex polygons, each closed
/// explicitly (last vertex repeats the first). The sign of the angle flips
/// which adjacent edge the sliver extends along, mirroring the geometry.
pub fn rotate_only_region(
    angle_deg: f64,
    width: f64,
    height: f64,
    method: FillMethod,
) -> Region {
    if angle_deg % 90.0 == 0.0 {
        debug!(angle_deg, "quarter-turn rotation exposes no corners");
        return Vec::new();
    }

    let angle = angle_deg.to_radians();
    let bounds = Rect::from_size(width, height);
    let (mut r, mut rotated_bounds) = compute_rotation(angle, bounds);

    // Avoid extra white margin on the sides.
    rotated_bounds.extend_to(rotated_bounds.bottom_right() + Point::new(1.0, 1.0));
    if angle > 0.0 {
        r[1].x += 1.0;
        r[2].y += 1.0;
    } else {
        r[2].x += 1.0;
        r[3].y += 1.0;
    }

    let overlap = overlap_amount(&bounds, method);
    let b = rotated_bounds.corner_points();

    let mut region = Vec::with_capacity(4);
    for i in 0..4 {
        let poly = if angle > 0.0 {
            let edge = next(&r, i) - r[i];
            let Some(dir) = edge.normalized() else {
                continue; // zero-size canvas
            };
            let offset = dir * overlap;
            Polygon::new(vec![
                prev(&r, i),
                b[i],
                r[i],
                r[i] + offset,
                prev(&r, i) + offset,
                prev(&r, i),
            ])
        } else {
            let edge = prev(&r, i) - r[i];
            let Some(dir) = edge.normalized() else {
                continue;
            };
            let offset = dir * overlap;
            Polygon::new(vec![
                r[i],
                b[i],
                next(&r, i),
                next(&r, i) + offset,
                r[i] + offset,
                r[i],
            ])
        };
        region.push(poly);
    }
    region
}

/// Next corner on the four-point ring, wrapping around.
fn next(points: &[Point; 4], i: usize) -> Point {
    points[(i + 1) % 4]
}

/// Previous corner on the four-point ring, wrapping around.
fn prev(points: &[Point; 4], i: usize) -> Point {
    points[(i + 3) % 4]
}
