//! Exposed-region builder for cropping without rotation.
//!
//! When the crop rect extends past the canvas on any side, the parts of the
//! crop outside the canvas are exactly the rectilinear residual strips of
//! `crop \ canvas`. Each strip becomes one closed polygon, grown by the
//! overlap margin so the synthesis has material to blend with.

use canvasfill_core::FillMethod;
use canvasfill_geometry::{Polygon, Rect};
use tracing::debug;

use crate::overlap::overlap_amount;
use crate::Region;

/// Computes the residual strips a crop rect exposes around a canvas of the
/// given size, as closed polygons in crop-relative coordinates.
///
/// The crop rect may extend outside the canvas on any side and is rounded
/// to integer pixel boundaries first (sub-pixel selections produce seam
/// artifacts). An empty result means the crop lies entirely within the
/// canvas and nothing needs synthesis.
pub fn crop_region(width: f64, height: f64, crop: Rect, method: FillMethod) -> Region {
    let canvas = Rect::from_size(width, height);

    // Force to pixel boundaries.
    let mut crop = crop;
    crop.round();

    let overlap = overlap_amount(&canvas, method);
    let offset = -crop.top_left();

    let strips = crop.subtract(&canvas);
    if strips.is_empty() {
        debug!(?crop, "crop fully covered by canvas, nothing to fill");
        return Vec::new();
    }

    // Move the crop rect into the same origin the strips are translated to.
    let mut crop_local = crop;
    crop_local.offset(offset);

    let mut region = Vec::with_capacity(strips.len());
    for mut strip in strips {
        strip.offset(offset);
        // Bleed into the still-valid image by the overlap margin.
        strip.inset(-overlap, -overlap);
        if method == FillMethod::GenerativeExpand {
            // The expanded selection must not leak past the new canvas edge
            // into background.
            match strip.intersection(&crop_local) {
                Some(clipped) => strip = clipped,
                None => continue,
            }
        }
        let mut points = strip.corner_points().to_vec();
        points.push(points[0]); // close polygon
        region.push(Polygon::new(points));
    }
    region
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvasfill_geometry::Point;

    #[test]
    fn crop_inside_canvas_is_empty() {
        let region = crop_region(
            768.0,
            512.0,
            Rect::new(10.0, 10.0, 700.0, 500.0),
            FillMethod::ContentAware,
        );
        assert!(region.is_empty());
    }

    #[test]
    fn crop_past_top_and_left_yields_two_strips() {
        // Canvas 768x512 with the crop hanging past the top and left edges.
        let region = crop_region(
            768.0,
            512.0,
            Rect::new(-36.0, -32.0, 724.0, 512.0),
            FillMethod::ContentAware,
        );
        assert_eq!(region.len(), 2);
        for poly in &region {
            assert_eq!(poly.len(), 5); // 4 corners + explicit close
            assert_eq!(poly.points()[0], poly.points()[4]);
        }

        // In crop-relative coordinates the top strip spans the full crop
        // width and reaches `overlap` below the canvas seam.
        let canvas = Rect::from_size(768.0, 512.0);
        let overlap = overlap_amount(&canvas, FillMethod::ContentAware);
        let top = Rect::bounds_of(region[0].points());
        assert_eq!(top.left, -overlap);
        assert_eq!(top.top, -overlap);
        assert_eq!(top.right, 760.0 + overlap);
        assert_eq!(top.bottom, 32.0 + overlap);
    }

    #[test]
    fn crop_past_all_sides_yields_four_strips() {
        let region = crop_region(
            100.0,
            100.0,
            Rect::new(-10.0, -10.0, 110.0, 110.0),
            FillMethod::ContentAware,
        );
        assert_eq!(region.len(), 4);
    }

    #[test]
    fn sub_pixel_crop_is_rounded() {
        let region = crop_region(
            100.0,
            100.0,
            Rect::new(-9.6, 0.4, 100.2, 99.7),
            FillMethod::ContentAware,
        );
        // Rounds to (-10, 0, 100, 100): only the left strip survives.
        assert_eq!(region.len(), 1);
        let strip = Rect::bounds_of(region[0].points());
        let overlap = overlap_amount(&Rect::from_size(100.0, 100.0), FillMethod::ContentAware);
        assert_eq!(strip.left, -overlap);
        assert_eq!(strip.right, 10.0 + overlap);
    }

    #[test]
    fn generative_expand_clips_strips_to_the_crop() {
        let crop = Rect::new(-36.0, -32.0, 724.0, 512.0);
        let region = crop_region(768.0, 512.0, crop, FillMethod::GenerativeExpand);
        assert_eq!(region.len(), 2);
        // No vertex may fall outside the crop-relative crop rect.
        let crop_local = Rect::new(0.0, 0.0, crop.width(), crop.height());
        for poly in &region {
            for &p in poly.points() {
                assert!(crop_local.contains_point(p), "{p:?} leaks past the crop");
            }
        }
    }

    #[test]
    fn strips_overlap_the_canvas_seam() {
        // The grown strips must actually bleed into the valid image area so
        // synthesis has context to blend against.
        let region = crop_region(
            768.0,
            512.0,
            Rect::new(-36.0, 0.0, 768.0, 512.0),
            FillMethod::ContentAware,
        );
        assert_eq!(region.len(), 1);
        // Canvas left edge sits at x = 36 in crop-relative coordinates.
        let strip = Rect::bounds_of(region[0].points());
        assert!(strip.right > 36.0);
        assert!(strip.contains_point(Point::new(37.0, 100.0)));
    }
}
