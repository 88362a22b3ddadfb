//! The fill-overlap heuristic.

use canvasfill_core::FillMethod;
use canvasfill_geometry::Rect;

/// Amount the fill area overlaps the still-valid image, in pixels.
///
/// Synthesis needs some valid source material to blend against, so every
/// region bleeds inward by this margin. The formula grows slowly with the
/// canvas area and was arrived at empirically; it never drops below 5.
///
/// Generative expand gets no geometric overlap at all: the service
/// pre-dilates its own mask instead.
pub fn overlap_amount(bounds: &Rect, method: FillMethod) -> f64 {
    if method == FillMethod::GenerativeExpand {
        return 0.0;
    }
    let overlap = (bounds.area().sqrt() * 5.0 - 18.0).ln();
    // NaN from tiny areas falls through to the floor.
    if overlap.is_finite() && overlap > 5.0 {
        overlap
    } else {
        5.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn floor_is_five() {
        let tiny = Rect::from_size(4.0, 4.0);
        assert_eq!(overlap_amount(&tiny, FillMethod::ContentAware), 5.0);
        let degenerate = Rect::from_size(0.0, 0.0);
        assert_eq!(overlap_amount(&degenerate, FillMethod::ContentAware), 5.0);
    }

    #[test]
    fn large_canvas_exceeds_floor() {
        let canvas = Rect::from_size(3072.0, 2048.0);
        let overlap = overlap_amount(&canvas, FillMethod::ContentAware);
        assert!(overlap > 5.0);
        assert!(overlap < 20.0, "overlap grows slowly: {overlap}");
    }

    #[test]
    fn generative_expand_has_no_overlap() {
        let canvas = Rect::from_size(3072.0, 2048.0);
        assert_eq!(overlap_amount(&canvas, FillMethod::GenerativeExpand), 0.0);
    }

    proptest! {
        #[test]
        fn monotone_in_area_and_never_below_floor(
            w1 in 1.0f64..8192.0,
            h1 in 1.0f64..8192.0,
            grow in 1.0f64..4.0,
        ) {
            let small = Rect::from_size(w1, h1);
            let large = Rect::from_size(w1 * grow, h1 * grow);
            let a = overlap_amount(&small, FillMethod::ContentAware);
            let b = overlap_amount(&large, FillMethod::ContentAware);
            prop_assert!(a >= 5.0);
            prop_assert!(b >= a);
        }
    }
}
