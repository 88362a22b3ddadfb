//! Convex polygon intersection and subtraction.
//!
//! The clipper works by successive half-plane clipping against the edges of
//! the first polygon (Sutherland–Hodgman generalized to subtraction). It is
//! the one place in the geometry stack with an epsilon policy: the inputs
//! here are always rotation-derived rectangles at pixel scale, so an
//! absolute tolerance is sufficient.

use crate::point::Point;
use crate::polygon::Polygon;

/// Absolute tolerance for point-on-edge and parallel-edge decisions.
///
/// Coordinates are pixel-scale (magnitudes up to roughly 1e4), where 1e-6 is
/// far below any visible sliver but comfortably above accumulated rounding
/// from a rotate/translate round trip.
pub const CLIP_EPSILON: f64 = 1e-6;

/// How the two polygons are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipMode {
    /// The region common to both polygons.
    Intersection,
    /// The parts of the second polygon lying outside the first.
    MinusSubject,
}

/// Clips convex polygon `b` against convex polygon `a`.
///
/// Both inputs must be convex and non-self-intersecting. The result is a
/// list of disjoint convex polygons: at most one for `Intersection`, up to
/// one per edge of `a` for `MinusSubject` (convex-minus-convex is generally
/// non-convex, hence the decomposition).
///
/// Degenerate configurations never panic. Inputs the clipper cannot resolve
/// (fewer than three distinct vertices, non-convex vertex lists) produce an
/// empty result, which callers treat as "no fill needed". Callers that care
/// about the fully-contained / fully-disjoint cases pre-test containment
/// before invoking the clipper.
pub fn clip_convex(a: &Polygon, b: &Polygon, mode: ClipMode) -> Vec<Polygon> {
    let a_pts = dedup_ring(a.points());
    let b_pts = dedup_ring(b.points());
    if a_pts.len() < 3 || b_pts.len() < 3 {
        return Vec::new();
    }
    if !is_convex(&a_pts) || !is_convex(&b_pts) {
        return Vec::new();
    }
    let orient = ring_orientation(&a_pts);
    if orient == 0.0 {
        return Vec::new();
    }

    match mode {
        ClipMode::Intersection => {
            let mut current = b_pts;
            for (p, q) in edges(&a_pts) {
                current = clip_half_plane(&current, p, q, orient, Side::Inside);
                if current.len() < 3 {
                    return Vec::new();
                }
            }
            if ring_area(&current) <= CLIP_EPSILON {
                return Vec::new();
            }
            vec![Polygon::new(current)]
        }
        ClipMode::MinusSubject => {
            // For edge i, collect the part of b outside edge i but inside
            // edges 0..i. The pieces are convex and pairwise disjoint.
            let mut remaining = b_pts;
            let mut out = Vec::new();
            for (p, q) in edges(&a_pts) {
                let outside = clip_half_plane(&remaining, p, q, orient, Side::Outside);
                if outside.len() >= 3 && ring_area(&outside) > CLIP_EPSILON {
                    out.push(Polygon::new(outside));
                }
                remaining = clip_half_plane(&remaining, p, q, orient, Side::Inside);
                if remaining.len() < 3 {
                    break;
                }
            }
            out
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Inside,
    Outside,
}

/// Clips `points` against the half-plane bounded by the directed edge
/// `a -> b`, keeping the requested side. Points within [`CLIP_EPSILON`] of
/// the edge line are kept on both sides; the resulting zero-area slivers are
/// filtered by the caller.
fn clip_half_plane(points: &[Point], a: Point, b: Point, orient: f64, side: Side) -> Vec<Point> {
    let n = points.len();
    let mut out = Vec::with_capacity(n + 1);
    for i in 0..n {
        let cur = points[i];
        let next = points[(i + 1) % n];
        let d_cur = signed_side(a, b, cur, orient);
        let d_next = signed_side(a, b, next, orient);
        let (keep_cur, keep_next) = match side {
            Side::Inside => (d_cur >= -CLIP_EPSILON, d_next >= -CLIP_EPSILON),
            Side::Outside => (d_cur <= CLIP_EPSILON, d_next <= CLIP_EPSILON),
        };
        if keep_cur {
            out.push(cur);
        }
        if keep_cur != keep_next {
            let denom = d_cur - d_next;
            // A near-zero denominator means the segment runs parallel along
            // the edge line; the keep flags already handled it.
            if denom.abs() > f64::EPSILON {
                let t = d_cur / denom;
                out.push(cur + (next - cur) * t);
            }
        }
    }
    dedup_ring(&out)
}

/// Distance-like quantity: positive when `p` lies on the interior side of
/// edge `a -> b` for a polygon wound with orientation `orient`.
fn signed_side(a: Point, b: Point, p: Point, orient: f64) -> f64 {
    (b - a).cross(p - a) * orient
}

fn edges(points: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (points[i], points[(i + 1) % n]))
}

/// Removes consecutive duplicate vertices (including an explicit closing
/// vertex equal to the first).
fn dedup_ring(points: &[Point]) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points {
        if out
            .last()
            .is_some_and(|last| last.approx_eq(p, CLIP_EPSILON))
        {
            continue;
        }
        out.push(p);
    }
    while out.len() > 1 && out[0].approx_eq(out[out.len() - 1], CLIP_EPSILON) {
        out.pop();
    }
    out
}

fn ring_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        sum += points[i].cross(points[(i + 1) % n]);
    }
    (sum / 2.0).abs()
}

/// Sign of the ring's signed area: +1 clockwise (y-down), -1
/// counter-clockwise, 0 degenerate.
fn ring_orientation(points: &[Point]) -> f64 {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        sum += points[i].cross(points[(i + 1) % n]);
    }
    if sum.abs() <= CLIP_EPSILON {
        0.0
    } else {
        sum.signum()
    }
}

/// Convexity check tolerant of collinear runs: no two edge turns may have
/// opposite signs beyond [`CLIP_EPSILON`].
fn is_convex(points: &[Point]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut sign = 0.0f64;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        let turn = (b - a).cross(c - b);
        if turn.abs() <= CLIP_EPSILON {
            continue;
        }
        if sign == 0.0 {
            sign = turn.signum();
        } else if turn.signum() != sign {
            return false;
        }
    }
    sign != 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rect::Rect;

    fn rect_poly(left: f64, top: f64, right: f64, bottom: f64) -> Polygon {
        Polygon::new(Rect::new(left, top, right, bottom).corner_points().to_vec())
    }

    fn total_area(polys: &[Polygon]) -> f64 {
        polys.iter().map(Polygon::area).sum()
    }

    #[test]
    fn intersection_of_overlapping_squares() {
        let a = rect_poly(0.0, 0.0, 2.0, 2.0);
        let b = rect_poly(1.0, 1.0, 3.0, 3.0);
        let result = clip_convex(&a, &b, ClipMode::Intersection);
        assert_eq!(result.len(), 1);
        assert!((result[0].area() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn intersection_of_disjoint_squares_is_empty() {
        let a = rect_poly(0.0, 0.0, 1.0, 1.0);
        let b = rect_poly(5.0, 5.0, 6.0, 6.0);
        assert!(clip_convex(&a, &b, ClipMode::Intersection).is_empty());
    }

    #[test]
    fn subtraction_of_overlapping_squares() {
        let a = rect_poly(0.0, 0.0, 2.0, 2.0);
        let b = rect_poly(1.0, 1.0, 3.0, 3.0);
        let result = clip_convex(&a, &b, ClipMode::MinusSubject);
        // b \ a is an L-shape of area 3, decomposed into convex pieces.
        assert!(!result.is_empty());
        assert!((total_area(&result) - 3.0).abs() < 1e-9);
        // No output vertex may end up strictly inside a.
        let mut shrunk = Rect::new(0.0, 0.0, 2.0, 2.0);
        shrunk.inset(CLIP_EPSILON, CLIP_EPSILON);
        for poly in &result {
            for &v in poly.points() {
                assert!(
                    !shrunk.contains_point(v),
                    "vertex {v:?} inside the subtracted polygon"
                );
            }
        }
    }

    #[test]
    fn subtraction_when_b_inside_a_is_empty() {
        let a = rect_poly(0.0, 0.0, 10.0, 10.0);
        let b = rect_poly(2.0, 2.0, 4.0, 4.0);
        assert!(clip_convex(&a, &b, ClipMode::MinusSubject).is_empty());
    }

    #[test]
    fn subtraction_of_disjoint_returns_whole_b() {
        let a = rect_poly(0.0, 0.0, 1.0, 1.0);
        let b = rect_poly(5.0, 5.0, 7.0, 7.0);
        let result = clip_convex(&a, &b, ClipMode::MinusSubject);
        assert!((total_area(&result) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn shared_edge_does_not_panic_or_leak_area() {
        // b sits flush against a's right edge; the shared edge is exactly
        // coincident, the classic degenerate input.
        let a = rect_poly(0.0, 0.0, 2.0, 2.0);
        let b = rect_poly(2.0, 0.0, 4.0, 2.0);
        let result = clip_convex(&a, &b, ClipMode::MinusSubject);
        assert!((total_area(&result) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn vertex_on_edge_is_tolerated() {
        let a = rect_poly(0.0, 0.0, 2.0, 2.0);
        // A triangle with one vertex exactly on a's top edge.
        let b = Polygon::new(vec![
            Point::new(1.0, 0.0),
            Point::new(3.0, -2.0),
            Point::new(3.0, 2.0),
        ]);
        let result = clip_convex(&a, &b, ClipMode::MinusSubject);
        let inter = clip_convex(&a, &b, ClipMode::Intersection);
        let whole = b.area();
        let covered = inter.first().map(Polygon::area).unwrap_or(0.0);
        assert!((total_area(&result) - (whole - covered)).abs() < 1e-6);
    }

    #[test]
    fn non_convex_input_yields_empty_result() {
        let a = rect_poly(0.0, 0.0, 4.0, 4.0);
        let dart = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(2.0, 1.0), // reflex vertex
            Point::new(4.0, 4.0),
        ]);
        assert!(clip_convex(&a, &dart, ClipMode::MinusSubject).is_empty());
        assert!(clip_convex(&dart, &a, ClipMode::MinusSubject).is_empty());
    }

    #[test]
    fn degenerate_inputs_yield_empty_result() {
        let a = rect_poly(0.0, 0.0, 2.0, 2.0);
        let line = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert!(clip_convex(&a, &line, ClipMode::MinusSubject).is_empty());
        assert!(clip_convex(&line, &a, ClipMode::Intersection).is_empty());
    }

    #[test]
    fn counter_clockwise_subject_is_handled() {
        let a = rect_poly(0.0, 0.0, 2.0, 2.0).reversed();
        let b = rect_poly(1.0, 1.0, 3.0, 3.0);
        let result = clip_convex(&a, &b, ClipMode::MinusSubject);
        assert!((total_area(&result) - 3.0).abs() < 1e-9);
    }
}
