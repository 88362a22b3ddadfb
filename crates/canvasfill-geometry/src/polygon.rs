//! Closed polygons as ordered vertex lists.

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// An ordered sequence of vertices forming a simple closed shape.
///
/// The closing edge from the last vertex back to the first is implicit;
/// some producers push the first vertex again to close explicitly, which the
/// area and containment math tolerates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Signed shoelace area. Positive for clockwise winding in the y-down
    /// raster frame.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let p = self.points[i];
            let q = self.points[(i + 1) % n];
            sum += p.cross(q);
        }
        sum / 2.0
    }

    /// Absolute enclosed area.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// The same vertices in reverse order.
    pub fn reversed(&self) -> Polygon {
        let mut points = self.points.clone();
        points.reverse();
        Polygon::new(points)
    }

    /// Convex containment test, tolerant of either winding. A point within
    /// `eps` of an edge counts as inside. Returns `false` for degenerate
    /// polygons with fewer than three vertices.
    pub fn contains_point(&self, p: Point, eps: f64) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        let mut sign = 0.0f64;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            if a.approx_eq(b, eps) {
                continue; // explicit closing vertex or duplicate
            }
            let side = (b - a).cross(p - a);
            if side.abs() <= eps {
                continue; // on the edge line
            }
            if sign == 0.0 {
                sign = side.signum();
            } else if side.signum() != sign {
                return false;
            }
        }
        true
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Polygon::new(points)
    }
}
