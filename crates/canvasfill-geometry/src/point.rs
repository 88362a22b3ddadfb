//! 2D point and vector arithmetic.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Represents a 2D point with X and Y coordinates.
///
/// Doubles as a 2D vector for offsets and edge directions. Coordinates live
/// in the raster frame: X grows to the right, Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The coordinate origin.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point rotated by `angle_rad` radians about the origin.
    ///
    /// Callers rotating about an arbitrary pivot must translate first so the
    /// pivot sits at the origin, then translate back. In the y-down raster
    /// frame a positive angle turns clockwise on screen.
    pub fn rotated(self, angle_rad: f64) -> Point {
        let (sin_a, cos_a) = angle_rad.sin_cos();
        Point {
            x: self.x * cos_a - self.y * sin_a,
            y: self.x * sin_a + self.y * cos_a,
        }
    }

    /// Euclidean length of the vector from the origin to this point.
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Returns the unit vector in the direction of this point, or `None` for
    /// the zero vector. Callers must guard before normalizing a potentially
    /// zero-length edge.
    pub fn normalized(self) -> Option<Point> {
        let len = self.length();
        if len == 0.0 {
            return None;
        }
        Some(Point {
            x: self.x / len,
            y: self.y / len,
        })
    }

    /// Calculates the distance to another point.
    pub fn distance_to(self, other: Point) -> f64 {
        (other - self).length()
    }

    /// 2D cross product (z component of the 3D cross product) of `self` and
    /// `other` as vectors.
    pub fn cross(self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Component-wise equality within `eps`.
    pub fn approx_eq(self, other: Point, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-9;

    #[test]
    fn rotate_quarter_turn() {
        let p = Point::new(1.0, 0.0).rotated(FRAC_PI_2);
        assert!(p.approx_eq(Point::new(0.0, 1.0), EPS));
    }

    #[test]
    fn rotate_negative_angle_mirrors() {
        let p = Point::new(1.0, 0.0);
        let cw = p.rotated(0.3);
        let ccw = p.rotated(-0.3);
        assert!((cw.x - ccw.x).abs() <= EPS);
        assert!((cw.y + ccw.y).abs() <= EPS);
    }

    #[test]
    fn normalize_unit_length() {
        let n = Point::new(3.0, 4.0).normalized().unwrap();
        assert!((n.length() - 1.0).abs() <= EPS);
        assert!(n.approx_eq(Point::new(0.6, 0.8), EPS));
    }

    #[test]
    fn normalize_zero_vector_is_none() {
        assert!(Point::ORIGIN.normalized().is_none());
    }

    #[test]
    fn vector_arithmetic() {
        let a = Point::new(2.0, 3.0);
        let b = Point::new(-1.0, 5.0);
        assert_eq!(a + b, Point::new(1.0, 8.0));
        assert_eq!(a - b, Point::new(3.0, -2.0));
        assert_eq!(-a, Point::new(-2.0, -3.0));
        assert_eq!(a * 2.0, Point::new(4.0, 6.0));
    }
}
