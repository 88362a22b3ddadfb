//! Axis-aligned rectangles.

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// An axis-aligned rectangle given by its edge coordinates.
///
/// Invariant: `right >= left` and `bottom >= top` (y grows downward).
/// Callers normalize before construction; the operations here preserve the
/// invariant but do not re-check it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    /// Creates a rectangle from its edge coordinates.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a rectangle anchored at the origin with the given size.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Smallest rectangle containing every point in `points`. Degenerate
    /// (zero-size at the first point) for a single point; zero at the origin
    /// for an empty slice.
    pub fn bounds_of(points: &[Point]) -> Rect {
        let Some(&first) = points.first() else {
            return Rect::default();
        };
        let mut bounds = Rect::new(first.x, first.y, first.x, first.y);
        for &p in &points[1..] {
            bounds.extend_to(p);
        }
        bounds
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// True when the rectangle has no interior.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right, self.bottom)
    }

    /// The four corners in canonical order: top-left, top-right,
    /// bottom-right, bottom-left. This is clockwise in the y-down raster
    /// frame, and every corner-indexed caller (next/previous wrapping modulo
    /// 4) relies on it.
    pub fn corner_points(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.right, self.top),
            Point::new(self.right, self.bottom),
            Point::new(self.left, self.bottom),
        ]
    }

    /// Grows the bounds minimally to include `p`.
    pub fn extend_to(&mut self, p: Point) {
        self.left = self.left.min(p.x);
        self.top = self.top.min(p.y);
        self.right = self.right.max(p.x);
        self.bottom = self.bottom.max(p.y);
    }

    /// Translates the rectangle by `delta`.
    pub fn offset(&mut self, delta: Point) {
        self.left += delta.x;
        self.right += delta.x;
        self.top += delta.y;
        self.bottom += delta.y;
    }

    /// Shrinks the rectangle by `dx`/`dy` on each side; negative values grow
    /// it instead.
    pub fn inset(&mut self, dx: f64, dy: f64) {
        self.left += dx;
        self.right -= dx;
        self.top += dy;
        self.bottom -= dy;
    }

    /// Moves the rectangle so its center lands on `c`, preserving size.
    pub fn set_center(&mut self, c: Point) {
        let delta = c - self.center();
        self.offset(delta);
    }

    /// Rounds all edges to integer pixel boundaries.
    pub fn round(&mut self) {
        self.left = self.left.round();
        self.top = self.top.round();
        self.right = self.right.round();
        self.bottom = self.bottom.round();
    }

    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// True when `other` lies entirely within `self`.
    pub fn contains(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// The overlapping area of two rectangles, or `None` when they do not
    /// overlap with positive area.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let clip = Rect::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        );
        if clip.is_empty() {
            None
        } else {
            Some(clip)
        }
    }

    /// Computes the rectilinear area of `self` not covered by `other` as up
    /// to four non-overlapping residual strips, in the order top, bottom,
    /// left, right. Zero-area strips are omitted; the result is empty when
    /// `other` covers `self`, and `[self]` when the two do not overlap.
    pub fn subtract(&self, other: &Rect) -> Vec<Rect> {
        let Some(clip) = self.intersection(other) else {
            return vec![*self];
        };

        let mut strips = Vec::new();
        if clip.top > self.top {
            strips.push(Rect::new(self.left, self.top, self.right, clip.top));
        }
        if self.bottom > clip.bottom {
            strips.push(Rect::new(self.left, clip.bottom, self.right, self.bottom));
        }
        if clip.left > self.left {
            strips.push(Rect::new(self.left, clip.top, clip.left, clip.bottom));
        }
        if self.right > clip.right {
            strips.push(Rect::new(clip.right, clip.top, self.right, clip.bottom));
        }
        strips
    }
}
