//! Core geometry types for sketchpath.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = lets you print with `{:?}`
//! - `Clone` / `Copy` = duplicate the value (Copy only for small stack values)
//! - `PartialEq` = can compare with `==`
//!
//! `Point` and `Line` are `Copy`: they are plain values with no identity.

use thiserror::Error;

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A line segment defined by two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Axis-aligned bounds of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// A closed boundary polygon.
///
/// The last vertex implicitly connects back to the first, so a square
/// needs only its four corners.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    /// Boundary vertices in drawing order
    pub outer: Vec<Point>,
    /// Optional ID from the SVG element
    pub id: Option<String>,
}

/// Errors raised by the coordinate adapters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("coordinate lists differ in length: {xs} x values, {ys} y values")]
    LengthMismatch { xs: usize, ys: usize },
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    #[inline]
    pub fn distance_squared(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl Line {
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Build a line from two points.
    #[inline]
    pub fn between(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }
}

impl BoundingBox {
    /// Bounds of a point sequence, `None` when it is empty.
    ///
    /// ## Rust Lesson #6: Option<T>
    ///
    /// There is no `null` in Rust. An empty input simply has no bounds,
    /// and the type says so: callers must handle `None`.
    pub fn of_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let init = BoundingBox {
            left: first.x,
            right: first.x,
            top: first.y,
            bottom: first.y,
        };
        Some(rest.iter().fold(init, |bb, p| BoundingBox {
            left: bb.left.min(p.x),
            right: bb.right.max(p.x),
            top: bb.top.min(p.y),
            bottom: bb.bottom.max(p.y),
        }))
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Grow the box by `amount` on every side.
    pub fn inflate(&self, amount: f64) -> Self {
        BoundingBox {
            left: self.left - amount,
            right: self.right + amount,
            top: self.top - amount,
            bottom: self.bottom + amount,
        }
    }
}

impl Polygon {
    /// Create a polygon from its boundary vertices.
    pub fn new(outer: Vec<Point>) -> Self {
        Self { outer, id: None }
    }

    /// Create a polygon with an ID.
    pub fn with_id(outer: Vec<Point>, id: Option<String>) -> Self {
        Self { outer, id }
    }

    /// Build a polygon from parallel x and y coordinate lists.
    ///
    /// `xs[i]` pairs with `ys[i]`; lists of different length are rejected.
    pub fn from_coords(xs: &[f64], ys: &[f64]) -> Result<Self, GeometryError> {
        if xs.len() != ys.len() {
            return Err(GeometryError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        let outer = xs.iter().zip(ys).map(|(&x, &y)| Point::new(x, y)).collect();
        Ok(Self::new(outer))
    }

    /// Number of boundary vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.outer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outer.is_empty()
    }

    /// Get the bounding box of the boundary.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::of_points(&self.outer)
    }

    /// Iterate over boundary edges, including the closing edge back to the
    /// first vertex.
    pub fn edges(&self) -> impl Iterator<Item = Line> + '_ {
        let n = self.outer.len();
        (0..n).map(move |i| Line::between(self.outer[i], self.outer[(i + 1) % n]))
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(outer: Vec<Point>) -> Self {
        Polygon::new(outer)
    }
}

// ============================================================================
// TESTS
// ============================================================================
