//! Path operations produced by every primitive.
//!
//! ## Rust Lesson #10: Enums (Sum Types)
//!
//! A `PathOp` is exactly one of move, cubic curve or line. Each variant
//! carries only the points it needs, and a `match` over it must handle
//! all three, so a serializer can never forget one.

use crate::geometry::Point;

/// A single drawing instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "op", rename_all = "camelCase")
)]
pub enum PathOp {
    /// Lift the pen and put it down at `point`.
    Move { point: Point },
    /// Cubic Bézier from the current position to `end`.
    CurveTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Straight line from the current position to `point`.
    LineTo { point: Point },
}

impl PathOp {
    /// The position the pen is at after this op.
    pub fn end_point(&self) -> Point {
        match self {
            PathOp::Move { point } | PathOp::LineTo { point } => *point,
            PathOp::CurveTo { end, .. } => *end,
        }
    }

    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, PathOp::Move { .. })
    }

    #[inline]
    pub fn is_curve(&self) -> bool {
        matches!(self, PathOp::CurveTo { .. })
    }
}

/// What a drawable describes. Paths are the only kind today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum DrawableKind {
    #[default]
    Path,
}

/// The output of every public primitive: an ordered list of path ops.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Drawable {
    pub kind: DrawableKind,
    pub ops: Vec<PathOp>,
}

impl Drawable {
    /// Wrap ops as a path drawable.
    pub fn path(ops: Vec<PathOp>) -> Self {
        Self {
            kind: DrawableKind::Path,
            ops,
        }
    }

    /// A path with no ops.
    pub fn empty() -> Self {
        Self::path(Vec::new())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Append another drawable's ops after this one's.
    pub fn extend(&mut self, other: Drawable) {
        self.ops.extend(other.ops);
    }

    /// Number of cubic curve ops.
    pub fn curve_count(&self) -> usize {
        self.ops.iter().filter(|op| op.is_curve()).count()
    }

    /// Number of move ops.
    pub fn move_count(&self) -> usize {
        self.ops.iter().filter(|op| op.is_move()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_point_per_variant() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(PathOp::Move { point: a }.end_point(), a);
        assert_eq!(PathOp::LineTo { point: b }.end_point(), b);
        let curve = PathOp::CurveTo {
            control1: a,
            control2: a,
            end: b,
        };
        assert_eq!(curve.end_point(), b);
    }

    #[test]
    fn extend_keeps_order() {
        let mut first = Drawable::path(vec![PathOp::Move {
            point: Point::new(0.0, 0.0),
        }]);
        first.extend(Drawable::path(vec![PathOp::LineTo {
            point: Point::new(1.0, 1.0),
        }]));
        assert_eq!(first.len(), 2);
        assert!(first.ops[0].is_move());
        assert_eq!(first.move_count(), 1);
        assert_eq!(first.curve_count(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ops_serialize_with_tag() {
        let op = PathOp::LineTo {
            point: Point::new(1.0, 2.0),
        };
        let json = serde_json::to_string(&op).unwrap();
        assert_eq!(json, r#"{"op":"lineTo","point":{"x":1.0,"y":2.0}}"#);

        let drawable = Drawable::empty();
        let json = serde_json::to_string(&drawable).unwrap();
        assert_eq!(json, r#"{"kind":"path","ops":[]}"#);
    }
}
