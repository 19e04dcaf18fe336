//! Segment relation test used by the hachure fill.
//!
//! This is the HOT PATH of a fill: every scan line is tested against every
//! boundary edge.

use crate::geometry::{Line, Point};

/// Tolerance on the segment parameters so crossings exactly at an
/// endpoint still count.
const PARAM_EPSILON: f64 = 1e-9;

/// Below this the segments are treated as parallel.
const PARALLEL_EPSILON: f64 = 1e-10;

/// How two segments relate to each other.
///
/// ## Rust Lesson #10: Enums (Sum Types)
///
/// Only the `Intersects` variant carries a point, so there is no
/// "intersection" to read by mistake when the segments are disjoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Relation {
    Disjoint,
    /// Both segments lie on the same infinite line.
    Collinear,
    Intersects(Point),
}

/// Classifies a pair of segments.
///
/// Plain functions and closures with the right signature implement this,
/// so a fill can be driven by a custom test.
pub trait SegmentRelation {
    fn relate(&self, a: &Line, b: &Line) -> Relation;
}

impl<F> SegmentRelation for F
where
    F: Fn(&Line, &Line) -> Relation,
{
    #[inline]
    fn relate(&self, a: &Line, b: &Line) -> Relation {
        self(a, b)
    }
}

/// Default segment relation test.
///
/// Zero-length segments are disjoint from everything. Parallel segments
/// are collinear when they share a supporting line, otherwise disjoint.
/// Crossing segments report the crossing point.
#[inline]
pub fn relate_segments(a: &Line, b: &Line) -> Relation {
    let (x1, y1, x2, y2) = (a.x1, a.y1, a.x2, a.y2);
    let (x3, y3, x4, y4) = (b.x1, b.y1, b.x2, b.y2);

    let dx1 = x2 - x1;
    let dy1 = y2 - y1;
    let dx2 = x4 - x3;
    let dy2 = y4 - y3;

    if (dx1 == 0.0 && dy1 == 0.0) || (dx2 == 0.0 && dy2 == 0.0) {
        return Relation::Disjoint;
    }

    let denom = dy2 * dx1 - dx2 * dy1;

    if denom.abs() < PARALLEL_EPSILON {
        // Cross product of a's direction with (b.start - a.start)
        let cross = dx1 * (y3 - y1) - dy1 * (x3 - x1);
        return if cross.abs() < PARALLEL_EPSILON {
            Relation::Collinear
        } else {
            Relation::Disjoint
        };
    }

    let ua = (dx2 * (y1 - y3) - dy2 * (x1 - x3)) / denom;
    let ub = (dx1 * (y1 - y3) - dy1 * (x1 - x3)) / denom;

    let range = -PARAM_EPSILON..=1.0 + PARAM_EPSILON;
    if range.contains(&ua) && range.contains(&ub) {
        Relation::Intersects(Point::new(x1 + ua * dx1, y1 + ua * dy1))
    } else {
        Relation::Disjoint
    }
}
