//! Hachure fills: sketchy parallel lines clipped to a boundary.
//!
//! A scan-line generator sweeps evenly spaced lines across the boundary's
//! (slightly inflated) bounding box. Each scan line is intersected with
//! every boundary edge, consecutive crossings are paired into chords, and
//! every chord is drawn as a double-stroked sketchy segment.

use crate::geometry::{BoundingBox, Line, Point, Polygon};
use crate::ops::Drawable;
use crate::options::DrawOptions;
use crate::relation::{Relation, SegmentRelation, relate_segments};
use crate::rng::RandomSource;
use crate::segment::double_segment;

/// Below this `|sin|` the sweep is treated as exactly vertical.
const AXIS_EPSILON: f64 = 0.0001;

/// Crossings closer than this are the same boundary vertex.
const VERTEX_EPSILON: f64 = 1e-6;

/// Parameters handed to a scan-line generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanBox {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    pub gap: f64,
    pub sin: f64,
    pub cos: f64,
    pub tan: f64,
}

impl ScanBox {
    /// Scan parameters for `bounds` at `angle_degrees`.
    ///
    /// Hachure lines are undirected, so the angle is reduced modulo 180.
    pub fn new(bounds: BoundingBox, gap: f64, angle_degrees: f64) -> Self {
        let angle = (angle_degrees % 180.0).to_radians();
        Self {
            top: bounds.top,
            bottom: bounds.bottom,
            left: bounds.left,
            right: bounds.right,
            gap,
            sin: angle.sin(),
            cos: angle.cos(),
            tan: angle.tan(),
        }
    }
}

/// Source of parallel scan lines covering a [`ScanBox`].
///
/// ## Rust Lesson #13: Trait Objects vs Generics
///
/// The fill is generic over this trait, so a custom generator costs
/// nothing at runtime: the compiler builds a specialised copy of the fill
/// for each generator type it is used with.
pub trait ScanLineGenerator {
    /// Next scan line, or `None` once the box is covered.
    fn next_line(&mut self) -> Option<Line>;
}

/// How the default generator sweeps the box.
#[derive(Debug, Clone, Copy)]
enum Sweep {
    /// Lines parallel to the y axis, stepping along x.
    Vertical,
    /// Lines parallel to the x axis, stepping along y.
    Horizontal,
    /// Slanted lines stepping along x by `step`.
    Slanted {
        start: f64,
        step: f64,
        delta_x: f64,
        left_side: Line,
        right_side: Line,
    },
}

/// Default scan-line generator.
///
/// Angles near 0° give vertical lines, angles near 90° horizontal ones.
/// Axis-aligned sweeps start on the leading edge of the box, so an extent
/// `e` yields exactly `ceil(e / gap)` lines.
#[derive(Debug, Clone)]
pub struct HachureIterator {
    scan: ScanBox,
    sweep: Sweep,
    index: usize,
}

impl HachureIterator {
    pub fn new(scan: ScanBox) -> Self {
        let sweep = if scan.sin.abs() < AXIS_EPSILON {
            Sweep::Vertical
        } else if scan.sin.abs() > 1.0 - AXIS_EPSILON {
            Sweep::Horizontal
        } else {
            let delta_x = (scan.bottom - scan.top) * scan.tan.abs();
            Sweep::Slanted {
                start: scan.left - delta_x,
                step: (scan.gap / scan.cos).abs(),
                delta_x,
                left_side: Line::new(scan.left, scan.bottom, scan.left, scan.top),
                right_side: Line::new(scan.right, scan.bottom, scan.right, scan.top),
            }
        };
        Self {
            scan,
            sweep,
            index: 0,
        }
    }

    /// Sweep position of the `index`-th line, computed without drift.
    #[inline]
    fn sweep_position(&self, origin: f64, step: f64) -> f64 {
        origin + self.index as f64 * step
    }
}

impl ScanLineGenerator for HachureIterator {
    fn next_line(&mut self) -> Option<Line> {
        let s = self.scan;
        match self.sweep {
            Sweep::Vertical => {
                let x = self.sweep_position(s.left, s.gap);
                if x >= s.right {
                    return None;
                }
                self.index += 1;
                Some(Line::new(x, s.top, x, s.bottom))
            }
            Sweep::Horizontal => {
                let y = self.sweep_position(s.top, s.gap);
                if y >= s.bottom {
                    return None;
                }
                self.index += 1;
                Some(Line::new(s.left, y, s.right, y))
            }
            Sweep::Slanted {
                start,
                step,
                delta_x,
                left_side,
                right_side,
            } => {
                let limit = s.right + delta_x;
                let (mut x_lower, mut x_upper) = loop {
                    let pos = self.sweep_position(start, step);
                    if pos >= limit {
                        return None;
                    }
                    let lower = pos - delta_x / 2.0;
                    let upper = pos + delta_x / 2.0;
                    let outside = (lower < s.left && upper < s.left)
                        || (lower > s.right && upper > s.right);
                    if !outside {
                        break (lower, upper);
                    }
                    self.index += 1;
                };
                let mut y_lower = s.bottom;
                let mut y_upper = s.top;

                let candidate = Line::new(x_lower, y_lower, x_upper, y_upper);
                if let Relation::Intersects(p) = relate_segments(&candidate, &left_side) {
                    x_lower = p.x;
                    y_lower = p.y;
                }
                if let Relation::Intersects(p) = relate_segments(&candidate, &right_side) {
                    x_upper = p.x;
                    y_upper = p.y;
                }
                if s.tan > 0.0 {
                    x_lower = s.right - (x_lower - s.left);
                    x_upper = s.right - (x_upper - s.left);
                }

                self.index += 1;
                Some(Line::new(x_lower, y_lower, x_upper, y_upper))
            }
        }
    }
}

impl Iterator for HachureIterator {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        self.next_line()
    }
}

/// Hachure-fill `boundary` with the default scan-line generator and
/// segment relation test.
pub fn hachure_fill<R: RandomSource>(
    boundary: &Polygon,
    options: &DrawOptions,
    rng: &mut R,
) -> Drawable {
    hachure_fill_with(boundary, options, rng, HachureIterator::new, &relate_segments)
}

/// Hachure-fill `boundary` with a caller-supplied scan-line generator and
/// segment relation test.
///
/// Crossings are kept in edge order and paired up two at a time; an odd
/// crossing at the end of a scan line is dropped. Boundaries with fewer
/// than two vertices produce an empty drawable.
pub fn hachure_fill_with<R, G, F, S>(
    boundary: &Polygon,
    options: &DrawOptions,
    rng: &mut R,
    make_scanner: F,
    relation: &S,
) -> Drawable
where
    R: RandomSource,
    G: ScanLineGenerator,
    F: FnOnce(ScanBox) -> G,
    S: SegmentRelation + ?Sized,
{
    if boundary.len() < 2 {
        tracing::warn!(vertices = boundary.len(), "boundary too small to fill");
        return Drawable::empty();
    }
    let Some(bounds) = boundary.bounding_box() else {
        return Drawable::empty();
    };

    let gap = options.resolved_hachure_gap();
    let scan = ScanBox::new(bounds.inflate(1.0), gap, options.hachure_angle);
    let mut scanner = make_scanner(scan);

    let edges: Vec<Line> = boundary.edges().collect();
    let mut ops = Vec::new();
    let mut scan_lines = 0usize;
    let mut chords = 0usize;

    while let Some(line) = scanner.next_line() {
        scan_lines += 1;
        let mut crossings: Vec<_> = edges
            .iter()
            .filter_map(|edge| match relation.relate(&line, edge) {
                Relation::Intersects(p) => Some(p),
                Relation::Disjoint | Relation::Collinear => None,
            })
            .collect();
        merge_shared_vertices(&mut crossings);

        for pair in crossings.chunks_exact(2) {
            ops.extend(double_segment(pair[0], pair[1], options, rng));
            chords += 1;
        }
    }

    tracing::debug!(
        scan_lines,
        chords,
        gap,
        fill_weight = options.resolved_fill_weight(),
        "hachure fill"
    );
    Drawable::path(ops)
}

/// A scan line through a boundary vertex is reported by both edges that
/// meet there. Collapse those repeats, including the wraparound between the
/// last edge and the first, so each vertex counts once.
fn merge_shared_vertices(crossings: &mut Vec<Point>) {
    let same = |a: Point, b: Point| a.distance_squared(b) < VERTEX_EPSILON * VERTEX_EPSILON;
    crossings.dedup_by(|a, b| same(*a, *b));
    if let (Some(&first), Some(&last)) = (crossings.first(), crossings.last()) {
        if crossings.len() > 1 && same(first, last) {
            crossings.pop();
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::PathOp;
    use crate::rng::Rng;

    fn square(size: f64) -> Polygon {
        Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(size, 0.0),
            Point::new(size, size),
            Point::new(0.0, size),
        ])
    }

    fn scan_box(bounds: BoundingBox, gap: f64, angle: f64) -> ScanBox {
        ScanBox::new(bounds, gap, angle)
    }

    #[test]
    fn zero_angle_sweeps_vertically() {
        let bounds = square(10.0).bounding_box().unwrap().inflate(1.0);
        let lines: Vec<Line> = HachureIterator::new(scan_box(bounds, 5.0, 0.0)).collect();
        // extent 12, gap 5: ceil(12 / 5) = 3 lines at x = -1, 4, 9
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], Line::new(4.0, -1.0, 4.0, 11.0));
    }

    #[test]
    fn scan_line_count_is_ceil_of_extent_over_gap() {
        for (size, gap) in [(10.0, 3.0), (10.0, 4.0), (37.5, 2.5), (100.0, 7.0)] {
            let bounds = square(size).bounding_box().unwrap().inflate(1.0);
            let count = HachureIterator::new(scan_box(bounds, gap, 0.0)).count();
            let expected = ((size + 2.0) / gap).ceil() as usize;
            assert_eq!(count, expected, "size {size} gap {gap}");
        }
    }

    #[test]
    fn ninety_degrees_sweeps_horizontally() {
        let bounds = square(10.0).bounding_box().unwrap();
        let lines: Vec<Line> = HachureIterator::new(scan_box(bounds, 4.0, 90.0)).collect();
        assert_eq!(lines.len(), 3);
        for line in &lines {
            assert_eq!(line.y1, line.y2);
        }
    }

    #[test]
    fn slanted_lines_stay_in_box() {
        let bounds = square(50.0).bounding_box().unwrap();
        for angle in [-41.0, 30.0, 60.0, 135.0] {
            let lines: Vec<Line> = HachureIterator::new(scan_box(bounds, 5.0, angle)).collect();
            assert!(lines.len() > 5, "angle {angle} gave {} lines", lines.len());
            for l in &lines {
                for (x, y) in [(l.x1, l.y1), (l.x2, l.y2)] {
                    assert!(x >= -1e-6 && x <= 50.0 + 1e-6, "angle {angle}: x {x}");
                    assert!(y >= -1e-6 && y <= 50.0 + 1e-6, "angle {angle}: y {y}");
                }
            }
        }
    }

    #[test]
    fn slanted_sweep_terminates_for_thin_boxes() {
        let bounds = BoundingBox {
            left: 0.0,
            right: 1000.0,
            top: 0.0,
            bottom: 0.5,
        };
        let count = HachureIterator::new(scan_box(bounds, 0.1, 45.0)).count();
        assert!(count > 0 && count < 20_000);
    }

    #[test]
    fn square_fill_one_chord_per_interior_line() {
        let options = DrawOptions::default().with_hachure_gap(5.0).with_hachure_angle(0.0);
        let mut rng = Rng::new(1);
        let drawable = hachure_fill(&square(10.0), &options, &mut rng);
        // Lines at x = 4 and x = 9 cross the square; x = -1 misses it
        assert_eq!(drawable.curve_count(), 4);
        assert_eq!(drawable.move_count(), 4);
        assert_eq!(drawable.len(), 8);
    }

    #[test]
    fn smooth_chords_span_the_square() {
        let options = DrawOptions::default()
            .with_roughness(0.0)
            .with_hachure_gap(5.0)
            .with_hachure_angle(0.0);
        let mut rng = Rng::new(1);
        let drawable = hachure_fill(&square(10.0), &options, &mut rng);
        let ends: Vec<Point> = drawable
            .ops
            .iter()
            .filter(|op| op.is_curve())
            .map(PathOp::end_point)
            .collect();
        // Edges are tested in order: the top edge (y = 0) is hit first,
        // so every chord runs downward and ends on the bottom edge
        assert_eq!(ends.len(), 4);
        for (end, x) in ends.iter().zip([4.0, 4.0, 9.0, 9.0]) {
            assert!((end.x - x).abs() < 1e-9 && (end.y - 10.0).abs() < 1e-9, "{end:?}");
        }
    }

    #[test]
    fn scan_line_through_vertices_keeps_its_chord() {
        let diamond = Polygon::new(vec![
            Point::new(0.0, 5.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(5.0, 10.0),
        ]);
        let options = DrawOptions::default()
            .with_roughness(0.0)
            .with_hachure_gap(2.0)
            .with_hachure_angle(0.0);
        let mut rng = Rng::new(0);
        let drawable = hachure_fill(&diamond, &options, &mut rng);

        // Lines at x = 1, 3, 5, 7, 9 each cross once; x = -1 misses
        assert_eq!(drawable.curve_count(), 2 * 5);

        let chords: Vec<(Point, Point)> = drawable
            .ops
            .windows(2)
            .filter(|w| w[0].is_move() && w[1].is_curve())
            .map(|w| (w[0].end_point(), w[1].end_point()))
            .collect();
        let centre = chords
            .iter()
            .filter(|(a, b)| (a.x - 5.0).abs() < 1e-9 && (b.x - 5.0).abs() < 1e-9)
            .map(|(a, b)| a.distance(*b))
            .fold(0.0, f64::max);
        assert!((centre - 10.0).abs() < 1e-9, "centre chord length {centre}");
    }

    #[test]
    fn shared_vertices_are_merged() {
        let v = Point::new(5.0, 0.0);
        let w = Point::new(5.0, 10.0);
        let mut crossings = vec![v, Point::new(5.0, 1e-12), w, w];
        merge_shared_vertices(&mut crossings);
        assert_eq!(crossings, vec![v, w]);

        // First and last edge share the first boundary vertex
        let mut crossings = vec![v, w, Point::new(5.0 + 1e-12, 0.0)];
        merge_shared_vertices(&mut crossings);
        assert_eq!(crossings, vec![v, w]);
    }

    #[test]
    fn angle_wraps_at_180() {
        let options = DrawOptions::default().with_hachure_gap(4.0);
        let a = hachure_fill(&square(40.0), &options.clone().with_hachure_angle(30.0), &mut Rng::new(2));
        let b = hachure_fill(&square(40.0), &options.with_hachure_angle(210.0), &mut Rng::new(2));
        assert_eq!(a, b);
    }

    #[test]
    fn empty_boundary_is_empty() {
        let mut rng = Rng::new(0);
        let drawable = hachure_fill(&Polygon::new(vec![]), &DrawOptions::default(), &mut rng);
        assert!(drawable.is_empty());
    }

    #[test]
    fn single_vertex_is_empty() {
        let mut rng = Rng::new(0);
        let boundary = Polygon::new(vec![Point::new(5.0, 5.0)]);
        assert!(hachure_fill(&boundary, &DrawOptions::default(), &mut rng).is_empty());
    }

    #[test]
    fn odd_crossing_is_dropped() {
        // A relation that reports a crossing only for the first edge
        let first_edge_only = |line: &Line, edge: &Line| {
            if edge.x1 == 0.0 && edge.y1 == 0.0 {
                Relation::Intersects(Point::new(line.x1, 0.0))
            } else {
                Relation::Disjoint
            }
        };
        let options = DrawOptions::default().with_hachure_gap(5.0).with_hachure_angle(0.0);
        let mut rng = Rng::new(0);
        let drawable =
            hachure_fill_with(&square(10.0), &options, &mut rng, HachureIterator::new, &first_edge_only);
        assert!(drawable.is_empty());
    }

    #[test]
    fn custom_scanner_is_used() {
        struct OneLine(Option<Line>);
        impl ScanLineGenerator for OneLine {
            fn next_line(&mut self) -> Option<Line> {
                self.0.take()
            }
        }

        let options = DrawOptions::default();
        let mut rng = Rng::new(0);
        let drawable = hachure_fill_with(
            &square(10.0),
            &options,
            &mut rng,
            |_| OneLine(Some(Line::new(-5.0, 5.0, 15.0, 5.0))),
            &relate_segments,
        );
        assert_eq!(drawable.curve_count(), 2);
    }
}
