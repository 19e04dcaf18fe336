//! Public drawing API.
//!
//! [`SketchPathBuilder`] owns the random source and turns primitives
//! (lines, polygons, rectangles, ellipses, curves, hachure fills) into
//! [`Drawable`] paths.
//!
//! # Example
//! ```
//! use sketchpath::{DrawOptions, Point, SketchPathBuilder};
//!
//! let mut sketch = SketchPathBuilder::seeded(7);
//! let options = DrawOptions::default();
//!
//! let outline = sketch.rectangle(10.0, 10.0, 80.0, 40.0, &options);
//! assert!(outline.ops[0].is_move());
//! ```

use crate::curve::perturbed_curve;
use crate::ellipse::ellipse_ops;
use crate::geometry::{Point, Polygon};
use crate::hachure::hachure_fill;
use crate::ops::{Drawable, PathOp};
use crate::options::DrawOptions;
use crate::rng::{RandomSource, Rng};
use crate::segment::double_segment;

/// Builds hand-drawn paths from exact primitives.
///
/// ## Rust Lesson #14: Generic Structs with Defaults
///
/// `R = Rng` means `SketchPathBuilder` on its own is a builder using the
/// crate's seeded LCG, while `SketchPathBuilder<MyRng>` plugs in another
/// source. Each builder owns its source, so two builders never interfere.
#[derive(Debug, Clone)]
pub struct SketchPathBuilder<R = Rng> {
    rng: R,
}

impl SketchPathBuilder<Rng> {
    /// Builder with a deterministic seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Rng::new(seed))
    }
}

impl Default for SketchPathBuilder<Rng> {
    fn default() -> Self {
        Self::new(Rng::default())
    }
}

impl<R: RandomSource> SketchPathBuilder<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Access the random source, e.g. to draw with the lower-level
    /// generators in between primitives.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn into_rng(self) -> R {
        self.rng
    }

    /// A double-stroked sketchy line.
    pub fn line(&mut self, p1: Point, p2: Point, options: &DrawOptions) -> Drawable {
        Drawable::path(double_segment(p1, p2, options, &mut self.rng))
    }

    /// A polyline through `points`, closed back to the first point when
    /// `close` is set.
    ///
    /// Two points are drawn as a [`line`](Self::line). Fewer than two
    /// points describe nothing to draw and yield `None`.
    pub fn linear_path(
        &mut self,
        points: &[Point],
        close: bool,
        options: &DrawOptions,
    ) -> Option<Drawable> {
        match points {
            [] | [_] => {
                tracing::debug!(points = points.len(), "too few points for a path");
                None
            }
            [p1, p2] => Some(self.line(*p1, *p2, options)),
            _ => Some(Drawable::path(self.polyline_ops(points, close, options))),
        }
    }

    /// A closed polygon. See [`linear_path`](Self::linear_path).
    pub fn polygon(&mut self, points: &[Point], options: &DrawOptions) -> Option<Drawable> {
        self.linear_path(points, true, options)
    }

    /// A rectangle with top-left corner `(x, y)`.
    ///
    /// Only three corners are listed (top-left, top-right, bottom-right);
    /// the closing edge runs straight back to the top-left corner, so the
    /// bottom-left corner is never visited. Existing drawings depend on
    /// this exact vertex list.
    pub fn rectangle(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        options: &DrawOptions,
    ) -> Drawable {
        let corners = rectangle_corners(x, y, width, height);
        Drawable::path(self.polyline_ops(&corners, true, options))
    }

    /// A doubled sketchy ellipse centred on `(x, y)` fitting `width` x `height`.
    pub fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        options: &DrawOptions,
    ) -> Drawable {
        let ops = ellipse_ops(x, y, width, height, options, &mut self.rng);
        tracing::trace!(ops = ops.len(), "ellipse");
        Drawable::path(ops)
    }

    /// A smooth curve through `points`; the first and last points only
    /// steer the tangents.
    pub fn curve(&mut self, points: &[Point], options: &DrawOptions) -> Drawable {
        Drawable::path(perturbed_curve(points, None, options, &mut self.rng))
    }

    /// Hachure-fill a boundary polygon.
    pub fn hachure_fill_shape(&mut self, boundary: &Polygon, options: &DrawOptions) -> Drawable {
        hachure_fill(boundary, options, &mut self.rng)
    }

    /// Hachure-fill a boundary given as parallel coordinate lists.
    ///
    /// Lists of different length are a caller error and produce an empty
    /// drawable.
    pub fn hachure_fill_coords(
        &mut self,
        xs: &[f64],
        ys: &[f64],
        options: &DrawOptions,
    ) -> Drawable {
        match Polygon::from_coords(xs, ys) {
            Ok(boundary) => self.hachure_fill_shape(&boundary, options),
            Err(err) => {
                tracing::warn!(%err, "ignoring hachure fill");
                Drawable::empty()
            }
        }
    }

    fn polyline_ops(&mut self, points: &[Point], close: bool, options: &DrawOptions) -> Vec<PathOp> {
        let edges = points.len() - 1 + usize::from(close);
        let mut ops = Vec::with_capacity(edges * 4);
        for pair in points.windows(2) {
            ops.extend(double_segment(pair[0], pair[1], options, &mut self.rng));
        }
        if close {
            if let (Some(&last), Some(&first)) = (points.last(), points.first()) {
                ops.extend(double_segment(last, first, options, &mut self.rng));
            }
        }
        ops
    }
}

/// The three corners a rectangle is drawn through.
pub fn rectangle_corners(x: f64, y: f64, width: f64, height: f64) -> [Point; 3] {
    [
        Point::new(x, y),
        Point::new(x + width, y),
        Point::new(x + width, y + height),
    ]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ellipse::ellipse_radii;
    use proptest::prelude::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn line_is_two_passes() {
        let mut sketch = SketchPathBuilder::seeded(1);
        let d = sketch.line(Point::new(0.0, 0.0), Point::new(10.0, 10.0), &DrawOptions::default());
        assert_eq!(d.len(), 4);
        assert_eq!(d.move_count(), 2);
        assert_eq!(d.curve_count(), 2);
    }

    #[test]
    fn linear_path_needs_two_points() {
        let mut sketch = SketchPathBuilder::seeded(1);
        let options = DrawOptions::default();
        assert!(sketch.linear_path(&[], false, &options).is_none());
        assert!(sketch.linear_path(&pts(&[(1.0, 1.0)]), true, &options).is_none());
    }

    #[test]
    fn two_point_path_is_a_line() {
        let points = pts(&[(0.0, 0.0), (30.0, 5.0)]);
        let options = DrawOptions::default();

        let path = SketchPathBuilder::seeded(3).linear_path(&points, true, &options).unwrap();
        let line = SketchPathBuilder::seeded(3).line(points[0], points[1], &options);
        assert_eq!(path, line);
    }

    #[test]
    fn open_path_skips_closing_edge() {
        let points = pts(&[(0.0, 0.0), (30.0, 0.0), (30.0, 30.0)]);
        let mut sketch = SketchPathBuilder::seeded(3);
        let d = sketch.linear_path(&points, false, &DrawOptions::default()).unwrap();
        assert_eq!(d.curve_count(), 4);
    }

    #[test]
    fn polygon_op_counts() {
        let points = pts(&[(0.0, 0.0), (30.0, 0.0), (30.0, 30.0), (0.0, 30.0)]);
        let mut sketch = SketchPathBuilder::seeded(5);
        let d = sketch.polygon(&points, &DrawOptions::default()).unwrap();
        // 4 edges, each a coarse and an overlay pass of move + curve
        assert!(d.ops[0].is_move());
        assert_eq!(d.curve_count(), 2 * 4);
        assert_eq!(d.len(), 4 * 4);
    }

    #[test]
    fn smooth_polygon_closes_on_first_vertex() {
        let points = pts(&[(0.0, 0.0), (30.0, 0.0), (30.0, 30.0)]);
        let options = DrawOptions::default().with_roughness(0.0);
        let d = SketchPathBuilder::seeded(0).polygon(&points, &options).unwrap();
        assert_eq!(d.ops.last().map(PathOp::end_point), Some(points[0]));
    }

    #[test]
    fn rectangle_uses_three_corners() {
        let options = DrawOptions::default();
        let rect = SketchPathBuilder::seeded(9).rectangle(10.0, 10.0, 20.0, 5.0, &options);
        let poly = SketchPathBuilder::seeded(9)
            .polygon(&pts(&[(10.0, 10.0), (30.0, 10.0), (30.0, 15.0)]), &options)
            .unwrap();
        assert_eq!(rect, poly);
        assert_eq!(rect.curve_count(), 6);
    }

    #[test]
    fn rectangle_corners_are_exact() {
        assert_eq!(
            rectangle_corners(10.0, 10.0, 20.0, 5.0),
            [Point::new(10.0, 10.0), Point::new(30.0, 10.0), Point::new(30.0, 15.0)]
        );
    }

    #[test]
    fn ellipse_radius_arithmetic() {
        assert_eq!(ellipse_radii(20.0, 20.0), (8.0, 8.0));
        let mut sketch = SketchPathBuilder::seeded(2);
        let d = sketch.ellipse(50.0, 50.0, 20.0, 20.0, &DrawOptions::default());
        assert_eq!(d.move_count(), 2);
    }

    #[test]
    fn curve_primitive() {
        let points = pts(&[(0.0, 0.0), (10.0, 5.0), (20.0, 0.0), (30.0, 5.0), (40.0, 0.0)]);
        let d = SketchPathBuilder::seeded(0).curve(&points, &DrawOptions::default());
        assert_eq!(d.len(), 3);
        assert_eq!(d.ops[0], PathOp::Move { point: points[1] });
    }

    #[test]
    fn empty_fill_has_no_ops() {
        let mut sketch = SketchPathBuilder::seeded(0);
        let d = sketch.hachure_fill_shape(&Polygon::default(), &DrawOptions::default());
        assert!(d.is_empty());
        let d = sketch.hachure_fill_coords(&[], &[], &DrawOptions::default());
        assert!(d.is_empty());
    }

    #[test]
    fn mismatched_coords_fill_nothing() {
        let mut sketch = SketchPathBuilder::seeded(0);
        let d = sketch.hachure_fill_coords(&[0.0, 10.0, 10.0], &[0.0, 0.0], &DrawOptions::default());
        assert!(d.is_empty());
    }

    #[test]
    fn coords_fill_matches_polygon_fill() {
        let options = DrawOptions::default().with_hachure_gap(3.0);
        let xs = [0.0, 20.0, 20.0, 0.0];
        let ys = [0.0, 0.0, 20.0, 20.0];
        let a = SketchPathBuilder::seeded(4).hachure_fill_coords(&xs, &ys, &options);
        let boundary = Polygon::from_coords(&xs, &ys).unwrap();
        let b = SketchPathBuilder::seeded(4).hachure_fill_shape(&boundary, &options);
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn same_seed_same_drawing() {
        let options = DrawOptions::default();
        let a = SketchPathBuilder::seeded(77).ellipse(0.0, 0.0, 60.0, 30.0, &options);
        let b = SketchPathBuilder::seeded(77).ellipse(0.0, 0.0, 60.0, 30.0, &options);
        let c = SketchPathBuilder::seeded(78).ellipse(0.0, 0.0, 60.0, 30.0, &options);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    proptest! {
        #[test]
        fn two_point_curve_matches_line_structure(
            x1 in -500.0f64..500.0, y1 in -500.0f64..500.0,
            x2 in -500.0f64..500.0, y2 in -500.0f64..500.0,
            seed in any::<u64>(),
        ) {
            let options = DrawOptions::default();
            let points = [Point::new(x1, y1), Point::new(x2, y2)];
            let curve = SketchPathBuilder::seeded(seed).curve(&points, &options);
            let line = SketchPathBuilder::seeded(seed).line(points[0], points[1], &options);
            prop_assert_eq!(curve.len(), line.len());
            for (a, b) in curve.ops.iter().zip(&line.ops) {
                prop_assert_eq!(a.is_move(), b.is_move());
                prop_assert_eq!(a.is_curve(), b.is_curve());
            }
        }

        #[test]
        fn closed_polygons_start_with_move(
            coords in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 3..12),
            seed in any::<u64>(),
        ) {
            let points: Vec<Point> = coords.into_iter().map(Point::from).collect();
            let d = SketchPathBuilder::seeded(seed)
                .polygon(&points, &DrawOptions::default())
                .unwrap();
            prop_assert!(d.ops[0].is_move());
            prop_assert_eq!(d.curve_count(), 2 * points.len());
        }
    }
}
