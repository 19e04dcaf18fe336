//! SVG input adapter - turn the shapes of an SVG document into boundary
//! polygons that can be outlined or hachure filled.
//!
//! usvg resolves CSS, `<rect>`/`<circle>` shorthands and transforms into
//! plain path data. Curves in that data are flattened with lyon_geom so
//! every boundary is a simple vertex list.

use crate::geometry::{Point, Polygon};
use lyon_geom::{CubicBezierSegment, QuadraticBezierSegment, point};
use thiserror::Error;
use usvg::tiny_skia_path::PathSegment;

/// Tolerance for curve flattening, in user units.
const CURVE_TOLERANCE: f32 = 0.1;

/// Vertices closer than this are merged.
const DEDUP_EPSILON: f64 = 1e-6;

/// Error type for SVG parsing.
///
/// ## Rust Lesson #20: Error Handling
///
/// Rust uses `Result<T, E>` instead of exceptions. `thiserror` writes the
/// `Display` and `std::error::Error` impls from the `#[error]` attributes,
/// and `#[from]` lets `?` convert a usvg error automatically.
#[derive(Debug, Error)]
pub enum SvgError {
    #[error("SVG parse error: {0}")]
    Parse(#[from] usvg::Error),
    #[error("no fillable shapes found in SVG")]
    NoPolygons,
}

/// Extract one boundary polygon per closed-able subpath in the document.
///
/// Subpaths with fewer than three distinct vertices enclose no area and
/// are skipped.
pub fn extract_polygons_from_svg(svg_content: &str) -> Result<Vec<Polygon>, SvgError> {
    let tree = usvg::Tree::from_str(svg_content, &usvg::Options::default())?;

    let mut polygons = Vec::new();
    collect_group(tree.root(), &mut polygons);

    tracing::debug!(count = polygons.len(), "extracted boundaries from SVG");
    if polygons.is_empty() {
        return Err(SvgError::NoPolygons);
    }
    Ok(polygons)
}

fn collect_group(group: &usvg::Group, out: &mut Vec<Polygon>) {
    for node in group.children() {
        match node {
            usvg::Node::Group(child) => collect_group(child, out),
            usvg::Node::Path(path) => collect_path(path, out),
            // Text is already converted to paths by usvg; images have no outline
            _ => {}
        }
    }
}

fn collect_path(path: &usvg::Path, out: &mut Vec<Polygon>) {
    let Some(data) = path.data().clone().transform(path.abs_transform()) else {
        tracing::warn!(id = path.id(), "skipping path with degenerate transform");
        return;
    };
    let id = (!path.id().is_empty()).then(|| path.id().to_string());

    let mut builder = BoundaryBuilder::default();
    for segment in data.segments() {
        match segment {
            PathSegment::MoveTo(p) => {
                builder.finish(&id, out);
                builder.push(p.x, p.y);
            }
            PathSegment::LineTo(p) => builder.push(p.x, p.y),
            PathSegment::QuadTo(ctrl, p) => {
                let Some(from) = builder.cursor else {
                    builder.push(p.x, p.y);
                    continue;
                };
                let curve = QuadraticBezierSegment {
                    from,
                    ctrl: point(ctrl.x, ctrl.y),
                    to: point(p.x, p.y),
                };
                curve.for_each_flattened(CURVE_TOLERANCE, &mut |seg| builder.push(seg.to.x, seg.to.y));
            }
            PathSegment::CubicTo(ctrl1, ctrl2, p) => {
                let Some(from) = builder.cursor else {
                    builder.push(p.x, p.y);
                    continue;
                };
                let curve = CubicBezierSegment {
                    from,
                    ctrl1: point(ctrl1.x, ctrl1.y),
                    ctrl2: point(ctrl2.x, ctrl2.y),
                    to: point(p.x, p.y),
                };
                curve.for_each_flattened(CURVE_TOLERANCE, &mut |seg| builder.push(seg.to.x, seg.to.y));
            }
            // Boundaries are implicitly closed
            PathSegment::Close => builder.finish(&id, out),
        }
    }
    builder.finish(&id, out);
}

/// Accumulates the vertices of one subpath.
#[derive(Default)]
struct BoundaryBuilder {
    points: Vec<Point>,
    cursor: Option<lyon_geom::Point<f32>>,
}

impl BoundaryBuilder {
    fn push(&mut self, x: f32, y: f32) {
        self.points.push(Point::new(x as f64, y as f64));
        self.cursor = Some(point(x, y));
    }

    /// Emit the current subpath as a polygon (if it has area) and reset.
    fn finish(&mut self, id: &Option<String>, out: &mut Vec<Polygon>) {
        let mut points = std::mem::take(&mut self.points);
        self.cursor = None;

        let same = |a: Point, b: Point| a.distance_squared(b) < DEDUP_EPSILON * DEDUP_EPSILON;
        points.dedup_by(|a, b| same(*a, *b));
        // The closing vertex repeats the first one
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if points.len() > 1 && same(first, last) {
                points.pop();
            }
        }
        if points.len() >= 3 {
            out.push(Polygon::with_id(points, id.clone()));
        }
    }
}
