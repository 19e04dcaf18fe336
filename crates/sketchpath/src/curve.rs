//! Smooth sketchy curves through a sequence of points.
//!
//! Points are joined by cubic Béziers derived from a Catmull-Rom spline,
//! so consumers only ever need a cubic curve primitive. The first and last
//! points act as tangent anchors and are not drawn through.

use crate::geometry::Point;
use crate::ops::PathOp;
use crate::options::DrawOptions;
use crate::rng::RandomSource;
use crate::segment::{double_segment, jitter};

/// Build a curve through `points`.
///
/// - fewer than 2 points: nothing to draw
/// - 2 points: a double-stroked sketchy segment
/// - 3 points: a straight run from `points[1]` to `points[2]`
/// - 4 or more: a spline through `points[1..len - 1]`, optionally closed
///   with a jittered line to `close_point`
pub fn perturbed_curve<R: RandomSource>(
    points: &[Point],
    close_point: Option<Point>,
    options: &DrawOptions,
    rng: &mut R,
) -> Vec<PathOp> {
    match points.len() {
        0 | 1 => Vec::new(),
        2 => double_segment(points[0], points[1], options, rng),
        3 => vec![
            PathOp::Move { point: points[1] },
            PathOp::CurveTo {
                control1: points[1],
                control2: points[2],
                end: points[2],
            },
        ],
        len => {
            let s = 1.0 - options.curve_tightness;
            let mut ops = Vec::with_capacity(len);
            ops.push(PathOp::Move { point: points[1] });

            // ## Rust Lesson #24: Slice Windows
            //
            // `windows(4)` yields every run of four neighbours, which is
            // exactly the (previous, from, to, next) quad a spline segment
            // needs. No index arithmetic, no bounds to get wrong.
            for w in points.windows(4) {
                let (prev, from, to, next) = (w[0], w[1], w[2], w[3]);
                ops.push(PathOp::CurveTo {
                    control1: Point::new(
                        from.x + (s * to.x - s * prev.x) / 6.0,
                        from.y + (s * to.y - s * prev.y) / 6.0,
                    ),
                    control2: Point::new(
                        to.x + (s * from.x - s * next.x) / 6.0,
                        to.y + (s * from.y - s * next.y) / 6.0,
                    ),
                    end: to,
                });
            }

            if let Some(close) = close_point {
                let ro = options.randomness_offset();
                let x = close.x + jitter(-ro, ro, options, rng);
                let y = close.y + jitter(-ro, ro, options, rng);
                ops.push(PathOp::LineTo {
                    point: Point::new(x, y),
                });
            }
            ops
        }
    }
}
