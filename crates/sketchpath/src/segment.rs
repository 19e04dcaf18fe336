//! Sketchy/hand-drawn line segments.
//!
//! Turns an exact segment into a single cubic curve whose endpoints and
//! control points are randomly displaced. Based on the RoughJS line
//! algorithm:
//! - Endpoint randomization (bounded by `max_randomness_offset`)
//! - Line bowing (control points pushed along the segment normal)
//! - Double-stroke effect (a coarse pass plus a tighter overlay pass)
//!
//! # Example
//! ```
//! use sketchpath::{DrawOptions, Point, Rng};
//! use sketchpath::segment::double_segment;
//!
//! let mut rng = Rng::new(42);
//! let ops = double_segment(
//!     Point::new(0.0, 0.0),
//!     Point::new(100.0, 100.0),
//!     &DrawOptions::default(),
//!     &mut rng,
//! );
//! assert_eq!(ops.len(), 4); // move + curve, twice
//! ```

use crate::geometry::Point;
use crate::ops::PathOp;
use crate::options::DrawOptions;
use crate::rng::RandomSource;

/// Which stroke of a double-stroked segment is being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// First stroke, full jitter.
    Coarse,
    /// Second stroke drawn over the first with half the jitter.
    Overlay,
}

/// Random offset in `[min, max)` scaled by the roughness.
///
/// Every positional perturbation goes through here, so a roughness of
/// zero reproduces the exact input geometry.
#[inline]
pub fn jitter<R: RandomSource>(min: f64, max: f64, options: &DrawOptions, rng: &mut R) -> f64 {
    options.roughness * rng.next_range(min, max)
}

/// Jitter a point by up to `magnitude` along each axis.
#[inline]
pub(crate) fn jitter_point<R: RandomSource>(
    x: f64,
    y: f64,
    magnitude: f64,
    options: &DrawOptions,
    rng: &mut R,
) -> Point {
    let x = x + jitter(-magnitude, magnitude, options, rng);
    let y = y + jitter(-magnitude, magnitude, options, rng);
    Point::new(x, y)
}

/// Draw one pass of a hand-drawn segment from `p1` to `p2`.
///
/// Emits an optional `Move` to the (jittered) start followed by a single
/// `CurveTo` ending at the (jittered) end.
pub fn perturbed_segment<R: RandomSource>(
    p1: Point,
    p2: Point,
    options: &DrawOptions,
    include_move: bool,
    pass: Pass,
    rng: &mut R,
) -> Vec<PathOp> {
    let length_sq = p1.distance_squared(p2);
    let max_offset = options.randomness_offset();

    // Short segments would be swamped by full-size jitter
    let mut offset = max_offset;
    if offset * offset * 100.0 > length_sq {
        offset = length_sq.sqrt() / 10.0;
    }
    let magnitude = match pass {
        Pass::Coarse => offset,
        Pass::Overlay => offset / 2.0,
    };

    let diverge_point = rng.next_range(0.2, 0.4);

    // Bowing pushes both control points along the segment normal
    let mid_disp_x = options.bowing * max_offset * (p2.y - p1.y) / 200.0;
    let mid_disp_y = options.bowing * max_offset * (p1.x - p2.x) / 200.0;
    let mid_disp_x = jitter(-mid_disp_x, mid_disp_x, options, rng);
    let mid_disp_y = jitter(-mid_disp_y, mid_disp_y, options, rng);

    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;

    let mut ops = Vec::with_capacity(2);
    if include_move {
        ops.push(PathOp::Move {
            point: jitter_point(p1.x, p1.y, magnitude, options, rng),
        });
    }

    let control1 = jitter_point(
        mid_disp_x + p1.x + dx * diverge_point,
        mid_disp_y + p1.y + dy * diverge_point,
        magnitude,
        options,
        rng,
    );
    let control2 = jitter_point(
        mid_disp_x + p1.x + 2.0 * dx * diverge_point,
        mid_disp_y + p1.y + 2.0 * dy * diverge_point,
        magnitude,
        options,
        rng,
    );
    let end = jitter_point(p2.x, p2.y, magnitude, options, rng);
    ops.push(PathOp::CurveTo {
        control1,
        control2,
        end,
    });

    ops
}

/// Coarse pass followed by overlay pass, both starting with a move.
pub fn double_segment<R: RandomSource>(
    p1: Point,
    p2: Point,
    options: &DrawOptions,
    rng: &mut R,
) -> Vec<PathOp> {
    let mut ops = perturbed_segment(p1, p2, options, true, Pass::Coarse, rng);
    ops.extend(perturbed_segment(p1, p2, options, true, Pass::Overlay, rng));
    ops
}
