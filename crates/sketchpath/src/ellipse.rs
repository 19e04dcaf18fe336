//! Hand-drawn ellipse outlines.
//!
//! An ellipse is sampled into jittered points which are then fed through
//! the curve generator. Two passes with different parameters give the
//! doubled outline, and a few extra points past the start make the seam
//! overshoot slightly, like a hand that doesn't quite close the loop.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::curve::perturbed_curve;
use crate::geometry::Point;
use crate::ops::PathOp;
use crate::options::DrawOptions;
use crate::rng::RandomSource;
use crate::segment::{jitter, jitter_point};

/// Radial jitter of the first outline pass.
const FIRST_PASS_OFFSET: f64 = 1.0;
/// Radial jitter of the second outline pass.
const SECOND_PASS_OFFSET: f64 = 1.5;
/// Upper bound on the points reserved up front; huge step counts grow the
/// vector as they go instead of asking for an impossible allocation.
const MAX_RESERVED_POINTS: usize = 4096;

/// Shrink a bounding size to compensate for stroke overdraw and halve it.
///
/// Sizes above 10 lose 4 units, smaller ones lose 1, and nothing shrinks
/// below 1. Returns `(rx, ry)` before any jitter.
pub fn ellipse_radii(width: f64, height: f64) -> (f64, f64) {
    fn shrink(size: f64) -> f64 {
        let shrunk = if size > 10.0 { size - 4.0 } else { size - 1.0 };
        shrunk.max(1.0)
    }
    ((shrink(width) / 2.0).abs(), (shrink(height) / 2.0).abs())
}

/// Sample a jittered ellipse outline.
///
/// Starts at a random angle near the top, steps by `increment` for one
/// full turn, and adds one lead-in point before the loop plus three
/// overshoot points after it. `offset` bounds the per-point jitter and
/// `overlap` is the angular overshoot past the start.
#[allow(clippy::too_many_arguments)]
pub fn approximate_ellipse<R: RandomSource>(
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    increment: f64,
    offset: f64,
    overlap: f64,
    options: &DrawOptions,
    rng: &mut R,
) -> Vec<Point> {
    let rad_offset = jitter(-0.5, 0.5, options, rng) - FRAC_PI_2;

    let on_ellipse =
        |scale: f64, angle: f64| (cx + scale * rx * angle.cos(), cy + scale * ry * angle.sin());

    let end_angle = TAU + rad_offset - 0.01;
    let steps = if increment > 0.0 {
        ((end_angle - rad_offset) / increment).ceil().max(0.0) as usize
    } else {
        0
    };

    let mut points = Vec::with_capacity(steps.min(MAX_RESERVED_POINTS) + 4);
    points.push(jittered(on_ellipse(0.9, rad_offset - increment), offset, options, rng));
    for k in 0..steps {
        let angle = rad_offset + k as f64 * increment;
        if angle >= end_angle {
            break;
        }
        points.push(jittered(on_ellipse(1.0, angle), offset, options, rng));
    }
    points.push(jittered(on_ellipse(1.0, rad_offset + TAU + overlap * 0.5), offset, options, rng));
    points.push(jittered(on_ellipse(0.98, rad_offset + overlap), offset, options, rng));
    points.push(jittered(on_ellipse(0.9, rad_offset + overlap * 0.5), offset, options, rng));
    points
}

#[inline]
fn jittered<R: RandomSource>(
    (x, y): (f64, f64),
    offset: f64,
    options: &DrawOptions,
    rng: &mut R,
) -> Point {
    jitter_point(x, y, offset, options, rng)
}

/// Doubled sketchy ellipse centred on `(cx, cy)` fitting `width` x `height`.
pub fn ellipse_ops<R: RandomSource>(
    cx: f64,
    cy: f64,
    width: f64,
    height: f64,
    options: &DrawOptions,
    rng: &mut R,
) -> Vec<PathOp> {
    let increment = options.ellipse_increment();
    let (rx, ry) = ellipse_radii(width, height);
    let rx = rx + jitter(-rx * 0.05, rx * 0.05, options, rng);
    let ry = ry + jitter(-ry * 0.05, ry * 0.05, options, rng);
    tracing::trace!(rx, ry, increment, "ellipse radii");

    let overlap_scale = jitter(0.4, 1.0, options, rng);
    let overlap = increment * jitter(0.1, overlap_scale, options, rng);

    let first = approximate_ellipse(
        cx, cy, rx, ry, increment, FIRST_PASS_OFFSET, overlap, options, rng,
    );
    let mut ops = perturbed_curve(&first, None, options, rng);

    let second = approximate_ellipse(
        cx, cy, rx, ry, increment, SECOND_PASS_OFFSET, 0.0, options, rng,
    );
    ops.extend(perturbed_curve(&second, None, options, rng));
    ops
}
