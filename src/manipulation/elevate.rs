//! Raises the polynomial degree of a spline along one parametric direction.
//!
//! A Bézier polynomial of degree `p` is exactly representable in degree `p+1` with the control points
//!
//! `Q_i = i/(p+1) P_{i-1} + (1 - i/(p+1)) P_i`,  `i = 0, 1, ..., p+1`,
//!
//! where the terms with `P_{-1}` and `P_{p+1}` vanish. For a tensor-product spline the formula is applied
//! to every row of the grid running along the elevated direction. The new grid is written to a fresh
//! buffer, the input is never modified.

use log::debug;

use crate::{
    bezier::{
        degrees::{self, MultiIndices},
        points::ControlPoints,
        Bezier, BezierError,
    },
    types::{Degrees, Point},
};

/// Returns the spline with the degree along `direction` raised by one.
pub fn elevate<const P: usize, const D: usize>(
    spline: &Bezier<P, D>,
    direction: usize,
) -> Result<Bezier<P, D>, BezierError> {
    if direction >= P {
        return Err(BezierError::DirectionOutOfBounds { direction, para_dim: P });
    }
    Ok(elevated(spline, direction))
}

/// Returns the spline elevated to the `target` degrees.
pub fn elevate_to<const P: usize, const D: usize>(
    spline: &Bezier<P, D>,
    target: &Degrees<P>,
) -> Result<Bezier<P, D>, BezierError> {
    if let Some(direction) = (0..P).find(|&k| target[k] < spline.degrees()[k]) {
        return Err(BezierError::DegreeDecrease {
            direction,
            current: spline.degrees()[direction],
            target: target[direction],
        });
    }
    Ok(raised_to(spline, target))
}

/// Elevates every direction whose degree lies below `target`. Directions already at or above it are kept.
pub(crate) fn raised_to<const P: usize, const D: usize>(spline: &Bezier<P, D>, target: &Degrees<P>) -> Bezier<P, D> {
    let mut result = spline.clone();
    for k in 0..P {
        while result.degrees()[k] < target[k] {
            result = elevated(&result, k);
        }
    }
    result
}

fn elevated<const P: usize, const D: usize>(spline: &Bezier<P, D>, direction: usize) -> Bezier<P, D> {
    let p = spline.degrees()[direction];
    debug!("elevating direction {} from degree {} to {}", direction, p, p + 1);

    let mut new_degrees = *spline.degrees();
    new_degrees[direction] = p + 1;

    let old_strides = degrees::strides(spline.degrees());
    let denominator = (p + 1) as f64;

    let points: Vec<Point<D>> = MultiIndices::new(new_degrees)
        .map(|index| {
            let i = index[direction];
            let alpha = i as f64 / denominator;

            let mut old = index;
            let mut q = Point::zeros();
            if i > 0 {
                old[direction] = i - 1;
                q += alpha * spline.point(degrees::flatten(&old, &old_strides));
            }
            if i <= p {
                old[direction] = i;
                q += (1.0 - alpha) * spline.point(degrees::flatten(&old, &old_strides));
            }
            q
        })
        .collect();

    Bezier::from_parts(new_degrees, ControlPoints::from_points(&points))
}
