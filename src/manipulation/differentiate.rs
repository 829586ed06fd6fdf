//! Builds the spline of a mixed partial derivative.
//!
//! Along a direction of degree `p` the derivative of a Bézier polynomial is the Bézier polynomial of
//! degree `p-1` with the control points `p (P_{i+1} - P_i)`. Higher orders repeat the forward difference.
//! Differentiating a direction of degree zero leaves a zero spline of degree zero along that direction.

use crate::{
    bezier::{
        degrees::{self, MultiIndices},
        points::ControlPoints,
        Bezier,
    },
    types::{Orders, Point},
};

pub fn differentiate<const P: usize, const D: usize>(spline: &Bezier<P, D>, orders: &Orders<P>) -> Bezier<P, D> {
    let mut result = spline.clone();
    for (direction, &order) in orders.iter().enumerate() {
        for _ in 0..order {
            result = difference(&result, direction);
        }
    }
    result
}

fn difference<const P: usize, const D: usize>(spline: &Bezier<P, D>, direction: usize) -> Bezier<P, D> {
    let p = spline.degrees()[direction];
    if p == 0 {
        return Bezier::zeros(*spline.degrees());
    }

    let mut new_degrees = *spline.degrees();
    new_degrees[direction] = p - 1;

    let strides = degrees::strides(spline.degrees());
    let step = strides[direction];
    let points: Vec<Point<D>> = MultiIndices::new(new_degrees)
        .map(|index| {
            let i = degrees::flatten(&index, &strides);
            (spline.point(i + step) - spline.point(i)) * p as f64
        })
        .collect();

    Bezier::from_parts(new_degrees, ControlPoints::from_points(&points))
}
