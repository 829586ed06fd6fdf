//! The canonical persisted form of a spline: its degree vector and its control points, one row per point.
//!
//! A spline is rebuilt from this pair without any recomputation, so a round trip reproduces every
//! evaluation bit for bit.

use serde::{Deserialize, Serialize};

use crate::bezier::{degrees, points::ControlPoints, Bezier, BezierError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BezierState {
    pub degrees: Vec<usize>,
    pub control_points: Vec<Vec<f64>>,
}

impl<const P: usize, const D: usize> From<&Bezier<P, D>> for BezierState {
    fn from(spline: &Bezier<P, D>) -> Self {
        BezierState {
            degrees: spline.degrees().to_vec(),
            control_points: spline.control_points().iter().map(|point| point.as_slice().to_vec()).collect(),
        }
    }
}

impl<const P: usize, const D: usize> From<Bezier<P, D>> for BezierState {
    fn from(spline: Bezier<P, D>) -> Self {
        BezierState::from(&spline)
    }
}

impl<const P: usize, const D: usize> TryFrom<BezierState> for Bezier<P, D> {
    type Error = BezierError;

    fn try_from(state: BezierState) -> Result<Self, Self::Error> {
        let degrees: [usize; P] = state.degrees.as_slice().try_into().map_err(|_| BezierError::StateError {
            reason: format!("expected {} degrees, found {}", P, state.degrees.len()),
        })?;

        let expected = degrees::point_count(&degrees);
        if state.control_points.len() != expected {
            return Err(BezierError::StateError {
                reason: format!(
                    "degrees {:?} require {} control points, found {}",
                    degrees,
                    expected,
                    state.control_points.len()
                ),
            });
        }

        if let Some((i, row)) = state.control_points.iter().enumerate().find(|(_, row)| row.len() != D) {
            return Err(BezierError::StateError {
                reason: format!("control point {} has {} coordinates instead of {}", i, row.len(), D),
            });
        }

        let buffer: Vec<f64> = state.control_points.into_iter().flatten().collect();
        let points = ControlPoints::from_row_slice(&buffer).ok_or_else(|| BezierError::StateError {
            reason: format!("physical dimension {} cannot hold control points", D),
        })?;

        Ok(Bezier::from_parts(degrees, points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> BezierState {
        BezierState { degrees: vec![1, 0], control_points: vec![vec![0., 1.], vec![2., 3.]] }
    }

    #[test]
    fn valid() {
        let spline = Bezier::<2, 2>::try_from(state()).unwrap();
        assert_eq!(spline.degrees(), &[1, 0]);
        assert_eq!(spline.control_points().as_row_slice(), [0., 1., 2., 3.]);
        assert_eq!(BezierState::from(&spline), state());
    }

    #[test]
    fn wrong_arity() {
        assert_eq!(
            Bezier::<3, 2>::try_from(state()),
            Err(BezierError::StateError { reason: "expected 3 degrees, found 2".into() })
        );
    }

    #[test]
    fn wrong_row_count() {
        let mut s = state();
        s.control_points.pop();
        assert_eq!(
            Bezier::<2, 2>::try_from(s),
            Err(BezierError::StateError { reason: "degrees [1, 0] require 2 control points, found 1".into() })
        );
    }

    #[test]
    fn wrong_column_count() {
        let mut s = state();
        s.control_points[1].push(4.);
        assert_eq!(
            Bezier::<2, 2>::try_from(s),
            Err(BezierError::StateError { reason: "control point 1 has 3 coordinates instead of 2".into() })
        );
    }
}
