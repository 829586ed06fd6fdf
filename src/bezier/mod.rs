//! Implements the tensor-product Bézier spline.
//!
//! A Bézier spline of parametric dimension `P` and physical dimension `D` is defined by
//!
//! `S(u) = Σ_{i_0..i_{P-1}} B_{i_0,p_0}(u_0) ⋯ B_{i_{P-1},p_{P-1}}(u_{P-1}) c_{i_0..i_{P-1}}`
//!
//! with the
//! - parametric coordinate `u ∈ [0,1]^P`,
//! - degrees `p_k` per parametric direction,
//! - [Bernstein polynomials][basis] `B_{i,p}`, and
//! - `N = ∏(p_k + 1)`, `D`-dimensional [control points][points] `c`, addressed by their
//!   [multi-index][degrees].
//!
//! Parameters outside `[0,1]^P` are extrapolated.

use std::fmt;

use log::trace;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    bezier::{
        degrees::MultiIndices,
        points::ControlPoints,
        state::BezierState,
    },
    manipulation::{differentiate, elevate},
    types::{Degrees, Orders, Point, Query},
};

pub mod basis;
pub mod degrees;
pub mod points;
pub mod state;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "BezierState", try_from = "BezierState")]
pub struct Bezier<const P: usize, const D: usize> {
    degrees: Degrees<P>,
    points: ControlPoints<D>,
}

#[derive(Error, Debug, PartialEq)]
pub enum BezierError {
    #[error("Expected {expected} {quantity}, found {found}.")]
    DimensionMismatch { quantity: &'static str, expected: usize, found: usize },

    #[error("Invalid spline state: {reason}")]
    StateError { reason: String },

    #[error("Parametric direction `{direction}` does not exist for a parametric dimension of `{para_dim}`.")]
    DirectionOutOfBounds { direction: usize, para_dim: usize },

    #[error(
        "The degree `p = {current}` along direction `{direction}` cannot be lowered to `{target}`. \
        Degrees can only be elevated."
    )]
    DegreeDecrease { direction: usize, current: usize, target: usize },

    #[error("Physical coordinate `{component}` does not exist for a physical dimension of `{dim}`.")]
    ComponentOutOfBounds { component: usize, dim: usize },

    #[error("Expected one weight per control point ({expected}), found {found}.")]
    WeightCountMismatch { expected: usize, found: usize },

    #[error("A flat control-point buffer requires a physical dimension of at least one.")]
    ZeroDimension,
}

impl<const P: usize, const D: usize> Bezier<P, D> {
    /// Returns a Bézier spline.
    ///
    /// # Arguments
    ///
    /// * `degrees` - The polynomial degree along each parametric direction.
    /// * `points` - `∏(degree + 1)` control points in lexicographic order, last direction fastest.
    ///
    /// # Examples
    /// ```
    /// use nalgebra::vector;
    /// use beziers::bezier::{points::ControlPoints, Bezier};
    ///
    /// // A bilinear patch in 3D.
    /// let points = ControlPoints::from_points(&[
    ///     vector![0., 0., 0.],
    ///     vector![0., 1., 0.],
    ///     vector![1., 0., 0.],
    ///     vector![1., 1., 1.],
    /// ]);
    /// let patch = Bezier::<2, 3>::new([1, 1], points).unwrap();
    /// assert_eq!(patch.evaluate(&[0.5, 0.5]), vector![0.5, 0.5, 0.25]);
    /// ```
    pub fn new(degrees: Degrees<P>, points: ControlPoints<D>) -> Result<Self, BezierError> {
        let expected = degrees::point_count(&degrees);
        if points.count() != expected {
            return Err(BezierError::DimensionMismatch {
                quantity: "control points",
                expected,
                found: points.count(),
            });
        }
        Ok(Self { degrees, points })
    }

    /// Returns a Bézier spline from a flat degree vector and a row-major `N × D` control-point buffer.
    pub fn from_flat(degrees: &[usize], control_points: &[f64]) -> Result<Self, BezierError> {
        if D == 0 {
            return Err(BezierError::ZeroDimension);
        }
        let degrees: Degrees<P> = degrees.try_into().map_err(|_| BezierError::DimensionMismatch {
            quantity: "degrees",
            expected: P,
            found: degrees.len(),
        })?;

        let expected = degrees::point_count(&degrees) * D;
        if control_points.len() != expected {
            return Err(BezierError::DimensionMismatch {
                quantity: "control point coordinates",
                expected,
                found: control_points.len(),
            });
        }

        let points = ControlPoints::from_row_slice(control_points).ok_or(BezierError::ZeroDimension)?;
        Self::new(degrees, points)
    }

    /// Returns the spline with all control points at the origin.
    pub fn zeros(degrees: Degrees<P>) -> Self {
        Self { degrees, points: ControlPoints::zeros(degrees::point_count(&degrees)) }
    }

    /// Returns the spline of degree zero in every direction that evaluates to `point` everywhere.
    pub fn constant(point: Point<D>) -> Self {
        Self { degrees: [0; P], points: ControlPoints::from_points(&[point]) }
    }

    /// Assembles a spline whose point count is guaranteed by construction.
    pub(crate) fn from_parts(degrees: Degrees<P>, points: ControlPoints<D>) -> Self {
        debug_assert_eq!(points.count(), degrees::point_count(&degrees));
        Self { degrees, points }
    }

    pub fn degrees(&self) -> &Degrees<P> {
        &self.degrees
    }

    pub fn control_points(&self) -> &ControlPoints<D> {
        &self.points
    }

    pub fn point(&self, i: usize) -> Point<D> {
        self.points.get(i)
    }

    pub fn point_count(&self) -> usize {
        self.points.count()
    }

    /// Returns the parametric dimension `P`.
    pub fn para_dim(&self) -> usize {
        P
    }

    /// Returns the physical dimension `D`.
    pub fn dim(&self) -> usize {
        D
    }

    /// Evaluates the spline by blending all control points with the precomputed basis of each direction.
    pub fn evaluate(&self, query: &Query<P>) -> Point<D> {
        let bases: [Vec<f64>; P] = std::array::from_fn(|k| basis::values(self.degrees[k], query[k]));
        self.blend(&bases)
    }

    /// Evaluates the spline by collapsing the control-point grid with de Casteljau's algorithm,
    /// one parametric direction at a time, starting with the last.
    pub fn recursive_evaluate(&self, query: &Query<P>) -> Point<D> {
        let mut grid = self.points.to_vec();
        for k in (0..P).rev() {
            let width = self.degrees[k] + 1;
            grid = grid.chunks_mut(width).map(|polygon| basis::de_casteljau(polygon, query[k])).collect();
        }
        grid.first().copied().unwrap_or_else(Point::zeros)
    }

    /// Evaluates the mixed partial derivative with `orders[k]` derivatives along direction `k`.
    ///
    /// Orders above the degree of a direction yield the zero vector.
    pub fn derivative(&self, query: &Query<P>, orders: &Orders<P>) -> Point<D> {
        if orders.iter().zip(&self.degrees).any(|(k, p)| k > p) {
            return Point::zeros();
        }
        let bases: [Vec<f64>; P] =
            std::array::from_fn(|k| basis::derivative_values(self.degrees[k], orders[k], query[k]));
        self.blend(&bases)
    }

    /// Returns the spline describing the derivative with `orders[k]` derivatives along direction `k`.
    pub fn derivative_spline(&self, orders: &Orders<P>) -> Self {
        differentiate::differentiate(self, orders)
    }

    fn blend(&self, bases: &[Vec<f64>; P]) -> Point<D> {
        let mut value = Point::zeros();
        for (i, index) in MultiIndices::new(self.degrees).enumerate() {
            let weight: f64 = index.iter().zip(bases).map(|(&i_k, b)| b[i_k]).product();
            value += weight * self.points.matrix().column(i);
        }
        value
    }

    /// Raises the degree along `direction` by one without changing the spline's shape.
    ///
    /// # Examples
    /// ```
    /// use beziers::bezier::Bezier;
    ///
    /// let mut c = Bezier::<1, 1>::from_flat(&[1], &[0., 1.]).unwrap();
    /// c.elevate_degree(0).unwrap();
    /// assert_eq!(c.degrees(), &[2]);
    /// assert_eq!(c.control_points().as_row_slice(), [0., 0.5, 1.]);
    /// ```
    pub fn elevate_degree(&mut self, direction: usize) -> Result<&mut Self, BezierError> {
        *self = elevate::elevate(self, direction)?;
        Ok(self)
    }

    /// Returns a copy with the degree along `direction` raised by one.
    pub fn elevated(&self, direction: usize) -> Result<Self, BezierError> {
        elevate::elevate(self, direction)
    }

    /// Elevates every direction to the given degrees.
    pub fn elevate_to(&mut self, target: &Degrees<P>) -> Result<&mut Self, BezierError> {
        *self = elevate::elevate_to(self, target)?;
        Ok(self)
    }

    /// Extracts the scalar spline of one physical coordinate.
    pub fn component(&self, k: usize) -> Result<Bezier<P, 1>, BezierError> {
        if k >= D {
            return Err(BezierError::ComponentOutOfBounds { component: k, dim: D });
        }
        Ok(self.scalar_component(k))
    }

    pub(crate) fn scalar_component(&self, k: usize) -> Bezier<P, 1> {
        let points = ControlPoints::new(self.points.matrix().fixed_rows::<1>(k).into_owned());
        Bezier::from_parts(self.degrees, points)
    }

    /// Evaluates a row-major `M × P` query buffer and returns the row-major `M × D` results.
    pub fn evaluate_batch(&self, queries: &[f64]) -> Result<Vec<f64>, BezierError> {
        map_queries(queries, |q| self.evaluate(q))
    }

    /// Like [`Bezier::evaluate_batch`], using [`Bezier::recursive_evaluate`].
    pub fn recursive_evaluate_batch(&self, queries: &[f64]) -> Result<Vec<f64>, BezierError> {
        map_queries(queries, |q| self.recursive_evaluate(q))
    }

    /// Evaluates the same mixed partial derivative at every query of a row-major `M × P` buffer.
    pub fn derivative_batch(&self, queries: &[f64], orders: &[usize]) -> Result<Vec<f64>, BezierError> {
        let orders: Orders<P> = orders.try_into().map_err(|_| BezierError::DimensionMismatch {
            quantity: "derivative orders",
            expected: P,
            found: orders.len(),
        })?;
        map_queries(queries, |q| self.derivative(q, &orders))
    }
}

impl<const P: usize, const D: usize> fmt::Display for Bezier<P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bezier, parametric dimension: {}, physical dimension: {}", P, D)
    }
}

/// Applies `f` to every row of a row-major query buffer in parallel.
pub(crate) fn map_queries<const P: usize, const D: usize, F>(queries: &[f64], f: F) -> Result<Vec<f64>, BezierError>
where
    F: Fn(&Query<P>) -> Point<D> + Sync,
{
    if P == 0 || queries.len() % P != 0 {
        return Err(BezierError::DimensionMismatch {
            quantity: "query coordinates per row",
            expected: P,
            found: queries.len(),
        });
    }
    trace!("evaluating {} queries", queries.len() / P);

    let results: Vec<Point<D>> = queries
        .par_chunks(P)
        .map(|row| {
            let query: Query<P> = std::array::from_fn(|k| row[k]);
            f(&query)
        })
        .collect();

    Ok(results.iter().flat_map(|point| point.iter().copied()).collect())
}
