//! Implements rational Bézier splines.
//!
//! A rational spline is the quotient
//!
//! `R(u) = Σ B_i(u) w_i c_i / Σ B_i(u) w_i`
//!
//! of a spline with the weighted control points `w_i c_i` and the scalar weight spline with the coefficients
//! `w_i`. Both share one degree vector. The weights are expected to keep the denominator away from zero on the
//! evaluated domain; a vanishing denominator yields non-finite coordinates.

use std::fmt;

use crate::{
    bezier::{degrees, map_queries, points::ControlPoints, Bezier, BezierError},
    manipulation::elevate::raised_to,
    types::{Degrees, Point, Query},
};

#[derive(Debug, Clone, PartialEq)]
pub struct RationalBezier<const P: usize, const D: usize> {
    weighted: Bezier<P, D>,
    weights: Bezier<P, 1>,
}

impl<const P: usize, const D: usize> RationalBezier<P, D> {
    /// Returns a rational Bézier spline from unweighted control points and one weight per point.
    ///
    /// # Examples
    /// ```
    /// use approx::assert_relative_eq;
    /// use nalgebra::vector;
    /// use beziers::bezier::points::ControlPoints;
    /// use beziers::rational::RationalBezier;
    ///
    /// // A quarter circle.
    /// let points = ControlPoints::from_points(&[vector![1., 0.], vector![1., 1.], vector![0., 1.]]);
    /// let arc = RationalBezier::<1, 2>::new([2], points, vec![1., 0.5_f64.sqrt(), 1.]).unwrap();
    /// assert_relative_eq!(arc.evaluate(&[0.3]).norm(), 1.0, epsilon = 1e-14);
    /// ```
    pub fn new(degrees: Degrees<P>, points: ControlPoints<D>, weights: Vec<f64>) -> Result<Self, BezierError> {
        let expected = degrees::point_count(&degrees);
        if weights.len() != expected {
            return Err(BezierError::WeightCountMismatch { expected, found: weights.len() });
        }

        let unweighted = Bezier::new(degrees, points)?;
        let weighted: Vec<Point<D>> = unweighted.control_points().iter().zip(&weights).map(|(c, w)| c * *w).collect();
        let weights: Vec<Point<1>> = weights.into_iter().map(Point::<1>::new).collect();

        Ok(Self {
            weighted: Bezier::from_parts(degrees, ControlPoints::from_points(&weighted)),
            weights: Bezier::from_parts(degrees, ControlPoints::from_points(&weights)),
        })
    }

    /// Returns the rational spline `weighted / weight`.
    ///
    /// Numerator and denominator are elevated to their common degree.
    pub fn from_parts(weighted: Bezier<P, D>, weight: Bezier<P, 1>) -> Self {
        let target = degrees::max_degrees(weighted.degrees(), weight.degrees());
        Self { weighted: raised_to(&weighted, &target), weights: raised_to(&weight, &target) }
    }

    /// Returns the polynomial spline as a rational spline with unit weights.
    pub fn from_polynomial(spline: Bezier<P, D>) -> Self {
        let degrees = *spline.degrees();
        let ones = ControlPoints::from_points(&vec![Point::<1>::new(1.0); spline.point_count()]);
        Self { weighted: spline, weights: Bezier::from_parts(degrees, ones) }
    }

    pub fn degrees(&self) -> &Degrees<P> {
        self.weighted.degrees()
    }

    /// Returns the weight coefficients.
    pub fn weights(&self) -> Vec<f64> {
        self.weights.control_points().iter().map(|w| w[0]).collect()
    }

    /// Returns the unweighted control points `c_i`.
    pub fn control_points(&self) -> ControlPoints<D> {
        let points: Vec<Point<D>> = self
            .weighted
            .control_points()
            .iter()
            .zip(self.weights.control_points().iter())
            .map(|(c, w)| c / w[0])
            .collect();
        ControlPoints::from_points(&points)
    }

    /// Returns the numerator spline with the weighted control points `w_i c_i`.
    pub fn weighted_spline(&self) -> &Bezier<P, D> {
        &self.weighted
    }

    /// Returns the denominator spline.
    pub fn weight_function(&self) -> &Bezier<P, 1> {
        &self.weights
    }

    pub fn para_dim(&self) -> usize {
        P
    }

    pub fn dim(&self) -> usize {
        D
    }

    pub fn evaluate(&self, query: &Query<P>) -> Point<D> {
        self.weighted.evaluate(query) / self.weights.evaluate(query)[0]
    }

    /// Evaluates a row-major `M × P` query buffer and returns the row-major `M × D` results.
    pub fn evaluate_batch(&self, queries: &[f64]) -> Result<Vec<f64>, BezierError> {
        map_queries(queries, |q| self.evaluate(q))
    }

    /// Raises the degree along `direction` by one, for numerator and denominator alike.
    pub fn elevate_degree(&mut self, direction: usize) -> Result<&mut Self, BezierError> {
        let weighted = self.weighted.elevated(direction)?;
        let weights = self.weights.elevated(direction)?;
        *self = Self { weighted, weights };
        Ok(self)
    }
}

impl<const P: usize, const D: usize> fmt::Display for RationalBezier<P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RationalBezier, parametric dimension: {}, physical dimension: {}", P, D)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::vector;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn quarter_circle() -> RationalBezier<1, 2> {
        let points = ControlPoints::from_points(&[vector![1., 0.], vector![1., 1.], vector![0., 1.]]);
        RationalBezier::new([2], points, vec![1., 0.5_f64.sqrt(), 1.]).unwrap()
    }

    #[rstest]
    fn lies_on_circle(quarter_circle: RationalBezier<1, 2>) {
        for t in [0.0, 0.1, 0.5, 0.77, 1.0] {
            assert_relative_eq!(quarter_circle.evaluate(&[t]).norm(), 1.0, epsilon = 1e-14);
        }
        assert_relative_eq!(quarter_circle.evaluate(&[0.5]), vector![0.5_f64.sqrt(), 0.5_f64.sqrt()], epsilon = 1e-14);
    }

    #[rstest]
    fn accessors(quarter_circle: RationalBezier<1, 2>) {
        assert_eq!(quarter_circle.degrees(), &[2]);
        assert_eq!(quarter_circle.weights(), vec![1., 0.5_f64.sqrt(), 1.]);
        assert_relative_eq!(quarter_circle.control_points().get(1), vector![1., 1.], epsilon = 1e-15);
        assert_relative_eq!(
            quarter_circle.weighted_spline().point(1),
            vector![0.5_f64.sqrt(), 0.5_f64.sqrt()],
            epsilon = 1e-15
        );
        assert_eq!(quarter_circle.to_string(), "RationalBezier, parametric dimension: 1, physical dimension: 2");
    }

    #[test]
    fn weight_count() {
        let points = ControlPoints::from_points(&[vector![1., 0.], vector![0., 1.]]);
        assert_eq!(
            RationalBezier::<1, 2>::new([1], points, vec![1.]),
            Err(BezierError::WeightCountMismatch { expected: 2, found: 1 })
        );
    }

    #[rstest]
    fn elevation_preserves_shape(quarter_circle: RationalBezier<1, 2>) {
        let mut elevated = quarter_circle.clone();
        elevated.elevate_degree(0).unwrap();
        assert_eq!(elevated.degrees(), &[3]);
        for t in [0.2, 0.6] {
            assert_relative_eq!(elevated.evaluate(&[t]), quarter_circle.evaluate(&[t]), epsilon = 1e-14);
        }
        assert!(elevated.elevate_degree(1).is_err());
    }

    #[test]
    fn unit_weights_reduce_to_polynomial() {
        let spline = Bezier::<2, 1>::from_flat(&[1, 2], &[0., 3., -1., 2., 5., 1.]).unwrap();
        let rational = RationalBezier::from_polynomial(spline.clone());
        assert_relative_eq!(rational.evaluate(&[0.4, 0.3]), spline.evaluate(&[0.4, 0.3]), epsilon = 1e-15);
    }

    #[test]
    fn parts_are_brought_to_common_degree() {
        let numerator = Bezier::<1, 1>::from_flat(&[2], &[0., 1., 2.]).unwrap();
        let weight = Bezier::<1, 1>::from_flat(&[0], &[2.]).unwrap();
        let r = RationalBezier::from_parts(numerator, weight);
        assert_eq!(r.weight_function().degrees(), &[2]);
        assert_eq!(r.evaluate(&[0.5]), vector![0.5]);
    }

    #[rstest]
    fn batch(quarter_circle: RationalBezier<1, 2>) {
        let values = quarter_circle.evaluate_batch(&[0.0, 1.0]).unwrap();
        assert_relative_eq!(values[0], 1.0, epsilon = 1e-15);
        assert_relative_eq!(values[3], 1.0, epsilon = 1e-15);
    }
}
