//! Implements the control-point grid of a Bézier spline.
//!
//! Points are stored as the columns of a `D × N` matrix in the lexicographic order of their
//! [multi-indices][crate::bezier::degrees]. Scalar splines use `D = 1`, so there is no separate
//! representation for scalar coefficients.

use nalgebra::{Const, Dyn};

use crate::types::{Point, PointMatrix};

#[derive(PartialEq, Debug, Clone)]
pub struct ControlPoints<const D: usize> {
    matrix: PointMatrix<D>,
}

impl<const D: usize> ControlPoints<D> {
    pub fn new(matrix: PointMatrix<D>) -> Self {
        ControlPoints { matrix }
    }

    /// Creates `count` points at the origin.
    pub fn zeros(count: usize) -> Self {
        ControlPoints { matrix: PointMatrix::zeros_generic(Const::<D>, Dyn(count)) }
    }

    pub fn from_points(points: &[Point<D>]) -> Self {
        let mut matrix = PointMatrix::zeros_generic(Const::<D>, Dyn(points.len()));
        for (mut column, point) in matrix.column_iter_mut().zip(points) {
            column.copy_from(point);
        }
        ControlPoints { matrix }
    }

    /// Reads a row-major `N × D` buffer, one point per row.
    ///
    /// Returns `None` if the buffer length is not a multiple of `D`.
    ///
    /// # Examples
    /// ```
    /// use beziers::bezier::points::ControlPoints;
    ///
    /// let points = ControlPoints::<2>::from_row_slice(&[0., 0., 1., 0., 1., 1.]).unwrap();
    /// assert_eq!(points.count(), 3);
    /// assert_eq!(points.get(2).as_slice(), [1., 1.]);
    /// ```
    pub fn from_row_slice(buffer: &[f64]) -> Option<Self> {
        if D == 0 || buffer.len() % D != 0 {
            return None;
        }
        Some(ControlPoints {
            matrix: PointMatrix::from_column_slice_generic(Const::<D>, Dyn(buffer.len() / D), buffer),
        })
    }

    pub fn matrix(&self) -> &PointMatrix<D> {
        &self.matrix
    }

    pub fn get(&self, i: usize) -> Point<D> {
        self.matrix.column(i).into_owned()
    }

    pub fn set(&mut self, i: usize, point: &Point<D>) {
        self.matrix.set_column(i, point);
    }

    pub fn iter(&self) -> impl Iterator<Item = Point<D>> + '_ {
        self.matrix.column_iter().map(|column| column.into_owned())
    }

    pub fn to_vec(&self) -> Vec<Point<D>> {
        self.iter().collect()
    }

    /// Returns the row-major `N × D` buffer.
    pub fn as_row_slice(&self) -> &[f64] {
        self.matrix.as_slice()
    }

    pub fn dimension(&self) -> usize {
        D
    }

    pub fn count(&self) -> usize {
        self.matrix.ncols()
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::vector;

    use super::*;

    fn control_points_example() -> ControlPoints<2> {
        ControlPoints::new(PointMatrix::from_columns(&[
            vector![1., 2.],
            vector![3., 4.],
            vector![5., 6.],
            vector![7., 8.],
        ]))
    }

    #[test]
    fn dimension() {
        assert_eq!(control_points_example().dimension(), 2);
    }

    #[test]
    fn count() {
        assert_eq!(control_points_example().count(), 4);
    }

    #[test]
    fn row_buffer() {
        assert_eq!(control_points_example().as_row_slice(), [1., 2., 3., 4., 5., 6., 7., 8.]);
        assert_eq!(ControlPoints::<2>::from_row_slice(&[1., 2., 3., 4., 5., 6., 7., 8.]), Some(control_points_example()));
    }

    #[test]
    fn ragged_row_buffer() {
        assert_eq!(ControlPoints::<3>::from_row_slice(&[1., 2., 3., 4.]), None);
    }

    #[test]
    fn from_points() {
        let points = ControlPoints::from_points(&[vector![1., 2.], vector![3., 4.], vector![5., 6.], vector![7., 8.]]);
        assert_eq!(points, control_points_example());
        assert_eq!(points.to_vec()[1], vector![3., 4.]);
    }

    #[test]
    fn set() {
        let mut points = ControlPoints::<2>::zeros(2);
        points.set(1, &vector![-1., 1.]);
        assert_eq!(points.as_row_slice(), [0., 0., -1., 1.]);
    }
}
