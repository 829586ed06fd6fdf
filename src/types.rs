use nalgebra::{Const, Dyn, OMatrix, SVector};

/// A point in `D`-dimensional physical space. Scalar splines use `D = 1`.
pub type Point<const D: usize> = SVector<f64, D>;

/// Control points stored column-wise, one column per point.
///
/// The column-major storage of a `D × N` matrix is exactly the row-major `N × D` buffer
/// exchanged at the crate boundary.
pub type PointMatrix<const D: usize> = OMatrix<f64, Const<D>, Dyn>;

/// One polynomial degree per parametric direction.
pub type Degrees<const P: usize> = [usize; P];

/// A position in `P`-dimensional parametric space.
pub type Query<const P: usize> = [f64; P];

/// Derivative orders, one per parametric direction.
pub type Orders<const P: usize> = [usize; P];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_matrix_storage_is_row_major_point_buffer() {
        let m = PointMatrix::<2>::from_column_slice_generic(Const::<2>, Dyn(3), &[1., 2., 3., 4., 5., 6.]);
        assert_eq!(m.ncols(), 3);
        assert_eq!(m.column(1).into_owned(), Point::<2>::new(3., 4.));
        assert_eq!(m.as_slice(), [1., 2., 3., 4., 5., 6.]);
    }
}
