//! Degree vectors and the lexicographic multi-index addressing of the control-point grid.
//!
//! A spline with degrees `(p_0, …, p_{P-1})` owns `N = ∏(p_k + 1)` control points. The point with
//! multi-index `(i_0, …, i_{P-1})` is stored at the flat position `Σ i_k s_k` with the strides
//! `s_{P-1} = 1` and `s_k = s_{k+1} (p_{k+1} + 1)`, i.e. the last parametric direction varies fastest.

use crate::types::Degrees;

/// Returns the number of control points `N = ∏(p_k + 1)`.
pub fn point_count<const P: usize>(degrees: &Degrees<P>) -> usize {
    degrees.iter().map(|p| p + 1).product()
}

/// Returns the flat offset between neighbouring control points along each direction.
pub fn strides<const P: usize>(degrees: &Degrees<P>) -> [usize; P] {
    let mut strides = [1; P];
    for k in (0..P.saturating_sub(1)).rev() {
        strides[k] = strides[k + 1] * (degrees[k + 1] + 1);
    }
    strides
}

/// Maps a multi-index to its flat position.
pub fn flatten<const P: usize>(index: &[usize; P], strides: &[usize; P]) -> usize {
    index.iter().zip(strides).map(|(i, s)| i * s).sum()
}

/// Maps a flat position back to its multi-index.
pub fn unflatten<const P: usize>(mut flat: usize, degrees: &Degrees<P>) -> [usize; P] {
    let mut index = [0; P];
    for k in (0..P).rev() {
        index[k] = flat % (degrees[k] + 1);
        flat /= degrees[k] + 1;
    }
    index
}

/// The element-wise maximum, used as the common degree of two operands.
pub fn max_degrees<const P: usize>(a: &Degrees<P>, b: &Degrees<P>) -> Degrees<P> {
    std::array::from_fn(|k| a[k].max(b[k]))
}

/// The element-wise sum, i.e. the degree of a polynomial product.
pub fn sum_degrees<const P: usize>(a: &Degrees<P>, b: &Degrees<P>) -> Degrees<P> {
    std::array::from_fn(|k| a[k] + b[k])
}

/// Iterates over all multi-indices of a grid in storage order.
///
/// # Examples
/// ```
/// use beziers::bezier::degrees::MultiIndices;
///
/// let indices: Vec<_> = MultiIndices::new([1, 2]).collect();
/// assert_eq!(indices, vec![[0, 0], [0, 1], [0, 2], [1, 0], [1, 1], [1, 2]]);
/// ```
#[derive(Debug, Clone)]
pub struct MultiIndices<const P: usize> {
    degrees: Degrees<P>,
    next: Option<[usize; P]>,
}

impl<const P: usize> MultiIndices<P> {
    pub fn new(degrees: Degrees<P>) -> Self {
        Self { degrees, next: Some([0; P]) }
    }
}

impl<const P: usize> Iterator for MultiIndices<P> {
    type Item = [usize; P];

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        self.next = None;
        let mut advanced = current;
        for k in (0..P).rev() {
            if advanced[k] < self.degrees[k] {
                advanced[k] += 1;
                self.next = Some(advanced);
                break;
            }
            advanced[k] = 0;
        }

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count() {
        assert_eq!(point_count(&[2]), 3);
        assert_eq!(point_count(&[1, 2, 0]), 6);
        assert_eq!(point_count::<0>(&[]), 1);
    }

    #[test]
    fn strides_last_direction_fastest() {
        assert_eq!(strides(&[3]), [1]);
        assert_eq!(strides(&[1, 2]), [3, 1]);
        assert_eq!(strides(&[1, 2, 3]), [12, 4, 1]);
    }

    #[test]
    fn flatten_matches_iteration_order() {
        let degrees = [2, 1, 3];
        let s = strides(&degrees);
        for (flat, index) in MultiIndices::new(degrees).enumerate() {
            assert_eq!(flatten(&index, &s), flat);
            assert_eq!(unflatten(flat, &degrees), index);
        }
    }

    #[test]
    fn iteration_visits_every_point_once() {
        let degrees = [2, 0, 1];
        assert_eq!(MultiIndices::new(degrees).count(), point_count(&degrees));
        assert_eq!(MultiIndices::new(degrees).last(), Some([2, 0, 1]));
    }

    #[test]
    fn degree_combinations() {
        assert_eq!(max_degrees(&[1, 4], &[3, 2]), [3, 4]);
        assert_eq!(sum_degrees(&[1, 4], &[3, 2]), [4, 6]);
    }
}
