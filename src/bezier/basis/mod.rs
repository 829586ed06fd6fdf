//! Evaluates the Bernstein basis polynomials
//!
//! `B_{i,p}(t) = C(p,i) t^i (1-t)^{p-i}`,  `i = 0, 1, ..., p`
//!
//! by the triangular blending scheme of de Casteljau, which only uses the convex weights `t` and `1-t`
//! and avoids the binomial coefficients. The basis is a polynomial, therefore parameters outside
//! of `[0,1]` are evaluated by extrapolation.

use crate::types::Point;

/// Returns the binomial coefficient `C(n, k)` as a float, zero for `k > n`.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (0..k).fold(1.0, |c, i| c * (n - i) as f64 / (i + 1) as f64)
}

/// Evaluates all `p+1` basis polynomials of degree `p` at `t`.
///
/// # Examples
/// ```
/// use beziers::bezier::basis::values;
///
/// assert_eq!(values(2, 0.5), vec![0.25, 0.5, 0.25]);
/// ```
pub fn values(p: usize, t: f64) -> Vec<f64> {
    let mut b = vec![0.0; p + 1];
    b[0] = 1.0;

    let s = 1.0 - t;
    for j in 1..=p {
        let mut saved = 0.0;
        for k in 0..j {
            let temp = b[k];
            b[k] = saved + s * temp;
            saved = t * temp;
        }
        b[j] = saved;
    }
    b
}

/// Returns the `p+1` weights `w_i` such that `Σ w_i c_i` is the `k`-th derivative of `Σ B_{i,p}(t) c_i`.
///
/// The derivative of a Bézier polynomial is
///
/// `p!/(p-k)! Σ_j B_{j,p-k}(t) Δ^k c_j`  with  `Δ^k c_j = Σ_m (-1)^{k-m} C(k,m) c_{j+m}`,
///
/// which is redistributed onto the original coefficients. For `k > p` all weights vanish.
pub fn derivative_values(p: usize, k: usize, t: f64) -> Vec<f64> {
    let mut w = vec![0.0; p + 1];
    if k > p {
        return w;
    }

    let factor: f64 = (p - k + 1..=p).map(|x| x as f64).product();
    let differences: Vec<f64> =
        (0..=k).map(|m| if (k - m) % 2 == 0 { binomial(k, m) } else { -binomial(k, m) }).collect();

    for (j, b) in values(p - k, t).iter().enumerate() {
        for (m, d) in differences.iter().enumerate() {
            w[j + m] += factor * d * b;
        }
    }
    w
}

/// Collapses a control polygon to its value at `t` by repeated linear blending.
///
/// The slice is used as scratch space and holds intermediate points afterwards.
/// An empty polygon evaluates to the origin.
pub fn de_casteljau<const D: usize>(points: &mut [Point<D>], t: f64) -> Point<D> {
    let s = 1.0 - t;
    for level in (1..points.len()).rev() {
        for i in 0..level {
            points[i] = points[i] * s + points[i + 1] * t;
        }
    }
    points.first().copied().unwrap_or_else(Point::zeros)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn binomials() {
        assert_eq!(binomial(0, 0), 1.0);
        assert_eq!(binomial(4, 2), 6.0);
        assert_eq!(binomial(10, 3), 120.0);
        assert_eq!(binomial(3, 4), 0.0);
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.3)]
    #[case(0.5)]
    #[case(1.0)]
    #[case(1.4)]
    fn matches_closed_form(#[case] t: f64) {
        let p = 5;
        for (i, b) in values(p, t).iter().enumerate() {
            let expected = binomial(p, i) * t.powi(i as i32) * (1.0 - t).powi((p - i) as i32);
            assert_relative_eq!(*b, expected, epsilon = 1e-14);
        }
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    #[case(9)]
    fn partition_of_unity(#[case] p: usize) {
        assert_relative_eq!(values(p, 0.37).iter().sum::<f64>(), 1.0, epsilon = 1e-14);
    }

    #[test]
    fn degree_zero() {
        assert_eq!(values(0, 0.7), vec![1.0]);
    }

    #[test]
    fn endpoints() {
        assert_eq!(values(3, 0.0), vec![1.0, 0.0, 0.0, 0.0]);
        assert_eq!(values(3, 1.0), vec![0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn first_derivative() {
        // d/dt [ (1-t)^2, 2t(1-t), t^2 ] = [ -2(1-t), 2 - 4t, 2t ]
        let t = 0.25;
        let w = derivative_values(2, 1, t);
        assert_relative_eq!(w[0], -2.0 * (1.0 - t), epsilon = 1e-14);
        assert_relative_eq!(w[1], 2.0 - 4.0 * t, epsilon = 1e-14);
        assert_relative_eq!(w[2], 2.0 * t, epsilon = 1e-14);
    }

    #[test]
    fn highest_derivative_is_constant() {
        // The third derivative of a cubic is 6 Δ^3 c_0.
        assert_eq!(derivative_values(3, 3, 0.8), vec![-6.0, 18.0, -18.0, 6.0]);
    }

    #[test]
    fn derivative_beyond_degree_vanishes() {
        assert_eq!(derivative_values(2, 3, 0.5), vec![0.0; 3]);
    }

    #[test]
    fn zeroth_derivative_is_basis() {
        assert_eq!(derivative_values(4, 0, 0.6), values(4, 0.6));
    }

    #[test]
    fn de_casteljau_matches_basis() {
        let t = 0.3;
        let mut polygon = vec![Point::<1>::new(1.0), Point::<1>::new(-2.0), Point::<1>::new(4.0)];
        let expected: f64 = values(2, t).iter().zip(&polygon).map(|(b, c)| b * c[0]).sum();
        assert_relative_eq!(de_casteljau(&mut polygon, t)[0], expected, epsilon = 1e-14);
    }

    #[test]
    fn de_casteljau_of_empty_polygon() {
        assert_eq!(de_casteljau::<2>(&mut [], 0.5), Point::<2>::zeros());
    }
}
