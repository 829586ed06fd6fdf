//! Multiplies splines in the Bernstein basis.
//!
//! The product of two Bézier polynomials of degrees `p` and `q` is the Bézier polynomial of degree `p+q` with
//!
//! `c_k = Σ_{i+j=k} C(p,i) C(q,j) / C(p+q,k) a_i b_j`.
//!
//! Tensor-product splines apply the formula per parametric direction, so the factor of a pair of multi-indices
//! is the product of the per-direction factors. How two coefficients are combined (scaling, dot product) is
//! left to the caller.

use crate::{
    bezier::{
        basis::binomial,
        degrees::{self, MultiIndices},
        points::ControlPoints,
        Bezier,
    },
    types::Point,
};

/// Returns the product spline, combining each pair of coefficients with `combine`.
pub(crate) fn bernstein_product<const P: usize, const A: usize, const B: usize, const R: usize, F>(
    a: &Bezier<P, A>,
    b: &Bezier<P, B>,
    combine: F,
) -> Bezier<P, R>
where
    F: Fn(&Point<A>, &Point<B>) -> Point<R>,
{
    let (pa, pb) = (a.degrees(), b.degrees());
    let result_degrees = degrees::sum_degrees(pa, pb);
    let strides = degrees::strides(&result_degrees);

    let binomials = |p: usize| (0..=p).map(|i| binomial(p, i)).collect::<Vec<_>>();
    let ca: [Vec<f64>; P] = std::array::from_fn(|k| binomials(pa[k]));
    let cb: [Vec<f64>; P] = std::array::from_fn(|k| binomials(pb[k]));
    let cr: [Vec<f64>; P] = std::array::from_fn(|k| binomials(result_degrees[k]));

    let a_points = a.control_points().to_vec();
    let b_points = b.control_points().to_vec();
    let b_indices: Vec<[usize; P]> = MultiIndices::new(*pb).collect();

    let mut points = vec![Point::<R>::zeros(); degrees::point_count(&result_degrees)];
    for (ia, a_point) in MultiIndices::new(*pa).zip(&a_points) {
        for (ib, b_point) in b_indices.iter().zip(&b_points) {
            let mut factor = 1.0;
            let mut k = [0; P];
            for d in 0..P {
                k[d] = ia[d] + ib[d];
                factor *= ca[d][ia[d]] * cb[d][ib[d]] / cr[d][k[d]];
            }
            points[degrees::flatten(&k, &strides)] += combine(a_point, b_point) * factor;
        }
    }

    Bezier::from_parts(result_degrees, ControlPoints::from_points(&points))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::vector;

    use super::*;

    #[test]
    fn linear_squared() {
        // t * t = t^2 = B_{2,2}
        let t = Bezier::<1, 1>::from_flat(&[1], &[0., 1.]).unwrap();
        let t2: Bezier<1, 1> = bernstein_product(&t, &t, |x, y| x * y[0]);
        assert_eq!(t2.degrees(), &[2]);
        assert_eq!(t2.control_points().as_row_slice(), [0., 0., 1.]);
    }

    #[test]
    fn one_minus_t_times_t() {
        // (1 - t) t = B_{1,2} / 2
        let s = Bezier::<1, 1>::from_flat(&[1], &[1., 0.]).unwrap();
        let t = Bezier::<1, 1>::from_flat(&[1], &[0., 1.]).unwrap();
        let product: Bezier<1, 1> = bernstein_product(&s, &t, |x, y| x * y[0]);
        assert_eq!(product.control_points().as_row_slice(), [0., 0.5, 0.]);
    }

    #[test]
    fn tensor_product() {
        // u * v on the unit square, built from u (degree [1, 0]) and v (degree [0, 1]).
        let u = Bezier::<2, 1>::from_flat(&[1, 0], &[0., 1.]).unwrap();
        let v = Bezier::<2, 1>::from_flat(&[0, 1], &[0., 1.]).unwrap();
        let uv: Bezier<2, 1> = bernstein_product(&u, &v, |x, y| x * y[0]);
        assert_eq!(uv.degrees(), &[1, 1]);
        assert_eq!(uv.control_points().as_row_slice(), [0., 0., 0., 1.]);
    }

    #[test]
    fn dot_combination() {
        let a = Bezier::<1, 2>::from_flat(&[1], &[1., 0., 0., 1.]).unwrap();
        let dot: Bezier<1, 1> = bernstein_product(&a, &a, |x, y| vector![x.dot(y)]);
        for t in [0.0, 0.3, 1.0] {
            assert_relative_eq!(dot.evaluate(&[t])[0], a.evaluate(&[t]).norm_squared(), epsilon = 1e-14);
        }
    }
}
