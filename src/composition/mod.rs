//! Composes splines.
//!
//! For an outer spline `S: [0,1]^P → R^D` of degrees `(p_0, …, p_{P-1})` and an inner spline
//! `f: [0,1]^I → R^P` of degrees `(q_0, …, q_{I-1})` the composition
//!
//! `(S ∘ f)(x) = Σ_i c_i ∏_k C(p_k, i_k) f_k(x)^{i_k} (1 - f_k(x))^{p_k - i_k}`
//!
//! is again a polynomial. Every factor is assembled with exact [spline products][crate::algebra::product],
//! so nothing is truncated. Each term of the sum has the degree
//!
//! `Σ_k p_k q_d`  along inner direction `d`,
//!
//! which is the degree of the result.
//!
//! A rational inner function `f = n / w` is substituted the same way with `f_k ↦ n_k` and `1 - f_k ↦ w - n_k`.
//! The common denominator of all terms is `w^{Σ p_k}`.

use log::debug;

use crate::{
    bezier::{basis::binomial, degrees::MultiIndices, Bezier},
    rational::RationalBezier,
    types::Point,
};

impl<const P: usize, const D: usize> Bezier<P, D> {
    /// Returns the spline `x ↦ self(inner(x))`.
    ///
    /// # Examples
    /// ```
    /// use approx::assert_relative_eq;
    /// use beziers::bezier::Bezier;
    ///
    /// // f(u) = u^2 composed with g(t) = (1 + t) / 2
    /// let f = Bezier::<1, 1>::from_flat(&[2], &[0., 0., 1.]).unwrap();
    /// let g = Bezier::<1, 1>::from_flat(&[1], &[0.5, 1.]).unwrap();
    /// let h = f.compose(&g);
    /// assert_eq!(h.degrees(), &[2]);
    /// assert_relative_eq!(h.evaluate(&[0.2])[0], 0.36, epsilon = 1e-15);
    /// ```
    pub fn compose<const I: usize>(&self, inner: &Bezier<I, P>) -> Bezier<I, D> {
        let numerators: [Bezier<I, 1>; P] = std::array::from_fn(|k| inner.scalar_component(k));
        let one = Bezier::<I, 1>::constant(Point::<1>::new(1.0));
        let complements: [Bezier<I, 1>; P] = std::array::from_fn(|k| &one - &numerators[k]);

        debug!("composing {} with {}, target degrees {:?}", self, inner, self.composed_degrees(inner.degrees()));
        substitute(self, &numerators, &complements)
    }

    /// Returns the rational spline `x ↦ self(inner(x))`.
    pub fn compose_rational<const I: usize>(&self, inner: &RationalBezier<I, P>) -> RationalBezier<I, D> {
        let weight = inner.weight_function();
        let numerators: [Bezier<I, 1>; P] = std::array::from_fn(|k| inner.weighted_spline().scalar_component(k));
        let complements: [Bezier<I, 1>; P] = std::array::from_fn(|k| weight - &numerators[k]);

        debug!("composing {} with {}, target degrees {:?}", self, inner, self.composed_degrees(inner.degrees()));
        let numerator = substitute(self, &numerators, &complements);
        let denominator = weight.power(self.degrees().iter().sum());

        RationalBezier::from_parts(numerator, denominator)
    }

    /// Returns the degrees of the composition with an inner spline of the given degrees.
    pub fn composed_degrees<const I: usize>(&self, inner: &[usize; I]) -> [usize; I] {
        let total: usize = self.degrees().iter().sum();
        inner.map(|q| total * q)
    }
}

impl<const P: usize, const D: usize> RationalBezier<P, D> {
    /// Returns the rational spline `x ↦ self(inner(x))`, composing numerator and weight separately.
    pub fn compose<const I: usize>(&self, inner: &Bezier<I, P>) -> RationalBezier<I, D> {
        RationalBezier::from_parts(self.weighted_spline().compose(inner), self.weight_function().compose(inner))
    }
}

/// Replaces `t_k` by `numerators[k]` and `1 - t_k` by `complements[k]` in the Bernstein form of `outer`.
fn substitute<const P: usize, const I: usize, const D: usize>(
    outer: &Bezier<P, D>,
    numerators: &[Bezier<I, 1>; P],
    complements: &[Bezier<I, 1>; P],
) -> Bezier<I, D> {
    let bases: [Vec<Bezier<I, 1>>; P] =
        std::array::from_fn(|k| composed_basis(outer.degrees()[k], &numerators[k], &complements[k]));

    let one = Bezier::<I, 1>::constant(Point::<1>::new(1.0));
    MultiIndices::new(*outer.degrees())
        .enumerate()
        .map(|(i, index)| {
            let weight = index
                .iter()
                .enumerate()
                .fold(one.clone(), |acc, (k, &j)| acc.multiply_with_scalar_spline(&bases[k][j]));
            weight.times_point(&outer.point(i))
        })
        .reduce(|sum, term| sum + term)
        .unwrap_or_else(|| Bezier::zeros([0; I]))
}

/// Returns `C(p, j) f^j g^{p-j}` for `j = 0, 1, ..., p`.
fn composed_basis<const I: usize>(p: usize, f: &Bezier<I, 1>, g: &Bezier<I, 1>) -> Vec<Bezier<I, 1>> {
    let f_powers = f.powers(p);
    let g_powers = g.powers(p);
    (0..=p).map(|j| f_powers[j].multiply_with_scalar_spline(&g_powers[p - j]).scale(binomial(p, j))).collect()
}
