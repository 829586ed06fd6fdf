//! Algebraic combinations of splines.
//!
//! Sums are taken in the common degree of both operands, the element-wise maximum of their degree vectors.
//! Products are exact and have the sum of both degree vectors as their degree (see [product]).
//!
//! | Operation                                         | Result                            |
//! |:--------------------------------------------------|:----------------------------------|
//! | [`Bezier::add_spline`], `a + b`                   | `Bezier<P, D>`                    |
//! | [`Bezier::sub_spline`], `a - b`, `-a`             | `Bezier<P, D>`                    |
//! | [`Bezier::scale`], `a * 2.0`                      | `Bezier<P, D>`                    |
//! | [`Bezier::multiply_with_scalar_spline`], `a * &s` | `Bezier<P, D>` for `s: Bezier<P, 1>` |
//! | [`Bezier::multiply_with_spline`]                  | `Bezier<P, 1>`, the dot product   |
//! | [`Bezier::power`]                                 | `Bezier<P, 1>`                    |

use std::ops::{Add, Mul, Neg, Sub};

use crate::{
    bezier::{degrees, points::ControlPoints, Bezier},
    manipulation::elevate::raised_to,
    types::{Point, PointMatrix},
};

pub mod product;

impl<const P: usize, const D: usize> Bezier<P, D> {
    /// Returns the sum of both splines.
    ///
    /// # Examples
    /// ```
    /// use beziers::bezier::Bezier;
    ///
    /// let line = Bezier::<1, 1>::from_flat(&[1], &[0., 1.]).unwrap();
    /// let bump = Bezier::<1, 1>::from_flat(&[2], &[0., 1., 0.]).unwrap();
    /// let sum = line.add_spline(&bump);
    /// assert_eq!(sum.degrees(), &[2]);
    /// assert_eq!(sum.control_points().as_row_slice(), [0., 1.5, 1.]);
    /// ```
    pub fn add_spline(&self, other: &Self) -> Self {
        self.combine(other, |a, b| a + b)
    }

    pub fn sub_spline(&self, other: &Self) -> Self {
        self.combine(other, |a, b| a - b)
    }

    fn combine<F>(&self, other: &Self, op: F) -> Self
    where
        F: Fn(&PointMatrix<D>, &PointMatrix<D>) -> PointMatrix<D>,
    {
        let target = degrees::max_degrees(self.degrees(), other.degrees());
        let (a, b) = (raised_to(self, &target), raised_to(other, &target));
        let matrix = op(a.control_points().matrix(), b.control_points().matrix());
        Bezier::from_parts(target, ControlPoints::new(matrix))
    }

    /// Multiplies every control point by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        Bezier::from_parts(*self.degrees(), ControlPoints::new(self.control_points().matrix() * factor))
    }

    /// Returns the product with a scalar-valued spline, applied to every physical coordinate.
    ///
    /// The degree along each direction is the sum of both degrees.
    pub fn multiply_with_scalar_spline(&self, factor: &Bezier<P, 1>) -> Self {
        product::bernstein_product(self, factor, |a, s| a * s[0])
    }

    /// Returns the scalar spline `x ↦ self(x) · other(x)`.
    pub fn multiply_with_spline(&self, other: &Self) -> Bezier<P, 1> {
        product::bernstein_product(self, other, |a, b| Point::<1>::new(a.dot(b)))
    }
}

impl<const P: usize> Bezier<P, 1> {
    /// Returns the spline that maps `x` to the constant `point` weighted by `self(x)`.
    pub(crate) fn times_point<const D: usize>(&self, point: &Point<D>) -> Bezier<P, D> {
        let points: Vec<Point<D>> = self.control_points().iter().map(|s| point * s[0]).collect();
        Bezier::from_parts(*self.degrees(), ControlPoints::from_points(&points))
    }

    /// Returns `self^exponent`, the constant one for a zero exponent.
    pub fn power(&self, exponent: usize) -> Self {
        let one = Bezier::constant(Point::<1>::new(1.0));
        (0..exponent).fold(one, |acc, _| acc.multiply_with_scalar_spline(self))
    }

    /// Returns `[1, self, self^2, ..., self^n]`.
    pub(crate) fn powers(&self, n: usize) -> Vec<Self> {
        let mut powers = Vec::with_capacity(n + 1);
        powers.push(Bezier::constant(Point::<1>::new(1.0)));
        for i in 0..n {
            let next = powers[i].multiply_with_scalar_spline(self);
            powers.push(next);
        }
        powers
    }
}

impl<'a, const P: usize, const D: usize> Add for &'a Bezier<P, D> {
    type Output = Bezier<P, D>;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_spline(rhs)
    }
}

impl<const P: usize, const D: usize> Add for Bezier<P, D> {
    type Output = Bezier<P, D>;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_spline(&rhs)
    }
}

impl<'a, const P: usize, const D: usize> Sub for &'a Bezier<P, D> {
    type Output = Bezier<P, D>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_spline(rhs)
    }
}

impl<const P: usize, const D: usize> Sub for Bezier<P, D> {
    type Output = Bezier<P, D>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_spline(&rhs)
    }
}

impl<'a, const P: usize, const D: usize> Neg for &'a Bezier<P, D> {
    type Output = Bezier<P, D>;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

impl<const P: usize, const D: usize> Neg for Bezier<P, D> {
    type Output = Bezier<P, D>;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

impl<'a, const P: usize, const D: usize> Mul<f64> for &'a Bezier<P, D> {
    type Output = Bezier<P, D>;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl<const P: usize, const D: usize> Mul<f64> for Bezier<P, D> {
    type Output = Bezier<P, D>;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl<'a, 'b, const P: usize, const D: usize> Mul<&'b Bezier<P, 1>> for &'a Bezier<P, D> {
    type Output = Bezier<P, D>;

    fn mul(self, rhs: &'b Bezier<P, 1>) -> Self::Output {
        self.multiply_with_scalar_spline(rhs)
    }
}
