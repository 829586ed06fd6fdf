//! **beziers** is a library for tensor-product Bézier splines of arbitrary parametric and physical dimension
//! based on [nalgebra].
//!
//! ## Features
//! - Create splines `Bezier<P, D>` mapping `P`-dimensional parameters to `D`-dimensional points
//!   (`P, D = 1, 2, 3,...`) with an individual polynomial degree per parametric direction.
//! - [Evaluation][bezier::Bezier::evaluate] by blending precomputed [Bernstein bases][bezier::basis] or
//!   [recursively][bezier::Bezier::recursive_evaluate] with de Casteljau's algorithm.
//! - Mixed partial [derivatives][bezier::Bezier::derivative] of any order and their
//!   [derivative splines][manipulation::differentiate].
//! - Exact [degree elevation][manipulation::elevate].
//! - [Spline algebra][algebra]: sums, scalar and spline products.
//! - [Composition][composition] of polynomial and [rational][rational] splines.
//! - Batch evaluation of row-major query buffers, parallelized with [rayon].
//! - A canonical [state][bezier::state] of degrees and control points for persistence via [serde].
//!
//! ## What are Bézier splines?
//!
//! A Bézier spline of degree `p` is a polynomial written in the Bernstein basis
//! `B_{i,p}(t) = C(p,i) t^i (1-t)^{p-i}`, weighting `p+1` control points. The control points outline the shape:
//! the spline interpolates the first and the last one, and lies in the convex hull of all of them on `[0,1]`.
//! Tensor-product splines apply one basis per parametric direction to a grid of control points and describe
//! surfaces (`P = 2`), volumes (`P = 3`), or higher-dimensional patches.
//!
//! Since Bézier splines are polynomials, sums, products, derivatives and compositions of them are Bézier
//! splines as well. This crate computes these exactly in the Bernstein basis.
//!
//! ```
//! use approx::assert_relative_eq;
//! use beziers::bezier::Bezier;
//!
//! // A quadratic scalar bump.
//! let bump = Bezier::<1, 1>::from_flat(&[2], &[0., 1., 0.]).unwrap();
//! assert_eq!(bump.evaluate(&[0.5])[0], 0.5);
//!
//! // Squaring the bump and evaluating the result.
//! let square = &bump * &bump;
//! assert_eq!(square.degrees(), &[4]);
//! assert_relative_eq!(square.evaluate(&[0.5])[0], 0.25, epsilon = 1e-15);
//! ```
//!
//! ## Literature:
//! |            |                                                                                                                        |
//! |-----------:|:-----------------------------------------------------------------------------------------------------------------------|
//! | Piegl1997  | Piegl, L., Tiller, W. The NURBS Book. Monographs in Visual Communication. Springer, Berlin, Heidelberg, 2nd ed., 1997. |
//! | Farin2002  | Farin, G. Curves and Surfaces for CAGD: A Practical Guide. Morgan Kaufmann, San Francisco, 5th ed., 2002.             |
//! | DeRose1993 | DeRose, T. D., Goldman, R. N., Hagen, H., Mann, S. Functional composition algorithms via blossoming, ACM Trans. Graph., 12(2) (1993) 113–135. |

pub mod algebra;
pub mod bezier;
pub mod composition;
pub mod manipulation;
pub mod rational;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
