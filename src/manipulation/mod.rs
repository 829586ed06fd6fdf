//! Operations replacing the representation of a spline while keeping or deriving its shape.
//!
//! - [degree elevation][elevate]
//! - [differentiation][differentiate]

pub mod differentiate;
pub mod elevate;
