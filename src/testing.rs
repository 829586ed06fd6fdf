//! Shared fixtures for unit tests.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    bezier::{degrees, Bezier},
    types::Degrees,
};

/// Returns a spline with reproducible pseudo-random control points in `[-1, 1)`.
pub(crate) fn random_spline<const P: usize, const D: usize>(degrees: Degrees<P>, seed: u64) -> Bezier<P, D> {
    let mut rng = StdRng::seed_from_u64(seed);
    let buffer: Vec<f64> = (0..degrees::point_count(&degrees) * D).map(|_| rng.gen_range(-1.0..1.0)).collect();
    Bezier::from_flat(&degrees, &buffer).unwrap()
}
