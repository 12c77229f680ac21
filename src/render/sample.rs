//! Deterministic choice of which points get a text label

use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

/// Indices of `len / 10` distinct points, chosen pseudo-randomly from `seed`.
///
/// The same `(len, seed)` always yields the same indices in the same order.
/// Fewer than ten points means no labels.
pub fn annotation_sample(len: usize, seed: u64) -> Vec<usize> {
    let amount = len / 10;
    let mut rng = StdRng::seed_from_u64(seed);
    index::sample(&mut rng, len, amount).into_vec()
}
