//! Shared helpers

use rand::{SeedableRng, rngs::StdRng};

/// Seeded generator when `seed` is set, otherwise one drawn from the thread RNG.
pub fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}
