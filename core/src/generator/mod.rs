use rand::SeedableRng;
use rand::rngs::SmallRng;

mod random;

/// Deterministic generator for mine placement, reproducible from `seed`.
pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
