//! Deterministic random stream derivation.
//!
//! Parallel branches never share a generator. Each branch gets its own `StdRng`
//! seeded from the master seed and its index, so results do not depend on how
//! work is scheduled across threads.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// The generator every component of the engine draws from
pub type SimRng = StdRng;

/// Builds the standard generator from a seed
pub fn seeded_rng(seed: u64) -> SimRng {
    StdRng::seed_from_u64(seed)
}

/// SplitMix64 finalizer
fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Seed for the sub-stream at `index` below `seed`
pub fn derive_seed(seed: u64, index: u64) -> u64 {
    mix(mix(seed).wrapping_add(index.wrapping_add(1).wrapping_mul(0x9e37_79b9_7f4a_7c15)))
}

/// Generator for the sub-stream at `index` below `seed`
pub fn substream(seed: u64, index: u64) -> SimRng {
    seeded_rng(derive_seed(seed, index))
}
