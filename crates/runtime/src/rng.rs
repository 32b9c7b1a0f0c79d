//! Entropy-backed draw source for live battles.

use game_core::DrawSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// [`DrawSource`] over `rand`'s standard generator.
///
/// Use [`PcgRng`](game_core::PcgRng) when turns must be replayable from the
/// battle seed; this source is for play sessions where they need not be.
#[derive(Debug, Clone)]
pub struct EntropyDraws {
    rng: StdRng,
}

impl EntropyDraws {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EntropyDraws {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl DrawSource for EntropyDraws {
    fn unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}
