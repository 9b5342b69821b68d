use bevy_ecs::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// The single seeded generator every stochastic economy step draws from.
#[derive(Resource, Debug, Clone)]
pub struct EconomyRng(pub ChaCha20Rng);

impl EconomyRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha20Rng::seed_from_u64(seed))
    }
}
