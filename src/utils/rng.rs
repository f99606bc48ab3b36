use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Stream names handed to [`RngManager::get_rng`].
pub mod streams {
    pub const HOMING_START: &str = "homing_start";
    pub const TERRAIN: &str = "terrain";
    pub const TURBULENCE: &str = "turbulence";
    pub const ENGINE_FAILURE: &str = "engine_failure";
    pub const PARTICLES: &str = "particles";
}

/// Derives independent deterministic RNG streams from one master seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    master_seed: u64,
}

impl RngManager {
    pub fn new(seed: u64) -> Self {
        Self { master_seed: seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    // Get a new RNG for a stream by hashing its name with master seed
    pub fn get_rng(&self, name: &str) -> ChaCha8Rng {
        let mut hasher = DefaultHasher::new();
        self.master_seed.hash(&mut hasher);
        name.hash(&mut hasher);
        ChaCha8Rng::seed_from_u64(hasher.finish())
    }
}
