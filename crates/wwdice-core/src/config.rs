//! Configuration for a rolling session.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::dice::D10_SIDES;

/// Difficulty used when a caller does not name one.
pub const DEFAULT_DIFFICULTY: u8 = 6;

/// Settings shared by every roll a caller makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollerConfig {
    /// RNG seed for reproducible rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Difficulty for formula rolls (1-10).
    pub default_difficulty: u8,
}

impl Default for RollerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            default_difficulty: DEFAULT_DIFFICULTY,
        }
    }
}

impl RollerConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the default difficulty (clamped to 1-10).
    pub fn with_difficulty(mut self, difficulty: u8) -> Self {
        self.default_difficulty = difficulty.clamp(1, D10_SIDES);
        self
    }

    /// Build the random source for this session.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
