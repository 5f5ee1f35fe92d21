//! Configuration for a fortune-telling run.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::UranaiResult;
use crate::strategy::{BirthdayStrategy, RandomStrategy, Strategy, StrategyKind};
use crate::strategy::random::{DEFAULT_COLORS, DEFAULT_NUMBERS};

/// Configuration for telling fortunes: RNG seeding and the candidate
/// tables handed to the random strategy.
#[derive(Debug, Clone)]
pub struct TellerConfig {
    /// RNG seed for reproducible random readings. `None` uses OS entropy.
    pub seed: Option<u64>,
    /// Candidate colors for the random strategy.
    pub colors: Vec<String>,
    /// Candidate numbers for the random strategy.
    pub numbers: Vec<i64>,
}

impl Default for TellerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            colors: DEFAULT_COLORS.iter().map(|s| (*s).to_string()).collect(),
            numbers: DEFAULT_NUMBERS.to_vec(),
        }
    }
}

impl TellerConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the candidate color table.
    pub fn with_colors(mut self, colors: Vec<String>) -> Self {
        self.colors = colors;
        self
    }

    /// Replace the candidate number table.
    pub fn with_numbers(mut self, numbers: Vec<i64>) -> Self {
        self.numbers = numbers;
        self
    }

    /// Build the RNG: seeded when a seed is set, OS entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Build the strategy for a kind using this configuration.
    ///
    /// Fails when `Random` is requested with an empty candidate table.
    pub fn strategy(&self, kind: StrategyKind) -> UranaiResult<Strategy> {
        match kind {
            StrategyKind::Random => Ok(Strategy::Random(RandomStrategy::new(
                self.colors.clone(),
                self.numbers.clone(),
            )?)),
            StrategyKind::Birthday => Ok(Strategy::Birthday(BirthdayStrategy)),
        }
    }
}
