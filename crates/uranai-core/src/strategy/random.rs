//! Random fortune strategy.
//!
//! Draws the lucky color and lucky number uniformly from fixed candidate
//! tables, ignoring the profile and the date entirely.

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{UranaiError, UranaiResult};

/// Default candidate colors for the random strategy.
pub const DEFAULT_COLORS: &[&str] = &["red", "green", "blue"];

/// Default candidate numbers for the random strategy.
pub const DEFAULT_NUMBERS: &[i64] = &[1, 2, 3];

/// Uniform draws from configured candidate tables.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    colors: Vec<String>,
    numbers: Vec<i64>,
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|s| (*s).to_string()).collect(),
            numbers: DEFAULT_NUMBERS.to_vec(),
        }
    }
}

impl RandomStrategy {
    /// Create a random strategy with custom candidate tables.
    ///
    /// Both tables must be non-empty; an empty table can never produce a
    /// draw, so construction fails fast instead.
    pub fn new(colors: Vec<String>, numbers: Vec<i64>) -> UranaiResult<Self> {
        if colors.is_empty() {
            return Err(UranaiError::EmptyTable("color"));
        }
        if numbers.is_empty() {
            return Err(UranaiError::EmptyTable("number"));
        }
        Ok(Self { colors, numbers })
    }

    /// The configured candidate colors.
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// The configured candidate numbers.
    pub fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    /// Pick a lucky color uniformly from the color table.
    pub fn lucky_color(&self, rng: &mut StdRng) -> String {
        self.colors[rng.random_range(0..self.colors.len())].clone()
    }

    /// Pick a lucky number uniformly from the number table.
    pub fn lucky_number(&self, rng: &mut StdRng) -> i64 {
        self.numbers[rng.random_range(0..self.numbers.len())]
    }
}
