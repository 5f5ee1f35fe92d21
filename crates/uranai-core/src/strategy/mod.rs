//! Fortune-telling strategies.
//!
//! Each strategy derives a lucky color and a lucky number differently:
//! - **Random**: uniform draws from fixed candidate tables
//! - **Birthday**: deterministic values keyed off the profile's birthday
//!
//! The variant set is closed; a strategy identifier outside it is a
//! configuration error.

pub mod birthday;
pub mod random;

pub use birthday::BirthdayStrategy;
pub use random::RandomStrategy;

use std::str::FromStr;

use chrono::NaiveDate;
use rand::rngs::StdRng;

use crate::error::{UranaiError, UranaiResult};
use crate::fortune::Fortune;
use crate::profile::UserProfile;

/// Identifier tag for a fortune-telling strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Uniform draws from candidate tables.
    Random,
    /// Readings derived from the profile holder's birthday.
    Birthday,
}

impl StrategyKind {
    /// All known strategy kinds.
    pub fn all() -> &'static [Self] {
        &[Self::Random, Self::Birthday]
    }
}

impl FromStr for StrategyKind {
    type Err = UranaiError;

    fn from_str(s: &str) -> UranaiResult<Self> {
        match s {
            "random" => Ok(Self::Random),
            "birthday" => Ok(Self::Birthday),
            other => Err(UranaiError::UnknownStrategy(other.to_string())),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Birthday => write!(f, "birthday"),
        }
    }
}

/// How a fortune is derived from a profile and a reference date.
#[derive(Debug, Clone)]
pub enum Strategy {
    /// Uniform draws from candidate tables (profile and date ignored).
    Random(RandomStrategy),
    /// Deterministic readings keyed off the birthday.
    Birthday(BirthdayStrategy),
}

impl Strategy {
    /// Construct the default strategy for a kind.
    ///
    /// `Random` gets the built-in candidate tables; `Birthday` carries no
    /// configuration.
    pub fn select(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Random => Self::Random(RandomStrategy::default()),
            StrategyKind::Birthday => Self::Birthday(BirthdayStrategy),
        }
    }

    /// Derive the lucky color for a profile on a given date.
    pub fn lucky_color(
        &self,
        profile: &UserProfile,
        today: NaiveDate,
        rng: &mut StdRng,
    ) -> String {
        match self {
            Self::Random(s) => s.lucky_color(rng),
            Self::Birthday(s) => s.lucky_color(profile, today),
        }
    }

    /// Derive the lucky number for a profile on a given date.
    pub fn lucky_number(
        &self,
        profile: &UserProfile,
        today: NaiveDate,
        rng: &mut StdRng,
    ) -> i64 {
        match self {
            Self::Random(s) => s.lucky_number(rng),
            Self::Birthday(s) => s.lucky_number(profile, today),
        }
    }

    /// Tell a full fortune: both derived values assembled into a [`Fortune`].
    ///
    /// The profile is never mutated; the only effect is drawing from `rng`.
    pub fn tell(&self, profile: &UserProfile, today: NaiveDate, rng: &mut StdRng) -> Fortune {
        let lucky_color = self.lucky_color(profile, today, rng);
        let lucky_number = self.lucky_number(profile, today, rng);

        Fortune {
            date: today,
            name: profile.name().to_string(),
            lucky_color,
            lucky_number,
        }
    }
}
