//! Core fortune-telling engine for uranai.
//!
//! This crate holds the data model and the strategies: user profiles,
//! the closed set of fortune-telling strategies, and the fixed output
//! template. It is independent of the CLI — you can construct a profile
//! programmatically or deserialize one from JSON and tell a fortune
//! directly.

/// Run configuration: RNG seeding and candidate tables.
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// Fortune readings and the fixed output template.
pub mod fortune;
/// User profiles: validated name + birthday records.
pub mod profile;
/// The closed set of fortune-telling strategies.
pub mod strategy;

/// Re-export run configuration.
pub use config::TellerConfig;
/// Re-export error types.
pub use error::{UranaiError, UranaiResult};
/// Re-export the fortune reading type.
pub use fortune::Fortune;
/// Re-export profile types.
pub use profile::{UserProfile, load_profile};
/// Re-export strategy types.
pub use strategy::{BirthdayStrategy, RandomStrategy, Strategy, StrategyKind};
