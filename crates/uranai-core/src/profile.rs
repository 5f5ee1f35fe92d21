//! User profiles consumed by the fortune-telling engine.
//!
//! A profile is a name plus a birthday. It is validated at construction
//! and at deserialization, so every [`UserProfile`] in the program holds
//! a non-empty name.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{UranaiError, UranaiResult};

/// A validated user profile: who the fortune is for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProfile")]
pub struct UserProfile {
    name: String,
    birthday: NaiveDate,
}

/// On-disk profile record, as found in `profile.json`:
/// `{ "name": string, "birthday": "YYYY-MM-DD" }`.
#[derive(Debug, Deserialize)]
struct RawProfile {
    name: String,
    birthday: NaiveDate,
}

impl TryFrom<RawProfile> for UserProfile {
    type Error = UranaiError;

    fn try_from(raw: RawProfile) -> UranaiResult<Self> {
        Self::new(raw.name, raw.birthday)
    }
}

impl UserProfile {
    /// Create a profile, rejecting empty or whitespace-only names.
    pub fn new(name: impl Into<String>, birthday: NaiveDate) -> UranaiResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UranaiError::EmptyName);
        }
        Ok(Self { name, birthday })
    }

    /// The built-in profile used when no profile file is available.
    pub fn builtin() -> Self {
        Self {
            name: "Alice".to_string(),
            birthday: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default(),
        }
    }

    /// The profile holder's name. Always non-empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the profile holder. The non-empty invariant still applies.
    pub fn set_name(&mut self, name: impl Into<String>) -> UranaiResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UranaiError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    /// The profile holder's birthday.
    pub fn birthday(&self) -> NaiveDate {
        self.birthday
    }
}

/// Load and validate a profile from a JSON file.
pub fn load_profile(path: &Path) -> UranaiResult<UserProfile> {
    let contents = std::fs::read_to_string(path)?;
    let profile = serde_json::from_str(&contents)?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_accepts_valid_profile() {
        let profile = UserProfile::new("Alice", date(2024, 3, 15)).unwrap();
        assert_eq!(profile.name(), "Alice");
        assert_eq!(profile.birthday(), date(2024, 3, 15));
    }

    #[test]
    fn new_rejects_empty_name() {
        assert!(matches!(
            UserProfile::new("", date(2024, 3, 15)),
            Err(UranaiError::EmptyName)
        ));
        assert!(matches!(
            UserProfile::new("   ", date(2024, 3, 15)),
            Err(UranaiError::EmptyName)
        ));
    }

    #[test]
    fn set_name_enforces_invariant() {
        let mut profile = UserProfile::new("Alice", date(2024, 3, 15)).unwrap();
        profile.set_name("Bob").unwrap();
        assert_eq!(profile.name(), "Bob");
        assert!(profile.set_name("").is_err());
        assert_eq!(profile.name(), "Bob");
    }

    #[test]
    fn deserialize_valid_record() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"name": "Alice", "birthday": "2024-03-15"}"#).unwrap();
        assert_eq!(profile.name(), "Alice");
        assert_eq!(profile.birthday(), date(2024, 3, 15));
    }

    #[test]
    fn deserialize_rejects_empty_name() {
        let result: Result<UserProfile, _> =
            serde_json::from_str(r#"{"name": "", "birthday": "2024-03-15"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_rejects_malformed_date() {
        let result: Result<UserProfile, _> =
            serde_json::from_str(r#"{"name": "Alice", "birthday": "not-a-date"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_rejects_missing_fields() {
        let result: Result<UserProfile, _> = serde_json::from_str(r#"{"name": "Alice"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn load_profile_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, r#"{"name": "Alice", "birthday": "1999-12-31"}"#).unwrap();

        let profile = load_profile(&path).unwrap();
        assert_eq!(profile.name(), "Alice");
        assert_eq!(profile.birthday(), date(1999, 12, 31));
    }

    #[test]
    fn load_profile_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load_profile(&dir.path().join("nope.json")),
            Err(UranaiError::Io(_))
        ));
    }

    #[test]
    fn builtin_profile_is_valid() {
        let profile = UserProfile::builtin();
        assert!(!profile.name().trim().is_empty());
    }
}
