//! Birthday-based fortune strategy.
//!
//! Deterministic readings derived from how close today is to the profile
//! holder's birthday: a matching month earns the lucky color, an exact
//! date match earns the jackpot number.

use chrono::{Datelike, NaiveDate};

use crate::profile::UserProfile;

/// Deterministic readings keyed off the profile holder's birthday.
#[derive(Debug, Clone, Copy, Default)]
pub struct BirthdayStrategy;

impl BirthdayStrategy {
    /// `"red"` when the birthday month matches today's month, else `"blue"`.
    ///
    /// Only the month number is compared; year and day are irrelevant.
    pub fn lucky_color(&self, profile: &UserProfile, today: NaiveDate) -> String {
        if profile.birthday().month() == today.month() {
            "red".to_string()
        } else {
            "blue".to_string()
        }
    }

    /// `777` when today is exactly the birthday (year, month, and day),
    /// else `0`.
    pub fn lucky_number(&self, profile: &UserProfile, today: NaiveDate) -> i64 {
        if profile.birthday() == today { 777 } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn profile(birthday: NaiveDate) -> UserProfile {
        UserProfile::new("Alice", birthday).unwrap()
    }

    #[test]
    fn color_red_iff_months_match() {
        let strategy = BirthdayStrategy;
        for birth_month in 1..=12 {
            for today_month in 1..=12 {
                let p = profile(date(1990, birth_month, 10));
                let today = date(2024, today_month, 20);
                let expected = if birth_month == today_month { "red" } else { "blue" };
                assert_eq!(strategy.lucky_color(&p, today), expected);
            }
        }
    }

    #[test]
    fn color_ignores_year_and_day() {
        let strategy = BirthdayStrategy;
        let profile = profile(date(1985, 3, 1));
        assert_eq!(strategy.lucky_color(&profile, date(2024, 3, 31)), "red");
    }

    #[test]
    fn number_on_exact_birthday() {
        let strategy = BirthdayStrategy;
        let profile = profile(date(2024, 3, 15));
        assert_eq!(strategy.lucky_number(&profile, date(2024, 3, 15)), 777);
    }

    #[test]
    fn number_zero_on_different_day() {
        let strategy = BirthdayStrategy;
        let profile = profile(date(2024, 1, 1));
        assert_eq!(strategy.lucky_number(&profile, date(2024, 3, 15)), 0);
    }

    #[test]
    fn number_zero_same_month_different_day() {
        let strategy = BirthdayStrategy;
        let profile = profile(date(2024, 3, 1));
        assert_eq!(strategy.lucky_number(&profile, date(2024, 3, 15)), 0);
        assert_eq!(strategy.lucky_color(&profile, date(2024, 3, 15)), "red");
    }

    #[test]
    fn number_zero_same_month_day_different_year() {
        let strategy = BirthdayStrategy;
        let profile = profile(date(1990, 3, 15));
        assert_eq!(strategy.lucky_number(&profile, date(2024, 3, 15)), 0);
    }
}
