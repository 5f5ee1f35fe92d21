//! A single fortune reading and its output template.
//!
//! The rendered text is a fixed Japanese template. Downstream consumers
//! depend on the exact byte sequence (including the leading and trailing
//! blank lines), so the formatting here must not change.

use chrono::NaiveDate;

/// One fortune reading: the derived outputs for a profile on a given date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fortune {
    /// The reference date the fortune was told for.
    pub date: NaiveDate,
    /// The profile holder's name.
    pub name: String,
    /// The derived lucky color.
    pub lucky_color: String,
    /// The derived lucky number.
    pub lucky_number: i64,
}

impl std::fmt::Display for Fortune {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\n{} の {} さんの運勢\n\nラッキーカラー: {}\nラッキーナンバー: {}\n",
            self.date, self.name, self.lucky_color, self.lucky_number
        )
    }
}
