use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storage form of a day key, e.g. `2025_08_01`.
const DAY_KEY_FORMAT: &str = "%Y_%m_%d";

/// Calendar day a persisted record belongs to.
///
/// Daily counters reset at the day boundary, so every row carries its day
/// key and readers ask for "the latest entry for this key".
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// Creates a day key for the given date.
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Day key of the calendar day containing the given instant.
    #[must_use]
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at.date_naive())
    }

    /// Returns the underlying date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Debug for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DayKey({self})")
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_KEY_FORMAT))
    }
}

/// Error type for parsing a day key from its storage form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDayKeyError {
    value: String,
}

impl fmt::Display for ParseDayKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse day key from {:?}", self.value)
    }
}

impl std::error::Error for ParseDayKeyError {}

impl FromStr for DayKey {
    type Err = ParseDayKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, DAY_KEY_FORMAT)
            .map(DayKey::new)
            .map_err(|_| ParseDayKeyError {
                value: s.to_string(),
            })
    }
}
