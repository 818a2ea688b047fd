use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{DayKey, StudyWeek};

/// Minutes in one calendar day; a wear-time row can never account for more.
pub const MINUTES_PER_DAY: u32 = 1440;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WearDayError {
    #[error("worn ({worn}) plus not worn ({not_worn}) minutes exceed one day")]
    ExceedsDay { worn: u32, not_worn: u32 },
}

/// Minutes the watch was worn, and provably not worn, on one day.
///
/// The tracking service rewrites the row for the current day as sensor
/// segments close; earlier days are immutable history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WearDay {
    day: DayKey,
    week: StudyWeek,
    recorded_at: DateTime<Utc>,
    worn_minutes: u32,
    not_worn_minutes: u32,
}

impl WearDay {
    /// Rehydrate a daily wear-time row from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `WearDayError::ExceedsDay` if the worn and not-worn
    /// minutes together account for more than one day.
    pub fn from_persisted(
        day: DayKey,
        week: StudyWeek,
        recorded_at: DateTime<Utc>,
        worn_minutes: u32,
        not_worn_minutes: u32,
    ) -> Result<Self, WearDayError> {
        if worn_minutes.saturating_add(not_worn_minutes) > MINUTES_PER_DAY {
            return Err(WearDayError::ExceedsDay {
                worn: worn_minutes,
                not_worn: not_worn_minutes,
            });
        }

        Ok(Self {
            day,
            week,
            recorded_at,
            worn_minutes,
            not_worn_minutes,
        })
    }

    #[must_use]
    pub fn day(&self) -> DayKey {
        self.day
    }

    #[must_use]
    pub fn week(&self) -> StudyWeek {
        self.week
    }

    #[must_use]
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// Minutes the watch was on the wrist so far today.
    #[must_use]
    pub fn worn_minutes(&self) -> u32 {
        self.worn_minutes
    }

    /// Minutes the watch was confirmed off the wrist.
    #[must_use]
    pub fn not_worn_minutes(&self) -> u32 {
        self.not_worn_minutes
    }
}
