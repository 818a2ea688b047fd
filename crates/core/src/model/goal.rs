use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{DayKey, StudyWeek};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DailyGoalError {
    #[error("goal must be at least one minute, got {0}")]
    NotPositive(i32),
}

/// Adjusted daily wear-time goal.
///
/// The study recomputes the goal as adherence data accumulates and
/// appends a new row each time; only the latest row is authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyGoal {
    day: DayKey,
    week: StudyWeek,
    recorded_at: DateTime<Utc>,
    goal_minutes: u32,
}

impl DailyGoal {
    /// Rehydrate an adjusted goal row from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `DailyGoalError::NotPositive` if the stored goal is below
    /// one minute. Readers treat such rows as absent and fall back to the
    /// default goal.
    pub fn from_persisted(
        day: DayKey,
        week: StudyWeek,
        recorded_at: DateTime<Utc>,
        goal_minutes: i32,
    ) -> Result<Self, DailyGoalError> {
        if goal_minutes < 1 {
            return Err(DailyGoalError::NotPositive(goal_minutes));
        }

        Ok(Self {
            day,
            week,
            recorded_at,
            goal_minutes: goal_minutes.unsigned_abs(),
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

    /// Goal in minutes, always at least one.
    #[must_use]
    pub fn goal_minutes(&self) -> u32 {
        self.goal_minutes
    }
}
