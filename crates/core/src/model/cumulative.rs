use chrono::{DateTime, Utc};

use crate::model::{DayKey, StudyWeek};

/// One point of today's exercise-progress counter.
///
/// The counter only moves forward within a day; the latest reading for a
/// day is the progress figure shown on the watch face. The secondary
/// counter tracks the same activity under the alternate scoring rule and
/// is kept for the analysis export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CumulativeReading {
    pub day: DayKey,
    pub week: StudyWeek,
    pub recorded_at: DateTime<Utc>,
    pub cumulative_minutes: u32,
    pub secondary_cumulative_minutes: u32,
}

impl CumulativeReading {
    #[must_use]
    pub fn new(
        day: DayKey,
        week: StudyWeek,
        recorded_at: DateTime<Utc>,
        cumulative_minutes: u32,
        secondary_cumulative_minutes: u32,
    ) -> Self {
        Self {
            day,
            week,
            recorded_at,
            cumulative_minutes,
            secondary_cumulative_minutes,
        }
    }
}
