use async_trait::async_trait;
use tracing::{debug, warn};

use storage::{CumulativeRepository, GoalRepository, Storage};
use wear_core::Clock;
use wear_core::progress::{DEFAULT_GOAL_MINUTES, ProgressDisplay};

use crate::data::{ComplicationData, ComplicationType};
use crate::source::{ComplicationRequest, ComplicationSource, current_week};

const PREVIEW_PROGRESS_MINUTES: i32 = 10;

/// Pair of values read fresh from the stores for one refresh request.
struct TodaySnapshot {
    progress_minutes: i32,
    goal_minutes: i32,
}

/// Ranged-value source showing today's exercise progress against the
/// adjusted daily goal.
///
/// Hidden outside display weeks; otherwise the ring fills toward the
/// latest adjusted goal and the label tracks the progress formatter.
pub struct ProgressSource {
    storage: Storage,
    clock: Clock,
}

impl ProgressSource {
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            clock: Clock::default(),
        }
    }

    /// Replace the clock, used by tests to pin the current day.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Reads today's progress and the latest goal in one pass, never
    /// failing: unreadable or absent rows substitute zero and the
    /// default goal.
    async fn load_today_snapshot(&self) -> TodaySnapshot {
        let day = self.clock.day_key();

        let progress_minutes = match self.storage.cumulative.last_for_day(day).await {
            Ok(Some(reading)) => i32::try_from(reading.cumulative_minutes).unwrap_or(i32::MAX),
            Ok(None) => 0,
            Err(err) => {
                warn!("progress read failed for {day}, showing zero: {err}");
                0
            }
        };

        let goal_minutes = match self.storage.goals.latest().await {
            Ok(Some(goal)) => i32::try_from(goal.goal_minutes()).unwrap_or(DEFAULT_GOAL_MINUTES),
            Ok(None) => DEFAULT_GOAL_MINUTES,
            Err(err) => {
                warn!("goal read failed, using the default: {err}");
                DEFAULT_GOAL_MINUTES
            }
        };

        TodaySnapshot {
            progress_minutes,
            goal_minutes,
        }
    }

    fn build_ranged(display: &ProgressDisplay) -> ComplicationData {
        ComplicationData::ranged(
            display.value,
            display.max,
            display.label.clone(),
            Some(display.label.clone()),
            format!("Watch progress {} today", display.label),
        )
    }
}

#[async_trait]
impl ComplicationSource for ProgressSource {
    fn preview(&self, complication_type: ComplicationType) -> Option<ComplicationData> {
        if complication_type != ComplicationType::RangedValue {
            return None;
        }
        let display = ProgressDisplay::compute(PREVIEW_PROGRESS_MINUTES, DEFAULT_GOAL_MINUTES);
        Some(Self::build_ranged(&display))
    }

    async fn complication_data(&self, request: &ComplicationRequest) -> Option<ComplicationData> {
        if request.complication_type != ComplicationType::RangedValue {
            return None;
        }

        let week = current_week(&self.storage).await;
        if !week.is_display_week() {
            debug!("progress hidden during week {week}");
            return Some(ComplicationData::NoData);
        }

        let today = self.load_today_snapshot().await;
        let progress_display =
            ProgressDisplay::compute(today.progress_minutes, today.goal_minutes);
        debug!(
            "progress refresh: {} of {} -> {}",
            today.progress_minutes, today.goal_minutes, progress_display.label
        );

        Some(Self::build_ranged(&progress_display))
    }
}
