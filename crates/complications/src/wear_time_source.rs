use async_trait::async_trait;
use tracing::{debug, warn};

use storage::{Storage, WearTimeRepository};
use wear_core::Clock;
use wear_core::progress::{DEFAULT_GOAL_MINUTES, format_hours_minutes};

use crate::data::{ComplicationData, ComplicationType};
use crate::source::{ComplicationRequest, ComplicationSource};

const PREVIEW_WORN_MINUTES: i32 = 150;

/// Ranged-value source showing minutes the watch was worn today on a
/// fixed fourteen-hour scale.
///
/// Unlike the progress ring this one always labels with the raw worn
/// time, even once it passes the scale; only the ring value is clamped.
pub struct WearTimeSource {
    storage: Storage,
    clock: Clock,
}

impl WearTimeSource {
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

    async fn worn_minutes_today(&self) -> i32 {
        let day = self.clock.day_key();
        match self.storage.wear.last_for_day(day).await {
            Ok(Some(entry)) => i32::try_from(entry.worn_minutes()).unwrap_or(i32::MAX),
            Ok(None) => 0,
            Err(err) => {
                warn!("worn minutes read failed for {day}, showing zero: {err}");
                0
            }
        }
    }

    fn build_ranged(worn_minutes: i32) -> ComplicationData {
        let label = format_hours_minutes(worn_minutes);
        let value = worn_minutes.clamp(0, DEFAULT_GOAL_MINUTES) as f32;
        ComplicationData::ranged(
            value,
            DEFAULT_GOAL_MINUTES as f32,
            label.clone(),
            None,
            format!("Watch worn {label} today"),
        )
    }
}

#[async_trait]
impl ComplicationSource for WearTimeSource {
    fn preview(&self, complication_type: ComplicationType) -> Option<ComplicationData> {
        if complication_type != ComplicationType::RangedValue {
            return None;
        }
        Some(Self::build_ranged(PREVIEW_WORN_MINUTES))
    }

    async fn complication_data(&self, request: &ComplicationRequest) -> Option<ComplicationData> {
        if request.complication_type != ComplicationType::RangedValue {
            return None;
        }

        let worn = self.worn_minutes_today().await;
        debug!("wear time refresh: {worn} worn minutes today");
        Some(Self::build_ranged(worn))
    }
}
