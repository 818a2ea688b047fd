use async_trait::async_trait;
use tracing::debug;

use storage::Storage;

use crate::data::{ComplicationData, ComplicationType};
use crate::source::{ComplicationRequest, ComplicationSource, current_week};

const GLYPH: &str = "\u{1f4aa}\u{1f3fd}";

/// Short-text tile that marks the entry point into the exercise flow.
///
/// The platform attaches the launch action; this source only decides
/// whether the tile is visible and what it reads.
pub struct ExerciseSource {
    storage: Storage,
}

impl ExerciseSource {
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl ComplicationSource for ExerciseSource {
    fn preview(&self, complication_type: ComplicationType) -> Option<ComplicationData> {
        if complication_type != ComplicationType::ShortText {
            return None;
        }
        Some(ComplicationData::short_text(GLYPH, "emoji"))
    }

    async fn complication_data(&self, request: &ComplicationRequest) -> Option<ComplicationData> {
        if request.complication_type != ComplicationType::ShortText {
            return None;
        }

        let week = current_week(&self.storage).await;
        if !week.is_display_week() {
            debug!("exercise tile hidden during week {week}");
            return Some(ComplicationData::NoData);
        }

        Some(ComplicationData::short_text(GLYPH, "Open exercise"))
    }
}
