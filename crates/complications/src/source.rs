use async_trait::async_trait;
use tracing::warn;

use storage::{PrefsRepository, Storage};
use wear_core::model::StudyWeek;

use crate::data::{ComplicationData, ComplicationType};

/// One refresh request from the platform for a placed complication slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplicationRequest {
    pub instance_id: i32,
    pub complication_type: ComplicationType,
}

impl ComplicationRequest {
    #[must_use]
    pub fn new(instance_id: i32, complication_type: ComplicationType) -> Self {
        Self {
            instance_id,
            complication_type,
        }
    }
}

/// A complication data source.
///
/// Sources are stateless between requests: each refresh re-reads the
/// backing stores and recomputes the payload. `None` means the requested
/// widget family is not supported by this source. Upstream read failures
/// never surface here; sources substitute the documented default instead.
#[async_trait]
pub trait ComplicationSource: Send + Sync {
    /// Static payload for the watch-face picker and editor.
    fn preview(&self, complication_type: ComplicationType) -> Option<ComplicationData>;

    /// Live payload for one refresh request.
    async fn complication_data(&self, request: &ComplicationRequest) -> Option<ComplicationData>;
}

/// Current study week, falling back to the first (hidden) week when the
/// preference was never written or cannot be read.
pub(crate) async fn current_week(storage: &Storage) -> StudyWeek {
    match storage.prefs.week().await {
        Ok(Some(week)) => week,
        Ok(None) => StudyWeek::FIRST,
        Err(err) => {
            warn!("week read failed, treating as first week: {err}");
            StudyWeek::FIRST
        }
    }
}
