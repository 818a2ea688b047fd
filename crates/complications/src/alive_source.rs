use async_trait::async_trait;
use tracing::{debug, warn};

use storage::{PrefsRepository, Storage};
use wear_core::Clock;
use wear_core::heartbeat::is_fresh;

use crate::data::{ComplicationData, ComplicationType};
use crate::source::{ComplicationRequest, ComplicationSource};

const RESUME_TEXT: &str = "App!";
const RESUME_DESCRIPTION: &str = "Resume foreground service";

/// Short-text source that surfaces a resume prompt when the tracking
/// service's heartbeat goes stale.
///
/// While the heartbeat is fresh the slot stays empty; the prompt only
/// appears when the wearer needs to act.
pub struct ServiceAliveSource {
    storage: Storage,
    clock: Clock,
}

impl ServiceAliveSource {
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            clock: Clock::default(),
        }
    }

    /// Replace the clock, used by tests to pin the current instant.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}

#[async_trait]
impl ComplicationSource for ServiceAliveSource {
    fn preview(&self, complication_type: ComplicationType) -> Option<ComplicationData> {
        if complication_type != ComplicationType::ShortText {
            return None;
        }
        Some(ComplicationData::short_text(
            RESUME_TEXT,
            RESUME_DESCRIPTION,
        ))
    }

    async fn complication_data(&self, request: &ComplicationRequest) -> Option<ComplicationData> {
        if request.complication_type != ComplicationType::ShortText {
            return None;
        }

        let last_beat = match self.storage.prefs.heartbeat_at().await {
            Ok(last_beat) => last_beat,
            Err(err) => {
                warn!("heartbeat read failed, treating the service as gone: {err}");
                None
            }
        };

        if is_fresh(last_beat, self.clock.now()) {
            debug!("heartbeat fresh, hiding the resume prompt");
            return Some(ComplicationData::NoData);
        }

        Some(ComplicationData::short_text(
            RESUME_TEXT,
            RESUME_DESCRIPTION,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use wear_core::time::{fixed_clock, fixed_now};

    fn request() -> ComplicationRequest {
        ComplicationRequest::new(42, ComplicationType::ShortText)
    }

    #[tokio::test]
    async fn hidden_while_the_heartbeat_is_fresh() {
        let storage = Storage::in_memory();
        storage
            .prefs
            .record_heartbeat(fixed_now() - Duration::seconds(30))
            .await
            .unwrap();
        let source = ServiceAliveSource::new(storage).with_clock(fixed_clock());

        let data = source.complication_data(&request()).await.unwrap();
        assert!(data.is_no_data());
    }

    #[tokio::test]
    async fn prompts_once_the_heartbeat_goes_stale() {
        let storage = Storage::in_memory();
        storage
            .prefs
            .record_heartbeat(fixed_now() - Duration::minutes(3))
            .await
            .unwrap();
        let source = ServiceAliveSource::new(storage).with_clock(fixed_clock());

        let data = source.complication_data(&request()).await.unwrap();
        let ComplicationData::ShortText(text) = data else {
            panic!("expected short text");
        };
        assert_eq!(text.text, "App!");
        assert_eq!(text.content_description, "Resume foreground service");
    }

    #[tokio::test]
    async fn prompts_when_no_heartbeat_was_ever_written() {
        let storage = Storage::in_memory();
        let source = ServiceAliveSource::new(storage).with_clock(fixed_clock());

        let data = source.complication_data(&request()).await.unwrap();
        assert!(matches!(data, ComplicationData::ShortText(_)));
    }

    #[tokio::test]
    async fn only_serves_short_text_requests() {
        let storage = Storage::in_memory();
        let source = ServiceAliveSource::new(storage).with_clock(fixed_clock());

        let request = ComplicationRequest::new(42, ComplicationType::RangedValue);
        assert!(source.complication_data(&request).await.is_none());
    }

    #[test]
    fn preview_shows_the_resume_prompt() {
        let source = ServiceAliveSource::new(Storage::in_memory());

        let data = source.preview(ComplicationType::ShortText).unwrap();
        assert!(matches!(data, ComplicationData::ShortText(_)));
        assert!(source.preview(ComplicationType::RangedValue).is_none());
    }
}
