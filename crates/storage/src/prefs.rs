//! Key-value preferences shared with the tracking service.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

use wear_core::model::StudyWeek;

use crate::repository::StorageError;

/// Typed access to the small preference store the tracking service and
/// the complication sources share.
#[async_trait]
pub trait PrefsRepository: Send + Sync {
    /// Current study week, if one was ever recorded.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on connection or decoding failures; a
    /// never-written key is `Ok(None)`.
    async fn week(&self) -> Result<Option<StudyWeek>, StorageError>;

    /// Record the current study week.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set_week(&self, week: StudyWeek) -> Result<(), StorageError>;

    /// Instant of the tracking service's most recent heartbeat.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on connection or decoding failures; a
    /// never-written key is `Ok(None)`.
    async fn heartbeat_at(&self) -> Result<Option<DateTime<Utc>>, StorageError>;

    /// Record a heartbeat written by the tracking service.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn record_heartbeat(&self, at: DateTime<Utc>) -> Result<(), StorageError>;
}

#[derive(Default)]
struct PrefsState {
    week: Option<StudyWeek>,
    heartbeat_at: Option<DateTime<Utc>>,
}

/// In-memory preference store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryPrefs {
    inner: Arc<Mutex<PrefsState>>,
}

impl InMemoryPrefs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_err<E: std::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

#[async_trait]
impl PrefsRepository for InMemoryPrefs {
    async fn week(&self) -> Result<Option<StudyWeek>, StorageError> {
        let guard = self.inner.lock().map_err(lock_err)?;
        Ok(guard.week)
    }

    async fn set_week(&self, week: StudyWeek) -> Result<(), StorageError> {
        let mut guard = self.inner.lock().map_err(lock_err)?;
        guard.week = Some(week);
        Ok(())
    }

    async fn heartbeat_at(&self) -> Result<Option<DateTime<Utc>>, StorageError> {
        let guard = self.inner.lock().map_err(lock_err)?;
        Ok(guard.heartbeat_at)
    }

    async fn record_heartbeat(&self, at: DateTime<Utc>) -> Result<(), StorageError> {
        let mut guard = self.inner.lock().map_err(lock_err)?;
        guard.heartbeat_at = Some(at);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wear_core::time::fixed_now;

    #[tokio::test]
    async fn unwritten_keys_read_as_none() {
        let prefs = InMemoryPrefs::new();
        assert!(prefs.week().await.unwrap().is_none());
        assert!(prefs.heartbeat_at().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn week_and_heartbeat_roundtrip() {
        let prefs = InMemoryPrefs::new();
        prefs.set_week(StudyWeek::new(3)).await.unwrap();
        prefs.record_heartbeat(fixed_now()).await.unwrap();

        assert_eq!(prefs.week().await.unwrap(), Some(StudyWeek::new(3)));
        assert_eq!(prefs.heartbeat_at().await.unwrap(), Some(fixed_now()));
    }
}
