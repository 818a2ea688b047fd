use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use wear_core::model::{CumulativeReading, DailyGoal, DayKey, StudyWeek, WearDay};

use crate::prefs::{InMemoryPrefs, PrefsRepository};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Daily wear-time rows, one per calendar day.
#[async_trait]
pub trait WearTimeRepository: Send + Sync {
    /// Persist or replace the row for the record's day.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the row cannot be stored.
    async fn upsert_day(&self, day: &WearDay) -> Result<(), StorageError>;

    /// Fetch the row for a day, if one was ever written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on connection or decoding failures; an
    /// absent day is `Ok(None)`.
    async fn last_for_day(&self, day: DayKey) -> Result<Option<WearDay>, StorageError>;

    /// Fetch all rows for a week, ordered by day.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on connection or decoding failures.
    async fn entries_for_week(&self, week: StudyWeek) -> Result<Vec<WearDay>, StorageError>;
}

/// Append-only exercise-progress counter readings.
#[async_trait]
pub trait CumulativeRepository: Send + Sync {
    /// Append one reading; a reading with the same timestamp replaces it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the reading cannot be stored.
    async fn append(&self, reading: &CumulativeReading) -> Result<(), StorageError>;

    /// Latest reading for a day; the day's current progress figure.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on connection or decoding failures; a day
    /// with no readings is `Ok(None)`.
    async fn last_for_day(&self, day: DayKey) -> Result<Option<CumulativeReading>, StorageError>;

    /// Latest reading for a day at or before the given instant.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on connection or decoding failures.
    async fn closest_before(
        &self,
        at: DateTime<Utc>,
        day: DayKey,
    ) -> Result<Option<CumulativeReading>, StorageError>;
}

/// Append-only adjusted daily goal rows; only the latest is authoritative.
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Append one goal row; a row with the same timestamp replaces it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the row cannot be stored.
    async fn append(&self, goal: &DailyGoal) -> Result<(), StorageError>;

    /// The most recently recorded goal.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on connection or decoding failures; an
    /// empty table is `Ok(None)`.
    async fn latest(&self) -> Result<Option<DailyGoal>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    wear_days: Arc<Mutex<HashMap<DayKey, WearDay>>>,
    readings: Arc<Mutex<Vec<CumulativeReading>>>,
    goals: Arc<Mutex<Vec<DailyGoal>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_err<E: std::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

#[async_trait]
impl WearTimeRepository for InMemoryRepository {
    async fn upsert_day(&self, day: &WearDay) -> Result<(), StorageError> {
        let mut guard = self.wear_days.lock().map_err(lock_err)?;
        guard.insert(day.day(), day.clone());
        Ok(())
    }

    async fn last_for_day(&self, day: DayKey) -> Result<Option<WearDay>, StorageError> {
        let guard = self.wear_days.lock().map_err(lock_err)?;
        Ok(guard.get(&day).cloned())
    }

    async fn entries_for_week(&self, week: StudyWeek) -> Result<Vec<WearDay>, StorageError> {
        let guard = self.wear_days.lock().map_err(lock_err)?;
        let mut entries: Vec<WearDay> = guard
            .values()
            .filter(|entry| entry.week() == week)
            .cloned()
            .collect();
        entries.sort_by_key(WearDay::day);
        Ok(entries)
    }
}

#[async_trait]
impl CumulativeRepository for InMemoryRepository {
    async fn append(&self, reading: &CumulativeReading) -> Result<(), StorageError> {
        let mut guard = self.readings.lock().map_err(lock_err)?;
        guard.retain(|existing| existing.recorded_at != reading.recorded_at);
        guard.push(reading.clone());
        Ok(())
    }

    async fn last_for_day(&self, day: DayKey) -> Result<Option<CumulativeReading>, StorageError> {
        let guard = self.readings.lock().map_err(lock_err)?;
        Ok(guard
            .iter()
            .filter(|reading| reading.day == day)
            .max_by_key(|reading| reading.recorded_at)
            .cloned())
    }

    async fn closest_before(
        &self,
        at: DateTime<Utc>,
        day: DayKey,
    ) -> Result<Option<CumulativeReading>, StorageError> {
        let guard = self.readings.lock().map_err(lock_err)?;
        Ok(guard
            .iter()
            .filter(|reading| reading.day == day && reading.recorded_at <= at)
            .max_by_key(|reading| reading.recorded_at)
            .cloned())
    }
}

#[async_trait]
impl GoalRepository for InMemoryRepository {
    async fn append(&self, goal: &DailyGoal) -> Result<(), StorageError> {
        let mut guard = self.goals.lock().map_err(lock_err)?;
        guard.retain(|existing| existing.recorded_at() != goal.recorded_at());
        guard.push(goal.clone());
        Ok(())
    }

    async fn latest(&self) -> Result<Option<DailyGoal>, StorageError> {
        let guard = self.goals.lock().map_err(lock_err)?;
        Ok(guard.iter().max_by_key(|goal| goal.recorded_at()).cloned())
    }
}

/// Aggregates the persisted stores behind trait objects for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub wear: Arc<dyn WearTimeRepository>,
    pub cumulative: Arc<dyn CumulativeRepository>,
    pub goals: Arc<dyn GoalRepository>,
    pub prefs: Arc<dyn PrefsRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let wear: Arc<dyn WearTimeRepository> = Arc::new(repo.clone());
        let cumulative: Arc<dyn CumulativeRepository> = Arc::new(repo.clone());
        let goals: Arc<dyn GoalRepository> = Arc::new(repo);
        let prefs: Arc<dyn PrefsRepository> = Arc::new(InMemoryPrefs::new());
        Self {
            wear,
            cumulative,
            goals,
            prefs,
        }
    }
}
