use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;

use wear_core::model::StudyWeek;

use super::{SqliteRepository, mapping::ser};
use crate::prefs::PrefsRepository;
use crate::repository::StorageError;

const WEEK_KEY: &str = "week_id";
const HEARTBEAT_KEY: &str = "heartbeat_time";

impl SqliteRepository {
    async fn pref_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT value FROM prefs WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        row.map(|r| r.try_get::<String, _>("value").map_err(ser))
            .transpose()
    }

    async fn set_pref_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r"
                INSERT INTO prefs (key, value)
                VALUES (?1, ?2)
                ON CONFLICT(key) DO UPDATE SET value = excluded.value
            ",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl PrefsRepository for SqliteRepository {
    async fn week(&self) -> Result<Option<StudyWeek>, StorageError> {
        let Some(value) = self.pref_value(WEEK_KEY).await? else {
            return Ok(None);
        };
        let week = value
            .parse::<u32>()
            .map_err(|_| ser(format!("invalid week: {value}")))?;
        Ok(Some(StudyWeek::new(week)))
    }

    async fn set_week(&self, week: StudyWeek) -> Result<(), StorageError> {
        self.set_pref_value(WEEK_KEY, &week.value().to_string())
            .await
    }

    async fn heartbeat_at(&self) -> Result<Option<DateTime<Utc>>, StorageError> {
        let Some(value) = self.pref_value(HEARTBEAT_KEY).await? else {
            return Ok(None);
        };
        let at = DateTime::parse_from_rfc3339(&value)
            .map_err(|_| ser(format!("invalid heartbeat: {value}")))?;
        Ok(Some(at.with_timezone(&Utc)))
    }

    async fn record_heartbeat(&self, at: DateTime<Utc>) -> Result<(), StorageError> {
        self.set_pref_value(HEARTBEAT_KEY, &at.to_rfc3339()).await
    }
}
