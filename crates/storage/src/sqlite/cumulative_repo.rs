use async_trait::async_trait;
use chrono::{DateTime, Utc};

use wear_core::model::{CumulativeReading, DayKey};

use super::{SqliteRepository, mapping};
use crate::repository::{CumulativeRepository, StorageError};

#[async_trait]
impl CumulativeRepository for SqliteRepository {
    async fn append(&self, reading: &CumulativeReading) -> Result<(), StorageError> {
        sqlx::query(
            r"
                INSERT INTO daily_cumulative (
                    recorded_at, day, week, cumulative_minutes,
                    secondary_cumulative_minutes
                )
                VALUES (?1, ?2, ?3, ?4, ?5)
                ON CONFLICT(recorded_at) DO UPDATE SET
                    day = excluded.day,
                    week = excluded.week,
                    cumulative_minutes = excluded.cumulative_minutes,
                    secondary_cumulative_minutes = excluded.secondary_cumulative_minutes
            ",
        )
        .bind(reading.recorded_at)
        .bind(reading.day.to_string())
        .bind(i64::from(reading.week.value()))
        .bind(i64::from(reading.cumulative_minutes))
        .bind(i64::from(reading.secondary_cumulative_minutes))
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(())
    }

    async fn last_for_day(&self, day: DayKey) -> Result<Option<CumulativeReading>, StorageError> {
        let row = sqlx::query(
            r"
                SELECT recorded_at, day, week, cumulative_minutes,
                       secondary_cumulative_minutes
                FROM daily_cumulative
                WHERE day = ?1
                ORDER BY recorded_at DESC
                LIMIT 1
            ",
        )
        .bind(day.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        row.as_ref().map(mapping::map_cumulative_row).transpose()
    }

    async fn closest_before(
        &self,
        at: DateTime<Utc>,
        day: DayKey,
    ) -> Result<Option<CumulativeReading>, StorageError> {
        let row = sqlx::query(
            r"
                SELECT recorded_at, day, week, cumulative_minutes,
                       secondary_cumulative_minutes
                FROM daily_cumulative
                WHERE recorded_at <= ?1 AND day = ?2
                ORDER BY recorded_at DESC
                LIMIT 1
            ",
        )
        .bind(at)
        .bind(day.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        row.as_ref().map(mapping::map_cumulative_row).transpose()
    }
}
