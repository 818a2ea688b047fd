use async_trait::async_trait;

use wear_core::model::{DayKey, StudyWeek, WearDay};

use super::{SqliteRepository, mapping};
use crate::repository::{StorageError, WearTimeRepository};

#[async_trait]
impl WearTimeRepository for SqliteRepository {
    async fn upsert_day(&self, day: &WearDay) -> Result<(), StorageError> {
        sqlx::query(
            r"
                INSERT INTO daily_wear_minutes (
                    day, week, recorded_at, worn_minutes, not_worn_minutes
                )
                VALUES (?1, ?2, ?3, ?4, ?5)
                ON CONFLICT(day) DO UPDATE SET
                    week = excluded.week,
                    recorded_at = excluded.recorded_at,
                    worn_minutes = excluded.worn_minutes,
                    not_worn_minutes = excluded.not_worn_minutes
            ",
        )
        .bind(day.day().to_string())
        .bind(i64::from(day.week().value()))
        .bind(day.recorded_at())
        .bind(i64::from(day.worn_minutes()))
        .bind(i64::from(day.not_worn_minutes()))
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(())
    }

    async fn last_for_day(&self, day: DayKey) -> Result<Option<WearDay>, StorageError> {
        let row = sqlx::query(
            r"
                SELECT day, week, recorded_at, worn_minutes, not_worn_minutes
                FROM daily_wear_minutes
                WHERE day = ?1
            ",
        )
        .bind(day.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        row.as_ref().map(mapping::map_wear_row).transpose()
    }

    async fn entries_for_week(&self, week: StudyWeek) -> Result<Vec<WearDay>, StorageError> {
        let rows = sqlx::query(
            r"
                SELECT day, week, recorded_at, worn_minutes, not_worn_minutes
                FROM daily_wear_minutes
                WHERE week = ?1
                ORDER BY day ASC
            ",
        )
        .bind(i64::from(week.value()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(mapping::map_wear_row(&row)?);
        }

        Ok(out)
    }
}
