use async_trait::async_trait;

use wear_core::model::DailyGoal;

use super::{SqliteRepository, mapping};
use crate::repository::{GoalRepository, StorageError};

#[async_trait]
impl GoalRepository for SqliteRepository {
    async fn append(&self, goal: &DailyGoal) -> Result<(), StorageError> {
        sqlx::query(
            r"
                INSERT INTO adjusted_daily_goal (
                    recorded_at, day, week, goal_minutes
                )
                VALUES (?1, ?2, ?3, ?4)
                ON CONFLICT(recorded_at) DO UPDATE SET
                    day = excluded.day,
                    week = excluded.week,
                    goal_minutes = excluded.goal_minutes
            ",
        )
        .bind(goal.recorded_at())
        .bind(goal.day().to_string())
        .bind(i64::from(goal.week().value()))
        .bind(i64::from(goal.goal_minutes()))
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(())
    }

    async fn latest(&self) -> Result<Option<DailyGoal>, StorageError> {
        let row = sqlx::query(
            r"
                SELECT recorded_at, day, week, goal_minutes
                FROM adjusted_daily_goal
                ORDER BY recorded_at DESC
                LIMIT 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        row.as_ref().map(mapping::map_goal_row).transpose()
    }
}
