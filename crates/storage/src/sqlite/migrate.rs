use chrono::Utc;
use sqlx::SqlitePool;

use super::SqliteInitError;

/// Runs a single, consolidated migration for the current schema.
///
/// Creates the full schema (daily wear minutes, cumulative progress
/// readings, adjusted goals, the preference table, and indexes).
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), SqliteInitError> {
    async fn is_applied(pool: &SqlitePool, version: i64) -> Result<bool, sqlx::Error> {
        let row = sqlx::query("SELECT 1 FROM schema_migrations WHERE version = ?1")
            .bind(version)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }

    sqlx::query(
        r"
            CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                applied_at TEXT NOT NULL
            );
            ",
    )
    .execute(pool)
    .await?;

    // Version 1: full schema.
    if !is_applied(pool, 1).await? {
        let mut tx = pool.begin().await?;

        sqlx::query(
            r"
                CREATE TABLE IF NOT EXISTS daily_wear_minutes (
                    day TEXT PRIMARY KEY,
                    week INTEGER NOT NULL CHECK (week >= 1),
                    recorded_at TEXT NOT NULL,
                    worn_minutes INTEGER NOT NULL CHECK (worn_minutes >= 0),
                    not_worn_minutes INTEGER NOT NULL CHECK (not_worn_minutes >= 0)
                );
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                CREATE TABLE IF NOT EXISTS daily_cumulative (
                    recorded_at TEXT PRIMARY KEY,
                    day TEXT NOT NULL,
                    week INTEGER NOT NULL CHECK (week >= 1),
                    cumulative_minutes INTEGER NOT NULL CHECK (cumulative_minutes >= 0),
                    secondary_cumulative_minutes INTEGER NOT NULL
                        CHECK (secondary_cumulative_minutes >= 0)
                );
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                CREATE TABLE IF NOT EXISTS adjusted_daily_goal (
                    recorded_at TEXT PRIMARY KEY,
                    day TEXT NOT NULL,
                    week INTEGER NOT NULL CHECK (week >= 1),
                    goal_minutes INTEGER NOT NULL CHECK (goal_minutes >= 1)
                );
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                CREATE TABLE IF NOT EXISTS prefs (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                CREATE INDEX IF NOT EXISTS idx_daily_cumulative_day_recorded
                    ON daily_cumulative (day, recorded_at);
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                CREATE INDEX IF NOT EXISTS idx_daily_wear_minutes_week_day
                    ON daily_wear_minutes (week, day);
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                INSERT INTO schema_migrations (version, applied_at)
                VALUES (?1, ?2)
                ON CONFLICT(version) DO NOTHING
            ",
        )
        .bind(1_i64)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
    }

    Ok(())
}
