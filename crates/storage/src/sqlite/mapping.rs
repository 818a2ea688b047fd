use sqlx::Row;

use wear_core::model::{CumulativeReading, DailyGoal, DayKey, StudyWeek, WearDay};

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn day_key_from_str(s: &str) -> Result<DayKey, StorageError> {
    s.parse::<DayKey>().map_err(ser)
}

pub(crate) fn week_from_i64(v: i64) -> Result<StudyWeek, StorageError> {
    let week = u32::try_from(v).map_err(|_| ser(format!("invalid week: {v}")))?;
    Ok(StudyWeek::new(week))
}

pub(crate) fn minutes_from_i64(field: &'static str, v: i64) -> Result<u32, StorageError> {
    u32::try_from(v).map_err(|_| ser(format!("invalid {field}: {v}")))
}

pub(crate) fn map_wear_row(row: &sqlx::sqlite::SqliteRow) -> Result<WearDay, StorageError> {
    let day = day_key_from_str(&row.try_get::<String, _>("day").map_err(ser)?)?;
    let week = week_from_i64(row.try_get::<i64, _>("week").map_err(ser)?)?;
    let recorded_at = row.try_get("recorded_at").map_err(ser)?;
    let worn = minutes_from_i64(
        "worn_minutes",
        row.try_get::<i64, _>("worn_minutes").map_err(ser)?,
    )?;
    let not_worn = minutes_from_i64(
        "not_worn_minutes",
        row.try_get::<i64, _>("not_worn_minutes").map_err(ser)?,
    )?;

    WearDay::from_persisted(day, week, recorded_at, worn, not_worn).map_err(ser)
}

pub(crate) fn map_cumulative_row(
    row: &sqlx::sqlite::SqliteRow,
) -> Result<CumulativeReading, StorageError> {
    let day = day_key_from_str(&row.try_get::<String, _>("day").map_err(ser)?)?;
    let week = week_from_i64(row.try_get::<i64, _>("week").map_err(ser)?)?;
    let recorded_at = row.try_get("recorded_at").map_err(ser)?;
    let cumulative = minutes_from_i64(
        "cumulative_minutes",
        row.try_get::<i64, _>("cumulative_minutes").map_err(ser)?,
    )?;
    let secondary = minutes_from_i64(
        "secondary_cumulative_minutes",
        row.try_get::<i64, _>("secondary_cumulative_minutes")
            .map_err(ser)?,
    )?;

    Ok(CumulativeReading::new(
        day,
        week,
        recorded_at,
        cumulative,
        secondary,
    ))
}

pub(crate) fn map_goal_row(row: &sqlx::sqlite::SqliteRow) -> Result<DailyGoal, StorageError> {
    let day = day_key_from_str(&row.try_get::<String, _>("day").map_err(ser)?)?;
    let week = week_from_i64(row.try_get::<i64, _>("week").map_err(ser)?)?;
    let recorded_at = row.try_get("recorded_at").map_err(ser)?;
    let goal_i64: i64 = row.try_get("goal_minutes").map_err(ser)?;
    let goal = i32::try_from(goal_i64).map_err(|_| ser(format!("invalid goal: {goal_i64}")))?;

    DailyGoal::from_persisted(day, week, recorded_at, goal).map_err(ser)
}
