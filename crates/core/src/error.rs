use thiserror::Error;

use crate::model::{DailyGoalError, ParseDayKeyError, WearDayError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    WearDay(#[from] WearDayError),
    #[error(transparent)]
    DailyGoal(#[from] DailyGoalError),
    #[error(transparent)]
    DayKey(#[from] ParseDayKeyError),
}
