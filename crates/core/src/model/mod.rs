mod cumulative;
mod day;
mod goal;
mod wear_day;
mod week;

pub use cumulative::CumulativeReading;
pub use day::{DayKey, ParseDayKeyError};
pub use goal::{DailyGoal, DailyGoalError};
pub use wear_day::{MINUTES_PER_DAY, WearDay, WearDayError};
pub use week::StudyWeek;
