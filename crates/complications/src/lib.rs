#![forbid(unsafe_code)]

pub mod data;
pub mod source;

mod alive_source;
mod exercise_source;
mod progress_source;
mod wear_time_source;

pub use data::{ComplicationData, ComplicationType, RangedValueData, ShortTextData};
pub use source::{ComplicationRequest, ComplicationSource};

pub use alive_source::ServiceAliveSource;
pub use exercise_source::ExerciseSource;
pub use progress_source::ProgressSource;
pub use wear_time_source::WearTimeSource;
