use serde::{Deserialize, Serialize};
use std::fmt;

/// One-based week index within a study enrollment.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StudyWeek(u32);

impl StudyWeek {
    /// The enrollment week. Readers fall back to it when no week was
    /// ever recorded.
    pub const FIRST: StudyWeek = StudyWeek(1);

    /// Creates a study week, coercing zero up to the first week.
    #[must_use]
    pub fn new(week: u32) -> Self {
        Self(week.max(1))
    }

    /// Returns the underlying week number.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Whether progress widgets are shown to the wearer during this week.
    ///
    /// The baseline week (week 1) and everything from week 6 on run
    /// without visible progress feedback.
    #[must_use]
    pub fn is_display_week(&self) -> bool {
        self.0 != 1 && self.0 < 6
    }
}

impl fmt::Debug for StudyWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StudyWeek({})", self.0)
    }
}

impl fmt::Display for StudyWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
