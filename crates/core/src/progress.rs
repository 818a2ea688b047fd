//! Progress-to-display mapping for bounded-range widgets.

/// Fallback daily goal (14 hours) used when no adjusted goal is stored.
pub const DEFAULT_GOAL_MINUTES: i32 = 840;

/// Display payload for a bounded-range indicator: the ring value, the
/// full-scale maximum, and the short label rendered next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressDisplay {
    pub value: f32,
    pub max: f32,
    pub label: String,
}

impl ProgressDisplay {
    /// Maps raw progress and goal minutes onto a ring value and label.
    ///
    /// Negative progress reads as zero and a goal below one minute as
    /// one. The ring value is capped at the goal so the indicator never
    /// overfills; once progress passes the goal the label switches to
    /// the surplus in raw minutes, e.g. `+60'`.
    #[must_use]
    pub fn compute(progress_minutes: i32, goal_minutes: i32) -> Self {
        let goal = goal_minutes.max(1);
        let progress = progress_minutes.max(0);

        let label = if progress <= goal {
            format_hours_minutes(progress)
        } else {
            format!("+{}'", progress - goal)
        };

        Self {
            value: progress.min(goal) as f32,
            max: goal as f32,
            label,
        }
    }
}

/// Renders minutes as `HhMM'`, e.g. 70 becomes `1h10'`.
#[must_use]
pub fn format_hours_minutes(minutes: i32) -> String {
    let minutes = minutes.max(0);
    let hours = minutes / 60;
    let rest = minutes % 60;
    format!("{hours}h{rest:02}'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_with_zero_padding() {
        assert_eq!(format_hours_minutes(0), "0h00'");
        assert_eq!(format_hours_minutes(9), "0h09'");
        assert_eq!(format_hours_minutes(70), "1h10'");
        assert_eq!(format_hours_minutes(125), "2h05'");
        assert_eq!(format_hours_minutes(840), "14h00'");
    }

    #[test]
    fn partial_progress_keeps_the_clock_label() {
        let display = ProgressDisplay::compute(70, 840);
        assert_eq!(display.value, 70.0);
        assert_eq!(display.max, 840.0);
        assert_eq!(display.label, "1h10'");
    }

    #[test]
    fn zero_progress_reads_as_zero_hours() {
        let display = ProgressDisplay::compute(0, 840);
        assert_eq!(display.value, 0.0);
        assert_eq!(display.label, "0h00'");
    }

    #[test]
    fn progress_past_the_goal_caps_the_ring_and_shows_surplus() {
        let display = ProgressDisplay::compute(900, 840);
        assert_eq!(display.value, 840.0);
        assert_eq!(display.max, 840.0);
        assert_eq!(display.label, "+60'");
    }

    #[test]
    fn negative_progress_clamps_to_zero() {
        let display = ProgressDisplay::compute(-5, 840);
        assert_eq!(display.value, 0.0);
        assert_eq!(display.label, "0h00'");
    }

    #[test]
    fn non_positive_goal_coerces_to_one_minute() {
        let display = ProgressDisplay::compute(100, 0);
        assert_eq!(display.value, 1.0);
        assert_eq!(display.max, 1.0);
        assert_eq!(display.label, "+99'");
    }

    #[test]
    fn value_stays_within_the_scale() {
        for progress in [-30, 0, 1, 420, 840, 841, 2000] {
            for goal in [-1, 0, 1, 60, 840] {
                let display = ProgressDisplay::compute(progress, goal);
                assert!(display.value >= 0.0);
                assert!(display.value <= display.max);
            }
        }
    }

    #[test]
    fn identical_inputs_yield_identical_outputs() {
        assert_eq!(
            ProgressDisplay::compute(123, 840),
            ProgressDisplay::compute(123, 840)
        );
    }
}
