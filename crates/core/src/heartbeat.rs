//! Liveness of the tracking service's heartbeat.
//!
//! The tracking service writes a heartbeat timestamp once a minute while
//! it runs; watchers treat it as gone after two missed beats.

use chrono::{DateTime, Duration, Utc};

/// Interval in milliseconds between heartbeat writes.
pub const HEARTBEAT_INTERVAL_MS: i64 = 60_000;

/// Missed beats tolerated before the service counts as gone.
pub const HEARTBEAT_GRACE_BEATS: i64 = 2;

/// Maximum heartbeat age that still counts as alive.
#[must_use]
pub fn heartbeat_ttl() -> Duration {
    Duration::milliseconds(HEARTBEAT_INTERVAL_MS * HEARTBEAT_GRACE_BEATS)
}

/// Whether the last recorded heartbeat is recent enough to call the
/// service alive. A service that never wrote a beat is not alive.
#[must_use]
pub fn is_fresh(last_beat: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match last_beat {
        Some(at) => now.signed_duration_since(at) < heartbeat_ttl(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn recent_beat_is_fresh() {
        let now = fixed_now();
        assert!(is_fresh(Some(now - Duration::seconds(30)), now));
    }

    #[test]
    fn beat_older_than_the_ttl_is_stale() {
        let now = fixed_now();
        assert!(!is_fresh(Some(now - Duration::minutes(3)), now));
    }

    #[test]
    fn beat_exactly_at_the_ttl_is_stale() {
        let now = fixed_now();
        assert!(!is_fresh(Some(now - heartbeat_ttl()), now));
    }

    #[test]
    fn missing_beat_is_never_fresh() {
        assert!(!is_fresh(None, fixed_now()));
    }
}
