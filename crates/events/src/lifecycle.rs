//! Pure lifecycle decisions over an event's start time.
//!
//! `now` is always an explicit parameter: callers read the clock once per
//! operation and reuse that instant for every comparison within it, so a
//! single logical decision can never straddle a clock tick.

use chrono::{DateTime, Utc};

/// Whether an event starting at `start_time` still lies in the future.
///
/// An event starting exactly at `now` counts as future: it has not started
/// from the caller's point of view.
pub fn is_future(start_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    start_time >= now
}

/// Whether an event may still be deleted.
///
/// An event that has already started is immutable and must not be deleted.
pub fn is_deletable(start_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    is_future(start_time, now)
}

/// Whether an event may still accept registrations.
pub fn accepts_registrations(start_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    is_future(start_time, now)
}

/// Whether a candidate start time is acceptable for a new event.
///
/// Strictly greater than `now`; scheduling an event at the current instant or
/// in the past is rejected.
pub fn can_create(start_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    start_time > now
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn start_in_the_future_is_future_and_deletable() {
        let now = fixed_now();
        let start = now + Duration::seconds(1);
        assert!(is_future(start, now));
        assert!(is_deletable(start, now));
        assert!(accepts_registrations(start, now));
    }

    #[test]
    fn start_in_the_past_is_neither_future_nor_deletable() {
        let now = fixed_now();
        let start = now - Duration::seconds(1);
        assert!(!is_future(start, now));
        assert!(!is_deletable(start, now));
        assert!(!accepts_registrations(start, now));
    }

    #[test]
    fn start_exactly_now_counts_as_future() {
        let now = fixed_now();
        assert!(is_future(now, now));
        assert!(is_deletable(now, now));
    }

    #[test]
    fn can_create_requires_strictly_later_start() {
        let now = fixed_now();
        assert!(can_create(now + Duration::seconds(1), now));
        assert!(!can_create(now, now));
        assert!(!can_create(now - Duration::seconds(1), now));
    }
}
