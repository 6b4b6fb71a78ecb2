//! Farcaster time.
//!
//! Message timestamps count seconds since the Farcaster epoch,
//! 2021-01-01T00:00:00Z, rather than the Unix epoch.

use chrono::{DateTime, TimeZone, Utc};

/// The Farcaster epoch as Unix seconds.
pub const FARCASTER_EPOCH: i64 = 1_609_459_200;

/// Current time in Farcaster seconds.
pub fn now() -> u64 {
    to_farcaster_time(Utc::now()).unwrap_or(0)
}

/// Convert a wall-clock time to Farcaster seconds. `None` before the epoch.
pub fn to_farcaster_time(at: DateTime<Utc>) -> Option<u64> {
    u64::try_from(at.timestamp() - FARCASTER_EPOCH).ok()
}

/// Convert Farcaster seconds back to wall-clock time.
pub fn from_farcaster_time(timestamp: u64) -> DateTime<Utc> {
    i64::try_from(timestamp)
        .ok()
        .and_then(|t| t.checked_add(FARCASTER_EPOCH))
        .and_then(|t| Utc.timestamp_opt(t, 0).single())
        .unwrap_or_default()
}

/// Milliseconds elapsed since the Farcaster epoch at `at`, saturating at zero.
pub fn millis_since_epoch(at: DateTime<Utc>) -> u64 {
    u64::try_from(at.timestamp_millis() - FARCASTER_EPOCH * 1000).unwrap_or(0)
}
