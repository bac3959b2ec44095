//! Conversions between millisecond durations and other time representations.

use crate::units::SECOND;
use crate::Duration;

const NANOS_PER_MILLI: f64 = 1e6;
const NANOS_PER_SEC: f64 = 1e9;

/// Converts a high resolution `(seconds, nanoseconds)` pair, as returned by a
/// monotonic clock, into milliseconds. The pair is not validated.
pub fn from_hr((secs, nanos): (u64, u32)) -> Duration {
    secs as f64 * 1e3 + nanos as f64 / NANOS_PER_MILLI
}

/// Converts milliseconds into seconds, for reporting into histograms and
/// gauges which are denominated in seconds.
pub fn to_seconds(duration: Duration) -> f64 {
    duration / SECOND
}

/// Converts a high resolution `(seconds, nanoseconds)` pair directly into
/// seconds.
pub fn from_hr_to_seconds((secs, nanos): (u64, u32)) -> f64 {
    secs as f64 + nanos as f64 / NANOS_PER_SEC
}

/// Converts a `core::time::Duration` into milliseconds.
pub fn from_std(duration: core::time::Duration) -> Duration {
    from_hr((duration.as_secs(), duration.subsec_nanos()))
}

/// Converts milliseconds into a `core::time::Duration`. Returns `None` if the
/// duration is negative, not finite, or too large to represent.
pub fn to_std(duration: Duration) -> Option<core::time::Duration> {
    core::time::Duration::try_from_secs_f64(to_seconds(duration)).ok()
}
