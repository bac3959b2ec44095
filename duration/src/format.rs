use crate::decimal::trimmed;
use crate::units::{MICROSECOND, MILLISECOND, SECOND};
use crate::Duration;
use core::fmt;

/// Convert a duration in milliseconds into its canonical string form.
///
/// Durations under a millisecond with a fractional part are written as whole
/// microseconds, truncated toward zero. Durations under a second are written
/// in milliseconds with up to 3 decimals. Anything longer is split into hours,
/// minutes and seconds, with up to 6 decimals on the seconds.
///
/// ```
/// use rustcommon_duration::format;
///
/// assert_eq!(format(0.0), "0s");
/// assert_eq!(format(0.1), "100µs");
/// assert_eq!(format(2.2), "2.2ms");
/// assert_eq!(format(63949.0), "1m3.949s");
/// assert_eq!(format(-3600000.0), "-1h0m0s");
/// ```
pub fn format(duration: Duration) -> String {
    Formatted(duration).to_string()
}

/// Wraps a duration in milliseconds so it can be written with `{}`. The output
/// is identical to [`format`].
///
/// NaN and infinite durations have no canonical form and are written the way
/// `f64` writes them (`NaN`, `inf`, `-inf`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Formatted(pub Duration);

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let duration = self.0;

        if !duration.is_finite() {
            return write!(f, "{duration}");
        }

        if duration == 0.0 {
            return f.write_str("0s");
        }

        let rem = duration.abs();

        if rem.fract() != 0.0 && rem < MILLISECOND {
            return write!(f, "{}µs", (duration / MICROSECOND).trunc() as i64);
        }

        if rem < SECOND {
            return write!(f, "{}ms", trimmed(duration / MILLISECOND, 3));
        }

        let seconds = rem / SECOND;
        let minutes = (seconds / 60.0).floor();
        let hours = (minutes / 60.0).floor();

        if duration < 0.0 {
            f.write_str("-")?;
        }

        if hours > 0.0 {
            write!(f, "{hours}h")?;
        }

        if minutes > 0.0 {
            write!(f, "{}m", minutes % 60.0)?;
        }

        write!(f, "{}s", trimmed(seconds % 60.0, 6))
    }
}
