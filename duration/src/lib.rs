//! This crate converts between durations, held as a number of milliseconds,
//! and compact human readable strings built from compound units such as
//! `1h30m0s`, `2.5ms` or `-100µs`.
//!
//! Durations are plain `f64` values so they may be negative and may carry
//! sub-millisecond precision. The recognized unit symbols are `h`, `m`, `s`,
//! `ms`, and `us` (also written `µs` or `μs`).
//!
//! ```
//! use rustcommon_duration::{format, parse, HOUR, MINUTE};
//!
//! let duration = parse("1h30m0s").unwrap();
//! assert_eq!(duration, HOUR + 30.0 * MINUTE);
//! assert_eq!(format(duration), "1h30m0s");
//! ```
//!
//! Strings produced by [`format`] parse back to the same duration. Other
//! spellings are also accepted, so `1s`, `1000ms` and `1.s` all parse to
//! `1000.0`, but only `1s` is canonical.

mod convert;
mod decimal;
mod error;
mod format;
mod parse;
mod units;

#[cfg(feature = "serde")]
pub mod serde;

pub use convert::{from_hr, from_hr_to_seconds, from_std, to_seconds, to_std};
pub use error::{Error, ErrorKind};
pub use format::{format, Formatted};
pub use parse::{parse, parse_value};
pub use units::{unit, units, DAY, HOUR, MICROSECOND, MILLISECOND, MINUTE, SECOND};

/// A span of time in milliseconds.
pub type Duration = f64;
