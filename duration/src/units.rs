//! Millisecond-scaled unit constants and the table of recognized unit symbols.

use crate::Duration;

pub const MICROSECOND: Duration = 0.001;
pub const MILLISECOND: Duration = 1.0;
pub const SECOND: Duration = 1000.0 * MILLISECOND;
pub const MINUTE: Duration = 60.0 * SECOND;
pub const HOUR: Duration = 60.0 * MINUTE;
/// Exported for callers. Days are not a recognized unit symbol.
pub const DAY: Duration = 24.0 * HOUR;

static UNITS: phf::Map<&'static str, Duration> = phf::phf_map! {
    "us" => MICROSECOND,
    // U+00B5 MICRO SIGN
    "\u{00b5}s" => MICROSECOND,
    // U+03BC GREEK SMALL LETTER MU
    "\u{03bc}s" => MICROSECOND,
    "ms" => MILLISECOND,
    "s" => SECOND,
    "m" => MINUTE,
    "h" => HOUR,
};

/// Returns the number of milliseconds in one unit of `symbol`, or `None` if
/// the symbol is not recognized. Lookups are exact and case sensitive.
pub fn unit(symbol: &str) -> Option<Duration> {
    UNITS.get(symbol).copied()
}

/// Iterate over all recognized `(symbol, milliseconds)` pairs. Order is
/// unspecified.
pub fn units() -> impl Iterator<Item = (&'static str, Duration)> {
    UNITS.entries().map(|(symbol, value)| (*symbol, *value))
}
