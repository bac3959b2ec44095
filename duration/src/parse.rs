use crate::units::unit;
use crate::{Duration, Error};
use core::any::Any;
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

// A number is either digits with an optional trailing point, or optional
// digits followed by a point and at least one digit. The unit is everything up
// to the next digit or point. Digits are ASCII only.
static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<num>[0-9]+\.?|[0-9]*\.[0-9]+)(?P<unit>[^0-9.]+)")
        .expect("constant pattern compiles")
});

/// Parse a duration string such as `1h30m0s` or `-.5ms` and return its value
/// in milliseconds.
///
/// A leading `-` negates the whole duration. The literal `0` is the only
/// number accepted without a unit.
///
/// ```
/// use rustcommon_duration::{parse, MINUTE, SECOND};
///
/// assert_eq!(parse("4m5s").unwrap(), 4.0 * MINUTE + 5.0 * SECOND);
/// assert_eq!(parse("-1.5s").unwrap(), -1500.0);
/// assert!(parse("5").is_err());
/// ```
pub fn parse(input: &str) -> Result<Duration, Error> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        debug!("rejecting empty duration {input:?}");
        return Err(invalid(input));
    }

    if input == "0" {
        return Ok(0.0);
    }

    let sign = if trimmed.starts_with('-') { -1.0 } else { 1.0 };

    let mut total = 0.0;
    let mut tokens = 0;

    for token in TOKEN.captures_iter(input) {
        let num = &token["num"];
        let symbol = &token["unit"];

        trace!("duration token: {num} {symbol}");

        let multiplier = unit(symbol).ok_or_else(|| {
            debug!("unknown unit {symbol:?} in duration {input:?}");
            Error::UnknownUnit {
                unit: symbol.to_string(),
                input: input.to_string(),
            }
        })?;

        let value: f64 = num.parse().map_err(|_| invalid(input))?;

        total += value * multiplier;
        tokens += 1;
    }

    if tokens == 0 {
        debug!("no tokens in duration {input:?}");
        return Err(invalid(input));
    }

    Ok(sign * total)
}

/// Parse a dynamically typed value as a duration.
///
/// Numbers of any primitive type are already durations in milliseconds and
/// are returned as an `f64`. `String` and `&'static str` values are handed to
/// [`parse`]. Any other type is rejected with [`Error::NonString`].
pub fn parse_value(input: &dyn Any) -> Result<Duration, Error> {
    if let Some(number) = number(input) {
        return Ok(number);
    }

    if let Some(s) = input.downcast_ref::<String>() {
        return parse(s);
    }

    if let Some(s) = input.downcast_ref::<&'static str>() {
        return parse(s);
    }

    Err(Error::NonString)
}

fn number(input: &dyn Any) -> Option<f64> {
    macro_rules! downcast {
        ($($ty:ty),*) => {
            $(
                if let Some(v) = input.downcast_ref::<$ty>() {
                    return Some(*v as f64);
                }
            )*
        };
    }

    downcast!(f64, f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

    None
}

fn invalid(input: &str) -> Error {
    Error::Invalid {
        input: input.to_string(),
    }
}
