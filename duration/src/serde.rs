//! Serde support for durations held as milliseconds in an `f64` field.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Config {
//!     #[serde(with = "rustcommon_duration::serde")]
//!     timeout: f64,
//! }
//!
//! let config: Config = serde_json::from_str(r#"{"timeout": "1m30s"}"#).unwrap();
//! assert_eq!(config.timeout, 90000.0);
//! assert_eq!(serde_json::to_string(&config).unwrap(), r#"{"timeout":"1m30s"}"#);
//! ```

use crate::Duration;
use ::serde::de::{self, Deserializer, Visitor};
use ::serde::Serializer;
use core::fmt;

/// Serialize a duration as its canonical string.
pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&crate::Formatted(*duration))
}

/// Deserialize a duration from either a duration string or a number of
/// milliseconds.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(DurationVisitor)
}

struct DurationVisitor;

impl<'de> Visitor<'de> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a duration string or a number of milliseconds")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        crate::parse(v).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(v as f64)
    }
}
