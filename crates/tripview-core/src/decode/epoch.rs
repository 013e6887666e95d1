//! Fractional Unix timestamps

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use super::DecodeError;

const KIND: &str = "epoch time";

/// An `epoch time` column value, truncated to whole seconds
///
/// Blank or non-numeric text fails to decode; there is no missing-reading
/// default for timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnixEpoch {
    #[serde(skip)]
    raw: String,
    #[serde(rename = "epoch")]
    instant: DateTime<Utc>,
}

impl UnixEpoch {
    /// Decode seconds-since-epoch text such as `"1700000000.734"`
    pub fn parse(raw: &str) -> Result<Self, DecodeError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(DecodeError::Blank { kind: KIND });
        }
        let seconds: f64 = text
            .parse()
            .map_err(|_| DecodeError::malformed(KIND, raw))?;
        if !seconds.is_finite() {
            return Err(DecodeError::malformed(KIND, raw));
        }
        // Truncate toward zero, never round.
        let instant = DateTime::from_timestamp(seconds.trunc() as i64, 0)
            .ok_or_else(|| DecodeError::malformed(KIND, raw))?;
        Ok(Self {
            raw: raw.to_string(),
            instant,
        })
    }

    /// The raw text as read from the log
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whole seconds since 1970-01-01T00:00:00Z
    pub fn to_epoch_seconds(&self) -> i64 {
        self.instant.timestamp()
    }

    /// Absolute instant in UTC
    pub fn to_date_time(&self) -> DateTime<Utc> {
        self.instant
    }
}

impl fmt::Display for UnixEpoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.instant.format("%Y-%m-%d %H:%M:%S UTC"))
    }
}
