//! Time-of-day features

use crate::error::Result;
use chrono::{DateTime, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Hour-of-day features extracted from a transaction timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFeatures {
    /// Hour of day, 0-23
    pub hour: u32,

    /// Hour falls in the 23:00-06:59 night window
    pub is_night: bool,
}

/// Extract `(hour, is_night)` from an ISO-8601 date-time string
///
/// Accepts offset-free timestamps ("2024-03-01T23:15:00", optional
/// fractional seconds) as well as RFC 3339 with an explicit offset; the
/// hour is the wall-clock hour as written. Unparsable input yields
/// [`crate::Error::InvalidTimestamp`].
pub fn time_features(timestamp: &str) -> Result<TimeFeatures> {
    let naive = match timestamp.parse::<NaiveDateTime>() {
        Ok(dt) => dt,
        Err(_) => DateTime::parse_from_rfc3339(timestamp)?.naive_local(),
    };
    let hour = naive.hour();
    Ok(TimeFeatures {
        hour,
        is_night: hour >= 23 || hour <= 6,
    })
}
