//! Timestamp type used on the wire.
//!
//! The node transmits every time value as Unix epoch seconds (UTC).

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero). Pending operations report this.
    pub const EPOCH: Self = Self(0);

    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Absolute UTC instant for this timestamp.
    pub fn to_datetime(self) -> DateTime<Utc> {
        let secs = i64::try_from(self.0).unwrap_or(i64::MAX);
        Utc.timestamp_opt(secs, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Instants before the epoch clamp to [`Timestamp::EPOCH`].
    pub fn from_datetime(instant: DateTime<Utc>) -> Self {
        Self(u64::try_from(instant.timestamp()).unwrap_or(0))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::from_datetime(instant)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_datetime().format("%Y-%m-%d %H:%M:%S UTC"))
    }
}
