//! Timestamp value object for immutable points in time.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from Unix seconds.
    ///
    /// Values outside chrono's range saturate to the Unix epoch.
    pub fn from_unix_secs(secs: u64) -> Self {
        let dt = Utc.timestamp_opt(secs as i64, 0).single().unwrap_or_default();
        Self(dt)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_now_is_not_earlier() {
        let first = Timestamp::now();
        let second = Timestamp::now();
        assert!(first <= second);
    }

    #[test]
    fn timestamp_ordering_works() {
        let ts1 = Timestamp::from_unix_secs(1000);
        let ts2 = Timestamp::from_unix_secs(1001);

        assert!(ts1 < ts2);
        assert_eq!(ts1.max(ts2), ts2);
    }

    #[test]
    fn timestamp_from_unix_secs_serializes_as_rfc3339() {
        // 2024-01-15T00:00:00Z
        let ts = Timestamp::from_unix_secs(1705276800);
        assert_eq!(
            serde_json::to_string(&ts).unwrap(),
            "\"2024-01-15T00:00:00Z\""
        );
    }

    #[test]
    fn timestamp_json_roundtrip_is_exact() {
        let ts = Timestamp::now();
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, back);
    }
}
