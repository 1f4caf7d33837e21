//! Conversion between wire timestamps (integer seconds since the Unix epoch)
//! and `DateTime<Utc>`.
//!
//! Both directions are pinned to UTC so a round trip never depends on the
//! host's local time zone.

use crate::client::ClientError;
use chrono::{DateTime, Utc};

/// Whole seconds since 1970-01-01T00:00:00Z. Sub-second precision is dropped.
pub fn to_epoch_seconds(dt: &DateTime<Utc>) -> i64 {
    dt.timestamp()
}

/// Calendar time for a wire timestamp.
pub fn from_epoch_seconds(secs: i64) -> Result<DateTime<Utc>, ClientError> {
    DateTime::from_timestamp(secs, 0).ok_or(ClientError::TimestampOutOfRange(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_epoch_origin() {
        assert_eq!(to_epoch_seconds(&DateTime::UNIX_EPOCH), 0);
        assert_eq!(from_epoch_seconds(0).unwrap(), DateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_round_trip() {
        let samples = [
            Utc.with_ymd_and_hms(2014, 1, 15, 8, 30, 0).unwrap(),
            Utc.with_ymd_and_hms(1969, 7, 20, 20, 17, 40).unwrap(),
            Utc.with_ymd_and_hms(2038, 1, 19, 3, 14, 8).unwrap(),
        ];
        for dt in samples {
            assert_eq!(from_epoch_seconds(to_epoch_seconds(&dt)).unwrap(), dt);
        }
    }

    #[test]
    fn test_sub_second_dropped() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
            + chrono::Duration::milliseconds(750);
        let secs = to_epoch_seconds(&dt);
        assert_eq!(secs, 1709294400);

        let back = from_epoch_seconds(secs).unwrap();
        assert_eq!(back.nanosecond(), 0);
        assert_eq!(back, dt.with_nanosecond(0).unwrap());
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            from_epoch_seconds(i64::MAX),
            Err(ClientError::TimestampOutOfRange(i64::MAX))
        ));
    }
}
