//! Parse user-supplied timestamps into UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::{AgendaError, Result};

/// Naive layouts tried after RFC 3339. `%.f` also matches no fraction at all.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a datetime string into `DateTime<Utc>`.
///
/// Accepts RFC 3339 with any offset (e.g. "2026-03-02T14:00:00-03:00") and
/// naive `YYYY-MM-DDTHH:MM:SS[.fff]` datetimes, with `T` or a space between
/// date and time, which are read as UTC.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|ndt| ndt.and_utc())
        .ok_or_else(|| {
            AgendaError::InvalidTimestamp(format!(
                "'{}': expected RFC 3339 or YYYY-MM-DDTHH:MM:SS",
                s
            ))
        })
}

/// Serde adapter reading a timestamp string through [`parse_datetime`].
///
/// Use with `#[serde(deserialize_with = "crate::timestamp::deserialize")]`.
pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_datetime(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn rfc3339_offset_is_normalised_to_utc() {
        let dt = parse_datetime("2026-03-02T14:00:00-03:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 3, 2, 17, 0, 0).unwrap());
    }

    #[test]
    fn naive_datetime_is_read_as_utc() {
        let dt = parse_datetime("2026-03-02T14:00:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 3, 2, 14, 0, 0).unwrap());
    }

    #[test]
    fn naive_datetime_with_fraction() {
        let dt = parse_datetime("2026-03-02T14:00:00.250").unwrap();
        assert_eq!(
            dt,
            Utc.with_ymd_and_hms(2026, 3, 2, 14, 0, 0).unwrap() + Duration::milliseconds(250)
        );
    }

    #[test]
    fn naive_datetime_with_space_separator() {
        let dt = parse_datetime("2026-03-02 14:00:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 3, 2, 14, 0, 0).unwrap());
    }

    #[test]
    fn garbage_is_rejected() {
        let err = parse_datetime("next tuesday").unwrap_err();
        assert!(matches!(err, AgendaError::InvalidTimestamp(_)));
    }

    #[test]
    fn date_only_is_rejected() {
        assert!(parse_datetime("2026-03-02").is_err());
    }
}
