use chrono::{DateTime, Local, NaiveDateTime, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Timezone {
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    /// Wall-clock time in this zone for the given instant
    pub(crate) fn wall_clock(self, utc: DateTime<Utc>) -> NaiveDateTime {
        match self {
            Timezone::Local => utc.with_timezone(&Local).naive_local(),
            Timezone::Named(tz) => utc.with_timezone(&tz).naive_local(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_none_returns_local() {
        assert!(matches!(Timezone::parse(None).unwrap(), Timezone::Local));
    }

    #[test]
    fn parse_local_string_returns_local() {
        assert!(matches!(
            Timezone::parse(Some("LOCAL")).unwrap(),
            Timezone::Local
        ));
        assert!(matches!(
            Timezone::parse(Some("  local  ")).unwrap(),
            Timezone::Local
        ));
    }

    #[test]
    fn parse_utc_variants() {
        for raw in ["utc", "UTC", "z", "Z"] {
            let tz = Timezone::parse(Some(raw)).unwrap();
            assert!(matches!(tz, Timezone::Named(chrono_tz::UTC)));
        }
    }

    #[test]
    fn parse_named_timezone() {
        let tz = Timezone::parse(Some("America/New_York")).unwrap();
        assert!(matches!(tz, Timezone::Named(chrono_tz::America::New_York)));
    }

    #[test]
    fn parse_invalid_timezone_returns_error() {
        let err = Timezone::parse(Some("Mars/Olympus")).unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn wall_clock_named_shifts_time() {
        let utc = "2026-06-15T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let tz = Timezone::parse(Some("America/New_York")).unwrap();
        // EDT is UTC-4 in June
        assert_eq!(tz.wall_clock(utc).format("%H:%M").to_string(), "08:00");
    }

    #[test]
    fn wall_clock_crosses_date_boundary() {
        let utc = "2024-05-31T23:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let tz = Timezone::parse(Some("Asia/Shanghai")).unwrap();
        assert_eq!(
            tz.wall_clock(utc).format("%Y%m%d").to_string(),
            "20240601"
        );
    }
}
