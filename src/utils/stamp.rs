use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::consts::{DATE_STAMP_FORMAT, FULL_STAMP_FORMAT};
use crate::error::AppError;

/// The instant a run is stamped with. Computed once, reused for every file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RunStamp(NaiveDateTime);

impl RunStamp {
    pub(crate) fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }

    /// `YYYYMMDD`, used for the archive directory
    pub(crate) fn date(&self) -> String {
        self.0.format(DATE_STAMP_FORMAT).to_string()
    }

    /// `YYYYMMDD_HHMMSS`, used for renamed files
    pub(crate) fn full(&self) -> String {
        self.0.format(FULL_STAMP_FORMAT).to_string()
    }
}

impl Serialize for RunStamp {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.full())
    }
}

/// Parse a `--at` value: `YYYYMMDD_HHMMSS`, or `YYYYMMDD` for midnight
pub(crate) fn parse_stamp(s: &str) -> Result<NaiveDateTime, AppError> {
    let trimmed = s.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, FULL_STAMP_FORMAT) {
        return Ok(dt);
    }
    if trimmed.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(trimmed, DATE_STAMP_FORMAT)
        && let Some(dt) = d.and_hms_opt(0, 0, 0)
    {
        return Ok(dt);
    }
    Err(AppError::InvalidTimestamp {
        input: s.to_string(),
    })
}
