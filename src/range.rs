use crate::models::{ActivityLog, RangeQuery};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::Serialize;

const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_milli_opt(23, 59, 59, 999) {
    Some(time) => time,
    None => panic!("invalid end-of-day time"),
};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RangeError {
    #[error("{field} must be a date formatted YYYY-MM-DD, got {value:?}")]
    InvalidDate { field: &'static str, value: String },
}

/// Inclusive calendar-date bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Builds a range only when both bounds are present.
    pub fn from_bounds(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Self> {
        Some(Self::new(start?, end?))
    }

    fn lower(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    fn upper(&self) -> NaiveDateTime {
        self.end.and_time(END_OF_DAY)
    }
}

pub fn parse_bound(field: &'static str, value: Option<&str>) -> Result<Option<NaiveDate>, RangeError> {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| RangeError::InvalidDate {
            field,
            value: raw.to_string(),
        })
}

impl RangeQuery {
    /// Parses both bounds; yields `None` unless both are set.
    pub fn to_range(&self) -> Result<Option<DateRange>, RangeError> {
        let start = parse_bound("start", self.start.as_deref())?;
        let end = parse_bound("end", self.end.as_deref())?;
        Ok(DateRange::from_bounds(start, end))
    }
}

/// Records whose local wall-clock time lies in `[start 00:00:00.000, end 23:59:59.999]`.
///
/// Without a range the log is copied unchanged. Relative order is preserved
/// and the input is never modified.
pub fn filter_by_range<Tz: TimeZone>(log: &ActivityLog, range: Option<DateRange>, tz: &Tz) -> ActivityLog {
    let Some(range) = range else {
        return log.clone();
    };
    let (lower, upper) = (range.lower(), range.upper());

    log.records()
        .iter()
        .filter(|record| {
            let local = record.timestamp.with_timezone(tz).naive_local();
            local >= lower && local <= upper
        })
        .cloned()
        .collect::<Vec<_>>()
        .into()
}
