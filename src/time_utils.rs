//! Shared helpers for timestamps and calendar-day bucketing.
//!
//! Every record is stored as an absolute UTC instant. Day buckets are derived
//! from that instant as observed in a caller-supplied zone: the service passes
//! `chrono::Local`, tests pass `Utc` or a fixed offset.

use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};

/// Calendar date of `instant` as seen in `tz`.
pub fn calendar_day<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

/// `YYYY-MM-DD` key for a calendar date.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format an instant as RFC3339 UTC with nine fractional digits.
///
/// The fixed width keeps serialized timestamps lexicographically sortable.
pub fn format_timestamp(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|parsed| parsed.with_timezone(&Utc))
}

/// Serde adapter for `DateTime<Utc>` fields using [`format_timestamp`].
pub mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_timestamp(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}
