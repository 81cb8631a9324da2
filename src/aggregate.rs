use crate::models::ActivityRecord;
use crate::time_utils::calendar_day;
use chrono::{NaiveDate, TimeZone};
use std::collections::BTreeMap;

/// Summed points per calendar day. Only days with at least one record appear.
pub type DailyPoints = BTreeMap<NaiveDate, f64>;

pub fn aggregate_by_day<Tz: TimeZone>(records: &[ActivityRecord], tz: &Tz) -> DailyPoints {
    let mut points = DailyPoints::new();
    for record in records {
        *points.entry(calendar_day(&record.timestamp, tz)).or_insert(0.0) += record.points;
    }
    points
}

/// Sum of points for records falling on `day`.
pub fn points_on_day<Tz: TimeZone>(records: &[ActivityRecord], day: NaiveDate, tz: &Tz) -> f64 {
    records
        .iter()
        .filter(|record| calendar_day(&record.timestamp, tz) == day)
        .map(|record| record.points)
        .sum()
}
