use crate::aggregate::{aggregate_by_day, points_on_day};
use crate::models::ActivityRecord;
use crate::time_utils::calendar_day;
use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use serde::Serialize;

pub const DAILY_GOAL: f64 = 50.0;

/// How many recorded days the weekly count inspects.
pub const WEEK_DAYS: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalState {
    pub daily_goal: f64,
    pub today_points: f64,
    /// Recorded days in the last week whose total reached the goal, `0..=7`.
    pub met_goal_count: u8,
}

/// Today's total plus the number of recent days that met `daily_goal`.
///
/// Only days with at least one record are considered: a day with no activity
/// inside the window is skipped rather than counted as a miss.
pub fn compute_goal_state<Tz: TimeZone>(
    records: &[ActivityRecord],
    daily_goal: f64,
    now: DateTime<Utc>,
    tz: &Tz,
) -> GoalState {
    let today = calendar_day(&now, tz);
    let cutoff = (now - Duration::days(WEEK_DAYS as i64)).with_timezone(tz).naive_local();
    let daily = aggregate_by_day(records, tz);

    // A day is in the window when its local midnight is no earlier than a week before `now`.
    // BTreeMap keys are ascending, so the tail is the most recent days.
    let recent: Vec<f64> = daily
        .range(..=today)
        .filter(|(day, _)| day.and_time(NaiveTime::MIN) >= cutoff)
        .map(|(_, points)| *points)
        .collect();
    let inspected = &recent[recent.len().saturating_sub(WEEK_DAYS)..];
    let met_goal_count = inspected.iter().filter(|points| **points >= daily_goal).count() as u8;

    GoalState {
        daily_goal,
        today_points: points_on_day(records, today, tz),
        met_goal_count,
    }
}
