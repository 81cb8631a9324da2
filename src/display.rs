//! Plain data handed to whatever renders the dashboard.
//!
//! The HTML page in `ui` is one such consumer; it reads these views through
//! the JSON API and skips any element it cannot find.

use crate::aggregate::DailyPoints;
use crate::goal::{GoalState, WEEK_DAYS};
use crate::rank::RankProgress;
use crate::time_utils::day_key;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPointView {
    pub date: String,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalView {
    pub daily_goal: f64,
    pub today_points: f64,
    /// Points still missing for today, never negative.
    pub remaining: f64,
    pub met_goal_count: u8,
    pub week_days: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankView {
    pub name: String,
    pub emoji: String,
    pub total_points: f64,
    pub progress_percent: f64,
    pub at_max_tier: bool,
    pub next_name: Option<String>,
    pub next_threshold: Option<f64>,
    pub status: String,
}

/// Chronological series for the time-series chart.
pub fn daily_series(daily: &DailyPoints) -> Vec<DailyPointView> {
    daily
        .iter()
        .map(|(day, points)| DailyPointView {
            date: day_key(*day),
            points: *points,
        })
        .collect()
}

impl From<&GoalState> for GoalView {
    fn from(state: &GoalState) -> Self {
        Self {
            daily_goal: state.daily_goal,
            today_points: state.today_points,
            remaining: (state.daily_goal - state.today_points).max(0.0),
            met_goal_count: state.met_goal_count,
            week_days: WEEK_DAYS,
        }
    }
}

pub fn rank_view(progress: &RankProgress<'_>, total_points: f64) -> RankView {
    RankView {
        name: progress.current.name.to_string(),
        emoji: progress.current.emoji.to_string(),
        total_points,
        progress_percent: progress.progress_percent,
        at_max_tier: progress.at_max_tier,
        next_name: progress.next.map(|tier| tier.name.to_string()),
        next_threshold: progress.next.map(|tier| tier.threshold),
        status: rank_status(progress, total_points),
    }
}

pub fn rank_status(progress: &RankProgress<'_>, total_points: f64) -> String {
    match progress.next {
        Some(next) => format!(
            "Current rank: {} {} ({} total points) - Next rank: {} {} ({} points)",
            progress.current.name,
            progress.current.emoji,
            format_points(total_points),
            next.name,
            next.emoji,
            format_points(next.threshold),
        ),
        None => format!(
            "Congratulations! You've reached the highest rank: {} {}!",
            progress.current.name, progress.current.emoji
        ),
    }
}

/// Status line shown after the producer appends a record.
pub fn logged_message(kind: &str, points: f64) -> String {
    let sign = if points >= 0.0 { "+" } else { "" };
    format!("Logged: {kind} ({sign}{} points)", format_points(points))
}

fn format_points(points: f64) -> String {
    // Avoid rendering negative zero as "-0".
    let points = if points == 0.0 { 0.0 } else { points };
    points.to_string()
}
