use crate::display::{DailyPointView, GoalView, RankView};
use crate::range::DateRange;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged event. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub points: f64,
    #[serde(with = "crate::time_utils::timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl ActivityRecord {
    pub fn new(kind: impl Into<String>, points: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind: kind.into(),
            points,
            timestamp,
        }
    }
}

/// Insertion-ordered sequence of records, persisted as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityLog {
    records: Vec<ActivityRecord>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn append(&mut self, record: ActivityRecord) {
        self.records.push(record);
    }

    /// Removes the most recent record; used to undo an append whose save failed.
    pub fn pop(&mut self) -> Option<ActivityRecord> {
        self.records.pop()
    }

    pub fn total_points(&self) -> f64 {
        self.records.iter().map(|record| record.points).sum()
    }
}

impl From<Vec<ActivityRecord>> for ActivityLog {
    fn from(records: Vec<ActivityRecord>) -> Self {
        Self { records }
    }
}

/// Fixed activities offered as one-click buttons on the dashboard.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ActivityPreset {
    pub kind: &'static str,
    pub label: &'static str,
    pub points: f64,
}

pub static ACTIVITY_PRESETS: &[ActivityPreset] = &[
    ActivityPreset { kind: "walk", label: "Walk", points: 10.0 },
    ActivityPreset { kind: "bike", label: "Bike", points: 8.0 },
    ActivityPreset { kind: "bus", label: "Bus", points: 3.0 },
    ActivityPreset { kind: "car", label: "Car", points: -5.0 },
];

pub fn find_preset(kind: &str) -> Option<&'static ActivityPreset> {
    ACTIVITY_PRESETS.iter().find(|preset| preset.kind == kind)
}

#[derive(Debug, Deserialize)]
pub struct LogActivityRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub points: f64,
}

/// Optional `YYYY-MM-DD` bounds from the query string; empty means unset.
#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub range: Option<DateRange>,
    pub activity_count: usize,
    pub total_points: f64,
    pub daily_points: Vec<DailyPointView>,
    pub goal: GoalView,
    pub rank: RankView,
}

#[derive(Debug, Serialize)]
pub struct LogActivityResponse {
    pub status: String,
    pub record: ActivityRecord,
    pub dashboard: Dashboard,
}
