use crate::aggregate::aggregate_by_day;
use crate::display::{daily_series, rank_view, GoalView};
use crate::goal::{compute_goal_state, DAILY_GOAL};
use crate::models::{ActivityLog, Dashboard};
use crate::range::{filter_by_range, DateRange};
use crate::rank::{resolve_rank, RankTable};
use chrono::{DateTime, Local, TimeZone, Utc};

pub fn build_dashboard(log: &ActivityLog, ranks: &RankTable<'_>, range: Option<DateRange>) -> Dashboard {
    build_dashboard_at(log, ranks, range, Utc::now(), &Local)
}

/// Derives every dashboard figure from a (possibly range-restricted) view of `log`.
///
/// The view is a fresh copy; `log` itself is only read.
pub fn build_dashboard_at<Tz: TimeZone>(
    log: &ActivityLog,
    ranks: &RankTable<'_>,
    range: Option<DateRange>,
    now: DateTime<Utc>,
    tz: &Tz,
) -> Dashboard {
    let view = filter_by_range(log, range, tz);
    let records = view.records();

    let daily = aggregate_by_day(records, tz);
    let total_points = view.total_points();
    let progress = resolve_rank(total_points, ranks);
    let goal = compute_goal_state(records, DAILY_GOAL, now, tz);

    Dashboard {
        range,
        activity_count: view.len(),
        total_points,
        daily_points: daily_series(&daily),
        goal: GoalView::from(&goal),
        rank: rank_view(&progress, total_points),
    }
}
