//! Calendar-date rules and human-readable date labels.

use chrono::{DateTime, NaiveDate, Utc};

use super::model::Task;

/// True if `date` falls strictly before `today`. Both are calendar dates.
#[must_use]
pub fn is_past_date(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// A task is overdue when its due date has passed and it is still pending.
#[must_use]
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    !task.completed && task.due_date.is_some_and(|due| is_past_date(due, today))
}

/// Formats a due date as `Mar 5, 2025`.
#[must_use]
pub fn format_due(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Formats how long ago `then` was, relative to `now`.
///
/// Falls back to an absolute date once the gap reaches a week.
#[must_use]
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let secs = elapsed.num_seconds();
    let mins = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if secs < 60 {
        "just now".to_string()
    } else if mins < 60 {
        format!("{mins}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days}d ago")
    } else {
        format_due(then.date_naive())
    }
}
