//! Core task record type.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// How urgent a task is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// The default for new tasks.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Lowercase name used in storage and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown priority `{other}` (expected low, medium or high)")),
        }
    }
}

/// A single to-do record.
///
/// Field names are persisted in camelCase so snapshots stay readable by
/// the browser front end that shares the storage layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique identifier, fixed for the task's lifetime.
    pub id: String,
    /// Trimmed, never empty.
    pub title: String,
    /// Trimmed, may be empty.
    #[serde(default)]
    pub description: String,
    /// Urgency level.
    #[serde(default)]
    pub priority: Priority,
    /// Optional calendar due date.
    #[serde(default, deserialize_with = "blank_date_as_none")]
    pub due_date: Option<NaiveDate>,
    /// Completion state; toggles freely.
    #[serde(default)]
    pub completed: bool,
    /// Creation instant, immutable after `add`.
    pub created_at: DateTime<Utc>,
}

/// Input for creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    /// Raw title; trimmed before validation.
    pub title: String,
    /// Raw description; trimmed before storing.
    pub description: String,
    /// Urgency level.
    pub priority: Priority,
    /// Optional due date, must not be in the past.
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    /// Creates input with only a title; everything else takes defaults.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub fn due(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }
}

/// Partial update for an existing task. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New priority.
    pub priority: Option<Priority>,
    /// `Some(None)` clears the due date, `Some(Some(d))` sets it.
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    /// True when the patch would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
    }
}

/// Accepts `null`, a missing field, `""`, or `"YYYY-MM-DD"`.
fn blank_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn priority_defaults_to_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<Priority>(), Ok(Priority::High));
        assert_eq!(" low ".parse::<Priority>(), Ok(Priority::Low));
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn task_serializes_with_camel_case_keys() {
        let task = Task {
            id: "t1".into(),
            title: "Buy milk".into(),
            description: String::new(),
            priority: Priority::Low,
            due_date: NaiveDate::from_ymd_opt(2030, 1, 2),
            completed: false,
            created_at: "2029-12-31T10:00:00Z".parse().unwrap(),
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["dueDate"], json!("2030-01-02"));
        assert_eq!(value["createdAt"], json!("2029-12-31T10:00:00Z"));
        assert_eq!(value["priority"], json!("low"));
    }

    #[test]
    fn blank_due_date_reads_as_none() {
        let raw = json!({
            "id": "lz3k9x",
            "title": "Write report",
            "description": "",
            "priority": "high",
            "dueDate": "",
            "completed": true,
            "createdAt": "2024-05-01T08:30:00.000Z"
        });
        let task: Task = serde_json::from_value(raw).unwrap();
        assert_eq!(task.due_date, None);
        assert!(task.completed);
        assert_eq!(task.priority, Priority::High);
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let raw = json!({
            "id": "a",
            "title": "Only a title",
            "createdAt": "2024-05-01T08:30:00Z"
        });
        let task: Task = serde_json::from_value(raw).unwrap();
        assert_eq!(task.description, "");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.due_date, None);
        assert!(!task.completed);
    }

    #[test]
    fn malformed_due_date_is_rejected() {
        let raw = json!({
            "id": "a",
            "title": "x",
            "dueDate": "next tuesday",
            "createdAt": "2024-05-01T08:30:00Z"
        });
        assert!(serde_json::from_value::<Task>(raw).is_err());
    }

    #[test]
    fn empty_patch_reports_empty() {
        assert!(TaskPatch::default().is_empty());
        let patch = TaskPatch { priority: Some(Priority::High), ..TaskPatch::default() };
        assert!(!patch.is_empty());
    }
}
