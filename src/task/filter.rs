//! Status, priority, and free-text filtering over the task list.

use std::str::FromStr;

use super::model::{Priority, Task};

/// Selects tasks by completion state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Every task.
    #[default]
    All,
    /// Tasks not yet completed.
    Pending,
    /// Completed tasks.
    Completed,
}

impl StatusFilter {
    fn accepts(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            other => {
                Err(format!("unknown status `{other}` (expected all, pending or completed)"))
            }
        }
    }
}

/// Selects tasks by priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    /// Every priority.
    #[default]
    All,
    /// Exactly this priority.
    Only(Priority),
}

impl PriorityFilter {
    fn accepts(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Only(priority) => task.priority == priority,
        }
    }
}

impl From<Priority> for PriorityFilter {
    fn from(priority: Priority) -> Self {
        Self::Only(priority)
    }
}

impl FromStr for PriorityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<Priority>().map(Self::Only)
    }
}

/// Combined view filter. The default matches every task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Completion-state filter, applied first.
    pub status: StatusFilter,
    /// Priority filter, applied second.
    pub priority: PriorityFilter,
    /// Case-insensitive substring matched against title or description.
    pub query: String,
}

impl TaskFilter {
    /// Builds a filter from its three parts.
    #[must_use]
    pub fn new(
        status: StatusFilter,
        priority: impl Into<PriorityFilter>,
        query: impl Into<String>,
    ) -> Self {
        Self { status, priority: priority.into(), query: query.into() }
    }

    /// Returns a matcher with the query lowercased once up front.
    #[must_use]
    pub fn matcher(&self) -> TaskMatcher {
        TaskMatcher {
            status: self.status,
            priority: self.priority,
            needle: self.query.to_lowercase(),
        }
    }

    /// True if `task` passes all three stages.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matcher().matches(task)
    }
}

/// A prepared [`TaskFilter`], cheap to apply repeatedly during a scan.
#[derive(Debug, Clone)]
pub struct TaskMatcher {
    status: StatusFilter,
    priority: PriorityFilter,
    needle: String,
}

impl TaskMatcher {
    /// Applies status, then priority, then the text query.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.status.accepts(task) && self.priority.accepts(task) && self.matches_text(task)
    }

    fn matches_text(&self, task: &Task) -> bool {
        self.needle.is_empty()
            || task.title.to_lowercase().contains(&self.needle)
            || task.description.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, title: &str, description: &str, priority: Priority, done: bool) -> Task {
        Task {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            priority,
            due_date: None,
            completed: done,
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn default_filter_matches_everything() {
        let filter = TaskFilter::default();
        assert!(filter.matches(&task("a", "x", "", Priority::Low, false)));
        assert!(filter.matches(&task("b", "y", "", Priority::High, true)));
    }

    #[test]
    fn status_filter_splits_by_completion() {
        let pending = task("a", "x", "", Priority::Low, false);
        let done = task("b", "y", "", Priority::Low, true);
        let only_pending = TaskFilter::new(StatusFilter::Pending, PriorityFilter::All, "");
        let only_done = TaskFilter::new(StatusFilter::Completed, PriorityFilter::All, "");
        assert!(only_pending.matches(&pending));
        assert!(!only_pending.matches(&done));
        assert!(only_done.matches(&done));
        assert!(!only_done.matches(&pending));
    }

    #[test]
    fn query_is_case_insensitive_over_title_or_description() {
        let in_title = task("a", "URGENT fix", "", Priority::High, false);
        let in_description = task("b", "Fix", "this is Urgent", Priority::High, false);
        let neither = task("c", "Fix", "later", Priority::High, false);
        let filter = TaskFilter::new(StatusFilter::All, PriorityFilter::All, "urgent");
        assert!(filter.matches(&in_title));
        assert!(filter.matches(&in_description));
        assert!(!filter.matches(&neither));
    }

    #[test]
    fn all_three_stages_must_pass() {
        let filter = TaskFilter::new(StatusFilter::Completed, Priority::High, "urgent");
        assert!(filter.matches(&task("a", "urgent", "", Priority::High, true)));
        assert!(!filter.matches(&task("b", "urgent", "", Priority::High, false)));
        assert!(!filter.matches(&task("c", "urgent", "", Priority::Medium, true)));
        assert!(!filter.matches(&task("d", "calm", "", Priority::High, true)));
    }

    #[test]
    fn filters_parse_from_names() {
        assert_eq!("Pending".parse::<StatusFilter>(), Ok(StatusFilter::Pending));
        assert_eq!("all".parse::<PriorityFilter>(), Ok(PriorityFilter::All));
        assert_eq!("high".parse::<PriorityFilter>(), Ok(PriorityFilter::Only(Priority::High)));
        assert!("done".parse::<StatusFilter>().is_err());
    }
}
