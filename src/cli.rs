//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::task::{Priority, PriorityFilter, StatusFilter};

/// Top-level CLI parser for `taskflow`.
#[derive(Debug, Parser)]
#[command(name = "taskflow", version, about = "Keep a small task list on disk")]
pub struct Cli {
    /// Directory holding the task snapshot (overrides `TASKFLOW_STORE`).
    #[arg(long, global = true, value_name = "DIR")]
    pub store: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a task to the top of the list.
    Add(AddArgs),
    /// Change fields of an existing task.
    Edit(EditArgs),
    /// Delete a task.
    #[command(alias = "rm")]
    Remove {
        /// Task ID.
        id: String,
    },
    /// Mark a task completed, or pending again.
    Toggle {
        /// Task ID.
        id: String,
    },
    /// Delete every completed task.
    ClearCompleted,
    /// List tasks, newest first.
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show one task in full.
    Show {
        /// Task ID.
        id: String,
    },
    /// Print task counts.
    Stats,
}

/// Arguments for `taskflow add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title.
    pub title: String,
    /// Longer description.
    #[arg(short, long, default_value = "")]
    pub description: String,
    /// low, medium or high.
    #[arg(short, long, default_value = "medium")]
    pub priority: Priority,
    /// Due date, YYYY-MM-DD. Must not be in the past.
    #[arg(long, value_name = "DATE")]
    pub due: Option<NaiveDate>,
}

/// Arguments for `taskflow edit`.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID.
    pub id: String,
    /// New title.
    #[arg(long)]
    pub title: Option<String>,
    /// New description.
    #[arg(short, long)]
    pub description: Option<String>,
    /// New priority.
    #[arg(short, long)]
    pub priority: Option<Priority>,
    /// New due date, YYYY-MM-DD.
    #[arg(long, value_name = "DATE", conflicts_with = "clear_due")]
    pub due: Option<NaiveDate>,
    /// Remove the due date.
    #[arg(long)]
    pub clear_due: bool,
}

/// Arguments for `taskflow list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// all, pending or completed.
    #[arg(short, long, default_value = "all")]
    pub status: StatusFilter,
    /// all, low, medium or high.
    #[arg(short, long, default_value = "all")]
    pub priority: PriorityFilter,
    /// Case-insensitive text to find in title or description.
    #[arg(short, long, default_value = "")]
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parses_add_with_options() {
        let cli = Cli::parse_from([
            "taskflow", "add", "Ship it", "-d", "before friday", "-p", "high", "--due",
            "2030-01-31",
        ]);
        let Command::Add(args) = cli.command else { panic!("expected add") };
        assert_eq!(args.title, "Ship it");
        assert_eq!(args.description, "before friday");
        assert_eq!(args.priority, Priority::High);
        assert_eq!(args.due, NaiveDate::from_ymd_opt(2030, 1, 31));
    }

    #[test]
    fn add_defaults_to_medium_without_due_date() {
        let cli = Cli::parse_from(["taskflow", "add", "x"]);
        let Command::Add(args) = cli.command else { panic!("expected add") };
        assert_eq!(args.priority, Priority::Medium);
        assert_eq!(args.due, None);
    }

    #[test]
    fn list_filters_parse() {
        let cli = Cli::parse_from(["taskflow", "ls", "-s", "completed", "-p", "high", "-q", "bug"]);
        let Command::List(args) = cli.command else { panic!("expected list") };
        assert_eq!(args.status, StatusFilter::Completed);
        assert_eq!(args.priority, PriorityFilter::Only(Priority::High));
        assert_eq!(args.query, "bug");
    }

    #[test]
    fn edit_rejects_due_and_clear_due_together() {
        let result =
            Cli::try_parse_from(["taskflow", "edit", "id", "--due", "2030-01-01", "--clear-due"]);
        assert!(result.is_err());
    }

    #[test]
    fn store_flag_is_global() {
        let cli = Cli::parse_from(["taskflow", "stats", "--store", "/tmp/tasks"]);
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/tasks")));
        assert!(matches!(cli.command, Command::Stats));
    }

    #[test]
    fn bad_priority_is_rejected() {
        assert!(Cli::try_parse_from(["taskflow", "add", "x", "-p", "urgent"]).is_err());
    }
}
