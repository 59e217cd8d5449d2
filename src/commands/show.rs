//! `taskflow show` command.

use std::io::Write;

use super::write_err;
use crate::context::ServiceContext;
use crate::store::{StoreError, TaskStore};
use crate::task::dates::{format_due, format_relative, is_overdue};

/// Execute the `show` command.
///
/// # Errors
///
/// Returns an error string if the task is unknown or output fails.
pub fn run(
    store: &TaskStore<'_>,
    ctx: &ServiceContext,
    id: &str,
    out: &mut dyn Write,
) -> Result<(), String> {
    let task = store.get(id).ok_or_else(|| StoreError::NotFound(id.to_string()).to_string())?;

    let mut lines = vec![
        format!("Task: {}", task.id),
        format!("Title: {}", task.title),
        format!("Priority: {}", task.priority),
        format!("Status: {}", if task.completed { "completed" } else { "pending" }),
    ];
    if let Some(due) = task.due_date {
        let flag = if is_overdue(task, ctx.clock.today()) { " (overdue)" } else { "" };
        lines.push(format!("Due: {}{flag}", format_due(due)));
    }
    lines.push(format!("Created: {}", format_relative(task.created_at, ctx.clock.now())));
    if !task.description.is_empty() {
        lines.push(String::new());
        lines.push(task.description.clone());
    }

    for line in lines {
        writeln!(out, "{line}").map_err(write_err)?;
    }
    Ok(())
}
