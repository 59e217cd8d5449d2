//! `taskflow list` command.

use std::io::Write;

use super::write_err;
use crate::cli::ListArgs;
use crate::context::ServiceContext;
use crate::store::TaskStore;
use crate::task::dates::{format_due, is_overdue};
use crate::task::{StatusFilter, Task, TaskFilter};

/// Execute the `list` command.
///
/// Prints matching tasks as a table: ID, completion mark, priority, due
/// date (flagged when overdue), and title.
///
/// # Errors
///
/// Returns an error string if output cannot be written.
pub fn run(
    store: &TaskStore<'_>,
    ctx: &ServiceContext,
    args: &ListArgs,
    out: &mut dyn Write,
) -> Result<(), String> {
    let filter = TaskFilter::new(args.status, args.priority, args.query.clone());
    let matching: Vec<&Task> = store.list(&filter).collect();

    if matching.is_empty() {
        return writeln!(out, "{}", empty_message(&filter)).map_err(write_err);
    }

    let today = ctx.clock.today();
    let rows: Vec<[String; 5]> = matching
        .iter()
        .map(|task| {
            let due = match task.due_date {
                Some(date) if is_overdue(task, today) => format!("{} (overdue)", format_due(date)),
                Some(date) => format_due(date),
                None => "-".to_string(),
            };
            [
                task.id.clone(),
                if task.completed { "[x]" } else { "[ ]" }.to_string(),
                task.priority.to_string(),
                due,
                task.title.clone(),
            ]
        })
        .collect();

    // Calculate column widths.
    let header = ["ID", "DONE", "PRIORITY", "DUE", "TITLE"];
    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(out, "{}", format_row(&widths, header)).map_err(write_err)?;
    let rule = widths.map(|w| "-".repeat(w));
    writeln!(out, "{}", format_row(&widths, rule.each_ref().map(String::as_str)))
        .map_err(write_err)?;
    for row in &rows {
        writeln!(out, "{}", format_row(&widths, row.each_ref().map(String::as_str)))
            .map_err(write_err)?;
    }

    writeln!(out, "\n{} of {} task(s) shown.", rows.len(), store.len()).map_err(write_err)
}

fn format_row(widths: &[usize; 5], cells: [&str; 5]) -> String {
    let [id_w, done_w, pri_w, due_w, _] = *widths;
    let [id, done, priority, due, title] = cells;
    format!("{id:<id_w$}  {done:<done_w$}  {priority:<pri_w$}  {due:<due_w$}  {title}")
}

/// What to say when nothing matches, depending on why.
fn empty_message(filter: &TaskFilter) -> &'static str {
    if !filter.query.is_empty() {
        "No tasks found. Try a different search term."
    } else {
        match filter.status {
            StatusFilter::Completed => "No completed tasks. Complete some tasks to see them here.",
            StatusFilter::Pending => "All caught up! No pending tasks remaining.",
            StatusFilter::All => "No tasks yet! Add your first task to get started.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixed::{FixedClock, SequentialIdGenerator};
    use crate::adapters::memory::MemoryStorage;
    use crate::store::DEFAULT_KEY;
    use crate::task::{NewTask, Priority, PriorityFilter};
    use chrono::{Duration, NaiveDate};
    use std::sync::Arc;

    fn list_args(status: StatusFilter, query: &str) -> ListArgs {
        ListArgs { status, priority: PriorityFilter::All, query: query.to_string() }
    }

    fn render(store: &TaskStore<'_>, ctx: &ServiceContext, args: &ListArgs) -> String {
        let mut out = Vec::new();
        run(store, ctx, args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_table_with_overdue_flag() {
        let clock = Arc::new(FixedClock::at_date(2025, 3, 10));
        let ctx = ServiceContext::new(
            Arc::clone(&clock),
            SequentialIdGenerator::default(),
            MemoryStorage::new(),
        );
        let mut store = TaskStore::open(&ctx, DEFAULT_KEY).unwrap();
        store
            .add(
                NewTask::titled("Pay rent")
                    .priority(Priority::High)
                    .due(NaiveDate::from_ymd_opt(2025, 3, 11).unwrap()),
            )
            .unwrap();
        store.add(NewTask::titled("Read book")).unwrap();
        clock.advance(Duration::days(3));

        let text = render(&store, &ctx, &list_args(StatusFilter::All, ""));
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].contains("task-2") && lines[2].contains("Read book"));
        assert!(lines[3].contains("Mar 11, 2025 (overdue)"));
        assert!(text.contains("2 of 2 task(s) shown."));
    }

    #[test]
    fn empty_messages_depend_on_filter() {
        let ctx = ServiceContext::new(
            FixedClock::at_date(2025, 3, 10),
            SequentialIdGenerator::default(),
            MemoryStorage::new(),
        );
        let store = TaskStore::open(&ctx, DEFAULT_KEY).unwrap();

        assert!(render(&store, &ctx, &list_args(StatusFilter::All, "")).contains("No tasks yet"));
        assert!(render(&store, &ctx, &list_args(StatusFilter::Pending, ""))
            .contains("All caught up"));
        assert!(render(&store, &ctx, &list_args(StatusFilter::Completed, ""))
            .contains("No completed tasks"));
        assert!(render(&store, &ctx, &list_args(StatusFilter::Pending, "zzz"))
            .contains("No tasks found"));
    }
}
