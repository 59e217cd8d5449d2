//! `taskflow add` command.

use std::io::Write;

use super::write_err;
use crate::cli::AddArgs;
use crate::store::TaskStore;
use crate::task::NewTask;

/// Execute the `add` command.
///
/// # Errors
///
/// Returns an error string if validation or saving fails.
pub fn run(store: &mut TaskStore<'_>, args: &AddArgs, out: &mut dyn Write) -> Result<(), String> {
    let new = NewTask {
        title: args.title.clone(),
        description: args.description.clone(),
        priority: args.priority,
        due_date: args.due,
    };
    let task = store.add(new).map_err(|e| e.to_string())?;
    writeln!(out, "Added {} [{}] {}", task.id, task.priority, task.title).map_err(write_err)
}
