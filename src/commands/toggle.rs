//! `taskflow toggle` command.

use std::io::Write;

use super::write_err;
use crate::store::TaskStore;

/// Execute the `toggle` command.
///
/// # Errors
///
/// Returns an error string if the task is unknown or saving fails.
pub fn run(store: &mut TaskStore<'_>, id: &str, out: &mut dyn Write) -> Result<(), String> {
    let toggled = store.toggle_complete(id).map_err(|e| e.to_string())?;
    let written = if toggled.just_completed {
        writeln!(out, "Completed {}: {}. Nice work!", toggled.task.id, toggled.task.title)
    } else {
        writeln!(out, "Reopened {}: {}", toggled.task.id, toggled.task.title)
    };
    written.map_err(write_err)
}
