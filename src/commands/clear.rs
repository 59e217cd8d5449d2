//! `taskflow clear-completed` command.

use std::io::Write;

use super::write_err;
use crate::store::TaskStore;

/// Execute the `clear-completed` command.
///
/// # Errors
///
/// Returns an error string if saving fails.
pub fn run(store: &mut TaskStore<'_>, out: &mut dyn Write) -> Result<(), String> {
    let removed = store.clear_completed().map_err(|e| e.to_string())?;
    let written = if removed == 0 {
        writeln!(out, "No completed tasks to clear.")
    } else {
        writeln!(out, "Removed {removed} completed task(s).")
    };
    written.map_err(write_err)
}
