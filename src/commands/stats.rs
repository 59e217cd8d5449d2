//! `taskflow stats` command.

use std::io::Write;

use super::write_err;
use crate::store::TaskStore;

/// Execute the `stats` command.
///
/// # Errors
///
/// Returns an error string if output cannot be written.
pub fn run(store: &TaskStore<'_>, out: &mut dyn Write) -> Result<(), String> {
    let stats = store.stats();
    writeln!(out, "Total:     {}", stats.total).map_err(write_err)?;
    writeln!(out, "Completed: {}", stats.completed).map_err(write_err)?;
    writeln!(out, "Pending:   {}", stats.pending).map_err(write_err)?;
    writeln!(out, "Overdue:   {}", stats.overdue).map_err(write_err)
}
