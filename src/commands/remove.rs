//! `taskflow remove` command.

use std::io::Write;

use super::write_err;
use crate::store::TaskStore;

/// Execute the `remove` command. Removing an unknown ID is not an error.
///
/// # Errors
///
/// Returns an error string if saving fails.
pub fn run(store: &mut TaskStore<'_>, id: &str, out: &mut dyn Write) -> Result<(), String> {
    let removed = store.remove(id).map_err(|e| e.to_string())?;
    let written = if removed {
        writeln!(out, "Removed {id}")
    } else {
        writeln!(out, "No task {id}; nothing removed")
    };
    written.map_err(write_err)
}
