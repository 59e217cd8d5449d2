//! `taskflow edit` command.

use std::io::Write;

use super::write_err;
use crate::cli::EditArgs;
use crate::store::TaskStore;
use crate::task::TaskPatch;

/// Builds the patch described by the flags.
#[must_use]
pub fn patch_from(args: &EditArgs) -> TaskPatch {
    TaskPatch {
        title: args.title.clone(),
        description: args.description.clone(),
        priority: args.priority,
        due_date: if args.clear_due { Some(None) } else { args.due.map(Some) },
    }
}

/// Execute the `edit` command.
///
/// # Errors
///
/// Returns an error string if nothing was asked to change, the task is
/// unknown, validation fails, or saving fails.
pub fn run(store: &mut TaskStore<'_>, args: &EditArgs, out: &mut dyn Write) -> Result<(), String> {
    let patch = patch_from(args);
    if patch.is_empty() {
        return Err(
            "Nothing to change: pass --title, --description, --priority, --due or --clear-due"
                .to_string(),
        );
    }
    let task = store.update(&args.id, patch).map_err(|e| e.to_string())?;
    writeln!(out, "Updated {} [{}] {}", task.id, task.priority, task.title).map_err(write_err)
}
