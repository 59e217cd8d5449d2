//! Command dispatch and handlers.
//!
//! Each handler takes an open store plus an output sink and maps store
//! errors to strings at this boundary.

pub mod add;
pub mod clear;
pub mod edit;
pub mod list;
pub mod remove;
pub mod show;
pub mod stats;
pub mod toggle;

use std::io::Write;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::logging;
use crate::store::TaskStore;

/// Dispatch a parsed command line.
///
/// When `TASKFLOW_RECORD` is set to a directory, every port interaction is
/// recorded to per-port cassette files in a new subdirectory of it.
///
/// # Errors
///
/// Returns an error string if the store cannot be opened or the command fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = Config::from_env().with_store_override(cli.store.clone());

    if let Some(dir) = &config.log_dir {
        if let Err(e) = logging::init_logging(&config.log_level, dir) {
            eprintln!("Warning: logging disabled: {e}");
        }
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let Some(record_root) = &config.record_dir else {
        let ctx = ServiceContext::live(&config.store_dir);
        return dispatch_with_context(&cli.command, &ctx, &config.key, &mut out);
    };

    let (ctx, session) = ServiceContext::recording_at(record_root, &config.store_dir)?;
    let result = dispatch_with_context(&cli.command, &ctx, &config.key, &mut out);

    // Finish recording even when the command failed; the adapters must
    // release their recorders first.
    drop(ctx);
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());

    result
}

/// Opens the store under `key` and runs `command` against it.
///
/// # Errors
///
/// Returns an error string if the store cannot be opened or the command fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    key: &str,
    out: &mut dyn Write,
) -> Result<(), String> {
    let mut store = TaskStore::open(ctx, key).map_err(|e| e.to_string())?;

    match command {
        Command::Add(args) => add::run(&mut store, args, out),
        Command::Edit(args) => edit::run(&mut store, args, out),
        Command::Remove { id } => remove::run(&mut store, id, out),
        Command::Toggle { id } => toggle::run(&mut store, id, out),
        Command::ClearCompleted => clear::run(&mut store, out),
        Command::List(args) => list::run(&store, ctx, args, out),
        Command::Show { id } => show::run(&store, ctx, id, out),
        Command::Stats => stats::run(&store, out),
    }
}

pub(crate) fn write_err(e: std::io::Error) -> String {
    format!("Failed to write output: {e}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixed::{FixedClock, SequentialIdGenerator};
    use crate::adapters::memory::MemoryStorage;
    use crate::store::DEFAULT_KEY;
    use clap::Parser;

    fn run_line(ctx: &ServiceContext, args: &[&str]) -> Result<String, String> {
        let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;
        let mut out = Vec::new();
        dispatch_with_context(&cli.command, ctx, DEFAULT_KEY, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn commands_share_state_through_storage() {
        let ctx = ServiceContext::new(
            FixedClock::at_date(2025, 3, 10),
            SequentialIdGenerator::default(),
            MemoryStorage::new(),
        );

        let added = run_line(&ctx, &["taskflow", "add", "Buy milk", "-p", "low"]).unwrap();
        assert!(added.contains("task-1"));

        run_line(&ctx, &["taskflow", "toggle", "task-1"]).unwrap();
        let listed = run_line(&ctx, &["taskflow", "list", "--status", "completed"]).unwrap();
        assert!(listed.contains("Buy milk"));

        let cleared = run_line(&ctx, &["taskflow", "clear-completed"]).unwrap();
        assert!(cleared.contains("Removed 1"));
        let listed = run_line(&ctx, &["taskflow", "list"]).unwrap();
        assert!(listed.contains("No tasks yet"));
    }

    #[test]
    fn store_errors_become_messages() {
        let ctx = ServiceContext::new(
            FixedClock::at_date(2025, 3, 10),
            SequentialIdGenerator::default(),
            MemoryStorage::new(),
        );
        let err = run_line(&ctx, &["taskflow", "toggle", "ghost"]).unwrap_err();
        assert_eq!(err, "task not found: ghost");

        let err = run_line(&ctx, &["taskflow", "add", "late", "--due", "2025-03-09"]).unwrap_err();
        assert!(err.contains("cannot be in the past"));
    }
}
