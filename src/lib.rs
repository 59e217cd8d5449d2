//! Core library entry for the `taskflow` CLI.
//!
//! Tasks live in a [`store::TaskStore`] that mirrors every change to a
//! key-value [`ports::Storage`]. The store reaches the outside world only
//! through the ports bundled in a [`context::ServiceContext`], so the same
//! logic runs live, in memory, or against recorded cassettes.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod logging;
pub mod ports;
pub mod store;
pub mod task;

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// `--help` and `--version` print to stdout and succeed.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_executes_stats_on_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().to_str().unwrap();
        assert!(run(["taskflow", "--store", store, "stats"]).is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["taskflow", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn help_is_not_an_error() {
        assert!(run(["taskflow", "--help"]).is_ok());
    }
}
