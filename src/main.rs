//! Binary entrypoint for the `taskflow` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Recording is handled in commands::dispatch via TASKFLOW_RECORD=<dir>.
    match taskflow::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
