use untrack_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible.
    let destination = logging::init_logging();
    tracing::debug!(?destination, "logging ready");

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("untrack error: {:#}", err);
        std::process::exit(1);
    }
}
