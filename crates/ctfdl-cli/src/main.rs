use ctfdl_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse_args();

    // The log file is best effort; never refuse to run because of it.
    if let Err(err) = logging::init_logging(cli.verbose) {
        logging::init_logging_stderr(cli.verbose);
        tracing::warn!("file logging unavailable ({:#}), logging to stderr", err);
    }

    if let Err(err) = cli.run() {
        eprintln!("ctfdl error: {:#}", err);
        std::process::exit(1);
    }
}
