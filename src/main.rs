//! `logwrap` - emit records through the leveled logging facade

use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

use clap::Parser;

use logwrap::cli::args::Cli;
use logwrap::cli::commands;
use logwrap::error::ExitCode;
use logwrap::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose);
    }

    // A FATAL record unwinds out of the logger; the default panic hook has
    // already printed its payload by the time it lands here.
    let result = match catch_unwind(AssertUnwindSafe(|| commands::dispatch(cli))) {
        Ok(result) => result,
        Err(payload) => match commands::panic_exit_code(payload.as_ref()) {
            Some(code) => std::process::exit(code),
            None => resume_unwind(payload),
        },
    };

    match result {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
