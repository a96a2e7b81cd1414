// scrubkit/src/main.rs
//! Scrubkit entry point.
//!
//! Parses arguments, initializes logging and dispatches to a command.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use is_terminal::IsTerminal;
use log::{debug, info};

use scrubkit::cli::{Cli, Commands};
use scrubkit::commands::{check::run_check, redact::run_redact, rules::run_rules};
use scrubkit::logger;
use scrubkit::ui::output_format;

fn main() -> ExitCode {
    let args = Cli::parse();

    logger::init_logger(logger::level_from_flags(args.quiet, args.debug));
    info!("scrubkit started. Version: {}", env!("CARGO_PKG_VERSION"));

    let result = match &args.command {
        Commands::Redact(cmd) => run_redact(cmd, args.quiet),
        Commands::Check(cmd) => run_check(cmd),
        Commands::Rules(selection) => run_rules(selection),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("Command failed: {:?}", err);
            let stderr = io::stderr();
            let supports_color = stderr.is_terminal();
            // `{:#}` keeps the whole context chain on one line.
            let _ = output_format::print_error_message(
                &mut stderr.lock(),
                &format!("{:#}", err),
                supports_color,
            );
            ExitCode::FAILURE
        }
    }
}
