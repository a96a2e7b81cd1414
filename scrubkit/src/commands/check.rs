//! `scrubkit check`: report which document paths the active patterns match.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use std::io::{self, Write};

use scrubkit_core::CompositeMatcher;

use crate::cli::CheckCommand;
use crate::commands::build_config;
use crate::errors::CliError;
use crate::ui::output_format;

pub fn run_check(cmd: &CheckCommand) -> Result<()> {
    let config = build_config(&cmd.rules)?;
    let matcher = CompositeMatcher::new(config.active_patterns(), config.case_insensitive())
        .context("Failed to compile path patterns")?;
    if matcher.is_empty_pattern() {
        return Err(CliError::NoActivePatterns.into());
    }

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();

    let mut misses = 0;
    for path in &cmd.paths {
        let matched = matcher.matches_any(path);
        if !matched {
            misses += 1;
        }
        output_format::print_check_result(&mut writer, path, matched, supports_color)?;
    }
    writer.flush()?;

    if cmd.fail_on_miss && misses > 0 {
        return Err(CliError::PathsUnmatched(misses).into());
    }
    Ok(())
}
