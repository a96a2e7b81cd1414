//! `scrubkit rules`: list the active path rules.

use anyhow::Result;
use std::io::{self, Write};

use crate::cli::RuleSelection;
use crate::commands::build_config;

pub fn run_rules(selection: &RuleSelection) -> Result<()> {
    let config = build_config(selection)?;
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    writeln!(writer, "ignore_case: {}", config.case_insensitive())?;
    for rule in config.rules.iter().filter(|r| r.enabled != Some(false)) {
        let tags = match &rule.tags {
            Some(tags) if !tags.is_empty() => tags.join(","),
            _ => "-".to_string(),
        };
        match &rule.description {
            Some(description) => writeln!(
                writer,
                "{}\t{}\t[{}]\t{}",
                rule.name, rule.pattern, tags, description
            )?,
            None => writeln!(writer, "{}\t{}\t[{}]", rule.name, rule.pattern, tags)?,
        }
    }
    writer.flush()?;
    Ok(())
}
