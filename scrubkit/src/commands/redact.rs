//! `scrubkit redact`: redact a JSON document (or a JSON Lines stream).

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, BufRead, Read, Write};

use scrubkit_core::{summarize, JsonRedactionEngine, RedactedField, RedactionService};

use crate::cli::RedactCommand;
use crate::commands::build_config;
use crate::errors::CliError;
use crate::ui::output_format;

pub fn run_redact(cmd: &RedactCommand, quiet: bool) -> Result<()> {
    info!("Starting redact operation.");

    let config = build_config(&cmd.rules)?;
    let engine = JsonRedactionEngine::from_config(&config)
        .context("Failed to compile path patterns")?;
    if engine.matcher().is_empty_pattern() && !quiet {
        with_stderr(|w, color| {
            output_format::print_warn_message(
                w,
                "No path patterns are active; input is passed through unchanged.",
                color,
            )
        })?;
    }

    let fields = if cmd.line_buffered {
        redact_lines(&engine, cmd)?
    } else {
        redact_document(&engine, cmd)?
    };

    let summary = summarize(&fields);
    if let Some(path) = &cmd.summary_json {
        let json = serde_json::to_string_pretty(&summary)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
        debug!("Summary written to {}", path.display());
    }

    if !quiet {
        if let Some(path) = &cmd.output {
            let message = format!("Redacted output written to {}", path.display());
            with_stderr(|w, color| output_format::print_info_message(w, &message, color))?;
        }
    }

    if !cmd.no_summary && !quiet {
        with_stderr(|w, color| output_format::print_summary(&summary, w, color))?;
    }

    info!("Redact operation completed.");
    Ok(())
}

fn redact_document(engine: &JsonRedactionEngine, cmd: &RedactCommand) -> Result<Vec<RedactedField>> {
    let input = read_input(cmd)?;
    let (document, fields) = engine
        .redact_str_with_report(&input)
        .context("Redaction failed")?;

    let rendered = if cmd.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };

    let mut writer = open_output(cmd)?;
    writeln!(writer, "{}", rendered)?;
    writer.flush()?;
    Ok(fields)
}

fn redact_lines(engine: &JsonRedactionEngine, cmd: &RedactCommand) -> Result<Vec<RedactedField>> {
    let reader: Box<dyn BufRead> = match &cmd.input_file {
        Some(path) => {
            let file = fs::File::open(path).map_err(|source| CliError::InputRead {
                path: path.clone(),
                source,
            })?;
            Box::new(io::BufReader::new(file))
        }
        None => Box::new(io::BufReader::new(io::stdin())),
    };

    let mut writer = open_output(cmd)?;
    let mut all_fields = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (document, fields) = engine
            .redact_str_with_report(&line)
            .with_context(|| format!("Line {} is not valid JSON", index + 1))?;
        writeln!(writer, "{}", serde_json::to_string(&document)?)?;
        all_fields.extend(fields.into_iter().map(|f| RedactedField {
            path: format!("line {}: {}", index + 1, f.path),
            kind: f.kind,
        }));
    }
    writer.flush()?;
    Ok(all_fields)
}

fn read_input(cmd: &RedactCommand) -> Result<String> {
    match &cmd.input_file {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            fs::read_to_string(path).map_err(|source| {
                CliError::InputRead {
                    path: path.clone(),
                    source,
                }
                .into()
            })
        }
        None => {
            info!("Reading input from stdin...");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

fn open_output(cmd: &RedactCommand) -> Result<Box<dyn Write>> {
    match &cmd.output {
        Some(path) => {
            info!("Writing redacted content to file: {}", path.display());
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(io::BufWriter::new(file)))
        }
        None => {
            info!("Writing redacted content to stdout.");
            Ok(Box::new(io::BufWriter::new(io::stdout().lock())))
        }
    }
}

fn with_stderr<F>(print: F) -> Result<()>
where
    F: FnOnce(&mut io::StderrLock<'static>, bool) -> io::Result<()>,
{
    let stderr = io::stderr();
    let supports_color = stderr.is_terminal();
    print(&mut stderr.lock(), supports_color)?;
    Ok(())
}
