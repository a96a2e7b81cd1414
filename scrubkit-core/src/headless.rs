// scrubkit-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for using the JSON engine in headless mode (non-UI).
//! Provides helper functions for a full, one-shot redaction of JSON text.

use anyhow::{Context, Result};

use crate::config::RedactionConfig;
use crate::engine::RedactionService;
use crate::engines::json_engine::JsonRedactionEngine;
use crate::sanitizers::compiler::MatcherCache;

/// Output layout for headless redaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    #[default]
    Compact,
    Pretty,
}

/// Fully redacts a JSON string with the active rules of `config`.
///
/// # Arguments
///
/// * `config` - The merged RedactionConfig (defaults + optional user overrides).
/// * `content` - The JSON text to be redacted.
/// * `style` - Compact or pretty-printed output.
pub fn headless_redact_string(
    config: &RedactionConfig,
    content: &str,
    style: OutputStyle,
) -> Result<String> {
    let engine = JsonRedactionEngine::from_config(config)
        .context("Failed to compile path rules for JsonRedactionEngine")?;
    render(&engine, content, style)
}

/// Same as `headless_redact_string`, but reuses matchers compiled earlier.
pub fn headless_redact_with_cache(
    cache: &MatcherCache,
    config: &RedactionConfig,
    content: &str,
    style: OutputStyle,
) -> Result<String> {
    let engine = JsonRedactionEngine::from_config_cached(config, cache)
        .context("Failed to compile path rules for JsonRedactionEngine")?;
    render(&engine, content, style)
}

fn render(engine: &JsonRedactionEngine, content: &str, style: OutputStyle) -> Result<String> {
    let output = match style {
        OutputStyle::Compact => engine.redact_str_to_string(content)?,
        OutputStyle::Pretty => engine.redact_str_to_string_pretty(content)?,
    };
    Ok(output)
}
