//! This file defines the command-line interface (CLI) for the scrubkit application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "scrubkit",
    author = "Scrubkit Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Redact sensitive fields from JSON documents by path pattern",
    long_about = "Scrubkit walks a JSON document and replaces every value whose path (for example `user.addresses[0].street`) matches one of the configured regular expressions with an empty default of the same type: \"\" for strings, 0 for integers, false for booleans and null for everything else.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Suppress all informational and debug messages.
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd', global = true)]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `scrubkit` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Redacts a JSON file or stdin.
    Redact(RedactCommand),

    /// Tests document paths against the active patterns without redacting anything.
    Check(CheckCommand),

    /// Lists the active path rules.
    Rules(RuleSelection),
}

/// Options shared by every command that builds a rule set.
#[derive(Args, Debug, Clone, Default)]
pub struct RuleSelection {
    /// Path to a custom rule configuration file (YAML), merged over the defaults.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Additional path pattern (regex). May be repeated.
    #[arg(long = "pattern", short = 'p', value_name = "REGEX")]
    pub patterns: Vec<String>,

    /// Do not load the built-in default rules.
    #[arg(long = "no-defaults")]
    pub no_defaults: bool,

    /// Match patterns case-insensitively.
    #[arg(long = "ignore-case", short = 'I', conflicts_with = "case_sensitive")]
    pub ignore_case: bool,

    /// Match patterns case-sensitively, even if the config file sets `ignore_case`.
    #[arg(long = "case-sensitive")]
    pub case_sensitive: bool,

    /// Only use rules carrying one of these tags (comma-separated). CLI patterns are always kept.
    #[arg(long, short = 't', value_delimiter = ',', value_name = "TAGS")]
    pub tags: Vec<String>,

    /// Enable these opt-in rule names (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',')]
    pub enable: Vec<String>,

    /// Disable these rule names (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',')]
    pub disable: Vec<String>,
}

/// Arguments for the `redact` command.
#[derive(Parser, Debug)]
pub struct RedactCommand {
    /// Read input from a file instead of stdin.
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Write output to a file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub rules: RuleSelection,

    /// Pretty-print the redacted JSON.
    #[arg(long, conflicts_with = "line_buffered")]
    pub pretty: bool,

    /// Treat every input line as a separate JSON document (JSON Lines).
    #[arg(long = "line-buffered")]
    pub line_buffered: bool,

    /// Suppress the redaction summary on stderr.
    #[arg(long = "no-redaction-summary")]
    pub no_summary: bool,

    /// Export the redaction summary as JSON to this file.
    #[arg(long = "summary-json", value_name = "FILE")]
    pub summary_json: Option<PathBuf>,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// Document paths to test, e.g. `user.password` or `items[0]`.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    #[command(flatten)]
    pub rules: RuleSelection,

    /// Exit with a non-zero code if any path does not match.
    #[arg(long = "fail-on-miss")]
    pub fail_on_miss: bool,
}
