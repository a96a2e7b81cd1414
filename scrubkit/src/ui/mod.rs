//! Terminal output helpers for the scrubkit CLI.

pub mod output_format;
