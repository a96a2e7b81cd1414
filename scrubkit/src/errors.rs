//! Errors raised by the CLI layer itself (as opposed to `scrubkit_core::ScrubError`).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0} path(s) did not match any pattern")]
    PathsUnmatched(usize),

    #[error("No path patterns are active; pass --pattern or drop --no-defaults")]
    NoActivePatterns,

    #[error("Failed to read input file {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
