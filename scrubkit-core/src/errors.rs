//! errors.rs - Custom error types for the scrubkit-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `scrubkit-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream `match` statements.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScrubError {
    #[error("Failed to compile path pattern '{pattern}': {source}")]
    PatternCompilation {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Path pattern '{0}': length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Failed to compile {} path pattern(s):\n{}", .0.len(), join_errors(.0))]
    MultiplePatternErrors(Vec<ScrubError>),

    #[error("Input is not a valid JSON document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    #[error("Unable to remove item from cache: key not present.")]
    CacheKeyNotFound,
}

fn join_errors(errors: &[ScrubError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_errors_display_lists_each() {
        let err = ScrubError::MultiplePatternErrors(vec![
            ScrubError::PatternLengthExceeded("a".to_string(), 600, 500),
            ScrubError::CacheKeyNotFound,
        ]);
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to compile 2 path pattern(s):"));
        assert!(msg.contains("length (600) exceeds maximum allowed (500)"));
        assert!(msg.contains("key not present"));
    }
}
