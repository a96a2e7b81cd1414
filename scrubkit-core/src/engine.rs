// scrubkit-core/src/engine.rs
//! Defines the core `RedactionService` trait.
//!
//! A redaction service owns a compiled `CompositeMatcher` and knows how to walk
//! one document model, replacing values whose path matches. This module defines
//! the contract every document engine adheres to.
//!
//! License: MIT OR APACHE 2.0

use crate::errors::ScrubError;
use crate::redaction_match::RedactedField;
use crate::sanitizers::compiler::CompositeMatcher;

/// A trait that defines the core functionality of a path redaction engine.
pub trait RedactionService: Send + Sync {
    /// In-memory document model the engine walks.
    type Document;

    /// Redacts `document` in place and reports every field that was replaced.
    fn redact(&self, document: &mut Self::Document) -> Vec<RedactedField>;

    /// Parses `text` and returns the redacted document.
    ///
    /// # Errors
    /// `ScrubError::InvalidDocument` if `text` cannot be parsed.
    fn redact_str(&self, text: &str) -> Result<Self::Document, ScrubError>;

    /// Redacts `document` in place and serializes the result.
    fn redact_to_string(&self, document: &mut Self::Document) -> String;

    /// Parses, redacts and serializes `text` in one call.
    fn redact_str_to_string(&self, text: &str) -> Result<String, ScrubError>;

    /// Returns the matcher used to decide which paths are redacted.
    fn matcher(&self) -> &CompositeMatcher;
}
