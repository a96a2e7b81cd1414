// scrubkit-core/src/lib.rs
//! # Scrubkit Core Library
//!
//! `scrubkit-core` provides path-based redaction for JSON documents and a small
//! thread-safe cache with time-based expiration.
//!
//! A set of user-supplied path patterns is compiled into one `CompositeMatcher`.
//! The `JsonRedactionEngine` walks a parsed document once, building paths such as
//! `user.addresses[0].street`, and replaces every value whose path matches with
//! the default for its type (`""`, `0`, `false` or `null`).
//!
//! ## Modules
//!
//! * `config`: Defines `PathRule`s and `RedactionConfig`, with YAML loading and merging.
//! * `sanitizers`: Compiles path patterns into a `CompositeMatcher`.
//! * `engine`: Defines the `RedactionService` trait.
//! * `engines`: Concrete implementations of `RedactionService`.
//! * `redaction_match`: Records of redacted fields and redaction summaries.
//! * `cache`: `ExpiringCache`, a concurrent key/value store with lazy expiry.
//! * `headless`: One-shot convenience wrappers.
//! * `errors`: The `ScrubError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use scrubkit_core::{JsonRedactionEngine, RedactionService};
//!
//! fn main() -> Result<(), scrubkit_core::ScrubError> {
//!     let engine = JsonRedactionEngine::new(["address.street"], false)?;
//!     let input = r#"{"name":"John","address":{"street":"123 Main St","city":"Chicago"}}"#;
//!
//!     let output = engine.redact_str_to_string(input)?;
//!     assert_eq!(output, r#"{"name":"John","address":{"street":"","city":"Chicago"}}"#);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Library operations return `ScrubError`. Configuration loading returns
//! `anyhow::Result` with file context attached.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod cache;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod redaction_match;
pub mod sanitizers;

/// Re-exports the public configuration types and functions for managing path rules.
pub use config::{
    merge_rules, validate_rules, CacheConfig, PathRule, RedactionConfig, MAX_PATTERN_LENGTH,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::ScrubError;

pub use engine::RedactionService;
pub use engines::json_engine::{default_for, JsonRedactionEngine};

pub use cache::{CacheEntry, Clock, ExpiringCache, MonotonicClock, DEFAULT_EXPIRATION};

pub use redaction_match::{summarize, RedactedField, RedactionSummary, ValueKind};

pub use headless::{headless_redact_string, headless_redact_with_cache, OutputStyle};

pub use sanitizers::compiler::{get_or_compile, matcher_cache_key, CompositeMatcher, MatcherCache};
