// scrubkit-core/src/redaction_match.rs
//! Records of redacted document fields and PII-safe debug logging helpers.

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

lazy_static! {
    /// A static boolean that is initialized once to determine if PII is allowed in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("SCRUBKIT_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// Structural kind of a JSON value, captured before it was redacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    String,
    Integer,
    Float,
    Bool,
    Null,
    Object,
    Array,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => ValueKind::String,
            Value::Number(n) if n.is_i64() || n.is_u64() => ValueKind::Integer,
            Value::Number(_) => ValueKind::Float,
            Value::Bool(_) => ValueKind::Bool,
            Value::Null => ValueKind::Null,
            Value::Object(_) => ValueKind::Object,
            Value::Array(_) => ValueKind::Array,
        }
    }
}

/// A single field that was replaced by its type default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactedField {
    /// Dotted/bracketed location, e.g. `users[1].password`.
    pub path: String,
    pub kind: ValueKind,
}

/// Aggregate view of one redaction pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionSummary {
    pub total: usize,
    /// Count of redacted fields per original value kind.
    pub by_kind: BTreeMap<ValueKind, usize>,
    pub fields: Vec<RedactedField>,
}

/// Builds a `RedactionSummary` from the fields reported by a redaction pass.
pub fn summarize(fields: &[RedactedField]) -> RedactionSummary {
    let mut by_kind = BTreeMap::new();
    for field in fields {
        *by_kind.entry(field.kind).or_insert(0) += 1;
    }
    RedactionSummary {
        total: fields.len(),
        by_kind,
        fields: fields.to_vec(),
    }
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_redaction_action_debug(module_path: &str, path: &str, original: &Value) {
    debug!(
        "{} Redaction action: Path='{}', Kind={:?}, Original='{}'",
        module_path,
        path,
        ValueKind::of(original),
        get_loggable_content(&original.to_string())
    );
}
