// scrubkit-core/src/engines/json_engine.rs
//! A `RedactionService` implementation for `serde_json::Value` documents.
//!
//! The walk is a single top-down pass. Object keys extend the path as
//! `parent.key` (just `key` at the root) and array elements as `parent[i]`.
//! A matching node is replaced by the default for its type and never descended
//! into; nothing is ever removed, so sibling array indices stay stable.
//! License: MIT OR APACHE 2.0

use std::sync::Arc;

use log::{debug, info};
use serde_json::{Map, Value};

use crate::config::RedactionConfig;
use crate::engine::RedactionService;
use crate::errors::ScrubError;
use crate::redaction_match::{log_redaction_action_debug, RedactedField, ValueKind};
use crate::sanitizers::compiler::{get_or_compile, CompositeMatcher, MatcherCache};

/// Returns the value a redacted node is replaced with.
///
/// Strings become `""`, integers `0` and booleans `false`. Floats, objects,
/// arrays and null become `null`.
pub fn default_for(value: &Value) -> Value {
    match value {
        Value::String(_) => Value::String(String::new()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Value::from(0),
        Value::Bool(_) => Value::Bool(false),
        _ => Value::Null,
    }
}

#[derive(Debug, Clone)]
pub struct JsonRedactionEngine {
    matcher: Arc<CompositeMatcher>,
}

impl JsonRedactionEngine {
    pub fn new<I, S>(patterns: I, ignore_case: bool) -> Result<Self, ScrubError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::with_matcher(Arc::new(CompositeMatcher::new(
            patterns,
            ignore_case,
        )?)))
    }

    pub fn with_matcher(matcher: Arc<CompositeMatcher>) -> Self {
        Self { matcher }
    }

    /// Builds an engine from the active rules of `config`.
    pub fn from_config(config: &RedactionConfig) -> Result<Self, ScrubError> {
        Self::new(config.active_patterns(), config.case_insensitive())
    }

    /// Builds an engine from `config`, reusing a matcher compiled earlier if `cache` holds one.
    pub fn from_config_cached(
        config: &RedactionConfig,
        cache: &MatcherCache,
    ) -> Result<Self, ScrubError> {
        let matcher = get_or_compile(cache, &config.active_patterns(), config.case_insensitive())?;
        Ok(Self::with_matcher(matcher))
    }

    /// Parses, redacts and pretty-prints `text`.
    pub fn redact_str_to_string_pretty(&self, text: &str) -> Result<String, ScrubError> {
        let document = self.redact_str(text)?;
        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Like `redact_str`, but also returns the fields that were replaced.
    pub fn redact_str_with_report(
        &self,
        text: &str,
    ) -> Result<(Value, Vec<RedactedField>), ScrubError> {
        let mut document: Value = serde_json::from_str(text)?;
        let fields = self.redact(&mut document);
        Ok((document, fields))
    }

    fn redact_node(&self, node: &mut Value, path: &str, report: &mut Vec<RedactedField>) {
        if node.is_null() {
            return;
        }

        if self.matcher.matches_any(path) {
            replace_with_default(node, path, report);
            return;
        }

        self.redact_children(node, path, report);
    }

    fn redact_children(&self, node: &mut Value, path: &str, report: &mut Vec<RedactedField>) {
        match node {
            Value::Object(map) => self.redact_object(map, path, report),
            Value::Array(items) => {
                for (index, item) in items.iter_mut().enumerate() {
                    let child_path = format!("{}[{}]", path, index);
                    self.redact_node(item, &child_path, report);
                }
            }
            _ => {}
        }
    }

    fn redact_object(
        &self,
        map: &mut Map<String, Value>,
        path: &str,
        report: &mut Vec<RedactedField>,
    ) {
        let mut keys_to_redact: Vec<(String, String)> = Vec::new();

        for (key, child) in map.iter_mut() {
            let child_path = if path.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", path, key)
            };

            if self.matcher.matches_any(&child_path) {
                keys_to_redact.push((key.clone(), child_path));
            } else if !child.is_null() {
                self.redact_children(child, &child_path, report);
            }
        }

        for (key, child_path) in keys_to_redact {
            if let Some(value) = map.get_mut(&key) {
                replace_with_default(value, &child_path, report);
            }
        }
    }
}

fn replace_with_default(node: &mut Value, path: &str, report: &mut Vec<RedactedField>) {
    if node.is_null() {
        return;
    }
    log_redaction_action_debug(module_path!(), path, node);
    report.push(RedactedField {
        path: path.to_string(),
        kind: ValueKind::of(node),
    });
    *node = default_for(node);
}

impl RedactionService for JsonRedactionEngine {
    type Document = Value;

    fn redact(&self, document: &mut Value) -> Vec<RedactedField> {
        let mut report = Vec::new();
        if self.matcher.is_empty_pattern() {
            debug!("Empty pattern set; document left untouched.");
            return report;
        }

        self.redact_node(document, "", &mut report);
        info!("Redacted {} field(s).", report.len());
        report
    }

    fn redact_str(&self, text: &str) -> Result<Value, ScrubError> {
        let mut document: Value = serde_json::from_str(text)?;
        self.redact(&mut document);
        Ok(document)
    }

    fn redact_to_string(&self, document: &mut Value) -> String {
        self.redact(document);
        document.to_string()
    }

    fn redact_str_to_string(&self, text: &str) -> Result<String, ScrubError> {
        Ok(self.redact_str(text)?.to_string())
    }

    fn matcher(&self) -> &CompositeMatcher {
        &self.matcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn engine(patterns: &[&str]) -> JsonRedactionEngine {
        JsonRedactionEngine::new(patterns.iter().copied(), false).unwrap()
    }

    #[test]
    fn test_default_for_each_kind() {
        assert_eq!(default_for(&json!("x")), json!(""));
        assert_eq!(default_for(&json!(-7)), json!(0));
        assert_eq!(default_for(&json!(u64::MAX)), json!(0));
        assert_eq!(default_for(&json!(true)), json!(false));
        assert_eq!(default_for(&json!(1.5)), Value::Null);
        assert_eq!(default_for(&json!({"a": 1})), Value::Null);
        assert_eq!(default_for(&json!([1, 2])), Value::Null);
        assert_eq!(default_for(&Value::Null), Value::Null);
    }

    #[test]
    fn test_array_elements_matched_by_index() {
        let engine = engine(&[r"^tags\[1\]$"]);
        let mut doc = json!({"tags": ["keep", "drop", "keep"]});
        let fields = engine.redact(&mut doc);
        assert_eq!(doc, json!({"tags": ["keep", "", "keep"]}));
        assert_eq!(fields, vec![RedactedField { path: "tags[1]".into(), kind: ValueKind::String }]);
    }

    #[test]
    fn test_nested_array_paths() {
        let engine = engine(&[r"^users\[\d+\]\.password$"]);
        let mut doc = json!({"users": [
            {"name": "a", "password": "p1"},
            {"name": "b", "password": "p2"}
        ]});
        engine.redact(&mut doc);
        assert_eq!(doc["users"][0]["password"], json!(""));
        assert_eq!(doc["users"][1]["password"], json!(""));
        assert_eq!(doc["users"][1]["name"], json!("b"));
    }

    #[test]
    fn test_root_path_match_zeroes_whole_document() {
        let engine = engine(&["^$"]);
        let mut doc = json!({"a": 1});
        engine.redact(&mut doc);
        assert_eq!(doc, Value::Null);
    }

    #[test]
    fn test_matched_object_is_not_descended() {
        let engine = engine(&["^user$", r"^user\.name$"]);
        let mut doc = json!({"user": {"name": "bob"}});
        let fields = engine.redact(&mut doc);
        assert_eq!(doc, json!({"user": null}));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].kind, ValueKind::Object);
    }

    #[test]
    fn test_key_order_is_preserved() {
        let engine = engine(&["^b$"]);
        let out = engine
            .redact_str_to_string(r#"{"c":1,"b":"x","a":true}"#)
            .unwrap();
        assert_eq!(out, r#"{"c":1,"b":"","a":true}"#);
    }

    #[test]
    fn test_scalar_root_is_accepted() {
        let engine = engine(&["anything"]);
        assert_eq!(engine.redact_str("\"plain\"").unwrap(), json!("plain"));
    }
}
