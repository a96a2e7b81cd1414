//! Configuration management for `scrubkit-core`.
//!
//! This module defines the data structures for path redaction rules and cache
//! settings. It handles deserialization of YAML configurations and provides
//! utilities for loading, merging, filtering, and validating them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::time::Duration;

/// Maximum allowed length for a path pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Default cache expiration in seconds (15 minutes).
pub const DEFAULT_EXPIRATION_SECS: u64 = 15 * 60;

/// A single named path pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct PathRule {
    /// Unique identifier for the rule (e.g., "password").
    pub name: String,
    /// Human-readable description of what the rule targets.
    pub description: Option<String>,
    /// Regex matched against dotted/bracketed document paths such as `user.emails[0]`.
    pub pattern: String,
    /// Explicit override for enabling/disabling the rule.
    pub enabled: Option<bool>,
    /// If true, the rule is inactive unless explicitly enabled.
    pub opt_in: bool,
    pub tags: Option<Vec<String>>,
}

impl Default for PathRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            pattern: String::new(),
            enabled: None,
            opt_in: false,
            tags: None,
        }
    }
}

impl PathRule {
    /// Convenience constructor for a rule with just a name and a pattern.
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            ..Self::default()
        }
    }
}

/// Settings for `ExpiringCache` instances created from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    pub default_expiration_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_expiration_secs: DEFAULT_EXPIRATION_SECS,
        }
    }
}

impl CacheConfig {
    pub fn default_expiration(&self) -> Duration {
        Duration::from_secs(self.default_expiration_secs)
    }
}

/// Top-level configuration structure.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct RedactionConfig {
    /// Match path patterns case-insensitively. `None` leaves the choice to the
    /// layer underneath when configs are merged, and means case-sensitive otherwise.
    pub ignore_case: Option<bool>,
    /// Named path patterns.
    pub rules: Vec<PathRule>,
    pub cache: CacheConfig,
}

impl RedactionConfig {
    /// Builds a config from bare patterns, naming each rule after its position.
    pub fn from_patterns<I, S>(patterns: I, ignore_case: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rules = patterns
            .into_iter()
            .enumerate()
            .map(|(i, p)| PathRule::new(format!("pattern_{}", i + 1), p))
            .collect();
        Self {
            ignore_case: Some(ignore_case),
            rules,
            cache: CacheConfig::default(),
        }
    }

    /// Effective case mode for compiling the active patterns.
    pub fn case_insensitive(&self) -> bool {
        self.ignore_case.unwrap_or(false)
    }

    /// Loads redaction rules from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom rules from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: RedactionConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_rules(&config.rules)?;
        info!("Loaded {} rules from file {}.", config.rules.len(), path.display());

        Ok(config)
    }

    /// Loads default path rules from the embedded configuration.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_paths.yaml");
        let config: RedactionConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default rules")?;

        debug!("Loaded {} default rules.", config.rules.len());
        Ok(config)
    }

    /// Filters active rules based on enable/disable lists provided via CLI.
    pub fn set_active_rules(&mut self, enable_rules: &[String], disable_rules: &[String]) {
        let enable_set: HashSet<&str> = enable_rules.iter().map(String::as_str).collect();
        let disable_set: HashSet<&str> = disable_rules.iter().map(String::as_str).collect();

        debug!("Initial rules count before filtering: {}", self.rules.len());

        let all_rule_names: HashSet<&str> = self.rules.iter().map(|r| r.name.as_str()).collect();

        for rule_name in enable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `enable_rules` list does not exist.", rule_name);
        }

        for rule_name in disable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `disable_rules` list does not exist.", rule_name);
        }

        self.rules.retain(|rule| {
            let name = rule.name.as_str();
            !disable_set.contains(name)
                && (!rule.opt_in || rule.enabled == Some(true) || enable_set.contains(name))
        });

        for rule in self.rules.iter_mut() {
            if enable_set.contains(rule.name.as_str()) {
                rule.enabled = Some(true);
            }
        }

        debug!("Final active rules count after filtering: {}", self.rules.len());
    }

    /// Keeps only rules carrying at least one of `tags`.
    pub fn retain_tagged(&mut self, tags: &[String]) {
        let wanted: HashSet<&str> = tags.iter().map(String::as_str).collect();
        self.rules.retain(|rule| {
            rule.tags
                .iter()
                .flatten()
                .any(|tag| wanted.contains(tag.as_str()))
        });
        debug!("{} rule(s) left after tag filter {:?}.", self.rules.len(), tags);
    }

    /// Patterns of every active rule, in rule order.
    ///
    /// A rule is active unless `enabled` is `Some(false)`; opt-in rules need
    /// `enabled: Some(true)`.
    pub fn active_patterns(&self) -> Vec<String> {
        self.rules
            .iter()
            .filter(|rule| match rule.enabled {
                Some(enabled) => enabled,
                None => !rule.opt_in,
            })
            .map(|rule| rule.pattern.clone())
            .collect()
    }
}

/// Merges user-defined rules and settings with defaults.
///
/// User rules replace default rules with the same name and keep the default's
/// position. An explicit user `ignore_case` wins, otherwise the default's is
/// kept; the user's cache settings win.
pub fn merge_rules(
    default_config: RedactionConfig,
    user_config: Option<RedactionConfig>,
) -> RedactionConfig {
    debug!(
        "merge_rules called. Initial default rules count: {}",
        default_config.rules.len()
    );

    let Some(user_cfg) = user_config else {
        return default_config;
    };

    debug!("User config provided. Merging {} user rules.", user_cfg.rules.len());

    let mut order: Vec<String> = Vec::new();
    let mut final_rules_map: HashMap<String, PathRule> = HashMap::new();
    for rule in default_config.rules.into_iter().chain(user_cfg.rules) {
        if !final_rules_map.contains_key(&rule.name) {
            order.push(rule.name.clone());
        }
        final_rules_map.insert(rule.name.clone(), rule);
    }

    let final_rules: Vec<PathRule> = order
        .iter()
        .filter_map(|name| final_rules_map.remove(name))
        .collect();
    debug!("Final total rules after merge: {}", final_rules.len());

    RedactionConfig {
        ignore_case: user_cfg.ignore_case.or(default_config.ignore_case),
        rules: final_rules,
        cache: user_cfg.cache,
    }
}

/// Validates rule integrity (names, pattern presence, length, regex syntax).
pub fn validate_rules(rules: &[PathRule]) -> Result<()> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.as_str()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }

        if rule.pattern.trim().is_empty() {
            errors.push(format!("Rule '{}' has an empty `pattern` field.", rule.name));
            continue;
        }

        if rule.pattern.len() > MAX_PATTERN_LENGTH {
            errors.push(format!(
                "Rule '{}': pattern length ({}) exceeds maximum allowed ({}).",
                rule.name,
                rule.pattern.len(),
                MAX_PATTERN_LENGTH
            ));
            continue;
        }

        if let Err(e) = Regex::new(&rule.pattern) {
            errors.push(format!("Rule '{}' has an invalid regex pattern: {}", rule.name, e));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("Rule validation failed:\n{}", errors.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_are_valid() {
        let config = RedactionConfig::load_default_rules().unwrap();
        assert!(!config.rules.is_empty());
        validate_rules(&config.rules).unwrap();
    }

    #[test]
    fn test_active_patterns_skip_disabled() {
        let mut disabled = PathRule::new("b", "b$");
        disabled.enabled = Some(false);
        let config = RedactionConfig {
            rules: vec![PathRule::new("a", "a$"), disabled],
            ..Default::default()
        };
        assert_eq!(config.active_patterns(), vec!["a$".to_string()]);
    }

    #[test]
    fn test_validate_rejects_empty_and_duplicates() {
        let rules = vec![
            PathRule::new("dup", "x"),
            PathRule::new("dup", "y"),
            PathRule::new("blank", "  "),
        ];
        let err = validate_rules(&rules).unwrap_err().to_string();
        assert!(err.contains("Duplicate rule name found: 'dup'."));
        assert!(err.contains("Rule 'blank' has an empty `pattern` field."));
    }

    #[test]
    fn test_opt_in_rules_need_explicit_enable() {
        let mut opt_in = PathRule::new("email", "email$");
        opt_in.opt_in = true;
        let mut config = RedactionConfig {
            rules: vec![PathRule::new("a", "a$"), opt_in],
            ..Default::default()
        };
        assert_eq!(config.active_patterns(), vec!["a$".to_string()]);

        config.set_active_rules(&["email".to_string()], &[]);
        assert_eq!(
            config.active_patterns(),
            vec!["a$".to_string(), "email$".to_string()]
        );
    }

    #[test]
    fn test_opt_in_rule_enabled_in_config_survives_selection() {
        let mut opt_in = PathRule::new("email", "email$");
        opt_in.opt_in = true;
        opt_in.enabled = Some(true);
        let mut config = RedactionConfig {
            rules: vec![opt_in],
            ..Default::default()
        };
        assert_eq!(config.active_patterns(), vec!["email$".to_string()]);

        config.set_active_rules(&[], &[]);
        assert_eq!(config.active_patterns(), vec!["email$".to_string()]);

        config.set_active_rules(&[], &["email".to_string()]);
        assert!(config.active_patterns().is_empty());
    }

    #[test]
    fn test_retain_tagged_drops_untagged_and_other_tags() {
        let mut pii = PathRule::new("ssn", "ssn$");
        pii.tags = Some(vec!["pii".into(), "gov".into()]);
        let mut pci = PathRule::new("cvv", "cvv$");
        pci.tags = Some(vec!["pci".into()]);
        let mut config = RedactionConfig {
            rules: vec![pii, PathRule::new("plain", "x$"), pci],
            ..Default::default()
        };

        config.retain_tagged(&["gov".to_string()]);

        let names: Vec<&str> = config.rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["ssn"]);
    }

    #[test]
    fn test_user_ignore_case_overrides_default() {
        let defaults = RedactionConfig {
            ignore_case: Some(true),
            ..Default::default()
        };
        let user = RedactionConfig {
            ignore_case: Some(false),
            ..Default::default()
        };
        assert!(!merge_rules(defaults.clone(), Some(user)).case_insensitive());

        let silent_user = RedactionConfig::default();
        assert!(merge_rules(defaults, Some(silent_user)).case_insensitive());
    }

    #[test]
    fn test_cache_config_default_is_fifteen_minutes() {
        assert_eq!(
            CacheConfig::default().default_expiration(),
            Duration::from_secs(900)
        );
    }
}
