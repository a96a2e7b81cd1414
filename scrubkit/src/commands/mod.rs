//! Command implementations for the scrubkit CLI.

pub mod check;
pub mod redact;
pub mod rules;

use anyhow::{Context, Result};
use log::debug;
use scrubkit_core::{merge_rules, PathRule, RedactionConfig};

use crate::cli::RuleSelection;

/// Builds the effective configuration for a command.
///
/// Order: built-in defaults (unless `--no-defaults`), then `--config`, then
/// `--tag` filtering, then `--pattern` entries, then `--enable`/`--disable` filtering.
pub fn build_config(selection: &RuleSelection) -> Result<RedactionConfig> {
    let base = if selection.no_defaults {
        RedactionConfig::default()
    } else {
        RedactionConfig::load_default_rules()?
    };

    let user = selection
        .config
        .as_ref()
        .map(|path| {
            RedactionConfig::load_from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))
        })
        .transpose()?;

    let mut config = merge_rules(base, user);

    if !selection.tags.is_empty() {
        config.retain_tagged(&selection.tags);
    }

    for (i, pattern) in selection.patterns.iter().enumerate() {
        config
            .rules
            .push(PathRule::new(format!("cli_pattern_{}", i + 1), pattern.clone()));
    }
    if selection.ignore_case {
        config.ignore_case = Some(true);
    } else if selection.case_sensitive {
        config.ignore_case = Some(false);
    }

    config.set_active_rules(&selection.enable, &selection.disable);
    debug!(
        "Effective configuration has {} active pattern(s).",
        config.active_patterns().len()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_patterns_are_appended() -> Result<()> {
        let selection = RuleSelection {
            patterns: vec!["^a$".into(), "^b$".into()],
            no_defaults: true,
            ..Default::default()
        };
        let config = build_config(&selection)?;
        assert_eq!(config.active_patterns(), vec!["^a$".to_string(), "^b$".to_string()]);
        assert!(!config.case_insensitive());
        Ok(())
    }

    #[test]
    fn test_defaults_loaded_unless_disabled() -> Result<()> {
        let config = build_config(&RuleSelection::default())?;
        assert!(config.rules.iter().any(|r| r.name == "password"));
        assert!(!config.case_insensitive());
        Ok(())
    }

    #[test]
    fn test_case_flags_set_explicit_mode() -> Result<()> {
        let insensitive = build_config(&RuleSelection {
            ignore_case: true,
            ..Default::default()
        })?;
        assert_eq!(insensitive.ignore_case, Some(true));

        let sensitive = build_config(&RuleSelection {
            case_sensitive: true,
            ..Default::default()
        })?;
        assert_eq!(sensitive.ignore_case, Some(false));
        Ok(())
    }

    #[test]
    fn test_tag_filter_keeps_cli_patterns() -> Result<()> {
        let config = build_config(&RuleSelection {
            tags: vec!["pci".into()],
            patterns: vec!["^extra$".into()],
            ..Default::default()
        })?;
        let names: Vec<&str> = config.rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["card_number", "cli_pattern_1"]);
        Ok(())
    }
}
