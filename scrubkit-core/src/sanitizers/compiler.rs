//! compiler.rs - Compiles path patterns into a single composite matcher.
//!
//! Every pattern is validated on its own, wrapped in a non-capturing group and
//! joined by alternation, so one regex pass answers "does any pattern match".
//! Compiled matchers can be memoised in a caller-owned `MatcherCache`.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::cache::ExpiringCache;
use crate::config::MAX_PATTERN_LENGTH;
use crate::errors::ScrubError;

/// Upper bound on the compiled program and its lazy DFA.
const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Caches compiled matchers keyed by `matcher_cache_key`.
pub type MatcherCache = ExpiringCache<u64, Arc<CompositeMatcher>>;

/// One regex built from an OR of path patterns.
///
/// Matching runs in time linear in the input; the underlying engine never
/// backtracks, so a hostile path string cannot stall a match attempt.
#[derive(Debug, Clone)]
pub struct CompositeMatcher {
    patterns: Vec<String>,
    regex: Option<Regex>,
    ignore_case: bool,
}

impl CompositeMatcher {
    /// Compiles `patterns` into a single matcher.
    ///
    /// Empty and whitespace-only patterns are discarded and duplicates are
    /// dropped. If nothing remains, the matcher never matches and no regex is
    /// built. Any malformed pattern fails construction.
    pub fn new<I, S>(patterns: I, ignore_case: bool) -> Result<Self, ScrubError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = normalize_patterns(patterns);

        if patterns.is_empty() {
            debug!("No usable path patterns supplied; matcher will never match.");
            return Ok(Self {
                patterns,
                regex: None,
                ignore_case,
            });
        }

        let mut errors: Vec<ScrubError> = patterns
            .iter()
            .filter_map(|p| validate_pattern(p, ignore_case).err())
            .collect();

        match errors.len() {
            0 => {}
            1 => return Err(errors.remove(0)),
            _ => return Err(ScrubError::MultiplePatternErrors(errors)),
        }

        let combined = patterns
            .iter()
            .map(|p| format!("(?:{})", p))
            .collect::<Vec<_>>()
            .join("|");

        let regex = build_regex(&combined, ignore_case).map_err(|source| {
            ScrubError::PatternCompilation {
                pattern: combined.clone(),
                source,
            }
        })?;

        log::debug!(
            target: "scrubkit_core::sanitizer",
            "Composite matcher compiled from {} pattern(s).",
            patterns.len()
        );

        Ok(Self {
            patterns,
            regex: Some(regex),
            ignore_case,
        })
    }

    /// Returns true if at least one pattern matches somewhere in `input`.
    ///
    /// Patterns are not implicitly anchored; use `^`/`$` for whole-path matches.
    pub fn matches_any(&self, input: &str) -> bool {
        match &self.regex {
            Some(regex) => regex.is_match(input),
            None => false,
        }
    }

    /// True when no usable pattern was supplied.
    pub fn is_empty_pattern(&self) -> bool {
        self.regex.is_none()
    }

    /// The normalized, de-duplicated patterns in first-seen order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }
}

fn normalize_patterns<I, S>(patterns: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    patterns
        .into_iter()
        .map(|p| p.as_ref().to_string())
        .filter(|p| !p.trim().is_empty())
        .filter(|p| seen.insert(p.clone()))
        .collect()
}

fn validate_pattern(pattern: &str, ignore_case: bool) -> Result<(), ScrubError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(ScrubError::PatternLengthExceeded(
            pattern.to_string(),
            pattern.len(),
            MAX_PATTERN_LENGTH,
        ));
    }
    build_regex(pattern, ignore_case)
        .map(|_| ())
        .map_err(|source| ScrubError::PatternCompilation {
            pattern: pattern.to_string(),
            source,
        })
}

fn build_regex(pattern: &str, ignore_case: bool) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(ignore_case)
        .size_limit(REGEX_SIZE_LIMIT)
        .dfa_size_limit(REGEX_SIZE_LIMIT)
        .build()
}

/// Stable key for a pattern set: order-insensitive, duplicate-insensitive.
pub fn matcher_cache_key<S: AsRef<str>>(patterns: &[S], ignore_case: bool) -> u64 {
    let mut normalized = normalize_patterns(patterns.iter().map(|p| p.as_ref()));
    normalized.sort();

    let mut hasher = DefaultHasher::new();
    normalized.hash(&mut hasher);
    ignore_case.hash(&mut hasher);
    hasher.finish()
}

/// Gets a `CompositeMatcher` from `cache` or compiles and caches it.
///
/// Expired entries are swept before the lookup so an idle cache does not grow
/// without bound.
pub fn get_or_compile<S: AsRef<str>>(
    cache: &MatcherCache,
    patterns: &[S],
    ignore_case: bool,
) -> Result<Arc<CompositeMatcher>, ScrubError> {
    cache.remove_expired_items();

    let cache_key = matcher_cache_key(patterns, ignore_case);
    if let Some(matcher) = cache.get(&cache_key) {
        debug!("Serving compiled matcher from cache for key: {}", cache_key);
        return Ok(matcher);
    }

    debug!("Compiled matcher not found in cache. Compiling now.");
    let matcher = Arc::new(CompositeMatcher::new(patterns, ignore_case)?);
    cache.set(cache_key, Arc::clone(&matcher), None);

    debug!("Successfully compiled and cached matcher for key: {}", cache_key);
    Ok(matcher)
}
