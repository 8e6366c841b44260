//! Per-entry match strategies

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::error::{Result, WalkError};
use crate::ext::ExtensionSet;

/// Caller-supplied filename test.
pub type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Decides whether a filename is of interest.
///
/// Strategies must be deterministic and free of side effects; the walker calls
/// [`MatchStrategy::matches`] once per in-scope entry.
#[derive(Clone)]
pub enum MatchStrategy {
    /// Literal trailing-characters comparison against each extension
    Suffix(ExtensionSet),
    /// Regex that must match the whole filename
    Pattern(Regex),
    /// Arbitrary predicate over the filename
    Predicate(Predicate),
}

impl MatchStrategy {
    pub fn suffix(extensions: ExtensionSet) -> Self {
        MatchStrategy::Suffix(extensions)
    }

    /// Compile `pattern` with full-match semantics.
    ///
    /// `regex` searches for a match anywhere in the haystack, so the pattern is
    /// wrapped in `^(?s:...)$`: every alternative has to cover the whole name.
    pub fn pattern(pattern: &str) -> Result<Self> {
        let anchored = format!("^(?s:{})$", pattern);
        Regex::new(&anchored)
            .map(MatchStrategy::Pattern)
            .map_err(|source| WalkError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        MatchStrategy::Predicate(Arc::new(predicate))
    }

    /// Predicate comparing the rightmost-dot extension against `extensions`.
    pub fn extension_predicate(extensions: ExtensionSet) -> Self {
        Self::predicate(move |name| extensions.matches_ext(name))
    }

    pub fn matches(&self, filename: &str) -> bool {
        match self {
            MatchStrategy::Suffix(exts) => exts.matches_suffix(filename),
            MatchStrategy::Pattern(regex) => regex.is_match(filename),
            MatchStrategy::Predicate(predicate) => predicate(filename),
        }
    }
}

impl fmt::Debug for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStrategy::Suffix(exts) => f.debug_tuple("Suffix").field(exts).finish(),
            MatchStrategy::Pattern(regex) => {
                f.debug_tuple("Pattern").field(&regex.as_str()).finish()
            }
            MatchStrategy::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}
