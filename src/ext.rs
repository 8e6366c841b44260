//! Extension matching utilities
//!
//! Two flavours of "does this name have a target extension" live here:
//! literal suffix comparison ([`has_suffix`]) and rightmost-dot extraction
//! ([`filename_ext`]). They agree on ordinary names and differ on names that
//! are nothing but an extension, such as `.h`.

use std::fmt;

use crate::error::{Result, WalkError};

/// The default target set: C and C++ sources and headers.
pub const C_FAMILY: &[&str] = &[".h", ".c", ".cpp", ".hpp"];

/// Return the dotted extension of a filename.
///
/// The extension is everything from the last `.` onward. Returns `""` when the
/// name has no dot, or when the last dot is the first character (`.h`,
/// `.gitignore`).
///
/// ```
/// use rdi_bench::ext::filename_ext;
///
/// assert_eq!(filename_ext("main.cpp"), ".cpp");
/// assert_eq!(filename_ext("archive.tar.gz"), ".gz");
/// assert_eq!(filename_ext("Makefile"), "");
/// assert_eq!(filename_ext(".h"), "");
/// ```
pub fn filename_ext(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(0) | None => "",
        Some(idx) => &filename[idx..],
    }
}

/// Literal suffix test. Names shorter than the suffix simply do not match.
pub fn has_suffix(filename: &str, suffix: &str) -> bool {
    filename.len() >= suffix.len() && filename.as_bytes().ends_with(suffix.as_bytes())
}

/// Set of dotted extensions a run selects for.
///
/// Order is preserved; it determines the order of alternatives in the
/// generated pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    exts: Vec<String>,
}

impl ExtensionSet {
    /// Build a set from extensions with or without their leading dot.
    /// Empty entries and duplicates are dropped.
    ///
    /// Multi-part extensions such as `tar.gz` are rejected: the rightmost-dot
    /// extension of `x.tar.gz` is `.gz`, so no strategy set could agree on them.
    pub fn new<I, S>(exts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for ext in exts {
            let ext = ext.as_ref().trim();
            let bare = ext.trim_start_matches('.');
            if bare.is_empty() {
                continue;
            }
            if bare.contains('.') {
                return Err(WalkError::InvalidExtension {
                    ext: ext.to_string(),
                });
            }
            let dotted = format!(".{}", bare);
            if !normalized.contains(&dotted) {
                normalized.push(dotted);
            }
        }
        Ok(Self { exts: normalized })
    }

    /// `.h`, `.c`, `.cpp`, `.hpp`
    pub fn c_family() -> Self {
        Self {
            exts: C_FAMILY.iter().map(|ext| ext.to_string()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.exts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.exts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.exts.iter().map(String::as_str)
    }

    /// True if `filename` literally ends with one of the extensions.
    pub fn matches_suffix(&self, filename: &str) -> bool {
        self.exts.iter().any(|ext| has_suffix(filename, ext))
    }

    /// True if the rightmost-dot extension of `filename` is in the set.
    pub fn matches_ext(&self, filename: &str) -> bool {
        let ext = filename_ext(filename);
        !ext.is_empty() && self.exts.iter().any(|candidate| candidate == ext)
    }

    /// Alternation of `.*\.<ext>` per member, e.g. `.*\.h|.*\.c|.*\.cpp|.*\.hpp`.
    pub fn to_pattern(&self) -> String {
        self.exts
            .iter()
            .map(|ext| format!(".*{}", regex::escape(ext)))
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::c_family()
    }
}

impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.exts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_ext_boundaries() {
        assert_eq!(filename_ext("a.c"), ".c");
        assert_eq!(filename_ext("a.b.hpp"), ".hpp");
        assert_eq!(filename_ext("f"), "");
        assert_eq!(filename_ext(""), "");
        assert_eq!(filename_ext(".h"), "");
        assert_eq!(filename_ext("trailing."), ".");
    }

    #[test]
    fn test_has_suffix_short_names() {
        assert!(!has_suffix("a", ".cpp"));
        assert!(!has_suffix("", ".c"));
        assert!(!has_suffix("cp", ".cpp"));
        assert!(has_suffix(".c", ".c"));
        assert!(has_suffix("x.cpp", ".cpp"));
        // literal comparison: no dot, no match
        assert!(!has_suffix("xyzcpp", ".cpp"));
    }

    #[test]
    fn test_has_suffix_multibyte_names() {
        // byte comparison never splits a char boundary
        assert!(!has_suffix("é", ".c"));
        assert!(has_suffix("café.h", ".h"));
    }

    #[test]
    fn test_extension_set_normalizes() {
        let set = ExtensionSet::new(["rs", ".toml", "", ".", "rs"]).unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![".rs", ".toml"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_extension_set_rejects_inner_dots() {
        for ext in ["tar.gz", ".h.in", "a."] {
            match ExtensionSet::new(["c", ext]) {
                Err(WalkError::InvalidExtension { ext: bad }) => assert_eq!(bad, ext),
                other => panic!("{ext:?} accepted: {other:?}"),
            }
        }
    }

    #[test]
    fn test_c_family_pattern() {
        assert_eq!(
            ExtensionSet::c_family().to_pattern(),
            r".*\.h|.*\.c|.*\.cpp|.*\.hpp"
        );
    }

    #[test]
    fn test_set_matching_flavours_disagree_on_bare_extension() {
        let set = ExtensionSet::c_family();
        assert!(set.matches_suffix(".h"));
        assert!(!set.matches_ext(".h"));

        assert!(set.matches_suffix("b.h"));
        assert!(set.matches_ext("b.h"));
        assert!(!set.matches_suffix("e.txt"));
        assert!(!set.matches_ext("e.txt"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let set = ExtensionSet::c_family();
        assert!(!set.matches_suffix("MAIN.C"));
        assert!(!set.matches_ext("MAIN.C"));
    }

    #[test]
    fn test_display() {
        assert_eq!(ExtensionSet::c_family().to_string(), "{.h,.c,.cpp,.hpp}");
    }
}
