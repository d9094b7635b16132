// crates/featuredict-core/src/text.rs

//! String canonicalization used for every index key and every query.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Convert a string into its canonical form for indexing and comparison.
///
/// This performs:
/// 1) Unicode NFD decomposition, dropping combining marks (`ä` -> `a`)
/// 2) Lowercasing
///
/// Letters of non-Latin scripts are kept as they are; only diacritics are
/// removed, so `"бацкхаус"` stays `"бацкхаус"`.
///
/// # Examples
///
/// ```rust
/// use featuredict_core::text::canonicalize;
///
/// assert_eq!(canonicalize("Bäckerei"), "backerei");
/// assert_eq!(canonicalize("Café"), "cafe");
/// ```
pub fn canonicalize(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Compares two strings for equality after canonicalization.
///
/// ```rust
/// use featuredict_core::text::equals_canonical;
///
/// assert!(equals_canonical("Bäckerei", "backerei"));
/// assert!(!equals_canonical("Bakery", "Bäckerei"));
/// ```
pub fn equals_canonical(a: &str, b: &str) -> bool {
    canonicalize(a) == canonicalize(b)
}

/// Split an already canonical name into its individual words.
///
/// Parentheses are removed first so `"atm (cash machine)"` yields
/// `["atm", "cash", "machine"]`.
pub fn name_words(canonical_name: &str) -> Vec<String> {
    canonical_name
        .replace(['(', ')'], "")
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}
