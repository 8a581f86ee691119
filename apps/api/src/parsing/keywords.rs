//! Keyword Extractor — case-folded alphabetic tokens minus stopwords and short words.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static RE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-zA-Z]+").unwrap());

/// Tokens of this length or shorter are never keywords.
const MIN_KEYWORD_LEN: usize = 3;

/// Splits lower-cased text into runs of ASCII letters, in order, no filtering.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    RE_WORD
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extracts keywords left to right, keeping duplicates.
pub fn extract_keywords(text: &str, stopwords: &HashSet<String>) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|w| w.len() >= MIN_KEYWORD_LEN && !stopwords.contains(w))
        .collect()
}
