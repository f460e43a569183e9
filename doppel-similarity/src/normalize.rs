//! Text canonicalization.
//!
//! Turns raw issue text into the comparable form every scorer signal
//! consumes: lowercased, markup-free, punctuation-free, whitespace
//! collapsed, domain noise words dropped, inflections folded onto one
//! canonical token. Idempotent.

use std::sync::LazyLock;

use regex::Regex;

static RE_MARKUP: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"<[^>]+>").ok());
static RE_NON_WORD: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[^\w\s]").ok());

/// Canonicalize raw issue text. Empty or whitespace-only input yields
/// the empty string.
pub fn normalize(raw: &str) -> String {
    let text = raw.to_lowercase();
    let text = match RE_MARKUP.as_ref() {
        Some(re) => re.replace_all(&text, "").into_owned(),
        None => text,
    };
    let text = match RE_NON_WORD.as_ref() {
        Some(re) => re.replace_all(&text, " ").into_owned(),
        None => text,
    };
    text.split_whitespace()
        .filter(|word| !is_noise_word(word))
        .map(canonical_token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Domain noise words that carry no signal in issue text.
fn is_noise_word(word: &str) -> bool {
    matches!(word, "error" | "issue" | "bug" | "problem" | "fix" | "resolve")
}

/// Fold inflected forms onto one canonical token.
fn canonical_token(word: &str) -> &str {
    match word {
        "navigator" | "navigate" | "navigating" => "navigation",
        "designer" | "designing" => "design",
        "manager" | "managing" => "manage",
        "configuration" | "configure" => "config",
        other => other,
    }
}
