//! Slug derivation
//!
//! The base slug is a pure function of the title so callers can preview
//! it; the stored slug appends a random suffix so two posts with the same
//! title land in different files.

use lazy_static::lazy_static;
use regex::Regex;

/// Maximum length, in characters, of the title-derived part
const MAX_BASE_LEN: usize = 50;

/// Length of the random uniqueness suffix
const SUFFIX_LEN: usize = 8;

const SUFFIX_ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

lazy_static! {
    static ref DISALLOWED: Regex = Regex::new(r"[^\w\s-]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref HYPHEN_RUNS: Regex = Regex::new(r"-{2,}").unwrap();
}

/// Derive the base slug from a title: lowercase, strip everything outside
/// word characters/whitespace/hyphens, turn whitespace runs into single
/// hyphens, collapse hyphen runs, trim hyphens, cap at 50 characters.
///
/// Deterministic and pure; a title that reduces to nothing yields `""`.
pub fn derive_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = DISALLOWED.replace_all(&lowered, "");
    let hyphenated = WHITESPACE.replace_all(&stripped, "-");
    let collapsed = HYPHEN_RUNS.replace_all(&hyphenated, "-");
    let trimmed = collapsed.trim_matches('-');
    let capped: String = trimmed.chars().take(MAX_BASE_LEN).collect();
    // truncation can cut right after a hyphen
    capped.trim_matches('-').to_string()
}

/// A fresh slug candidate: the derived base plus `-` and an 8-character
/// random suffix. Titles with an empty base get the bare suffix so the
/// slug never starts with a hyphen.
pub fn unique_slug(title: &str) -> String {
    let base = derive_slug(title);
    let suffix = nanoid::format(nanoid::rngs::default, &SUFFIX_ALPHABET, SUFFIX_LEN);
    if base.is_empty() {
        suffix
    } else {
        format!("{}-{}", base, suffix)
    }
}
