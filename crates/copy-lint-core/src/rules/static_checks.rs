//! Fixed checks that do not depend on the caller's word list.

use std::sync::LazyLock;

use regex::Regex;

/// Message emitted when text does not open with an uppercase letter.
pub const CAPITALIZATION_MESSAGE: &str = "Text should start with a capital letter.";

/// Message emitted when a known misspelling appears as a whole word.
pub const MISSPELLING_MESSAGE: &str = "Spelling error: common misspelling.";

/// Common misspellings, matched case-sensitively as whole words.
pub const MISSPELLINGS: &[&str] = &[
    "teh",
    "recieve",
    "seperate",
    "definately",
    "occured",
    "untill",
    "accomodate",
    "wich",
];

/// Alternation over [`MISSPELLINGS`] with word boundaries on both sides.
static MISSPELLING_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = MISSPELLINGS
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b")).expect("valid regex")
});

/// Run the fixed checks. Each contributes at most one finding.
///
/// Capitalization comes first, then misspelling. Empty text yields nothing.
/// Only `A` through `Z` count as a capital first letter.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn check_static(text: &str) -> Vec<String> {
    let mut findings = Vec::new();

    if let Some(first) = text.chars().next()
        && !first.is_ascii_uppercase()
    {
        findings.push(CAPITALIZATION_MESSAGE.to_string());
    }

    if MISSPELLING_RE.is_match(text) {
        findings.push(MISSPELLING_MESSAGE.to_string());
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalized_clean_text_passes() {
        assert!(check_static("The quick brown fox.").is_empty());
    }

    #[test]
    fn lowercase_start_flagged_once() {
        assert_eq!(check_static("hello world."), vec![CAPITALIZATION_MESSAGE]);
    }

    #[test]
    fn digit_or_symbol_start_is_flagged() {
        assert_eq!(check_static("3 apples"), vec![CAPITALIZATION_MESSAGE]);
        assert_eq!(check_static("\"Quoted\" start"), vec![CAPITALIZATION_MESSAGE]);
        assert_eq!(check_static(" Leading space"), vec![CAPITALIZATION_MESSAGE]);
    }

    #[test]
    fn non_ascii_uppercase_start_is_flagged() {
        assert_eq!(check_static("École is fine."), vec![CAPITALIZATION_MESSAGE]);
        assert_eq!(check_static("Élan"), vec![CAPITALIZATION_MESSAGE]);
    }

    #[test]
    fn empty_text_has_no_findings() {
        assert!(check_static("").is_empty());
    }

    #[test]
    fn misspelling_flagged_once_even_if_repeated() {
        assert_eq!(
            check_static("We recieve teh mail and recieve it again."),
            vec![MISSPELLING_MESSAGE]
        );
    }

    #[test]
    fn misspelling_must_be_whole_word() {
        assert!(check_static("Tehran and thesis are fine.").is_empty());
        assert!(check_static("Recievers").is_empty());
    }

    #[test]
    fn misspelling_is_case_sensitive() {
        assert!(check_static("Teh title.").is_empty());
    }

    #[test]
    fn both_checks_in_order() {
        assert_eq!(
            check_static("teh end"),
            vec![CAPITALIZATION_MESSAGE, MISSPELLING_MESSAGE]
        );
    }
}
