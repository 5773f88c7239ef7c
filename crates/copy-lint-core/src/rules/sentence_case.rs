//! Sentence-case check: flags Title-Case words after a sentence's first word.

use crate::text;

/// Flag every Title-Case-shaped word at index ≥ 1 of each sentence.
///
/// Sentences with fewer than two words are skipped. Findings come out in
/// sentence order, then word order within each sentence.
#[tracing::instrument(skip_all, fields(text_len = input.len()))]
pub fn detect_title_case(input: &str) -> Vec<String> {
    let mut findings = Vec::new();

    for sentence in text::split_sentences(input) {
        let words = text::split_words(sentence);
        if words.len() < 2 {
            continue;
        }

        let trimmed = sentence.trim();
        findings.extend(
            words[1..]
                .iter()
                .filter(|w| is_title_case_shaped(w))
                .map(|w| {
                    format!("Use sentence case. \"{w}\" in sentence \"{trimmed}\" is in title case.")
                }),
        );
    }

    findings
}

/// First character equals its uppercase form and the remainder equals its
/// lowercase form.
///
/// Tokens without letters satisfy both conditions trivially, so `42` and
/// `--` count as Title-Case-shaped.
pub fn is_title_case_shaped(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let rest = chars.as_str();

    first.to_uppercase().eq(std::iter::once(first)) && rest.to_lowercase() == rest
}
