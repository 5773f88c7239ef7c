//! Word-list replacement check.
//!
//! Each term in the caller's [`WordList`] is compiled into a case-insensitive
//! literal pattern anchored on word boundaries. A term that occurs at least
//! once yields exactly one finding naming the term and its suggestion.

use regex::{Regex, RegexBuilder};

use crate::word_list::WordList;

/// Upper bound on the compiled size of a single term's pattern.
const TERM_SIZE_LIMIT: usize = 1 << 20;

/// A word list compiled for matching.
///
/// Compile once with [`ReplacementSet::compile`] and reuse it across many
/// texts. Terms that cannot be compiled are skipped with a warning.
#[derive(Debug, Clone)]
pub struct ReplacementSet {
    compiled: Vec<CompiledTerm>,
}

#[derive(Debug, Clone)]
struct CompiledTerm {
    term: String,
    suggestion: String,
    pattern: Regex,
}

impl ReplacementSet {
    /// Compile every usable entry of `word_list`, preserving its order.
    pub fn compile(word_list: &WordList) -> Self {
        let compiled = word_list
            .iter()
            .filter_map(|(term, suggestion)| {
                let pattern = term_pattern(term)?;
                Some(CompiledTerm {
                    term: term.to_string(),
                    suggestion: suggestion.to_string(),
                    pattern,
                })
            })
            .collect();
        Self { compiled }
    }

    /// Number of terms that compiled successfully.
    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    /// Returns `true` if no terms compiled.
    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }

    /// One finding per term found in `text`, in word-list order.
    #[tracing::instrument(skip_all, fields(text_len = text.len(), terms = self.compiled.len()))]
    pub fn find(&self, text: &str) -> Vec<String> {
        self.compiled
            .iter()
            .filter(|c| c.pattern.is_match(text))
            .map(|c| format!("Found \"{}\": {}", c.term, c.suggestion))
            .collect()
    }
}

/// One-shot form of [`ReplacementSet::find`].
pub fn find_replacements(text: &str, word_list: &WordList) -> Vec<String> {
    ReplacementSet::compile(word_list).find(text)
}

/// Build the boundary-anchored pattern for one term.
///
/// Metacharacters are escaped so the term matches literally. A `\b` anchor
/// is only added on a side whose edge character is a word character; a term
/// like `c++` would otherwise never match before a space.
fn term_pattern(term: &str) -> Option<Regex> {
    if term.trim().is_empty() {
        tracing::warn!(term, "skipping empty word-list term");
        return None;
    }

    let leading = term.chars().next().is_some_and(is_word_char);
    let trailing = term.chars().next_back().is_some_and(is_word_char);
    let pattern = format!(
        "{}{}{}",
        if leading { r"\b" } else { "" },
        regex::escape(term),
        if trailing { r"\b" } else { "" },
    );

    match RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .size_limit(TERM_SIZE_LIMIT)
        .build()
    {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(term, error = %e, "skipping word-list term that cannot be compiled");
            None
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
