//! Lint execution engine.
//!
//! Composes the rule evaluators over one text and one word list. Findings
//! are concatenated in a fixed order: static checks, then word-list
//! replacements, then sentence case.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::rules::{self, ReplacementSet};
use crate::word_list::WordList;

/// One unit of text submitted for linting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LintTarget {
    /// Opaque identifier the host uses to find the target again.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Raw text content. The only field the rules read.
    pub text: String,
}

/// Findings for one [`LintTarget`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LintResult {
    /// Display name of the target.
    pub name: String,
    /// Identifier of the target.
    pub id: String,
    /// Ordered findings. Empty when the text passed every check.
    pub findings: Vec<String>,
}

/// Lint a single text against a word list.
#[tracing::instrument(skip_all, fields(text_len = text.len(), terms = word_list.len()))]
pub fn lint(text: &str, word_list: &WordList) -> Vec<String> {
    lint_with(text, &ReplacementSet::compile(word_list))
}

/// Lint every target, producing one result per target in input order.
///
/// The word list is compiled once and shared across targets.
#[tracing::instrument(skip_all, fields(targets = targets.len(), terms = word_list.len()))]
pub fn lint_targets(targets: &[LintTarget], word_list: &WordList) -> Vec<LintResult> {
    let replacements = ReplacementSet::compile(word_list);
    targets
        .iter()
        .map(|target| {
            let findings = lint_with(&target.text, &replacements);
            tracing::debug!(id = %target.id, findings = findings.len(), "target linted");
            LintResult {
                name: target.name.clone(),
                id: target.id.clone(),
                findings,
            }
        })
        .collect()
}

fn lint_with(text: &str, replacements: &ReplacementSet) -> Vec<String> {
    let mut findings = rules::check_static(text);
    findings.extend(replacements.find(text));
    findings.extend(rules::detect_title_case(text));
    findings
}
