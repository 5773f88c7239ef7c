//! Core library for copy-lint.
//!
//! A copy-linting engine: given a block of text and a word list of
//! disallowed terms mapped to suggested replacements, it produces an ordered
//! list of human-readable findings.
//!
//! # Modules
//!
//! - [`lint`] - The engine: composes the rules over one text or many targets
//! - [`rules`] - Individual rule evaluators
//! - [`text`] - Sentence and word segmentation
//! - [`word_list`] - The validated term → suggestion mapping
//! - [`host`] - Collaborator traits a host implements
//! - [`dispatch`] - Command dispatch table driving a host
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use copy_lint_core::{WordList, lint};
//!
//! let words: WordList = [("fine", "great")].into_iter().collect();
//! let findings = lint("This is Fine.", &words);
//!
//! assert_eq!(findings[0], r#"Found "fine": great"#);
//! assert_eq!(findings.len(), 2);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod lint;
pub mod rules;
pub mod text;
pub mod word_list;

pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use dispatch::{Dispatcher, Response};
pub use error::{
    ConfigError, ConfigResult, DispatchError, DispatchResult, StoreError, StoreResult,
    WordListError, WordListResult,
};
pub use host::{ConfigStore, DocumentAccess, Host, WordListSource};
pub use lint::{LintResult, LintTarget, lint, lint_targets};
pub use word_list::WordList;
