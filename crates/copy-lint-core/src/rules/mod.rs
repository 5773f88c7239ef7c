//! Rule evaluators.
//!
//! Three independent evaluators, each a pure function from text to an
//! ordered list of finding messages:
//!
//! - [`static_checks`] - leading capital letter and a fixed misspelling list
//! - [`replacements`] - terms from the caller's [`WordList`](crate::WordList)
//! - [`sentence_case`] - Title-Case words inside sentences
//!
//! [`crate::lint::lint`] composes them in that order.

pub mod replacements;
pub mod sentence_case;
pub mod static_checks;

pub use replacements::{ReplacementSet, find_replacements};
pub use sentence_case::{detect_title_case, is_title_case_shaped};
pub use static_checks::check_static;
