//! Concrete host collaborators for the command line.
//!
//! [`CliHost`] bundles a [`FileDocument`], a [`FileSettingsStore`], and a
//! [`WordListFetcher`] so the core dispatch table can drive them.

pub mod document;
pub mod fetch;
pub mod settings;

use copy_lint_core::error::{StoreResult, WordListResult};
use copy_lint_core::host::{ConfigStore, DocumentAccess, GITHUB_URL_KEY, WordListSource};
use copy_lint_core::{LintTarget, WordList};

pub use document::FileDocument;
pub use fetch::WordListFetcher;
pub use settings::FileSettingsStore;

/// The CLI's implementation of [`copy_lint_core::Host`].
#[derive(Debug)]
pub struct CliHost<S = FileSettingsStore> {
    document: FileDocument,
    settings: S,
    fetcher: WordListFetcher,
    word_list_override: Option<String>,
}

impl<S: ConfigStore> CliHost<S> {
    /// Host over `document` and `settings` with the default fetcher.
    pub fn new(document: FileDocument, settings: S) -> Self {
        Self {
            document,
            settings,
            fetcher: WordListFetcher::new(),
            word_list_override: None,
        }
    }

    /// Use `location` instead of any saved URL when linting.
    ///
    /// Reads of the primary URL key see the override; writes still reach
    /// the underlying store.
    pub fn with_word_list_override(mut self, location: Option<String>) -> Self {
        self.word_list_override = location.filter(|l| !l.trim().is_empty());
        self
    }

    /// The document this host exposes.
    pub const fn document(&self) -> &FileDocument {
        &self.document
    }
}

impl<S> DocumentAccess for CliHost<S> {
    fn selected_text_targets(&self) -> Vec<LintTarget> {
        self.document.selected_text_targets()
    }

    fn select_and_focus(&mut self, id: &str) -> bool {
        self.document.select_and_focus(id)
    }
}

impl<S: ConfigStore> ConfigStore for CliHost<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        if key == GITHUB_URL_KEY
            && let Some(ref location) = self.word_list_override
        {
            return Ok(Some(location.clone()));
        }
        self.settings.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.settings.set(key, value)
    }
}

impl<S> WordListSource for CliHost<S> {
    fn fetch(&self, location: &str) -> WordListResult<WordList> {
        self.fetcher.fetch(location)
    }
}
