//! Collaborator interfaces supplied by the host.
//!
//! The engine never touches documents, storage, or the network. A host
//! implements these traits and the [`dispatch`](crate::dispatch) layer
//! drives them.

use crate::error::{StoreResult, WordListResult};
use crate::lint::LintTarget;
use crate::word_list::WordList;

/// Storage key for the GitHub-hosted word-list URL.
pub const GITHUB_URL_KEY: &str = "githubUrl";

/// Storage key for the GitLab-hosted word-list URL.
pub const GITLAB_URL_KEY: &str = "gitlabUrl";

/// Read access to the host document's current selection.
pub trait DocumentAccess {
    /// Text targets in the current selection, in selection order.
    fn selected_text_targets(&self) -> Vec<LintTarget>;

    /// Select and bring into view the target with `id`.
    ///
    /// Returns `false` when no such target exists.
    fn select_and_focus(&mut self, id: &str) -> bool;
}

/// Persistent string key-value settings.
pub trait ConfigStore {
    /// Read a value. Missing keys are `Ok(None)`.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write a value.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// Retrieves and validates a word list from a location.
pub trait WordListSource {
    /// Fetch the word list at `location`.
    fn fetch(&self, location: &str) -> WordListResult<WordList>;
}

/// Everything the dispatch layer needs from a host.
pub trait Host: DocumentAccess + ConfigStore + WordListSource {}

impl<T: DocumentAccess + ConfigStore + WordListSource> Host for T {}
