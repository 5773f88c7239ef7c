//! File-backed settings store.

use std::collections::BTreeMap;

use camino::{Utf8Path, Utf8PathBuf};
use copy_lint_core::error::StoreResult;
use copy_lint_core::host::ConfigStore;

/// A flat JSON object of string settings persisted to one file.
///
/// A missing file reads as an empty store. Every `set` rewrites the file.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: Utf8PathBuf,
}

impl FileSettingsStore {
    /// Store backed by `path`. Nothing is read until first use.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn read_all(&self) -> StoreResult<BTreeMap<String, String>> {
        match std::fs::read_to_string(self.path.as_std_path()) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl ConfigStore for FileSettingsStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    #[tracing::instrument(skip(self, value), fields(path = %self.path))]
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let mut settings = self.read_all()?;
        settings.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent()
            && !parent.as_str().is_empty()
        {
            std::fs::create_dir_all(parent.as_std_path())?;
        }
        std::fs::write(
            self.path.as_std_path(),
            serde_json::to_string_pretty(&settings)?,
        )?;
        tracing::debug!("setting saved");
        Ok(())
    }
}
