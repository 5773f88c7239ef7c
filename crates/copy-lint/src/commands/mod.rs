//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use copy_lint_core::config::Config;

use crate::host::FileSettingsStore;

pub mod info;
pub mod lint;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod session;
pub mod urls;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Open the settings store the config points at.
pub fn settings_store(config: &Config) -> anyhow::Result<FileSettingsStore> {
    let path = config
        .settings_path()
        .context("no settings location: set settings_file or COPY_LINT_SETTINGS_FILE")?;
    Ok(FileSettingsStore::new(path))
}
