//! Files on disk as the host document.

use std::io::Read;

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use copy_lint_core::LintTarget;
use copy_lint_core::host::DocumentAccess;

use crate::commands::read_input_file;

/// Target id and name used for text read from stdin.
pub const STDIN_TARGET: &str = "stdin";

/// Each input file is one selected text target.
#[derive(Debug, Clone, Default)]
pub struct FileDocument {
    targets: Vec<LintTarget>,
    focused: Option<String>,
}

impl FileDocument {
    /// Read every path into a target, in argument order.
    ///
    /// The target id is the path as given and the name is its file name.
    /// `-` reads stdin once.
    pub fn load(paths: &[Utf8PathBuf], max_input_bytes: Option<usize>) -> anyhow::Result<Self> {
        let mut targets = Vec::with_capacity(paths.len());
        let mut stdin_used = false;

        for path in paths {
            if path.as_str() == "-" {
                if stdin_used {
                    bail!("stdin (-) can only be given once");
                }
                stdin_used = true;
                targets.push(LintTarget {
                    id: STDIN_TARGET.to_string(),
                    name: STDIN_TARGET.to_string(),
                    text: read_stdin(max_input_bytes)?,
                });
                continue;
            }

            targets.push(LintTarget {
                id: path.to_string(),
                name: display_name(path),
                text: read_input_file(path, max_input_bytes)?,
            });
        }

        tracing::debug!(targets = targets.len(), "document loaded");
        Ok(Self::from_targets(targets))
    }

    /// A document over already-built targets.
    pub const fn from_targets(targets: Vec<LintTarget>) -> Self {
        Self {
            targets,
            focused: None,
        }
    }

    /// Id of the most recently selected target.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }
}

impl DocumentAccess for FileDocument {
    fn selected_text_targets(&self) -> Vec<LintTarget> {
        self.targets.clone()
    }

    fn select_and_focus(&mut self, id: &str) -> bool {
        let found = self.targets.iter().any(|t| t.id == id);
        if found {
            self.focused = Some(id.to_string());
        }
        found
    }
}

fn display_name(path: &Utf8Path) -> String {
    path.file_name().unwrap_or(path.as_str()).to_string()
}

fn read_stdin(max_input_bytes: Option<usize>) -> anyhow::Result<String> {
    read_capped(std::io::stdin().lock(), max_input_bytes, "stdin")
}

/// Read all of `reader`, failing once more than `max_input_bytes` arrive.
fn read_capped(
    mut reader: impl Read,
    max_input_bytes: Option<usize>,
    label: &str,
) -> anyhow::Result<String> {
    let mut buf = String::new();
    match max_input_bytes {
        Some(max) => {
            reader
                .take((max as u64).saturating_add(1))
                .read_to_string(&mut buf)
                .with_context(|| format!("failed to read {label}"))?;
            if buf.len() > max {
                bail!("input too large: {label} exceeds {max} bytes");
            }
        }
        None => {
            reader
                .read_to_string(&mut buf)
                .with_context(|| format!("failed to read {label}"))?;
        }
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn loads_files_in_argument_order() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("headline.txt");
        let b = tmp.path().join("body.txt");
        std::fs::write(&a, "Headline copy.").unwrap();
        std::fs::write(&b, "body copy.").unwrap();

        let paths = vec![
            Utf8PathBuf::try_from(b).unwrap(),
            Utf8PathBuf::try_from(a).unwrap(),
        ];
        let doc = FileDocument::load(&paths, None).unwrap();
        let targets = doc.selected_text_targets();

        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].name, "body.txt");
        assert_eq!(targets[0].id, paths[0].as_str());
        assert_eq!(targets[1].text, "Headline copy.");
    }

    #[test]
    fn oversized_file_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("big.txt");
        std::fs::write(&path, "x".repeat(64)).unwrap();
        let paths = vec![Utf8PathBuf::try_from(path).unwrap()];

        let err = FileDocument::load(&paths, Some(16)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn capped_read_enforces_limit() {
        let input = "Short copy.".as_bytes();

        assert_eq!(read_capped(input, Some(11), "stdin").unwrap(), "Short copy.");
        let err = read_capped(input, Some(10), "stdin").unwrap_err();
        assert!(err.to_string().contains("stdin exceeds 10 bytes"));
    }

    #[test]
    fn capped_read_accepts_largest_limit() {
        let text = read_capped("Any copy.".as_bytes(), Some(usize::MAX), "stdin").unwrap();
        assert_eq!(text, "Any copy.");
    }

    #[test]
    fn select_and_focus_tracks_known_ids() {
        let mut doc = FileDocument::from_targets(vec![LintTarget {
            id: "a.txt".to_string(),
            name: "a.txt".to_string(),
            text: String::new(),
        }]);

        assert!(!doc.select_and_focus("missing"));
        assert_eq!(doc.focused(), None);
        assert!(doc.select_and_focus("a.txt"));
        assert_eq!(doc.focused(), Some("a.txt"));
    }
}
