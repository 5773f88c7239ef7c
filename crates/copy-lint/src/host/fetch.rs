//! Word-list retrieval from URLs or local files.

use std::time::Duration;

use copy_lint_core::WordList;
use copy_lint_core::error::{WordListError, WordListResult};
use copy_lint_core::host::WordListSource;

/// Default HTTP timeout for word-list requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetches word lists over HTTP(S), or reads them from disk.
///
/// `http://` and `https://` locations go over the network. Anything else,
/// with an optional `file://` prefix, is a local path.
#[derive(Debug, Clone)]
pub struct WordListFetcher {
    timeout: Duration,
}

impl Default for WordListFetcher {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl WordListFetcher {
    /// Fetcher with the default timeout.
    pub fn new() -> Self {
        Self::default()
    }

    fn fetch_http(&self, location: &str) -> WordListResult<String> {
        let fetch_err = |e: reqwest::Error| WordListError::Fetch {
            location: location.to_string(),
            message: e.to_string(),
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(fetch_err)?;
        let response = client.get(location).send().map_err(fetch_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WordListError::Status {
                location: location.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().map_err(fetch_err)
    }

    fn read_local(location: &str) -> WordListResult<String> {
        let path = location.strip_prefix("file://").unwrap_or(location);
        std::fs::read_to_string(path).map_err(|source| WordListError::Read {
            location: location.to_string(),
            source,
        })
    }
}

impl WordListSource for WordListFetcher {
    #[tracing::instrument(skip(self))]
    fn fetch(&self, location: &str) -> WordListResult<WordList> {
        let body = if is_remote(location) {
            self.fetch_http(location)?
        } else {
            Self::read_local(location)?
        };
        let list = WordList::from_json(&body)?;
        tracing::debug!(entries = list.len(), "word list fetched");
        Ok(list)
    }
}

fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_local_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("words.json");
        std::fs::write(&path, r#"{"utilize": "use"}"#).unwrap();

        let list = WordListFetcher::new().fetch(path.to_str().unwrap()).unwrap();
        assert_eq!(list.get("utilize"), Some("use"));
    }

    #[test]
    fn reads_file_url() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("words.json");
        std::fs::write(&path, r#"{"a": "b"}"#).unwrap();

        let location = format!("file://{}", path.to_str().unwrap());
        let list = WordListFetcher::new().fetch(&location).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = WordListFetcher::new()
            .fetch("/definitely/not/here/words.json")
            .unwrap_err();
        assert!(matches!(err, WordListError::Read { .. }));
    }

    #[test]
    fn malformed_body_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("words.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let err = WordListFetcher::new().fetch(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, WordListError::NotAnObject { .. }));
    }

    #[test]
    fn remote_detection() {
        assert!(is_remote("https://raw.githubusercontent.com/org/repo/main/words.json"));
        assert!(is_remote("HTTP://example.com/w.json"));
        assert!(!is_remote("file:///tmp/w.json"));
        assert!(!is_remote("./words.json"));
    }
}
