//! Host command dispatch.
//!
//! Messages are JSON objects tagged by a `"type"` field; the remaining
//! fields form the payload. Each tag maps to one handler in a
//! [`Dispatcher`] table. A handler decodes its own typed payload and
//! returns a typed [`Response`].
//!
//! # Built-in commands
//!
//! | tag            | payload                      | response                 |
//! |----------------|------------------------------|--------------------------|
//! | `save-urls`    | [`SaveUrls`]                 | `notify`                 |
//! | `get-urls`     | none                         | `load-urls`              |
//! | `lint`         | none                         | `lint-results` or `notify` |
//! | `select-layer` | [`SelectLayer`]              | `selected`               |

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, DispatchResult};
use crate::host::{
    ConfigStore, DocumentAccess, GITHUB_URL_KEY, GITLAB_URL_KEY, Host, WordListSource,
};
use crate::lint::{self, LintResult};
use crate::word_list::WordList;

/// Tag for storing word-list URLs.
pub const SAVE_URLS: &str = "save-urls";
/// Tag for reading word-list URLs back.
pub const GET_URLS: &str = "get-urls";
/// Tag for linting the current selection.
pub const LINT: &str = "lint";
/// Tag for selecting a target by id.
pub const SELECT_LAYER: &str = "select-layer";

/// Notification after URLs are stored.
pub const URLS_SAVED: &str = "URLs saved!";
/// Notification when neither URL is configured.
pub const NO_WORD_LIST_URL: &str = "No word list URL found. Enter and save a URL.";
/// Notification when the word list could not be fetched or is empty.
pub const WORD_LIST_UNAVAILABLE: &str = "Failed to fetch or load the word list. Check the URL.";
/// Notification when nothing is selected.
pub const NO_SELECTION: &str = "Select text layers and check copy again.";

/// Payload for `save-urls`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SaveUrls {
    /// GitHub-hosted word-list URL.
    #[serde(rename = "githubUrl", default)]
    pub github_url: Option<String>,
    /// GitLab-hosted word-list URL.
    #[serde(rename = "gitlabUrl", default)]
    pub gitlab_url: Option<String>,
}

/// Payload for `select-layer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SelectLayer {
    /// Identifier of the target to select.
    pub id: String,
}

/// Payload for commands that carry no fields.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct NoPayload {}

/// A typed reply to a host command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Response {
    /// A short user-facing message. Also used for conditions that stop a
    /// command before the engine runs.
    Notify {
        /// Message text.
        message: String,
    },
    /// Stored word-list URLs.
    LoadUrls {
        /// GitHub-hosted word-list URL.
        #[serde(rename = "githubUrl")]
        github_url: Option<String>,
        /// GitLab-hosted word-list URL.
        #[serde(rename = "gitlabUrl")]
        gitlab_url: Option<String>,
    },
    /// One result per selected target.
    LintResults {
        /// Results in selection order.
        results: Vec<LintResult>,
    },
    /// Outcome of a selection request.
    Selected {
        /// Requested identifier.
        id: String,
        /// Whether a target with that id exists.
        found: bool,
    },
}

impl Response {
    /// Build a [`Response::Notify`].
    pub fn notify(message: impl Into<String>) -> Self {
        Self::Notify {
            message: message.into(),
        }
    }

    /// The message text if this is a notification.
    pub fn notification(&self) -> Option<&str> {
        match self {
            Self::Notify { message } => Some(message),
            _ => None,
        }
    }
}

type Handler<H> = Box<dyn Fn(&mut H, serde_json::Value) -> DispatchResult<Response> + Send + Sync>;

/// Table of command handlers keyed by message tag.
pub struct Dispatcher<H> {
    handlers: IndexMap<&'static str, Handler<H>>,
}

impl<H: Host + 'static> Default for Dispatcher<H> {
    fn default() -> Self {
        Self::with_builtin_commands()
    }
}

impl<H: Host + 'static> Dispatcher<H> {
    /// An empty table.
    pub fn new() -> Self {
        Self {
            handlers: IndexMap::new(),
        }
    }

    /// A table with `save-urls`, `get-urls`, `lint`, and `select-layer`.
    pub fn with_builtin_commands() -> Self {
        let mut dispatcher = Self::new();
        dispatcher
            .register(SAVE_URLS, save_urls::<H>)
            .register(GET_URLS, get_urls::<H>)
            .register(LINT, lint_selection::<H>)
            .register(SELECT_LAYER, select_layer::<H>);
        dispatcher
    }

    /// Register `handler` for `tag`, replacing any existing handler.
    ///
    /// The whole message object, `type` field included, is decoded into `P`;
    /// unknown fields are ignored by serde's default behavior.
    pub fn register<P, F>(&mut self, tag: &'static str, handler: F) -> &mut Self
    where
        P: DeserializeOwned + 'static,
        F: Fn(&mut H, P) -> DispatchResult<Response> + Send + Sync + 'static,
    {
        self.handlers.insert(
            tag,
            Box::new(move |host: &mut H, message: serde_json::Value| {
                let payload = serde_json::from_value(message).map_err(|source| {
                    DispatchError::Payload {
                        tag: tag.to_string(),
                        source,
                    }
                })?;
                handler(host, payload)
            }),
        );
        self
    }

    /// Registered tags in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    /// Route a decoded message to its handler.
    #[tracing::instrument(skip_all)]
    pub fn dispatch(&self, host: &mut H, message: serde_json::Value) -> DispatchResult<Response> {
        let tag = message
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or(DispatchError::MissingTag)?
            .to_string();
        let handler = self
            .handlers
            .get(tag.as_str())
            .ok_or_else(|| DispatchError::UnknownCommand(tag.clone()))?;

        tracing::debug!(command = %tag, "dispatching");
        handler(host, message)
    }

    /// Decode a JSON message and route it.
    pub fn dispatch_str(&self, host: &mut H, message: &str) -> DispatchResult<Response> {
        let value: serde_json::Value = serde_json::from_str(message)?;
        self.dispatch(host, value)
    }
}

fn save_urls<H: Host>(host: &mut H, payload: SaveUrls) -> DispatchResult<Response> {
    host.set(GITHUB_URL_KEY, payload.github_url.as_deref().unwrap_or_default())?;
    host.set(GITLAB_URL_KEY, payload.gitlab_url.as_deref().unwrap_or_default())?;
    Ok(Response::notify(URLS_SAVED))
}

fn get_urls<H: Host>(host: &mut H, _: NoPayload) -> DispatchResult<Response> {
    Ok(Response::LoadUrls {
        github_url: stored_url(host, GITHUB_URL_KEY)?,
        gitlab_url: stored_url(host, GITLAB_URL_KEY)?,
    })
}

fn lint_selection<H: Host>(host: &mut H, _: NoPayload) -> DispatchResult<Response> {
    let location = match stored_url(host, GITHUB_URL_KEY)? {
        Some(url) => url,
        None => match stored_url(host, GITLAB_URL_KEY)? {
            Some(url) => url,
            None => return Ok(Response::notify(NO_WORD_LIST_URL)),
        },
    };

    let word_list = host.fetch(&location).unwrap_or_else(|e| {
        tracing::warn!(location = %location, error = %e, "word list unavailable");
        WordList::new()
    });
    if word_list.is_empty() {
        return Ok(Response::notify(WORD_LIST_UNAVAILABLE));
    }

    let targets = host.selected_text_targets();
    if targets.is_empty() {
        return Ok(Response::notify(NO_SELECTION));
    }

    let results = lint::lint_targets(&targets, &word_list);
    tracing::debug!(
        targets = results.len(),
        findings = results.iter().map(|r| r.findings.len()).sum::<usize>(),
        "lint complete"
    );
    Ok(Response::LintResults { results })
}

fn select_layer<H: Host>(host: &mut H, payload: SelectLayer) -> DispatchResult<Response> {
    let found = host.select_and_focus(&payload.id);
    Ok(Response::Selected {
        id: payload.id,
        found,
    })
}

/// A stored URL, with empty strings treated as unset.
fn stored_url<H: Host>(host: &H, key: &str) -> DispatchResult<Option<String>> {
    Ok(host.get(key)?.filter(|url| !url.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StoreResult, WordListError, WordListResult};
    use crate::host::{ConfigStore, DocumentAccess, WordListSource};
    use crate::lint::LintTarget;
    use serde_json::json;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryHost {
        settings: HashMap<String, String>,
        targets: Vec<LintTarget>,
        lists: HashMap<String, String>,
        focused: Option<String>,
    }

    impl DocumentAccess for MemoryHost {
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

    impl ConfigStore for MemoryHost {
        fn get(&self, key: &str) -> StoreResult<Option<String>> {
            Ok(self.settings.get(key).cloned())
        }

        fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
            self.settings.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    impl WordListSource for MemoryHost {
        fn fetch(&self, location: &str) -> WordListResult<WordList> {
            let body = self.lists.get(location).ok_or_else(|| WordListError::Status {
                location: location.to_string(),
                status: 404,
            })?;
            WordList::from_json(body)
        }
    }

    fn target(id: &str, text: &str) -> LintTarget {
        LintTarget {
            id: id.to_string(),
            name: format!("Layer {id}"),
            text: text.to_string(),
        }
    }

    fn ready_host() -> MemoryHost {
        let mut host = MemoryHost::default();
        host.settings
            .insert(GITHUB_URL_KEY.to_string(), "https://example.test/words.json".to_string());
        host.lists.insert(
            "https://example.test/words.json".to_string(),
            r#"{"fine": "great"}"#.to_string(),
        );
        host.targets = vec![target("1", "This is Fine."), target("2", "All clear.")];
        host
    }

    #[test]
    fn builtin_commands_registered_in_order() {
        let dispatcher = Dispatcher::<MemoryHost>::with_builtin_commands();
        let tags: Vec<&str> = dispatcher.commands().collect();
        assert_eq!(tags, vec![SAVE_URLS, GET_URLS, LINT, SELECT_LAYER]);
    }

    #[test]
    fn save_then_get_urls() {
        let dispatcher = Dispatcher::with_builtin_commands();
        let mut host = MemoryHost::default();

        let saved = dispatcher
            .dispatch(
                &mut host,
                json!({"type": "save-urls", "githubUrl": "https://gh.test/w.json"}),
            )
            .unwrap();
        assert_eq!(saved.notification(), Some(URLS_SAVED));

        let loaded = dispatcher
            .dispatch(&mut host, json!({"type": "get-urls"}))
            .unwrap();
        assert_eq!(
            loaded,
            Response::LoadUrls {
                github_url: Some("https://gh.test/w.json".to_string()),
                gitlab_url: None,
            }
        );
    }

    #[test]
    fn lint_without_url_notifies() {
        let dispatcher = Dispatcher::with_builtin_commands();
        let mut host = MemoryHost::default();
        host.targets = vec![target("1", "text")];

        let response = dispatcher.dispatch(&mut host, json!({"type": "lint"})).unwrap();
        assert_eq!(response.notification(), Some(NO_WORD_LIST_URL));
    }

    #[test]
    fn lint_falls_back_to_gitlab_url() {
        let dispatcher = Dispatcher::with_builtin_commands();
        let mut host = ready_host();
        host.settings.insert(GITHUB_URL_KEY.to_string(), String::new());
        host.settings
            .insert(GITLAB_URL_KEY.to_string(), "https://example.test/words.json".to_string());

        let response = dispatcher.dispatch(&mut host, json!({"type": "lint"})).unwrap();
        assert!(matches!(response, Response::LintResults { .. }));
    }

    #[test]
    fn lint_with_unreachable_list_notifies() {
        let dispatcher = Dispatcher::with_builtin_commands();
        let mut host = ready_host();
        host.lists.clear();

        let response = dispatcher.dispatch(&mut host, json!({"type": "lint"})).unwrap();
        assert_eq!(response.notification(), Some(WORD_LIST_UNAVAILABLE));
    }

    #[test]
    fn lint_with_empty_list_notifies() {
        let dispatcher = Dispatcher::with_builtin_commands();
        let mut host = ready_host();
        host.lists
            .insert("https://example.test/words.json".to_string(), "{}".to_string());

        let response = dispatcher.dispatch(&mut host, json!({"type": "lint"})).unwrap();
        assert_eq!(response.notification(), Some(WORD_LIST_UNAVAILABLE));
    }

    #[test]
    fn lint_without_selection_notifies() {
        let dispatcher = Dispatcher::with_builtin_commands();
        let mut host = ready_host();
        host.targets.clear();

        let response = dispatcher.dispatch(&mut host, json!({"type": "lint"})).unwrap();
        assert_eq!(response.notification(), Some(NO_SELECTION));
    }

    #[test]
    fn lint_returns_result_per_target() {
        let dispatcher = Dispatcher::with_builtin_commands();
        let mut host = ready_host();

        let response = dispatcher.dispatch(&mut host, json!({"type": "lint"})).unwrap();
        let Response::LintResults { results } = response else {
            panic!("expected lint results, got {response:?}");
        };
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "1");
        assert_eq!(results[0].findings.len(), 2);
        assert!(results[1].findings.is_empty());
    }

    #[test]
    fn select_layer_reports_found() {
        let dispatcher = Dispatcher::with_builtin_commands();
        let mut host = ready_host();

        let hit = dispatcher
            .dispatch_str(&mut host, r#"{"type": "select-layer", "id": "2"}"#)
            .unwrap();
        assert_eq!(
            hit,
            Response::Selected {
                id: "2".to_string(),
                found: true
            }
        );
        assert_eq!(host.focused.as_deref(), Some("2"));

        let miss = dispatcher
            .dispatch_str(&mut host, r#"{"type": "select-layer", "id": "9"}"#)
            .unwrap();
        assert!(matches!(miss, Response::Selected { found: false, .. }));
    }

    #[test]
    fn unknown_command_is_an_error() {
        let dispatcher = Dispatcher::with_builtin_commands();
        let mut host = MemoryHost::default();
        let err = dispatcher
            .dispatch(&mut host, json!({"type": "explode"}))
            .unwrap_err();
        assert!(matches!(err, DispatchError::UnknownCommand(tag) if tag == "explode"));
    }

    #[test]
    fn missing_tag_is_an_error() {
        let dispatcher = Dispatcher::with_builtin_commands();
        let mut host = MemoryHost::default();
        let err = dispatcher.dispatch(&mut host, json!({"id": "1"})).unwrap_err();
        assert!(matches!(err, DispatchError::MissingTag));
    }

    #[test]
    fn bad_payload_is_an_error() {
        let dispatcher = Dispatcher::with_builtin_commands();
        let mut host = MemoryHost::default();
        let err = dispatcher
            .dispatch(&mut host, json!({"type": "select-layer"}))
            .unwrap_err();
        assert!(matches!(err, DispatchError::Payload { .. }));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dispatcher = Dispatcher::with_builtin_commands();
        let mut host = MemoryHost::default();
        let err = dispatcher.dispatch_str(&mut host, "{nope").unwrap_err();
        assert!(matches!(err, DispatchError::InvalidMessage(_)));
    }

    #[test]
    fn custom_handler_can_be_registered() {
        let mut dispatcher = Dispatcher::<MemoryHost>::new();
        dispatcher.register("ping", |_host: &mut MemoryHost, _: NoPayload| {
            Ok(Response::notify("pong"))
        });
        let mut host = MemoryHost::default();
        let response = dispatcher.dispatch(&mut host, json!({"type": "ping"})).unwrap();
        assert_eq!(response.notification(), Some("pong"));
    }

    #[test]
    fn responses_serialize_with_type_tag() {
        let value = serde_json::to_value(Response::LoadUrls {
            github_url: Some("g".to_string()),
            gitlab_url: None,
        })
        .unwrap();
        assert_eq!(
            value,
            json!({"type": "load-urls", "githubUrl": "g", "gitlabUrl": null})
        );
    }
}
