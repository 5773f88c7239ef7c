//! Error types for copy-lint-core.
//!
//! The lint engine itself is infallible. These errors belong to the
//! boundaries around it: configuration, word-list validation, the settings
//! store, and command dispatch.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading a word list at the host boundary.
#[derive(Error, Debug)]
pub enum WordListError {
    /// The document is not valid JSON.
    #[error("word list is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The document parsed, but its top level is not an object.
    #[error("word list must be a JSON object of term -> suggestion, found {found}")]
    NotAnObject {
        /// JSON type name of the top-level value.
        found: &'static str,
    },

    /// Reading the word list from disk failed.
    #[error("failed to read word list {location}: {source}")]
    Read {
        /// The location that was requested.
        location: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Retrieving the word list over the network failed.
    #[error("failed to fetch word list {location}: {message}")]
    Fetch {
        /// The location that was requested.
        location: String,
        /// Transport error description.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("failed to fetch word list {location}: HTTP {status}")]
    Status {
        /// The location that was requested.
        location: String,
        /// HTTP status code.
        status: u16,
    },
}

/// Result type alias using [`WordListError`].
pub type WordListResult<T> = Result<T, WordListError>;

/// Errors from a persistent settings store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing storage could not be read or written.
    #[error("settings store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing storage holds something other than a string map.
    #[error("settings store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Result type alias using [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from routing a host command through the dispatch table.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The message is not valid JSON.
    #[error("message is not valid JSON: {0}")]
    InvalidMessage(#[from] serde_json::Error),

    /// The message is not an object with a string `type` tag.
    #[error("message has no \"type\" tag")]
    MissingTag,

    /// No handler is registered for the tag.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The payload does not match the handler's expected shape.
    #[error("invalid payload for {tag}: {source}")]
    Payload {
        /// The command tag being handled.
        tag: String,
        /// Deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// The settings store failed while handling the command.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type alias using [`DispatchError`].
pub type DispatchResult<T> = Result<T, DispatchError>;
