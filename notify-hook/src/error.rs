use std::path::PathBuf;

use thiserror::Error;

/// Why an invocation ended without notifying anyone. None of these are
/// failures from the caller's point of view: every variant maps to exit
/// status 0.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("no event payload was supplied")]
    MissingPayload,
    #[error("event payload is not valid UTF-8")]
    NonUtf8Payload,
    #[error("event payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("event payload is not a JSON object")]
    NotAnObject,
    #[error("ignoring event of type {event_type:?}")]
    UnsupportedEvent { event_type: Option<String> },
    #[error("could not resolve the Codex home directory")]
    CodexHomeNotFound,
    #[error("no notifier script at {}", .0.display())]
    ScriptMissing(PathBuf),
}
