use codex_utils_string::first_line;
use codex_utils_string::take_chars;
use codex_utils_string::trim_blank;

use crate::event::HookEvent;

/// Label used in the title when the event carries no usable `cwd`.
pub const DEFAULT_PROJECT: &str = "Codex";
/// Message used when the assistant's last reply has no text to show.
pub const DEFAULT_MESSAGE: &str = "Turn complete";
/// Upper bound on the message length, in characters.
pub const MAX_MESSAGE_CHARS: usize = 160;

const TITLE_PREFIX: &str = "Codex CLI · ";

/// Title/message pair handed to the notifier script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn from_event(event: &HookEvent) -> Self {
        Self {
            title: format_title(event.cwd().unwrap_or_default()),
            message: summarize_message(event.last_assistant_content()),
        }
    }
}

pub(crate) fn format_title(cwd: &str) -> String {
    format!("{TITLE_PREFIX}{}", project_label(cwd))
}

/// Final segment of `cwd`, matching `basename(1)` on the raw string: text
/// after the last separator, so `/x/proj/` has an empty label.
fn project_label(cwd: &str) -> &str {
    let label = cwd.rsplit(is_path_separator).next().unwrap_or_default();
    if label.is_empty() {
        DEFAULT_PROJECT
    } else {
        label
    }
}

#[cfg(windows)]
fn is_path_separator(ch: char) -> bool {
    ch == '/' || ch == '\\'
}

#[cfg(not(windows))]
fn is_path_separator(ch: char) -> bool {
    ch == '/'
}

pub(crate) fn summarize_message(content: Option<&str>) -> String {
    let text = content.map(trim_blank).unwrap_or_default();
    if text.is_empty() {
        return DEFAULT_MESSAGE.to_string();
    }
    take_chars(first_line(text), MAX_MESSAGE_CHARS).to_string()
}
