//! Locating and running the user's notifier script.

use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;

use tracing::debug;

use crate::error::SkipReason;
use crate::notification::Notification;

const CODEX_HOME_ENV_VAR: &str = "CODEX_HOME";
const HOOKS_DIR: &str = "hooks";
const NOTIFY_SCRIPT: &str = "notify.sh";

/// Returns `$CODEX_HOME` when set to a non-empty value, otherwise
/// `~/.codex`. The directory is not required to exist.
pub fn find_codex_home() -> Option<PathBuf> {
    if let Some(codex_home) = std::env::var_os(CODEX_HOME_ENV_VAR)
        && !codex_home.is_empty()
    {
        return Some(PathBuf::from(codex_home));
    }

    dirs::home_dir().map(|mut path| {
        path.push(".codex");
        path
    })
}

/// Delivers a notification to the user.
pub trait Notifier {
    /// Blocks until delivery finishes. The status is informational only.
    fn notify(&self, notification: &Notification) -> io::Result<ExitStatus>;
}

/// An executable invoked as `<script> <title> <message>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookScript {
    path: PathBuf,
}

impl HookScript {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `hooks/notify.sh` under `codex_home`.
    pub fn in_codex_home(codex_home: &Path) -> Self {
        Self::new(codex_home.join(HOOKS_DIR).join(NOTIFY_SCRIPT))
    }

    /// Resolves the script for this user and checks that it exists.
    pub fn discover() -> Result<Self, SkipReason> {
        let codex_home = find_codex_home().ok_or(SkipReason::CodexHomeNotFound)?;
        Self::in_codex_home(&codex_home).existing()
    }

    /// Keeps the script only if something exists at its path.
    pub fn existing(self) -> Result<Self, SkipReason> {
        if self.path.exists() {
            Ok(self)
        } else {
            Err(SkipReason::ScriptMissing(self.path))
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Notifier for HookScript {
    fn notify(&self, notification: &Notification) -> io::Result<ExitStatus> {
        debug!(script = %self.path().display(), "running notifier script");
        Command::new(&self.path)
            .arg(&notification.title)
            .arg(&notification.message)
            .status()
    }
}
