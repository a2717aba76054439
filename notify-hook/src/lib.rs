//! Forwards Codex `agent-turn-complete` events to `~/.codex/hooks/notify.sh`.
//!
//! Codex invokes the hook with the event serialized as a single JSON
//! argument. The hook derives a short title and message from it and hands
//! them to the user's notifier script. Every problem along the way (no
//! payload, malformed JSON, another event type, no script, a failing
//! script) ends the invocation quietly with exit status 0.
#![deny(clippy::print_stdout, clippy::print_stderr)]

use std::ffi::OsString;

use tracing::debug;

mod error;
mod event;
mod hook_script;
mod notification;
mod standalone_executable;

use crate::error::SkipReason;
use crate::event::HookEvent;
use crate::hook_script::Notifier;
use crate::notification::Notification;

pub use standalone_executable::main;

/// Builds the notification for `payload`, or explains why there is none.
pub(crate) fn prepare_notification(payload: &str) -> Result<Notification, SkipReason> {
    let event = HookEvent::parse(payload)?;
    if !event.is_turn_complete() {
        return Err(SkipReason::UnsupportedEvent {
            event_type: event.event_type().map(str::to_string),
        });
    }
    Ok(Notification::from_event(&event))
}

/// Runs one hook invocation over a full argument list (`argv[0]` first).
///
/// `locate_notifier` is consulted only once a notification has been built.
/// The notifier's own result is logged and dropped.
pub(crate) fn dispatch<I, N, F>(args: I, locate_notifier: F) -> Result<Notification, SkipReason>
where
    I: IntoIterator<Item = OsString>,
    N: Notifier,
    F: FnOnce() -> Result<N, SkipReason>,
{
    let mut args = args.into_iter();
    let _argv0 = args.next();
    let payload = args
        .next()
        .ok_or(SkipReason::MissingPayload)?
        .into_string()
        .map_err(|_| SkipReason::NonUtf8Payload)?;

    let notification = prepare_notification(&payload)?;
    let notifier = locate_notifier()?;

    match notifier.notify(&notification) {
        Ok(status) => debug!(%status, "notifier finished"),
        Err(err) => debug!("failed to run notifier: {err}"),
    }
    Ok(notification)
}
