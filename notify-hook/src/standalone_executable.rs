use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::dispatch;
use crate::hook_script::HookScript;

pub fn main() -> ! {
    let exit_code = run_main();
    std::process::exit(exit_code);
}

/// Always returns 0: a notification hook must never report failure back
/// to Codex, whatever happened to the event.
pub fn run_main() -> i32 {
    // Honor `RUST_LOG`. Nothing is printed at the default level.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    match dispatch(std::env::args_os(), HookScript::discover) {
        Ok(notification) => debug!(title = %notification.title, "notification sent"),
        Err(reason) => debug!("no notification sent: {reason}"),
    }
    0
}
