//  ____                               _  _    _
// |  _ \   __ _  ___  ___  _ __ ___  (_)| |_ | |__
// | |_) | / _` |/ __|/ __|| '_ ` _ \ | || __|| '_ \
// |  __/ | (_| |\__ \\__ \| | | | | || || |_ | | | |
// |_|     \__,_||___/|___/|_| |_| |_||_| \__||_| |_|
//
// Date : 2026-08-22
// Version : 0.1.0
// License : MIT
//
// Clipboard handler

use std::{env, process, thread, time::Duration};

use arboard::Clipboard;
use log::debug;
use thiserror::Error;

const DAEMON_ENV: &str = "PASSMITH_CLIPBOARD_DAEMON";
const SECRET_ENV: &str = "PASSMITH_CLIPBOARD_SECRET";
const DELAY_ENV: &str = "PASSMITH_CLIPBOARD_DELAY";

const DEFAULT_CLEAR_DELAY: u64 = 30;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),
    #[error("failed to spawn clipboard clear daemon: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Re-launches the current executable as a detached process that clears
/// the clipboard later, so the parent can exit immediately.
fn spawn_clear_daemon(secret: &str, delay_secs: u64) -> Result<(), ClipboardError> {
    let exe_path = env::current_exe()?;

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        let mut cmd = process::Command::new(exe_path);
        cmd.env(DAEMON_ENV, "1")
            .env(SECRET_ENV, secret)
            .env(DELAY_ENV, delay_secs.to_string())
            .stderr(process::Stdio::inherit())
            .process_group(0);
        cmd.spawn()?;
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        let mut cmd = process::Command::new(exe_path);
        cmd.env(DAEMON_ENV, "1")
            .env(SECRET_ENV, secret)
            .env(DELAY_ENV, delay_secs.to_string())
            .stderr(process::Stdio::inherit())
            .creation_flags(0x08000000); // CREATE_NO_WINDOW
        cmd.spawn()?;
    }

    Ok(())
}

fn clear_task(secret: &str, delay_secs: u64) {
    thread::sleep(Duration::from_secs(delay_secs));

    let mut ctx = match Clipboard::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("clipboard daemon: initialization failed: {}", e);
            return;
        }
    };

    // Only clear when the clipboard still holds our password; anything the
    // user copied since is left alone.
    let current = ctx.get_text().unwrap_or_default();
    if current == secret {
        if let Err(e) = ctx.set_text("") {
            eprintln!("clipboard daemon: failed to clear: {}", e);
        } else {
            debug!("clipboard cleared after {} seconds", delay_secs);
        }
    }
}

/// Entry hook for the detached clear process. Call first thing in `main`;
/// returns `true` when this process was launched as the clipboard daemon
/// and has finished its work, in which case the caller should exit.
pub fn run_clear_daemon_if_requested() -> bool {
    if env::var(DAEMON_ENV).is_err() {
        return false;
    }
    let Ok(secret) = env::var(SECRET_ENV) else {
        eprintln!("clipboard daemon: missing {}", SECRET_ENV);
        return true;
    };
    let delay = env::var(DELAY_ENV)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_CLEAR_DELAY);
    clear_task(&secret, delay);
    true
}

/// Copies `secret` to the system clipboard and schedules a clear after
/// `clear_after` seconds via a detached daemon process.
pub fn copy_to_clipboard(secret: &str, clear_after: u64) -> Result<(), ClipboardError> {
    let mut ctx = Clipboard::new()?;
    ctx.set_text(secret)?;
    spawn_clear_daemon(secret, clear_after)?;
    Ok(())
}
