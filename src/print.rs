//! Platform print dispatch for saved receipts.

use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use tracing::{error, info, warn};

use crate::config::PRINT_TIMEOUT_SECS;
use crate::error::{FisError, Result};

/// Send a saved receipt to the system print mechanism.
///
/// Best effort: the receipt is already durable, so every failure here is
/// logged and reported as `false`, never as an error.
pub fn print_file(path: &Path) -> bool {
    match dispatch_print(path) {
        Ok(()) => {
            info!("Sent {} to printer", path.display());
            true
        }
        Err(err) => {
            warn!("{}", err);
            false
        }
    }
}

/// Run the platform print command for `path` with a bounded wait.
///
/// The subprocess gets `PRINT_TIMEOUT_SECS` to finish and is killed if it
/// hangs; every failure mode comes back as [`FisError::Print`].
pub fn dispatch_print(path: &Path) -> Result<()> {
    let mut child = spawn_print_command(path).map_err(|err| FisError::Print {
        message: format!(
            "could not start print command for {}: {}",
            path.display(),
            err
        ),
    })?;

    match wait_with_timeout(&mut child, Duration::from_secs(PRINT_TIMEOUT_SECS)) {
        WaitOutcome::Exited(status) if status.success() => Ok(()),
        WaitOutcome::Exited(status) => Err(FisError::Print {
            message: format!("print command for {} exited with {}", path.display(), status),
        }),
        WaitOutcome::TimedOut => {
            if let Err(err) = child.kill() {
                error!("Failed to kill print command: {}", err);
            }
            let _ = child.wait();
            Err(FisError::Print {
                message: format!(
                    "print command for {} still running after {}s, killed",
                    path.display(),
                    PRINT_TIMEOUT_SECS
                ),
            })
        }
        WaitOutcome::Failed(err) => Err(FisError::Print {
            message: format!("failed to wait for print command: {}", err),
        }),
    }
}

#[cfg(not(windows))]
fn spawn_print_command(path: &Path) -> std::io::Result<Child> {
    Command::new("lpr")
        .arg(path)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
}

#[cfg(windows)]
fn spawn_print_command(path: &Path) -> std::io::Result<Child> {
    // The shell "print" verb hands the file to the default printer.
    Command::new("powershell")
        .args(["-NoProfile", "-Command", "Start-Process", "-Verb", "Print", "-FilePath"])
        .arg(path)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
}

enum WaitOutcome {
    Exited(ExitStatus),
    TimedOut,
    Failed(std::io::Error),
}

/// Poll the child until it exits or the deadline passes.
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> WaitOutcome {
    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return WaitOutcome::Exited(status),
            Ok(None) => {
                if Instant::now() >= deadline {
                    return WaitOutcome::TimedOut;
                }
                std::thread::sleep(Duration::from_millis(50));
            }
            Err(err) => return WaitOutcome::Failed(err),
        }
    }
}
