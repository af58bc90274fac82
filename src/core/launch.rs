//! Child process launch.
//!
//! Runs the target command through the platform shell with the populated
//! environment and normalizes its exit code.

use std::process::Command;

use tracing::{debug, info, warn};

use crate::core::constants::{FAILURE_EXIT_CODE, MAX_EXIT_CODE};
use crate::core::env::Environment;
use crate::error::{Error, Result};

/// Something that can run a command line and report its exit code.
pub trait Launcher {
    /// Run `command` with the variables in `env`.
    ///
    /// Returns the child's raw exit code, or `None` if it had none (for
    /// example when killed by a signal).
    ///
    /// # Errors
    ///
    /// Returns `Error::Launch` if the child cannot be started.
    fn launch(&self, command: &str, env: &dyn Environment) -> Result<Option<i32>>;
}

/// Runs commands with `sh -c` (or `cmd /C` on Windows).
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellLauncher;

impl Launcher for ShellLauncher {
    fn launch(&self, command: &str, env: &dyn Environment) -> Result<Option<i32>> {
        let mut cmd = shell_command(command);
        if !env.is_process() {
            cmd.env_clear().envs(env.vars());
        }

        debug!(command, "spawning");
        let status = cmd
            .status()
            .map_err(|e| Error::Launch(format!("{}: {}", command, e)))?;

        Ok(status.code())
    }
}

#[cfg(unix)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

/// Run `command` and return its normalized exit code.
///
/// # Errors
///
/// Returns `Error::Launch` if the child cannot be started.
pub fn run<L: Launcher + ?Sized>(launcher: &L, command: &str, env: &dyn Environment) -> Result<i32> {
    info!("{}", command);
    let raw = launcher.launch(command, env)?;

    match raw {
        Some(code) => info!(exit_code = code, "SSM Starter - application ended"),
        None => info!("SSM Starter - application ended without an exit code"),
    }

    let code = normalize_exit_code(raw);
    if raw != Some(code) {
        warn!(
            raw = ?raw,
            exit_code = code,
            "Exit code from application out of range, overriding"
        );
    }
    Ok(code)
}

/// Pass codes in `0..=127` through; anything else becomes 1.
pub fn normalize_exit_code(raw: Option<i32>) -> i32 {
    match raw {
        Some(code) if (0..=MAX_EXIT_CODE).contains(&code) => code,
        _ => FAILURE_EXIT_CODE,
    }
}
