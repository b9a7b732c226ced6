use std::process::{Command, Stdio};

use log::info;

use crate::error::{Error, Result};

/// Runs the login helper command line through the shell.
///
/// The helper inherits the terminal so it can drive a browser-based login.
/// Returns once the helper process exits.
///
/// # Errors
///
/// Returns an error if the helper cannot be spawned or exits with
/// non-zero status.
pub fn run_login_helper(shell: &str, command_line: &str) -> Result<()> {
    info!("Running login helper: `{command_line}`");

    let subprocess_exit_success = Command::new(shell)
        .args(["-c", command_line])
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()?
        .wait()?
        .success();

    if subprocess_exit_success {
        Ok(())
    } else {
        Err(Error::LoginHelperExit)
    }
}
