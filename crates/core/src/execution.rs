use std::process::{Command, Stdio};

use log::info;

use crate::command_definitions::CommandRecord;
use crate::error::{Error, Result};

/// Builds the shell invocation for a record.
///
/// `-i` starts an interactive shell, which will make it read `~/.bashrc` or
/// whatever file so aliases and functions are available.
pub fn build_command(shell: &str, record: &CommandRecord) -> Command {
    let mut command = Command::new(shell);
    command.args(["-i", "-c", record.command.as_str()]);
    command
}

/// Runs the record's command through `shell` and waits for it.
///
/// # Errors
///
/// Returns an error if command execution fails or exits with non-zero status.
pub fn execute_command(shell: &str, record: &CommandRecord) -> Result<()> {
    info!("Executing `{}` with {shell}", record.name);

    let subprocess_exit_success = build_command(shell, record)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()?
        .wait()?
        .success();

    if subprocess_exit_success {
        Ok(())
    } else {
        Err(Error::SubProcessExit)
    }
}
