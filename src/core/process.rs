//! Blocking subprocess execution
//!
//! Every external command (git, the registry client, package scripts) goes
//! through here so invocations are logged the same way and results come back as
//! a plain `CommandOutput` value.

use std::io;
use std::process::{Command, Output, Stdio};
use tracing::debug;

/// Exit status plus captured output of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
  /// `None` when the process was terminated by a signal
  pub exit_code: Option<i32>,
  pub stdout: String,
  pub stderr: String,
}

impl CommandOutput {
  /// A zero exit
  pub fn success(&self) -> bool {
    self.exit_code == Some(0)
  }

  #[cfg(test)]
  pub fn ok(stdout: &str) -> Self {
    Self {
      exit_code: Some(0),
      stdout: stdout.to_string(),
      stderr: String::new(),
    }
  }

  #[cfg(test)]
  pub fn failed(code: i32, stderr: &str) -> Self {
    Self {
      exit_code: Some(code),
      stdout: String::new(),
      stderr: stderr.to_string(),
    }
  }
}

impl From<Output> for CommandOutput {
  fn from(output: Output) -> Self {
    Self {
      exit_code: output.status.code(),
      stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
      stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
  }
}

/// Run a command to completion, capturing stdout and stderr
pub fn run_captured(cmd: &mut Command) -> io::Result<CommandOutput> {
  debug!(command = ?cmd, "running (captured)");
  let output: CommandOutput = cmd.stdin(Stdio::null()).output()?.into();
  debug!(exit_code = ?output.exit_code, "finished");
  Ok(output)
}

/// Run a command to completion with the terminal attached
///
/// Used for steps the operator should watch (publish, build scripts) and that may
/// prompt on their own. Only the exit code is reported.
pub fn run_inherited(cmd: &mut Command) -> io::Result<CommandOutput> {
  debug!(command = ?cmd, "running (inherited stdio)");
  let status = cmd.status()?;
  debug!(exit_code = ?status.code(), "finished");
  Ok(CommandOutput {
    exit_code: status.code(),
    ..Default::default()
  })
}
