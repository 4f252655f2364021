//! npm registry operations
//!
//! `Registry` is the seam the release transaction publishes through. `NpmRegistry`
//! drives the `npm` CLI; tests substitute an in-memory fake.

use crate::core::error::{ConfigError, RegistryError};
use crate::core::process::{self, CommandOutput};
use std::io;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Identity check and publish against one registry URL
pub trait Registry {
  /// `whoami`: stdout carries the username on success
  fn whoami(&self, registry: &str) -> io::Result<CommandOutput>;

  /// Publish the package in `package_dir`
  fn publish(&self, package_dir: &Path, registry: &str, otp: Option<&str>) -> io::Result<CommandOutput>;
}

/// The `npm` command-line client
#[derive(Debug, Clone)]
pub struct NpmRegistry {
  program: String,
}

impl NpmRegistry {
  pub fn new(program: impl Into<String>) -> Self {
    Self { program: program.into() }
  }
}

impl Default for NpmRegistry {
  fn default() -> Self {
    Self::new("npm")
  }
}

impl Registry for NpmRegistry {
  fn whoami(&self, registry: &str) -> io::Result<CommandOutput> {
    process::run_captured(Command::new(&self.program).args(["whoami", "--registry", registry]))
  }

  fn publish(&self, package_dir: &Path, registry: &str, otp: Option<&str>) -> io::Result<CommandOutput> {
    let mut cmd = Command::new(&self.program);
    cmd.args(["publish", "--registry", registry]).current_dir(package_dir);
    if let Some(otp) = otp {
      cmd.args(["--otp", otp]);
    }
    process::run_inherited(&mut cmd)
  }
}

/// Confirm the registry knows who we are, returning the username
///
/// An empty answer, or a failure that reads like an authorization error (see
/// `NOT_AUTHENTICATED_MARKERS`), is `NotAuthenticated`; any other failure is
/// `AuthCheckFailed` with the client's diagnostic.
pub fn check_auth(registry: &dyn Registry, url: &str) -> Result<String, RegistryError> {
  let output = registry.whoami(url).map_err(|e| RegistryError::AuthCheckFailed {
    registry: url.to_string(),
    diagnostic: e.to_string(),
  })?;
  classify_whoami(url, &output)
}

/// Diagnostics npm prints when there is no usable login for the registry
const NOT_AUTHENTICATED_MARKERS: [&str; 5] = [
  "ENEEDAUTH",
  "E401",
  "requires you to be logged in",
  "not logged in",
  "Unauthorized",
];

fn classify_whoami(url: &str, output: &CommandOutput) -> Result<String, RegistryError> {
  let not_authenticated = || RegistryError::NotAuthenticated {
    registry: url.to_string(),
  };

  if !output.success() {
    let diagnostic = output.stderr.trim();
    debug!(registry = url, exit_code = ?output.exit_code, diagnostic, "whoami failed");
    if diagnostic.is_empty() || NOT_AUTHENTICATED_MARKERS.iter().any(|m| diagnostic.contains(m)) {
      return Err(not_authenticated());
    }
    return Err(RegistryError::AuthCheckFailed {
      registry: url.to_string(),
      diagnostic: diagnostic.to_string(),
    });
  }

  let username = output.stdout.trim();
  if username.is_empty() {
    return Err(not_authenticated());
  }
  Ok(username.to_string())
}

/// OTP must be exactly six ASCII digits
pub fn validate_otp(otp: &str) -> Result<(), ConfigError> {
  if otp.len() == 6 && otp.bytes().all(|b| b.is_ascii_digit()) {
    Ok(())
  } else {
    Err(ConfigError::InvalidOtp)
  }
}

/// Registry must look like `scheme://host[/...]`
pub fn validate_registry(url: &str) -> Result<(), ConfigError> {
  let invalid = || ConfigError::InvalidRegistry { url: url.to_string() };

  let (scheme, rest) = url.split_once("://").ok_or_else(invalid)?;
  let scheme_ok = scheme
    .chars()
    .next()
    .is_some_and(|c| c.is_ascii_alphabetic())
    && scheme.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
  let host = rest.split(['/', '?', '#']).next().unwrap_or_default();

  if scheme_ok && !host.is_empty() && !url.chars().any(char::is_whitespace) {
    Ok(())
  } else {
    Err(invalid())
  }
}
