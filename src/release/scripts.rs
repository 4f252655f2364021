//! Package scripts
//!
//! Runs a `scripts` entry of the selected package through a package manager
//! (`<runner> run <name>`) with the terminal attached.

use crate::core::error::{PushResult, ResultExt, ScriptError};
use crate::core::process;
use crate::release::workspace::PackageDescriptor;
use std::process::Command;
use tracing::info;

/// Script names declared by the package
pub fn package_scripts(package: &PackageDescriptor) -> Vec<String> {
  package.script_names()
}

/// Run `name` in the package directory
pub fn run_script(package: &PackageDescriptor, name: &str, runner: &str) -> PushResult<()> {
  if !package_scripts(package).iter().any(|s| s == name) {
    return Err(ScriptError::NotFound { name: name.to_string() }.into());
  }

  info!(package = %package.name, script = name, runner, "running script");
  let output = process::run_inherited(Command::new(runner).args(["run", name]).current_dir(&package.path))
    .with_context(|| format!("Failed to start `{} run {}`", runner, name))?;

  if !output.success() {
    return Err(
      ScriptError::ExecutionFailed {
        name: name.to_string(),
        exit_code: output.exit_code,
      }
      .into(),
    );
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::error::PushError;
  use serde_json::json;
  use std::path::Path;

  fn package(dir: &Path, scripts: serde_json::Value) -> PackageDescriptor {
    let manifest = json!({ "name": "pkg", "scripts": scripts });
    PackageDescriptor {
      name: "pkg".to_string(),
      version: "1.0.0".to_string(),
      path: dir.to_path_buf(),
      manifest: manifest.as_object().cloned().unwrap_or_default(),
    }
  }

  #[test]
  fn test_package_scripts() {
    let pkg = package(Path::new("."), json!({ "build": "tsc", "test": "vitest" }));
    assert_eq!(package_scripts(&pkg), vec!["build", "test"]);
    assert!(package_scripts(&package(Path::new("."), json!(null))).is_empty());
  }

  #[test]
  fn test_missing_script() {
    let pkg = package(Path::new("."), json!({ "build": "tsc" }));
    match run_script(&pkg, "lint", "npm") {
      Err(PushError::Script(ScriptError::NotFound { name })) => assert_eq!(name, "lint"),
      other => panic!("expected NotFound, got {:?}", other),
    }
  }

  #[cfg(unix)]
  #[test]
  fn test_runner_exit_code() {
    let dir = tempfile::TempDir::new().unwrap();
    let pkg = package(dir.path(), json!({ "build": "tsc" }));

    match run_script(&pkg, "build", "false") {
      Err(PushError::Script(ScriptError::ExecutionFailed { name, exit_code })) => {
        assert_eq!(name, "build");
        assert_eq!(exit_code, Some(1));
      }
      other => panic!("expected ExecutionFailed, got {:?}", other),
    }

    assert!(run_script(&pkg, "build", "true").is_ok());
  }
}
