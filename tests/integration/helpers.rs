//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Stand-in for the npm client
///
/// Every invocation is appended to `npm.log`. `whoami` fails when a
/// `logged-out` marker exists next to the script, `publish` fails when a
/// `publish-fails` marker exists.
const FAKE_NPM: &str = r#"#!/bin/sh
here="$(dirname "$0")"
echo "$@" >> "$here/npm.log"
case "$1" in
  whoami)
    if [ -f "$here/logged-out" ]; then
      echo "npm error code ENEEDAUTH" >&2
      echo "npm error need auth This command requires you to be logged in to https://registry.npmjs.org/" >&2
      echo "npm error need auth You need to authorize this machine using \`npm adduser\`" >&2
      exit 1
    fi
    echo "tester"
    ;;
  publish)
    if [ -f "$here/publish-fails" ]; then
      echo "npm ERR! 403 Forbidden" >&2
      exit 1
    fi
    echo "+ published"
    ;;
esac
"#;

/// A temporary project plus a fake npm, wired together through npm-push.toml
pub struct TestProject {
  _root: TempDir,
  pub path: PathBuf,
  bin: PathBuf,
}

impl TestProject {
  /// Single package project at version `version`
  pub fn new(name: &str, version: &str) -> Result<Self> {
    let project = Self::empty()?;
    project.write(
      "package.json",
      &format!(
        "{{\n  \"name\": \"{}\",\n  \"version\": \"{}\",\n  \"scripts\": {{\n    \"build\": \"echo build\"\n  }}\n}}\n",
        name, version
      ),
    )?;
    Ok(project)
  }

  /// Project with only npm-push.toml; callers write the manifests
  pub fn empty() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().join("project");
    let bin = root.path().join("bin");
    std::fs::create_dir_all(&path)?;
    std::fs::create_dir_all(&bin)?;

    let npm = bin.join("npm");
    std::fs::write(&npm, FAKE_NPM)?;
    std::fs::set_permissions(&npm, std::fs::Permissions::from_mode(0o755))?;

    std::fs::write(
      path.join("npm-push.toml"),
      format!("npm = \"{}\"\nscript_runner = \"true\"\n", npm.display()),
    )?;

    Ok(Self { _root: root, path, bin })
  }

  /// Turn the project into a git repository with one commit
  pub fn init_git(&self) -> Result<()> {
    git(&self.path, &["init", "--initial-branch=main"])?;
    git(&self.path, &["config", "user.name", "Test User"])?;
    git(&self.path, &["config", "user.email", "test@example.com"])?;
    git(&self.path, &["add", "."])?;
    git(&self.path, &["commit", "-m", "Initial commit"])?;
    Ok(())
  }

  pub fn write(&self, rel: &str, content: &str) -> Result<()> {
    let file = self.path.join(rel);
    if let Some(parent) = file.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file, content)?;
    Ok(())
  }

  pub fn read(&self, rel: &str) -> Result<String> {
    std::fs::read_to_string(self.path.join(rel)).with_context(|| format!("Failed to read {}", rel))
  }

  pub fn exists(&self, rel: &str) -> bool {
    self.path.join(rel).exists()
  }

  /// `version` field of the manifest at `rel`
  pub fn version(&self, rel: &str) -> Result<Option<String>> {
    let doc: serde_json::Value = serde_json::from_str(&self.read(rel)?)?;
    Ok(doc.get("version").and_then(|v| v.as_str()).map(String::from))
  }

  pub fn log_out(&self) -> Result<()> {
    std::fs::write(self.bin.join("logged-out"), "")?;
    Ok(())
  }

  pub fn fail_publish(&self) -> Result<()> {
    std::fs::write(self.bin.join("publish-fails"), "")?;
    Ok(())
  }

  /// Lines the fake npm was invoked with
  pub fn npm_calls(&self) -> Vec<String> {
    std::fs::read_to_string(self.bin.join("npm.log"))
      .map(|log| log.lines().map(String::from).collect())
      .unwrap_or_default()
  }

  /// Local git tags
  pub fn tags(&self) -> Result<Vec<String>> {
    let output = git(&self.path, &["tag", "--list"])?;
    Ok(
      String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(String::from)
        .collect(),
    )
  }

  /// Run npm-push in the project, in English, whatever the exit status
  pub fn run(&self, args: &[&str]) -> Result<Output> {
    run_npm_push(&self.path, args, &[])
  }

  /// Like `run`, with extra environment variables for the child
  pub fn run_with_env(&self, args: &[&str], envs: &[(&str, &Path)]) -> Result<Output> {
    run_npm_push(&self.path, args, envs)
  }
}

/// Run git command in a directory
pub fn git(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = Command::new("git")
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run git command")?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    anyhow::bail!("Git command failed: git {}\n{}", args.join(" "), stderr);
  }

  Ok(output)
}

/// Run the npm-push binary; the caller checks the status
pub fn run_npm_push(cwd: &Path, args: &[&str], envs: &[(&str, &Path)]) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_npm-push");

  Command::new(bin)
    .current_dir(cwd)
    .arg("--lang")
    .arg("en")
    .args(args)
    .env_remove("NPM_PUSH_LOG")
    .env_remove("NPM_PUSH_LOG_JSON")
    .envs(envs.iter().copied())
    .output()
    .context("Failed to run npm-push")
}

pub fn stdout(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
  String::from_utf8_lossy(&output.stderr).into_owned()
}
