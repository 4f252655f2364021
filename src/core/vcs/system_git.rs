//! System git backend
//!
//! Shells out to the `git` binary. Only the tag plumbing the release workflow
//! needs is exposed. The operator's environment is inherited as-is: a tag push
//! has to reach the remote the same way a manual `git push` would (credential
//! helpers, `url.<base>.insteadOf`, proxies, `XDG_CONFIG_HOME`).

use crate::core::error::{GitError, PushError, PushResult, ResultExt};
use crate::core::process::{self, CommandOutput};
use crate::core::vcs::TagOps;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Git backend using system git
#[derive(Debug, Clone)]
pub struct SystemGit {
  /// Directory git is run from (`git -C`)
  pub(crate) repo_path: PathBuf,
}

impl SystemGit {
  /// Open the git repository containing `path`
  pub fn open(path: &Path) -> PushResult<Self> {
    let output = process::run_captured(
      Command::new("git")
        .arg("-C")
        .arg(path)
        .args(["rev-parse", "--show-toplevel"]),
    )
    .context("Failed to execute git rev-parse")?;

    if !output.success() {
      if output.stderr.contains("not a git repository") {
        return Err(PushError::Git(GitError::RepoNotFound {
          path: path.to_path_buf(),
        }));
      }
      return Err(PushError::message(format!(
        "Failed to open git repository: {}",
        output.stderr.trim()
      )));
    }

    tracing::debug!(work_tree = %output.stdout.trim(), "opened git repository");
    Ok(Self {
      repo_path: path.to_path_buf(),
    })
  }

  /// Use `path` as-is without checking it is inside a repository
  ///
  /// Nothing is run until a tag operation is requested.
  pub fn at(path: &Path) -> Self {
    Self {
      repo_path: path.to_path_buf(),
    }
  }

  /// Create a git command against the repo path
  ///
  /// The environment is inherited; only a few `-c` overrides are added.
  pub(crate) fn git_cmd(&self) -> Command {
    let mut cmd = Command::new("git");

    cmd.arg("-C").arg(&self.repo_path);

    cmd.arg("-c").arg("protocol.version=2");
    cmd.arg("-c").arg("core.quotePath=false");
    // A signed tag needs a message, which would open an editor
    cmd.arg("-c").arg("tag.gpgSign=false");

    cmd
  }
}

impl TagOps for SystemGit {
  fn create_tag(&self, tag: &str) -> io::Result<CommandOutput> {
    process::run_captured(self.git_cmd().args(["tag", tag]))
  }

  fn delete_tag(&self, tag: &str) -> io::Result<CommandOutput> {
    process::run_captured(self.git_cmd().args(["tag", "-d", tag]))
  }

  fn push_tag(&self, remote: &str, tag: &str) -> io::Result<CommandOutput> {
    // Fully qualified so a branch with the same name cannot shadow the tag
    let refspec = format!("refs/tags/{}", tag);
    process::run_captured(self.git_cmd().args(["push", remote, &refspec]))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  fn init_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    let run = |args: &[&str]| {
      let status = Command::new("git").arg("-C").arg(dir.path()).args(args).status().unwrap();
      assert!(status.success(), "git {:?} failed", args);
    };
    run(&["init", "-q"]);
    run(&["config", "user.email", "test@example.com"]);
    run(&["config", "user.name", "Test"]);
    run(&["commit", "-q", "--allow-empty", "-m", "init"]);
    dir
  }

  fn tags(git: &SystemGit) -> Vec<String> {
    let out = process::run_captured(git.git_cmd().args(["tag", "--list"])).unwrap();
    out.stdout.lines().map(str::to_string).collect()
  }

  #[test]
  fn test_open_outside_repo() {
    let dir = TempDir::new().unwrap();
    match SystemGit::open(dir.path()) {
      Err(PushError::Git(GitError::RepoNotFound { .. })) => {}
      other => panic!("expected RepoNotFound, got {:?}", other.map(|g| g.repo_path)),
    }
  }

  #[test]
  fn test_create_and_delete_tag() {
    let dir = init_repo();
    let git = SystemGit::open(dir.path()).unwrap();

    assert!(git.create_tag("pkg@1.0.1").unwrap().success());
    assert_eq!(tags(&git), vec!["pkg@1.0.1".to_string()]);

    // Second create of the same tag fails with a non-zero exit
    let again = git.create_tag("pkg@1.0.1").unwrap();
    assert!(!again.success());

    assert!(git.delete_tag("pkg@1.0.1").unwrap().success());
    assert!(tags(&git).is_empty());
  }

  #[test]
  fn test_push_without_remote_fails() {
    let dir = init_repo();
    let git = SystemGit::open(dir.path()).unwrap();
    git.create_tag("v1").unwrap();

    let out = git.push_tag("origin", "v1").unwrap();
    assert!(!out.success());
    assert!(out.exit_code.is_some());
  }

  fn bare_remote() -> TempDir {
    let dir = TempDir::new().unwrap();
    let status = Command::new("git")
      .args(["init", "-q", "--bare"])
      .arg(dir.path())
      .status()
      .unwrap();
    assert!(status.success());
    dir
  }

  fn remote_tags(remote: &Path) -> Vec<String> {
    let out = Command::new("git")
      .arg("-C")
      .arg(remote)
      .args(["tag", "--list"])
      .output()
      .unwrap();
    String::from_utf8_lossy(&out.stdout).lines().map(str::to_string).collect()
  }

  #[test]
  fn test_push_tag_with_branch_of_same_name() {
    let dir = init_repo();
    let remote = bare_remote();
    let git = SystemGit::open(dir.path()).unwrap();
    let run = |args: &[&str]| {
      let status = Command::new("git").arg("-C").arg(dir.path()).args(args).status().unwrap();
      assert!(status.success(), "git {:?} failed", args);
    };
    run(&["remote", "add", "origin", remote.path().to_str().unwrap()]);
    run(&["branch", "pkg@1.0.1"]);

    assert!(git.create_tag("pkg@1.0.1").unwrap().success());
    let out = git.push_tag("origin", "pkg@1.0.1").unwrap();
    assert!(out.success(), "push failed: {}", out.stderr);
    assert_eq!(remote_tags(remote.path()), vec!["pkg@1.0.1".to_string()]);
  }
}
