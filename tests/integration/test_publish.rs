//! Integration tests for `npm-push publish`

use crate::helpers::{TestProject, git, stderr, stdout};
use anyhow::Result;
use tempfile::TempDir;

#[test]
fn test_patch_publish_bumps_version() -> Result<()> {
  let project = TestProject::new("demo-pkg", "1.0.0")?;

  let output = project.run(&["publish", "--bump", "patch", "-y"])?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));

  assert_eq!(project.version("package.json")?.as_deref(), Some("1.0.1"));
  assert!(stdout(&output).contains("Published successfully!"));
  assert!(stdout(&output).contains("tester"));

  let calls = project.npm_calls();
  assert!(calls.iter().any(|c| c.starts_with("whoami --registry https://registry.npmjs.org/")));
  assert!(calls.iter().any(|c| c == "publish --registry https://registry.npmjs.org/"));

  // No changelog unless asked for
  assert!(!project.exists("CHANGELOG.md"));
  Ok(())
}

#[test]
fn test_manifest_layout_survives_the_bump() -> Result<()> {
  let project = TestProject::new("demo-pkg", "1.0.0")?;

  let output = project.run(&["publish", "--bump", "minor", "-y"])?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));

  let expected = "{\n  \"name\": \"demo-pkg\",\n  \"version\": \"1.1.0\",\n  \"scripts\": {\n    \"build\": \"echo build\"\n  }\n}\n";
  assert_eq!(project.read("package.json")?, expected);
  Ok(())
}

#[test]
fn test_failed_publish_restores_version() -> Result<()> {
  let project = TestProject::new("demo-pkg", "1.0.0")?;
  project.fail_publish()?;

  let output = project.run(&["publish", "-y", "--generate-changelog", "-m", "Fixed: crash"])?;
  assert_eq!(output.status.code(), Some(1));

  let err = stderr(&output);
  assert!(err.contains("npm publish failed, exit code: 1"), "stderr: {}", err);
  assert!(err.contains("Local changes rolled back"), "stderr: {}", err);

  assert_eq!(project.version("package.json")?.as_deref(), Some("1.0.0"));
  // The changelog did not exist before, so it must not exist after
  assert!(!project.exists("CHANGELOG.md"));
  Ok(())
}

#[test]
fn test_not_logged_in_rolls_back() -> Result<()> {
  let project = TestProject::new("demo-pkg", "2.3.4")?;
  project.log_out()?;

  let output = project.run(&["publish", "--bump", "major", "-y"])?;
  assert_eq!(output.status.code(), Some(1));

  let err = stderr(&output);
  assert!(err.contains("Not logged in to npm registry"), "stderr: {}", err);
  assert!(err.contains("npm login --registry https://registry.npmjs.org/"), "stderr: {}", err);
  assert_eq!(project.version("package.json")?.as_deref(), Some("2.3.4"));

  // Never got as far as publishing
  assert!(!project.npm_calls().iter().any(|c| c.starts_with("publish")));
  Ok(())
}

#[test]
fn test_tag_push_failure_after_publish() -> Result<()> {
  let project = TestProject::new("@scope/demo-pkg", "1.0.0")?;
  project.init_git()?;

  // No `origin` remote, so the push fails after npm has accepted the package
  let output = project.run(&["publish", "--push-tag", "-y"])?;
  assert_eq!(output.status.code(), Some(1));

  let err = stderr(&output);
  assert!(err.contains("Failed to push git tag"), "stderr: {}", err);
  assert!(
    err.contains("@scope/demo-pkg@1.0.1 is already live on https://registry.npmjs.org/"),
    "stderr: {}",
    err
  );

  assert!(project.npm_calls().iter().any(|c| c.starts_with("publish")));
  assert!(project.tags()?.is_empty(), "tag should have been deleted");
  assert_eq!(project.version("package.json")?.as_deref(), Some("1.0.0"));
  Ok(())
}

#[test]
fn test_tag_push_follows_user_git_config() -> Result<()> {
  let project = TestProject::new("demo-pkg", "1.0.0")?;
  project.init_git()?;

  let remote = TempDir::new()?;
  git(remote.path(), &["init", "-q", "--bare"])?;
  git(&project.path, &["remote", "add", "origin", "alias:remote"])?;

  // `alias:remote` only resolves through the user-level config
  let xdg = TempDir::new()?;
  std::fs::create_dir_all(xdg.path().join("git"))?;
  std::fs::write(
    xdg.path().join("git").join("config"),
    format!("[url \"{}\"]\n\tinsteadOf = alias:remote\n", remote.path().display()),
  )?;

  let output = project.run_with_env(&["publish", "--push-tag", "-y"], &[("XDG_CONFIG_HOME", xdg.path())])?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));

  let remote_tags = git(remote.path(), &["tag", "--list"])?;
  assert_eq!(String::from_utf8_lossy(&remote_tags.stdout).trim(), "demo-pkg@1.0.1");
  assert_eq!(project.tags()?, vec!["demo-pkg@1.0.1".to_string()]);
  assert_eq!(project.version("package.json")?.as_deref(), Some("1.0.1"));
  Ok(())
}

#[test]
fn test_push_tag_outside_git_repo_fails_early() -> Result<()> {
  let project = TestProject::new("demo-pkg", "1.0.0")?;

  let output = project.run(&["publish", "--push-tag", "-y"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("Not a git repository"), "stderr: {}", stderr(&output));

  assert!(project.npm_calls().is_empty());
  assert_eq!(project.version("package.json")?.as_deref(), Some("1.0.0"));
  Ok(())
}

#[test]
fn test_otp_is_passed_through() -> Result<()> {
  let project = TestProject::new("demo-pkg", "1.0.0")?;

  let output = project.run(&[
    "publish",
    "--otp",
    "123456",
    "--registry",
    "https://npm.example.com/",
    "-y",
  ])?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));

  let calls = project.npm_calls();
  assert!(
    calls
      .iter()
      .any(|c| c == "publish --registry https://npm.example.com/ --otp 123456"),
    "calls: {:?}",
    calls
  );
  // Never echoed
  assert!(!stdout(&output).contains("123456"));
  Ok(())
}

#[test]
fn test_invalid_otp_changes_nothing() -> Result<()> {
  let project = TestProject::new("demo-pkg", "1.0.0")?;

  let output = project.run(&["publish", "--otp", "12ab56", "-y"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("must be 6 digits"));

  assert!(project.npm_calls().is_empty());
  assert_eq!(project.version("package.json")?.as_deref(), Some("1.0.0"));
  Ok(())
}

#[test]
fn test_dry_run_changes_nothing() -> Result<()> {
  let project = TestProject::new("demo-pkg", "1.0.0")?;
  let before = project.read("package.json")?;

  let output = project.run(&["publish", "--dry-run", "--new-version", "3.0.0", "--generate-changelog"])?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));

  let out = stdout(&output);
  assert!(out.contains("Publish preview"));
  assert!(out.contains("3.0.0"));
  assert!(out.contains("Dry run"));

  assert_eq!(project.read("package.json")?, before);
  assert!(!project.exists("CHANGELOG.md"));
  assert!(project.npm_calls().is_empty());
  Ok(())
}

#[test]
fn test_changelog_is_generated() -> Result<()> {
  let project = TestProject::new("demo-pkg", "0.4.9")?;

  let output = project.run(&[
    "publish",
    "--generate-changelog",
    "-m",
    "Added: dark mode",
    "-m",
    "Fixed: crash on start",
    "-y",
  ])?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));

  let changelog = project.read("CHANGELOG.md")?;
  assert!(changelog.starts_with("# Changelog"));
  assert!(changelog.contains("## [0.4.10] - "));
  assert!(changelog.contains("### Added\n\n- Added: dark mode"));
  assert!(changelog.contains("### Fixed\n\n- Fixed: crash on start"));

  // A second release goes above the first
  let output = project.run(&["publish", "--generate-changelog", "-m", "Changed: faster", "-y"])?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));

  let changelog = project.read("CHANGELOG.md")?;
  let newer = changelog.find("## [0.4.11]").unwrap();
  let older = changelog.find("## [0.4.10]").unwrap();
  assert!(newer < older);
  assert_eq!(changelog.matches("# Changelog").count(), 1);
  Ok(())
}

#[test]
fn test_missing_script_is_rejected_before_changes() -> Result<()> {
  let project = TestProject::new("demo-pkg", "1.0.0")?;

  let output = project.run(&["publish", "--script", "lint", "-y"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("Script \"lint\" not found"));
  assert_eq!(project.version("package.json")?.as_deref(), Some("1.0.0"));
  Ok(())
}

#[test]
fn test_script_runs_before_publish() -> Result<()> {
  let project = TestProject::new("demo-pkg", "1.0.0")?;

  // script_runner is `true`, so `true run build` succeeds without npm
  let output = project.run(&["publish", "--script", "build", "-y"])?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));
  assert!(stdout(&output).contains("Script succeeded"));
  assert_eq!(project.version("package.json")?.as_deref(), Some("1.0.1"));
  Ok(())
}
