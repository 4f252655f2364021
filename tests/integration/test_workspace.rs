//! Integration tests for workspace discovery and package selection

use crate::helpers::{TestProject, stderr, stdout};
use anyhow::Result;

fn workspace() -> Result<TestProject> {
  let project = TestProject::empty()?;
  project.write(
    "package.json",
    r#"{ "name": "root", "private": true, "workspaces": ["packages/*"] }"#,
  )?;
  project.write("packages/b/package.json", r#"{ "name": "pkg-b", "version": "0.2.0" }"#)?;
  project.write("packages/a/package.json", r#"{ "name": "pkg-a", "version": "1.0.0" }"#)?;
  project.write("packages/a/node_modules/dep/package.json", r#"{ "name": "dep", "version": "9.9.9" }"#)?;
  project.write("packages/notes/README.md", "no manifest here\n")?;
  Ok(project)
}

#[test]
fn test_list_json() -> Result<()> {
  let project = workspace()?;

  let output = project.run(&["list", "--json"])?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));

  let json: serde_json::Value = serde_json::from_str(&stdout(&output))?;
  assert_eq!(json["is_multi_package"], true);

  let names: Vec<&str> = json["packages"]
    .as_array()
    .unwrap()
    .iter()
    .map(|p| p["name"].as_str().unwrap())
    .collect();
  assert_eq!(names, vec!["pkg-a", "pkg-b"]);
  assert_eq!(json["packages"][1]["version"], "0.2.0");
  Ok(())
}

#[test]
fn test_list_single_package() -> Result<()> {
  let project = TestProject::new("solo", "0.1.0")?;

  let output = project.run(&["list"])?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));
  let out = stdout(&output);
  assert!(out.contains("Single-package project"));
  assert!(out.contains("solo"));
  Ok(())
}

#[test]
fn test_publish_requires_package_in_workspace() -> Result<()> {
  let project = workspace()?;

  let output = project.run(&["publish", "-y"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(
    stderr(&output).contains("This workspace has 2 packages; choose one with --package"),
    "stderr: {}",
    stderr(&output)
  );
  assert!(project.npm_calls().is_empty());
  Ok(())
}

#[test]
fn test_publish_selected_package_by_name_and_path() -> Result<()> {
  let project = workspace()?;

  let output = project.run(&["publish", "--package", "pkg-b", "-y"])?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));
  assert_eq!(project.version("packages/b/package.json")?.as_deref(), Some("0.2.1"));
  assert_eq!(project.version("packages/a/package.json")?.as_deref(), Some("1.0.0"));
  assert_eq!(project.version("package.json")?, None);

  let output = project.run(&["publish", "--package", "packages/a", "--bump", "minor", "-y"])?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));
  assert_eq!(project.version("packages/a/package.json")?.as_deref(), Some("1.1.0"));
  Ok(())
}

#[test]
fn test_unknown_package() -> Result<()> {
  let project = workspace()?;

  let output = project.run(&["publish", "--package", "nope", "-y"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("Package not found: nope"));
  Ok(())
}

#[test]
fn test_missing_manifest() -> Result<()> {
  let project = TestProject::empty()?;

  let output = project.run(&["list"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("package.json not found"));
  Ok(())
}
