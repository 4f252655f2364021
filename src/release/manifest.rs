//! `package.json` access
//!
//! The manifest is kept as an ordered JSON object. Only `name`, `version` and
//! `workspaces` are read here; every other key is carried through
//! a rewrite untouched and in its original position.

use crate::core::error::{PushResult, ResultExt, WorkspaceError};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "package.json";

/// A parsed `package.json`
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
  path: PathBuf,
  doc: Map<String, Value>,
}

impl Manifest {
  /// Load `<dir>/package.json`
  ///
  /// A missing file, invalid JSON, or a non-object document are all `ManifestNotFound`.
  pub fn load(dir: &Path) -> PushResult<Self> {
    let path = dir.join(MANIFEST_FILE);
    let not_found = || WorkspaceError::ManifestNotFound { path: path.clone() };

    let content = fs::read_to_string(&path).map_err(|_| not_found())?;
    let doc = match serde_json::from_str::<Value>(&content) {
      Ok(Value::Object(doc)) => doc,
      _ => return Err(not_found().into()),
    };

    Ok(Self { path, doc })
  }

  /// Write back with 2-space indentation and a trailing newline
  pub fn save(&self) -> PushResult<()> {
    let mut content = serde_json::to_string_pretty(&self.doc)?;
    content.push('\n');
    fs::write(&self.path, content).with_context(|| format!("Failed to write {}", self.path.display()))
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn name(&self) -> Option<&str> {
    self.doc.get("name").and_then(Value::as_str)
  }

  pub fn version(&self) -> Option<&str> {
    self.doc.get("version").and_then(Value::as_str)
  }

  /// Set `version`, keeping its position if the key already exists
  pub fn set_version(&mut self, version: &str) {
    self.doc.insert("version".to_string(), Value::String(version.to_string()));
  }

  /// Drop the `version` key
  pub fn remove_version(&mut self) {
    self.doc.shift_remove("version");
  }

  pub fn workspaces(&self) -> Option<&Value> {
    self.doc.get("workspaces")
  }

  /// The whole document
  pub fn document(&self) -> &Map<String, Value> {
    &self.doc
  }
}

/// Read only the `version` field of `<dir>/package.json`
pub fn read_version(dir: &Path) -> PushResult<Option<String>> {
  Ok(Manifest::load(dir)?.version().map(str::to_string))
}

/// Set (or with `None`, remove) the `version` field of `<dir>/package.json`
pub fn write_version(dir: &Path, version: Option<&str>) -> PushResult<()> {
  let mut manifest = Manifest::load(dir)?;
  match version {
    Some(v) => manifest.set_version(v),
    None => manifest.remove_version(),
  }
  manifest.save()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::error::PushError;
  use tempfile::TempDir;

  const SAMPLE: &str = r#"{
  "name": "@acme/widget",
  "version": "1.0.0",
  "description": "A widget",
  "scripts": {
    "test": "vitest",
    "build": "tsc"
  },
  "dependencies": {
    "zod": "^3.0.0"
  }
}
"#;

  #[test]
  fn test_rewrite_preserves_order_and_format() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(MANIFEST_FILE), SAMPLE).unwrap();

    write_version(dir.path(), Some("1.0.1")).unwrap();

    let written = fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap();
    assert_eq!(written, SAMPLE.replace("1.0.0", "1.0.1"));
  }

  #[test]
  fn test_accessors() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(MANIFEST_FILE), SAMPLE).unwrap();

    let manifest = Manifest::load(dir.path()).unwrap();
    assert_eq!(manifest.name(), Some("@acme/widget"));
    assert_eq!(manifest.version(), Some("1.0.0"));
    assert!(manifest.workspaces().is_none());
  }

  #[test]
  fn test_remove_version() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(MANIFEST_FILE), "{\"name\":\"x\",\"version\":\"2.0.0\"}").unwrap();

    write_version(dir.path(), None).unwrap();
    assert_eq!(read_version(dir.path()).unwrap(), None);
    assert_eq!(Manifest::load(dir.path()).unwrap().name(), Some("x"));
  }

  #[test]
  fn test_missing_or_garbage_is_not_found() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
      Manifest::load(dir.path()),
      Err(PushError::Workspace(WorkspaceError::ManifestNotFound { .. }))
    ));

    fs::write(dir.path().join(MANIFEST_FILE), "[1, 2]").unwrap();
    assert!(matches!(
      Manifest::load(dir.path()),
      Err(PushError::Workspace(WorkspaceError::ManifestNotFound { .. }))
    ));
  }
}
