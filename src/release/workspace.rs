//! Workspace discovery
//!
//! A project is either a single package (the root `package.json`) or a
//! multi-package workspace whose members are found by matching directories
//! against the root's `workspaces` glob patterns.

use crate::core::error::{PushResult, WorkspaceError};
use crate::release::manifest::Manifest;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Deepest directory level the scan descends to
const MAX_SCAN_DEPTH: usize = 10;

/// Directory names never scanned
const SKIPPED_DIRS: [&str; 1] = ["node_modules"];

/// A publishable package
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageDescriptor {
  pub name: String,
  pub version: String,
  pub path: PathBuf,
  #[serde(skip)]
  pub manifest: Map<String, Value>,
}

impl PackageDescriptor {
  fn from_manifest(manifest: &Manifest, path: &Path, fallback_name: Option<&str>) -> Option<Self> {
    let name = manifest.name().or(fallback_name)?;
    Some(Self {
      name: name.to_string(),
      version: manifest.version().unwrap_or("0.0.0").to_string(),
      path: path.to_path_buf(),
      manifest: manifest.document().clone(),
    })
  }

  /// Names in the `scripts` map, in declaration order
  pub fn script_names(&self) -> Vec<String> {
    self
      .manifest
      .get("scripts")
      .and_then(Value::as_object)
      .map(|scripts| scripts.keys().cloned().collect())
      .unwrap_or_default()
  }
}

/// The resolved project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkspaceInfo {
  pub is_multi_package: bool,
  /// Discovery order
  pub packages: Vec<PackageDescriptor>,
  /// Root package.json as parsed
  pub root_manifest: Map<String, Value>,
  pub root_path: PathBuf,
}

impl WorkspaceInfo {
  pub fn find_package_by_name(&self, name: &str) -> Option<&PackageDescriptor> {
    self.packages.iter().find(|pkg| pkg.name == name)
  }

  /// Match on canonicalized paths; a relative `path` is tried against the
  /// current directory and then the workspace root
  pub fn find_package_by_path(&self, path: &Path) -> Option<&PackageDescriptor> {
    let mut candidates = vec![path.to_path_buf()];
    if path.is_relative() {
      candidates.push(self.root_path.join(path));
    }

    candidates.iter().find_map(|candidate| {
      let wanted = canonical(candidate);
      self.packages.iter().find(|pkg| canonical(&pkg.path) == wanted)
    })
  }

  /// Pick the package to release
  ///
  /// With a query, match by name first and then by path. Without one, a lone
  /// package is selected implicitly.
  pub fn select(&self, query: Option<&str>) -> Result<&PackageDescriptor, WorkspaceError> {
    match query {
      Some(query) => self
        .find_package_by_name(query)
        .or_else(|| self.find_package_by_path(Path::new(query)))
        .ok_or_else(|| WorkspaceError::PackageNotFound {
          query: query.to_string(),
        }),
      None => match self.packages.as_slice() {
        [only] => Ok(only),
        packages => Err(WorkspaceError::SelectionRequired { count: packages.len() }),
      },
    }
  }
}

fn canonical(path: &Path) -> PathBuf {
  fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Resolve the project rooted at `root`
pub fn resolve(root: &Path) -> PushResult<WorkspaceInfo> {
  let root_path = canonical(root);
  let root_manifest = Manifest::load(&root_path)?;

  let Some(patterns) = workspace_patterns(root_manifest.workspaces()) else {
    debug!(root = %root_path.display(), "single-package project");
    let root_package = PackageDescriptor::from_manifest(&root_manifest, &root_path, Some("unknown"))
      .ok_or_else(|| WorkspaceError::ManifestNotFound {
        path: root_manifest.path().to_path_buf(),
      })?;
    return Ok(WorkspaceInfo {
      is_multi_package: false,
      packages: vec![root_package],
      root_manifest: root_manifest.document().clone(),
      root_path,
    });
  };

  let config_invalid = || WorkspaceError::ConfigInvalid {
    path: root_manifest.path().to_path_buf(),
  };
  if patterns.is_empty() {
    return Err(config_invalid().into());
  }

  let matchers = patterns
    .iter()
    .map(|p| compile_pattern(p))
    .collect::<Result<Vec<_>, _>>()?;

  let mut packages = Vec::new();
  scan_directory(&root_path, &root_path, &matchers, 0, &mut packages);
  debug!(count = packages.len(), ?patterns, "workspace scan finished");

  if packages.is_empty() {
    // Nothing matched: the root itself is the only candidate
    let root_package = PackageDescriptor::from_manifest(&root_manifest, &root_path, None).ok_or_else(config_invalid)?;
    packages.push(root_package);
  }

  Ok(WorkspaceInfo {
    is_multi_package: true,
    packages,
    root_manifest: root_manifest.document().clone(),
    root_path,
  })
}

/// Patterns from `workspaces` (array form or `{ "packages": [...] }` form)
///
/// `None` means the project is not a workspace. Entries are trimmed with any
/// leading `./` and trailing `/` removed; blanks, non-strings and `!` exclusions
/// are dropped.
fn workspace_patterns(workspaces: Option<&Value>) -> Option<Vec<String>> {
  let list = match workspaces? {
    Value::Array(list) => list,
    Value::Object(obj) => obj.get("packages")?.as_array()?,
    _ => return None,
  };

  Some(
    list
      .iter()
      .filter_map(Value::as_str)
      .map(|p| p.trim().trim_start_matches("./").trim_end_matches('/'))
      .filter(|p| !p.is_empty() && !p.starts_with('!'))
      .map(str::to_string)
      .collect(),
  )
}

/// Compile a workspace glob to an anchored regex
///
/// `**` matches across separators, `*` within one path segment. Everything
/// else is literal.
fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
  let mut re = String::with_capacity(pattern.len() * 2 + 2);
  re.push('^');

  let mut chars = pattern.chars().peekable();
  while let Some(c) = chars.next() {
    if c == '*' {
      if chars.peek() == Some(&'*') {
        chars.next();
        re.push_str(".*");
      } else {
        re.push_str("[^/]*");
      }
    } else {
      re.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
    }
  }

  re.push('$');
  Regex::new(&re)
}

/// Root-relative path with `/` separators
fn relative_path(root: &Path, path: &Path) -> String {
  path
    .strip_prefix(root)
    .unwrap_or(path)
    .components()
    .map(|c| c.as_os_str().to_string_lossy())
    .collect::<Vec<_>>()
    .join("/")
}

fn scan_directory(
  root: &Path,
  dir: &Path,
  matchers: &[Regex],
  depth: usize,
  found: &mut Vec<PackageDescriptor>,
) {
  if depth > MAX_SCAN_DEPTH {
    return;
  }

  // Unreadable directories are skipped
  let Ok(entries) = fs::read_dir(dir) else {
    trace!(dir = %dir.display(), "unreadable, skipped");
    return;
  };

  let mut entries: Vec<_> = entries.filter_map(Result::ok).collect();
  entries.sort_by_key(|e| e.file_name());

  for entry in entries {
    let file_name = entry.file_name();
    let name = file_name.to_string_lossy();
    if name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref()) {
      continue;
    }

    let path = entry.path();
    if !fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false) {
      continue;
    }

    let relative = relative_path(root, &path);
    if matchers.iter().any(|m| m.is_match(&relative)) {
      // Package boundary: never descend further
      if let Ok(manifest) = Manifest::load(&path)
        && let Some(package) = PackageDescriptor::from_manifest(&manifest, &path, None)
      {
        trace!(name = %package.name, path = %relative, "found package");
        found.push(package);
      }
    } else {
      scan_directory(root, &path, matchers, depth + 1, found);
    }
  }
}
