//! Version policy: validation, bumps and tag names
//!
//! Only plain `major.minor.patch` versions are accepted. Pre-release and build
//! metadata are rejected so tags stay unambiguous git ref names.

use crate::core::error::VersionError;
use crate::i18n::Translator;
use std::fmt;

/// Which component of the version to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BumpKind {
  /// Bug fixes
  #[default]
  Patch,
  /// New features, backwards compatible
  Minor,
  /// Breaking changes
  Major,
}

impl BumpKind {
  pub fn as_str(self) -> &'static str {
    match self {
      BumpKind::Patch => "patch",
      BumpKind::Minor => "minor",
      BumpKind::Major => "major",
    }
  }

  /// Localized one-line description for previews
  pub fn describe(self, tr: &Translator) -> String {
    tr.t(match self {
      BumpKind::Patch => "version.patch",
      BumpKind::Minor => "version.minor",
      BumpKind::Major => "version.major",
    })
  }

  /// Apply bump to a semver version
  fn apply(self, version: &semver::Version) -> Option<semver::Version> {
    let bumped = match self {
      BumpKind::Major => semver::Version::new(version.major.checked_add(1)?, 0, 0),
      BumpKind::Minor => semver::Version::new(version.major, version.minor.checked_add(1)?, 0),
      BumpKind::Patch => semver::Version::new(version.major, version.minor, version.patch.checked_add(1)?),
    };
    Some(bumped)
  }
}

impl fmt::Display for BumpKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// True for exactly `major.minor.patch` with canonical numeric components
pub fn is_valid_version(version: &str) -> bool {
  let parts: Vec<&str> = version.split('.').collect();
  if parts.len() != 3 || parts.iter().any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit())) {
    return false;
  }

  // semver catches overflow and leading zeros; the canonical form must match verbatim
  match semver::Version::parse(version) {
    Ok(parsed) => parsed.to_string() == version,
    Err(_) => false,
  }
}

/// Compute the version after applying `kind` to `current`
pub fn next_version(current: &str, kind: BumpKind) -> Result<String, VersionError> {
  if !is_valid_version(current) {
    return Err(VersionError::Invalid {
      version: current.to_string(),
    });
  }

  let parsed = semver::Version::parse(current).map_err(|_| VersionError::Invalid {
    version: current.to_string(),
  })?;

  kind
    .apply(&parsed)
    .map(|v| v.to_string())
    .ok_or_else(|| VersionError::Computation {
      current: current.to_string(),
    })
}

/// Tag name for a release: `<name>@<version>` with any `@scope/` prefix removed
pub fn derive_tag(package_name: &str, version: &str) -> String {
  let bare = match package_name.split_once('/') {
    Some((scope, rest)) if scope.starts_with('@') => rest,
    _ => package_name,
  };
  format!("{}@{}", bare, version)
}
