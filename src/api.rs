//! Programmatic entry points
//!
//! The release the `publish` command performs, without a terminal: no preview,
//! no prompt, nothing printed. Progress is reported through `tracing` only.
//!
//! ```no_run
//! use npm_push::{NpmPush, PublishOptions};
//! use std::path::Path;
//!
//! let push = NpmPush::open(Path::new("."))?;
//! for package in push.packages() {
//!   println!("{}@{}", package.name, package.version);
//! }
//!
//! let options = PublishOptions {
//!   package: Some("@acme/widget".to_string()),
//!   changelog: vec!["Fixed: crash on start".to_string()],
//!   ..Default::default()
//! };
//! match push.publish(&options) {
//!   Ok(outcome) => println!("published {}@{}", outcome.package_name, outcome.version),
//!   Err(failure) => eprintln!("{} (rolled back: {})", failure.error, failure.rollback.is_some()),
//! }
//! # Ok::<(), npm_push::PushError>(())
//! ```

use crate::core::context::ProjectContext;
use crate::core::error::{PushResult, ResultExt, ScriptError, VersionError};
use crate::core::vcs::SystemGit;
use crate::i18n::Locale;
use crate::release::registry::{self, NpmRegistry};
use crate::release::transaction::{ReleaseConfig, ReleaseFailure, ReleaseOutcome, ReleaseTransaction};
use crate::release::version::{self, BumpKind};
use crate::release::workspace::{PackageDescriptor, WorkspaceInfo};
use crate::release::scripts;
use std::path::Path;
use tracing::info;

/// What to release; anything left `None` comes from npm-push.toml, then the defaults
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishOptions {
  /// Package name or directory (required when the workspace has several packages)
  pub package: Option<String>,
  /// Ignored when `new_version` is set [default: patch]
  pub bump: Option<BumpKind>,
  pub new_version: Option<String>,
  /// Release notes, one entry per line
  pub changelog: Vec<String>,
  pub tag: Option<String>,
  pub script: Option<String>,
  pub push_tag: Option<bool>,
  pub generate_changelog: Option<bool>,
  pub registry: Option<String>,
  pub otp: Option<String>,
  pub remote: Option<String>,
}

/// A resolved project, ready to list or release its packages
#[derive(Debug, Clone)]
pub struct NpmPush {
  ctx: ProjectContext,
}

impl NpmPush {
  /// Resolve the project rooted at `root`
  pub fn open(root: &Path) -> PushResult<Self> {
    Self::open_with_locale(root, None)
  }

  /// Like `open`, with an explicit language for error text
  pub fn open_with_locale(root: &Path, lang: Option<Locale>) -> PushResult<Self> {
    Ok(Self::from_context(ProjectContext::build(root, lang)?))
  }

  pub fn from_context(ctx: ProjectContext) -> Self {
    Self { ctx }
  }

  pub fn context(&self) -> &ProjectContext {
    &self.ctx
  }

  pub fn workspace(&self) -> &WorkspaceInfo {
    &self.ctx.workspace
  }

  /// Packages in discovery order
  pub fn packages(&self) -> &[PackageDescriptor] {
    &self.ctx.workspace.packages
  }

  /// Look a package up by name, then by directory
  pub fn find_package(&self, query: &str) -> Option<&PackageDescriptor> {
    self.ctx.workspace.select(Some(query)).ok()
  }

  /// The validated release `options` describe, without running anything
  pub fn release_config(&self, options: &PublishOptions) -> PushResult<ReleaseConfig> {
    release_config(&self.ctx, options)
  }

  /// Validate, run the script (if any), then run the release transaction
  ///
  /// Failures before the transaction starts come back with `rollback: None`.
  pub fn publish(&self, options: &PublishOptions) -> Result<ReleaseOutcome, ReleaseFailure> {
    let config = self.release_config(options)?;
    if let Some(script) = &config.script {
      scripts::run_script(&config.package, script, self.ctx.config.script_runner())?;
    }
    execute(&self.ctx, &config)
  }
}

/// Release one package of the project at `root`
pub fn publish(root: &Path, options: &PublishOptions) -> Result<ReleaseOutcome, ReleaseFailure> {
  NpmPush::open(root)?.publish(options)
}

/// Select the package, then merge options, config file and defaults
///
/// Everything is validated here, before any mutation.
pub fn release_config(ctx: &ProjectContext, options: &PublishOptions) -> PushResult<ReleaseConfig> {
  let package = ctx.workspace.select(options.package.as_deref())?.clone();
  build_release_config(ctx, package, options)
}

/// Run the release transaction against system git and the configured npm client
pub fn execute(ctx: &ProjectContext, config: &ReleaseConfig) -> Result<ReleaseOutcome, ReleaseFailure> {
  let git = if config.push_tag {
    SystemGit::open(&config.package.path)?
  } else {
    SystemGit::at(&config.package.path)
  };
  let npm = NpmRegistry::new(ctx.config.npm());

  info!(package = %config.package.name, version = %config.new_version, "starting release");
  ReleaseTransaction::new(config, &git, &npm, &ctx.translator).execute()
}

fn build_release_config(
  ctx: &ProjectContext,
  package: PackageDescriptor,
  options: &PublishOptions,
) -> PushResult<ReleaseConfig> {
  let tr = &ctx.translator;

  let registry = options.registry.clone().unwrap_or_else(|| ctx.config.registry().to_string());
  registry::validate_registry(&registry)?;

  if let Some(otp) = &options.otp {
    registry::validate_otp(otp)?;
  }

  let new_version = match &options.new_version {
    Some(v) if version::is_valid_version(v) => v.clone(),
    Some(v) => return Err(VersionError::Invalid { version: v.clone() }.into()),
    None => version::next_version(&package.version, options.bump.unwrap_or_default())
      .with_context(|| format!("Cannot bump {}@{}", package.name, package.version))?,
  };

  if let Some(script) = &options.script
    && !scripts::package_scripts(&package).contains(script)
  {
    return Err(ScriptError::NotFound { name: script.clone() }.into());
  }

  let changelog_text = if options.changelog.is_empty() {
    tr.tf(
      "changelog.defaultContent",
      &[("currentVersion", &package.version), ("newVersion", &new_version)],
    )
  } else {
    options.changelog.join("\n")
  };

  let tag = options
    .tag
    .clone()
    .unwrap_or_else(|| version::derive_tag(&package.name, &new_version));

  Ok(ReleaseConfig {
    changelog_text,
    new_version,
    tag,
    script: options.script.clone(),
    push_tag: options.push_tag.unwrap_or_else(|| ctx.config.push_tag()),
    remote: options.remote.clone().unwrap_or_else(|| ctx.config.remote().to_string()),
    registry,
    generate_changelog: options
      .generate_changelog
      .unwrap_or_else(|| ctx.config.generate_changelog()),
    otp: options.otp.clone(),
    package,
  })
}
