//! The publish transaction
//!
//! Forward steps, strictly in order:
//!
//! ```text
//! Init -> VersionUpdated -> ChangelogUpdated? -> AuthVerified
//!      -> TagCreated? -> Published -> TagPushed? -> Done
//! ```
//!
//! Each step that mutates local state registers a compensating action first.
//! On failure the registered actions run in reverse order, each one best-effort:
//! a failing compensation is logged and recorded in the `RollbackReport`, and the
//! next one still runs. The error that triggered the rollback is returned
//! unchanged next to the report.
//!
//! Rollback is local-only. Once `Published` is reached the package is live on the
//! registry; a later tag push failure still restores the manifest, changelog and
//! local tag, and the returned `TagPushFailed` error says the package is live.

use crate::core::error::{GitError, PublishedPackage, PushError, PushResult, RegistryError};
use crate::core::vcs::TagOps;
use crate::i18n::Translator;
use crate::release::registry::{self, Registry};
use crate::release::workspace::PackageDescriptor;
use crate::release::{changelog, manifest};
use std::fmt;
use std::path::Path;
use tracing::{info, warn};

/// Everything the transaction needs, resolved up front
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseConfig {
  pub package: PackageDescriptor,
  /// Raw release notes
  pub changelog_text: String,
  pub new_version: String,
  pub tag: String,
  /// Run by the caller before the transaction starts
  pub script: Option<String>,
  pub push_tag: bool,
  pub remote: String,
  pub registry: String,
  pub generate_changelog: bool,
  pub otp: Option<String>,
}

/// Last stage the transaction completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
  Init,
  VersionUpdated,
  ChangelogUpdated,
  AuthVerified,
  TagCreated,
  Published,
  TagPushed,
  Done,
}

impl fmt::Display for Stage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Stage::Init => "init",
      Stage::VersionUpdated => "version-updated",
      Stage::ChangelogUpdated => "changelog-updated",
      Stage::AuthVerified => "auth-verified",
      Stage::TagCreated => "tag-created",
      Stage::Published => "published",
      Stage::TagPushed => "tag-pushed",
      Stage::Done => "done",
    };
    f.write_str(name)
  }
}

/// State captured before the first mutation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionSnapshot {
  /// `None` when the manifest had no `version` field
  pub original_version: Option<String>,
  /// `None` when CHANGELOG.md did not exist (or was not going to be touched)
  pub original_changelog: Option<String>,
  pub tag_was_created: bool,
}

/// Undo for one forward step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compensation {
  RestoreVersion { original: Option<String> },
  RestoreChangelog { original: Option<String> },
  DeleteTag { tag: String },
}

impl Compensation {
  /// Localized description for rollback reporting
  pub fn describe(&self, tr: &Translator) -> String {
    match self {
      Compensation::RestoreVersion { original: Some(version) } => {
        tr.tf("rollback.restoreVersion", &[("version", version)])
      }
      Compensation::RestoreVersion { original: None } => tr.t("rollback.removeVersion"),
      Compensation::RestoreChangelog { original: Some(_) } => tr.t("rollback.restoreChangelog"),
      Compensation::RestoreChangelog { original: None } => tr.t("rollback.removeChangelog"),
      Compensation::DeleteTag { tag } => tr.tf("rollback.deleteTag", &[("tag", tag)]),
    }
  }

  fn apply(&self, package_dir: &Path, git: &dyn TagOps) -> PushResult<()> {
    match self {
      Compensation::RestoreVersion { original } => manifest::write_version(package_dir, original.as_deref()),
      Compensation::RestoreChangelog { original } => changelog::restore(package_dir, original.as_deref()),
      Compensation::DeleteTag { tag } => {
        let output = git.delete_tag(tag)?;
        if output.success() {
          Ok(())
        } else {
          Err(
            GitError::TagDeletionFailed {
              tag: tag.clone(),
              exit_code: output.exit_code,
              stderr: output.stderr.trim().to_string(),
            }
            .into(),
          )
        }
      }
    }
  }
}

/// Outcome of one compensating action
#[derive(Debug)]
pub struct RollbackStep {
  pub action: Compensation,
  pub error: Option<PushError>,
}

/// Every compensating action that ran, in execution order
#[derive(Debug, Default)]
pub struct RollbackReport {
  pub steps: Vec<RollbackStep>,
}

impl RollbackReport {
  /// True when every compensation succeeded
  pub fn is_complete(&self) -> bool {
    self.steps.iter().all(|s| s.error.is_none())
  }

  pub fn failures(&self) -> impl Iterator<Item = &RollbackStep> {
    self.steps.iter().filter(|s| s.error.is_some())
  }
}

/// A successful release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseOutcome {
  pub package_name: String,
  pub version: String,
  pub registry: String,
  /// Set when the tag was created and pushed
  pub tag: Option<String>,
  /// Identity reported by the registry
  pub publisher: String,
}

/// A failed release: the triggering error plus what rollback did
#[derive(Debug)]
pub struct ReleaseFailure {
  pub error: PushError,
  /// Last stage completed before the failure
  pub stage: Stage,
  /// `None` when nothing had been mutated yet
  pub rollback: Option<RollbackReport>,
}

/// A failure before the transaction started: nothing to roll back
impl From<PushError> for ReleaseFailure {
  fn from(error: PushError) -> Self {
    Self {
      error,
      stage: Stage::Init,
      rollback: None,
    }
  }
}

impl From<ReleaseFailure> for PushError {
  fn from(failure: ReleaseFailure) -> Self {
    failure.error
  }
}

/// Runs one release against a tag backend and a registry
pub struct ReleaseTransaction<'a> {
  config: &'a ReleaseConfig,
  git: &'a dyn TagOps,
  registry: &'a dyn Registry,
  tr: &'a Translator,
  stage: Stage,
  snapshot: TransactionSnapshot,
  compensations: Vec<Compensation>,
}

impl<'a> ReleaseTransaction<'a> {
  pub fn new(config: &'a ReleaseConfig, git: &'a dyn TagOps, registry: &'a dyn Registry, tr: &'a Translator) -> Self {
    Self {
      config,
      git,
      registry,
      tr,
      stage: Stage::Init,
      snapshot: TransactionSnapshot::default(),
      compensations: Vec::new(),
    }
  }

  /// Run to a terminal state
  ///
  /// There is no cancellation once started. On failure, local mutations are
  /// rolled back before this returns.
  pub fn execute(mut self) -> Result<ReleaseOutcome, ReleaseFailure> {
    match self.run() {
      Ok(outcome) => {
        self.advance(Stage::Done);
        Ok(outcome)
      }
      Err(error) => {
        warn!(stage = %self.stage, %error, "release failed");
        let rollback = (!self.compensations.is_empty()).then(|| self.rollback());
        Err(ReleaseFailure {
          error,
          stage: self.stage,
          rollback,
        })
      }
    }
  }

  fn advance(&mut self, stage: Stage) {
    info!(package = %self.config.package.name, from = %self.stage, to = %stage, "stage");
    self.stage = stage;
  }

  fn run(&mut self) -> PushResult<ReleaseOutcome> {
    let config = self.config;
    let dir = config.package.path.as_path();

    // Snapshot: nothing has been touched if this fails
    self.snapshot.original_version = manifest::read_version(dir)?;
    if config.generate_changelog {
      self.snapshot.original_changelog = changelog::snapshot(dir)?;
    }

    self.compensations.push(Compensation::RestoreVersion {
      original: self.snapshot.original_version.clone(),
    });
    manifest::write_version(dir, Some(&config.new_version))?;
    self.advance(Stage::VersionUpdated);

    if config.generate_changelog {
      self.compensations.push(Compensation::RestoreChangelog {
        original: self.snapshot.original_changelog.clone(),
      });
      changelog::update(dir, &config.new_version, &config.changelog_text, self.tr)?;
      self.advance(Stage::ChangelogUpdated);
    }

    let publisher = registry::check_auth(self.registry, &config.registry)?;
    self.advance(Stage::AuthVerified);

    if config.push_tag {
      self.create_tag()?;
      self.advance(Stage::TagCreated);
    }

    self.publish()?;
    self.advance(Stage::Published);

    if config.push_tag {
      self.push_tag()?;
      self.advance(Stage::TagPushed);
    }

    Ok(ReleaseOutcome {
      package_name: config.package.name.clone(),
      version: config.new_version.clone(),
      registry: config.registry.clone(),
      tag: config.push_tag.then(|| config.tag.clone()),
      publisher,
    })
  }

  fn create_tag(&mut self) -> PushResult<()> {
    let tag = &self.config.tag;
    let exit_code = match self.git.create_tag(tag) {
      Ok(output) if output.success() => {
        self.snapshot.tag_was_created = true;
        self.compensations.push(Compensation::DeleteTag { tag: tag.clone() });
        return Ok(());
      }
      Ok(output) => {
        warn!(tag = %tag, stderr = %output.stderr.trim(), "git tag failed");
        output.exit_code
      }
      Err(e) => {
        warn!(tag = %tag, error = %e, "could not run git tag");
        None
      }
    };

    Err(
      GitError::TagCreationFailed {
        tag: tag.clone(),
        exit_code,
      }
      .into(),
    )
  }

  fn publish(&self) -> PushResult<()> {
    let config = self.config;
    let output = self
      .registry
      .publish(&config.package.path, &config.registry, config.otp.as_deref());

    let exit_code = match output {
      Ok(output) if output.success() => return Ok(()),
      Ok(output) => output.exit_code,
      Err(e) => {
        warn!(error = %e, "could not run publish");
        None
      }
    };

    Err(
      RegistryError::PublishFailed {
        registry: config.registry.clone(),
        exit_code,
      }
      .into(),
    )
  }

  fn push_tag(&self) -> PushResult<()> {
    let config = self.config;
    let exit_code = match self.git.push_tag(&config.remote, &config.tag) {
      Ok(output) if output.success() => return Ok(()),
      Ok(output) => {
        warn!(tag = %config.tag, remote = %config.remote, stderr = %output.stderr.trim(), "git push failed");
        output.exit_code
      }
      Err(e) => {
        warn!(tag = %config.tag, error = %e, "could not run git push");
        None
      }
    };

    Err(
      GitError::TagPushFailed {
        tag: config.tag.clone(),
        remote: config.remote.clone(),
        exit_code,
        published: PublishedPackage {
          name: config.package.name.clone(),
          version: config.new_version.clone(),
          registry: config.registry.clone(),
        },
      }
      .into(),
    )
  }

  /// Run registered compensations newest first; never fails
  fn rollback(&mut self) -> RollbackReport {
    let config = self.config;
    let dir = config.package.path.as_path();
    let mut report = RollbackReport::default();

    info!(
      original_version = ?self.snapshot.original_version,
      changelog_existed = self.snapshot.original_changelog.is_some(),
      tag_was_created = self.snapshot.tag_was_created,
      "rolling back"
    );

    while let Some(action) = self.compensations.pop() {
      let error = action.apply(dir, self.git).err();
      match &error {
        None => info!(action = ?action, "rolled back"),
        Some(e) => warn!(action = ?action, error = %e, "rollback step failed"),
      }
      report.steps.push(RollbackStep { action, error });
    }

    report
  }
}
