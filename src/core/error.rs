//! Error types for npm-push with localized messages
//!
//! Every failure the release workflow can hit is a variant here. Errors carry the
//! data needed to explain themselves; the text comes from the translation tables so
//! the same error reads correctly in every supported locale. `Display` renders the
//! English text (used by logs and tests).

use crate::i18n::{Locale, Translator};
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Process exit code for any failure (success and user cancellation exit 0)
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Main error type for npm-push
#[derive(Debug)]
pub enum PushError {
  /// Version validation and bump errors
  Version(VersionError),

  /// Manifest / workspace discovery errors
  Workspace(WorkspaceError),

  /// Registry identity and publish errors
  Registry(RegistryError),

  /// Git tag errors
  Git(GitError),

  /// Package script errors
  Script(ScriptError),

  /// Configuration and argument errors
  Config(ConfigError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message { message: String, context: Option<String> },
}

impl PushError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    PushError::Message {
      message: msg.into(),
      context: None,
    }
  }

  /// Add context to an existing error
  ///
  /// Only free-form messages accumulate context; typed errors are returned as-is so
  /// callers can still match on them.
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      PushError::Message { message, context } => PushError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
      },
      PushError::Io(e) => PushError::Message {
        message: format!("{}: {}", ctx_str, e),
        context: None,
      },
      _ => self,
    }
  }

  /// True when the package is already live on the registry
  ///
  /// Only a tag push failure happens after publish; local state has been rolled back
  /// but the published artifact cannot be.
  pub fn is_post_publish(&self) -> bool {
    matches!(self, PushError::Git(GitError::TagPushFailed { .. }))
  }

  /// Render the error in the translator's locale
  pub fn localized(&self, tr: &Translator) -> String {
    match self {
      PushError::Version(e) => e.localized(tr),
      PushError::Workspace(e) => e.localized(tr),
      PushError::Registry(e) => e.localized(tr),
      PushError::Git(e) => e.localized(tr),
      PushError::Script(e) => e.localized(tr),
      PushError::Config(e) => e.localized(tr),
      PushError::Io(e) => tr.tf("common.ioError", &[("error", &e.to_string())]),
      PushError::Message { message, context } => match context {
        Some(ctx) => format!("{}\n{}", message, ctx),
        None => message.clone(),
      },
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self, tr: &Translator) -> Option<String> {
    match self {
      PushError::Registry(RegistryError::NotAuthenticated { registry }) => {
        Some(tr.tf("help.npmLogin", &[("registry", registry)]))
      }
      PushError::Git(GitError::RepoNotFound { .. }) => Some(tr.t("help.gitRepo")),
      PushError::Git(GitError::TagCreationFailed { tag, .. }) => Some(tr.tf("help.tagExists", &[("tag", tag)])),
      PushError::Git(GitError::TagPushFailed { tag, remote, .. }) => {
        Some(tr.tf("help.pushTagManually", &[("remote", remote), ("tag", tag)]))
      }
      PushError::Workspace(WorkspaceError::SelectionRequired { .. }) => Some(tr.t("help.selectPackage")),
      _ => None,
    }
  }
}

impl fmt::Display for PushError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.localized(&Translator::new(Locale::En)))
  }
}

impl std::error::Error for PushError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      PushError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for PushError {
  fn from(err: io::Error) -> Self {
    PushError::Io(err)
  }
}

impl From<serde_json::Error> for PushError {
  fn from(err: serde_json::Error) -> Self {
    PushError::message(format!("JSON error: {}", err))
  }
}

impl From<regex::Error> for PushError {
  fn from(err: regex::Error) -> Self {
    PushError::message(format!("Invalid workspace pattern: {}", err))
  }
}

impl From<VersionError> for PushError {
  fn from(err: VersionError) -> Self {
    PushError::Version(err)
  }
}

impl From<WorkspaceError> for PushError {
  fn from(err: WorkspaceError) -> Self {
    PushError::Workspace(err)
  }
}

impl From<RegistryError> for PushError {
  fn from(err: RegistryError) -> Self {
    PushError::Registry(err)
  }
}

impl From<GitError> for PushError {
  fn from(err: GitError) -> Self {
    PushError::Git(err)
  }
}

impl From<ScriptError> for PushError {
  fn from(err: ScriptError) -> Self {
    PushError::Script(err)
  }
}

impl From<ConfigError> for PushError {
  fn from(err: ConfigError) -> Self {
    PushError::Config(err)
  }
}

/// Human-readable exit indicator (`None` means killed by a signal or never started)
fn exit_label(exit_code: Option<i32>) -> String {
  match exit_code {
    Some(code) => code.to_string(),
    None => "signal".to_string(),
  }
}

/// Version policy errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
  /// Not a plain `major.minor.patch` version
  Invalid { version: String },

  /// The bump could not be computed
  Computation { current: String },
}

impl VersionError {
  fn localized(&self, tr: &Translator) -> String {
    match self {
      VersionError::Invalid { version } => tr.tf("version.invalidWithVersion", &[("version", version)]),
      VersionError::Computation { current } => {
        format!("{} ({})", tr.t("version.cannotGenerate"), current)
      }
    }
  }
}

/// Manifest and workspace discovery errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceError {
  /// Root package.json missing or unparsable
  ManifestNotFound { path: PathBuf },

  /// `workspaces` declared but yields no usable pattern
  ConfigInvalid { path: PathBuf },

  /// No package matches the requested name or path
  PackageNotFound { query: String },

  /// Several packages and none selected
  SelectionRequired { count: usize },
}

impl WorkspaceError {
  fn localized(&self, tr: &Translator) -> String {
    match self {
      WorkspaceError::ManifestNotFound { path } => {
        format!("{}: {}", tr.t("workspace.packageJsonNotFound"), path.display())
      }
      WorkspaceError::ConfigInvalid { path } => {
        format!("{}: {}", tr.t("workspace.workspacesConfigInvalid"), path.display())
      }
      WorkspaceError::PackageNotFound { query } => tr.tf("workspace.packageNotFoundByQuery", &[("query", query)]),
      WorkspaceError::SelectionRequired { count } => {
        tr.tf("workspace.monorepoRequiresPackage", &[("count", &count.to_string())])
      }
    }
  }
}

/// Registry identity and publish errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
  /// `whoami` reported no identity or an authorization failure
  NotAuthenticated { registry: String },

  /// `whoami` failed for any other reason
  AuthCheckFailed { registry: String, diagnostic: String },

  /// `publish` exited non-zero
  PublishFailed { registry: String, exit_code: Option<i32> },
}

impl RegistryError {
  fn localized(&self, tr: &Translator) -> String {
    match self {
      RegistryError::NotAuthenticated { registry } => tr.tf("publish.npmNotLoggedIn", &[("registry", registry)]),
      RegistryError::AuthCheckFailed { registry, diagnostic } => tr.tf(
        "publish.npmAuthCheckFailed",
        &[("registry", registry), ("error", diagnostic)],
      ),
      RegistryError::PublishFailed { exit_code, .. } => {
        tr.tf("publish.npmPublishFailed", &[("exitCode", &exit_label(*exit_code))])
      }
    }
  }
}

/// The artifact that reached the registry before a later step failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedPackage {
  pub name: String,
  pub version: String,
  pub registry: String,
}

/// Git tag errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitError {
  /// Not inside a git work tree
  RepoNotFound { path: PathBuf },

  /// `git tag` exited non-zero
  TagCreationFailed { tag: String, exit_code: Option<i32> },

  /// `git tag -d` exited non-zero during rollback
  TagDeletionFailed {
    tag: String,
    exit_code: Option<i32>,
    stderr: String,
  },

  /// `git push <remote> <tag>` exited non-zero after the package was published
  TagPushFailed {
    tag: String,
    remote: String,
    exit_code: Option<i32>,
    published: PublishedPackage,
  },
}

impl GitError {
  fn localized(&self, tr: &Translator) -> String {
    match self {
      GitError::RepoNotFound { path } => tr.tf("git.repoNotFound", &[("path", &path.display().to_string())]),
      GitError::TagCreationFailed { exit_code, .. } => {
        tr.tf("git.createTagFailed", &[("exitCode", &exit_label(*exit_code))])
      }
      GitError::TagDeletionFailed { tag, exit_code, stderr } => tr.tf(
        "git.deleteTagFailed",
        &[("tag", tag), ("exitCode", &exit_label(*exit_code)), ("stderr", stderr)],
      ),
      GitError::TagPushFailed {
        exit_code, published, ..
      } => format!(
        "{}\n{}",
        tr.tf("git.pushTagFailed", &[("exitCode", &exit_label(*exit_code))]),
        tr.tf(
          "publish.alreadyLive",
          &[
            ("packageName", &published.name),
            ("version", &published.version),
            ("registry", &published.registry),
          ],
        )
      ),
    }
  }
}

/// Package script errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
  /// Script name absent from the `scripts` map
  NotFound { name: String },

  /// Script exited non-zero
  ExecutionFailed { name: String, exit_code: Option<i32> },
}

impl ScriptError {
  fn localized(&self, tr: &Translator) -> String {
    match self {
      ScriptError::NotFound { name } => tr.tf("script.notFoundWithName", &[("name", name)]),
      ScriptError::ExecutionFailed { name, exit_code } => format!(
        "{} ({})",
        tr.tf("script.executionFailed", &[("exitCode", &exit_label(*exit_code))]),
        name
      ),
    }
  }
}

/// Configuration and argument errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
  /// Config file unreadable or invalid
  Invalid { path: PathBuf, reason: String },

  /// OTP is not six digits
  InvalidOtp,

  /// Registry is not a usable URL
  InvalidRegistry { url: String },

  /// Unknown locale code
  UnsupportedLocale { code: String },
}

impl ConfigError {
  fn localized(&self, tr: &Translator) -> String {
    match self {
      ConfigError::Invalid { path, reason } => tr.tf(
        "config.invalid",
        &[("path", &path.display().to_string()), ("reason", reason)],
      ),
      ConfigError::InvalidOtp => tr.t("publish.otpInvalid"),
      ConfigError::InvalidRegistry { url } => format!("{}: {}", tr.t("registry.invalid"), url),
      ConfigError::UnsupportedLocale { code } => tr.tf("config.unsupportedLocale", &[("code", code)]),
    }
  }
}

/// Result type alias for npm-push
pub type PushResult<T> = Result<T, PushError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> PushResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> PushResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<PushError>,
{
  fn context(self, ctx: impl Into<String>) -> PushResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> PushResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &PushError, tr: &Translator) {
  eprintln!("\n❌ {}: {}\n", tr.t("publish.error"), error.localized(tr));

  if let Some(help) = error.help_message(tr) {
    eprintln!("💡 {}: {}\n", tr.t("common.help"), help);
  }
}
