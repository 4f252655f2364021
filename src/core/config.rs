use crate::core::error::{ConfigError, PushResult, ResultExt};
use crate::i18n::Locale;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Registry used when neither the config file nor the CLI names one
pub const DEFAULT_REGISTRY: &str = "https://registry.npmjs.org/";

/// Remote tags are pushed to by default
pub const DEFAULT_REMOTE: &str = "origin";

/// Configuration for npm-push
/// Searched in order: npm-push.toml, .npm-push.toml, .config/npm-push.toml
///
/// Every key is optional; CLI flags override file values.
///
/// ```toml
/// registry = "https://npm.example.com/"
/// remote = "upstream"
/// push_tag = true
/// generate_changelog = true
/// lang = "ja"
/// npm = "npm"
/// script_runner = "pnpm"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PushConfig {
  #[serde(default)]
  pub registry: Option<String>,

  #[serde(default)]
  pub remote: Option<String>,

  #[serde(default)]
  pub push_tag: Option<bool>,

  #[serde(default)]
  pub generate_changelog: Option<bool>,

  /// Output language (`zh`, `en`, `ja`, `ko`)
  #[serde(default)]
  pub lang: Option<String>,

  /// Registry client executable
  #[serde(default)]
  pub npm: Option<String>,

  /// Executable used as `<runner> run <script>`
  #[serde(default)]
  pub script_runner: Option<String>,
}

impl PushConfig {
  /// Find config file in search order: npm-push.toml, .npm-push.toml, .config/npm-push.toml
  pub fn find_config_path(path: &Path) -> Option<PathBuf> {
    let candidates = [
      path.join("npm-push.toml"),
      path.join(".npm-push.toml"),
      path.join(".config").join("npm-push.toml"),
    ];

    candidates.into_iter().find(|p| p.is_file())
  }

  /// Load the config for a project root, or defaults when no file exists
  pub fn load(path: &Path) -> PushResult<Self> {
    let Some(config_path) = Self::find_config_path(path) else {
      return Ok(Self::default());
    };

    let content = fs::read_to_string(&config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
    let config: PushConfig = toml_edit::de::from_str(&content).map_err(|e| ConfigError::Invalid {
      path: config_path.clone(),
      reason: e.to_string().trim().to_string(),
    })?;

    config.locale().map_err(|_| ConfigError::Invalid {
      path: config_path.clone(),
      reason: format!("unsupported lang '{}'", config.lang.as_deref().unwrap_or_default()),
    })?;

    tracing::debug!(path = %config_path.display(), "loaded config");
    Ok(config)
  }

  /// The configured locale, if any
  pub fn locale(&self) -> Result<Option<Locale>, ConfigError> {
    match &self.lang {
      None => Ok(None),
      Some(code) => Locale::from_code(code)
        .map(Some)
        .ok_or_else(|| ConfigError::UnsupportedLocale { code: code.clone() }),
    }
  }

  pub fn registry(&self) -> &str {
    self.registry.as_deref().unwrap_or(DEFAULT_REGISTRY)
  }

  pub fn remote(&self) -> &str {
    self.remote.as_deref().unwrap_or(DEFAULT_REMOTE)
  }

  pub fn push_tag(&self) -> bool {
    self.push_tag.unwrap_or(false)
  }

  pub fn generate_changelog(&self) -> bool {
    self.generate_changelog.unwrap_or(false)
  }

  pub fn npm(&self) -> &str {
    self.npm.as_deref().unwrap_or("npm")
  }

  pub fn script_runner(&self) -> &str {
    self.script_runner.as_deref().unwrap_or("npm")
  }
}
