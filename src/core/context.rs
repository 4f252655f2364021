//! Per-invocation project context
//!
//! Built once in `main` and passed by reference to the command that runs:
//!
//! ```text
//! main.rs:
//!   ProjectContext::build() -> &ProjectContext
//!   |
//!   v
//! commands/publish.rs, list.rs:
//!   fn run(ctx: &ProjectContext, ...)
//! ```

use crate::core::config::PushConfig;
use crate::core::error::PushResult;
use crate::i18n::{Locale, Translator};
use crate::release::workspace::{self, WorkspaceInfo};
use std::path::{Path, PathBuf};

/// Root, configuration, resolved workspace and output language
#[derive(Debug, Clone)]
pub struct ProjectContext {
  /// Project root (where the root package.json lives)
  pub root: PathBuf,

  /// npm-push.toml, or defaults
  pub config: PushConfig,

  pub workspace: WorkspaceInfo,

  pub translator: Translator,
}

impl ProjectContext {
  /// Load config, pick the locale and resolve the workspace under `root`
  pub fn build(root: &Path, lang: Option<Locale>) -> PushResult<Self> {
    let config = PushConfig::load(root)?;
    let translator = Translator::new(pick_locale(lang, Some(&config)));
    let workspace = workspace::resolve(root)?;

    Ok(Self {
      root: root.to_path_buf(),
      config,
      workspace,
      translator,
    })
  }

  /// Best translator available when `build` itself failed
  pub fn fallback_translator(root: &Path, lang: Option<Locale>) -> Translator {
    let config = PushConfig::load(root).ok();
    Translator::new(pick_locale(lang, config.as_ref()))
  }
}

/// `--lang` > config `lang` > environment > English
fn pick_locale(flag: Option<Locale>, config: Option<&PushConfig>) -> Locale {
  flag
    .or_else(|| config.and_then(|c| c.locale().ok().flatten()))
    .unwrap_or_else(Locale::detect)
}
