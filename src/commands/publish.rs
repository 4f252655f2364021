//! `npm-push publish`
//!
//! Shows the release preview, asks for confirmation, runs the optional script,
//! then hands off to the release transaction through `api`.

use crate::api::{self, PublishOptions};
use crate::core::context::ProjectContext;
use crate::core::error::{FAILURE_EXIT_CODE, PushResult};
use crate::i18n::Translator;
use crate::release::scripts;
use crate::ui::report;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Flags for `publish`, already resolved from the command line
#[derive(Debug, Clone, Default)]
pub struct PublishArgs {
  pub options: PublishOptions,
  pub yes: bool,
  pub dry_run: bool,
}

/// Run the publish command
pub fn run_publish(ctx: &ProjectContext, args: PublishArgs) -> PushResult<()> {
  let tr = &ctx.translator;
  let options = &args.options;
  let config = api::release_config(ctx, options)?;
  if ctx.workspace.is_multi_package {
    println!("📦 {}: {}", tr.t("package.selectedPackage"), config.package.name);
  }
  if options.changelog.is_empty() {
    println!("ℹ️  {}", tr.t("changelog.usingDefault"));
  }

  let bump = options.new_version.is_none().then(|| options.bump.unwrap_or_default());
  report::print_preview(tr, &config, bump);

  if args.dry_run {
    println!("🔍 {}", tr.t("publish.dryRun"));
    return Ok(());
  }

  if !args.yes && !confirm(tr)? {
    println!("{}", tr.t("publish.cancelled"));
    return Ok(());
  }

  // Scripts run before any mutation, so a failure needs no rollback
  if let Some(script) = &config.script {
    println!("▶️  {}: {}", tr.t("script.running"), script);
    scripts::run_script(&config.package, script, ctx.config.script_runner())?;
    println!("✅ {}", tr.t("script.success"));
  }

  println!("🚀 {}", tr.t("publish.publishing"));
  match api::execute(ctx, &config) {
    Ok(outcome) => {
      report::print_success(tr, &outcome);
      Ok(())
    }
    Err(failure) => {
      debug!(stage = %failure.stage, rolled_back = failure.rollback.is_some(), "release aborted");
      if failure.error.is_post_publish() {
        warn!(package = %config.package.name, version = %config.new_version, "published, but the tag push failed");
      }
      report::print_release_failure(tr, &failure);
      std::process::exit(FAILURE_EXIT_CODE);
    }
  }
}

/// `y/N` prompt on stdin
fn confirm(tr: &Translator) -> PushResult<bool> {
  print!("❓ {} ", tr.t("publish.confirm"));
  io::stdout().flush()?;

  let mut answer = String::new();
  io::stdin().lock().read_line(&mut answer)?;
  Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
  matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
