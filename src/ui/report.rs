//! Terminal output for the publish workflow
//!
//! Everything here writes human-readable, localized text. Diagnostics go through
//! `tracing`; this module is only what the operator is meant to read.

use crate::core::error::print_error;
use crate::i18n::Translator;
use crate::release::transaction::{ReleaseConfig, ReleaseFailure, ReleaseOutcome, RollbackReport};
use crate::release::version::BumpKind;
use crate::release::workspace::WorkspaceInfo;
use std::path::Path;

fn row(label: &str, value: impl AsRef<str>) {
  println!("  {:<22} {}", format!("{}:", label), value.as_ref());
}

/// Release settings shown before confirmation
pub fn print_preview(tr: &Translator, config: &ReleaseConfig, bump: Option<BumpKind>) {
  println!();
  println!("📋 {}", tr.t("publish.preview"));
  println!();
  row(&tr.t("publish.packageName"), &config.package.name);
  row(&tr.t("publish.currentVersion"), &config.package.version);
  row(&tr.t("publish.newVersion"), &config.new_version);
  if let Some(bump) = bump {
    row(&tr.t("publish.releaseType"), format!("{} ({})", bump, bump.describe(tr)));
  }
  row(&tr.t("publish.registry"), &config.registry);
  row(&tr.t("publish.pushTag"), tr.yes_no(config.push_tag));
  if config.push_tag {
    row(&tr.t("publish.tag"), format!("{} → {}", config.tag, config.remote));
  }
  row(&tr.t("publish.generateChangelog"), tr.yes_no(config.generate_changelog));
  if let Some(script) = &config.script {
    row(&tr.t("publish.script"), script);
  }
  if config.otp.is_some() {
    row(&tr.t("publish.otp"), "***");
  }

  println!();
  println!("  {}:", tr.t("publish.changelog"));
  for line in config.changelog_text.lines() {
    println!("    {}", line);
  }
  println!();
}

/// Summary after a successful publish
pub fn print_success(tr: &Translator, outcome: &ReleaseOutcome) {
  println!();
  println!("🎉 {}", tr.t("success.title"));
  println!();
  row(&tr.t("success.packageName"), &outcome.package_name);
  row(&tr.t("success.version"), &outcome.version);
  row(&tr.t("success.registry"), &outcome.registry);
  if let Some(tag) = &outcome.tag {
    row(&tr.t("success.tag"), tag);
  }
  row(&tr.t("success.publisher"), &outcome.publisher);
  println!();
  println!("{}", tr.t("success.thanks"));
}

/// Full failure report
///
/// Rollback status comes first, then the error itself, then any compensation
/// that failed.
pub fn print_release_failure(tr: &Translator, failure: &ReleaseFailure) {
  if let Some(report) = &failure.rollback {
    print_rollback_summary(tr, report);
  }

  print_error(&failure.error, tr);

  if let Some(report) = &failure.rollback {
    print_rollback_warnings(tr, report);
  }
}

fn print_rollback_summary(tr: &Translator, report: &RollbackReport) {
  eprintln!();
  eprintln!("↩️  {}", tr.t("publish.rollingBack"));
  for step in &report.steps {
    let mark = if step.error.is_none() { "✅" } else { "⚠️ " };
    eprintln!("  {} {}", mark, step.action.describe(tr));
  }
  if report.is_complete() {
    eprintln!("✅ {}", tr.t("publish.rollbackComplete"));
  } else {
    eprintln!("⚠️  {}", tr.t("publish.rollbackPartial"));
  }
}

fn print_rollback_warnings(tr: &Translator, report: &RollbackReport) {
  for step in report.failures() {
    if let Some(error) = &step.error {
      eprintln!(
        "⚠️  {}",
        tr.tf(
          "publish.rollbackStepFailed",
          &[("step", &step.action.describe(tr)), ("error", &error.localized(tr))],
        )
      );
    }
  }
}

/// Human-readable workspace listing
pub fn print_workspace(tr: &Translator, workspace: &WorkspaceInfo) {
  let kind = if workspace.is_multi_package {
    tr.t("workspace.multiPackage")
  } else {
    tr.t("workspace.singlePackage")
  };
  println!("📦 {} ({})", kind, workspace.packages.len());
  println!("   {}: {}", tr.t("workspace.root"), workspace.root_path.display());
  println!();

  for package in &workspace.packages {
    println!(
      "  {}@{}  {}",
      package.name,
      package.version,
      display_relative(&workspace.root_path, &package.path)
    );
  }
}

fn display_relative(root: &Path, path: &Path) -> String {
  match path.strip_prefix(root) {
    Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
    Ok(rel) => rel.display().to_string(),
    Err(_) => path.display().to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_display_relative() {
    let root = Path::new("/repo");
    assert_eq!(display_relative(root, Path::new("/repo")), ".");
    assert_eq!(display_relative(root, Path::new("/repo/packages/a")), "packages/a");
    assert_eq!(display_relative(root, Path::new("/elsewhere")), "/elsewhere");
  }
}
