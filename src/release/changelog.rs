//! CHANGELOG.md handling
//!
//! Free-text release notes are parsed into categorized entries, rendered as a
//! Keep a Changelog style section, and merged above the newest existing version
//! section. Category labels are recognized in every supported locale but always
//! rendered in the active one.

use crate::core::error::{PushResult, ResultExt};
use crate::i18n::{Locale, Translator};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Keep a Changelog categories, in rendering order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
  Added,
  Changed,
  Deprecated,
  Removed,
  Fixed,
  Security,
}

impl Category {
  pub const ALL: [Category; 6] = [
    Category::Added,
    Category::Changed,
    Category::Deprecated,
    Category::Removed,
    Category::Fixed,
    Category::Security,
  ];

  fn key(self) -> &'static str {
    match self {
      Category::Added => "changelogTypes.added",
      Category::Changed => "changelogTypes.changed",
      Category::Deprecated => "changelogTypes.deprecated",
      Category::Removed => "changelogTypes.removed",
      Category::Fixed => "changelogTypes.fixed",
      Category::Security => "changelogTypes.security",
    }
  }

  /// Label in the translator's locale
  pub fn label(self, tr: &Translator) -> String {
    tr.t(self.key())
  }
}

/// One line of release notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
  pub category: Category,
  pub description: String,
}

impl ChangelogEntry {
  fn new(category: Category, description: &str) -> Self {
    Self {
      category,
      description: description.to_string(),
    }
  }
}

pub fn changelog_path(package_dir: &Path) -> PathBuf {
  package_dir.join(CHANGELOG_FILE)
}

/// Current contents, or an empty string when absent or unreadable
pub fn read(package_dir: &Path) -> String {
  fs::read_to_string(changelog_path(package_dir)).unwrap_or_default()
}

/// Contents for a later restore: `None` when the file does not exist
///
/// Any other read failure is an error, so a file that exists is never mistaken
/// for an absent one.
pub fn snapshot(package_dir: &Path) -> PushResult<Option<String>> {
  let path = changelog_path(package_dir);
  match fs::read_to_string(&path) {
    Ok(content) => Ok(Some(content)),
    Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
    Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
  }
}

/// Put the file back the way `snapshot` saw it
///
/// For a file that did not exist, deletion is tried first and truncation second.
pub fn restore(package_dir: &Path, original: Option<&str>) -> PushResult<()> {
  let path = changelog_path(package_dir);
  match original {
    Some(content) => fs::write(&path, content).with_context(|| format!("Failed to restore {}", path.display())),
    None => match fs::remove_file(&path) {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
      Err(e) => {
        tracing::warn!(path = %path.display(), error = %e, "could not delete changelog, truncating instead");
        fs::write(&path, "").map_err(|_| e).with_context(|| format!("Failed to remove {}", path.display()))
      }
    },
  }
}

/// Match `<label>: <description>` against every locale's labels
fn match_labeled(text: &str) -> Option<ChangelogEntry> {
  Locale::ALL.iter().find_map(|&locale| {
    let tr = Translator::new(locale);
    Category::ALL.iter().find_map(|&category| {
      let rest = text.strip_prefix(category.label(&tr).as_str())?.strip_prefix(':')?;
      let description = rest.trim();
      (!description.is_empty()).then(|| ChangelogEntry::new(category, description))
    })
  })
}

/// Parse free-text release notes, one entry per non-blank line
///
/// Per line, first match wins:
/// 1. `- <Label>: <description>`
/// 2. `<Label>: <description>`
/// 3. `- <description>` (Added)
/// 4. anything else, verbatim (Added)
pub fn parse_entries(text: &str) -> Vec<ChangelogEntry> {
  text
    .lines()
    .map(str::trim)
    .filter(|line| !line.is_empty())
    .map(|line| {
      if let Some(rest) = line.strip_prefix('-')
        && let Some(entry) = match_labeled(rest.trim_start())
      {
        return entry;
      }
      if let Some(entry) = match_labeled(line) {
        return entry;
      }
      match line.strip_prefix('-').map(str::trim) {
        Some(description) if !description.is_empty() => ChangelogEntry::new(Category::Added, description),
        _ => ChangelogEntry::new(Category::Added, line),
      }
    })
    .collect()
}

/// Render a `## [version] - date` section, grouped by category
pub fn render_section(version: &str, date: &str, entries: &[ChangelogEntry], tr: &Translator) -> String {
  let mut lines = vec![format!("## [{}] - {}", version, date), String::new()];

  for category in Category::ALL {
    let label = category.label(tr);
    let items: Vec<String> = entries
      .iter()
      .filter(|e| e.category == category)
      .map(|e| format!("- {}: {}", label, e.description))
      .collect();
    if items.is_empty() {
      continue;
    }

    lines.push(format!("### {}", label));
    lines.push(String::new());
    lines.extend(items);
    lines.push(String::new());
  }

  lines.join("\n")
}

/// Byte offset of the first `## [` version heading line
fn first_version_heading(doc: &str) -> Option<usize> {
  let mut offset = 0;
  for line in doc.split_inclusive('\n') {
    if let Some(rest) = line.strip_prefix("##")
      && rest.starts_with(char::is_whitespace)
      && rest.trim_start().starts_with('[')
    {
      return Some(offset);
    }
    offset += line.len();
  }
  None
}

/// Insert `section` into an existing document, or start a new one
pub fn merge(existing: &str, section: &str, tr: &Translator) -> String {
  if existing.is_empty() {
    return format!("{}{}\n", tr.t("changelog.header"), section);
  }

  let at = first_version_heading(existing).unwrap_or(0);
  format!("{}{}\n\n{}", &existing[..at], section, &existing[at..])
}

/// Today's date in UTC, `YYYY-MM-DD`
pub fn today() -> String {
  chrono::Utc::now().format("%Y-%m-%d").to_string()
}

/// Prepend a section for `version` built from `raw_text`, dated `date`
pub fn update_with_date(package_dir: &Path, version: &str, raw_text: &str, date: &str, tr: &Translator) -> PushResult<()> {
  let entries = parse_entries(raw_text);
  let section = render_section(version, date, &entries, tr);
  let content = merge(&read(package_dir), &section, tr);

  let path = changelog_path(package_dir);
  fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Prepend a section for `version` dated today
pub fn update(package_dir: &Path, version: &str, raw_text: &str, tr: &Translator) -> PushResult<()> {
  update_with_date(package_dir, version, raw_text, &today(), tr)
}
