//! Localized user-facing text
//!
//! A `Translator` maps a dotted key plus named `{param}` placeholders to text in one
//! locale. Lookup falls back to English, then to the raw key. The translator is
//! passed explicitly to whatever needs text; there is no process-wide language.

mod locales;

use std::env;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Locale {
  Zh,
  En,
  Ja,
  Ko,
}

impl Locale {
  /// Every supported locale, in changelog-label matching order
  pub const ALL: [Locale; 4] = [Locale::Zh, Locale::En, Locale::Ja, Locale::Ko];

  /// Locale used when a key is missing from the active table
  pub const FALLBACK: Locale = Locale::En;

  /// Parse a language code such as `ja`, `zh-CN` or `EN`
  pub fn from_code(code: &str) -> Option<Self> {
    let primary = code.trim().split(['-', '_', '.']).next()?.to_ascii_lowercase();
    match primary.as_str() {
      "zh" => Some(Locale::Zh),
      "en" => Some(Locale::En),
      "ja" => Some(Locale::Ja),
      "ko" => Some(Locale::Ko),
      _ => None,
    }
  }

  /// Short code (`zh`, `en`, `ja`, `ko`)
  pub fn code(self) -> &'static str {
    match self {
      Locale::Zh => "zh",
      Locale::En => "en",
      Locale::Ja => "ja",
      Locale::Ko => "ko",
    }
  }

  /// Detect the locale from the environment
  ///
  /// `NPM_PUSH_LANG` wins, then the POSIX locale variables. Anything unrecognized
  /// yields English.
  pub fn detect() -> Self {
    if let Ok(value) = env::var("NPM_PUSH_LANG")
      && let Some(locale) = Locale::from_code(&value)
    {
      return locale;
    }

    for var in ["LC_ALL", "LC_MESSAGES", "LANG", "LANGUAGE"] {
      if let Ok(value) = env::var(var)
        && let Some(locale) = Locale::from_posix(&value)
      {
        return locale;
      }
    }

    Locale::FALLBACK
  }

  /// Find a supported language code inside a POSIX locale string (`ja_JP.UTF-8`, `ko:en`)
  fn from_posix(value: &str) -> Option<Self> {
    value
      .split([':', '_', '-', '.', '@'])
      .find_map(|token| match token.to_ascii_lowercase().as_str() {
        "zh" => Some(Locale::Zh),
        "en" => Some(Locale::En),
        "ja" => Some(Locale::Ja),
        "ko" => Some(Locale::Ko),
        _ => None,
      })
  }

  fn table(self) -> &'static [(&'static str, &'static str)] {
    match self {
      Locale::Zh => locales::zh::MESSAGES,
      Locale::En => locales::en::MESSAGES,
      Locale::Ja => locales::ja::MESSAGES,
      Locale::Ko => locales::ko::MESSAGES,
    }
  }

  fn lookup(self, key: &str) -> Option<&'static str> {
    self.table().iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
  }
}

/// Key + params → text, for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
  locale: Locale,
}

impl Translator {
  pub fn new(locale: Locale) -> Self {
    Self { locale }
  }

  pub fn locale(&self) -> Locale {
    self.locale
  }

  /// Translate a key without parameters
  pub fn t(&self, key: &str) -> String {
    self.tf(key, &[])
  }

  /// Translate a key, replacing every `{name}` placeholder with its value
  pub fn tf(&self, key: &str, params: &[(&str, &str)]) -> String {
    let template = self
      .locale
      .lookup(key)
      .or_else(|| Locale::FALLBACK.lookup(key))
      .unwrap_or(key);

    params.iter().fold(template.to_string(), |text, (name, value)| {
      text.replace(&format!("{{{}}}", name), value)
    })
  }

  /// Localized yes/no
  pub fn yes_no(&self, value: bool) -> String {
    if value { self.t("common.yes") } else { self.t("common.no") }
  }
}

impl Default for Translator {
  fn default() -> Self {
    Self::new(Locale::FALLBACK)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_code() {
    assert_eq!(Locale::from_code("ja"), Some(Locale::Ja));
    assert_eq!(Locale::from_code("zh-CN"), Some(Locale::Zh));
    assert_eq!(Locale::from_code("EN"), Some(Locale::En));
    assert_eq!(Locale::from_code("ko_KR"), Some(Locale::Ko));
    assert_eq!(Locale::from_code("fr"), None);
    assert_eq!(Locale::from_code(""), None);
  }

  #[test]
  fn test_from_posix() {
    assert_eq!(Locale::from_posix("ja_JP.UTF-8"), Some(Locale::Ja));
    assert_eq!(Locale::from_posix("zh_CN"), Some(Locale::Zh));
    assert_eq!(Locale::from_posix("fr_FR:ko"), Some(Locale::Ko));
    assert_eq!(Locale::from_posix("C.UTF-8"), None);
  }

  #[test]
  fn test_params_are_replaced_everywhere() {
    let tr = Translator::new(Locale::En);
    let text = tr.tf("help.npmLogin", &[("registry", "https://r.example/")]);
    assert!(text.contains("https://r.example/"));
    assert!(!text.contains("{registry}"));
  }

  #[test]
  fn test_missing_key_returns_key() {
    let tr = Translator::new(Locale::Ko);
    assert_eq!(tr.t("no.such.key"), "no.such.key");
  }

  #[test]
  fn test_every_locale_has_every_key() {
    for (key, _) in Locale::En.table() {
      for locale in Locale::ALL {
        assert!(
          locale.lookup(key).is_some(),
          "locale {} is missing key {}",
          locale.code(),
          key
        );
      }
    }
  }

  #[test]
  fn test_tables_have_no_extra_keys() {
    for locale in Locale::ALL {
      for (key, _) in locale.table() {
        assert!(Locale::En.lookup(key).is_some(), "{} has unknown key {}", locale.code(), key);
      }
    }
  }
}
