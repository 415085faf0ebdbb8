//! Persisted viewer preferences: last-chosen language, theme, and a bounded
//! most-recent-searches list. Stored as TOML in the platform config dir.
//! Never authoritative — load and save failures are silently ignored.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::constants;

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct Prefs {
  pub language: Option<String>,
  pub theme_name: Option<String>,
  #[serde(default)]
  pub recent_searches: Vec<String>,
  /// Unix timestamp of the last save. Informational only; no expiry is
  /// enforced on load.
  pub saved_at: Option<i64>,
  /// Backing file, set only by [`Prefs::load`]. Without one, `save` keeps
  /// the values in memory and touches nothing on disk.
  #[serde(skip)]
  path: Option<PathBuf>,
}

impl Prefs {
  pub fn load() -> Self {
    let Some(proj_dirs) = ProjectDirs::from("", "", "showreel") else {
      return Self::default();
    };
    let prefs_file = proj_dirs.config_dir().join("prefs.toml");
    let mut prefs: Self = std::fs::read_to_string(&prefs_file)
      .ok()
      .and_then(|content| toml::from_str(&content).ok())
      .unwrap_or_default();
    prefs.path = Some(prefs_file);
    prefs
  }

  pub fn save(&mut self) {
    self.saved_at = Some(chrono::Utc::now().timestamp());
    let Some(ref path) = self.path else { return };
    if let Some(dir) = path.parent()
      && std::fs::create_dir_all(dir).is_ok()
      && let Ok(content) = toml::to_string(self)
    {
      let _ = std::fs::write(path, content);
    }
  }

  /// Record a search query: most recent first, case-insensitive dedup,
  /// bounded length. Queries below the minimum length are ignored.
  pub fn push_recent(&mut self, query: &str) {
    let c = constants();
    let query = query.trim();
    if query.chars().count() < c.recent_query_min_chars {
      return;
    }
    self.recent_searches.retain(|s| !s.eq_ignore_ascii_case(query));
    self.recent_searches.insert(0, query.to_string());
    self.recent_searches.truncate(c.recent_searches_max);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn push_recent_puts_newest_first() {
    let mut prefs = Prefs::default();
    prefs.push_recent("primes");
    prefs.push_recent("watercolor");
    assert_eq!(prefs.recent_searches, vec!["watercolor", "primes"]);
  }

  #[test]
  fn push_recent_dedups_case_insensitively() {
    let mut prefs = Prefs::default();
    prefs.push_recent("primes");
    prefs.push_recent("watercolor");
    prefs.push_recent("PRIMES");
    assert_eq!(prefs.recent_searches, vec!["PRIMES", "watercolor"]);
  }

  #[test]
  fn push_recent_is_bounded() {
    let mut prefs = Prefs::default();
    for q in ["aa", "bb", "cc", "dd", "ee", "ff"] {
      prefs.push_recent(q);
    }
    assert_eq!(prefs.recent_searches.len(), constants().recent_searches_max);
    assert_eq!(prefs.recent_searches[0], "ff");
    assert!(!prefs.recent_searches.contains(&"aa".to_string()));
  }

  #[test]
  fn save_without_backing_file_stays_in_memory() {
    let mut prefs = Prefs::default();
    prefs.push_recent("primes");
    prefs.save();
    assert!(prefs.saved_at.is_some());
    assert!(prefs.path.is_none(), "default prefs must never gain a disk location");
    assert_eq!(prefs.recent_searches, vec!["primes"]);
  }

  #[test]
  fn push_recent_ignores_too_short_queries() {
    let mut prefs = Prefs::default();
    prefs.push_recent("a");
    prefs.push_recent("  ");
    assert!(prefs.recent_searches.is_empty());
  }
}
