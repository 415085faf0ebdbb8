//! Tuneable constants, embedded from `constants.ron` at compile time and
//! parsed once on first access. A malformed file fails fast on startup
//! rather than at some later read.

use serde::Deserialize;
use std::sync::LazyLock;
#[derive(Debug, Deserialize)]
pub struct Constants {
  // Feed sources
  pub content_source: String,
  pub socials_source: String,
  pub supported_languages: Vec<String>,

  // Normalization
  pub neutral_accent: String,
  pub long_form_marker: String,
  pub shorts_marker: String,
  pub scheduled_cap_per_type: usize,
  pub thumb_fallback_prefix: String,
  pub thumb_fallback_suffix: String,

  // Search
  pub search_debounce_ms: u64,
  pub recent_searches_max: usize,
  pub recent_query_min_chars: usize,
}

static CONSTANTS: LazyLock<Constants> = LazyLock::new(|| {
  ron::from_str(include_str!("../constants.ron")).expect("constants.ron must be valid RON")
});

pub fn constants() -> &'static Constants {
  &CONSTANTS
}
