//! Normalized in-memory collections built once per load from the fetched
//! feed, plus the pass-through socials structure.
//!
//! Every entity here is immutable after normalization. The view layer only
//! ever holds indices into `Library`; nothing is rewritten on interaction.

use chrono::NaiveDateTime;
use serde::Deserialize;
use std::collections::BTreeMap;

/// A single normalized video, flattened out of the per-language /
/// per-channel nesting of the content document.
#[derive(Debug, Clone, PartialEq)]
pub struct Video {
  pub id: String,
  pub title: String,
  pub thumbnail: String,
  /// Raw `published_at` string, kept for display ("TBA" when absent).
  pub date_label: String,
  /// Parsed date used for ordering. Always `Some` for scheduled entries —
  /// scheduled videos without a parseable date are dropped in normalization.
  pub date: Option<NaiveDateTime>,
  pub channel_id: String,
  pub channel_name: String,
  pub channel_color: String,
  pub language: String,
  pub serie: Option<String>,
  pub playlist_id: Option<String>,
  pub video_type: Option<String>,
  pub scheduled: bool,
  /// Concatenated searchable text: title, channel name, language, serie.
  pub search_blob: String,
}

/// A normalized playlist. Only playlists with at least one published member
/// survive normalization; `video_count` equals the published-member count.
#[derive(Debug, Clone, PartialEq)]
pub struct Playlist {
  pub id: String,
  pub title: String,
  pub channel_id: String,
  pub channel_name: String,
  pub channel_color: String,
  pub language: String,
  pub video_count: usize,
  pub thumbnail: String,
  pub videos: Vec<Video>,
}

/// The flat, ordered collections every view derives from.
#[derive(Debug, Default, Clone)]
pub struct Library {
  pub videos: Vec<Video>,
  pub playlists: Vec<Playlist>,
}

impl Library {
  /// Resolve a playlist title by id, for the "Playlist: …" line on video cards.
  pub fn playlist_title(&self, playlist_id: &str) -> Option<&str> {
    self.playlists.iter().find(|p| p.id == playlist_id).map(|p| p.title.as_str())
  }
}

// --- Socials ---

/// A string that is either plain or localized per language code.
/// The socials document mixes both shapes freely.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LocalizedText {
  Plain(String),
  ByLanguage(BTreeMap<String, String>),
}

impl LocalizedText {
  /// Resolve for a language, falling back to `en`, then to any entry.
  pub fn resolve(&self, lang: &str) -> &str {
    match self {
      LocalizedText::Plain(s) => s,
      LocalizedText::ByLanguage(map) => map
        .get(lang)
        .or_else(|| map.get("en"))
        .or_else(|| map.values().next())
        .map(String::as_str)
        .unwrap_or(""),
    }
  }
}

/// One entry under a socials platform.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SocialItem {
  pub handle: LocalizedText,
  #[serde(default)]
  pub description: Option<LocalizedText>,
  #[serde(default)]
  pub cta: Option<LocalizedText>,
  pub url: String,
  #[serde(default)]
  pub language: Option<String>,
  /// When set, this item acts as the display-name/URL override for the
  /// channel with that id (see [`Socials::channel_override`]).
  #[serde(default)]
  pub channel_dev_id: Option<String>,
  /// Marks the override as applying across all languages.
  #[serde(default)]
  pub multi_lang_channel: bool,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PlatformGroup {
  #[serde(default)]
  pub items: Vec<SocialItem>,
}

/// The platforms the socials document may carry, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
  Patreon,
  Youtube,
  Tiktok,
  Instagram,
}

impl Platform {
  pub const ALL: [Platform; 4] = [Platform::Patreon, Platform::Youtube, Platform::Tiktok, Platform::Instagram];

  pub fn label(self) -> &'static str {
    match self {
      Platform::Patreon => "PATREON",
      Platform::Youtube => "YOUTUBE",
      Platform::Tiktok => "TIKTOK",
      Platform::Instagram => "INSTAGRAM",
    }
  }
}

/// Pass-through socials document. A failed socials fetch degrades to
/// `Socials::default()` — the socials view simply shows nothing.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Socials {
  #[serde(default)]
  pub patreon: PlatformGroup,
  #[serde(default)]
  pub youtube: PlatformGroup,
  #[serde(default)]
  pub tiktok: PlatformGroup,
  #[serde(default)]
  pub instagram: PlatformGroup,
}

impl Socials {
  pub fn group(&self, platform: Platform) -> &PlatformGroup {
    match platform {
      Platform::Patreon => &self.patreon,
      Platform::Youtube => &self.youtube,
      Platform::Tiktok => &self.tiktok,
      Platform::Instagram => &self.instagram,
    }
  }

  pub fn is_empty(&self) -> bool {
    Platform::ALL.iter().all(|p| self.group(*p).items.is_empty())
  }

  /// Look up the display-name/URL override for a channel, if the socials
  /// document maps it. An item applies when its `channel_dev_id` matches
  /// and either it is marked multi-language or its language matches.
  pub fn channel_override(&self, channel_id: &str, lang: &str) -> Option<(&str, &str)> {
    self
      .youtube
      .items
      .iter()
      .filter(|item| item.channel_dev_id.as_deref() == Some(channel_id))
      .find(|item| item.multi_lang_channel || item.language.as_deref() == Some(lang))
      .map(|item| (item.handle.resolve(lang), item.url.as_str()))
  }

  /// Channel display name: the socials override when one exists, else the
  /// channel's own title.
  pub fn channel_display_name<'a>(&'a self, channel_id: &str, lang: &str, own_title: &'a str) -> &'a str {
    self.channel_override(channel_id, lang).map(|(name, _)| name).unwrap_or(own_title)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn localized(pairs: &[(&str, &str)]) -> LocalizedText {
    LocalizedText::ByLanguage(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
  }

  // --- LocalizedText::resolve ---

  #[test]
  fn resolve_plain_ignores_language() {
    let t = LocalizedText::Plain("hello".into());
    assert_eq!(t.resolve("de"), "hello");
  }

  #[test]
  fn resolve_picks_requested_language() {
    let t = localized(&[("en", "hello"), ("es", "hola")]);
    assert_eq!(t.resolve("es"), "hola");
  }

  #[test]
  fn resolve_falls_back_to_english() {
    let t = localized(&[("en", "hello"), ("es", "hola")]);
    assert_eq!(t.resolve("de"), "hello");
  }

  #[test]
  fn resolve_falls_back_to_any_entry_without_english() {
    let t = localized(&[("de", "hallo")]);
    assert_eq!(t.resolve("es"), "hallo");
  }

  // --- Socials deserialization ---

  #[test]
  fn socials_deserializes_mixed_handle_shapes() {
    let socials: Socials = serde_json::from_value(json!({
      "youtube": {
        "items": [
          {"handle": "@plain", "url": "https://youtube.com/@plain"},
          {"handle": {"en": "@loc-en", "es": "@loc-es"}, "url": "https://youtube.com/@loc"}
        ]
      }
    }))
    .unwrap();
    assert_eq!(socials.youtube.items.len(), 2);
    assert_eq!(socials.youtube.items[0].handle.resolve("es"), "@plain");
    assert_eq!(socials.youtube.items[1].handle.resolve("es"), "@loc-es");
  }

  #[test]
  fn socials_missing_platforms_default_empty() {
    let socials: Socials = serde_json::from_value(json!({})).unwrap();
    assert!(socials.is_empty());
  }

  // --- channel_override ---

  fn socials_with_overrides() -> Socials {
    serde_json::from_value(json!({
      "youtube": {
        "items": [
          {
            "handle": "@mathe-kanal",
            "url": "https://youtube.com/@mathe-kanal",
            "language": "de",
            "channel_dev_id": "math"
          },
          {
            "handle": {"en": "@science-en", "es": "@science-es"},
            "url": "https://youtube.com/@science",
            "channel_dev_id": "science",
            "multi_lang_channel": true
          }
        ]
      }
    }))
    .unwrap()
  }

  #[test]
  fn channel_override_matches_language() {
    let socials = socials_with_overrides();
    let (name, url) = socials.channel_override("math", "de").unwrap();
    assert_eq!(name, "@mathe-kanal");
    assert_eq!(url, "https://youtube.com/@mathe-kanal");
    // Same channel, different language: no override.
    assert!(socials.channel_override("math", "en").is_none());
  }

  #[test]
  fn channel_override_multi_language_applies_everywhere() {
    let socials = socials_with_overrides();
    assert_eq!(socials.channel_override("science", "en").unwrap().0, "@science-en");
    assert_eq!(socials.channel_override("science", "es").unwrap().0, "@science-es");
  }

  #[test]
  fn channel_display_name_falls_back_to_own_title() {
    let socials = socials_with_overrides();
    assert_eq!(socials.channel_display_name("history", "en", "History"), "History");
    assert_eq!(socials.channel_display_name("math", "de", "Mathe"), "@mathe-kanal");
  }
}
