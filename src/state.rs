//! View state and the pure derivation of the visible subset.
//!
//! One explicit state struct holds every UI selection; `derive_visible` is a
//! pure function from (state, collections, index) to the visible indices, so
//! the whole filtering pipeline is unit-testable without a terminal.

use crate::constants::constants;
use crate::model::{Library, Video};
use crate::search::SearchIndex;

/// Which card grid is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
  #[default]
  Videos,
  Playlists,
  Socials,
}

impl View {
  pub const ALL: [View; 3] = [View::Videos, View::Playlists, View::Socials];

  pub fn next(self) -> View {
    let idx = View::ALL.iter().position(|v| *v == self).unwrap_or(0);
    View::ALL[(idx + 1) % View::ALL.len()]
  }
}

/// Mutually-exclusive video-type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facet {
  #[default]
  All,
  LongForm,
  Shorts,
  Upcoming,
}

impl Facet {
  /// Whether a video passes this facet. Scheduled videos only ever appear
  /// under `Upcoming`; the default feed excludes them so not-yet-released
  /// items don't crowd it.
  pub fn keeps(self, video: &Video) -> bool {
    let c = constants();
    match self {
      Facet::All => !video.scheduled,
      Facet::LongForm => {
        !video.scheduled && video.video_type.as_deref().is_some_and(|t| t.contains(c.long_form_marker.as_str()))
      }
      Facet::Shorts => {
        !video.scheduled && video.video_type.as_deref().is_some_and(|t| t.contains(c.shorts_marker.as_str()))
      }
      Facet::Upcoming => video.scheduled,
    }
  }
}

/// Every UI selection in one place. Mutated only synchronously by input
/// handling; all derivation reads it explicitly.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
  /// Active language code, or `None` for all languages.
  pub language: Option<String>,
  pub view: View,
  pub facet: Facet,
  /// Active channel id, or `None` for all channels.
  pub channel: Option<String>,
  /// Applied search query (post-debounce). Empty means no search.
  pub query: String,
}

impl ViewState {
  /// True when the videos feed is in its default, unfiltered shape — the
  /// only configuration in which the first two cards render featured.
  pub fn is_default_feed(&self) -> bool {
    self.view == View::Videos && self.facet == Facet::All && self.channel.is_none() && self.query.trim().is_empty()
  }
}

/// The derived visible subset: indices into the library collections.
#[derive(Debug, Default, PartialEq)]
pub struct Visible {
  pub videos: Vec<usize>,
  pub playlists: Vec<usize>,
  /// Whether `videos` came from the search index (ranked) rather than the
  /// filter pipeline (feed order).
  pub from_search: bool,
}

/// Live counts for the facet chips, computed from the language-filtered
/// collection so they reflect what is actually reachable. The upcoming count
/// spans all languages, matching the upcoming facet itself.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FacetCounts {
  pub all: usize,
  pub long_form: usize,
  pub shorts: usize,
  pub upcoming: usize,
}

fn in_language(video: &Video, language: Option<&str>) -> bool {
  language.is_none_or(|l| video.language == l)
}

/// Recompute the visible subset. Must be called after any state change;
/// it is pure, so calling it redundantly is harmless.
pub fn derive_visible(state: &ViewState, library: &Library, index: &SearchIndex) -> Visible {
  let query = state.query.trim();

  // Search supersedes faceting: a non-empty query returns the globally
  // ranked results regardless of language/facet/channel.
  let (videos, from_search) = if !query.is_empty() {
    (index.search(query), true)
  } else {
    let lang = state.language.as_deref();
    let indices = library
      .videos
      .iter()
      .enumerate()
      .filter(|(_, v)| {
        // Upcoming items are shown across all languages.
        let lang_ok = state.facet == Facet::Upcoming || in_language(v, lang);
        let channel_ok = state.channel.as_deref().is_none_or(|c| v.channel_id == c);
        lang_ok && state.facet.keeps(v) && channel_ok
      })
      .map(|(i, _)| i)
      .collect();
    (indices, false)
  };

  // Playlists derive independently: language (+ channel), never facet/search.
  let lang = state.language.as_deref();
  let playlists = library
    .playlists
    .iter()
    .enumerate()
    .filter(|(_, p)| {
      let lang_ok = lang.is_none_or(|l| p.language == l);
      let channel_ok = state.channel.as_deref().is_none_or(|c| p.channel_id == c);
      lang_ok && channel_ok
    })
    .map(|(i, _)| i)
    .collect();

  Visible { videos, playlists, from_search }
}

/// Facet chip counts from the currently language-filtered collection.
pub fn facet_counts(state: &ViewState, library: &Library) -> FacetCounts {
  let lang = state.language.as_deref();
  let mut counts = FacetCounts::default();
  for video in &library.videos {
    if video.scheduled {
      // Always counted across all languages, like the facet itself.
      counts.upcoming += 1;
      continue;
    }
    if !in_language(video, lang) {
      continue;
    }
    counts.all += 1;
    if Facet::LongForm.keeps(video) {
      counts.long_form += 1;
    }
    if Facet::Shorts.keeps(video) {
      counts.shorts += 1;
    }
  }
  counts
}

/// Channel chip options: distinct (id, display title) pairs reachable under
/// the current language + facet, sorted by title.
pub fn channel_options(state: &ViewState, library: &Library) -> Vec<(String, String)> {
  let lang = state.language.as_deref();
  let mut options: Vec<(String, String)> = Vec::new();
  for video in &library.videos {
    let lang_ok = state.facet == Facet::Upcoming || in_language(video, lang);
    if !lang_ok || !state.facet.keeps(video) {
      continue;
    }
    if !options.iter().any(|(id, _)| *id == video.channel_id) {
      options.push((video.channel_id.clone(), video.channel_name.clone()));
    }
  }
  options.sort_by(|a, b| a.1.cmp(&b.1));
  options
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::content::{RawDocument, normalize};
  use serde_json::json;

  fn video(id: &str, state: &str, date: &str, video_type: &str) -> serde_json::Value {
    json!({
      "video_id": id,
      "title": format!("Video {}", id),
      "published_at": date,
      "state": state,
      "video_type": video_type,
    })
  }

  /// Two languages, two channels; one scheduled long-form video under `es`.
  fn library() -> Library {
    let doc: RawDocument = serde_json::from_value(json!({
      "en": {
        "math": {
          "title": "Math",
          "videos": [
            video("en-long", "published", "2024-03-01", "4k_video"),
            video("en-short", "published", "2024-02-01", "short"),
          ],
          "playlists": {
            "PL-math": {"id": "PL-math", "title": "Series", "videos": [video("en-long", "published", "2024-03-01", "4k_video")]}
          }
        },
        "art": {
          "title": "Art",
          "videos": [video("en-art", "published", "2024-01-01", "4k_video")]
        }
      },
      "es": {
        "math": {
          "title": "Mates",
          "videos": [
            video("es-long", "published", "2024-04-01", "4k_video"),
            video("es-sched", "scheduled", "2025-06-01", "4k_video"),
          ]
        }
      }
    }))
    .unwrap();
    normalize(&doc)
  }

  fn setup() -> (Library, SearchIndex) {
    let lib = library();
    let index = SearchIndex::build(&lib);
    (lib, index)
  }

  fn ids<'a>(lib: &'a Library, indices: &[usize]) -> Vec<&'a str> {
    indices.iter().map(|&i| lib.videos[i].id.as_str()).collect()
  }

  #[test]
  fn default_facet_never_shows_scheduled() {
    let (lib, index) = setup();
    let state = ViewState::default();
    let visible = derive_visible(&state, &lib, &index);
    assert!(visible.videos.iter().all(|&i| !lib.videos[i].scheduled));
    assert_eq!(visible.videos.len(), 4);
  }

  #[test]
  fn upcoming_facet_shows_only_scheduled_across_languages() {
    let (lib, index) = setup();
    // Language filter set to en, but the scheduled video lives under es.
    let state = ViewState { language: Some("en".into()), facet: Facet::Upcoming, ..Default::default() };
    let visible = derive_visible(&state, &lib, &index);
    assert_eq!(ids(&lib, &visible.videos), vec!["es-sched"]);
  }

  #[test]
  fn long_form_and_shorts_facets_match_type_markers() {
    let (lib, index) = setup();
    let state = ViewState { language: Some("en".into()), facet: Facet::LongForm, ..Default::default() };
    let visible = derive_visible(&state, &lib, &index);
    assert_eq!(ids(&lib, &visible.videos), vec!["en-long", "en-art"]);

    let state = ViewState { language: Some("en".into()), facet: Facet::Shorts, ..Default::default() };
    let visible = derive_visible(&state, &lib, &index);
    assert_eq!(ids(&lib, &visible.videos), vec!["en-short"]);
  }

  #[test]
  fn language_filter_restricts_the_feed() {
    let (lib, index) = setup();
    let state = ViewState { language: Some("es".into()), ..Default::default() };
    let visible = derive_visible(&state, &lib, &index);
    assert_eq!(ids(&lib, &visible.videos), vec!["es-long"]);
  }

  #[test]
  fn channel_filter_applies_after_facet() {
    let (lib, index) = setup();
    let state = ViewState { language: Some("en".into()), channel: Some("art".into()), ..Default::default() };
    let visible = derive_visible(&state, &lib, &index);
    assert_eq!(ids(&lib, &visible.videos), vec!["en-art"]);
  }

  #[test]
  fn search_bypasses_language_facet_and_channel() {
    let (lib, index) = setup();
    let state = ViewState {
      language: Some("en".into()),
      facet: Facet::Shorts,
      channel: Some("art".into()),
      query: "Video es-long".into(),
      ..Default::default()
    };
    let visible = derive_visible(&state, &lib, &index);
    assert!(visible.from_search);
    // The es-language long-form video is reachable despite every filter.
    assert!(ids(&lib, &visible.videos).contains(&"es-long"));
  }

  #[test]
  fn playlists_ignore_facet_and_search() {
    let (lib, index) = setup();
    let state = ViewState {
      language: Some("en".into()),
      facet: Facet::Upcoming,
      query: "anything".into(),
      ..Default::default()
    };
    let visible = derive_visible(&state, &lib, &index);
    assert_eq!(visible.playlists.len(), 1);
    assert_eq!(lib.playlists[visible.playlists[0]].id, "PL-math");
  }

  #[test]
  fn playlists_respect_channel_filter() {
    let (lib, index) = setup();
    let state = ViewState { language: Some("en".into()), channel: Some("art".into()), ..Default::default() };
    let visible = derive_visible(&state, &lib, &index);
    assert!(visible.playlists.is_empty());
  }

  #[test]
  fn empty_language_has_empty_derived_set() {
    let (lib, index) = setup();
    let state = ViewState { language: Some("de".into()), ..Default::default() };
    let visible = derive_visible(&state, &lib, &index);
    assert!(visible.videos.is_empty());
  }

  #[test]
  fn facet_counts_follow_active_language_except_upcoming() {
    let (lib, _) = setup();
    let state = ViewState { language: Some("en".into()), ..Default::default() };
    let counts = facet_counts(&state, &lib);
    assert_eq!(counts, FacetCounts { all: 3, long_form: 2, shorts: 1, upcoming: 1 });

    let state = ViewState { language: Some("es".into()), ..Default::default() };
    let counts = facet_counts(&state, &lib);
    assert_eq!(counts, FacetCounts { all: 1, long_form: 1, shorts: 0, upcoming: 1 });
  }

  #[test]
  fn channel_options_reflect_reachable_videos() {
    let (lib, _) = setup();
    let state = ViewState { language: Some("en".into()), ..Default::default() };
    let options = channel_options(&state, &lib);
    assert_eq!(options, vec![("art".to_string(), "Art".to_string()), ("math".to_string(), "Math".to_string())]);

    // Under the shorts facet, only math has a reachable video.
    let state = ViewState { language: Some("en".into()), facet: Facet::Shorts, ..Default::default() };
    let options = channel_options(&state, &lib);
    assert_eq!(options, vec![("math".to_string(), "Math".to_string())]);
  }

  #[test]
  fn default_feed_detection() {
    let mut state = ViewState::default();
    assert!(state.is_default_feed());
    state.channel = Some("math".into());
    assert!(!state.is_default_feed());
    state.channel = None;
    state.query = "primes".into();
    assert!(!state.is_default_feed());
  }
}
