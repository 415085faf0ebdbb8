//! Fuzzy search over the normalized video collection.
//!
//! Built once after normalization; a query scores each video against its
//! title, channel display name, language code and serie label, keeping the
//! best field score. Search is global — it ignores the active language,
//! facet and channel filters by design.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::model::Library;

pub struct SearchIndex {
  matcher: SkimMatcherV2,
  /// Per-video indexed fields: title, channel name, language, serie.
  fields: Vec<[String; 4]>,
}

impl SearchIndex {
  pub fn build(library: &Library) -> Self {
    let fields = library
      .videos
      .iter()
      .map(|v| {
        [
          v.title.clone(),
          v.channel_name.clone(),
          v.language.clone(),
          v.serie.clone().unwrap_or_default(),
        ]
      })
      .collect();
    Self { matcher: SkimMatcherV2::default(), fields }
  }

  /// Rank videos for a non-empty query, best match first. Returns indices
  /// into `Library::videos`; ties keep feed order. Callers must special-case
  /// the empty query as "no search active" instead of calling this.
  pub fn search(&self, query: &str) -> Vec<usize> {
    debug_assert!(!query.trim().is_empty(), "empty queries must not reach the index");
    let mut scored: Vec<(i64, usize)> = self
      .fields
      .iter()
      .enumerate()
      .filter_map(|(i, fields)| {
        fields.iter().filter(|f| !f.is_empty()).filter_map(|f| self.matcher.fuzzy_match(f, query)).max().map(|s| (s, i))
      })
      .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    scored.into_iter().map(|(_, i)| i).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::Video;

  fn video(id: &str, title: &str, channel: &str, lang: &str, serie: Option<&str>) -> Video {
    Video {
      id: id.to_string(),
      title: title.to_string(),
      thumbnail: String::new(),
      date_label: "2024-01-01".to_string(),
      date: None,
      channel_id: channel.to_lowercase(),
      channel_name: channel.to_string(),
      channel_color: "#71717a".to_string(),
      language: lang.to_string(),
      serie: serie.map(str::to_string),
      playlist_id: None,
      video_type: None,
      scheduled: false,
      search_blob: format!("{} {} {} {}", title, channel, lang, serie.unwrap_or("")),
    }
  }

  fn library() -> Library {
    Library {
      videos: vec![
        video("a", "Prime Numbers Explained", "Math", "en", Some("Number Theory")),
        video("b", "Watercolor Basics", "Art", "en", None),
        video("c", "Primzahlen erklärt", "Mathe", "de", None),
      ],
      playlists: Vec::new(),
    }
  }

  #[test]
  fn exact_title_match_ranks_first() {
    let index = SearchIndex::build(&library());
    let results = index.search("Watercolor Basics");
    assert_eq!(results.first(), Some(&1));
  }

  #[test]
  fn tolerates_typos_and_partial_queries() {
    let index = SearchIndex::build(&library());
    // Dropped vowel still finds the prime-number videos.
    let results = index.search("prme");
    assert!(results.contains(&0));
  }

  #[test]
  fn matches_channel_and_serie_fields() {
    let index = SearchIndex::build(&library());
    assert!(index.search("Number Theory").contains(&0));
    assert!(index.search("Art").contains(&1));
  }

  #[test]
  fn results_are_a_subset_of_the_collection() {
    let lib = library();
    let index = SearchIndex::build(&lib);
    for query in ["prime", "mathe", "zzzz-no-match"] {
      let results = index.search(query);
      assert!(results.iter().all(|&i| i < lib.videos.len()));
    }
  }

  #[test]
  fn unmatched_query_returns_empty() {
    let index = SearchIndex::build(&library());
    assert!(index.search("qqqqqqq").is_empty());
  }
}
