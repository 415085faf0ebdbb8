//! Content loading and normalization.
//!
//! Fetches the pre-generated content document and the socials document
//! concurrently, then flattens the nested language → channel structure into
//! the flat, ordered collections in [`Library`].
//!
//! The content fetch is fatal on failure; the socials fetch is best-effort
//! and degrades to an empty structure. Individual malformed records are
//! skipped with a warning, never fatal — the upstream generator is external
//! and occasionally emits partial entries.

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveDateTime};
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::constants::constants;
use crate::model::{Library, Playlist, Socials, Video};

// --- Raw document shapes ---

/// language code → channel id → channel.
pub type RawDocument = BTreeMap<String, BTreeMap<String, RawChannel>>;

#[derive(Debug, Clone, Deserialize)]
pub struct RawChannel {
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default)]
  pub color: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub videos: Vec<RawVideo>,
  #[serde(default)]
  pub playlists: BTreeMap<String, RawPlaylist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawVideo {
  #[serde(default)]
  pub video_id: String,
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub thumbnail: Option<String>,
  #[serde(default)]
  pub published_at: Option<String>,
  #[serde(default)]
  pub state: Option<String>,
  #[serde(default)]
  pub serie: Option<String>,
  #[serde(default)]
  pub playlist_id: Option<String>,
  #[serde(default)]
  pub video_type: Option<String>,
  #[serde(default)]
  pub release_date: Option<String>,
  #[serde(default)]
  pub duration: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPlaylist {
  #[serde(default)]
  pub id: Option<String>,
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub videos: Vec<RawVideo>,
}

// --- Fetch ---

/// Fetch and deserialize a JSON source: an `http(s)` URL or a local file path.
async fn fetch_source<T: DeserializeOwned>(client: &Client, source: &str) -> Result<T> {
  if source.starts_with("http://") || source.starts_with("https://") {
    let response = client.get(source).send().await.with_context(|| format!("request to {} failed", source))?;
    if !response.status().is_success() {
      bail!("{} returned HTTP {}", source, response.status());
    }
    response.json::<T>().await.with_context(|| format!("invalid JSON from {}", source))
  } else {
    let bytes = tokio::fs::read(source).await.with_context(|| format!("failed to read {}", source))?;
    serde_json::from_slice(&bytes).with_context(|| format!("invalid JSON in {}", source))
  }
}

/// Load both documents concurrently and normalize the content feed.
///
/// The content document is required; the socials document degrades to an
/// empty structure so the rest of the app keeps working.
pub async fn load_portfolio(client: &Client, content_src: &str, socials_src: &str) -> Result<(Library, Socials)> {
  let (content, socials) =
    tokio::join!(fetch_source::<RawDocument>(client, content_src), fetch_source::<Socials>(client, socials_src));

  let document = content.context("failed to load content feed")?;
  let socials = match socials {
    Ok(s) => s,
    Err(e) => {
      warn!(err = %e, "socials unavailable, continuing without");
      Socials::default()
    }
  };

  let library = normalize(&document);
  info!(videos = library.videos.len(), playlists = library.playlists.len(), "content feed normalized");
  Ok((library, socials))
}

// --- Normalization ---

/// Parse the generator's date strings. The feed mixes `YYYY-MM-DD HH:MM:SS`
/// and bare `YYYY-MM-DD`; anything else (notably "TBA") is unparseable.
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
  let trimmed = raw.trim();
  if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
    return Some(dt);
  }
  if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
    return Some(dt);
  }
  NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// The generator writes the literal "na" for absent serie values.
fn clean_serie(raw: Option<&str>) -> Option<String> {
  raw.map(str::trim).filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("na")).map(str::to_string)
}

fn fallback_thumbnail(video_id: &str) -> String {
  let c = constants();
  format!("{}{}{}", c.thumb_fallback_prefix, video_id, c.thumb_fallback_suffix)
}

/// Build one normalized [`Video`] from a raw record, or `None` when required
/// fields are missing (the record is skipped, not fatal).
fn normalize_video(raw: &RawVideo, lang: &str, channel_id: &str, channel_name: &str, color: &str, scheduled: bool) -> Option<Video> {
  if raw.video_id.trim().is_empty() || raw.title.trim().is_empty() {
    warn!(lang, channel = channel_id, "skipping video record with missing id or title");
    return None;
  }
  let serie = clean_serie(raw.serie.as_deref());
  let date_label = raw.published_at.clone().unwrap_or_else(|| "TBA".to_string());
  let date = parse_date(&date_label);
  let search_blob =
    format!("{} {} {} {}", raw.title, channel_name, lang, serie.as_deref().unwrap_or("")).trim_end().to_string();

  Some(Video {
    id: raw.video_id.clone(),
    title: raw.title.clone(),
    thumbnail: raw.thumbnail.clone().unwrap_or_else(|| fallback_thumbnail(&raw.video_id)),
    date_label,
    date,
    channel_id: channel_id.to_string(),
    channel_name: channel_name.to_string(),
    channel_color: color.to_string(),
    language: lang.to_string(),
    serie,
    playlist_id: raw.playlist_id.clone(),
    video_type: raw.video_type.clone(),
    scheduled,
    search_blob,
  })
}

/// Cap a channel's scheduled videos: sort ascending by date (soonest first),
/// then keep at most `scheduled_cap_per_type` whose type tag carries the
/// long-form marker and at most as many carrying the shorts marker. Scheduled
/// videos with neither marker do not survive the cap.
fn cap_scheduled(mut scheduled: Vec<Video>) -> Vec<Video> {
  let c = constants();
  scheduled.sort_by(|a, b| a.date.cmp(&b.date));

  let mut keep: Vec<usize> = Vec::new();
  for marker in [&c.long_form_marker, &c.shorts_marker] {
    let mut taken = 0;
    for (i, video) in scheduled.iter().enumerate() {
      if taken == c.scheduled_cap_per_type {
        break;
      }
      if keep.contains(&i) {
        continue;
      }
      if video.video_type.as_deref().is_some_and(|t| t.contains(marker.as_str())) {
        keep.push(i);
        taken += 1;
      }
    }
  }
  keep.sort_unstable();
  keep.into_iter().map(|i| scheduled[i].clone()).collect()
}

/// Global feed ordering: every scheduled video before every published one;
/// scheduled ascending by date (soonest first), published descending
/// (newest first).
pub fn feed_order(a: &Video, b: &Video) -> Ordering {
  match (a.scheduled, b.scheduled) {
    (true, false) => Ordering::Less,
    (false, true) => Ordering::Greater,
    (true, true) => a.date.cmp(&b.date),
    // Published entries without a parseable date sink to the end.
    (false, false) => b.date.cmp(&a.date),
  }
}

/// Flatten the nested document into the normalized collections.
pub fn normalize(document: &RawDocument) -> Library {
  let neutral = &constants().neutral_accent;
  let mut videos: Vec<Video> = Vec::new();
  let mut playlists: Vec<Playlist> = Vec::new();

  for (lang, channels) in document {
    for (channel_id, channel) in channels {
      let channel_name = channel.title.clone().unwrap_or_else(|| channel_id.clone());
      let color = channel.color.clone().unwrap_or_else(|| neutral.clone());

      // Partition into published and scheduled-with-valid-date; a scheduled
      // video without a parseable date (a "TBA" placeholder) is discarded
      // entirely, not merely hidden.
      let mut scheduled: Vec<Video> = Vec::new();
      for raw in &channel.videos {
        match raw.state.as_deref() {
          Some("published") => {
            if let Some(v) = normalize_video(raw, lang, channel_id, &channel_name, &color, false) {
              videos.push(v);
            }
          }
          Some("scheduled") => {
            let has_date = raw.published_at.as_deref().is_some_and(|d| parse_date(d).is_some());
            if !has_date {
              debug!(lang, channel = channel_id, video = %raw.video_id, "dropping scheduled video without a valid date");
              continue;
            }
            if let Some(v) = normalize_video(raw, lang, channel_id, &channel_name, &color, true) {
              scheduled.push(v);
            }
          }
          _ => {} // draft / unknown states never reach the feed
        }
      }
      videos.extend(cap_scheduled(scheduled));

      // Playlists: published members only; skip when none remain.
      for (playlist_key, raw_playlist) in &channel.playlists {
        let members: Vec<Video> = raw_playlist
          .videos
          .iter()
          .filter(|v| v.state.as_deref() == Some("published"))
          .filter_map(|v| normalize_video(v, lang, channel_id, &channel_name, &color, false))
          .collect();
        if members.is_empty() {
          continue;
        }
        // Representative thumbnail from the first member that actually
        // survived normalization, not the first raw record.
        let thumbnail = members[0].thumbnail.clone();

        playlists.push(Playlist {
          id: raw_playlist.id.clone().unwrap_or_else(|| playlist_key.clone()),
          title: raw_playlist.title.clone(),
          channel_id: channel_id.clone(),
          channel_name: channel_name.clone(),
          channel_color: color.clone(),
          language: lang.clone(),
          video_count: members.len(),
          thumbnail,
          videos: members,
        });
      }
    }
  }

  videos.sort_by(feed_order);
  Library { videos, playlists }
}
