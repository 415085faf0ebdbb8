//! Rendering: pure card builders plus the ratatui projection.
//!
//! The card builders are plain functions from (visible indices, collections,
//! translation strings) to display units — no terminal involved — so the
//! renderer contract (what must appear on a card, featured sizing, the
//! no-results state) is testable. Drawing is immediate-mode: re-rendering
//! with the same input yields the same frame.

use ratatui::{
  Frame,
  layout::{Alignment, Constraint, Layout, Rect},
  style::{Modifier, Style, Stylize},
  text::{Line, Span},
  widgets::{Block, List, ListItem, Padding, Paragraph},
};

use crate::app::{App, AppMode, LoadState};
use crate::content::parse_date;
use crate::model::{Library, Platform, Socials};
use crate::state::{Facet, View, ViewState, channel_options, derive_visible, facet_counts};
use crate::theme::{Theme, parse_accent};
use crate::translations::{Strings, language_name};

// --- Helpers ---

/// Compute the display width of the first `n` chars (accounting for double-width CJK).
pub fn display_width(s: &str, n: usize) -> usize {
  use unicode_width::UnicodeWidthChar;
  s.chars().take(n).map(|c| c.width().unwrap_or(0)).sum()
}

/// Truncate a string to `max_width` characters, appending "…" if truncated.
fn truncate_str(s: &str, max_width: usize) -> String {
  if s.chars().count() <= max_width {
    s.to_string()
  } else {
    let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
    format!("{}…", truncated)
  }
}

/// Format a feed date for display, or the localized "coming soon"
/// placeholder when the raw value is absent or unparseable.
pub fn format_date(raw: &str, t: &Strings) -> String {
  match parse_date(raw) {
    Some(dt) => dt.format("%b %-d, %Y").to_string(),
    None => t.coming_soon.to_string(),
  }
}

// --- Card view-models ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCard {
  pub title: String,
  pub channel: String,
  pub date: String,
  /// "Playlist: …" or "Series: …" line, when the video belongs to one.
  pub meta: Option<String>,
  pub featured: bool,
  pub scheduled: bool,
  pub accent: String,
}

/// Build one card per visible video. The first two cards are featured only
/// on the default unfiltered videos feed.
pub fn video_cards(library: &Library, socials: &Socials, state: &ViewState, visible: &[usize], t: &Strings) -> Vec<VideoCard> {
  let default_feed = state.is_default_feed();
  visible
    .iter()
    .enumerate()
    .filter_map(|(position, &i)| library.videos.get(i).map(|v| (position, v)))
    .map(|(position, video)| {
      let channel = socials.channel_display_name(&video.channel_id, &video.language, &video.channel_name).to_string();
      let meta = if let Some(ref pid) = video.playlist_id {
        library.playlist_title(pid).map(|title| format!("{}: {}", t.playlist, title))
      } else {
        video.serie.as_ref().map(|s| format!("{}: {}", t.series, s))
      };
      VideoCard {
        title: video.title.clone(),
        channel,
        date: format_date(&video.date_label, t),
        meta,
        featured: default_feed && position < 2,
        scheduled: video.scheduled,
        accent: video.channel_color.clone(),
      }
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistCard {
  pub title: String,
  pub channel: String,
  pub count: usize,
  pub accent: String,
}

pub fn playlist_cards(library: &Library, socials: &Socials, state: &ViewState, visible: &[usize]) -> Vec<PlaylistCard> {
  let lang = state.language.as_deref().unwrap_or("en");
  visible
    .iter()
    .filter_map(|&i| library.playlists.get(i))
    .map(|p| PlaylistCard {
      title: p.title.clone(),
      channel: socials.channel_display_name(&p.channel_id, lang, &p.channel_name).to_string(),
      count: p.video_count,
      accent: p.channel_color.clone(),
    })
    .collect()
}

/// One socials display row: a platform section header or an entry card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocialRow {
  Header { label: String },
  Item { handle: String, description: Option<String>, cta: Option<String>, url: String, language: Option<String> },
}

pub fn social_rows(socials: &Socials, lang: &str, t: &Strings) -> Vec<SocialRow> {
  let mut rows = Vec::new();
  for platform in Platform::ALL {
    let group = socials.group(platform);
    if group.items.is_empty() {
      continue;
    }
    let label = if platform == Platform::Patreon { t.support_us.to_string() } else { platform.label().to_string() };
    rows.push(SocialRow::Header { label });
    for item in &group.items {
      rows.push(SocialRow::Item {
        handle: item.handle.resolve(lang).to_string(),
        description: item.description.as_ref().map(|d| d.resolve(lang).to_string()),
        cta: item.cta.as_ref().map(|c| c.resolve(lang).to_string()),
        url: item.url.clone(),
        language: item.language.clone(),
      });
    }
  }
  rows
}

// --- Frame layout ---

pub fn ui(frame: &mut Frame, app: &mut App) {
  let theme = app.theme();
  frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), frame.area());

  let [header_area, chips_area, main_area, status_area, input_area, footer_area] = Layout::vertical([
    Constraint::Length(1),
    Constraint::Length(3),
    Constraint::Min(3),
    Constraint::Length(1),
    Constraint::Length(3),
    Constraint::Length(1),
  ])
  .areas(frame.area());

  render_header(frame, theme, header_area);

  match app.load_state {
    LoadState::Loading => {
      render_notice(frame, theme, main_area, app.strings().loading, theme.muted);
    }
    LoadState::Failed(ref msg) => {
      let text = format!("⚠ {}\n{}", app.strings().load_failed, msg);
      render_notice(frame, theme, main_area, &text, theme.error);
    }
    LoadState::Ready => {
      render_chips(frame, app, chips_area);
      render_main(frame, app, main_area);
    }
  }

  render_status(frame, app, status_area);
  render_input(frame, app, input_area);
  render_footer(frame, app, footer_area);
}

fn render_header(frame: &mut Frame, theme: &Theme, area: Rect) {
  let left = Line::from(Span::styled(" ▶ showreel ", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)));
  frame.render_widget(left, area);

  let version = format!("v{} ", env!("CARGO_PKG_VERSION"));
  let right = Line::from(Span::styled(&version, Style::default().fg(theme.muted)));
  let right_area =
    Rect { x: area.x + area.width.saturating_sub(version.len() as u16), width: version.len() as u16, ..area };
  frame.render_widget(right, right_area);
}

fn render_notice(frame: &mut Frame, theme: &Theme, area: Rect, text: &str, color: ratatui::style::Color) {
  let paragraph = Paragraph::new(text.to_string()).style(Style::default().fg(color)).alignment(Alignment::Center).block(
    Block::bordered()
      .border_type(ratatui::widgets::BorderType::Rounded)
      .border_style(Style::default().fg(theme.border))
      .padding(Padding::vertical(1)),
  );
  frame.render_widget(paragraph, area);
}

fn chip(label: String, active: bool, theme: &Theme) -> Vec<Span<'static>> {
  let style = if active {
    Style::default().fg(theme.chip_active_fg).bg(theme.chip_active_bg).add_modifier(Modifier::BOLD)
  } else {
    Style::default().fg(theme.muted)
  };
  vec![Span::styled(format!(" {} ", label), style), Span::raw(" ")]
}

fn render_chips(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let t = app.strings();
  let [views_row, facets_row, channels_row] =
    Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)]).areas(area);

  // View tabs + language on the right.
  let mut spans = vec![Span::raw(" ")];
  for (view, label) in [(View::Videos, t.videos_word), (View::Playlists, t.playlists), (View::Socials, t.socials)] {
    spans.extend(chip(label.to_string(), app.view.view == view, theme));
  }
  frame.render_widget(Line::from(spans), views_row);

  let lang_label = match app.view.language.as_deref() {
    Some(code) => format!("⌨ {} ", language_name(code)),
    None => format!("⌨ {} ", t.all),
  };
  let lang_w = lang_label.chars().count() as u16;
  let lang_area = Rect { x: views_row.x + views_row.width.saturating_sub(lang_w), width: lang_w, ..views_row };
  frame.render_widget(Line::from(Span::styled(lang_label, Style::default().fg(theme.accent))), lang_area);

  // Facet chips with live counts (videos view only).
  if app.view.view == View::Videos {
    let counts = facet_counts(&app.view, &app.library);
    let labels = [
      (Facet::All, format!("{} ({})", t.all_videos, counts.all)),
      (Facet::LongForm, format!("{} ({})", t.long_form, counts.long_form)),
      (Facet::Shorts, format!("{} ({})", t.shorts, counts.shorts)),
      (Facet::Upcoming, format!("{} ({})", t.upcoming, counts.upcoming)),
    ];
    let mut spans = vec![Span::raw(" ")];
    for (facet, label) in labels {
      spans.extend(chip(label, app.view.facet == facet, theme));
    }
    frame.render_widget(Line::from(spans), facets_row);
  }

  // Channel chips (videos and playlists views).
  if app.view.view != View::Socials {
    let options = channel_options(&app.view, &app.library);
    let mut spans = vec![Span::raw(" ")];
    spans.extend(chip(t.all.to_string(), app.view.channel.is_none(), theme));
    for (id, name) in &options {
      let active = app.view.channel.as_deref() == Some(id.as_str());
      spans.extend(chip(name.clone(), active, theme));
    }
    frame.render_widget(Line::from(spans), channels_row);
  }
}

fn render_main(frame: &mut Frame, app: &mut App, area: Rect) {
  let Some(ref index) = app.index else { return };
  let visible = derive_visible(&app.view, &app.library, index);

  match app.view.view {
    View::Videos => render_videos(frame, app, area, &visible.videos, visible.from_search),
    View::Playlists => render_playlists(frame, app, area, &visible.playlists),
    View::Socials => render_socials(frame, app, area),
  }
}

fn render_videos(frame: &mut Frame, app: &mut App, area: Rect, visible: &[usize], from_search: bool) {
  let theme = app.theme();
  let t = app.strings();
  let cards = video_cards(&app.library, &app.socials, &app.view, visible, t);

  if cards.is_empty() {
    render_notice(frame, theme, area, t.no_videos, theme.muted);
    app.clamp_selection(0);
    return;
  }

  let inner_w = area.width.saturating_sub(4) as usize;
  let items: Vec<ListItem> = cards
    .iter()
    .enumerate()
    .map(|(i, card)| {
      let accent = parse_accent(&card.accent, theme.muted);
      let title_style = if card.featured {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
      } else {
        Style::default().fg(theme.fg)
      };
      let title_prefix = if card.featured { "★ " } else { "" };

      let mut meta_spans = vec![
        Span::styled(card.channel.clone(), Style::default().fg(accent)),
        Span::styled(format!("  {}", card.date), Style::default().fg(theme.muted)),
      ];
      if card.scheduled {
        meta_spans.push(Span::styled(format!("  [{}]", t.scheduled_badge), Style::default().fg(theme.status)));
      }

      let mut lines = vec![
        Line::from(Span::styled(truncate_str(&format!("{}{}", title_prefix, card.title), inner_w), title_style)),
        Line::from(meta_spans),
      ];
      if let Some(ref meta) = card.meta {
        lines.push(Line::from(Span::styled(truncate_str(meta, inner_w), Style::default().fg(theme.muted))));
      }
      lines.push(Line::from(""));

      let bg = if i % 2 == 1 { theme.stripe_bg } else { theme.bg };
      ListItem::new(lines).bg(bg)
    })
    .collect();

  let title = if from_search {
    format!(" {} ({}) ", t.search_results, cards.len())
  } else if app.view.facet == Facet::Upcoming {
    format!(" {} ", t.upcoming_title)
  } else {
    format!(" {} ", t.latest)
  };

  let list = list_block(items, title, theme);
  app.clamp_selection(cards.len());
  frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_playlists(frame: &mut Frame, app: &mut App, area: Rect, visible: &[usize]) {
  let theme = app.theme();
  let t = app.strings();
  let cards = playlist_cards(&app.library, &app.socials, &app.view, visible);

  if cards.is_empty() {
    render_notice(frame, theme, area, t.no_playlists, theme.muted);
    app.clamp_selection(0);
    return;
  }

  let inner_w = area.width.saturating_sub(4) as usize;
  let items: Vec<ListItem> = cards
    .iter()
    .enumerate()
    .map(|(i, card)| {
      let accent = parse_accent(&card.accent, theme.muted);
      let lines = vec![
        Line::from(Span::styled(truncate_str(&card.title, inner_w), Style::default().fg(theme.fg).add_modifier(Modifier::BOLD))),
        Line::from(vec![
          Span::styled(card.channel.clone(), Style::default().fg(accent)),
          Span::styled(format!("  {} {}", card.count, t.videos_word), Style::default().fg(theme.muted)),
        ]),
        Line::from(""),
      ];
      let bg = if i % 2 == 1 { theme.stripe_bg } else { theme.bg };
      ListItem::new(lines).bg(bg)
    })
    .collect();

  let list = list_block(items, format!(" {} ", t.playlists), theme);
  app.clamp_selection(cards.len());
  frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_socials(frame: &mut Frame, app: &mut App, area: Rect) {
  let theme = app.theme();
  let t = app.strings();
  let lang = app.view.language.as_deref().unwrap_or("en").to_string();
  let rows = social_rows(&app.socials, &lang, t);

  if app.socials.is_empty() {
    render_notice(frame, theme, area, t.no_socials, theme.muted);
    app.clamp_selection(0);
    return;
  }

  let inner_w = area.width.saturating_sub(4) as usize;
  let items: Vec<ListItem> = rows
    .iter()
    .map(|row| match row {
      SocialRow::Header { label } => ListItem::new(vec![
        Line::from(Span::styled(label.clone(), Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))),
        Line::from(""),
      ]),
      SocialRow::Item { handle, description, cta, url, language } => {
        let mut head = vec![Span::styled(handle.clone(), Style::default().fg(theme.fg).add_modifier(Modifier::BOLD))];
        if let Some(lang_tag) = language {
          head.push(Span::styled(format!("  [{}]", lang_tag.to_uppercase()), Style::default().fg(theme.muted)));
        }
        let mut lines = vec![Line::from(head)];
        if let Some(desc) = description {
          lines.push(Line::from(Span::styled(truncate_str(desc, inner_w), Style::default().fg(theme.muted))));
        }
        if let Some(cta) = cta {
          lines.push(Line::from(Span::styled(format!("→ {}", cta), Style::default().fg(theme.status))));
        }
        lines.push(Line::from(Span::styled(
          truncate_str(url, inner_w),
          Style::default().fg(theme.accent).add_modifier(Modifier::UNDERLINED),
        )));
        lines.push(Line::from(""));
        ListItem::new(lines)
      }
    })
    .collect();

  let list = list_block(items, format!(" {} ", t.socials), theme);
  app.clamp_selection(rows.len());
  frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn list_block<'a>(items: Vec<ListItem<'a>>, title: String, theme: &Theme) -> List<'a> {
  List::new(items)
    .block(
      Block::bordered()
        .title(title)
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
        .border_type(ratatui::widgets::BorderType::Rounded)
        .border_style(Style::default().fg(theme.border)),
    )
    .highlight_symbol("▶ ")
    .highlight_style(Style::default().fg(theme.highlight_fg).bg(theme.highlight_bg).add_modifier(Modifier::BOLD))
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let (text, style) = if let Some(msg) = &app.status_message {
    (format!(" ⏳ {}", msg), Style::default().fg(theme.status))
  } else if let Some(err) = &app.last_error {
    (format!(" ⚠  {}", err), Style::default().fg(theme.error))
  } else {
    (" Ready".to_string(), Style::default().fg(theme.muted))
  };
  frame.render_widget(Paragraph::new(text).style(style), area);
}

fn render_input(frame: &mut Frame, app: &mut App, area: Rect) {
  let theme = app.theme();
  let t = app.strings();
  let border_color = if app.mode == AppMode::Search { theme.accent } else { theme.border };
  let input_block = Block::bordered()
    .title(format!(" {} ", t.search_placeholder.trim_end_matches('…')))
    .title_style(Style::default().fg(border_color))
    .border_type(ratatui::widgets::BorderType::Rounded)
    .border_style(Style::default().fg(border_color))
    .padding(Padding::horizontal(1));

  let inner_w = area.width.saturating_sub(4) as usize;
  let cursor_col = display_width(&app.query_input, app.cursor_position);

  if cursor_col < app.input_scroll {
    app.input_scroll = cursor_col;
  } else if cursor_col >= app.input_scroll + inner_w {
    app.input_scroll = cursor_col.saturating_sub(inner_w) + 1;
  }

  let paragraph = if app.query_input.is_empty() && app.mode == AppMode::Browse {
    Paragraph::new(t.search_placeholder).style(Style::default().fg(theme.muted)).block(input_block)
  } else if app.query_input.is_empty() && !app.prefs.recent_searches.is_empty() {
    let hint = format!("{}: ↑/↓", t.recent_searches);
    Paragraph::new(hint).style(Style::default().fg(theme.muted)).block(input_block)
  } else {
    let visible: String = app
      .query_input
      .chars()
      .scan(0usize, |col, c| {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        let start = *col;
        *col += w;
        Some((start, *col, c))
      })
      .skip_while(|(_, end, _)| *end <= app.input_scroll)
      .take_while(|(start, _, _)| *start < app.input_scroll + inner_w)
      .map(|(_, _, c)| c)
      .collect();
    Paragraph::new(visible).style(Style::default().fg(theme.fg)).block(input_block)
  };
  frame.render_widget(paragraph, area);

  if app.mode == AppMode::Search {
    // With a degenerate inner width the scroll offset can exceed the
    // cursor column; pin the cursor to the left edge instead of underflowing.
    let cursor_x = area.x + 2 + cursor_col.saturating_sub(app.input_scroll) as u16;
    frame.set_cursor_position((cursor_x, area.y + 1));
  }
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let keys: Vec<(&str, &str)> = match app.mode {
    AppMode::Browse => vec![
      ("/", "Search"),
      ("Tab", "View"),
      ("1-4", "Facet"),
      ("l", "Language"),
      ("←/→", "Channel"),
      ("r", "Reload"),
      ("t", "Theme"),
      ("q", "Quit"),
    ],
    AppMode::Search => vec![("Enter", "Apply"), ("↑/↓", "Recent"), ("Esc", "Back")],
  };

  let spans: Vec<Span> = keys
    .iter()
    .enumerate()
    .flat_map(|(i, (key, action))| {
      let mut s = vec![
        Span::styled(format!(" {} ", key), Style::default().fg(theme.key_fg).bg(theme.key_bg)),
        Span::styled(format!(" {} ", action), Style::default().fg(theme.muted)),
      ];
      if i < keys.len() - 1 {
        s.push(Span::raw(" "));
      }
      s
    })
    .collect();

  frame.render_widget(Line::from(spans), area);

  let theme_label = format!("{} ", theme.name);
  let right = Line::from(Span::styled(&theme_label, Style::default().fg(theme.muted)));
  let right_area =
    Rect { x: area.x + area.width.saturating_sub(theme_label.len() as u16), width: theme_label.len() as u16, ..area };
  frame.render_widget(right, right_area);
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::content::{RawDocument, normalize};
  use crate::search::SearchIndex;
  use crate::state::derive_visible;
  use crate::translations::strings;
  use serde_json::json;

  fn library() -> Library {
    let doc: RawDocument = serde_json::from_value(json!({
      "en": {
        "math": {
          "title": "Math",
          "videos": [
            {"video_id": "a", "title": "Primes", "state": "published", "published_at": "2024-03-01", "video_type": "4k_video"},
            {"video_id": "b", "title": "Integrals", "state": "published", "published_at": "2024-02-01", "video_type": "4k_video"},
            {"video_id": "c", "title": "Quick Tip", "state": "published", "published_at": "2024-01-01", "video_type": "short"},
            {"video_id": "s", "title": "Teaser", "state": "scheduled", "published_at": "2025-01-01", "video_type": "4k_video"}
          ]
        }
      }
    }))
    .unwrap();
    normalize(&doc)
  }

  #[test]
  fn featured_marks_only_first_two_on_default_feed() {
    let lib = library();
    let index = SearchIndex::build(&lib);
    let state = ViewState::default();
    let visible = derive_visible(&state, &lib, &index);
    let cards = video_cards(&lib, &Socials::default(), &state, &visible.videos, strings("en"));
    let featured: Vec<bool> = cards.iter().map(|c| c.featured).collect();
    assert_eq!(featured, vec![true, true, false]);
  }

  #[test]
  fn no_featured_cards_when_filtered() {
    let lib = library();
    let index = SearchIndex::build(&lib);
    let state = ViewState { channel: Some("math".into()), ..Default::default() };
    let visible = derive_visible(&state, &lib, &index);
    let cards = video_cards(&lib, &Socials::default(), &state, &visible.videos, strings("en"));
    assert!(cards.iter().all(|c| !c.featured));
  }

  #[test]
  fn scheduled_card_without_date_says_coming_soon() {
    let t = strings("en");
    assert_eq!(format_date("TBA", t), "Coming Soon");
    assert_eq!(format_date("2024-03-01", t), "Mar 1, 2024");
  }

  #[test]
  fn card_building_is_idempotent() {
    let lib = library();
    let index = SearchIndex::build(&lib);
    let state = ViewState::default();
    let visible = derive_visible(&state, &lib, &index);
    let first = video_cards(&lib, &Socials::default(), &state, &visible.videos, strings("en"));
    let second = video_cards(&lib, &Socials::default(), &state, &visible.videos, strings("en"));
    assert_eq!(first, second);
    assert_eq!(first.len(), second.len());
  }

  #[test]
  fn video_card_uses_socials_display_name_override() {
    let lib = library();
    let socials: Socials = serde_json::from_value(json!({
      "youtube": {"items": [
        {"handle": "@math-official", "url": "https://youtube.com/@math-official",
         "channel_dev_id": "math", "multi_lang_channel": true}
      ]}
    }))
    .unwrap();
    let index = SearchIndex::build(&lib);
    let state = ViewState::default();
    let visible = derive_visible(&state, &lib, &index);
    let cards = video_cards(&lib, &socials, &state, &visible.videos, strings("en"));
    assert!(cards.iter().all(|c| c.channel == "@math-official"));
  }

  #[test]
  fn social_rows_group_by_platform_and_resolve_language() {
    let socials: Socials = serde_json::from_value(json!({
      "patreon": {"items": [
        {"handle": "@studio", "url": "https://patreon.com/studio",
         "cta": {"en": "Join us", "es": "Únete"}}
      ]},
      "tiktok": {"items": [
        {"handle": "@studio-tiktok", "url": "https://tiktok.com/@studio", "language": "es"}
      ]}
    }))
    .unwrap();
    let rows = social_rows(&socials, "es", strings("es"));
    assert_eq!(rows.len(), 4);
    assert!(matches!(&rows[0], SocialRow::Header { label } if label == strings("es").support_us));
    assert!(matches!(&rows[1], SocialRow::Item { cta: Some(cta), .. } if cta == "Únete"));
    assert!(matches!(&rows[2], SocialRow::Header { label } if label == "TIKTOK"));
  }

  #[test]
  fn serie_meta_line_uses_the_series_label() {
    let doc: RawDocument = serde_json::from_value(json!({
      "en": {
        "math": {
          "title": "Math",
          "videos": [{
            "video_id": "a", "title": "Primes", "state": "published",
            "published_at": "2024-03-01", "serie": "Number Theory"
          }]
        }
      }
    }))
    .unwrap();
    let lib = normalize(&doc);
    let index = SearchIndex::build(&lib);
    let state = ViewState::default();
    let visible = derive_visible(&state, &lib, &index);
    let cards = video_cards(&lib, &Socials::default(), &state, &visible.videos, strings("en"));
    assert_eq!(cards[0].meta.as_deref(), Some("Series: Number Theory"));
  }

  #[test]
  fn search_input_draws_on_a_degenerate_terminal() {
    use crate::prefs::Prefs;
    use ratatui::{Terminal, backend::TestBackend};

    let mut app = App::new("content.json".into(), "socials.json".into(), None, Prefs::default());
    app.mode = AppMode::Search;
    app.query_input = "primes".into();
    app.cursor_position = 6;

    // Four columns leaves zero inner input width; drawing must not panic.
    let mut terminal = Terminal::new(TestBackend::new(4, 12)).unwrap();
    terminal.draw(|frame| ui(frame, &mut app)).unwrap();
  }

  #[test]
  fn playlist_cards_carry_published_member_count() {
    let doc: RawDocument = serde_json::from_value(json!({
      "en": {
        "math": {
          "title": "Math",
          "videos": [],
          "playlists": {
            "PL1": {"id": "PL1", "title": "Calculus", "videos": [
              {"video_id": "x", "title": "Limits", "state": "published", "published_at": "2024-01-01"},
              {"video_id": "y", "title": "Soon", "state": "scheduled", "published_at": "2025-01-01"}
            ]}
          }
        }
      }
    }))
    .unwrap();
    let lib = normalize(&doc);
    let state = ViewState::default();
    let visible: Vec<usize> = (0..lib.playlists.len()).collect();
    let cards = playlist_cards(&lib, &Socials::default(), &state, &visible);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].count, 1);
  }
}
