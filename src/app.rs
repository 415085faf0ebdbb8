//! Application state: the loaded collections, the explicit view state, and
//! the one-time async load polled from the run loop.

use anyhow::Result;
use ratatui::widgets::ListState;
use reqwest::Client;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;
use tracing::{debug, info};

use crate::constants::constants;
use crate::content::load_portfolio;
use crate::model::{Library, Platform, Socials};
use crate::prefs::Prefs;
use crate::search::SearchIndex;
use crate::state::{Facet, View, ViewState, channel_options, derive_visible};
use crate::theme::{THEMES, Theme};
use crate::translations::{Strings, strings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
  Browse,
  Search,
}

/// Lifecycle of the one-time startup load (or a manual reload).
pub enum LoadState {
  Loading,
  Ready,
  /// Fatal: the content fetch failed. Shown as an in-page message; `r`
  /// retries (the page-reload analog). No automatic retries.
  Failed(String),
}

type LoadResult = Result<(Library, Socials)>;

pub struct App {
  pub library: Library,
  pub socials: Socials,
  pub index: Option<SearchIndex>,
  pub view: ViewState,
  pub mode: AppMode,
  pub list_state: ListState,
  pub prefs: Prefs,
  pub theme_index: usize,
  pub load_state: LoadState,
  pub status_message: Option<String>,
  pub last_error: Option<String>,
  pub should_quit: bool,

  // Search input editing (the live buffer; `view.query` is the applied one).
  pub query_input: String,
  pub cursor_position: usize,
  pub input_scroll: usize,
  /// Index into recent searches while recalling with Up/Down, if any.
  pub recall_index: Option<usize>,

  /// Set on every query edit; the query is applied once this is older than
  /// the debounce interval. Later edits overwrite it (last-write-wins).
  pub(crate) pending_search_at: Option<Instant>,

  load_rx: Option<oneshot::Receiver<LoadResult>>,
  client: Client,
  content_src: String,
  socials_src: String,

  /// When the last error was set — used for auto-dismiss after 5 seconds.
  error_time: Option<Instant>,
}

impl App {
  /// Preferences are injected rather than loaded here, so construction
  /// never touches the filesystem.
  pub fn new(content_src: String, socials_src: String, language: Option<String>, prefs: Prefs) -> Self {
    let theme_index =
      if let Some(ref name) = prefs.theme_name { THEMES.iter().position(|t| t.name == name).unwrap_or(0) } else { 0 };

    // CLI override > persisted preference > English. "all" is a valid choice.
    let stored = language.or_else(|| prefs.language.clone()).unwrap_or_else(|| "en".to_string());
    let active_language = if stored == "all" { None } else { Some(stored) };

    Self {
      library: Library::default(),
      socials: Socials::default(),
      index: None,
      view: ViewState { language: active_language, ..Default::default() },
      mode: AppMode::Browse,
      list_state: ListState::default(),
      prefs,
      theme_index,
      load_state: LoadState::Loading,
      status_message: None,
      last_error: None,
      should_quit: false,
      query_input: String::new(),
      cursor_position: 0,
      input_scroll: 0,
      recall_index: None,
      pending_search_at: None,
      load_rx: None,
      client: Client::new(),
      content_src,
      socials_src,
      error_time: None,
    }
  }

  pub fn theme(&self) -> &'static Theme {
    &THEMES[self.theme_index]
  }

  /// Translation strings for the active language (English for "all").
  pub fn strings(&self) -> &'static Strings {
    strings(self.view.language.as_deref().unwrap_or("en"))
  }

  // --- Messages ---

  pub fn set_error(&mut self, msg: String) {
    self.last_error = Some(msg);
    self.error_time = Some(Instant::now());
  }

  pub fn clear_error(&mut self) {
    self.last_error = None;
    self.error_time = None;
  }

  /// Clear stale error messages after 5 seconds.
  pub fn expire_error(&mut self) {
    if let Some(t) = self.error_time
      && t.elapsed() >= Duration::from_secs(5)
    {
      self.last_error = None;
      self.error_time = None;
    }
  }

  // --- Loading ---

  /// Kick off the concurrent content + socials fetch in the background.
  pub fn trigger_load(&mut self) {
    self.load_state = LoadState::Loading;
    self.status_message = Some(self.strings().loading.to_string());
    self.clear_error();

    let client = self.client.clone();
    let content_src = self.content_src.clone();
    let socials_src = self.socials_src.clone();
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
      let _ = tx.send(load_portfolio(&client, &content_src, &socials_src).await);
    });
    self.load_rx = Some(rx);
  }

  /// Poll the in-flight load without blocking the draw loop.
  pub fn check_pending(&mut self) -> Result<()> {
    if let Some(mut rx) = self.load_rx.take() {
      match rx.try_recv() {
        Ok(result) => {
          self.status_message = None;
          match result {
            Ok((library, socials)) => {
              info!(videos = library.videos.len(), "load complete");
              self.index = Some(SearchIndex::build(&library));
              self.library = library;
              self.socials = socials;
              self.load_state = LoadState::Ready;
              self.list_state.select(Some(0));
            }
            Err(e) => {
              let msg = format!("{:#}", e);
              self.load_state = LoadState::Failed(msg.clone());
              self.set_error(msg);
            }
          }
        }
        Err(oneshot::error::TryRecvError::Empty) => {
          self.load_rx = Some(rx);
        }
        Err(oneshot::error::TryRecvError::Closed) => {
          self.status_message = None;
          let msg = "Load task failed.".to_string();
          self.load_state = LoadState::Failed(msg.clone());
          self.set_error(msg);
        }
      }
    }
    Ok(())
  }

  // --- Search debounce ---

  /// Note a keystroke in the search box. The query takes effect only after
  /// the debounce interval with no further edits.
  pub fn note_query_edit(&mut self) {
    self.pending_search_at = Some(Instant::now());
    self.recall_index = None;
  }

  /// Apply the pending query once the debounce interval has elapsed.
  /// Called every tick from the run loop.
  pub fn poll_debounce(&mut self) {
    if let Some(t) = self.pending_search_at
      && t.elapsed() >= Duration::from_millis(constants().search_debounce_ms)
    {
      self.apply_query();
    }
  }

  /// Apply the live input buffer as the active query immediately.
  pub fn apply_query(&mut self) {
    self.pending_search_at = None;
    if self.view.query == self.query_input {
      return;
    }
    self.view.query = self.query_input.clone();
    // Entering a search resets the channel chips, like clicking one clears
    // the search box.
    if !self.view.query.trim().is_empty() {
      self.view.channel = None;
      debug!(query = %self.view.query, "search applied");
      self.prefs.push_recent(&self.view.query);
      self.prefs.save();
    }
    self.list_state.select(Some(0));
  }

  /// Clear both the live buffer and the applied query.
  pub fn clear_query(&mut self) {
    self.query_input.clear();
    self.cursor_position = 0;
    self.input_scroll = 0;
    self.pending_search_at = None;
    self.recall_index = None;
    self.view.query.clear();
    self.list_state.select(Some(0));
  }

  /// Recall a recent search into the input buffer (Up/Down in search mode).
  pub fn recall_recent(&mut self, backwards: bool) {
    if self.prefs.recent_searches.is_empty() {
      return;
    }
    let len = self.prefs.recent_searches.len();
    let next = match (self.recall_index, backwards) {
      (None, true) => 0,
      (None, false) => len - 1,
      (Some(i), true) => (i + 1) % len,
      (Some(i), false) => (i + len - 1) % len,
    };
    self.recall_index = Some(next);
    self.query_input = self.prefs.recent_searches[next].clone();
    self.cursor_position = self.query_input.chars().count();
    self.pending_search_at = Some(Instant::now());
  }

  // --- State cycling ---

  pub fn cycle_view(&mut self) {
    self.view.view = self.view.view.next();
    self.list_state.select(Some(0));
  }

  pub fn set_facet(&mut self, facet: Facet) {
    self.view.facet = facet;
    // Channel chips are rebuilt from the newly reachable set; a vanished
    // selection would filter everything out.
    if let Some(ref active) = self.view.channel
      && !channel_options(&self.view, &self.library).iter().any(|(id, _)| id == active)
    {
      self.view.channel = None;
    }
    self.list_state.select(Some(0));
  }

  /// Cycle language: all → en → es → de → all.
  pub fn cycle_language(&mut self) {
    let langs = &constants().supported_languages;
    let next = match self.view.language.as_deref() {
      None => langs.first().cloned(),
      Some(current) => {
        let idx = langs.iter().position(|l| l == current);
        match idx {
          Some(i) if i + 1 < langs.len() => Some(langs[i + 1].clone()),
          _ => None,
        }
      }
    };
    self.view.language = next;
    self.view.channel = None;
    self.prefs.language = Some(self.view.language.clone().unwrap_or_else(|| "all".to_string()));
    self.prefs.save();
    self.list_state.select(Some(0));
  }

  /// Cycle the channel filter through the currently reachable channels.
  pub fn cycle_channel(&mut self, forward: bool) {
    let options = channel_options(&self.view, &self.library);
    if options.is_empty() {
      self.view.channel = None;
      return;
    }
    let current = self.view.channel.as_deref().and_then(|c| options.iter().position(|(id, _)| id == c));
    let next: Option<usize> = match (current, forward) {
      (None, true) => Some(0),
      (None, false) => Some(options.len() - 1),
      (Some(i), true) => {
        if i + 1 < options.len() {
          Some(i + 1)
        } else {
          None
        }
      }
      (Some(i), false) => {
        if i > 0 {
          Some(i - 1)
        } else {
          None
        }
      }
    };
    self.view.channel = next.map(|i| options[i].0.clone());
    // Selecting a channel clears the search box, like the chips do.
    if self.view.channel.is_some() && !self.view.query.is_empty() {
      self.clear_query();
    }
    self.list_state.select(Some(0));
  }

  pub fn next_theme(&mut self) {
    self.theme_index = (self.theme_index + 1) % THEMES.len();
    self.prefs.theme_name = Some(self.theme().name.to_string());
    self.prefs.save();
  }

  /// Row count of the currently visible list, for selection movement.
  pub fn visible_len(&self) -> usize {
    match self.view.view {
      View::Socials => Platform::ALL
        .iter()
        .map(|&p| {
          let group = self.socials.group(p);
          if group.items.is_empty() { 0 } else { 1 + group.items.len() }
        })
        .sum(),
      _ => match self.index {
        Some(ref index) => {
          let visible = derive_visible(&self.view, &self.library, index);
          if self.view.view == View::Videos { visible.videos.len() } else { visible.playlists.len() }
        }
        None => 0,
      },
    }
  }

  /// Keep the list selection within the visible range, which shrinks and
  /// grows as filters change.
  pub fn clamp_selection(&mut self, visible_len: usize) {
    if visible_len == 0 {
      self.list_state.select(None);
    } else {
      let sel = self.list_state.selected().unwrap_or(0);
      if sel >= visible_len {
        self.list_state.select(Some(visible_len - 1));
      } else if self.list_state.selected().is_none() {
        self.list_state.select(Some(0));
      }
    }
  }

  pub fn move_selection(&mut self, down: bool, visible_len: usize) {
    if visible_len == 0 {
      return;
    }
    let i = match (self.list_state.selected(), down) {
      (Some(i), true) => (i + 1) % visible_len,
      (Some(i), false) => {
        if i == 0 {
          visible_len - 1
        } else {
          i - 1
        }
      }
      (None, _) => 0,
    };
    self.list_state.select(Some(i));
  }
}
