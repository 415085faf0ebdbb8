//! Keyboard handling for browse and search modes.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, AppMode};
use crate::state::{Facet, View};

/// Byte offset of the `char_index`-th character, for editing the query
/// buffer at the cursor.
fn char_to_byte_index(s: &str, char_index: usize) -> usize {
  s.char_indices().nth(char_index).map(|(i, _)| i).unwrap_or(s.len())
}

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
  if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
    app.should_quit = true;
    return;
  }

  match app.mode {
    AppMode::Browse => handle_browse_key(app, key),
    AppMode::Search => handle_search_key(app, key),
  }
}

fn handle_browse_key(app: &mut App, key: KeyEvent) {
  match key.code {
    KeyCode::Char('q') => app.should_quit = true,
    KeyCode::Esc => {
      // Peel back one layer at a time: applied search, then channel
      // selection, then quit.
      if !app.view.query.trim().is_empty() {
        app.clear_query();
      } else if app.view.channel.is_some() {
        app.view.channel = None;
        app.list_state.select(Some(0));
      } else {
        app.should_quit = true;
      }
    }
    KeyCode::Char('/') => {
      app.mode = AppMode::Search;
      app.clear_error();
    }
    KeyCode::Tab => app.cycle_view(),
    KeyCode::Char('1') => app.set_facet(Facet::All),
    KeyCode::Char('2') => app.set_facet(Facet::LongForm),
    KeyCode::Char('3') => app.set_facet(Facet::Shorts),
    KeyCode::Char('4') => app.set_facet(Facet::Upcoming),
    KeyCode::Char('l') => app.cycle_language(),
    KeyCode::Left | KeyCode::Char('h') => app.cycle_channel(false),
    KeyCode::Right => app.cycle_channel(true),
    KeyCode::Down | KeyCode::Char('j') => move_in_list(app, true),
    KeyCode::Up | KeyCode::Char('k') => move_in_list(app, false),
    KeyCode::Char('t') => app.next_theme(),
    KeyCode::Char('r') => app.trigger_load(),
    _ => {}
  }
}

fn move_in_list(app: &mut App, down: bool) {
  let len = app.visible_len();
  app.move_selection(down, len);
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
  match key.code {
    KeyCode::Enter => {
      app.apply_query();
      app.mode = AppMode::Browse;
    }
    KeyCode::Esc => {
      if app.query_input.is_empty() {
        app.mode = AppMode::Browse;
      } else {
        app.clear_query();
      }
    }
    KeyCode::Up => app.recall_recent(true),
    KeyCode::Down => app.recall_recent(false),
    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
      let byte_index = char_to_byte_index(&app.query_input, app.cursor_position);
      app.query_input.insert(byte_index, c);
      app.cursor_position += 1;
      app.note_query_edit();
    }
    KeyCode::Backspace => {
      if app.cursor_position > 0 {
        let byte_index = char_to_byte_index(&app.query_input, app.cursor_position - 1);
        app.query_input.remove(byte_index);
        app.cursor_position -= 1;
        app.note_query_edit();
      }
    }
    KeyCode::Delete => {
      if app.cursor_position < app.query_input.chars().count() {
        let byte_index = char_to_byte_index(&app.query_input, app.cursor_position);
        app.query_input.remove(byte_index);
        app.note_query_edit();
      }
    }
    KeyCode::Left => app.cursor_position = app.cursor_position.saturating_sub(1),
    KeyCode::Right => {
      if app.cursor_position < app.query_input.chars().count() {
        app.cursor_position += 1;
      }
    }
    KeyCode::Home => app.cursor_position = 0,
    KeyCode::End => app.cursor_position = app.query_input.chars().count(),
    _ => {}
  }

  // Keep the selection in range when a view switch follows a cleared query.
  if app.view.view == View::Videos && app.view.query.is_empty() && app.query_input.is_empty() {
    app.clamp_selection(app.visible_len());
  }
}
