mod app;
mod constants;
mod content;
mod input;
mod model;
mod prefs;
mod search;
mod state;
mod theme;
mod translations;
mod ui;

use anyhow::Result;
use clap::Parser;
use directories::ProjectDirs;
use ratatui::{
  DefaultTerminal,
  crossterm::event::{self, Event, KeyEventKind},
};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use app::App;
use constants::constants;
use prefs::Prefs;

// --- CLI ---

#[derive(Parser, Debug)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
struct Args {
  /// Content feed URL or local file path (default: the published feed)
  #[arg(short, long)]
  content: Option<String>,

  /// Socials document URL or local file path
  #[arg(short, long)]
  socials: Option<String>,

  /// Start in this language: 'en', 'es', 'de', or 'all'
  #[arg(short, long)]
  language: Option<String>,
}

/// File-based logging only: stdout belongs to the terminal UI.
fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
  let dirs = ProjectDirs::from("", "", "showreel")?;
  let log_dir = dirs.data_local_dir().join("logs");
  std::fs::create_dir_all(&log_dir).ok()?;

  let writer = tracing_appender::rolling::daily(log_dir, "showreel.log");
  let (writer, guard) = tracing_appender::non_blocking(writer);

  tracing_subscriber::fmt()
    .with_writer(writer)
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_ansi(false)
    .init();

  Some(guard)
}

// --- Main ---

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();
  let _guard = init_tracing();

  let default_hook = std::panic::take_hook();
  std::panic::set_hook(Box::new(move |info| {
    ratatui::restore();
    default_hook(info);
  }));

  let mut terminal = ratatui::init();
  let result = run(&mut terminal, args).await;
  ratatui::restore();
  result
}

async fn run(terminal: &mut DefaultTerminal, args: Args) -> Result<()> {
  let content_src = args.content.unwrap_or_else(|| constants().content_source.clone());
  let socials_src = args.socials.unwrap_or_else(|| constants().socials_source.clone());

  let mut app = App::new(content_src, socials_src, args.language, Prefs::load());
  app.trigger_load();

  loop {
    app.check_pending()?;
    app.expire_error();
    app.poll_debounce();

    terminal.draw(|frame| ui::ui(frame, &mut app))?;

    if event::poll(Duration::from_millis(100))? {
      match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
          input::handle_key_event(&mut app, key);
        }
        _ => {}
      }
    }

    if app.should_quit {
      break;
    }
  }

  Ok(())
}
