//! Static per-language UI strings, mirroring the translation tables the
//! content feed is generated for. Unknown languages fall back to English.

pub struct Strings {
  pub latest: &'static str,
  pub upcoming_title: &'static str,
  pub playlists: &'static str,
  pub socials: &'static str,
  pub search_results: &'static str,
  pub search_placeholder: &'static str,
  pub recent_searches: &'static str,
  pub no_videos: &'static str,
  pub no_playlists: &'static str,
  pub no_socials: &'static str,
  pub coming_soon: &'static str,
  pub scheduled_badge: &'static str,
  pub all: &'static str,
  pub all_videos: &'static str,
  pub long_form: &'static str,
  pub shorts: &'static str,
  pub upcoming: &'static str,
  pub playlist: &'static str,
  pub series: &'static str,
  pub videos_word: &'static str,
  pub support_us: &'static str,
  pub loading: &'static str,
  pub load_failed: &'static str,
}

static EN: Strings = Strings {
  latest: "Latest Uploads",
  upcoming_title: "Upcoming",
  playlists: "Playlists",
  socials: "Socials",
  search_results: "Search Results",
  search_placeholder: "Search videos…",
  recent_searches: "Recent searches",
  no_videos: "No videos found.",
  no_playlists: "No playlists found.",
  no_socials: "Nothing here yet.",
  coming_soon: "Coming Soon",
  scheduled_badge: "Scheduled",
  all: "All",
  all_videos: "All Videos",
  long_form: "Long Format",
  shorts: "Shorts",
  upcoming: "Upcoming",
  playlist: "Playlist",
  series: "Series",
  videos_word: "Videos",
  support_us: "Support Us",
  loading: "Loading content…",
  load_failed: "Unable to load content.",
};

static ES: Strings = Strings {
  latest: "Últimos vídeos",
  upcoming_title: "Próximamente",
  playlists: "Listas",
  socials: "Redes",
  search_results: "Resultados",
  search_placeholder: "Buscar vídeos…",
  recent_searches: "Búsquedas recientes",
  no_videos: "No se encontraron vídeos.",
  no_playlists: "No se encontraron listas.",
  no_socials: "Nada por aquí todavía.",
  coming_soon: "Próximamente",
  scheduled_badge: "Programado",
  all: "Todos",
  all_videos: "Todos los vídeos",
  long_form: "Formato largo",
  shorts: "Shorts",
  upcoming: "Próximos",
  playlist: "Lista",
  series: "Serie",
  videos_word: "Vídeos",
  support_us: "Apóyanos",
  loading: "Cargando contenido…",
  load_failed: "No se pudo cargar el contenido.",
};

static DE: Strings = Strings {
  latest: "Neueste Videos",
  upcoming_title: "Demnächst",
  playlists: "Playlists",
  socials: "Socials",
  search_results: "Suchergebnisse",
  search_placeholder: "Videos suchen…",
  recent_searches: "Letzte Suchen",
  no_videos: "Keine Videos gefunden.",
  no_playlists: "Keine Playlists gefunden.",
  no_socials: "Hier gibt es noch nichts.",
  coming_soon: "Demnächst",
  scheduled_badge: "Geplant",
  all: "Alle",
  all_videos: "Alle Videos",
  long_form: "Langformat",
  shorts: "Shorts",
  upcoming: "Demnächst",
  playlist: "Playlist",
  series: "Reihe",
  videos_word: "Videos",
  support_us: "Unterstütze uns",
  loading: "Inhalte werden geladen…",
  load_failed: "Inhalte konnten nicht geladen werden.",
};

/// UI strings for a language code, falling back to English.
pub fn strings(lang: &str) -> &'static Strings {
  match lang {
    "es" => &ES,
    "de" => &DE,
    _ => &EN,
  }
}

/// Human-readable name for a language code, for the language chip.
pub fn language_name(lang: &str) -> &'static str {
  match lang {
    "en" => "English",
    "es" => "Español",
    "de" => "Deutsch",
    _ => "English",
  }
}
