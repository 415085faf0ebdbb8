//! Terminal color themes and channel accent handling.

use ratatui::style::Color;

pub struct Theme {
  pub name: &'static str,
  pub bg: Color,
  pub fg: Color,
  pub muted: Color,
  pub accent: Color,
  pub border: Color,
  pub highlight_fg: Color,
  pub highlight_bg: Color,
  pub stripe_bg: Color,
  pub status: Color,
  pub error: Color,
  pub key_fg: Color,
  pub key_bg: Color,
  pub chip_active_fg: Color,
  pub chip_active_bg: Color,
}

pub static THEMES: [Theme; 3] = [
  Theme {
    name: "studio",
    bg: Color::Rgb(17, 17, 23),
    fg: Color::Rgb(228, 228, 235),
    muted: Color::Rgb(113, 113, 122),
    accent: Color::Rgb(129, 140, 248),
    border: Color::Rgb(55, 55, 66),
    highlight_fg: Color::Rgb(17, 17, 23),
    highlight_bg: Color::Rgb(129, 140, 248),
    stripe_bg: Color::Rgb(24, 24, 31),
    status: Color::Rgb(110, 231, 183),
    error: Color::Rgb(248, 113, 113),
    key_fg: Color::Rgb(17, 17, 23),
    key_bg: Color::Rgb(113, 113, 122),
    chip_active_fg: Color::Rgb(17, 17, 23),
    chip_active_bg: Color::Rgb(129, 140, 248),
  },
  Theme {
    name: "paper",
    bg: Color::Rgb(250, 248, 242),
    fg: Color::Rgb(40, 38, 34),
    muted: Color::Rgb(140, 134, 122),
    accent: Color::Rgb(191, 97, 42),
    border: Color::Rgb(214, 208, 196),
    highlight_fg: Color::Rgb(250, 248, 242),
    highlight_bg: Color::Rgb(191, 97, 42),
    stripe_bg: Color::Rgb(243, 240, 232),
    status: Color::Rgb(64, 120, 80),
    error: Color::Rgb(178, 52, 52),
    key_fg: Color::Rgb(250, 248, 242),
    key_bg: Color::Rgb(140, 134, 122),
    chip_active_fg: Color::Rgb(250, 248, 242),
    chip_active_bg: Color::Rgb(191, 97, 42),
  },
  Theme {
    name: "midnight",
    bg: Color::Rgb(10, 14, 26),
    fg: Color::Rgb(205, 214, 244),
    muted: Color::Rgb(88, 96, 128),
    accent: Color::Rgb(250, 179, 135),
    border: Color::Rgb(42, 50, 74),
    highlight_fg: Color::Rgb(10, 14, 26),
    highlight_bg: Color::Rgb(250, 179, 135),
    stripe_bg: Color::Rgb(16, 21, 36),
    status: Color::Rgb(148, 226, 213),
    error: Color::Rgb(243, 139, 168),
    key_fg: Color::Rgb(10, 14, 26),
    key_bg: Color::Rgb(88, 96, 128),
    chip_active_fg: Color::Rgb(10, 14, 26),
    chip_active_bg: Color::Rgb(250, 179, 135),
  },
];

/// Parse a channel's `#rrggbb` accent into a terminal color.
/// Anything unparseable falls back to `fallback` (the theme's muted color).
pub fn parse_accent(hex: &str, fallback: Color) -> Color {
  let hex = hex.trim().trim_start_matches('#');
  if hex.len() != 6 {
    return fallback;
  }
  match (u8::from_str_radix(&hex[0..2], 16), u8::from_str_radix(&hex[2..4], 16), u8::from_str_radix(&hex[4..6], 16)) {
    (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
    _ => fallback,
  }
}
