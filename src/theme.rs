// Theme support for the TUI
//
// Provides color palettes that can be configured via config file.
// "auto" uses terminal's ANSI palette, named themes use true color (RGB).

use ratatui::style::Color;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // UI element colors
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub accent: Color,
    pub status_bar: Color,
    pub error: Color,
    pub loading: Color,
}

impl Theme {
    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            _ => Self::auto(), // "auto" or unknown
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            background: Color::Reset,
            foreground: Color::White,
            muted: Color::Gray,
            title: Color::Cyan,
            border: Color::DarkGray,
            highlight: Color::Yellow,
            accent: Color::Green,
            status_bar: Color::Green,
            error: Color::Red,
            loading: Color::Cyan,
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            background: Color::Rgb(0x28, 0x2a, 0x36),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            muted: Color::Rgb(0x62, 0x72, 0xa4), // comment
            title: Color::Rgb(0x8b, 0xe9, 0xfd), // cyan
            border: Color::Rgb(0x62, 0x72, 0xa4), // comment
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c), // yellow
            accent: Color::Rgb(0x50, 0xfa, 0x7b), // green
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b), // green
            error: Color::Rgb(0xff, 0x55, 0x55), // red
            loading: Color::Rgb(0xbd, 0x93, 0xf9), // purple
        }
    }

    /// Nord theme - https://nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            background: Color::Rgb(0x2e, 0x34, 0x40),
            foreground: Color::Rgb(0xec, 0xef, 0xf4),
            muted: Color::Rgb(0x4c, 0x56, 0x6a), // polar night
            title: Color::Rgb(0x88, 0xc0, 0xd0), // frost cyan
            border: Color::Rgb(0x4c, 0x56, 0x6a), // polar night
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b), // aurora yellow
            accent: Color::Rgb(0xa3, 0xbe, 0x8c), // aurora green
            status_bar: Color::Rgb(0xa3, 0xbe, 0x8c), // aurora green
            error: Color::Rgb(0xbf, 0x61, 0x6a), // aurora red
            loading: Color::Rgb(0xb4, 0x8e, 0xad), // aurora purple
        }
    }

    /// Gruvbox theme - https://github.com/morhetz/gruvbox
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            background: Color::Rgb(0x28, 0x28, 0x28),
            foreground: Color::Rgb(0xeb, 0xdb, 0xb2),
            muted: Color::Rgb(0x92, 0x83, 0x74), // gray
            title: Color::Rgb(0x83, 0xa5, 0x98), // aqua
            border: Color::Rgb(0x92, 0x83, 0x74), // gray
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f), // yellow
            accent: Color::Rgb(0xb8, 0xbb, 0x26), // green
            status_bar: Color::Rgb(0xb8, 0xbb, 0x26), // green
            error: Color::Rgb(0xfb, 0x49, 0x34), // red
            loading: Color::Rgb(0xd3, 0x86, 0x9b), // purple
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}
