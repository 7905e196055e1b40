// Theme system for the TUI
//
// A handful of built-in palettes, switchable at runtime with 't'.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    /// Deep navy with emerald and blue accents
    #[default]
    Midnight,
    /// Uses the terminal's own ANSI palette
    Terminal,
    /// Light background
    Paper,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[ThemeKind::Midnight, ThemeKind::Terminal, ThemeKind::Paper]
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Midnight => "Midnight",
            ThemeKind::Terminal => "Terminal",
            ThemeKind::Paper => "Paper",
        }
    }

    /// Look up a theme by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Midnight => Theme::midnight(),
            ThemeKind::Terminal => Theme::terminal(),
            ThemeKind::Paper => Theme::paper(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_type: BorderType,

    /// Title gradient stand-in
    pub title: Color,
    pub title_accent: Color,

    /// Currency signs and humanized amounts
    pub money: Color,
    /// Countdown digits
    pub countdown: Color,
    /// Toast border
    pub highlight: Color,
    pub status_bar: Color,

    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
    pub log_trace: Color,
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(10, 15, 28),
            foreground: Color::Rgb(243, 244, 246),
            muted: Color::Rgb(156, 163, 175),
            border: Color::Rgb(55, 65, 81),
            border_type: BorderType::Rounded,
            title: Color::Rgb(248, 113, 113),
            title_accent: Color::Rgb(96, 165, 250),
            money: Color::Rgb(52, 211, 153),
            countdown: Color::Rgb(96, 165, 250),
            highlight: Color::Rgb(96, 165, 250),
            status_bar: Color::Rgb(107, 114, 128),
            log_error: Color::Rgb(248, 113, 113),
            log_warn: Color::Rgb(251, 191, 36),
            log_info: Color::Rgb(209, 213, 219),
            log_debug: Color::Rgb(107, 114, 128),
            log_trace: Color::Rgb(75, 85, 99),
        }
    }

    pub fn terminal() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Reset,
            muted: Color::Gray,
            border: Color::DarkGray,
            border_type: BorderType::Plain,
            title: Color::Red,
            title_accent: Color::Blue,
            money: Color::Green,
            countdown: Color::Cyan,
            highlight: Color::Yellow,
            status_bar: Color::DarkGray,
            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Reset,
            log_debug: Color::DarkGray,
            log_trace: Color::DarkGray,
        }
    }

    pub fn paper() -> Self {
        Self {
            background: Color::Rgb(250, 250, 247),
            foreground: Color::Rgb(31, 41, 55),
            muted: Color::Rgb(107, 114, 128),
            border: Color::Rgb(209, 213, 219),
            border_type: BorderType::Rounded,
            title: Color::Rgb(185, 28, 28),
            title_accent: Color::Rgb(29, 78, 216),
            money: Color::Rgb(4, 120, 87),
            countdown: Color::Rgb(29, 78, 216),
            highlight: Color::Rgb(29, 78, 216),
            status_bar: Color::Rgb(107, 114, 128),
            log_error: Color::Rgb(185, 28, 28),
            log_warn: Color::Rgb(180, 83, 9),
            log_info: Color::Rgb(31, 41, 55),
            log_debug: Color::Rgb(107, 114, 128),
            log_trace: Color::Rgb(156, 163, 175),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        ThemeKind::default().theme()
    }
}
