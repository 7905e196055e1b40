/// Responsive breakpoints for the dashboard layout.
///
/// Width thresholds live here so render code never compares raw column counts.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 50 cols: drop the humanized lines and the info panel
    Compact,
    /// 50-89 cols: everything, stacked tightly
    Normal,
    /// 90+ cols: amounts centered with side margins
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=49 => Breakpoint::Compact,
            50..=89 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }
}

/// Rows needed to show `text_width` columns of wrapped text in `inner_width`
pub fn wrapped_rows(text_width: usize, inner_width: u16) -> u16 {
    if inner_width == 0 {
        return 1;
    }
    let rows = text_width.div_ceil(inner_width as usize).max(1);
    rows.min(u16::MAX as usize) as u16
}

/// Rows needed for `text` under greedy word wrapping at `inner_width`
///
/// Matches `Paragraph` with `Wrap { trim: true }`: words move whole to the
/// next row, words wider than the row are split.
pub fn word_wrapped_rows(text: &str, inner_width: u16) -> u16 {
    let width = inner_width as usize;
    if width == 0 {
        return 1;
    }

    let mut rows = 1usize;
    let mut used = 0usize;
    for word in text.split_whitespace().map(UnicodeWidthStr::width) {
        if used > 0 && used + 1 + word <= width {
            used += 1 + word;
            continue;
        }
        if used > 0 {
            rows += 1;
        }
        // Overlong words fill whole rows, the remainder starts the next
        rows += word.saturating_sub(1) / width;
        used = match word % width {
            0 if word > 0 => width,
            rest => rest,
        };
    }
    rows.min(u16::MAX as usize) as u16
}
