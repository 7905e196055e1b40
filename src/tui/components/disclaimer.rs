// Disclaimer footer

use crate::tui::app::App;
use crate::tui::layout::word_wrapped_rows;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

const SATIRE: &str =
    "This is a satirical display. Numbers are fictional and for entertainment purposes only.";
const FOOTNOTE: &str = "* Current amount is calculated based on the amount owed after the grace period of nine months.";

/// Rows the footer needs at the given width
pub fn height(width: u16) -> u16 {
    word_wrapped_rows(SATIRE, width).saturating_add(word_wrapped_rows(FOOTNOTE, width))
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let style = Style::default().fg(app.theme.muted);

    let footer = Paragraph::new(vec![
        Line::styled(SATIRE, style).centered(),
        Line::styled(FOOTNOTE, style).centered(),
    ])
    .wrap(Wrap { trim: true });

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_follows_width() {
        assert_eq!(height(200), 2);
        assert_eq!(height(96), 2);
        // Both lines wrap once at 80 columns
        assert_eq!(height(80), 4);
        assert_eq!(height(40), 6);
    }
}
