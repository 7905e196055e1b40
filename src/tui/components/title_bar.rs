// Title bar component
//
// The headline question in two colors, with key hints on the border.

use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const HEADLINE_LEFT: &str = "How much does Google ";
const HEADLINE_RIGHT: &str = "owe Russia?";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bold = Modifier::BOLD;

    let line = Line::from(vec![
        Span::styled(HEADLINE_LEFT, Style::default().fg(theme.title).add_modifier(bold)),
        Span::styled(
            HEADLINE_RIGHT,
            Style::default().fg(theme.title_accent).add_modifier(bold),
        ),
    ]);

    let title = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title_top(Line::from(" t theme · l logs · q quit ").right_aligned()),
    );

    f.render_widget(title, area);
}
