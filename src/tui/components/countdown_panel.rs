// Countdown panel component

use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let countdown = Paragraph::new(app.countdown())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.countdown)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(Span::styled(" Next Doubling In ", Style::default().fg(theme.muted))),
        );

    f.render_widget(countdown, area);
}
