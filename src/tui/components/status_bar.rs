// Status bar component
//
// Uptime, tick count, doubling count and the next doubling date.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let snapshot = &app.snapshot;

    let status_text = if bp.at_least(Breakpoint::Wide) {
        format!(
            " ⏱ {} │ 🔄 {} ticks │ ×2 {} times │ next {} UTC │ theme {}",
            app.uptime(),
            app.ticks,
            snapshot.periods,
            snapshot.next_doubling.format("%Y-%m-%d %H:%M"),
            app.theme_kind.name(),
        )
    } else {
        format!(
            " {} │ ×2 {} │ {}",
            app.uptime(),
            snapshot.periods,
            snapshot.next_doubling.format("%m-%d %H:%M"),
        )
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
