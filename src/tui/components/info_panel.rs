// Info panel component
//
// The fixed inputs behind the numbers: start date, initial amount, doubling
// period and exchange rate. Labels on the left, values right-aligned.

use crate::ledger::format::format_large_number;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Rows in the panel, borders included
pub const HEIGHT: u16 = 6;

/// (label, value) pairs shown in the panel
pub fn rows(app: &App) -> Vec<(&'static str, String)> {
    let schedule = app.ledger.schedule();
    let principal = schedule.principal();
    let interval_days = schedule.interval().num_days();

    let period = if interval_days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", interval_days)
    };

    vec![
        (
            "Started on:",
            schedule.epoch().format("%Y-%m-%d").to_string(),
        ),
        (
            "Initial amount:",
            format!(
                "${} (₽{})",
                format_large_number(principal),
                format_large_number(app.ledger.convert(principal))
            ),
        ),
        ("Doubles every:", period),
        (
            "Exchange rate:",
            format!("1 USD = {} RUB", app.ledger.exchange_rate()),
        ),
    ]
}

/// Label and value on one line, value pushed to the right edge
fn justify<'a>(label: &'a str, value: String, width: u16, app: &App) -> Line<'a> {
    let used = label.width() + value.width();
    let gap = (width as usize).saturating_sub(used).max(1);

    Line::from(vec![
        Span::styled(label, Style::default().fg(app.theme.muted)),
        Span::raw(" ".repeat(gap)),
        Span::styled(value, Style::default().fg(app.theme.foreground)),
    ])
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let inner_width = area.width.saturating_sub(4);

    let lines: Vec<Line> = rows(app)
        .into_iter()
        .map(|(label, value)| justify(label, value, inner_width, app))
        .collect();

    let info = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border))
            .padding(ratatui::widgets::Padding::horizontal(1)),
    );

    f.render_widget(info, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ledger::Ledger;
    use crate::logging::LogBuffer;

    #[test]
    fn test_rows_show_constants() {
        let ledger = Ledger::standard();
        let snapshot = ledger.snapshot(ledger.schedule().epoch());
        let app = App::new(snapshot, ledger, &Config::default(), LogBuffer::new());

        let rows = rows(&app);
        assert_eq!(rows[0], ("Started on:", "2021-04-28".to_string()));
        assert_eq!(
            rows[1],
            ("Initial amount:", "$324,000 (₽31,428,000)".to_string())
        );
        assert_eq!(rows[2], ("Doubles every:", "7 days".to_string()));
        assert_eq!(rows[3], ("Exchange rate:", "1 USD = 97 RUB".to_string()));
    }
}
