// Amount panel component
//
// One panel per currency: the full grouped amount (wrapping as it grows),
// the humanized line underneath, and for the secondary currency a note on
// the exchange rate used.

use crate::ledger::format::format_integer;
use crate::ledger::Currency;
use crate::tui::app::App;
use crate::tui::layout::{wrapped_rows, Breakpoint};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

fn title(currency: Currency) -> String {
    format!(" Current Debt Amount* ({}) ", currency.code())
}

fn rate_note(app: &App) -> String {
    format!(
        "Based on the average exchange rate of {} RUB per USD as of 2025.",
        format_integer(app.ledger.exchange_rate().round() as u64)
    )
}

fn amount_text(app: &App, currency: Currency) -> String {
    format!("{}{}", currency.symbol(), app.formatted_amount(currency))
}

/// Rows this panel wants at the given outer width, borders included
pub fn height(app: &App, currency: Currency, width: u16) -> u16 {
    let inner = width.saturating_sub(2);
    let bp = Breakpoint::from_width(width);

    let mut rows = wrapped_rows(amount_text(app, currency).width(), inner);
    if bp.at_least(Breakpoint::Normal) {
        rows += wrapped_rows(app.humanized_amount(currency).width(), inner);
        if currency == Currency::Rub {
            rows += wrapped_rows(rate_note(app).width(), inner);
        }
    }
    rows.saturating_add(2)
}

pub fn render(f: &mut Frame, area: Rect, app: &App, currency: Currency) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);

    let mut lines = vec![Line::from(vec![
        Span::styled(
            currency.symbol(),
            Style::default().fg(theme.money).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            app.formatted_amount(currency),
            Style::default().fg(theme.foreground),
        ),
    ])];

    if bp.at_least(Breakpoint::Normal) {
        lines.push(
            Line::styled(
                app.humanized_amount(currency),
                Style::default().fg(theme.money),
            )
            .centered(),
        );
        if currency == Currency::Rub {
            lines.push(Line::styled(rate_note(app), Style::default().fg(theme.muted)).centered());
        }
    }

    let alignment = if bp.at_least(Breakpoint::Wide) {
        Alignment::Center
    } else {
        Alignment::Left
    };

    let panel = Paragraph::new(lines)
        .alignment(alignment)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border))
                .title(Span::styled(title(currency), Style::default().fg(theme.muted))),
        );

    f.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ledger::Ledger;
    use crate::logging::LogBuffer;

    fn app() -> App {
        let ledger = Ledger::standard();
        let snapshot = ledger.snapshot(ledger.schedule().epoch());
        App::new(snapshot, ledger, &Config::default(), LogBuffer::new())
    }

    #[test]
    fn test_titles_and_note() {
        assert_eq!(title(Currency::Usd), " Current Debt Amount* (USD) ");
        assert_eq!(
            rate_note(&app()),
            "Based on the average exchange rate of 97 RUB per USD as of 2025."
        );
    }

    #[test]
    fn test_height_grows_with_content() {
        let app = app();
        // amount + humanized + borders
        assert_eq!(height(&app, Currency::Usd, 80), 4);
        // plus the rate note
        assert_eq!(height(&app, Currency::Rub, 80), 5);
        // compact: amount only
        assert_eq!(height(&app, Currency::Usd, 40), 3);
    }
}
