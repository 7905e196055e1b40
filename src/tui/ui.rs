// Dashboard layout - called on every frame
//
// Vertical stack, top to bottom:
//   title │ USD │ RUB │ countdown │ info │ disclaimer │ [logs] │ status
// Amount panels get exactly the rows their wrapped text needs; whatever is
// left over goes to a filler so the stack stays top-aligned.

use super::app::App;
use super::components::{
    amount_panel, countdown_panel, disclaimer, info_panel, logs_panel, status_bar, title_bar,
};
use super::layout::Breakpoint;
use crate::ledger::Currency;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Horizontal margin applied on wide terminals
const WIDE_MARGIN: u16 = 6;

/// Sections of the dashboard, in drawing order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Title,
    Amount(Currency),
    Countdown,
    Info,
    Disclaimer,
    Filler,
    Logs,
    Status,
}

/// Column range used for content at this frame width
fn content_area(area: Rect) -> Rect {
    if Breakpoint::from_width(area.width).at_least(Breakpoint::Wide) {
        area.inner(ratatui::layout::Margin::new(WIDE_MARGIN, 0))
    } else {
        area
    }
}

fn sections(app: &App, width: u16) -> Vec<(Section, Constraint)> {
    let bp = Breakpoint::from_width(width);
    let mut sections = vec![
        (Section::Title, Constraint::Length(3)),
        (
            Section::Amount(Currency::Usd),
            Constraint::Length(amount_panel::height(app, Currency::Usd, width)),
        ),
        (
            Section::Amount(Currency::Rub),
            Constraint::Length(amount_panel::height(app, Currency::Rub, width)),
        ),
        (Section::Countdown, Constraint::Length(3)),
    ];

    if bp.at_least(Breakpoint::Normal) {
        sections.push((Section::Info, Constraint::Length(info_panel::HEIGHT)));
        sections.push((Section::Disclaimer, Constraint::Length(disclaimer::height(width))));
    }

    sections.push((Section::Filler, Constraint::Min(0)));

    if app.show_logs {
        sections.push((Section::Logs, Constraint::Length(logs_panel::HEIGHT)));
    }
    sections.push((Section::Status, Constraint::Length(2)));
    sections
}

pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let area = content_area(f.area());
    let sections = sections(app, area.width);
    let chunks = Layout::vertical(sections.iter().map(|(_, c)| *c)).split(area);

    for ((section, _), chunk) in sections.iter().zip(chunks.iter()) {
        let chunk = *chunk;
        match section {
            Section::Title => title_bar::render(f, chunk, app),
            Section::Amount(currency) => amount_panel::render(f, chunk, app, *currency),
            Section::Countdown => countdown_panel::render(f, chunk, app),
            Section::Info => info_panel::render(f, chunk, app),
            Section::Disclaimer => disclaimer::render(f, chunk, app),
            Section::Logs => logs_panel::render(f, chunk, app),
            Section::Status => status_bar::render(f, chunk, app),
            Section::Filler => {}
        }
    }

    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    app.clear_expired_toast();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ledger::Ledger;
    use crate::logging::LogBuffer;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app() -> App {
        let ledger = Ledger::standard();
        let snapshot = ledger.snapshot(ledger.schedule().epoch());
        App::new(snapshot, ledger, &Config::default(), LogBuffer::new())
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_sections_by_width() {
        let mut app = app();
        let wide: Vec<Section> = sections(&app, 100).into_iter().map(|(s, _)| s).collect();
        assert!(wide.contains(&Section::Info));
        assert!(!wide.contains(&Section::Logs));

        let compact: Vec<Section> = sections(&app, 40).into_iter().map(|(s, _)| s).collect();
        assert!(!compact.contains(&Section::Info));

        app.toggle_logs();
        let with_logs: Vec<Section> = sections(&app, 100).into_iter().map(|(s, _)| s).collect();
        assert!(with_logs.contains(&Section::Logs));
        assert_eq!(with_logs.last(), Some(&Section::Status));
    }

    #[test]
    fn test_draw_renders_published_values() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();

        terminal.draw(|f| draw(f, &mut app)).unwrap();
        let text = screen_text(&terminal);

        assert!(text.contains("How much does Google owe Russia?"));
        assert!(text.contains("$324,000"));
        assert!(text.contains("31,428,000"));
        assert!(text.contains("324 thousand dollars"));
        assert!(text.contains("7d 0h 0m 0s"));
        assert!(text.contains("2021-04-28"));
    }

    #[test]
    fn test_disclaimer_fully_visible_at_common_widths() {
        for width in [60, 80, 100, 120] {
            let mut app = app();
            let mut terminal = Terminal::new(TestBackend::new(width, 40)).unwrap();
            terminal.draw(|f| draw(f, &mut app)).unwrap();
            let text = screen_text(&terminal);

            assert!(text.contains("grace period"), "footnote cut at width {width}");
            assert!(text.contains("months."), "footnote cut at width {width}");
            assert!(text.contains("purposes only."), "notice cut at width {width}");
        }
    }

    #[test]
    fn test_draw_survives_tiny_terminal() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(10, 5)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
    }

    #[test]
    fn test_draw_handles_overflowed_amount() {
        let mut app = app();
        let far_future = app.ledger.snapshot(chrono::DateTime::<chrono::Utc>::MAX_UTC);
        app.update(far_future);

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("∞"));
    }
}
