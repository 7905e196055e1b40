// TUI module - Terminal User Interface
//
// This module manages the terminal dashboard using ratatui. It handles:
// - Terminal initialization and cleanup
// - Mounting the refresh loop on start and cancelling it on exit
// - Event loop (keyboard input, redraw ticks, published snapshots)

pub mod app;
pub mod components;
pub mod layout;
pub mod theme;
pub mod ui;

use crate::config::Config;
use crate::ledger::{Ledger, Snapshot};
use crate::logging::LogBuffer;
use crate::refresh::RefreshLoop;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::watch;

/// Run the TUI
///
/// Sets up the terminal, starts the refresh loop, runs the event loop until
/// the user quits, then cancels the refresh loop and restores the terminal.
pub async fn run_tui(config: Config, ledger: Ledger, log_buffer: LogBuffer) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Mount: Idle -> Running
    let (refresh, mut snapshot_rx) = RefreshLoop::new(ledger.clone())
        .with_period(config.display.tick_period())
        .start();

    let initial = snapshot_rx.borrow_and_update().clone();
    let mut app = App::new(initial, ledger, &config, log_buffer);
    tracing::info!("Dashboard started (theme {})", app.theme_kind.name());

    let result = run_event_loop(&mut terminal, &mut app, &mut snapshot_rx).await;

    // Teardown: release the ticker before touching the terminal
    let cancelled = refresh.cancel().await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result?;
    cancelled
}

/// Main event loop
///
/// Waits on three sources with tokio::select!:
/// 1. Keyboard input
/// 2. Redraw ticks (expires toasts, keeps uptime moving)
/// 3. Snapshots published by the refresh loop
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    snapshot_rx: &mut watch::Receiver<Snapshot>,
) -> Result<()> {
    let mut redraw_interval = tokio::time::interval(Duration::from_millis(250));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            _ = redraw_interval.tick() => {}

            changed = snapshot_rx.changed() => {
                match changed {
                    Ok(()) => {
                        let snapshot = snapshot_rx.borrow_and_update().clone();
                        app.update(snapshot);
                    }
                    Err(_) => {
                        tracing::warn!("Refresh loop ended unexpectedly");
                        app.should_quit = true;
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true
        }
        KeyCode::Char('t') | KeyCode::Char('T') => app.cycle_theme(),
        KeyCode::Char('l') | KeyCode::Char('L') => app.toggle_logs(),
        _ => {}
    }
}
