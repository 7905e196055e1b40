// debtclock - How much does Google owe Russia?
//
// A live terminal dashboard for a satirical debt that started at $324,000 on
// 2021-04-28 and doubles every week, shown in dollars and rubles along with
// a countdown to the next doubling.
//
// Architecture:
// - Ledger: pure arithmetic (growth, countdown, magnitude names, formatting)
// - Refresh loop (tokio): recomputes a Snapshot each tick, publishes on a
//   watch channel
// - TUI (ratatui): renders the latest Snapshot
// - Headless mode: prints one line per published Snapshot to stdout

mod cli;
mod config;
mod ledger;
mod logging;
mod refresh;
mod startup;
mod tui;

use anyhow::Result;
use cli::CliOutcome;
use config::Config;
use ledger::format::format_large_number;
use ledger::magnitude::{humanize, NamerOptions};
use ledger::{Currency, Ledger, Snapshot};
use logging::LogBuffer;
use refresh::RefreshLoop;

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (snapshot, config --show/--reset/--path)
    // If a command was handled, exit early
    let headless = match cli::handle_cli()? {
        CliOutcome::Handled => return Ok(()),
        CliOutcome::Run { headless } => headless,
    };

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    if headless {
        config.enable_tui = false;
    }

    // In TUI mode logs go to the buffer (prevents garbling the display),
    // in headless mode to stderr. The guard flushes the file writer on drop.
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config.logging, config.enable_tui, &log_buffer);

    let ledger = Ledger::standard();

    startup::print_startup(&config, &ledger);
    startup::log_startup(&config, &ledger);

    if config.enable_tui {
        tracing::info!("Starting TUI");
        if let Err(e) = tui::run_tui(config, ledger, log_buffer).await {
            tracing::error!("TUI error: {:?}", e);
            return Err(e);
        }
    } else {
        tracing::info!("TUI disabled, running in headless mode");
        run_headless(&config, ledger).await?;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Print one line per published snapshot until Ctrl+C
async fn run_headless(config: &Config, ledger: Ledger) -> Result<()> {
    let namer = config.display.namer_options();
    let (refresh, mut snapshot_rx) = RefreshLoop::new(ledger)
        .with_period(config.display.tick_period())
        .start();

    println!("{}", headless_line(&snapshot_rx.borrow_and_update(), &namer));

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutting down...");
                break;
            }
            changed = snapshot_rx.changed() => {
                if changed.is_err() {
                    tracing::warn!("Refresh loop ended unexpectedly");
                    break;
                }
                println!("{}", headless_line(&snapshot_rx.borrow_and_update(), &namer));
            }
        }
    }

    refresh.cancel().await
}

/// Single status line for headless output
fn headless_line(snapshot: &Snapshot, namer: &NamerOptions) -> String {
    format!(
        "{} | {}{} | {}{} | next doubling in {} | ≈ {} {}",
        snapshot.taken_at.format("%Y-%m-%dT%H:%M:%SZ"),
        Currency::Usd.symbol(),
        format_large_number(snapshot.primary),
        Currency::Rub.symbol(),
        format_large_number(snapshot.secondary),
        snapshot.countdown,
        humanize(snapshot.primary, namer),
        Currency::Usd.plural(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_line_at_epoch() {
        let ledger = Ledger::standard();
        let snapshot = ledger.snapshot(ledger.schedule().epoch());
        assert_eq!(
            headless_line(&snapshot, &NamerOptions::default()),
            "2021-04-28T04:00:00Z | $324,000 | ₽31,428,000 | next doubling in 7d 0h 0m 0s | ≈ 324 thousand dollars"
        );
    }
}
