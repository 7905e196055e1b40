// Startup module - banner printed before the dashboard takes over
//
// Shows version, where config came from, the run mode and the fixed inputs
// of the ledger. The same summary is mirrored into the log so it shows up in
// the TUI's System Logs panel.

use crate::config::{Config, VERSION};
use crate::ledger::format::format_large_number;
use crate::ledger::Ledger;

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// "TUI" or "headless"
fn mode_label(config: &Config) -> &'static str {
    if config.enable_tui {
        "TUI"
    } else {
        "headless"
    }
}

/// Lines describing the fixed inputs, shared by banner and log
fn ledger_summary(ledger: &Ledger) -> Vec<String> {
    let schedule = ledger.schedule();
    vec![
        format!("epoch      {}", schedule.epoch().format("%Y-%m-%d %H:%M UTC")),
        format!("principal  ${}", format_large_number(schedule.principal())),
        format!("doubles    every {} days", schedule.interval().num_days()),
        format!("rate       1 USD = {} RUB", ledger.exchange_rate()),
    ]
}

/// Build the startup banner
fn banner(config: &Config, ledger: &Ledger) -> String {
    use colors::*;
    use std::fmt::Write;

    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "  {BOLD}{CYAN}debtclock{RESET} {DIM}v{VERSION}{RESET}");
    let _ = writeln!(out, "  {DIM}How much does Google owe Russia?{RESET}");
    let _ = writeln!(out);

    if let Some(path) = Config::config_path() {
        if path.exists() {
            let _ = writeln!(out, "  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            let _ = writeln!(out, "  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }
    let _ = writeln!(out);

    for line in ledger_summary(ledger) {
        let _ = writeln!(out, "    {DIM}{line}{RESET}");
    }
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "  {MAGENTA}▸{RESET} Mode {BOLD}{}{RESET} {DIM}(refresh every {} ms){RESET}",
        mode_label(config),
        config.display.tick_millis
    );
    let _ = writeln!(out);
    out
}

/// Print the startup banner
///
/// Runs before the TUI takes over the screen. In headless mode it goes to
/// stderr so stdout carries only tick lines.
pub fn print_startup(config: &Config, ledger: &Ledger) {
    let banner = banner(config, ledger);
    if config.enable_tui {
        print!("{banner}");
    } else {
        eprint!("{banner}");
    }
}

/// Mirror the banner into the log
pub fn log_startup(config: &Config, ledger: &Ledger) {
    tracing::info!("debtclock v{}", VERSION);
    for line in ledger_summary(ledger) {
        tracing::info!("  {}", line);
    }
    tracing::info!(
        "▸ {} mode, refresh every {} ms",
        mode_label(config),
        config.display.tick_millis
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_summary_lists_constants() {
        let lines = ledger_summary(&Ledger::standard());
        assert_eq!(lines[0], "epoch      2021-04-28 04:00 UTC");
        assert_eq!(lines[1], "principal  $324,000");
        assert_eq!(lines[2], "doubles    every 7 days");
        assert_eq!(lines[3], "rate       1 USD = 97 RUB");
    }

    #[test]
    fn test_banner_contents() {
        let mut config = Config::default();
        config.enable_tui = false;
        let banner = banner(&config, &Ledger::standard());

        assert!(banner.contains(VERSION));
        assert!(banner.contains("principal  $324,000"));
        assert!(banner.contains("headless"));
    }

    #[test]
    fn test_mode_label() {
        let mut config = Config::default();
        assert_eq!(mode_label(&config), "TUI");
        config.enable_tui = false;
        assert_eq!(mode_label(&config), "headless");
    }
}
