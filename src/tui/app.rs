// TUI application state
//
// Holds the latest published snapshot plus view-only state (theme, logs
// toggle, toast). The snapshot is replaced wholesale on every refresh tick;
// nothing here feeds back into the ledger.

use super::components::Toast;
use super::theme::{Theme, ThemeKind};
use crate::config::Config;
use crate::ledger::format::format_large_number;
use crate::ledger::magnitude::{humanize, NamerOptions};
use crate::ledger::{Currency, Ledger, Snapshot};
use crate::logging::LogBuffer;
use std::time::Instant;

/// Main application state for the TUI
pub struct App {
    /// Most recent snapshot from the refresh loop
    pub snapshot: Snapshot,

    /// Constants shown in the info panel
    pub ledger: Ledger,

    /// Presentation knobs for humanized amounts
    pub namer: NamerOptions,

    /// Snapshots received since startup
    pub ticks: u64,

    /// Current color theme
    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// Log buffer for system logs display
    pub log_buffer: LogBuffer,

    /// Whether the logs panel is visible
    pub show_logs: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Active toast notification
    pub toast: Option<Toast>,
}

impl App {
    pub fn new(snapshot: Snapshot, ledger: Ledger, config: &Config, log_buffer: LogBuffer) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!("Unknown theme {:?}, falling back to default", config.theme);
            ThemeKind::default()
        });

        Self {
            snapshot,
            ledger,
            namer: config.display.namer_options(),
            ticks: 0,
            theme_kind,
            theme: theme_kind.theme(),
            log_buffer,
            show_logs: config.display.show_logs,
            should_quit: false,
            start_time: Instant::now(),
            toast: None,
        }
    }

    /// Replace the displayed snapshot
    pub fn update(&mut self, snapshot: Snapshot) {
        if snapshot.periods != self.snapshot.periods {
            tracing::info!(
                "Debt doubled: period {} -> {}",
                self.snapshot.periods,
                snapshot.periods
            );
            self.show_toast("Debt doubled!");
        }
        self.snapshot = snapshot;
        self.ticks += 1;
    }

    /// Grouped full-precision amount, without the currency sign
    pub fn formatted_amount(&self, currency: Currency) -> String {
        format_large_number(self.snapshot.amount(currency))
    }

    /// "≈ 1.5 million dollars"
    pub fn humanized_amount(&self, currency: Currency) -> String {
        let magnitude = humanize(self.snapshot.amount(currency), &self.namer);
        format!("≈ {} {}", magnitude, currency.plural())
    }

    pub fn countdown(&self) -> String {
        self.snapshot.countdown.to_string()
    }

    /// Get uptime as formatted string (HH:MM:SS)
    pub fn uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
    }

    pub fn cycle_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
        tracing::debug!("Theme switched to {}", self.theme_kind.name());
        self.show_toast(format!("Theme: {}", self.theme_kind.name()));
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }
}
