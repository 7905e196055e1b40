//! Display configuration
//!
//! Refresh cadence and the magnitude namer's presentation knobs.

use crate::ledger::magnitude::{NamerOptions, Rounding, DEFAULT_DECIMALS, DEFAULT_NOTATION_CUTOFF};
use serde::Deserialize;
use std::time::Duration;

/// Refresh and number presentation settings
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Refresh loop period in milliseconds
    pub tick_millis: u64,
    /// Show the system logs panel on startup
    pub show_logs: bool,
    /// Decimal places on humanized amounts
    pub decimals: u32,
    /// Unit index above which "(10^N)" is appended
    pub notation_cutoff: usize,
    /// Tie-break for humanized amounts
    pub rounding: Rounding,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_millis: 1000,
            show_logs: false,
            decimals: DEFAULT_DECIMALS,
            notation_cutoff: DEFAULT_NOTATION_CUTOFF,
            rounding: Rounding::default(),
        }
    }
}

/// Display settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileDisplay {
    pub tick_millis: Option<u64>,
    pub show_logs: Option<bool>,
    pub decimals: Option<u32>,
    pub notation_cutoff: Option<usize>,
    pub rounding: Option<String>,
}

impl DisplayConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileDisplay>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            tick_millis: file.tick_millis.unwrap_or(defaults.tick_millis),
            show_logs: file.show_logs.unwrap_or(defaults.show_logs),
            // More than 6 places is noise at these magnitudes
            decimals: file.decimals.unwrap_or(defaults.decimals).min(6),
            notation_cutoff: file.notation_cutoff.unwrap_or(defaults.notation_cutoff),
            rounding: file
                .rounding
                .map(|s| Rounding::from_name(&s))
                .unwrap_or(defaults.rounding),
        }
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    pub fn namer_options(&self) -> NamerOptions {
        NamerOptions {
            decimals: self.decimals,
            notation_cutoff: self.notation_cutoff,
            rounding: self.rounding,
        }
    }
}
