//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Serialize config to TOML string
    pub fn to_toml(&self) -> String {
        format!(
            r#"# debtclock configuration

# Theme: Midnight, Terminal, Paper (press 't' in the TUI to cycle)
theme = "{theme}"

# Print one line per tick instead of running the TUI
headless = {headless}

[display]
# Refresh period in milliseconds
tick_millis = {tick_millis}
# Show the system logs panel on startup (toggle with 'l')
show_logs = {show_logs}
# Decimal places on humanized amounts ("1.5 million")
decimals = {decimals}
# Append "(10^N)" after unit names past this index (10 = nonillion)
notation_cutoff = {cutoff}
# half_away_from_zero or half_even
rounding = "{rounding}"

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            headless = !self.enable_tui,
            tick_millis = self.display.tick_millis,
            show_logs = self.display.show_logs,
            decimals = self.display.decimals,
            cutoff = self.display.notation_cutoff,
            rounding = self.display.rounding.as_str(),
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display().to_string().replace('\\', "/"),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
