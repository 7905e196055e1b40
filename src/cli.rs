// CLI module - command-line argument parsing and handlers
//
// Provides one-shot subcommands alongside the dashboard:
// - snapshot: Print the debt at now (or --at) as text or JSON
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --path: Show config file path

use crate::config::{Config, VERSION};
use crate::ledger::format::format_large_number;
use crate::ledger::magnitude::{humanize, NamerOptions};
use crate::ledger::{Currency, Ledger, Snapshot};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;

/// debtclock - How much does Google owe Russia?
#[derive(Parser)]
#[command(name = "debtclock")]
#[command(version = VERSION)]
#[command(about = "Live dashboard of a debt that doubles every week", long_about = None)]
pub struct Cli {
    /// Print one line per tick instead of running the TUI
    #[arg(long)]
    pub headless: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the debt at a single instant and exit
    Snapshot {
        /// RFC 3339 timestamp to evaluate at (default: now)
        #[arg(long)]
        at: Option<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// What main should do after argument handling
pub enum CliOutcome {
    /// A subcommand ran to completion; exit
    Handled,
    /// Run the dashboard
    Run { headless: bool },
}

/// Parse arguments and run any one-shot subcommand
pub fn handle_cli() -> Result<CliOutcome> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Snapshot { at, json }) => {
            handle_snapshot(at.as_deref(), json)?;
            Ok(CliOutcome::Handled)
        }
        Some(Commands::Config { show, reset, path }) => {
            if path {
                handle_config_path();
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset()?;
            } else {
                // No flag provided, show help
                println!("Usage: debtclock config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            Ok(CliOutcome::Handled)
        }
        None => Ok(CliOutcome::Run {
            headless: cli.headless,
        }),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// snapshot
// ─────────────────────────────────────────────────────────────────────────────

/// One currency's line in a snapshot report
#[derive(Debug, Serialize)]
pub struct AmountReport {
    pub currency: Currency,
    pub value: f64,
    pub formatted: String,
    /// Namer output: scaled value and its unit string
    pub scaled: f64,
    pub unit: String,
    pub humanized: String,
}

/// Serializable view of a snapshot with presentation strings attached
#[derive(Debug, Serialize)]
pub struct SnapshotReport {
    pub taken_at: DateTime<Utc>,
    pub periods: i64,
    pub next_doubling: DateTime<Utc>,
    pub countdown: String,
    pub amounts: Vec<AmountReport>,
}

impl SnapshotReport {
    pub fn new(snapshot: &Snapshot, namer: &NamerOptions) -> Self {
        let amounts = [Currency::Usd, Currency::Rub]
            .into_iter()
            .map(|currency| {
                let value = snapshot.amount(currency);
                let magnitude = humanize(value, namer);
                let (scaled, unit) = magnitude.parts();
                AmountReport {
                    currency,
                    value,
                    formatted: format!("{}{}", currency.symbol(), format_large_number(value)),
                    scaled,
                    unit,
                    humanized: magnitude.to_string(),
                }
            })
            .collect();

        Self {
            taken_at: snapshot.taken_at,
            periods: snapshot.periods,
            next_doubling: snapshot.next_doubling,
            countdown: snapshot.countdown.to_string(),
            amounts,
        }
    }

    /// Multi-line human-readable rendering
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "Debt as of {} ({} doublings)\n",
            self.taken_at.format("%Y-%m-%d %H:%M:%S UTC"),
            self.periods
        );
        for amount in &self.amounts {
            out.push_str(&format!(
                "  {}  {}  ≈ {} {}\n",
                amount.currency.code(),
                amount.formatted,
                amount.humanized,
                amount.currency.plural()
            ));
        }
        out.push_str(&format!(
            "  Next doubling {} (in {})\n",
            self.next_doubling.format("%Y-%m-%d %H:%M:%S UTC"),
            self.countdown
        ));
        out
    }
}

/// Parse an RFC 3339 `--at` value into UTC
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("Invalid --at timestamp {raw:?} (expected RFC 3339)"))?;
    Ok(parsed.with_timezone(&Utc))
}

fn handle_snapshot(at: Option<&str>, json: bool) -> Result<()> {
    let now = match at {
        Some(raw) => parse_instant(raw)?,
        None => Utc::now(),
    };

    let config = Config::from_env();
    let snapshot = Ledger::standard().snapshot(now);
    let report = SnapshotReport::new(&snapshot, &config.display.namer_options());

    if json {
        let out =
            serde_json::to_string_pretty(&report).context("Failed to serialize snapshot")?;
        println!("{out}");
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// config
// ─────────────────────────────────────────────────────────────────────────────

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("theme = {:?}", config.theme);
    println!("headless = {}", !config.enable_tui);
    println!();
    println!("[display]");
    println!("tick_millis = {}", config.display.tick_millis);
    println!("show_logs = {}", config.display.show_logs);
    println!("decimals = {}", config.display.decimals);
    println!("notation_cutoff = {}", config.display.notation_cutoff);
    println!("rounding = {:?}", config.display.rounding.as_str());
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!("file_dir = {:?}", config.logging.file_dir.display().to_string());
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    // Write the default config (using Config's single source of truth)
    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}
