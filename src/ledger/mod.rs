// Ledger module - the debt arithmetic behind the display
//
// Everything in here is a pure function of "now" and a handful of fixed
// constants. The refresh loop calls `Ledger::snapshot` once per tick and the
// presentation layer only ever sees the resulting `Snapshot`.
//
// - growth:    weekly doubling from the epoch, next doubling instant
// - countdown: millisecond difference -> days/hours/minutes/seconds
// - magnitude: "1.5 million" style naming of huge numbers
// - format:    grouped full-precision decimal strings

pub mod countdown;
pub mod format;
pub mod growth;
pub mod magnitude;

pub use countdown::Countdown;
pub use growth::DebtSchedule;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Starting amount owed at the epoch, in US dollars
pub const PRINCIPAL_USD: f64 = 324_000.0;

/// Unix timestamp (seconds) the growth is measured from: 2021-04-28T04:00:00Z
pub const EPOCH_UNIX_SECS: i64 = 1_619_582_400;

/// Doubling period: one week in milliseconds
pub const DOUBLING_INTERVAL_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Average exchange rate as of 2025
pub const USD_TO_RUB_RATE: f64 = 97.0;

/// The two currencies the debt is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// Primary currency (the amount the schedule computes)
    Usd,
    /// Secondary currency (primary × exchange rate)
    Rub,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Rub => "RUB",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Rub => "₽",
        }
    }

    /// Plural noun used after a humanized amount ("≈ 1.5 million dollars")
    pub fn plural(&self) -> &'static str {
        match self {
            Currency::Usd => "dollars",
            Currency::Rub => "rubles",
        }
    }
}

/// Everything published to the display surface for a single tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// The wall-clock instant this snapshot was computed for
    pub taken_at: DateTime<Utc>,
    /// Completed doubling periods since the epoch
    pub periods: i64,
    /// Amount in the primary currency
    pub primary: f64,
    /// Amount in the secondary currency
    pub secondary: f64,
    /// When the amount doubles next
    pub next_doubling: DateTime<Utc>,
    /// Time left until `next_doubling`
    pub countdown: Countdown,
}

impl Snapshot {
    pub fn amount(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Usd => self.primary,
            Currency::Rub => self.secondary,
        }
    }
}

/// Growth schedule plus the conversion into the secondary currency
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    schedule: DebtSchedule,
    exchange_rate: f64,
}

impl Ledger {
    pub fn new(schedule: DebtSchedule, exchange_rate: f64) -> Self {
        Self {
            schedule,
            exchange_rate,
        }
    }

    /// The ledger built from the compile-time constants
    pub fn standard() -> Self {
        Self::new(DebtSchedule::standard(), USD_TO_RUB_RATE)
    }

    pub fn schedule(&self) -> &DebtSchedule {
        &self.schedule
    }

    pub fn exchange_rate(&self) -> f64 {
        self.exchange_rate
    }

    /// Convert a primary-currency amount into the secondary currency
    pub fn convert(&self, primary: f64) -> f64 {
        primary * self.exchange_rate
    }

    /// Compute every published value for the instant `now`
    pub fn snapshot(&self, now: DateTime<Utc>) -> Snapshot {
        let periods = self.schedule.periods_at(now);
        let primary = self.schedule.amount_for_periods(periods);
        let next_doubling = self.schedule.next_doubling_after_periods(periods);

        Snapshot {
            taken_at: now,
            periods,
            primary,
            secondary: self.convert(primary),
            next_doubling,
            countdown: Countdown::until(now, next_doubling),
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_snapshot_at_epoch() {
        let ledger = Ledger::standard();
        let epoch = ledger.schedule().epoch();
        let snapshot = ledger.snapshot(epoch);

        assert_eq!(snapshot.periods, 0);
        assert_eq!(snapshot.primary, 324_000.0);
        assert_eq!(snapshot.secondary, 324_000.0 * 97.0);
        assert_eq!(snapshot.next_doubling, epoch + Duration::days(7));
        assert_eq!(snapshot.countdown.to_string(), "7d 0h 0m 0s");
    }

    #[test]
    fn test_snapshot_secondary_tracks_primary() {
        let ledger = Ledger::standard();
        let now = ledger.schedule().epoch() + Duration::days(15) + Duration::hours(3);
        let snapshot = ledger.snapshot(now);

        assert_eq!(snapshot.periods, 2);
        assert_eq!(snapshot.primary, 1_296_000.0);
        assert_eq!(snapshot.secondary, snapshot.primary * USD_TO_RUB_RATE);
        assert_eq!(snapshot.amount(Currency::Usd), snapshot.primary);
        assert_eq!(snapshot.amount(Currency::Rub), snapshot.secondary);
        assert_eq!(snapshot.countdown.to_string(), "5d 21h 0m 0s");
    }

    #[test]
    fn test_currency_labels() {
        assert_eq!(Currency::Usd.symbol(), "$");
        assert_eq!(Currency::Rub.symbol(), "₽");
        assert_eq!(Currency::Rub.code(), "RUB");
        assert_eq!(Currency::Usd.plural(), "dollars");
    }

    #[test]
    fn test_epoch_constant_matches_date() {
        let epoch = DebtSchedule::standard().epoch();
        assert_eq!(epoch.to_rfc3339(), "2021-04-28T04:00:00+00:00");
    }
}
