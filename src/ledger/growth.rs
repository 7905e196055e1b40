//! Growth calculator
//!
//! The amount doubles once per completed interval since the epoch:
//! `principal × 2^floor((now − epoch) / interval)`. Nothing is bounded; a
//! large enough period count simply produces `inf`.

use super::{DOUBLING_INTERVAL_MS, EPOCH_UNIX_SECS, PRINCIPAL_USD};
use chrono::{DateTime, Duration, Utc};

/// Fixed epoch, principal and doubling interval
#[derive(Debug, Clone, PartialEq)]
pub struct DebtSchedule {
    epoch: DateTime<Utc>,
    principal: f64,
    interval_ms: i64,
}

impl DebtSchedule {
    /// Build a schedule. Intervals shorter than a millisecond are raised to one.
    pub fn new(epoch: DateTime<Utc>, principal: f64, interval: Duration) -> Self {
        Self {
            epoch,
            principal,
            interval_ms: interval.num_milliseconds().max(1),
        }
    }

    /// The schedule from the compile-time constants
    pub fn standard() -> Self {
        let epoch = DateTime::from_timestamp(EPOCH_UNIX_SECS, 0).unwrap_or_default();
        Self::new(
            epoch,
            PRINCIPAL_USD,
            Duration::milliseconds(DOUBLING_INTERVAL_MS),
        )
    }

    pub fn epoch(&self) -> DateTime<Utc> {
        self.epoch
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn interval(&self) -> Duration {
        Duration::milliseconds(self.interval_ms)
    }

    /// Number of completed doubling periods at `now`
    ///
    /// Floor division, so instants before the epoch give negative counts.
    pub fn periods_at(&self, now: DateTime<Utc>) -> i64 {
        let elapsed_ms = (now - self.epoch).num_milliseconds();
        elapsed_ms.div_euclid(self.interval_ms)
    }

    /// Amount owed at `now`
    #[allow(dead_code)] // Ledger::snapshot reuses one period count for both values
    pub fn amount_at(&self, now: DateTime<Utc>) -> f64 {
        self.amount_for_periods(self.periods_at(now))
    }

    /// Amount owed after `periods` doublings
    pub fn amount_for_periods(&self, periods: i64) -> f64 {
        // powi saturates to inf/0 long before i32 runs out
        let exponent = periods.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        self.principal * 2f64.powi(exponent)
    }

    /// The next doubling instant strictly after `now`
    #[allow(dead_code)]
    pub fn next_doubling_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.next_doubling_after_periods(self.periods_at(now))
    }

    /// Boundary at the end of the period following `periods` completed ones
    pub fn next_doubling_after_periods(&self, periods: i64) -> DateTime<Utc> {
        let offset_ms = periods.saturating_add(1).saturating_mul(self.interval_ms);
        Duration::try_milliseconds(offset_ms)
            .and_then(|offset| self.epoch.checked_add_signed(offset))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

impl Default for DebtSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week() -> Duration {
        Duration::days(7)
    }

    #[test]
    fn test_amount_at_boundaries_doubles() {
        let schedule = DebtSchedule::standard();
        let epoch = schedule.epoch();

        assert_eq!(schedule.amount_at(epoch), 324_000.0);
        assert_eq!(schedule.amount_at(epoch + week()), 648_000.0);
        assert_eq!(schedule.amount_at(epoch + week() * 2), 1_296_000.0);

        for p in 0..60i32 {
            let at = epoch + week() * p;
            assert_eq!(schedule.amount_at(at), 324_000.0 * 2f64.powi(p));
        }
    }

    #[test]
    fn test_amount_is_step_function() {
        let schedule = DebtSchedule::standard();
        let start = schedule.epoch() + week() * 3;

        let at_boundary = schedule.amount_at(start);
        assert_eq!(schedule.amount_at(start + Duration::milliseconds(1)), at_boundary);
        assert_eq!(schedule.amount_at(start + Duration::days(4)), at_boundary);
        assert_eq!(
            schedule.amount_at(start + week() - Duration::milliseconds(1)),
            at_boundary
        );
        assert_eq!(schedule.amount_at(start + week()), at_boundary * 2.0);
    }

    #[test]
    fn test_amount_never_decreases() {
        let schedule = DebtSchedule::standard();
        let mut previous = 0.0;
        let mut now = schedule.epoch();
        for _ in 0..200 {
            let amount = schedule.amount_at(now);
            assert!(amount >= previous);
            previous = amount;
            now += Duration::hours(19);
        }
    }

    #[test]
    fn test_next_doubling_is_future_and_aligned() {
        let schedule = DebtSchedule::standard();
        let epoch = schedule.epoch();
        let interval_ms = week().num_milliseconds();

        let instants = [
            epoch,
            epoch + Duration::milliseconds(1),
            epoch + week() - Duration::milliseconds(1),
            epoch + week(),
            epoch + Duration::days(1000) + Duration::seconds(17),
            epoch - Duration::days(3),
        ];

        for now in instants {
            let next = schedule.next_doubling_at(now);
            assert!(next > now, "next doubling {next} not after {now}");
            let offset = (next - epoch).num_milliseconds();
            assert_eq!(offset.rem_euclid(interval_ms), 0);
            assert!(next - now <= week());
        }
    }

    #[test]
    fn test_before_epoch_floors_to_negative_periods() {
        let schedule = DebtSchedule::standard();
        let now = schedule.epoch() - Duration::milliseconds(1);

        assert_eq!(schedule.periods_at(now), -1);
        assert_eq!(schedule.amount_at(now), 162_000.0);
        assert_eq!(schedule.next_doubling_at(now), schedule.epoch());
    }

    #[test]
    fn test_huge_period_count_overflows_to_infinity() {
        let schedule = DebtSchedule::standard();
        assert!(schedule.amount_for_periods(2_000).is_infinite());
        assert!(schedule.amount_for_periods(i64::MAX).is_infinite());
        assert!(schedule.amount_for_periods(1_000).is_finite());
    }

    #[test]
    fn test_custom_schedule() {
        let epoch = DateTime::from_timestamp(0, 0).unwrap();
        let schedule = DebtSchedule::new(epoch, 1.0, Duration::seconds(10));

        assert_eq!(schedule.periods_at(epoch + Duration::seconds(35)), 3);
        assert_eq!(schedule.amount_at(epoch + Duration::seconds(35)), 8.0);
        assert_eq!(
            schedule.next_doubling_at(epoch + Duration::seconds(35)),
            epoch + Duration::seconds(40)
        );
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let epoch = DateTime::from_timestamp(0, 0).unwrap();
        let schedule = DebtSchedule::new(epoch, 1.0, Duration::zero());
        assert_eq!(schedule.interval(), Duration::milliseconds(1));
    }
}
