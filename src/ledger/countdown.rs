// Countdown until the next doubling
//
// Successive integer division/remainder against fixed unit sizes. Leftover
// milliseconds are truncated.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

const MS_PER_DAY: i64 = 86_400_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

/// Remaining time split into display components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Decompose a millisecond difference. Negative differences clamp to zero.
    pub fn from_millis(ms: i64) -> Self {
        let ms = ms.max(0);
        Self {
            days: ms / MS_PER_DAY,
            hours: (ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (ms % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    /// Time from `now` until `target`
    pub fn until(now: DateTime<Utc>, target: DateTime<Utc>) -> Self {
        Self::from_millis((target - now).num_milliseconds())
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_one_of_each_unit() {
        let countdown = Countdown::from_millis(90_061_001);
        assert_eq!(
            countdown,
            Countdown {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
        assert_eq!(countdown.to_string(), "1d 1h 1m 1s");
    }

    #[test]
    fn test_full_week() {
        assert_eq!(Countdown::from_millis(604_800_000).to_string(), "7d 0h 0m 0s");
    }

    #[test]
    fn test_sub_second_truncates() {
        assert_eq!(Countdown::from_millis(999).to_string(), "0d 0h 0m 0s");
        assert_eq!(Countdown::from_millis(59_999).to_string(), "0d 0h 0m 59s");
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(Countdown::from_millis(-5_000), Countdown::default());
    }

    #[test]
    fn test_until() {
        let now = DateTime::from_timestamp(1_000, 0).unwrap();
        let target = now + Duration::hours(49) + Duration::seconds(7);
        assert_eq!(Countdown::until(now, target).to_string(), "2d 1h 0m 7s");
    }
}
