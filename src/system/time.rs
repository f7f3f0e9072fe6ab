//! Converts real elapsed time into whole ticks of a bank's time unit. Both
//! interest accrual and bond maturity count time this way.

use chrono::{DateTime, Utc};
use crate::error::{Error, Result};
use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

/// The granularity a bank counts elapsed time in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// How many milliseconds make up one unit.
    pub fn millis(&self) -> i64 {
        match self {
            TimeUnit::Seconds => 1_000,
            TimeUnit::Minutes => 60_000,
            TimeUnit::Hours => 3_600_000,
            TimeUnit::Days => 86_400_000,
        }
    }
}

impl Default for TimeUnit {
    fn default() -> Self {
        TimeUnit::Hours
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeUnit::Seconds => "Seconds",
            TimeUnit::Minutes => "Minutes",
            TimeUnit::Hours => "Hours",
            TimeUnit::Days => "Days",
        };
        f.write_str(name)
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Seconds" => Ok(TimeUnit::Seconds),
            "Minutes" => Ok(TimeUnit::Minutes),
            "Hours" => Ok(TimeUnit::Hours),
            "Days" => Ok(TimeUnit::Days),
            _ => Err(Error::InvalidCommand(format!("unknown time unit {}", s))),
        }
    }
}

/// Count the whole `unit`s between `start` and `end`, flooring.
///
/// A `start` of `None` means "never", which counts as zero elapsed units. If
/// the clock went backwards (`end` before `start`) we also return zero rather
/// than a negative count.
pub fn elapsed_units(start: Option<&DateTime<Utc>>, end: &DateTime<Utc>, unit: TimeUnit) -> u64 {
    let start = match start {
        Some(start) => start,
        None => return 0,
    };
    let millis = end.signed_duration_since(*start).num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    (millis / unit.millis()) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::*;
    use chrono::Duration;

    #[test]
    fn never_is_zero() {
        let now = instant(1000);
        assert_eq!(elapsed_units(None, &now, TimeUnit::Seconds), 0);
        assert_eq!(elapsed_units(None, &now, TimeUnit::Days), 0);
    }

    #[test]
    fn floors_to_whole_units() {
        let start = instant(0);
        let end = start + Duration::milliseconds(3_600_000 * 5 + 3_599_999);
        assert_eq!(elapsed_units(Some(&start), &end, TimeUnit::Hours), 5);
        assert_eq!(elapsed_units(Some(&start), &end, TimeUnit::Minutes), 5 * 60 + 59);
        assert_eq!(elapsed_units(Some(&start), &end, TimeUnit::Seconds), 5 * 3600 + 3599);
        assert_eq!(elapsed_units(Some(&start), &end, TimeUnit::Days), 0);

        let end2 = start + Duration::days(3) + Duration::hours(23);
        assert_eq!(elapsed_units(Some(&start), &end2, TimeUnit::Days), 3);
        assert_eq!(elapsed_units(Some(&start), &start, TimeUnit::Seconds), 0);
    }

    #[test]
    fn clock_regression_clamps() {
        let start = instant(10);
        let end = instant(2);
        assert_eq!(elapsed_units(Some(&start), &end, TimeUnit::Hours), 0);
        assert_eq!(elapsed_units(Some(&start), &end, TimeUnit::Seconds), 0);
    }

    #[test]
    fn parses_units() {
        assert_eq!("Seconds".parse::<TimeUnit>(), Ok(TimeUnit::Seconds));
        assert_eq!("Days".parse::<TimeUnit>(), Ok(TimeUnit::Days));
        assert_eq!(TimeUnit::Minutes.to_string(), "Minutes");
        assert!("Fortnights".parse::<TimeUnit>().is_err());
        assert_eq!(TimeUnit::default(), TimeUnit::Hours);
    }
}
