//! Fixed-point hour totals (two fractional digits).

use chrono::TimeDelta;
use std::fmt;
use std::ops::Add;

const MILLIS_PER_HUNDREDTH: i64 = 36_000;

/// Hours worked, stored as signed hundredths of an hour.
///
/// Negative values are legal: a clock-out recorded before its clock-in
/// subtracts from the total instead of being clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hours(i64);

impl Hours {
    pub const ZERO: Hours = Hours(0);

    /// Round an exact duration to the nearest hundredth of an hour
    /// (half away from zero).
    pub fn from_duration(d: TimeDelta) -> Self {
        let ms = d.num_milliseconds();
        let q = ms / MILLIS_PER_HUNDREDTH;
        let r = ms % MILLIS_PER_HUNDREDTH;
        if r.abs() * 2 >= MILLIS_PER_HUNDREDTH {
            Hours(q + r.signum())
        } else {
            Hours(q)
        }
    }

    pub fn hundredths(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl Add for Hours {
    type Output = Hours;

    fn add(self, rhs: Hours) -> Hours {
        Hours(self.0 + rhs.0)
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_two_decimals() {
        assert_eq!(Hours::ZERO.to_string(), "0.00");
        assert_eq!(Hours::from_duration(TimeDelta::hours(8)).to_string(), "8.00");
        assert_eq!(
            Hours::from_duration(TimeDelta::minutes(-90)).to_string(),
            "-1.50"
        );
        assert_eq!(
            Hours::from_duration(TimeDelta::minutes(20)).to_string(),
            "0.33"
        );
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 18 seconds = exactly half a hundredth of an hour
        assert_eq!(Hours::from_duration(TimeDelta::seconds(18)).hundredths(), 1);
        assert_eq!(Hours::from_duration(TimeDelta::seconds(-18)).hundredths(), -1);
        assert_eq!(Hours::from_duration(TimeDelta::seconds(17)).hundredths(), 0);
    }

    #[test]
    fn sums() {
        let total = Hours::from_duration(TimeDelta::minutes(450))
            + Hours::from_duration(TimeDelta::minutes(-15));
        assert_eq!(total.to_string(), "7.25");
        assert!(!total.is_negative());
        assert!((total + Hours::from_duration(TimeDelta::hours(-8))).is_negative());
    }
}
