//! Duration math, ordering and calendar-field arithmetic.
//!
//! Anything measured in absolute time goes through `jiff::Zoned`; `add_years`
//! and `add_months` work on the calendar fields directly.

use std::cmp::Ordering;

use jiff::{SignedDuration, Span};
use tracing::debug;

use crate::consts::{ESFAND_DAYS_LEAP, MAX_YEAR, MIN_YEAR, MONTHS_PER_YEAR, SECONDS_PER_DAY};
use crate::{Day, Error, JalaliDateTime, Month, Year};

/// Checks a year produced by calendar arithmetic against `MIN_YEAR..=MAX_YEAR`.
fn checked_year(year: i64) -> Result<Year, Error> {
    if year < i64::from(MIN_YEAR) {
        debug!(year, "calendar arithmetic went below the first Jalali year");
        return Err(Error::YearUnderflow(year));
    }
    if year > i64::from(MAX_YEAR) {
        debug!(year, "calendar arithmetic went past the last supported year");
        return Err(Error::YearOverflow(year));
    }
    Year::try_from(year)
}

impl JalaliDateTime {
    /// Adds an exact duration, going through the absolute instant.
    ///
    /// # Errors
    /// Fails if either end of the operation is outside the supported range.
    pub fn add_duration(&self, duration: SignedDuration) -> Result<Self, Error> {
        Self::try_from(&self.to_zoned()?.checked_add(duration)?)
    }

    /// Subtracts an exact duration.
    ///
    /// # Errors
    /// Same as [`JalaliDateTime::add_duration`].
    pub fn sub_duration(&self, duration: SignedDuration) -> Result<Self, Error> {
        Self::try_from(&self.to_zoned()?.checked_sub(duration)?)
    }

    /// Elapsed time from `other` to `self`, negative if `other` is later.
    ///
    /// # Errors
    /// Fails if either value cannot be placed on the absolute time line.
    pub fn duration_since(&self, other: &Self) -> Result<SignedDuration, Error> {
        Ok(self.to_zoned()?.duration_since(&other.to_zoned()?))
    }

    /// Orders two values by absolute instant, regardless of their zones.
    ///
    /// # Errors
    /// Same as [`JalaliDateTime::duration_since`].
    pub fn compare(&self, other: &Self) -> Result<Ordering, Error> {
        Ok(self
            .to_zoned()?
            .timestamp()
            .cmp(&other.to_zoned()?.timestamp()))
    }

    /// # Errors
    /// Same as [`JalaliDateTime::compare`].
    pub fn is_before(&self, other: &Self) -> Result<bool, Error> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// # Errors
    /// Same as [`JalaliDateTime::compare`].
    pub fn is_after(&self, other: &Self) -> Result<bool, Error> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// Whether both values name the same instant, even in different zones.
    ///
    /// # Errors
    /// Same as [`JalaliDateTime::compare`].
    pub fn is_same_instant(&self, other: &Self) -> Result<bool, Error> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    /// Whole 86400-second days between two instants, in either order.
    ///
    /// # Errors
    /// Same as [`JalaliDateTime::compare`].
    pub fn days_between(&self, other: &Self) -> Result<i64, Error> {
        let (start, end) = if other.is_before(self)? {
            (other, self)
        } else {
            (self, other)
        };
        Ok((end.unix()? - start.unix()?) / SECONDS_PER_DAY)
    }

    /// Shifts the year field by `years`. Esfand 30 always becomes Esfand 29,
    /// whether or not the target year is leap.
    ///
    /// # Errors
    /// Returns `Error::YearUnderflow` or `Error::YearOverflow` if the target
    /// year leaves `MIN_YEAR..=MAX_YEAR`.
    pub fn add_years(&self, years: i64) -> Result<Self, Error> {
        let year = checked_year(i64::from(self.year()).saturating_add(years))?;
        let day = if self.month == Month::Esfand && self.day() == ESFAND_DAYS_LEAP {
            Day::new(ESFAND_DAYS_LEAP - 1, year, self.month)?
        } else {
            Day::new(self.day(), year, self.month)?
        };
        Ok(self.with_date(year, self.month, day))
    }

    /// Shifts the month field by `months`, carrying into the year and clamping
    /// the day to the length of the target month.
    ///
    /// # Errors
    /// Returns `Error::YearUnderflow` or `Error::YearOverflow` if the target
    /// year leaves `MIN_YEAR..=MAX_YEAR`.
    pub fn add_months(&self, months: i64) -> Result<Self, Error> {
        let index = i64::from(self.year()) * MONTHS_PER_YEAR + i64::from(self.month.get() - 1);
        let target = index.saturating_add(months);

        let year = checked_year(target.div_euclid(MONTHS_PER_YEAR))?;
        // rem_euclid(12) + 1 is always a valid month number
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let month = Month::new(target.rem_euclid(MONTHS_PER_YEAR) as u8 + 1)?;
        let day = self.day.clamp_to(year, month);
        Ok(self.with_date(year, month, day))
    }

    /// Adds calendar days through the Gregorian calendar, so every month and
    /// leap-year boundary is crossed correctly. The wall-clock time is kept.
    ///
    /// # Errors
    /// Fails if the result is outside the supported range.
    pub fn add_days(&self, days: i64) -> Result<Self, Error> {
        let span = Span::new().try_days(days)?;
        Self::try_from(&self.to_zoned()?.checked_add(span)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{jdt, jdt_in, tehran};

    fn ymd(date: &JalaliDateTime) -> (u16, u8, u8) {
        (date.year(), date.month().get(), date.day())
    }

    #[test]
    fn test_add_days_cases() {
        struct TestCase {
            start:       (u16, u8, u8),
            days:        i64,
            expected:    (u16, u8, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                start:       (1403, 12, 30),
                days:        1,
                expected:    (1404, 1, 1),
                description: "leap Esfand 30 into the new year",
            },
            TestCase {
                start:       (1404, 12, 29),
                days:        1,
                expected:    (1405, 1, 1),
                description: "common Esfand 29 into the new year",
            },
            TestCase {
                start:       (1403, 6, 31),
                days:        1,
                expected:    (1403, 7, 1),
                description: "31-day month into 30-day month",
            },
            TestCase {
                start:       (1404, 1, 1),
                days:        -1,
                expected:    (1403, 12, 30),
                description: "backwards into leap Esfand",
            },
            TestCase {
                start:       (1403, 1, 1),
                days:        366,
                expected:    (1404, 1, 1),
                description: "a full leap year",
            },
            TestCase {
                start:       (1404, 1, 1),
                days:        0,
                expected:    (1404, 1, 1),
                description: "zero days",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.start;
            let result = jdt(y, m, d, 10, 20, 30).add_days(case.days).unwrap();
            assert_eq!(ymd(&result), case.expected, "{}", case.description);
            assert_eq!(
                (result.hour(), result.minute(), result.second()),
                (10, 20, 30),
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_add_days_keeps_zone() {
        let start = jdt_in(1403, 12, 30, 23, 0, 0, tehran());
        let next = start.add_days(1).unwrap();
        assert_eq!(ymd(&next), (1404, 1, 1));
        assert_eq!(next.hour(), 23);
        assert_eq!(next.zone_name(), Some("Asia/Tehran"));
    }

    #[test]
    fn test_add_years_leap_esfand_clamped() {
        let leap = jdt(1403, 12, 30, 0, 0, 0);
        assert_eq!(ymd(&leap.add_years(1).unwrap()), (1404, 12, 29));
        // clamped even when the target year is leap as well
        assert_eq!(ymd(&leap.add_years(4).unwrap()), (1407, 12, 29));
        assert_eq!(ymd(&leap.add_years(5).unwrap()), (1408, 12, 29));
    }

    #[test]
    fn test_add_years_plain() {
        let date = jdt(1403, 3, 5, 14, 30, 45);
        let moved = date.add_years(-3).unwrap();
        assert_eq!(ymd(&moved), (1400, 3, 5));
        assert_eq!((moved.hour(), moved.minute(), moved.second()), (14, 30, 45));
        assert_eq!(moved.zone(), date.zone());
    }

    #[test]
    fn test_add_years_bounds() {
        let date = jdt(1403, 1, 1, 0, 0, 0);
        assert!(matches!(date.add_years(-1403), Err(Error::YearUnderflow(0))));
        assert!(matches!(date.add_years(-2000), Err(Error::YearUnderflow(-597))));
        assert!(matches!(
            date.add_years(8597),
            Err(Error::YearOverflow(10_000))
        ));
        assert_eq!(date.add_years(-1402).unwrap().year(), 1);
        assert_eq!(date.add_years(8596).unwrap().year(), 9999);
    }

    #[test]
    fn test_add_months_cases() {
        struct TestCase {
            start:       (u16, u8, u8),
            months:      i64,
            expected:    (u16, u8, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                start:       (1403, 11, 30),
                months:      2,
                expected:    (1404, 1, 30),
                description: "Bahman 30 into Farvardin, day kept",
            },
            TestCase {
                start:       (1403, 6, 31),
                months:      1,
                expected:    (1403, 7, 30),
                description: "clamped to a 30-day month",
            },
            TestCase {
                start:       (1404, 11, 30),
                months:      1,
                expected:    (1404, 12, 29),
                description: "clamped to common Esfand",
            },
            TestCase {
                start:       (1403, 11, 30),
                months:      1,
                expected:    (1403, 12, 30),
                description: "leap Esfand keeps day 30",
            },
            TestCase {
                start:       (1403, 5, 10),
                months:      12,
                expected:    (1404, 5, 10),
                description: "a whole year",
            },
            TestCase {
                start:       (1403, 5, 10),
                months:      31,
                expected:    (1405, 12, 10),
                description: "several wraps",
            },
            TestCase {
                start:       (1403, 2, 10),
                months:      -3,
                expected:    (1402, 11, 10),
                description: "negative into the previous year",
            },
            TestCase {
                start:       (1403, 1, 31),
                months:      -25,
                expected:    (1400, 12, 29),
                description: "negative multi-year, clamped to common Esfand",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.start;
            let result = jdt(y, m, d, 0, 0, 0).add_months(case.months).unwrap();
            assert_eq!(ymd(&result), case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_add_months_bounds() {
        let first = jdt(1, 1, 1, 0, 0, 0);
        assert!(matches!(first.add_months(-1), Err(Error::YearUnderflow(0))));
        let last = jdt(9999, 12, 1, 0, 0, 0);
        assert!(matches!(last.add_months(1), Err(Error::YearOverflow(10_000))));
    }

    #[test]
    fn test_days_between_symmetric() {
        let a = jdt(1403, 1, 1, 0, 0, 0);
        let b = jdt(1403, 1, 11, 0, 0, 0);
        assert_eq!(a.days_between(&b).unwrap(), 10);
        assert_eq!(b.days_between(&a).unwrap(), 10);
        assert_eq!(a.days_between(&a).unwrap(), 0);
    }

    #[test]
    fn test_days_between_truncates_partial_days() {
        let a = jdt(1403, 1, 1, 12, 0, 0);
        let b = jdt(1403, 1, 3, 11, 59, 59);
        assert_eq!(a.days_between(&b).unwrap(), 1);
        assert_eq!(b.days_between(&a).unwrap(), 1);
    }

    #[test]
    fn test_days_between_across_zones() {
        let utc = jdt(1403, 1, 2, 0, 0, 0);
        let tehran_same = utc.in_zone(tehran()).unwrap();
        assert_eq!(utc.days_between(&tehran_same).unwrap(), 0);
    }

    #[test]
    fn test_ordering_is_by_instant() {
        let utc = jdt(1403, 1, 1, 1, 0, 0);
        // 04:00 in Tehran is 00:30 UTC
        let tehran_time = jdt_in(1403, 1, 1, 4, 0, 0, tehran());

        assert!(tehran_time.is_before(&utc).unwrap());
        assert!(utc.is_after(&tehran_time).unwrap());
        assert_eq!(utc.compare(&tehran_time).unwrap(), Ordering::Greater);

        let same = utc.in_zone(tehran()).unwrap();
        assert!(utc.is_same_instant(&same).unwrap());
        assert!(!utc.is_before(&same).unwrap());
        assert!(!utc.is_after(&same).unwrap());
    }

    #[test]
    fn test_ordering_trichotomy() {
        let dates = [
            jdt(1403, 1, 1, 0, 0, 0),
            jdt(1403, 12, 30, 23, 59, 59),
            jdt_in(1404, 1, 1, 3, 0, 0, tehran()),
            jdt(1300, 6, 31, 12, 0, 0),
        ];
        for a in &dates {
            for b in &dates {
                let outcomes = [
                    a.is_before(b).unwrap(),
                    a.is_same_instant(b).unwrap(),
                    a.is_after(b).unwrap(),
                ];
                assert_eq!(outcomes.iter().filter(|&&x| x).count(), 1);
            }
        }
    }

    #[test]
    fn test_add_and_sub_duration() {
        let start = jdt(1403, 12, 30, 23, 0, 0);
        let later = start.add_duration(SignedDuration::from_hours(2)).unwrap();
        assert_eq!(ymd(&later), (1404, 1, 1));
        assert_eq!(later.hour(), 1);

        let back = later.sub_duration(SignedDuration::from_hours(2)).unwrap();
        assert_eq!(back, start);

        assert_eq!(
            later.duration_since(&start).unwrap(),
            SignedDuration::from_hours(2)
        );
        assert_eq!(
            start.duration_since(&later).unwrap(),
            SignedDuration::from_hours(-2)
        );
    }
}
