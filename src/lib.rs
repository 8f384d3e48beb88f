//! Solar Hijri (Jalali) calendar dates and times.
//!
//! [`JalaliDateTime`] is an immutable civil date-time in the Jalali calendar,
//! tied to an optional [`TimeZone`]. Conversion to and from the Gregorian
//! calendar goes through a day-number pivot; anything that needs an absolute
//! instant (durations, zones, ordering) goes through [`jiff::Zoned`].
//!
//! ```
//! use jalali_date::{JalaliDateTime, Month};
//! use jiff::tz::TimeZone;
//!
//! let date = JalaliDateTime::new(1403, Month::Khordad, 5, 14, 30, 0, 0, Some(TimeZone::UTC))?;
//! assert_eq!(date.format("%Y/%m/%d %R"), "1403/03/05 14:30");
//! # Ok::<(), jalali_date::Error>(())
//! ```

mod arithmetic;
mod consts;
mod convert;
mod format;
mod parse;
mod prelude;
#[cfg(test)]
mod test_utils;
mod types;
mod zone;

pub use consts::*;
pub use convert::{gregorian_to_jalali, jalali_to_gregorian};
pub use parse::{Field, ParseError};
pub use types::{Day, Month, Weekday, Year, days_in_month, is_leap_year};
pub use zone::{resolve_zone, tehran};

pub use jiff::{SignedDuration, Zoned, tz::TimeZone};

/// Error type for constructing and converting Jalali date-times.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Year outside `MIN_YEAR..=MAX_YEAR`.
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i64),

    /// Month outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// Day that does not exist in the given month and year.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },

    #[error("Invalid hour: {0} (must be 0-{max})", max = MAX_HOUR)]
    InvalidHour(u8),

    #[error("Invalid minute: {0} (must be 0-{max})", max = MAX_MINUTE)]
    InvalidMinute(u8),

    #[error("Invalid second: {0} (must be 0-{max})", max = MAX_SECOND)]
    InvalidSecond(u8),

    #[error("Invalid nanosecond: {0} (must be 0-{max})", max = MAX_NANOSECOND)]
    InvalidNanosecond(u32),

    #[error("Invalid weekday: {0} (must be 0-6)")]
    InvalidWeekday(u8),

    /// Calendar arithmetic produced a year before year 1.
    #[error("Year {0} is before the first Jalali year")]
    YearUnderflow(i64),

    /// Calendar arithmetic produced a year after `MAX_YEAR`.
    #[error("Year {0} is after {max}", max = MAX_YEAR)]
    YearOverflow(i64),

    /// The Gregorian equivalent cannot be represented as an absolute instant.
    #[error("Gregorian year {0} is outside the supported instant range")]
    GregorianYearOutOfRange(i32),

    #[error("Unknown time zone: {0}")]
    UnknownZone(String),

    #[error(transparent)]
    Time(#[from] jiff::Error),
}

/// A civil date and time in the Jalali calendar.
///
/// Every field is validated at construction, so `day` never exceeds the length
/// of `month` in `year`. Values are immutable: arithmetic and zone conversion
/// return new values. A `zone` of `None` means the system time zone, resolved
/// only when an absolute instant is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JalaliDateTime {
    year:       Year,
    month:      Month,
    day:        Day,
    hour:       u8,
    minute:     u8,
    second:     u8,
    nanosecond: u32,
    zone:       Option<TimeZone>,
}

impl JalaliDateTime {
    /// Creates a date-time from raw fields, validating each one.
    ///
    /// # Errors
    /// Returns the `Error::Invalid*` variant of the first field out of range,
    /// checked in argument order. Values are never clamped.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: u16,
        month: Month,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
        zone: Option<TimeZone>,
    ) -> Result<Self, Error> {
        let year = Year::new(year)?;
        let day = Day::new(day, year, month)?;
        if hour > MAX_HOUR {
            return Err(Error::InvalidHour(hour));
        }
        if minute > MAX_MINUTE {
            return Err(Error::InvalidMinute(minute));
        }
        if second > MAX_SECOND {
            return Err(Error::InvalidSecond(second));
        }
        if nanosecond > MAX_NANOSECOND {
            return Err(Error::InvalidNanosecond(nanosecond));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            nanosecond,
            zone,
        })
    }

    /// Midnight at the start of the given date.
    ///
    /// # Errors
    /// Same as [`JalaliDateTime::new`].
    pub fn from_date(year: u16, month: Month, day: u8, zone: Option<TimeZone>) -> Result<Self, Error> {
        Self::new(year, month, day, 0, 0, 0, 0, zone)
    }

    /// Rebuilds a value with new calendar fields (already validated) and the
    /// same time of day and zone.
    pub(crate) fn with_date(&self, year: Year, month: Month, day: Day) -> Self {
        Self {
            year,
            month,
            day,
            ..self.clone()
        }
    }

    /// Returns the year
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the month
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    pub const fn nanosecond(&self) -> u32 {
        self.nanosecond
    }

    /// The zone this value is expressed in, `None` meaning the system zone.
    pub const fn zone(&self) -> Option<&TimeZone> {
        self.zone.as_ref()
    }

    /// Whether the year of this date is a leap year
    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Number of days in the month of this date
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year.get(), self.month)
    }

    /// Day of the week, taken from the equivalent Gregorian date.
    pub fn weekday(&self) -> Weekday {
        // the Jalali day number is already a Gregorian day count
        let day_no = convert::jalali_to_day_number(
            i64::from(self.year.get()),
            self.month.get(),
            self.day.get(),
        );
        Weekday::from_index(convert::weekday_index(day_no))
    }
}

/// Serializes as the `Display` form, `YYYY/MM/DD HH:MM:SS`. The zone and
/// nanoseconds are not part of the string.
impl serde::Serialize for JalaliDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
