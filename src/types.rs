use crate::consts::{
    ESFAND_DAYS_LEAP, JALALI_CYCLE_YEARS, JALALI_DAYS_IN_MONTH, JALALI_LEAP_RESIDUES, MAX_MONTH,
    MAX_YEAR, MIN_DAY,
};
use crate::Error;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `Error::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, Error> {
        let non_zero = NonZeroU16::new(value).ok_or(Error::InvalidYear(i64::from(value)))?;
        if value > MAX_YEAR {
            return Err(Error::InvalidYear(i64::from(value)));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether this year has a 30-day Esfand
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for Year {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .map_err(|_| Error::InvalidYear(value))
            .and_then(Self::new)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month of the Jalali calendar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Month {
    #[display(fmt = "Farvardin")]
    Farvardin = 1,
    #[display(fmt = "Ordibehesht")]
    Ordibehesht,
    #[display(fmt = "Khordad")]
    Khordad,
    #[display(fmt = "Tir")]
    Tir,
    #[display(fmt = "Mordad")]
    Mordad,
    #[display(fmt = "Shahrivar")]
    Shahrivar,
    #[display(fmt = "Mehr")]
    Mehr,
    #[display(fmt = "Aban")]
    Aban,
    #[display(fmt = "Azar")]
    Azar,
    #[display(fmt = "Dey")]
    Dey,
    #[display(fmt = "Bahman")]
    Bahman,
    #[display(fmt = "Esfand")]
    Esfand,
}

const MONTHS: [Month; 12] = [
    Month::Farvardin,
    Month::Ordibehesht,
    Month::Khordad,
    Month::Tir,
    Month::Mordad,
    Month::Shahrivar,
    Month::Mehr,
    Month::Aban,
    Month::Azar,
    Month::Dey,
    Month::Bahman,
    Month::Esfand,
];

const MONTH_NAMES_FA: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

const MONTH_NUMBERS: [&str; 12] = [
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12",
];

impl Month {
    /// Creates a new Month from its 1-based number
    ///
    /// # Errors
    /// Returns `Error::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, Error> {
        if value == 0 || value > MAX_MONTH {
            return Err(Error::InvalidMonth(value));
        }
        Ok(MONTHS[usize::from(value - 1)])
    }

    /// Returns the month number (1..=12)
    #[inline]
    pub const fn get(self) -> u8 {
        self as u8
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize - 1
    }

    /// English transliteration of the month name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Farvardin => "Farvardin",
            Self::Ordibehesht => "Ordibehesht",
            Self::Khordad => "Khordad",
            Self::Tir => "Tir",
            Self::Mordad => "Mordad",
            Self::Shahrivar => "Shahrivar",
            Self::Mehr => "Mehr",
            Self::Aban => "Aban",
            Self::Azar => "Azar",
            Self::Dey => "Dey",
            Self::Bahman => "Bahman",
            Self::Esfand => "Esfand",
        }
    }

    /// Persian month name
    pub const fn fa_name(self) -> &'static str {
        MONTH_NAMES_FA[self.index()]
    }

    /// Zero-padded two digit month number
    pub const fn number_str(self) -> &'static str {
        MONTH_NUMBERS[self.index()]
    }

    /// Length of a common-year month; Esfand gains a day in leap years.
    pub const fn standard_length(self) -> u8 {
        JALALI_DAYS_IN_MONTH[self.index()]
    }
}

impl TryFrom<u8> for Month {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `Error::InvalidDay` if the value is 0 or exceeds the month's length in that year.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, Error> {
        let invalid = || Error::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(invalid)?;
        if value > days_in_month(year.get(), month) {
            return Err(invalid());
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Clamps to the last day of the given month when this day does not fit
    pub(crate) fn clamp_to(self, year: Year, month: Month) -> Self {
        let max = days_in_month(year.get(), month);
        if self.get() <= max {
            return self;
        }
        // month lengths are never zero
        NonZeroU8::new(max).map_or(self, Self)
    }
}

impl TryFrom<u8> for Day {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate the month length without year/month context
        if value < MIN_DAY || value > crate::consts::MAX_DAY {
            return Err(Error::InvalidDay {
                year: 0,
                month: 0,
                day: value,
            });
        }
        NonZeroU8::new(value).map(Self).ok_or(Error::InvalidDay {
            year: 0,
            month: 0,
            day: value,
        })
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day of the week. The week starts on Yekshanbe, Gregorian Sunday.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Weekday {
    #[display(fmt = "1Shanbeh")]
    Yekshanbe = 0,
    #[display(fmt = "2Shanbeh")]
    Doshanbe,
    #[display(fmt = "3Shanbeh")]
    Seshanbe,
    #[display(fmt = "4Shanbeh")]
    Chaharshanbe,
    #[display(fmt = "5Shanbeh")]
    Panjshanbe,
    #[display(fmt = "Joomeh")]
    Joomeh,
    #[display(fmt = "Shanbeh")]
    Shanbe,
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Yekshanbe,
    Weekday::Doshanbe,
    Weekday::Seshanbe,
    Weekday::Chaharshanbe,
    Weekday::Panjshanbe,
    Weekday::Joomeh,
    Weekday::Shanbe,
];

const WEEKDAY_NAMES_FA: [&str; 7] = [
    "یکشنبه",
    "دوشنبه",
    "سه\u{200c}شنبه",
    "چهارشنبه",
    "پنج\u{200c}شنبه",
    "جمعه",
    "شنبه",
];

impl Weekday {
    /// Creates a weekday from its index, 0 being Sunday
    ///
    /// # Errors
    /// Returns `Error::InvalidWeekday` if the value is > 6.
    pub fn new(value: u8) -> Result<Self, Error> {
        WEEKDAYS
            .get(usize::from(value))
            .copied()
            .ok_or(Error::InvalidWeekday(value))
    }

    /// Returns the weekday index, 0 being Sunday
    #[inline]
    pub const fn get(self) -> u8 {
        self as u8
    }

    /// English transliteration of the weekday name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yekshanbe => "1Shanbeh",
            Self::Doshanbe => "2Shanbeh",
            Self::Seshanbe => "3Shanbeh",
            Self::Chaharshanbe => "4Shanbeh",
            Self::Panjshanbe => "5Shanbeh",
            Self::Joomeh => "Joomeh",
            Self::Shanbe => "Shanbeh",
        }
    }

    /// Persian weekday name
    pub const fn fa_name(self) -> &'static str {
        WEEKDAY_NAMES_FA[self as usize]
    }

    /// Weekday for an index already reduced below 7
    pub(crate) const fn from_index(index: u8) -> Self {
        WEEKDAYS[(index % 7) as usize]
    }
}

/// Maps a Gregorian weekday one-to-one onto the Jalali week.
impl From<jiff::civil::Weekday> for Weekday {
    fn from(weekday: jiff::civil::Weekday) -> Self {
        match weekday {
            jiff::civil::Weekday::Sunday => Self::Yekshanbe,
            jiff::civil::Weekday::Monday => Self::Doshanbe,
            jiff::civil::Weekday::Tuesday => Self::Seshanbe,
            jiff::civil::Weekday::Wednesday => Self::Chaharshanbe,
            jiff::civil::Weekday::Thursday => Self::Panjshanbe,
            jiff::civil::Weekday::Friday => Self::Joomeh,
            jiff::civil::Weekday::Saturday => Self::Shanbe,
        }
    }
}

impl TryFrom<u8> for Weekday {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.get()
    }
}

// Helper functions

/// Whether a Jalali year is leap under the 33-year cycle
pub const fn is_leap_year(year: u16) -> bool {
    let residue = year % JALALI_CYCLE_YEARS;
    let mut i = 0;
    while i < JALALI_LEAP_RESIDUES.len() {
        if JALALI_LEAP_RESIDUES[i] == residue {
            return true;
        }
        i += 1;
    }
    false
}

/// Number of days in `month` of the Jalali `year`
pub const fn days_in_month(year: u16, month: Month) -> u8 {
    if matches!(month, Month::Esfand) && is_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        month.standard_length()
    }
}
