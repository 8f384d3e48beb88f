/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Upper bound for any day of month, regardless of month or year
pub const MAX_DAY: u8 = 31;

/// Highest valid hour of day
pub const MAX_HOUR: u8 = 23;
/// Highest valid minute of hour
pub const MAX_MINUTE: u8 = 59;
/// Highest valid second of minute
pub const MAX_SECOND: u8 = 59;
/// Highest valid nanosecond of second
pub const MAX_NANOSECOND: u32 = 999_999_999;

/// Number of months in a year
pub const MONTHS_PER_YEAR: i64 = 12;

/// Seconds in a civil day, used for day spans
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Days in each Jalali month for a common year (index 0 is Farvardin).
/// Esfand shows 29 days, adjusted by the leap-year check.
pub const JALALI_DAYS_IN_MONTH: [u8; 12] = [
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (common year)
];

/// Days in each Gregorian month for a common year (index 0 is January).
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Length of the Jalali leap cycle in years
pub const JALALI_CYCLE_YEARS: u16 = 33;

/// Residues of `year % 33` that mark a Jalali leap year
pub const JALALI_LEAP_RESIDUES: [u16; 8] = [1, 5, 9, 13, 17, 22, 26, 30];

// Day-number pivot. Gregorian day numbers count from 1600-01-01, Jalali day
// numbers from 979-01-01 (= 1600-03-20), hence the 79 day shift.

/// Largest absolute year accepted by the calendar conversion functions
pub const MAX_CONVERSION_YEAR: i32 = 1_000_000;

/// Gregorian year used as day zero of the Gregorian day number
pub(crate) const GREGORIAN_EPOCH_YEAR: i64 = 1600;
/// Jalali year used as day zero of the Jalali day number
pub(crate) const JALALI_EPOCH_YEAR: i64 = 979;
/// Days between the two epochs
pub(crate) const EPOCH_SHIFT_DAYS: i64 = 79;

/// Days in one 33-year Jalali cycle
pub(crate) const JALALI_CYCLE_DAYS: i64 = 12_053;
/// Days in a four-year group that starts with a leap year
pub(crate) const FOUR_YEAR_DAYS: i64 = 1_461;
/// Leap years in one 33-year Jalali cycle
pub(crate) const JALALI_LEAPS_PER_CYCLE: i64 = 8;

/// Days in one 400-year Gregorian cycle
pub(crate) const GREGORIAN_CYCLE_DAYS: i64 = 146_097;
/// Days in the first (leap-bearing) century of a Gregorian cycle
pub(crate) const FIRST_CENTURY_DAYS: i64 = 36_525;
/// Days in the remaining centuries of a Gregorian cycle
pub(crate) const CENTURY_DAYS: i64 = 36_524;
/// Days in a leap year
pub(crate) const LEAP_YEAR_DAYS: i64 = 366;
/// Days in a common year
pub(crate) const COMMON_YEAR_DAYS: i64 = 365;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Weekday (0 = Sunday) of Gregorian day number zero, 1600-01-01
pub(crate) const EPOCH_WEEKDAY: i64 = 6;

/// IANA identifier for Iran Standard Time
pub const TEHRAN_ZONE: &str = "Asia/Tehran";

/// Layout used by `Display`
pub const DISPLAY_LAYOUT: &str = "%Y/%m/%d %T";
/// Layout used by `JalaliDateTime::format_date_time`
pub const DATE_TIME_LAYOUT: &str = "%Y/%m/%d %R";
/// Parse layout used by `FromStr`
pub const DEFAULT_PARSE_LAYOUT: &str = "YYYY/MM/DD HH:MM:SS";

/// Characters that separate fields in parse layouts and values
pub const PARSE_SEPARATORS: [char; 4] = ['/', ':', '-', ' '];
