//! Gregorian <-> Jalali conversion through a shared day number.
//!
//! Day numbers count days elapsed since Gregorian 1600-01-01. Jalali dates are
//! decomposed along the 33-year leap cycle, Gregorian dates along the 400, 100
//! and 4 year cycles. All divisions are Euclidean, so the arithmetic stays exact
//! for dates before the epoch as well.

use crate::consts::{
    CENTURY_CYCLE, CENTURY_DAYS, COMMON_YEAR_DAYS, EPOCH_SHIFT_DAYS, EPOCH_WEEKDAY,
    FIRST_CENTURY_DAYS, FOUR_YEAR_DAYS, GREGORIAN_CYCLE, GREGORIAN_CYCLE_DAYS,
    GREGORIAN_DAYS_IN_MONTH, GREGORIAN_EPOCH_YEAR, JALALI_CYCLE_DAYS, JALALI_CYCLE_YEARS,
    JALALI_DAYS_IN_MONTH, JALALI_EPOCH_YEAR, JALALI_LEAPS_PER_CYCLE, LEAP_YEAR_CYCLE,
    LEAP_YEAR_DAYS, MAX_CONVERSION_YEAR, MAX_MONTH,
};

/// Converts a proleptic Gregorian date to the Jalali calendar.
///
/// # Panics
/// Panics if `month` is outside `1..=12`, or if `year` is outside
/// `-MAX_CONVERSION_YEAR..=MAX_CONVERSION_YEAR`.
pub fn gregorian_to_jalali(year: i32, month: u8, day: u8) -> (i32, u8, u8) {
    assert_year(year);
    assert_month(month);
    let (jy, jm, jd) = day_number_to_jalali(gregorian_to_day_number(i64::from(year), month, day));
    (narrow_year(jy), jm, jd)
}

/// Converts a Jalali date to the proleptic Gregorian calendar.
///
/// # Panics
/// Panics if `month` is outside `1..=12`, or if `year` is outside
/// `-MAX_CONVERSION_YEAR..=MAX_CONVERSION_YEAR`.
pub fn jalali_to_gregorian(year: i32, month: u8, day: u8) -> (i32, u8, u8) {
    assert_year(year);
    assert_month(month);
    let (gy, gm, gd) = day_number_to_gregorian(jalali_to_day_number(i64::from(year), month, day));
    (narrow_year(gy), gm, gd)
}

fn assert_month(month: u8) {
    assert!(
        (1..=MAX_MONTH).contains(&month),
        "invalid month value: {month}"
    );
}

fn assert_year(year: i32) {
    assert!(
        (-MAX_CONVERSION_YEAR..=MAX_CONVERSION_YEAR).contains(&year),
        "year out of conversion range: {year}"
    );
}

// The two calendars are at most 622 years apart, so any year that passed
// `assert_year` converts to a year well inside i32.
#[allow(clippy::cast_possible_truncation)]
const fn narrow_year(year: i64) -> i32 {
    year as i32
}

const fn is_gregorian_leap(year: i64) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

fn days_before_month(table: &[u8; 12], month: u8) -> i64 {
    table[..usize::from(month - 1)]
        .iter()
        .map(|&days| i64::from(days))
        .sum()
}

pub(crate) fn gregorian_to_day_number(year: i64, month: u8, day: u8) -> i64 {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    let gy = year - GREGORIAN_EPOCH_YEAR;

    let mut day_no = COMMON_YEAR_DAYS * gy + (gy + 3).div_euclid(LEAP_YEAR_CYCLE)
        - (gy + 99).div_euclid(CENTURY_CYCLE)
        + (gy + 399).div_euclid(GREGORIAN_CYCLE);
    day_no += days_before_month(&GREGORIAN_DAYS_IN_MONTH, month);
    if month > 2 && is_gregorian_leap(year) {
        day_no += 1;
    }
    day_no + i64::from(day) - 1
}

pub(crate) fn day_number_to_gregorian(day_no: i64) -> (i64, u8, u8) {
    let mut year = GREGORIAN_EPOCH_YEAR + GREGORIAN_CYCLE * day_no.div_euclid(GREGORIAN_CYCLE_DAYS);
    let mut rest = day_no.rem_euclid(GREGORIAN_CYCLE_DAYS);

    let mut leap = true;
    if rest >= FIRST_CENTURY_DAYS {
        rest -= 1;
        year += CENTURY_CYCLE * (rest / CENTURY_DAYS);
        rest %= CENTURY_DAYS;

        if rest >= COMMON_YEAR_DAYS {
            rest += 1;
        } else {
            // century year without its leap day
            leap = false;
        }
    }

    year += LEAP_YEAR_CYCLE * (rest / FOUR_YEAR_DAYS);
    rest %= FOUR_YEAR_DAYS;

    if rest >= LEAP_YEAR_DAYS {
        leap = false;
        rest -= 1;
        year += rest / COMMON_YEAR_DAYS;
        rest %= COMMON_YEAR_DAYS;
    }

    let mut month = 0;
    loop {
        let length = i64::from(GREGORIAN_DAYS_IN_MONTH[month]) + i64::from(month == 1 && leap);
        if rest < length {
            break;
        }
        rest -= length;
        month += 1;
    }
    (year, month_number(month), day_number(rest))
}

pub(crate) fn jalali_to_day_number(year: i64, month: u8, day: u8) -> i64 {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    let jy = year - JALALI_EPOCH_YEAR;
    let cycle = i64::from(JALALI_CYCLE_YEARS);

    let mut day_no = COMMON_YEAR_DAYS * jy
        + jy.div_euclid(cycle) * JALALI_LEAPS_PER_CYCLE
        + (jy.rem_euclid(cycle) + 3) / LEAP_YEAR_CYCLE;
    day_no += days_before_month(&JALALI_DAYS_IN_MONTH, month);
    day_no + i64::from(day) - 1 + EPOCH_SHIFT_DAYS
}

pub(crate) fn day_number_to_jalali(day_no: i64) -> (i64, u8, u8) {
    let shifted = day_no - EPOCH_SHIFT_DAYS;
    let cycles = shifted.div_euclid(JALALI_CYCLE_DAYS);
    let mut rest = shifted.rem_euclid(JALALI_CYCLE_DAYS);

    let mut year = JALALI_EPOCH_YEAR
        + i64::from(JALALI_CYCLE_YEARS) * cycles
        + LEAP_YEAR_CYCLE * (rest / FOUR_YEAR_DAYS);
    rest %= FOUR_YEAR_DAYS;

    if rest >= LEAP_YEAR_DAYS {
        year += (rest - 1) / COMMON_YEAR_DAYS;
        rest = (rest - 1) % COMMON_YEAR_DAYS;
    }

    let mut month = 0;
    while month < 11 && rest >= i64::from(JALALI_DAYS_IN_MONTH[month]) {
        rest -= i64::from(JALALI_DAYS_IN_MONTH[month]);
        month += 1;
    }
    (year, month_number(month), day_number(rest))
}

/// Weekday index (0 = Sunday) of a day number.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) const fn weekday_index(day_no: i64) -> u8 {
    (day_no + EPOCH_WEEKDAY).rem_euclid(7) as u8
}

#[allow(clippy::cast_possible_truncation)]
const fn month_number(index: usize) -> u8 {
    index as u8 + 1
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn day_number(rest: i64) -> u8 {
    rest as u8 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Month, days_in_month, is_leap_year};

    #[test]
    fn test_known_fixed_points() {
        struct TestCase {
            jalali:      (i32, u8, u8),
            gregorian:   (i32, u8, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                jalali:      (1403, 1, 1),
                gregorian:   (2024, 3, 20),
                description: "Nowruz 1403",
            },
            TestCase {
                jalali:      (1404, 1, 1),
                gregorian:   (2025, 3, 21),
                description: "Nowruz 1404",
            },
            TestCase {
                jalali:      (1403, 12, 30),
                gregorian:   (2025, 3, 20),
                description: "leap Esfand 30",
            },
            TestCase {
                jalali:      (1403, 3, 5),
                gregorian:   (2024, 5, 25),
                description: "mid Khordad",
            },
            TestCase {
                jalali:      (1378, 10, 11),
                gregorian:   (2000, 1, 1),
                description: "Gregorian millennium",
            },
            TestCase {
                jalali:      (1348, 10, 11),
                gregorian:   (1970, 1, 1),
                description: "Unix epoch",
            },
            TestCase {
                jalali:      (979, 1, 1),
                gregorian:   (1600, 3, 20),
                description: "Jalali day-number epoch",
            },
        ];

        for case in &cases {
            let (jy, jm, jd) = case.jalali;
            let (gy, gm, gd) = case.gregorian;
            assert_eq!(
                jalali_to_gregorian(jy, jm, jd),
                case.gregorian,
                "jalali_to_gregorian ({})",
                case.description
            );
            assert_eq!(
                gregorian_to_jalali(gy, gm, gd),
                case.jalali,
                "gregorian_to_jalali ({})",
                case.description
            );
        }
    }

    #[test]
    fn test_day_number_epoch() {
        assert_eq!(gregorian_to_day_number(1600, 1, 1), 0);
        assert_eq!(day_number_to_gregorian(0), (1600, 1, 1));
        assert_eq!(jalali_to_day_number(979, 1, 1), gregorian_to_day_number(1600, 3, 20));
    }

    #[test]
    fn test_gregorian_century_leap_days() {
        // 1700, 1800, 1900 drop their leap day, 2000 keeps it
        for year in [1700, 1800, 1900, 2100] {
            let feb28 = gregorian_to_day_number(year, 2, 28);
            assert_eq!(day_number_to_gregorian(feb28 + 1), (year, 3, 1), "year {year}");
        }
        let feb28 = gregorian_to_day_number(2000, 2, 28);
        assert_eq!(day_number_to_gregorian(feb28 + 1), (2000, 2, 29));
    }

    #[test]
    fn test_jalali_round_trip_all_dates() {
        let mut expected_day_no = jalali_to_day_number(1, 1, 1);
        for year in 1..=9999_u16 {
            for m in 1..=12 {
                let month = Month::new(m).unwrap();
                for day in 1..=days_in_month(year, month) {
                    let day_no = jalali_to_day_number(i64::from(year), m, day);
                    assert_eq!(day_no, expected_day_no, "{year}-{m}-{day} is not contiguous");
                    assert_eq!(
                        day_number_to_jalali(day_no),
                        (i64::from(year), m, day),
                        "Jalali round trip failed"
                    );

                    let (gy, gm, gd) = day_number_to_gregorian(day_no);
                    assert_eq!(
                        gregorian_to_day_number(gy, gm, gd),
                        day_no,
                        "Gregorian round trip failed for {gy}-{gm}-{gd}"
                    );
                    expected_day_no += 1;
                }
            }
        }
    }

    #[test]
    fn test_gregorian_round_trip_sample() {
        for year in [622, 1000, 1582, 1600, 1899, 1900, 2000, 2024, 2100, 9999] {
            for month in 1..=12 {
                for day in [1, 15, 28] {
                    let (jy, jm, jd) = gregorian_to_jalali(year, month, day);
                    assert_eq!(
                        jalali_to_gregorian(jy, jm, jd),
                        (year, month, day),
                        "{year}-{month}-{day}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_esfand_length_matches_leap_predicate() {
        for year in 1..=9999_u16 {
            let nowruz = jalali_to_day_number(i64::from(year) + 1, 1, 1);
            let esfand_first = jalali_to_day_number(i64::from(year), 12, 1);
            let expected = if is_leap_year(year) { 30 } else { 29 };
            assert_eq!(nowruz - esfand_first, expected, "Esfand length of {year}");
        }
    }

    #[test]
    fn test_weekday_index() {
        // 1600-01-01 was a Saturday, 2024-03-20 a Wednesday
        assert_eq!(weekday_index(0), 6);
        assert_eq!(weekday_index(gregorian_to_day_number(2024, 3, 20)), 3);
        assert_eq!(weekday_index(gregorian_to_day_number(2024, 5, 25)), 6);
        assert_eq!(weekday_index(gregorian_to_day_number(1500, 1, 1)), 1);
    }

    #[test]
    #[should_panic(expected = "invalid month value: 13")]
    fn test_invalid_month_panics() {
        let _ = jalali_to_gregorian(1403, 13, 1);
    }

    #[test]
    fn test_conversion_year_limits() {
        for year in [-MAX_CONVERSION_YEAR, -1, 0, MAX_CONVERSION_YEAR] {
            let (gy, gm, gd) = jalali_to_gregorian(year, 1, 1);
            assert!((gy - year - 621).abs() <= 1, "jalali year {year} -> {gy}");
            assert_eq!(gregorian_to_jalali(gy, gm, gd), (year, 1, 1), "year {year}");
        }
    }

    #[test]
    #[should_panic(expected = "year out of conversion range")]
    fn test_jalali_year_past_limit_panics() {
        let _ = jalali_to_gregorian(i32::MAX, 1, 1);
    }

    #[test]
    #[should_panic(expected = "year out of conversion range")]
    fn test_gregorian_year_past_limit_panics() {
        let _ = gregorian_to_jalali(i32::MIN, 1, 1);
    }
}
