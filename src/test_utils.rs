//! Terse constructors shared by the unit tests.

use crate::{JalaliDateTime, Month, TimeZone};

pub fn month(value: u8) -> Month {
    Month::new(value).unwrap()
}

/// A UTC date-time from raw fields
pub fn jdt(y: u16, m: u8, d: u8, hour: u8, minute: u8, second: u8) -> JalaliDateTime {
    jdt_in(y, m, d, hour, minute, second, TimeZone::UTC)
}

pub fn jdt_in(y: u16, m: u8, d: u8, hour: u8, minute: u8, second: u8, zone: TimeZone) -> JalaliDateTime {
    JalaliDateTime::new(y, month(m), d, hour, minute, second, 0, Some(zone)).unwrap()
}

pub fn tehran() -> TimeZone {
    crate::tehran().unwrap()
}
