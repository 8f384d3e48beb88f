//! The absolute-time boundary: conversion to and from [`jiff::Zoned`], zone
//! resolution and zone conversion.
//!
//! This is the only place an unset zone is resolved to the system zone.

use jiff::Zoned;
use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use tracing::{debug, trace};

use crate::consts::TEHRAN_ZONE;
use crate::convert::{gregorian_to_jalali, jalali_to_gregorian};
use crate::{Day, Error, JalaliDateTime, Month, Year};

/// Gregorian years representable by `jiff`
const CIVIL_YEARS: std::ops::RangeInclusive<i32> = -9999..=9999;

/// Iran Standard Time, `Asia/Tehran`.
///
/// # Errors
/// Returns `Error::UnknownZone` if the time zone database lacks the zone.
pub fn tehran() -> Result<TimeZone, Error> {
    resolve_zone(TEHRAN_ZONE)
}

/// Looks up a time zone by its IANA identifier.
///
/// # Errors
/// Returns `Error::UnknownZone` if no zone has that name.
pub fn resolve_zone(name: &str) -> Result<TimeZone, Error> {
    trace!(zone = name, "resolving time zone");
    TimeZone::get(name).map_err(|err| {
        debug!(zone = name, error = %err, "time zone lookup failed");
        Error::UnknownZone(name.to_owned())
    })
}

// Every validated time-of-day field fits an i8.
#[allow(clippy::cast_possible_wrap)]
const fn small(value: u8) -> i8 {
    value as i8
}

impl JalaliDateTime {
    /// The current moment in the system time zone.
    ///
    /// # Errors
    /// Fails only if the system clock reports a date outside the Jalali range.
    pub fn now() -> Result<Self, Error> {
        Self::try_from(&Zoned::now())
    }

    fn effective_zone(&self) -> TimeZone {
        self.zone.clone().unwrap_or_else(|| {
            debug!("no zone set, using the system time zone");
            TimeZone::system()
        })
    }

    /// The same civil date-time as an absolute Gregorian timestamp. An unset
    /// zone resolves to the system zone.
    ///
    /// # Errors
    /// Returns `Error::GregorianYearOutOfRange` for Jalali years whose
    /// Gregorian equivalent is past year 9999, or `Error::Time` if the zone
    /// cannot place the civil time.
    pub fn to_zoned(&self) -> Result<Zoned, Error> {
        let (gy, gm, gd) = jalali_to_gregorian(i32::from(self.year()), self.month.get(), self.day());
        let year = i16::try_from(gy)
            .ok()
            .filter(|_| CIVIL_YEARS.contains(&gy))
            .ok_or(Error::GregorianYearOutOfRange(gy))?;
        #[allow(clippy::cast_possible_wrap)]
        let nanosecond = self.nanosecond as i32;

        let datetime = DateTime::new(
            year,
            small(gm),
            small(gd),
            small(self.hour),
            small(self.minute),
            small(self.second),
            nanosecond,
        )?;
        Ok(datetime.to_zoned(self.effective_zone())?)
    }

    /// The same instant expressed in `zone`. Every calendar field may change.
    ///
    /// # Errors
    /// Same as [`JalaliDateTime::to_zoned`], plus `Error::InvalidYear` if the
    /// instant falls outside the Jalali range in the new zone.
    pub fn in_zone(&self, zone: TimeZone) -> Result<Self, Error> {
        Self::try_from(&self.to_zoned()?.with_time_zone(zone))
    }

    /// The same instant in the system time zone.
    ///
    /// # Errors
    /// Same as [`JalaliDateTime::in_zone`].
    pub fn to_local(&self) -> Result<Self, Error> {
        self.in_zone(TimeZone::system())
    }

    /// The same instant in UTC.
    ///
    /// # Errors
    /// Same as [`JalaliDateTime::in_zone`].
    pub fn to_utc(&self) -> Result<Self, Error> {
        self.in_zone(TimeZone::UTC)
    }

    /// Abbreviation and UTC offset in seconds of the zone in effect at this
    /// instant, e.g. `("+0330", 12600)` for Tehran.
    ///
    /// # Errors
    /// Same as [`JalaliDateTime::to_zoned`].
    pub fn zone_info(&self) -> Result<(String, i32), Error> {
        let zoned = self.to_zoned()?;
        let info = zoned.time_zone().to_offset_info(zoned.timestamp());
        Ok((info.abbreviation().to_owned(), info.offset().seconds()))
    }

    /// IANA name of the stored zone, if it has one.
    pub fn zone_name(&self) -> Option<&str> {
        self.zone.as_ref().and_then(TimeZone::iana_name)
    }

    /// Whole seconds since the Unix epoch.
    ///
    /// # Errors
    /// Same as [`JalaliDateTime::to_zoned`].
    pub fn unix(&self) -> Result<i64, Error> {
        Ok(self.to_zoned()?.timestamp().as_second())
    }

    /// Nanoseconds since the Unix epoch.
    ///
    /// # Errors
    /// Same as [`JalaliDateTime::to_zoned`].
    pub fn unix_nano(&self) -> Result<i128, Error> {
        Ok(self.to_zoned()?.timestamp().as_nanosecond())
    }
}

impl TryFrom<&Zoned> for JalaliDateTime {
    type Error = Error;

    /// Converts the Gregorian calendar fields of `zoned`; time of day and zone
    /// are copied unchanged.
    fn try_from(zoned: &Zoned) -> Result<Self, Self::Error> {
        let (jy, jm, jd) = gregorian_to_jalali(
            i32::from(zoned.year()),
            zoned.month().unsigned_abs(),
            zoned.day().unsigned_abs(),
        );
        let year = Year::try_from(i64::from(jy))?;
        let month = Month::new(jm)?;
        let day = Day::new(jd, year, month)?;
        Ok(Self {
            year,
            month,
            day,
            hour: zoned.hour().unsigned_abs(),
            minute: zoned.minute().unsigned_abs(),
            second: zoned.second().unsigned_abs(),
            nanosecond: zoned.subsec_nanosecond().unsigned_abs(),
            zone: Some(zoned.time_zone().clone()),
        })
    }
}

impl TryFrom<Zoned> for JalaliDateTime {
    type Error = Error;

    fn try_from(zoned: Zoned) -> Result<Self, Self::Error> {
        Self::try_from(&zoned)
    }
}
