use std::fmt::{self, Write};

use tracing::debug;

use crate::JalaliDateTime;
use crate::consts::{DATE_TIME_LAYOUT, DISPLAY_LAYOUT};

/// Persian "morning" marker, used before noon
const BEFORE_NOON: &str = "صبح";
/// Persian "afternoon" marker
const AFTER_NOON: &str = "عصر";

const SECONDS_PER_HOUR: i32 = 3600;
const SECONDS_PER_MINUTE: i32 = 60;

impl JalaliDateTime {
    /// Renders this value using a `%`-token layout.
    ///
    /// | Token | Output |
    /// |-------|--------|
    /// | `%Y` | four digit year |
    /// | `%y` | two digit year |
    /// | `%m` | zero-padded month number |
    /// | `%B` | Persian month name |
    /// | `%b` | first three letters of the Persian month name |
    /// | `%d` `%H` `%M` `%S` | zero-padded day, hour, minute, second |
    /// | `%p` | Persian before/after noon marker |
    /// | `%w` | Persian weekday name |
    /// | `%z` | UTC offset as `+HHMM` |
    /// | `%Z` | IANA zone name |
    /// | `%R` `%T` | `HH:MM` and `HH:MM:SS` |
    /// | `%n` `%%` | newline and a literal `%` |
    ///
    /// Unknown tokens are copied as-is, `%` included.
    pub fn format(&self, layout: &str) -> String {
        let mut out = String::with_capacity(layout.len() + 16);
        // writing to a String cannot fail
        let _ = self.write_layout(&mut out, layout);
        out
    }

    /// `%Y/%m/%d %R`
    pub fn format_date_time(&self) -> String {
        self.format(DATE_TIME_LAYOUT)
    }

    fn write_layout<W: Write>(&self, out: &mut W, layout: &str) -> fmt::Result {
        let mut chars = layout.chars();
        while let Some(c) = chars.next() {
            if c != '%' {
                out.write_char(c)?;
                continue;
            }
            match chars.next() {
                Some(token) => self.write_token(out, token)?,
                None => out.write_char('%')?,
            }
        }
        Ok(())
    }

    fn write_token<W: Write>(&self, out: &mut W, token: char) -> fmt::Result {
        match token {
            'n' => out.write_char('\n'),
            '%' => out.write_char('%'),
            'Y' => write!(out, "{:04}", self.year()),
            'y' => write!(out, "{:02}", self.year() % 100),
            'm' => out.write_str(self.month.number_str()),
            'B' => out.write_str(self.month.fa_name()),
            'b' => self
                .month
                .fa_name()
                .chars()
                .take(3)
                .try_for_each(|c| out.write_char(c)),
            'd' => write!(out, "{:02}", self.day()),
            'H' => write!(out, "{:02}", self.hour),
            'M' => write!(out, "{:02}", self.minute),
            'S' => write!(out, "{:02}", self.second),
            'p' => out.write_str(if self.hour < 12 { BEFORE_NOON } else { AFTER_NOON }),
            'w' => out.write_str(self.weekday().fa_name()),
            'z' => self.write_offset(out),
            'Z' => out.write_str(self.zone_name().unwrap_or_default()),
            'R' => write!(out, "{:02}:{:02}", self.hour, self.minute),
            'T' => write!(out, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second),
            other => {
                out.write_char('%')?;
                out.write_char(other)
            },
        }
    }

    fn write_offset<W: Write>(&self, out: &mut W) -> fmt::Result {
        let offset = match self.zone_info() {
            Ok((_, offset)) => offset,
            Err(err) => {
                debug!(error = %err, "no UTC offset for %z, leaving it empty");
                return Ok(());
            },
        };
        let sign = if offset < 0 { '-' } else { '+' };
        let offset = offset.abs();
        write!(
            out,
            "{sign}{:02}{:02}",
            offset / SECONDS_PER_HOUR,
            (offset % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE
        )
    }
}

impl fmt::Display for JalaliDateTime {
    /// Renders `%Y/%m/%d %T`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_layout(f, DISPLAY_LAYOUT)
    }
}
