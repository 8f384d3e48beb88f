use std::str::FromStr;

use jiff::tz::TimeZone;
use tracing::debug;

use crate::consts::{
    DEFAULT_PARSE_LAYOUT, MAX_DAY, MAX_HOUR, MAX_MINUTE, MAX_MONTH, MAX_SECOND, MAX_YEAR,
    MIN_DAY, MIN_YEAR, PARSE_SEPARATORS,
};
use crate::prelude::*;
use crate::{Error, JalaliDateTime, Month};

/// A calendar field named by a parse layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "second")]
    Second,
}

impl Field {
    fn bounds(self) -> (i64, i64) {
        match self {
            Self::Year => (i64::from(MIN_YEAR), i64::from(MAX_YEAR)),
            Self::Month => (1, i64::from(MAX_MONTH)),
            Self::Day => (i64::from(MIN_DAY), i64::from(MAX_DAY)),
            Self::Hour => (0, i64::from(MAX_HOUR)),
            Self::Minute => (0, i64::from(MAX_MINUTE)),
            Self::Second => (0, i64::from(MAX_SECOND)),
        }
    }
}

/// Error type for parsing Jalali date-times from text.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Layout and value have different byte lengths.
    #[error("Value does not match the layout: expected {layout} bytes, found {value}")]
    LengthMismatch { layout: usize, value: usize },

    #[error("Empty date string")]
    EmptyInput,

    #[error("Consecutive separators at position {position}")]
    ConsecutiveSeparators { position: usize },

    /// Layout and value split into different numbers of fields or separators.
    #[error("Layout and value have mismatched structure")]
    StructureMismatch,

    #[error("Separator mismatch at position {position}: expected {expected:?}, found {found:?}")]
    SeparatorMismatch {
        position: usize,
        expected: char,
        found:    char,
    },

    #[error("Invalid value for {token}: {value:?}")]
    InvalidNumber { token: String, value: String },

    #[error("Invalid layout token at position {position}: {token}")]
    UnknownToken { position: usize, token: String },

    #[error("{field} out of range ({min}-{max}): {value}")]
    OutOfRange {
        field: Field,
        value: i64,
        min:   i64,
        max:   i64,
    },

    #[error("Layout has no {0} field")]
    MissingField(Field),

    /// Fields were individually in range but do not form a valid date.
    #[error(transparent)]
    Invalid(#[from] Error),
}

/// Splits `s` into field runs and the separators between them.
fn tokenize(s: &str) -> Result<(Vec<&str>, Vec<char>), ParseError> {
    let mut parts = Vec::new();
    let mut seps = Vec::new();
    let mut start = 0;

    for (i, c) in s.char_indices() {
        if !PARSE_SEPARATORS.contains(&c) {
            continue;
        }
        if start < i {
            parts.push(&s[start..i]);
        } else if i > 0 {
            return Err(ParseError::ConsecutiveSeparators { position: i });
        }
        seps.push(c);
        start = i + c.len_utf8();
    }
    if start < s.len() {
        parts.push(&s[start..]);
    }

    if parts.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    Ok((parts, seps))
}

/// Parsed fields; time fields default to zero.
#[derive(Debug, Default)]
struct Fields {
    year:   Option<i64>,
    month:  Option<i64>,
    day:    Option<i64>,
    hour:   i64,
    minute: i64,
    second: i64,
}

fn checked(field: Field, value: i64) -> Result<i64, ParseError> {
    let (min, max) = field.bounds();
    if !(min..=max).contains(&value) {
        return Err(ParseError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

// Callers have range-checked every field, so the narrowing casts are lossless.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn assemble(fields: &Fields, zone: Option<TimeZone>) -> Result<JalaliDateTime, ParseError> {
    let year = fields.year.ok_or(ParseError::MissingField(Field::Year))?;
    let month = fields.month.ok_or(ParseError::MissingField(Field::Month))?;
    let day = fields.day.ok_or(ParseError::MissingField(Field::Day))?;

    Ok(JalaliDateTime::new(
        year as u16,
        Month::new(month as u8)?,
        day as u8,
        fields.hour as u8,
        fields.minute as u8,
        fields.second as u8,
        0,
        zone,
    )?)
}

fn parse_fields(layout: &str, value: &str, zone: Option<TimeZone>) -> Result<JalaliDateTime, ParseError> {
    if layout.len() != value.len() {
        return Err(ParseError::LengthMismatch {
            layout: layout.len(),
            value:  value.len(),
        });
    }

    let (layout_parts, layout_seps) = tokenize(layout)?;
    let (value_parts, value_seps) = tokenize(value)?;

    if layout_parts.len() != value_parts.len() || layout_seps.len() != value_seps.len() {
        return Err(ParseError::StructureMismatch);
    }

    for (position, (&expected, &found)) in layout_seps.iter().zip(&value_seps).enumerate() {
        if expected != found {
            return Err(ParseError::SeparatorMismatch {
                position,
                expected,
                found,
            });
        }
    }

    let mut fields = Fields::default();
    for (i, (&token, &text)) in layout_parts.iter().zip(&value_parts).enumerate() {
        let num = text.parse::<i64>().map_err(|_| ParseError::InvalidNumber {
            token: token.to_owned(),
            value: text.to_owned(),
        })?;

        match token {
            "YYYY" => fields.year = Some(checked(Field::Year, num)?),
            // MM right after HH is minutes, anywhere else months
            "MM" if i > 0 && layout_parts[i - 1] == "HH" => {
                fields.minute = checked(Field::Minute, num)?;
            },
            "MM" => fields.month = Some(checked(Field::Month, num)?),
            "DD" => fields.day = Some(checked(Field::Day, num)?),
            "HH" => fields.hour = checked(Field::Hour, num)?,
            "SS" => fields.second = checked(Field::Second, num)?,
            _ => {
                return Err(ParseError::UnknownToken {
                    position: i,
                    token:    token.to_owned(),
                });
            },
        }
    }

    assemble(&fields, zone)
}

impl JalaliDateTime {
    /// Parses `value` against a layout such as `YYYY/MM/DD HH:MM:SS`. The
    /// result has no zone, so the system zone applies when one is needed.
    ///
    /// # Errors
    /// See [`JalaliDateTime::parse_in_zone`].
    pub fn parse(layout: &str, value: &str) -> Result<Self, ParseError> {
        Self::parse_with(layout, value, None)
    }

    /// Parses `value` against `layout`, attaching `zone` unchanged.
    ///
    /// Layout fields are `YYYY`, `MM`, `DD`, `HH` and `SS`, separated by `/`,
    /// `:`, `-` or a space. `MM` directly after `HH` is the minute, otherwise
    /// the month. Year, month and day are required; missing time fields are
    /// zero and nanoseconds are always zero.
    ///
    /// # Errors
    /// Returns a `ParseError` describing the first structural mismatch,
    /// non-numeric field, out-of-range field, or day that does not exist in
    /// the parsed month.
    pub fn parse_in_zone(layout: &str, value: &str, zone: TimeZone) -> Result<Self, ParseError> {
        Self::parse_with(layout, value, Some(zone))
    }

    fn parse_with(layout: &str, value: &str, zone: Option<TimeZone>) -> Result<Self, ParseError> {
        parse_fields(layout, value, zone).inspect_err(|err| {
            debug!(layout, value, error = %err, "rejected Jalali date-time");
        })
    }
}

impl FromStr for JalaliDateTime {
    type Err = ParseError;

    /// Parses `YYYY/MM/DD HH:MM:SS`, the inverse of `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(DEFAULT_PARSE_LAYOUT, s.trim())
    }
}
