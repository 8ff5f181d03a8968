//! Formatting and parsing of calendar and clock fields against layouts.

use std::fmt;

use crate::ParseError;
use crate::consts::{
    DATE_SEPARATOR, FRACTION_DIGITS, FRACTION_SEPARATOR, MERIDIEM_LOWER, MERIDIEM_UPPER,
    MONTH_LONG_NAMES, MONTH_SHORT_NAMES, NANOS_PER_SECOND, RFC3339_DATE, RFC3339_TIME,
    TIME_SEPARATOR, TWO_DIGIT_YEAR_PIVOT,
};
use crate::layout::{LayoutKind, Token, next_token, parse_int, parse_seconds, search_name, write_fraction, write_int};
use crate::types::{Meridiem, hour12};

/// Raw calendar and clock fields as scanned from text or extracted from a value.
///
/// Nothing here is validated; the value constructors do that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Fields {
    pub year:       i64,
    pub month:      i64,
    pub day:        i64,
    pub hour:       i64,
    pub minute:     i64,
    pub second:     i64,
    pub nanosecond: i64,
}

/// Lazily renders fields against a layout.
pub(crate) struct DisplayLayout<'a> {
    pub layout: &'a str,
    pub kind:   LayoutKind,
    pub fields: Fields,
}

impl fmt::Display for DisplayLayout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Fields {
            year,
            month,
            day,
            hour,
            minute,
            second,
            nanosecond,
        } = self.fields;

        let mut rest = self.layout;
        loop {
            let step = next_token(rest, self.kind);
            f.write_str(step.prefix)?;
            let Some(token) = step.token else {
                return Ok(());
            };
            rest = step.suffix;

            match token {
                Token::YearTwoDigit => write_int(f, year.rem_euclid(100), 2)?,
                Token::YearFourDigit => write_int(f, year, 4)?,
                Token::Month => write_int(f, month, 0)?,
                Token::MonthTwoDigit => write_int(f, month, 2)?,
                Token::MonthShortName => f.write_str(MONTH_SHORT_NAMES[month as usize - 1])?,
                Token::MonthLongName => f.write_str(MONTH_LONG_NAMES[month as usize - 1])?,
                Token::Day => write_int(f, day, 0)?,
                Token::DayTwoDigit => write_int(f, day, 2)?,
                Token::Meridiem => f.write_str(MERIDIEM_LOWER[Meridiem::from_hour(hour as u8).index()])?,
                Token::MeridiemUpper => f.write_str(MERIDIEM_UPPER[Meridiem::from_hour(hour as u8).index()])?,
                Token::Hour24 => write_int(f, hour, 0)?,
                Token::Hour24TwoDigit => write_int(f, hour, 2)?,
                Token::Hour12 => write_int(f, i64::from(hour12(hour as u8)), 0)?,
                Token::Hour12TwoDigit => write_int(f, i64::from(hour12(hour as u8)), 2)?,
                Token::Minute => write_int(f, minute, 0)?,
                Token::MinuteTwoDigit => write_int(f, minute, 2)?,
                Token::Second => {
                    write_int(f, second, 0)?;
                    write_fraction(f, nanosecond)?;
                },
                Token::SecondTwoDigit => {
                    write_int(f, second, 2)?;
                    write_fraction(f, nanosecond)?;
                },
            }
        }
    }
}

/// Maps a two-digit year onto 1969..=2068.
const fn expand_two_digit_year(yy: i64) -> i64 {
    if yy >= TWO_DIGIT_YEAR_PIVOT { 1900 + yy } else { 2000 + yy }
}

/// Scans `value` against `layout`.
///
/// Literal text must match exactly; numeric fields take the digit counts
/// their token allows; names match case-insensitively. Text left over after
/// the last token is ignored. On the first mismatch the error carries the
/// layout element and the remaining value at that point.
pub(crate) fn parse_fields(layout: &str, value: &str, kind: LayoutKind) -> Result<Fields, ParseError> {
    let mut fields = Fields::default();
    let mut meridiem = None;

    let mut layout_rest = layout;
    let mut value_rest = value;
    loop {
        let step = next_token(layout_rest, kind);
        let Some(token) = step.token else {
            break;
        };
        layout_rest = step.suffix;

        if value_rest.len() < step.prefix.len() {
            return Err(ParseError::at(layout, value, token.text(), value_rest));
        }
        let Some(field_text) = value_rest.strip_prefix(step.prefix) else {
            return Err(ParseError::at(layout, value, step.prefix, value_rest));
        };

        let mismatch = || ParseError::at(layout, value, token.text(), field_text);
        value_rest = match token {
            Token::YearTwoDigit => {
                let (yy, rest) = parse_int(field_text, 2, 2).ok_or_else(mismatch)?;
                fields.year = expand_two_digit_year(yy);
                rest
            },
            Token::YearFourDigit => {
                let (year, rest) = parse_int(field_text, 4, 4).ok_or_else(mismatch)?;
                fields.year = year;
                rest
            },
            Token::Month | Token::MonthTwoDigit => {
                let min = if token == Token::Month { 1 } else { 2 };
                let (month, rest) = parse_int(field_text, min, 2).ok_or_else(mismatch)?;
                fields.month = month;
                rest
            },
            Token::MonthShortName | Token::MonthLongName => {
                let names = if token == Token::MonthShortName {
                    &MONTH_SHORT_NAMES
                } else {
                    &MONTH_LONG_NAMES
                };
                let (index, rest) = search_name(names, field_text).ok_or_else(mismatch)?;
                fields.month = index as i64 + 1;
                rest
            },
            Token::Day | Token::DayTwoDigit => {
                let min = if token == Token::Day { 1 } else { 2 };
                let (day, rest) = parse_int(field_text, min, 2).ok_or_else(mismatch)?;
                fields.day = day;
                rest
            },
            Token::Meridiem | Token::MeridiemUpper => {
                let names = if token == Token::Meridiem {
                    &MERIDIEM_LOWER
                } else {
                    &MERIDIEM_UPPER
                };
                let (index, rest) = search_name(names, field_text).ok_or_else(mismatch)?;
                meridiem = Some(if index == 0 { Meridiem::Am } else { Meridiem::Pm });
                rest
            },
            Token::Hour24 | Token::Hour12 | Token::Hour24TwoDigit | Token::Hour12TwoDigit => {
                let min = if matches!(token, Token::Hour24 | Token::Hour12) { 1 } else { 2 };
                let (hour, rest) = parse_int(field_text, min, 2).ok_or_else(mismatch)?;
                fields.hour = hour;
                rest
            },
            Token::Minute | Token::MinuteTwoDigit => {
                let min = if token == Token::Minute { 1 } else { 2 };
                let (minute, rest) = parse_int(field_text, min, 2).ok_or_else(mismatch)?;
                fields.minute = minute;
                rest
            },
            Token::Second | Token::SecondTwoDigit => {
                let min = if token == Token::Second { 1 } else { 2 };
                let (second, nanosecond, rest) = parse_seconds(field_text, min, 2).ok_or_else(mismatch)?;
                fields.second = second;
                fields.nanosecond = nanosecond;
                rest
            },
        };
    }

    if let Some(meridiem) = meridiem {
        fields.hour = meridiem.to_24_hour(fields.hour);
    }
    Ok(fields)
}

/// Scans exactly `len` ASCII digits at the start of `bytes`.
fn fixed_digits(bytes: &[u8], len: usize) -> Option<i64> {
    let digits = bytes.get(..len)?;
    if !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(digits.iter().fold(0i64, |n, &c| n * 10 + i64::from(c - b'0')))
}

/// Scans the fixed-width `YYYY-MM-DD` shape, nothing more and nothing less.
pub(crate) fn parse_strict_date(value: &str) -> Result<Fields, ParseError> {
    let bytes = value.as_bytes();
    let invalid = || ParseError::new(RFC3339_DATE, value);
    if bytes.len() != RFC3339_DATE.len() {
        return Err(invalid());
    }

    let separator = DATE_SEPARATOR as u8;
    if bytes[4] != separator || bytes[7] != separator {
        return Err(invalid());
    }
    let year = fixed_digits(bytes, 4).ok_or_else(invalid)?;
    let month = fixed_digits(&bytes[5..], 2).ok_or_else(invalid)?;
    let day = fixed_digits(&bytes[8..], 2).ok_or_else(invalid)?;

    Ok(Fields {
        year,
        month,
        day,
        ..Fields::default()
    })
}

/// Scans the fixed-width `HH:mm:ss[.fffffffff]` shape.
pub(crate) fn parse_strict_time(value: &str) -> Result<Fields, ParseError> {
    let bytes = value.as_bytes();
    let invalid = || ParseError::new(RFC3339_TIME, value);
    if bytes.len() < RFC3339_TIME.len() {
        return Err(invalid());
    }

    let separator = TIME_SEPARATOR as u8;
    if bytes[2] != separator || bytes[5] != separator {
        return Err(invalid());
    }
    let hour = fixed_digits(bytes, 2).ok_or_else(invalid)?;
    let minute = fixed_digits(&bytes[3..], 2).ok_or_else(invalid)?;
    let second = fixed_digits(&bytes[6..], 2).ok_or_else(invalid)?;

    let nanosecond = match &bytes[8..] {
        [] => 0,
        [sep, fraction @ ..] if *sep == FRACTION_SEPARATOR as u8 && (1..=FRACTION_DIGITS).contains(&fraction.len()) => {
            let n = fixed_digits(fraction, fraction.len()).ok_or_else(invalid)?;
            n * NANOS_PER_SECOND / 10i64.pow(fraction.len() as u32)
        },
        _ => return Err(invalid()),
    };

    Ok(Fields {
        hour,
        minute,
        second,
        nanosecond,
        ..Fields::default()
    })
}
