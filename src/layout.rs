//! Tokenizer and scanning primitives for the layout mini-language.
//!
//! ```text
//! YY       01             Two-digit year
//! YYYY   2001             Four-digit year
//! M      1-12             Month, beginning at 1
//! MM    01-12             Month, 2-digits
//! MMM   Jan-Dec           The abbreviated month name
//! MMMM  January-December  The full month name
//! D      1-31             Day of month
//! DD    01-31             Day of month, 2-digits
//! a     am/pm             Ante meridiem or post meridiem
//! A     AM/PM             Ante meridiem or post meridiem
//! H      0-23             Hour, 24-hour clock
//! HH    00-23             Hour, 24-hour clock, 2-digits
//! h      1-12             Hour, 12-hour clock
//! hh    01-12             Hour, 12-hour clock, 2-digits
//! m      0-59             Minute
//! mm    00-59             Minute, 2-digits
//! s      0-59             Second, including fraction
//! ss    00-59             Second, 2-digits, including fraction
//! ```
//!
//! Any other character is literal text.

use std::fmt;

use crate::consts::{FRACTION_DIGITS, FRACTION_SEPARATOR, NANOS_PER_SECOND};

/// One field of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    YearTwoDigit,
    YearFourDigit,
    Month,
    MonthTwoDigit,
    MonthShortName,
    MonthLongName,
    Day,
    DayTwoDigit,
    Meridiem,
    MeridiemUpper,
    Hour24,
    Hour24TwoDigit,
    Hour12,
    Hour12TwoDigit,
    Minute,
    MinuteTwoDigit,
    Second,
    SecondTwoDigit,
}

impl Token {
    /// The layout text this token is spelled with.
    pub const fn text(self) -> &'static str {
        match self {
            Self::YearTwoDigit => "YY",
            Self::YearFourDigit => "YYYY",
            Self::Month => "M",
            Self::MonthTwoDigit => "MM",
            Self::MonthShortName => "MMM",
            Self::MonthLongName => "MMMM",
            Self::Day => "D",
            Self::DayTwoDigit => "DD",
            Self::Meridiem => "a",
            Self::MeridiemUpper => "A",
            Self::Hour24 => "H",
            Self::Hour24TwoDigit => "HH",
            Self::Hour12 => "h",
            Self::Hour12TwoDigit => "hh",
            Self::Minute => "m",
            Self::MinuteTwoDigit => "mm",
            Self::Second => "s",
            Self::SecondTwoDigit => "ss",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Which family of tokens a layout is scanned for.
///
/// Date layouts treat `a`, `h`, `m`, `s` as literal text and time layouts
/// treat `Y`, `M`, `D` as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    Date,
    Time,
}

// Longest spelling first for each marker character.
const DATE_TOKENS: [Token; 8] = [
    Token::YearFourDigit,
    Token::YearTwoDigit,
    Token::MonthLongName,
    Token::MonthShortName,
    Token::MonthTwoDigit,
    Token::Month,
    Token::DayTwoDigit,
    Token::Day,
];

const TIME_TOKENS: [Token; 10] = [
    Token::Meridiem,
    Token::MeridiemUpper,
    Token::Hour24TwoDigit,
    Token::Hour24,
    Token::Hour12TwoDigit,
    Token::Hour12,
    Token::MinuteTwoDigit,
    Token::Minute,
    Token::SecondTwoDigit,
    Token::Second,
];

impl LayoutKind {
    const fn tokens(self) -> &'static [Token] {
        match self {
            Self::Date => &DATE_TOKENS,
            Self::Time => &TIME_TOKENS,
        }
    }
}

/// One tokenizer step: literal text, the token after it, and the unscanned rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Step<'a> {
    pub prefix: &'a str,
    pub token:  Option<Token>,
    pub suffix: &'a str,
}

/// Finds the first token of `layout`. When there is none the whole layout is
/// returned as the prefix.
pub(crate) fn next_token(layout: &str, kind: LayoutKind) -> Step<'_> {
    let candidates = kind.tokens();
    for (i, _) in layout.char_indices() {
        let rest = &layout[i..];
        if let Some(&token) = candidates.iter().find(|t| rest.starts_with(t.text())) {
            return Step {
                prefix: &layout[..i],
                token:  Some(token),
                suffix: &rest[token.text().len()..],
            };
        }
    }
    Step {
        prefix: layout,
        token:  None,
        suffix: "",
    }
}

/// A piece of a tokenized layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    Literal(&'a str),
    Field(Token),
}

/// Splits `layout` into literal runs and field tokens, in order. Empty
/// literal runs are omitted.
pub fn tokenize(layout: &str, kind: LayoutKind) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut rest = layout;
    loop {
        let step = next_token(rest, kind);
        if !step.prefix.is_empty() {
            pieces.push(Piece::Literal(step.prefix));
        }
        let Some(token) = step.token else {
            return pieces;
        };
        pieces.push(Piece::Field(token));
        rest = step.suffix;
    }
}

/// Reports whether `value` starts with `name`, ignoring ASCII case.
/// Returns the text after the match.
fn strip_prefix_fold<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    let head = value.as_bytes().get(..name.len())?;
    if head.eq_ignore_ascii_case(name.as_bytes()) {
        // `name` is ASCII, so a match ends on a char boundary.
        value.get(name.len()..)
    } else {
        None
    }
}

/// Finds the first name in `names` that prefixes `value`, ignoring case.
pub(crate) fn search_name<'a>(names: &[&str], value: &'a str) -> Option<(usize, &'a str)> {
    names
        .iter()
        .enumerate()
        .find_map(|(i, name)| strip_prefix_fold(value, name).map(|rest| (i, rest)))
}

/// Scans an optionally signed integer of `min..=max` digits.
pub(crate) fn parse_int(value: &str, min: usize, max: usize) -> Option<(i64, &str)> {
    let (negative, unsigned) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let digits = unsigned
        .bytes()
        .take(max)
        .take_while(u8::is_ascii_digit)
        .count();
    if digits < min {
        return None;
    }

    let n = unsigned[..digits]
        .bytes()
        .fold(0i64, |n, c| n * 10 + i64::from(c - b'0'));
    Some((if negative { -n } else { n }, &unsigned[digits..]))
}

/// Scans seconds with an optional fraction of up to nine digits.
/// Returns (seconds, nanoseconds, rest).
pub(crate) fn parse_seconds(value: &str, min: usize, max: usize) -> Option<(i64, i64, &str)> {
    let (seconds, rest) = parse_int(value, min, max)?;

    let Some(fraction) = rest.strip_prefix(FRACTION_SEPARATOR) else {
        return Some((seconds, 0, rest));
    };
    let digits = fraction
        .bytes()
        .take(FRACTION_DIGITS)
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return Some((seconds, 0, rest));
    }

    let mut nanos = fraction[..digits]
        .bytes()
        .fold(0i64, |n, c| n * 10 + i64::from(c - b'0'));
    for _ in digits..FRACTION_DIGITS {
        nanos *= 10;
    }
    Some((seconds, nanos, &fraction[digits..]))
}

/// Writes `n` in decimal with at least `width` digits, sign excluded.
pub(crate) fn write_int<W: fmt::Write>(w: &mut W, n: i64, width: usize) -> fmt::Result {
    if n < 0 {
        w.write_char('-')?;
    }
    write!(w, "{:0width$}", n.unsigned_abs())
}

/// Writes `.` and the significant digits of `nanos`. Writes nothing for zero.
pub(crate) fn write_fraction<W: fmt::Write>(w: &mut W, nanos: i64) -> fmt::Result {
    debug_assert!((0..NANOS_PER_SECOND).contains(&nanos));

    if nanos == 0 {
        return Ok(());
    }
    let mut digits = nanos;
    let mut width = FRACTION_DIGITS;
    while digits % 10 == 0 {
        digits /= 10;
        width -= 1;
    }
    write!(w, "{FRACTION_SEPARATOR}{digits:0width$}")
}
