//! Conversions between ordinal day numbers and proleptic Gregorian fields.
//!
//! Ordinal day 0 is January 1 of year 1. Every `i64` maps to exactly one
//! (year, month, day) triple; year 0 and negative years follow the same
//! leap rule. All divisions that may see negative operands are floor
//! divisions.

use crate::consts::{
    CENTURY_CYCLE, DAYS_BEFORE_MONTH, DAYS_IN_MONTH, DAYS_PER_4_YEARS, DAYS_PER_100_YEARS,
    DAYS_PER_400_YEARS, DAYS_PER_YEAR, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE,
};

/// Reports whether `year` has 366 days.
pub const fn is_leap_year(year: i64) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == 0
        && (year.rem_euclid(CENTURY_CYCLE) != 0 || year.rem_euclid(GREGORIAN_CYCLE) == 0)
}

/// Number of days in `month` of `year`. `month` must be in `1..=12`.
pub const fn days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= 12);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Number of days in `year`.
pub const fn days_in_year(year: i64) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Days of `year` that elapse before `month` starts.
pub(crate) const fn days_before_month(year: i64, month: u8) -> u16 {
    debug_assert!(month != 0 && month <= 12);

    let days = DAYS_BEFORE_MONTH[month as usize - 1];
    if month > FEBRUARY && is_leap_year(year) {
        days + 1
    } else {
        days
    }
}

/// Ordinal of the last day of the year before `year`.
///
/// Widened to `i128` so that every year reachable from an `i64` ordinal, plus
/// any `i64` offset, stays exact.
pub(crate) const fn ordinal_before_year(year: i128) -> i128 {
    let y = year - 1;
    y * DAYS_PER_YEAR as i128 + y.div_euclid(LEAP_YEAR_CYCLE as i128) - y.div_euclid(CENTURY_CYCLE as i128)
        + y.div_euclid(GREGORIAN_CYCLE as i128)
        - 1
}

pub(crate) const fn ordinal_date_to_ordinal(year: i64, day_of_year: i64) -> i128 {
    ordinal_before_year(year as i128) + day_of_year as i128
}

pub(crate) const fn to_ordinal(year: i64, month: u8, day: u8) -> i128 {
    ordinal_date_to_ordinal(year, days_before_month(year, month) as i64 + day as i64)
}

/// Splits an ordinal into (year, day of year), day of year starting at 1.
///
/// Takes an `i128` so callers may step a few days past either end of the
/// `i64` range; the resulting year always fits an `i64`.
pub(crate) const fn ordinal_to_ordinal_date(n: i128) -> (i64, u16) {
    let cycles = n.div_euclid(DAYS_PER_400_YEARS as i128);
    let mut rem = n.rem_euclid(DAYS_PER_400_YEARS as i128) as i64;
    let mut year = cycles as i64 * GREGORIAN_CYCLE + 1;

    // The last day of a 400-year cycle belongs to the fourth century.
    let mut n100 = rem / DAYS_PER_100_YEARS;
    n100 -= n100 >> 2;
    year += n100 * CENTURY_CYCLE;
    rem -= n100 * DAYS_PER_100_YEARS;

    let n4 = rem / DAYS_PER_4_YEARS;
    year += n4 * LEAP_YEAR_CYCLE;
    rem -= n4 * DAYS_PER_4_YEARS;

    // Likewise the leap day closes the fourth year of a 4-year cycle.
    let mut n1 = rem / DAYS_PER_YEAR;
    n1 -= n1 >> 2;
    year += n1;
    rem -= n1 * DAYS_PER_YEAR;

    (year, rem as u16 + 1)
}

/// Resolves a day of year into (month, day).
pub(crate) fn ordinal_date_to_calendar(year: i64, day_of_year: u16) -> (u8, u8) {
    let leap = u16::from(is_leap_year(year));
    let zero_based = day_of_year - 1;
    let month_start = |before: u16| if before >= DAYS_BEFORE_MONTH[2] { before + leap } else { before };

    let month = DAYS_BEFORE_MONTH.partition_point(|&before| month_start(before) <= zero_based);
    let day = zero_based - month_start(DAYS_BEFORE_MONTH[month - 1]) + 1;
    (month as u8, day as u8)
}

pub(crate) fn from_ordinal(n: i64) -> (i64, u8, u8) {
    let (year, day_of_year) = ordinal_to_ordinal_date(i128::from(n));
    let (month, day) = ordinal_date_to_calendar(year, day_of_year);
    (year, month, day)
}

/// Day of week as an offset from Monday (0) to Sunday (6).
pub(crate) const fn weekday_offset(n: i64) -> u8 {
    // Ordinal 0, January 1 of year 1, is a Monday.
    n.rem_euclid(7) as u8
}

/// ISO 8601 (year, week) of the week containing ordinal `n`.
pub(crate) const fn iso_week(n: i64) -> (i64, u8) {
    const THURSDAY: i128 = 3;
    // May land up to three days outside the i64 range.
    let thursday = n as i128 + (THURSDAY - weekday_offset(n) as i128);
    let (year, day_of_year) = ordinal_to_ordinal_date(thursday);
    (year, ((day_of_year - 1) / 7 + 1) as u8)
}

/// Carries `lo` into `hi` so that `lo` lands in `lower..lower + base`.
pub(crate) const fn normalize(hi: i128, lo: i128, base: i128, lower: i128) -> (i128, i128) {
    let shifted = lo - lower;
    (hi + shifted.div_euclid(base), shifted.rem_euclid(base) + lower)
}
