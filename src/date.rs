use std::fmt;
use std::str::FromStr;

use crate::calendar::{
    days_before_month, days_in_month, days_in_year, from_ordinal, iso_week, normalize, ordinal_before_year,
    ordinal_date_to_ordinal, ordinal_to_ordinal_date, to_ordinal, weekday_offset,
};
use crate::consts::{GREGORIAN_CYCLE, JANUARY, MAX_STRICT_YEAR, MIN_STRICT_YEAR, MONTHS_PER_YEAR, RFC3339_DATE};
use crate::format::{DisplayLayout, Fields, parse_fields, parse_strict_date};
use crate::layout::LayoutKind;
use crate::prelude::*;
use crate::types::Weekday;
use crate::{Error, RangeError};

/// A civil date in the proleptic Gregorian calendar.
///
/// Stored as an ordinal day count where 0 is January 1 of year 1. Every `i64`
/// is a valid date, so year 0 and negative years are supported and the type
/// converts losslessly to and from `i64`.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
pub struct Date {
    ordinal: i64,
}

impl Date {
    /// The earliest representable date.
    pub const MIN: Self = Self::from_ordinal(i64::MIN);
    /// The latest representable date.
    pub const MAX: Self = Self::from_ordinal(i64::MAX);

    /// Creates a date from calendar fields.
    ///
    /// # Errors
    /// Returns a [`RangeError`] if `month` is outside `1..=12`, `day` is
    /// outside the days of that month, or the date lies past [`Date::MIN`] or
    /// [`Date::MAX`].
    pub fn new(year: i64, month: i64, day: i64) -> Result<Self, RangeError> {
        if !(1..=MONTHS_PER_YEAR).contains(&month) {
            return Err(RangeError::Month(month));
        }
        let max = days_in_month(year, month as u8);
        if !(1..=i64::from(max)).contains(&day) {
            return Err(RangeError::Day { day, max });
        }
        let ordinal = to_ordinal(year, month as u8, day as u8);
        i64::try_from(ordinal).map(Self::from_ordinal).map_err(|_| RangeError::OrdinalYear(year))
    }

    /// Like [`Date::new`] for fields already known to be valid.
    ///
    /// # Panics
    /// Panics if the fields are out of range.
    pub fn must_new(year: i64, month: i64, day: i64) -> Self {
        match Self::new(year, month, day) {
            Ok(date) => date,
            Err(err) => panic!("civil_time: Date::new: {err}"),
        }
    }

    /// Creates a date from a year and a day of that year starting at 1.
    ///
    /// # Errors
    /// Returns [`RangeError::DayOfYear`] if `day_of_year` is outside the year
    /// and [`RangeError::OrdinalYear`] past the ends of the ordinal range.
    pub fn from_ordinal_date(year: i64, day_of_year: i64) -> Result<Self, RangeError> {
        let max = days_in_year(year);
        if !(1..=i64::from(max)).contains(&day_of_year) {
            return Err(RangeError::DayOfYear { day_of_year, max });
        }
        let ordinal = ordinal_date_to_ordinal(year, day_of_year);
        i64::try_from(ordinal).map(Self::from_ordinal).map_err(|_| RangeError::OrdinalYear(year))
    }

    /// Like [`Date::from_ordinal_date`] for fields already known to be valid.
    ///
    /// # Panics
    /// Panics if `day_of_year` is out of range.
    pub fn must_from_ordinal_date(year: i64, day_of_year: i64) -> Self {
        match Self::from_ordinal_date(year, day_of_year) {
            Ok(date) => date,
            Err(err) => panic!("civil_time: Date::from_ordinal_date: {err}"),
        }
    }

    pub const fn from_ordinal(ordinal: i64) -> Self {
        Self { ordinal }
    }

    /// Days since January 1 of year 1.
    pub const fn ordinal(self) -> i64 {
        self.ordinal
    }

    /// Reports whether this is January 1 of year 1, the default date.
    pub const fn is_zero(self) -> bool {
        self.ordinal == 0
    }

    /// Returns (year, month, day).
    pub fn date(self) -> (i64, u8, u8) {
        from_ordinal(self.ordinal)
    }

    pub const fn year(self) -> i64 {
        ordinal_to_ordinal_date(self.ordinal as i128).0
    }

    pub fn month(self) -> u8 {
        self.date().1
    }

    pub fn day(self) -> u8 {
        self.date().2
    }

    /// Quarter of the year, 1 through 4.
    pub fn quarter(self) -> u8 {
        (self.month() - 1) / 3 + 1
    }

    /// Day of the year, starting at 1.
    pub const fn day_of_year(self) -> u16 {
        ordinal_to_ordinal_date(self.ordinal as i128).1
    }

    /// Returns (year, day of year).
    pub const fn ordinal_date(self) -> (i64, u16) {
        ordinal_to_ordinal_date(self.ordinal as i128)
    }

    pub const fn weekday(self) -> Weekday {
        Weekday::from_monday_offset(weekday_offset(self.ordinal))
    }

    /// ISO 8601 (year, week). Week 1 is the week holding the year's first
    /// Thursday, so the ISO year may differ from [`Date::year`] in early
    /// January and late December.
    pub const fn iso_week(self) -> (i64, u8) {
        iso_week(self.ordinal)
    }

    /// Adds years, months and days, in that order of significance.
    ///
    /// Months are normalized into the year first. A day past the end of the
    /// resulting month rolls into the next one, so October 31 plus one month
    /// is December 1 and February 29 plus one year is March 1. Like
    /// [`Date::add_days`], results past either end of the range wrap.
    #[must_use]
    pub fn add(self, years: i64, months: i64, days: i64) -> Self {
        let (year, month, day) = self.date();
        let (year, month) = normalize(
            i128::from(year) + i128::from(years),
            i128::from(month) + i128::from(months),
            i128::from(MONTHS_PER_YEAR),
            i128::from(JANUARY),
        );
        // Leap years repeat every 400 years.
        let cycle_year = year.rem_euclid(i128::from(GREGORIAN_CYCLE)) as i64;
        let day_of_year = i128::from(days_before_month(cycle_year, month as u8)) + i128::from(day) + i128::from(days);
        Self::from_ordinal((ordinal_before_year(year) + day_of_year) as i64)
    }

    /// Shifts the date by whole days, wrapping at the ends of the range.
    #[must_use]
    pub const fn add_days(self, days: i64) -> Self {
        Self::from_ordinal(self.ordinal.wrapping_add(days))
    }

    /// Days from `other` to `self`, saturated to the `i64` range.
    #[allow(clippy::should_implement_trait)]
    pub const fn sub(self, other: Self) -> i64 {
        self.ordinal.saturating_sub(other.ordinal)
    }

    fn fields(self) -> Fields {
        let (year, month, day) = self.date();
        Fields {
            year,
            month: i64::from(month),
            day: i64::from(day),
            ..Fields::default()
        }
    }

    /// Renders the date with `layout`. See [`crate::layout`] for the tokens.
    pub fn format(self, layout: &str) -> String {
        DisplayLayout {
            layout,
            kind: LayoutKind::Date,
            fields: self.fields(),
        }
        .to_string()
    }

    /// Parses `value` against `layout`.
    ///
    /// # Errors
    /// Returns [`Error::Parse`] when `value` does not match the layout and
    /// [`Error::Range`] when the scanned fields do not name a real date.
    pub fn parse(layout: &str, value: &str) -> Result<Self, Error> {
        let fields = parse_fields(layout, value, LayoutKind::Date).inspect_err(|err| {
            debug_log!("date parse failed: {err}");
        })?;
        Ok(Self::new(fields.year, fields.month, fields.day)?)
    }

    /// Parses the fixed-width `YYYY-MM-DD` form and nothing else.
    ///
    /// # Errors
    /// Returns [`Error::Parse`] on any deviation from the shape and
    /// [`Error::Range`] when the fields do not name a real date.
    pub fn parse_strict(value: &str) -> Result<Self, Error> {
        let fields = parse_strict_date(value).inspect_err(|err| {
            debug_log!("strict date parse failed: {err}");
        })?;
        Ok(Self::new(fields.year, fields.month, fields.day)?)
    }

    /// Renders the fixed-width `YYYY-MM-DD` form.
    ///
    /// # Errors
    /// Returns [`RangeError::Year`] for years that do not fit four digits.
    pub fn to_strict_string(self) -> Result<String, RangeError> {
        let year = self.year();
        if !(MIN_STRICT_YEAR..=MAX_STRICT_YEAR).contains(&year) {
            return Err(RangeError::Year(year));
        }
        Ok(self.to_string())
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = DisplayLayout {
            layout: RFC3339_DATE,
            kind:   LayoutKind::Date,
            fields: self.fields(),
        };
        write!(f, "{layout}")
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.date();
        write!(f, "Date::must_new({year}, {month}, {day})")
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(RFC3339_DATE, s)
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let s = self.to_strict_string().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&s)
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse_strict(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseError;
    use crate::test_utils::date;

    #[test]
    fn test_new_validates_fields() {
        struct TestCase {
            year:     i64,
            month:    i64,
            day:      i64,
            expected: Result<(i64, u8, u8), RangeError>,
        }

        let cases = [
            TestCase {
                year:     2006,
                month:    1,
                day:      2,
                expected: Ok((2006, 1, 2)),
            },
            TestCase {
                year:     0,
                month:    2,
                day:      29,
                expected: Ok((0, 2, 29)),
            },
            TestCase {
                year:     -1,
                month:    2,
                day:      29,
                expected: Err(RangeError::Day { day: 29, max: 28 }),
            },
            TestCase {
                year:     2006,
                month:    0,
                day:      1,
                expected: Err(RangeError::Month(0)),
            },
            TestCase {
                year:     2006,
                month:    13,
                day:      1,
                expected: Err(RangeError::Month(13)),
            },
            TestCase {
                year:     2006,
                month:    4,
                day:      31,
                expected: Err(RangeError::Day { day: 31, max: 30 }),
            },
            TestCase {
                year:     2006,
                month:    4,
                day:      0,
                expected: Err(RangeError::Day { day: 0, max: 30 }),
            },
            TestCase {
                year:     25_252_734_927_766_555,
                month:    7,
                day:      28,
                expected: Ok((25_252_734_927_766_555, 7, 28)),
            },
            TestCase {
                year:     25_252_734_927_766_555,
                month:    7,
                day:      29,
                expected: Err(RangeError::OrdinalYear(25_252_734_927_766_555)),
            },
            TestCase {
                year:     -25_252_734_927_766_554,
                month:    6,
                day:      7,
                expected: Ok((-25_252_734_927_766_554, 6, 7)),
            },
            TestCase {
                year:     -25_252_734_927_766_554,
                month:    6,
                day:      6,
                expected: Err(RangeError::OrdinalYear(-25_252_734_927_766_554)),
            },
            TestCase {
                year:     i64::MAX / 2,
                month:    1,
                day:      1,
                expected: Err(RangeError::OrdinalYear(i64::MAX / 2)),
            },
            TestCase {
                year:     i64::MIN,
                month:    12,
                day:      31,
                expected: Err(RangeError::OrdinalYear(i64::MIN)),
            },
        ];

        for case in &cases {
            let result = Date::new(case.year, case.month, case.day).map(Date::date);
            assert_eq!(result, case.expected, "{}-{}-{}", case.year, case.month, case.day);
        }
    }

    #[test]
    #[should_panic(expected = "civil_time: Date::new: month is out of range [1,12]")]
    fn test_must_new_panics() {
        let _ = Date::must_new(2006, 13, 1);
    }

    #[test]
    fn test_default_is_first_day_of_year_one() {
        let d = Date::default();
        assert!(d.is_zero());
        assert_eq!(d.date(), (1, 1, 1));
        assert_eq!(d.weekday(), Weekday::Monday);
        assert_eq!(date(0, 12, 31).ordinal(), -1);
    }

    #[test]
    fn test_ordinal_conversions() {
        let d: Date = 732_312.into();
        assert_eq!(d, date(2006, 1, 2));
        let n: i64 = d.into();
        assert_eq!(n, 732_312);
        assert_eq!(Date::from_ordinal(n).ordinal(), n);
    }

    #[test]
    fn test_from_ordinal_date() {
        assert_eq!(Date::from_ordinal_date(2000, 60), Ok(date(2000, 2, 29)));
        assert_eq!(Date::from_ordinal_date(2001, 60), Ok(date(2001, 3, 1)));
        assert_eq!(Date::from_ordinal_date(2000, 366), Ok(date(2000, 12, 31)));
        assert_eq!(
            Date::from_ordinal_date(2001, 366),
            Err(RangeError::DayOfYear {
                day_of_year: 366,
                max:         365,
            })
        );
        assert_eq!(
            Date::from_ordinal_date(2001, 0),
            Err(RangeError::DayOfYear {
                day_of_year: 0,
                max:         365,
            })
        );
        assert_eq!(Date::must_from_ordinal_date(-4, 366).ordinal_date(), (-4, 366));
    }

    #[test]
    fn test_accessors() {
        let d = date(2006, 1, 2);
        assert_eq!(d.year(), 2006);
        assert_eq!(d.month(), 1);
        assert_eq!(d.day(), 2);
        assert_eq!(d.day_of_year(), 2);
        assert_eq!(d.weekday(), Weekday::Monday);

        let quarters = [(1, 1), (3, 1), (4, 2), (6, 2), (7, 3), (9, 3), (10, 4), (12, 4)];
        for (month, quarter) in quarters {
            assert_eq!(date(2020, month, 1).quarter(), quarter, "month {month}");
        }
    }

    #[test]
    fn test_weekday_spans_eras() {
        assert_eq!(date(1970, 1, 1).weekday(), Weekday::Thursday);
        assert_eq!(date(2000, 1, 1).weekday(), Weekday::Saturday);
        assert_eq!(date(0, 12, 31).weekday(), Weekday::Sunday);
        assert_eq!(date(-1, 1, 1).weekday(), Weekday::Friday);
    }

    #[test]
    fn test_iso_week() {
        struct TestCase {
            date:     Date,
            expected: (i64, u8),
        }

        let cases = [
            TestCase {
                date:     date(1981, 1, 1),
                expected: (1981, 1),
            },
            TestCase {
                date:     date(1982, 1, 1),
                expected: (1981, 53),
            },
            TestCase {
                date:     date(1983, 1, 1),
                expected: (1982, 52),
            },
            TestCase {
                date:     date(1984, 12, 31),
                expected: (1985, 1),
            },
            TestCase {
                date:     date(2004, 12, 31),
                expected: (2004, 53),
            },
            TestCase {
                date:     date(2008, 12, 29),
                expected: (2009, 1),
            },
            TestCase {
                date:     date(2010, 1, 3),
                expected: (2009, 53),
            },
            TestCase {
                date:     date(2040, 12, 31),
                expected: (2041, 1),
            },
        ];

        for case in &cases {
            assert_eq!(case.date.iso_week(), case.expected, "{}", case.date);
        }
    }

    #[test]
    fn test_iso_week_contains_thursday() {
        let mut d = date(1950, 1, 1);
        let end = date(2100, 1, 1);
        while d < end {
            let (year, week) = d.iso_week();
            let monday = d.add_days(-i64::from(d.weekday().number_from_monday() - 1));
            let thursday = monday.add_days(3);
            assert_eq!(thursday.year(), year, "{d}");
            assert_eq!(i64::from(week), (i64::from(thursday.day_of_year()) - 1) / 7 + 1, "{d}");
            d = d.add_days(1);
        }
    }

    #[test]
    fn test_iso_week_january_fourth() {
        for year in 1950..2100 {
            assert_eq!(date(year, 1, 4).iso_week(), (year, 1), "{year}");
        }
    }

    #[test]
    fn test_range_ends() {
        struct TestCase {
            date:     Date,
            fields:   (i64, u8, u8),
            ordinal:  (i64, u16),
            weekday:  Weekday,
            iso_week: (i64, u8),
        }

        let cases = [
            TestCase {
                date:     Date::MAX,
                fields:   (25_252_734_927_766_555, 7, 28),
                ordinal:  (25_252_734_927_766_555, 209),
                weekday:  Weekday::Monday,
                iso_week: (25_252_734_927_766_555, 31),
            },
            TestCase {
                date:     Date::MIN,
                fields:   (-25_252_734_927_766_554, 6, 7),
                ordinal:  (-25_252_734_927_766_554, 158),
                weekday:  Weekday::Sunday,
                iso_week: (-25_252_734_927_766_554, 23),
            },
        ];

        for case in &cases {
            let (year, month, day) = case.fields;
            assert_eq!(case.date.date(), case.fields, "{}", case.date.ordinal());
            assert_eq!(case.date.year(), year);
            assert_eq!(case.date.ordinal_date(), case.ordinal);
            assert_eq!(case.date.weekday(), case.weekday);
            assert_eq!(case.date.iso_week(), case.iso_week);
            assert_eq!(case.date.add(0, 0, 0), case.date);
            assert_eq!(Date::new(year, i64::from(month), i64::from(day)), Ok(case.date));
            assert_eq!(Date::from_ordinal_date(year, i64::from(case.ordinal.1)), Ok(case.date));
        }

        assert_eq!(
            Date::from_ordinal_date(25_252_734_927_766_555, 210),
            Err(RangeError::OrdinalYear(25_252_734_927_766_555))
        );
    }

    #[test]
    fn test_add_wraps_at_range_ends() {
        assert_eq!(Date::MAX.add(0, 0, 1), Date::MIN);
        assert_eq!(Date::MIN.add(0, 0, -1), Date::MAX);
        assert_eq!(Date::MAX.add(0, 0, 1), Date::MAX.add_days(1));
        assert_eq!(Date::MAX.add(0, 1, -31), Date::MAX);
        assert_eq!(Date::MIN.add(1, 0, 0), Date::MIN.add_days(365));
        assert_eq!(date(2000, 1, 1).add(0, 0, i64::MAX), date(2000, 1, 1).add_days(i64::MAX));
    }

    #[test]
    fn test_add_normalizes_to_same_date() {
        let start = date(2011, 11, 18);
        let want = date(2016, 3, 19);
        let deltas: [(i64, i64, i64); 6] = [(4, 4, 1), (3, 16, 1), (3, 15, 30), (5, -6, -60), (5, -5, -91), (6, -17, -91)];

        for (years, months, days) in deltas {
            assert_eq!(start.add(years, months, days), want, "add({years}, {months}, {days})");
        }
    }

    #[test]
    fn test_add_rolls_invalid_days_forward() {
        struct TestCase {
            start:    Date,
            years:    i64,
            months:   i64,
            expected: Date,
        }

        let cases = [
            TestCase {
                start:    date(2000, 2, 29),
                years:    1,
                months:   0,
                expected: date(2001, 3, 1),
            },
            TestCase {
                start:    date(2000, 2, 29),
                years:    -1,
                months:   0,
                expected: date(1999, 3, 1),
            },
            TestCase {
                start:    date(2000, 2, 29),
                years:    4,
                months:   0,
                expected: date(2004, 2, 29),
            },
            TestCase {
                start:    date(2011, 10, 31),
                years:    0,
                months:   1,
                expected: date(2011, 12, 1),
            },
            TestCase {
                start:    date(2011, 10, 31),
                years:    0,
                months:   -1,
                expected: date(2011, 10, 1),
            },
            TestCase {
                start:    date(1, 1, 1),
                years:    0,
                months:   -1,
                expected: date(0, 12, 1),
            },
        ];

        for case in &cases {
            assert_eq!(
                case.start.add(case.years, case.months, 0),
                case.expected,
                "{} + {}y {}m",
                case.start,
                case.years,
                case.months
            );
        }
    }

    #[test]
    fn test_add_days_crosses_years() {
        assert_eq!(date(2000, 12, 31).add_days(1), date(2001, 1, 1));
        assert_eq!(date(1, 1, 1).add_days(-1), date(0, 12, 31));
        assert_eq!(date(2000, 3, 1).add_days(-1), date(2000, 2, 29));
    }

    #[test]
    fn test_sub() {
        assert_eq!(date(2290, 1, 1).sub(date(2000, 1, 1)), 290 * 365 + 71);
        assert_eq!(date(2000, 1, 1).sub(date(2290, 1, 1)), -(290 * 365 + 71));
        assert_eq!(date(2006, 1, 2).sub(date(2006, 1, 2)), 0);
        assert_eq!(Date::MAX.sub(Date::MIN), i64::MAX);
        assert_eq!(Date::MIN.sub(Date::MAX), i64::MIN);
        assert_eq!(Date::default().sub(Date::MAX), -i64::MAX);
    }

    #[test]
    fn test_ordering() {
        assert!(date(-1, 12, 31) < date(0, 1, 1));
        assert!(date(2006, 1, 2) < date(2006, 1, 3));
        assert!(Date::MIN < Date::default());
        assert!(Date::default() < Date::MAX);
    }

    #[test]
    fn test_display() {
        struct TestCase {
            date:     Date,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                date:     date(2006, 1, 2),
                expected: "2006-01-02",
            },
            TestCase {
                date:     date(0, 1, 2),
                expected: "0000-01-02",
            },
            TestCase {
                date:     date(-2000, 1, 2),
                expected: "-2000-01-02",
            },
            TestCase {
                date:     date(10001, 1, 2),
                expected: "10001-01-02",
            },
            TestCase {
                date:     date(-12345, 2, 4),
                expected: "-12345-02-04",
            },
        ];

        for case in &cases {
            assert_eq!(case.date.to_string(), case.expected);
        }
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", date(2006, 1, 2)), "Date::must_new(2006, 1, 2)");
        assert_eq!(format!("{:?}", date(-5, 12, 31)), "Date::must_new(-5, 12, 31)");
    }

    #[test]
    fn test_format_layouts() {
        let d = date(2006, 1, 2);
        let cases = [
            ("YYYY-MM-DD", "2006-01-02"),
            ("MMMM DD YYYY", "January 02 2006"),
            ("MMMM D, YYYY", "January 2, 2006"),
            ("MMM DD YYYY", "Jan 02 2006"),
            ("MMM D YYYY", "Jan 2 2006"),
            ("DD MMM YYYY", "02 Jan 2006"),
            ("DD-MMM-YY", "02-Jan-06"),
            ("YYYY年M月D日", "2006年1月2日"),
            ("no tokens here", "no tokens here"),
        ];

        for (layout, expected) in cases {
            assert_eq!(d.format(layout), expected, "{layout}");
        }
    }

    #[test]
    fn test_parse_layouts() {
        struct TestCase {
            layout:   &'static str,
            value:    &'static str,
            expected: Date,
        }

        let cases = [
            TestCase {
                layout:   "YYYY-MM-DD",
                value:    "2010-02-04",
                expected: date(2010, 2, 4),
            },
            TestCase {
                layout:   "MMMM DD YYYY",
                value:    "February 04 2010",
                expected: date(2010, 2, 4),
            },
            TestCase {
                layout:   "MMMM D, YYYY",
                value:    "February 4, 2010",
                expected: date(2010, 2, 4),
            },
            TestCase {
                layout:   "MMM DD YYYY",
                value:    "Feb 04 2010",
                expected: date(2010, 2, 4),
            },
            TestCase {
                layout:   "MMM D YYYY",
                value:    "FEB 4 2010",
                expected: date(2010, 2, 4),
            },
            TestCase {
                layout:   "DD MMM YYYY",
                value:    "04 feb 2010",
                expected: date(2010, 2, 4),
            },
            TestCase {
                layout:   "DD-MMM-YY",
                value:    "04-Feb-10",
                expected: date(2010, 2, 4),
            },
            TestCase {
                layout:   "DD-MMM-YY",
                value:    "04-Feb-69",
                expected: date(1969, 2, 4),
            },
            TestCase {
                layout:   "YYYY年M月D日",
                value:    "2010年2月4日",
                expected: date(2010, 2, 4),
            },
            TestCase {
                layout:   "YYYY-MM-DD",
                value:    "-2000-01-02",
                expected: date(-2000, 1, 2),
            },
            TestCase {
                layout:   "YYYY-MM-DD",
                value:    "2006-01-02 00:00:00",
                expected: date(2006, 1, 2),
            },
        ];

        for case in &cases {
            let parsed = Date::parse(case.layout, case.value).expect("failed to parse date");
            assert_eq!(parsed, case.expected, "{} as {}", case.value, case.layout);
        }
    }

    #[test]
    fn test_format_parse_symmetry() {
        let layouts = [
            "YYYY-MM-DD",
            "MMMM DD YYYY",
            "MMMM D, YYYY",
            "MMM DD YYYY",
            "MMM D YYYY",
            "DD MMM YYYY",
            "YYYY年M月D日",
            "M/D/YYYY",
        ];
        let dates = [date(2006, 1, 2), date(2000, 2, 29), date(1999, 12, 31), date(0, 1, 1), date(9999, 12, 31)];

        for layout in layouts {
            for d in dates {
                let text = d.format(layout);
                assert_eq!(Date::parse(layout, &text), Ok(d), "{text} as {layout}");
            }
        }
    }

    #[test]
    fn test_parse_errors() {
        struct TestCase {
            layout:   &'static str,
            value:    &'static str,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                layout:   "YYYY-MM-DD",
                value:    "12022-10-25",
                expected: r#"parsing "12022-10-25" as "YYYY-MM-DD": cannot parse "2-10-25" as "-""#,
            },
            TestCase {
                layout:   "YY-M-DD",
                value:    "22-a0-25",
                expected: r#"parsing "22-a0-25" as "YY-M-DD": cannot parse "a0-25" as "M""#,
            },
            TestCase {
                layout:   "D MMM YY",
                value:    "4 --- 00",
                expected: r#"parsing "4 --- 00" as "D MMM YY": cannot parse "--- 00" as "MMM""#,
            },
            TestCase {
                layout:   "YYYY-MM-DD",
                value:    "2006-04-31",
                expected: "day is out of range [1,30]",
            },
            TestCase {
                layout:   "YYYY-MM-DD",
                value:    "2006-13-01",
                expected: "month is out of range [1,12]",
            },
        ];

        for case in &cases {
            let err = Date::parse(case.layout, case.value).expect_err("expected date parse to fail");
            assert_eq!(err.to_string(), case.expected);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("2006-01-02".parse::<Date>(), Ok(date(2006, 1, 2)));
        assert!(matches!("2006/01/02".parse::<Date>(), Err(Error::Parse(_))));
    }

    #[test]
    fn test_strict() {
        assert_eq!(Date::parse_strict("2006-01-02"), Ok(date(2006, 1, 2)));
        assert_eq!(
            Date::parse_strict("-1-01-02"),
            Err(Error::Parse(ParseError::new(RFC3339_DATE, "-1-01-02")))
        );
        assert_eq!(Date::parse_strict("2006-02-30"), Err(Error::Range(RangeError::Day { day: 30, max: 28 })));

        assert_eq!(date(9999, 12, 31).to_strict_string(), Ok("9999-12-31".to_owned()));
        assert_eq!(date(0, 1, 1).to_strict_string(), Ok("0000-01-01".to_owned()));
        assert_eq!(date(10000, 1, 1).to_strict_string(), Err(RangeError::Year(10000)));
        assert_eq!(date(-1, 1, 1).to_strict_string(), Err(RangeError::Year(-1)));
    }

    #[test]
    fn test_serde() {
        let d = date(2006, 1, 2);
        let json = serde_json::to_string(&d).expect("failed to serialize date");
        assert_eq!(json, r#""2006-01-02""#);
        let parsed: Date = serde_json::from_str(&json).expect("failed to deserialize date");
        assert_eq!(parsed, d);
    }

    #[test]
    fn test_serde_validation() {
        assert!(serde_json::to_string(&date(10000, 1, 1)).is_err());
        assert!(serde_json::to_string(&date(-1, 1, 1)).is_err());

        for json in [r#""""#, r#""-1-01-02""#, r#""10000-01-02""#, r#""2006+01+02""#, r#""2006-02-30""#, "20060102"] {
            let result: Result<Date, _> = serde_json::from_str(json);
            assert!(result.is_err(), "{json} should be rejected");
        }
    }
}
