use std::fmt;
use std::str::FromStr;

use crate::calendar::normalize;
use crate::consts::{NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MINUTE, NANOS_PER_SECOND, RFC3339_TIME};
use crate::format::{DisplayLayout, Fields, parse_fields, parse_strict_time};
use crate::layout::LayoutKind;
use crate::prelude::*;
use crate::{Error, RangeError};

/// A time of day with nanosecond precision, independent of any date or zone.
///
/// Stored as nanoseconds since midnight, always in `0..NANOS_PER_DAY`.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Into)]
pub struct TimeOfDay {
    nanos: i64,
}

impl TimeOfDay {
    /// Midnight, the start of the day.
    pub const MIDNIGHT: Self = Self { nanos: 0 };

    /// Creates a time of day from clock fields.
    ///
    /// # Errors
    /// Returns a [`RangeError`] naming the first field outside its range.
    pub fn new(hour: i64, minute: i64, second: i64, nanosecond: i64) -> Result<Self, RangeError> {
        if !(0..24).contains(&hour) {
            return Err(RangeError::Hour(hour));
        }
        if !(0..60).contains(&minute) {
            return Err(RangeError::Minute(minute));
        }
        if !(0..60).contains(&second) {
            return Err(RangeError::Second(second));
        }
        if !(0..NANOS_PER_SECOND).contains(&nanosecond) {
            return Err(RangeError::Nanosecond(nanosecond));
        }
        Ok(Self {
            nanos: hour * NANOS_PER_HOUR + minute * NANOS_PER_MINUTE + second * NANOS_PER_SECOND + nanosecond,
        })
    }

    /// Like [`TimeOfDay::new`] for fields already known to be valid.
    ///
    /// # Panics
    /// Panics if any field is out of range.
    pub fn must_new(hour: i64, minute: i64, second: i64, nanosecond: i64) -> Self {
        match Self::new(hour, minute, second, nanosecond) {
            Ok(time) => time,
            Err(err) => panic!("civil_time: TimeOfDay::new: {err}"),
        }
    }

    /// Creates a time of day from nanoseconds since midnight.
    ///
    /// # Errors
    /// Returns [`RangeError::Nanosecond`] if `nanos` is outside a day.
    pub const fn from_nanoseconds(nanos: i64) -> Result<Self, RangeError> {
        if nanos < 0 || nanos >= NANOS_PER_DAY {
            return Err(RangeError::Nanosecond(nanos));
        }
        Ok(Self { nanos })
    }

    /// Nanoseconds since midnight.
    pub const fn nanoseconds(self) -> i64 {
        self.nanos
    }

    /// Returns (hour, minute, second, nanosecond).
    pub const fn clock(self) -> (u8, u8, u8, u32) {
        (self.hour(), self.minute(), self.second(), self.nanosecond())
    }

    pub const fn hour(self) -> u8 {
        (self.nanos / NANOS_PER_HOUR) as u8
    }

    pub const fn minute(self) -> u8 {
        (self.nanos % NANOS_PER_HOUR / NANOS_PER_MINUTE) as u8
    }

    pub const fn second(self) -> u8 {
        (self.nanos % NANOS_PER_MINUTE / NANOS_PER_SECOND) as u8
    }

    pub const fn nanosecond(self) -> u32 {
        (self.nanos % NANOS_PER_SECOND) as u32
    }

    pub const fn is_zero(self) -> bool {
        self.nanos == 0
    }

    /// Adds a span of clock units. Returns the whole days carried out of the
    /// day, negative when the result wrapped backwards past midnight.
    #[must_use]
    pub const fn add(self, hours: i64, minutes: i64, seconds: i64, nanoseconds: i64) -> (i64, Self) {
        self.carry(
            hours as i128 * NANOS_PER_HOUR as i128
                + minutes as i128 * NANOS_PER_MINUTE as i128
                + seconds as i128 * NANOS_PER_SECOND as i128
                + nanoseconds as i128,
        )
    }

    /// Adds a signed span of nanoseconds. Returns the whole days carried.
    #[must_use]
    pub const fn add_duration(self, nanoseconds: i64) -> (i64, Self) {
        self.carry(nanoseconds as i128)
    }

    // Four i64 spans scaled to nanoseconds still fit i128, and the carried
    // days fit i64.
    const fn carry(self, span: i128) -> (i64, Self) {
        let (days, nanos) = normalize(0, self.nanos as i128 + span, NANOS_PER_DAY as i128, 0);
        (days as i64, Self { nanos: nanos as i64 })
    }

    /// Nanoseconds from `other` to `self`. No wrapping at midnight.
    #[allow(clippy::should_implement_trait)]
    pub const fn sub(self, other: Self) -> i64 {
        self.nanos - other.nanos
    }

    fn fields(self) -> Fields {
        Fields {
            hour: i64::from(self.hour()),
            minute: i64::from(self.minute()),
            second: i64::from(self.second()),
            nanosecond: i64::from(self.nanosecond()),
            ..Fields::default()
        }
    }

    /// Renders the time with `layout`. See [`crate::layout`] for the tokens.
    pub fn format(self, layout: &str) -> String {
        DisplayLayout {
            layout,
            kind: LayoutKind::Time,
            fields: self.fields(),
        }
        .to_string()
    }

    /// Parses `value` against `layout`.
    ///
    /// # Errors
    /// Returns [`Error::Parse`] when `value` does not match the layout and
    /// [`Error::Range`] when a scanned field is out of range.
    pub fn parse(layout: &str, value: &str) -> Result<Self, Error> {
        let fields = parse_fields(layout, value, LayoutKind::Time).inspect_err(|err| {
            debug_log!("time parse failed: {err}");
        })?;
        Ok(Self::new(fields.hour, fields.minute, fields.second, fields.nanosecond)?)
    }

    /// Parses the fixed-width `HH:mm:ss` form with an optional fraction of one
    /// to nine digits, and nothing else.
    ///
    /// # Errors
    /// Returns [`Error::Parse`] on any deviation from the shape and
    /// [`Error::Range`] when a field is out of range.
    pub fn parse_strict(value: &str) -> Result<Self, Error> {
        let fields = parse_strict_time(value).inspect_err(|err| {
            debug_log!("strict time parse failed: {err}");
        })?;
        Ok(Self::new(fields.hour, fields.minute, fields.second, fields.nanosecond)?)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = DisplayLayout {
            layout: RFC3339_TIME,
            kind:   LayoutKind::Time,
            fields: self.fields(),
        };
        write!(f, "{layout}")
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, minute, second, nanosecond) = self.clock();
        write!(f, "TimeOfDay::must_new({hour}, {minute}, {second}, {nanosecond})")
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(RFC3339_TIME, s)
    }
}

impl serde::Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse_strict(&s).map_err(serde::de::Error::custom)
    }
}
