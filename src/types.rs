use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Day of the week, Monday first as in ISO 8601.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Weekday for an offset from Monday, taken modulo 7.
    pub const fn from_monday_offset(offset: u8) -> Self {
        Self::ALL[(offset % 7) as usize]
    }

    /// ISO 8601 day number: Monday is 1, Sunday is 7.
    pub const fn number_from_monday(self) -> u8 {
        self as u8 + 1
    }

    /// Day number counting Sunday as 0.
    pub const fn number_from_sunday(self) -> u8 {
        (self as u8 + 1) % 7
    }

    pub const fn succ(self) -> Self {
        Self::from_monday_offset(self as u8 + 1)
    }

    pub const fn pred(self) -> Self {
        Self::from_monday_offset(self as u8 + 6)
    }
}

/// Half of a 12-hour clock day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Meridiem {
    #[display(fmt = "AM")]
    Am,
    #[display(fmt = "PM")]
    Pm,
}

impl Meridiem {
    pub const fn from_hour(hour: u8) -> Self {
        if hour < 12 { Self::Am } else { Self::Pm }
    }

    /// Converts a 12-hour clock hour into a 24-hour clock hour.
    /// Values outside `1..=12` pass through for the validator to reject.
    pub const fn to_24_hour(self, hour: i64) -> i64 {
        match self {
            Self::Am if hour == 12 => 0,
            Self::Pm if hour < 12 => hour + 12,
            _ => hour,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Hour on a 12-hour clock dial for a 24-hour clock hour.
pub const fn hour12(hour: u8) -> u8 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}
