//! Fixture builders shared by the unit tests.

use crate::{Date, TimeOfDay};

pub fn date(year: i64, month: i64, day: i64) -> Date {
    Date::new(year, month, day).expect("invalid test date")
}

pub fn time(hour: i64, minute: i64, second: i64, nanosecond: i64) -> TimeOfDay {
    TimeOfDay::new(hour, minute, second, nanosecond).expect("invalid test time")
}
