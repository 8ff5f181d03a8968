//! Civil dates and times of day as compact integer values.
//!
//! A [`Date`] is a day count in the proleptic Gregorian calendar and a
//! [`TimeOfDay`] is a nanosecond count since midnight. Both convert to and
//! from calendar fields, support carrying arithmetic, and format and parse
//! through a small layout language (see [`layout`]).
//!
//! ```
//! use civil_time::{Date, TimeOfDay};
//!
//! let date = Date::must_new(2011, 10, 31).add(0, 1, 0);
//! assert_eq!(date.to_string(), "2011-12-01");
//! assert_eq!(date.format("MMMM D, YYYY"), "December 1, 2011");
//!
//! let (days, time) = TimeOfDay::must_new(23, 0, 0, 0).add(2, 0, 0, 0);
//! assert_eq!((days, time.to_string()), (1, "01:00:00".to_owned()));
//! ```

macro_rules! debug_log {
    ($($args:tt)+) => {{
        #[cfg(feature = "log")]
        log::debug!($($args)+);
        #[cfg(not(feature = "log"))]
        let _ = format_args!($($args)+);
    }};
}

pub mod calendar;
#[cfg(feature = "chrono")]
mod chrono;
mod consts;
mod date;
mod error;
mod format;
pub mod layout;
pub mod prelude;
pub mod sql;
#[cfg(test)]
mod test_utils;
mod time;
mod types;

pub use calendar::{days_in_month, days_in_year, is_leap_year};
pub use consts::*;
pub use date::Date;
pub use error::{Error, ParseError, RangeError};
pub use layout::{LayoutKind, Piece, Token, tokenize};
pub use sql::{DbValue, NullDate, NullTimeOfDay, Scan, ToDbValue};
pub use time::TimeOfDay;
pub use types::{Meridiem, Weekday, hour12};
