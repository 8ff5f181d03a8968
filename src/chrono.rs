//! Interop with the `chrono` crate and the host clock.

use ::chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};

use crate::consts::NANOS_PER_SECOND;
use crate::{Date, TimeOfDay};

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        // chrono counts January 1 of year 1 as day 1.
        Self::from_ordinal(i64::from(date.num_days_from_ce()) - 1)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        // A leap second is folded into the last nanosecond of its minute.
        let nanosecond = i64::from(time.nanosecond()).min(NANOS_PER_SECOND - 1);
        let nanos = i64::from(time.num_seconds_from_midnight()) * NANOS_PER_SECOND + nanosecond;
        Self::from_nanoseconds(nanos).unwrap_or_default()
    }
}

impl Date {
    /// The current date in `tz`.
    pub fn today<Tz: TimeZone>(tz: &Tz) -> Self {
        Utc::now().with_timezone(tz).date_naive().into()
    }

    /// Converts to a [`NaiveDate`], or `None` outside the range chrono supports.
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        let days = self.ordinal().checked_add(1)?;
        NaiveDate::from_num_days_from_ce_opt(i32::try_from(days).ok()?)
    }

    /// Midnight at the start of this date in `tz`.
    ///
    /// Returns `None` outside chrono's range or when midnight does not exist
    /// in `tz`. An ambiguous midnight resolves to the earlier instant.
    pub fn to_datetime<Tz: TimeZone>(self, tz: &Tz) -> Option<DateTime<Tz>> {
        let midnight = self.to_naive_date()?.and_time(NaiveTime::MIN);
        tz.from_local_datetime(&midnight).earliest()
    }
}

impl TimeOfDay {
    /// The current time of day in `tz`.
    pub fn now<Tz: TimeZone>(tz: &Tz) -> Self {
        Utc::now().with_timezone(tz).time().into()
    }

    pub fn to_naive_time(self) -> NaiveTime {
        let seconds = (self.nanoseconds() / NANOS_PER_SECOND) as u32;
        NaiveTime::from_num_seconds_from_midnight_opt(seconds, self.nanosecond()).unwrap_or(NaiveTime::MIN)
    }
}
