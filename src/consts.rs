/// Canonical date layout (RFC 3339 full-date)
pub const RFC3339_DATE: &str = "YYYY-MM-DD";

/// Canonical time layout (RFC 3339 partial-time, fraction appended when present)
pub const RFC3339_TIME: &str = "HH:mm:ss";

/// Largest year representable by the fixed-width strict format
pub const MAX_STRICT_YEAR: i64 = 9999;
/// Smallest year representable by the fixed-width strict format
pub const MIN_STRICT_YEAR: i64 = 0;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Months in a year
pub const MONTHS_PER_YEAR: i64 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days elapsed in a non-leap year before each month starts (index 0 is January)
pub(crate) const DAYS_BEFORE_MONTH: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Days in a non-leap year
pub(crate) const DAYS_PER_YEAR: i64 = 365;
/// Days in a complete 4-year cycle
pub(crate) const DAYS_PER_4_YEARS: i64 = DAYS_PER_YEAR * 4 + 1;
/// Days in a century that does not end on a 400-year boundary
pub(crate) const DAYS_PER_100_YEARS: i64 = DAYS_PER_4_YEARS * 25 - 1;
/// Days in a complete Gregorian cycle
pub(crate) const DAYS_PER_400_YEARS: i64 = DAYS_PER_100_YEARS * 4 + 1;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Nanoseconds in a second
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;
/// Nanoseconds in a minute
pub const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;
/// Nanoseconds in an hour
pub const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;
/// Nanoseconds in a day, the exclusive upper bound of a time of day
pub const NANOS_PER_DAY: i64 = 24 * NANOS_PER_HOUR;

/// Digits of sub-second precision
pub const FRACTION_DIGITS: usize = 9;

/// Two-digit years at or above this value belong to the 1900s
pub const TWO_DIGIT_YEAR_PIVOT: i64 = 69;

/// Abbreviated English month names written and matched by `MMM`
pub const MONTH_SHORT_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Full English month names written and matched by `MMMM`
pub const MONTH_LONG_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Meridiem markers for the `a` token, indexed by [`crate::Meridiem`]
pub(crate) const MERIDIEM_LOWER: [&str; 2] = ["am", "pm"];
/// Meridiem markers for the `A` token
pub(crate) const MERIDIEM_UPPER: [&str; 2] = ["AM", "PM"];

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Time component separator (ISO 8601 format)
pub const TIME_SEPARATOR: char = ':';
/// Separator between seconds and their fraction
pub const FRACTION_SEPARATOR: char = '.';
