use std::fmt;

/// A numeric component outside its legal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("month is out of range [1,12]")]
    Month(i64),

    #[error("day is out of range [1,{max}]")]
    Day { day: i64, max: u8 },

    #[error("day of year is out of range [1,{max}]")]
    DayOfYear { day_of_year: i64, max: u16 },

    #[error("hour is out of range [0,23]")]
    Hour(i64),

    #[error("minute is out of range [0,59]")]
    Minute(i64),

    #[error("second is out of range [0,59]")]
    Second(i64),

    #[error("nanosecond is out of range [0,1e9)")]
    Nanosecond(i64),

    /// A strict fixed-width rendering was asked for a year it cannot represent.
    #[error("year is out of range [0,9999]")]
    Year(i64),

    /// The date lies beyond the first or last day an ordinal can count.
    #[error("year {0} is out of the representable range")]
    OrdinalYear(i64),
}

/// Describes a problem parsing a string against a layout.
///
/// `layout_elem` and `value_elem` are empty until the mismatch is localized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub layout:      String,
    pub value:       String,
    pub layout_elem: String,
    pub value_elem:  String,
}

impl ParseError {
    pub(crate) fn new(layout: &str, value: &str) -> Self {
        Self {
            layout:      layout.to_owned(),
            value:       value.to_owned(),
            layout_elem: String::new(),
            value_elem:  String::new(),
        }
    }

    pub(crate) fn at(layout: &str, value: &str, layout_elem: &str, value_elem: &str) -> Self {
        Self {
            layout:      layout.to_owned(),
            value:       value.to_owned(),
            layout_elem: layout_elem.to_owned(),
            value_elem:  value_elem.to_owned(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.layout_elem.is_empty() && self.value_elem.is_empty() {
            return write!(f, "parsing {:?} as {:?}", self.value, self.layout);
        }
        write!(
            f,
            "parsing {:?} as {:?}: cannot parse {:?} as {:?}",
            self.value, self.layout, self.value_elem, self.layout_elem
        )
    }
}

impl std::error::Error for ParseError {}

/// Error type for every fallible operation in the crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A persistence adapter received a value it cannot interpret.
    #[error("unsupported type {0}")]
    UnsupportedType(&'static str),
}
