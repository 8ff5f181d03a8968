//! Conversions between values and database column representations.
//!
//! `Option<T>` is the nullable column type: `NULL` scans into `None` and
//! `None` is stored as `NULL`.

use crate::consts::{RFC3339_DATE, RFC3339_TIME};
use crate::prelude::*;
use crate::{Date, Error, TimeOfDay};

/// A column value as handed over by a database driver.
#[derive(Debug, Clone, PartialEq, From)]
pub enum DbValue {
    #[from(ignore)]
    Null,
    Bytes(Vec<u8>),
    Text(String),
    Integer(i64),
    Real(f64),
    Boolean(bool),
    /// A civil timestamp without zone.
    Timestamp(Date, TimeOfDay),
}

impl DbValue {
    /// Name of the carried type, for error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bytes(_) => "bytes",
            Self::Text(_) => "string",
            Self::Integer(_) => "i64",
            Self::Real(_) => "f64",
            Self::Boolean(_) => "bool",
            Self::Timestamp(..) => "timestamp",
        }
    }

    fn unsupported(&self) -> Error {
        debug_log!("cannot scan column of type {}", self.type_name());
        Error::UnsupportedType(self.type_name())
    }
}

/// A type that can be read from a database column.
pub trait Scan: Sized {
    /// # Errors
    /// Returns [`Error::UnsupportedType`] for column types the value cannot
    /// come from, or the parse error for malformed text.
    fn scan(value: &DbValue) -> Result<Self, Error>;
}

/// A type that can be written to a database column.
pub trait ToDbValue {
    /// # Errors
    /// Returns an error if the value has no column representation.
    fn to_db_value(&self) -> Result<DbValue, Error>;
}

/// A date column that may be `NULL`.
pub type NullDate = Option<Date>;
/// A time-of-day column that may be `NULL`.
pub type NullTimeOfDay = Option<TimeOfDay>;

fn column_text(value: &DbValue) -> Result<&str, Error> {
    match value {
        DbValue::Bytes(bytes) => std::str::from_utf8(bytes).map_err(|_| Error::UnsupportedType("non-utf8 bytes")),
        DbValue::Text(text) => Ok(text),
        other => Err(other.unsupported()),
    }
}

impl Scan for Date {
    fn scan(value: &DbValue) -> Result<Self, Error> {
        if let DbValue::Timestamp(date, _) = value {
            return Ok(*date);
        }
        Self::parse(RFC3339_DATE, column_text(value)?)
    }
}

impl ToDbValue for Date {
    fn to_db_value(&self) -> Result<DbValue, Error> {
        Ok(DbValue::Text(self.to_string()))
    }
}

impl Scan for TimeOfDay {
    fn scan(value: &DbValue) -> Result<Self, Error> {
        if let DbValue::Timestamp(_, time) = value {
            return Ok(*time);
        }
        Self::parse(RFC3339_TIME, column_text(value)?)
    }
}

impl ToDbValue for TimeOfDay {
    fn to_db_value(&self) -> Result<DbValue, Error> {
        Ok(DbValue::Text(self.to_string()))
    }
}

impl<T: Scan> Scan for Option<T> {
    fn scan(value: &DbValue) -> Result<Self, Error> {
        match value {
            DbValue::Null => Ok(None),
            other => T::scan(other).map(Some),
        }
    }
}

impl<T: ToDbValue> ToDbValue for Option<T> {
    fn to_db_value(&self) -> Result<DbValue, Error> {
        self.as_ref().map_or(Ok(DbValue::Null), ToDbValue::to_db_value)
    }
}
