//! Common imports for users of the crate: `use civil_time::prelude::*;`
//!
//! Inside the crate it also carries the derive macros from derive_more.

pub use crate::sql::{Scan, ToDbValue};
pub use crate::{Date, Error, TimeOfDay, Weekday};

#[allow(unused_imports)]
pub(crate) use derive_more::{Display, From, Into};
