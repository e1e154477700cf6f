//! Birthday normalization and ordering.
//!
//! [`parse_birthday`] classifies a raw `BDAY` value once; [`compare`] orders
//! records by month and day of the normalized result, ignoring the year.

mod parse;
mod sort;

pub use parse::{BirthdayError, NormalizedBirthday, parse_birthday};
pub use sort::{REFERENCE_YEAR, SortKey, compare, sort_records};
