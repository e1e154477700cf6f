//! Rendering of a sorted birthday list.

mod csv;
mod text;

use std::io::Write;

pub use self::csv::CsvReporter;
pub use self::text::TextReporter;

use crate::birthday::NormalizedBirthday;
use crate::contact::DisplayRecord;
use crate::error::ServiceResult;

pub const NO_BIRTHDAY: &str = "no birthday";
pub const EMPTY_CARD: &str = "could not evaluate birthday";

/// Renders records in the order given.
pub trait Reporter {
    /// ## Errors
    /// Returns an error if writing to `out` fails.
    fn render(&self, records: &[DisplayRecord], out: &mut dyn Write) -> ServiceResult<()>;
}

/// Returns the diagnostic shown instead of a date, if the record has one.
#[must_use]
pub fn failure_label(record: &DisplayRecord) -> Option<String> {
    if record.empty {
        return Some(EMPTY_CARD.to_string());
    }
    match &record.birthday {
        NormalizedBirthday::Absent => Some(NO_BIRTHDAY.to_string()),
        NormalizedBirthday::Unparseable(err) => Some(err.to_string()),
        NormalizedBirthday::Full { .. } | NormalizedBirthday::PartialMonthDay { .. } => None,
    }
}
