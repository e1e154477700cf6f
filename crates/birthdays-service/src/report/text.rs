use std::io::Write;

use super::{Reporter, failure_label};
use crate::birthday::NormalizedBirthday;
use crate::contact::DisplayRecord;
use crate::error::ServiceResult;

/// Human-readable report: `Doe John: 04.07.1985`, or `Doe John: 04.07.` when
/// the year is unknown.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReporter;

impl TextReporter {
    fn line(record: &DisplayRecord) -> String {
        let value = match (&record.birthday, failure_label(record)) {
            (_, Some(label)) => label,
            (NormalizedBirthday::Full { month, day, year }, None) => {
                format!("{day:02}.{month:02}.{year}")
            }
            (NormalizedBirthday::PartialMonthDay { month, day }, None) => {
                format!("{day:02}.{month:02}.")
            }
            (NormalizedBirthday::Unparseable(_) | NormalizedBirthday::Absent, None) => {
                String::new()
            }
        };

        // A card without properties has no name to show
        if record.empty {
            value
        } else {
            format!("{}: {value}", record.name)
        }
    }
}

impl Reporter for TextReporter {
    fn render(&self, records: &[DisplayRecord], out: &mut dyn Write) -> ServiceResult<()> {
        for record in records {
            writeln!(out, "{}", Self::line(record))?;
        }
        Ok(())
    }
}
