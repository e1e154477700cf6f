use std::io::Write;

use birthdays_core::config::ReportConfig;
use birthdays_core::constants::CSV_COLUMNS;
use birthdays_core::error::CoreResult;

use super::{Reporter, failure_label};
use crate::contact::DisplayRecord;
use crate::error::ServiceResult;

/// Delimited report: `name;month;day;year;error`.
///
/// Month and day are zero-padded; the year column is empty for year-unknown
/// birthdays and the error column is empty for dated ones. Fields are quoted
/// only when they contain the delimiter, a quote or a line break.
#[derive(Debug, Clone, Copy)]
pub struct CsvReporter {
    delimiter: u8,
    header: bool,
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self {
            delimiter: b';',
            header: true,
        }
    }
}

impl CsvReporter {
    #[must_use]
    pub fn new(delimiter: u8, header: bool) -> Self {
        Self { delimiter, header }
    }

    /// ## Errors
    /// Returns an error if the configured delimiter is not a single ASCII character.
    pub fn from_config(config: &ReportConfig) -> CoreResult<Self> {
        Ok(Self::new(config.delimiter_byte()?, config.header))
    }

    fn row(record: &DisplayRecord) -> [String; 5] {
        if let Some(label) = failure_label(record) {
            return [record.name.clone(), String::new(), String::new(), String::new(), label];
        }

        let birthday = &record.birthday;
        [
            record.name.clone(),
            birthday.month().map(|m| format!("{m:02}")).unwrap_or_default(),
            birthday.day().map(|d| format!("{d:02}")).unwrap_or_default(),
            birthday.year().map(|y| y.to_string()).unwrap_or_default(),
            String::new(),
        ]
    }
}

impl Reporter for CsvReporter {
    fn render(&self, records: &[DisplayRecord], out: &mut dyn Write) -> ServiceResult<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .from_writer(out);

        if self.header {
            writer.write_record(CSV_COLUMNS)?;
        }
        for record in records {
            writer.write_record(Self::row(record))?;
        }
        writer.flush()?;
        Ok(())
    }
}
