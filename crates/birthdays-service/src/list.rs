//! Building the sorted birthday list from input paths.

use std::path::Path;

use birthdays_core::config::InputConfig;

use crate::birthday::sort_records;
use crate::contact::DisplayRecord;
use crate::error::{ServiceError, ServiceResult};
use crate::loader::ContactSource;

#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    /// Stop at the first input that cannot be read instead of skipping it.
    pub strict: bool,
}

impl From<&InputConfig> for ListOptions {
    fn from(config: &InputConfig) -> Self {
        Self {
            strict: config.strict,
        }
    }
}

/// A sorted birthday list and the inputs that could not be read.
#[derive(Debug, Default)]
pub struct BirthdayList {
    pub records: Vec<DisplayRecord>,
    pub failures: Vec<ServiceError>,
}

impl BirthdayList {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Loads every contact below `inputs`, normalizes the birthdays and sorts the
/// result by month and day.
///
/// Contacts keep the order in which `source` yields them until sorting, so
/// equal birthdays appear in input order.
///
/// ## Errors
/// In strict mode, returns the first source error. Otherwise source errors
/// are collected in [`BirthdayList::failures`] and never abort the run.
#[tracing::instrument(skip_all, fields(inputs = inputs.len(), strict = options.strict))]
pub fn build_list<S, P>(
    source: &S,
    inputs: &[P],
    options: ListOptions,
) -> ServiceResult<BirthdayList>
where
    S: ContactSource + ?Sized,
    P: AsRef<Path>,
{
    let mut list = BirthdayList::default();

    let files = inputs
        .iter()
        .flat_map(|input| source.discover(input.as_ref()));

    for file in files {
        let loaded = file.and_then(|file| source.load(&file));
        match loaded {
            Ok(contacts) => list
                .records
                .extend(contacts.iter().map(DisplayRecord::from_raw)),
            Err(e) if options.strict => return Err(e),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable input");
                list.failures.push(e);
            }
        }
    }

    sort_records(&mut list.records);

    tracing::debug!(
        records = list.records.len(),
        failures = list.failures.len(),
        "Built birthday list"
    );

    Ok(list)
}
