use std::cmp::Ordering;

use chrono::NaiveDate;

use super::parse::NormalizedBirthday;
use crate::contact::DisplayRecord;

/// Year every known birthday is projected into for ordering.
///
/// A leap year, so February 29 sorts between February 28 and March 1.
pub const REFERENCE_YEAR: i32 = 2000;

/// Ordering key of a birthday: its month and day in [`REFERENCE_YEAR`], or
/// [`SortKey::UNDATED`] when no month and day are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey(NaiveDate);

impl SortKey {
    /// Key of unparseable and absent birthdays, after every calendar date.
    pub const UNDATED: Self = Self(NaiveDate::MAX);

    /// Returns whether this key belongs to a birthday without month and day.
    #[must_use]
    pub fn is_undated(self) -> bool {
        self == Self::UNDATED
    }
}

impl NormalizedBirthday {
    /// Projects this birthday onto its ordering key. The year is ignored.
    #[must_use]
    pub fn sort_key(&self) -> SortKey {
        self.month_day()
            .and_then(|(month, day)| NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day))
            .map_or(SortKey::UNDATED, SortKey)
    }
}

/// Orders two records by birthday month, then day.
///
/// Records without a usable birthday compare equal to each other and greater
/// than every dated record. Use with a stable sort to keep input order on ties.
#[must_use]
pub fn compare(a: &DisplayRecord, b: &DisplayRecord) -> Ordering {
    a.birthday.sort_key().cmp(&b.birthday.sort_key())
}

/// Sorts records in place with [`compare`], keeping input order on ties.
pub fn sort_records(records: &mut [DisplayRecord]) {
    records.sort_by(compare);
}
