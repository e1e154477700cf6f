//! Birthday list building: normalization and ordering of contact birthdays,
//! plus the loader and renderers around them.

pub mod birthday;
pub mod contact;
pub mod error;
pub mod list;
pub mod loader;
pub mod report;

pub use birthday::{
    BirthdayError, NormalizedBirthday, SortKey, compare, parse_birthday, sort_records,
};
pub use contact::{DisplayRecord, RawContact};
pub use error::{ServiceError, ServiceResult};
pub use list::{BirthdayList, ListOptions, build_list};
pub use loader::{ContactSource, FileSystemSource};
pub use report::{CsvReporter, Reporter, TextReporter};
