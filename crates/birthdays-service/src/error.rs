use std::path::PathBuf;

use birthdays_rfc::rfc::vcard::ParseError;
use thiserror::Error;

/// Errors raised while loading contacts or writing a report.
///
/// Per-record birthday problems are not errors here; they travel inside
/// [`crate::NormalizedBirthday::Unparseable`].
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Cannot read {}: {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed vCard file {}: {source}", .path.display())]
    MalformedSource { path: PathBuf, source: ParseError },

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to write CSV report: {0}")]
    Csv(#[from] csv::Error),
}

impl ServiceError {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceUnreadable {
            path: path.into(),
            source,
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
