use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Prefix marking a birthday whose year is unknown (`--MMDD`).
const YEAR_UNKNOWN_MARKER: &str = "--";

/// Placeholder year put in front of a year-unknown birthday before reparsing it.
/// Never surfaces in a result.
const SENTINEL_YEAR: &str = "0001";

/// Why a non-empty birthday could not be normalized.
///
/// The display text is the per-record diagnostic shown in reports.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BirthdayError {
    #[error("birthday has unknown format: {0}")]
    UnrecognizedFormat(String),

    #[error("could not parse birthday date with suffix -- correctly: {0}")]
    MalformedPartialDate(String),
}

impl BirthdayError {
    /// Returns the birthday value exactly as it was read.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::UnrecognizedFormat(raw) | Self::MalformedPartialDate(raw) => raw,
        }
    }
}

/// A birthday after normalization.
///
/// `month` is in `1..=12` and `day` in `1..=31` and together they form a real
/// calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedBirthday {
    /// Complete date known.
    Full { month: u32, day: u32, year: i32 },
    /// Month and day known, year unknown.
    PartialMonthDay { month: u32, day: u32 },
    /// A value was present but matched no recognized format.
    Unparseable(BirthdayError),
    /// No birthday value.
    Absent,
}

impl NormalizedBirthday {
    #[must_use]
    pub fn month(&self) -> Option<u32> {
        self.month_day().map(|(month, _)| month)
    }

    #[must_use]
    pub fn day(&self) -> Option<u32> {
        self.month_day().map(|(_, day)| day)
    }

    /// The birth year, known only for [`NormalizedBirthday::Full`].
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        match self {
            Self::Full { year, .. } => Some(*year),
            _ => None,
        }
    }

    #[must_use]
    pub fn month_day(&self) -> Option<(u32, u32)> {
        match self {
            Self::Full { month, day, .. } | Self::PartialMonthDay { month, day } => {
                Some((*month, *day))
            }
            Self::Unparseable(_) | Self::Absent => None,
        }
    }

    /// Returns whether a month and day are known.
    #[must_use]
    pub fn is_dated(&self) -> bool {
        self.month_day().is_some()
    }

    fn full(date: NaiveDate) -> Self {
        Self::Full {
            month: date.month(),
            day: date.day(),
            year: date.year(),
        }
    }
}

/// Normalizes a raw birthday value.
///
/// Recognized shapes, tried in this order:
///
/// - `""` → [`NormalizedBirthday::Absent`]
/// - `YYYYMMDD` → [`NormalizedBirthday::Full`]
/// - `YYYY-MM-DD` → [`NormalizedBirthday::Full`]
/// - `--MMDD` → [`NormalizedBirthday::PartialMonthDay`]
///
/// Anything else, including dates that do not exist in the calendar such as
/// `19850231`, becomes [`NormalizedBirthday::Unparseable`] carrying the raw
/// value. The year-unknown form is checked against year 1, so `--0229` is
/// unparseable.
#[must_use]
pub fn parse_birthday(raw: &str) -> NormalizedBirthday {
    if raw.is_empty() {
        return NormalizedBirthday::Absent;
    }

    if let Some(date) = parse_basic(raw).or_else(|| parse_extended(raw)) {
        return NormalizedBirthday::full(date);
    }

    if let Some(month_day) = raw.strip_prefix(YEAR_UNKNOWN_MARKER) {
        return match parse_basic(&format!("{SENTINEL_YEAR}{month_day}")) {
            Some(date) => NormalizedBirthday::PartialMonthDay {
                month: date.month(),
                day: date.day(),
            },
            None => NormalizedBirthday::Unparseable(BirthdayError::MalformedPartialDate(
                raw.to_string(),
            )),
        };
    }

    NormalizedBirthday::Unparseable(BirthdayError::UnrecognizedFormat(raw.to_string()))
}

/// `YYYYMMDD`
fn parse_basic(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    from_digits(&s[..4], &s[4..6], &s[6..])
}

/// `YYYY-MM-DD`
fn parse_extended(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    from_digits(&s[..4], &s[5..7], &s[8..])
}

fn from_digits(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}
