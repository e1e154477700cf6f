use std::fmt;

use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

/// Why a vCard document could not be read.
///
/// `line` is 1-based and counts logical lines after unfolding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}: {message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: usize,
    pub message: String,
}

impl ParseError {
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input ended inside a card.
    UnexpectedEof,
    /// Bad property name, or no `:` before the value.
    InvalidPropertyName,
    InvalidParameter,
    /// `VERSION` other than 2.1, 3.0 or 4.0.
    UnsupportedVersion,
}

impl ParseErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnexpectedEof => "unexpected end of input",
            Self::InvalidPropertyName => "invalid property name",
            Self::InvalidParameter => "invalid parameter",
            Self::UnsupportedVersion => "unsupported version",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
