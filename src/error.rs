//! The `Error` and `Result` types used by this crate.
use std::fmt::{self, Display};
use std::io;

/// The result type used by this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The error type used by this crate.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Represents the error emitted for a zero indent width.
    InvalidIndent(usize),
    /// Represents the error emitted by [`unescape`][crate::util::unescape] when it hits an
    /// invalid escape sequence.
    InvalidEscape(char),
    /// Represents the error emitted by [`unescape`][crate::util::unescape] when it hits an
    /// invalid unicode code point.
    InvalidUnicodeCodePoint(String),
    /// Represents the error emitted when the input ends in the middle of an escape sequence.
    Eof,
    /// Represents generic IO errors.
    Io(io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidIndent(width) => {
                write!(f, "invalid indent width `{width}`, must be positive")
            }
            Error::InvalidEscape(ch) => write!(f, "invalid escape sequence `\\{ch}`"),
            Error::InvalidUnicodeCodePoint(code_point) => {
                write!(f, "invalid unicode code point `\\u{code_point}`")
            }
            Error::Eof => write!(f, "unexpected end of input"),
            Error::Io(err) => write!(f, "{err}"),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl std::error::Error for Error {}
