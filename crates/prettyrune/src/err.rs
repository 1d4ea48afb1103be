//! Helper module with this crate's error type.
//!
//! Decoding errors complement the sentinel results of
//! [`decode_rune`](crate::decode_rune) for code that prefers [`Result`]s.
//! Each error retains the number of units to skip before retrying, so that
//! stream scanners lose no information. With the `std` feature enabled,
//! errors convert to I/O errors.

/// The enumeration of error kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input is empty or a well-formed but incomplete encoding.
    Incomplete,
    /// The input starts with a malformed encoding.
    Malformed,
}

impl ErrorKind {
    /// Turn the error kind to an error message.
    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Incomplete => "incomplete UTF-8",
            Self::Malformed => "malformed UTF-8",
        }
    }
}

/// A decoding error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    skip: usize,
}

impl Error {
    /// Create a new error for incomplete input.
    ///
    /// The number of units to skip is 1 for a lone lead unit and 0 otherwise.
    pub const fn incomplete(skip: usize) -> Self {
        Self {
            kind: ErrorKind::Incomplete,
            skip,
        }
    }

    /// Create a new error for malformed input.
    pub const fn malformed() -> Self {
        Self {
            kind: ErrorKind::Malformed,
            skip: 1,
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the number of units to skip before decoding again.
    pub fn skip(&self) -> usize {
        self.skip
    }

    /// Determine whether reading more input may resolve this error.
    pub fn is_incomplete(&self) -> bool {
        self.kind == ErrorKind::Incomplete
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Incomplete => Self::incomplete(0),
            ErrorKind::Malformed => Self::malformed(),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.kind.as_str())
    }
}

impl core::error::Error for Error {}

#[cfg(feature = "std")]
impl From<Error> for std::io::Error {
    fn from(value: Error) -> Self {
        match value.kind {
            ErrorKind::Incomplete => Self::new(std::io::ErrorKind::UnexpectedEof, value),
            ErrorKind::Malformed => Self::new(std::io::ErrorKind::InvalidData, value),
        }
    }
}

#[cfg(feature = "std")]
impl From<ErrorKind> for std::io::Error {
    fn from(value: ErrorKind) -> Self {
        Error::from(value).into()
    }
}
