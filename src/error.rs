//! Common error types.

use std::fmt;
use std::path::PathBuf;

/// A shortcut type equivalent to `Result<T, iconlabel::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error that occurs within the crate.
#[derive(Debug)]
pub enum Error {
    /// An invalid hex code was provided when trying to parse a color.
    InvalidHexCode(String),

    /// A [`Label`][crate::Label] was built from lines that break its invariants: no lines,
    /// more than four lines, or a line that is empty, too long, or not sanitized.
    ///
    /// This always points at a bug in the code that prepared the lines, since
    /// [`sanitize_line`][crate::sanitize_line] never produces such text.
    InvalidLabel(String),

    /// The font backend failed to parse a font file.
    #[cfg(feature = "text")]
    FontError(&'static str),

    /// None of the candidate font paths exist. Holds every path that was tried.
    FontNotFound(Vec<PathBuf>),

    /// A font file exists but could not be read.
    FontUnreadable(PathBuf, std::io::Error),

    /// Failed to encode the rendered canvas.
    EncodingError(String),

    /// An error occured when trying to read a file or when trying to write to a file.
    IoError(std::io::Error),
}

/// Broad classification of an [`Error`], used by callers that only care about who is at fault.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The font resource is missing or cannot be loaded. Fatal for every render.
    Configuration,
    /// The label handed to the renderer violates its invariants.
    ContractViolation,
    /// Writing or encoding the PNG failed.
    Export,
    /// A user-supplied value (such as a color string) could not be parsed.
    Input,
}

impl Error {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidHexCode(_) => ErrorKind::Input,
            Self::InvalidLabel(_) => ErrorKind::ContractViolation,
            #[cfg(feature = "text")]
            Self::FontError(_) => ErrorKind::Configuration,
            Self::FontNotFound(_) | Self::FontUnreadable(..) => ErrorKind::Configuration,
            Self::EncodingError(_) | Self::IoError(_) => ErrorKind::Export,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(err) | Self::FontUnreadable(_, err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidHexCode(hex_code) => write!(f, "Invalid hex code: {hex_code}"),
            Self::InvalidLabel(msg) => write!(f, "Invalid label: {msg}"),
            #[cfg(feature = "text")]
            Self::FontError(msg) => write!(f, "Font error: {msg}"),
            Self::FontNotFound(tried) => {
                write!(f, "No usable font found, tried: ")?;
                for (i, path) in tried.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", path.display())?;
                }
                Ok(())
            }
            Self::FontUnreadable(path, error) => {
                write!(f, "Cannot read font {}: {error}", path.display())
            }
            Self::EncodingError(msg) => write!(f, "Encoding error: {msg}"),
            Self::IoError(error) => write!(f, "IO error: {error}"),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err)
    }
}

impl From<png::EncodingError> for Error {
    fn from(err: png::EncodingError) -> Self {
        match err {
            png::EncodingError::IoError(err) => Self::IoError(err),
            png::EncodingError::Format(err) => Self::EncodingError(err.to_string()),
            png::EncodingError::LimitsExceeded => {
                Self::EncodingError("limits exceeded".to_string())
            }
            png::EncodingError::Parameter(err) => Self::EncodingError(err.to_string()),
        }
    }
}
