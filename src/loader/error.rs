//! Loader error definitions

use std::error::Error;
use std::fmt;

/// Loader error types
///
/// `Io` on open is a source-level failure; the other variants describe a
/// single bad row and are skipped by the bulk load.
#[derive(Debug)]
pub enum LoaderError {
    /// I/O error opening or reading the source
    Io(std::io::Error),
    /// CSV decoding error
    Csv(csv::Error),
    /// Row too short for the column layout
    MissingColumn { row: usize, column: usize },
    /// Amount column without a numeric value
    InvalidAmount { row: usize, value: String },
}

impl LoaderError {
    /// Whether the error ends the whole source rather than one row
    pub fn is_fatal(&self) -> bool {
        match self {
            LoaderError::Io(_) => true,
            LoaderError::Csv(err) => err.is_io_error(),
            _ => false,
        }
    }
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::Io(err) => write!(f, "I/O error: {}", err),
            LoaderError::Csv(err) => write!(f, "CSV error: {}", err),
            LoaderError::MissingColumn { row, column } => {
                write!(f, "Row {}: missing column {}", row, column)
            }
            LoaderError::InvalidAmount { row, value } => {
                write!(f, "Row {}: invalid amount {:?}", row, value)
            }
        }
    }
}

impl Error for LoaderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoaderError::Io(err) => Some(err),
            LoaderError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::Io(err)
    }
}

impl From<csv::Error> for LoaderError {
    fn from(err: csv::Error) -> Self {
        LoaderError::Csv(err)
    }
}

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;
