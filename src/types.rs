//! Global type definitions
//!
//! Constants and the error type shared by the table, the loader and the driver

use std::fmt;

use crate::loader::LoaderError;

/// Default number of buckets in a bid table
pub const DEFAULT_SIZE: usize = 179;

/// Bid id searched and removed by the console menu when none is given
pub const DEFAULT_BID_ID: &str = "98223";

/// CSV file loaded by the console menu when none is given
pub const DEFAULT_CSV_PATH: &str = "eBid_Monthly_Sales.csv";

/// Currency symbol stripped from the amount column before parsing
pub const CURRENCY_SYMBOL: char = '$';

/// Bid table error type
#[derive(Debug)]
pub enum BidTableError {
    /// Table constructed with an unusable bucket count
    InvalidCapacity(usize),
    /// Configuration could not be resolved
    Config(String),
    /// I/O operation error
    Io(std::io::Error),
    /// Bid source could not be opened
    Loader(LoaderError),
    /// JSON encoding or decoding error
    Json(serde_json::Error),
}

impl fmt::Display for BidTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BidTableError::InvalidCapacity(capacity) => {
                write!(f, "Invalid capacity: {} (must be at least 1)", capacity)
            }
            BidTableError::Config(msg) => write!(f, "Configuration error: {}", msg),
            BidTableError::Io(err) => write!(f, "I/O error: {}", err),
            BidTableError::Loader(err) => write!(f, "Loader error: {}", err),
            BidTableError::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for BidTableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BidTableError::Io(err) => Some(err),
            BidTableError::Loader(err) => Some(err),
            BidTableError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BidTableError {
    fn from(err: std::io::Error) -> Self {
        BidTableError::Io(err)
    }
}

impl From<LoaderError> for BidTableError {
    fn from(err: LoaderError) -> Self {
        BidTableError::Loader(err)
    }
}

impl From<serde_json::Error> for BidTableError {
    fn from(err: serde_json::Error) -> Self {
        BidTableError::Json(err)
    }
}

/// Result type for bid table operations
pub type BidTableResult<T> = Result<T, BidTableError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let err = BidTableError::InvalidCapacity(0);
        assert_eq!(err.to_string(), "Invalid capacity: 0 (must be at least 1)");

        let err = BidTableError::Config("bad field".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad field");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BidTableError = io_err.into();
        assert!(matches!(err, BidTableError::Io(_)));
        assert!(err.source().is_some());
    }
}
