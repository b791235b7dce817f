//! Error types for mtgdb.

use crate::query::ParseError;
use std::fmt;

/// The main error type for mtgdb operations.
///
/// Every variant is recoverable at the session level: a failed operation
/// leaves the result cursor exactly as it was.
#[derive(Debug)]
pub enum Error {
    /// The instruction string could not be parsed
    Parse(ParseError),

    /// The named entity is not part of the catalog
    EntityNotFound(String),

    /// Row inspection outside the bounds of the current result set
    OutOfRange {
        /// Requested row index
        index: i64,
        /// Number of rows in the current result set
        len: usize,
    },

    /// Row inspection before any query has been run
    NoResults,

    /// A row number that is not an integer
    InvalidRowNumber(String),

    /// A database alias that names neither database
    UnknownDatabaseAlias(String),

    /// Invalid configuration
    Config(String),

    /// An external program could not be started
    ExternalCommand {
        /// Program name
        program: String,
        /// Reason reported by the operating system
        message: String,
    },

    /// I/O error
    Io(std::io::Error),

    /// Error raised by the storage engine, carried unchanged
    Storage(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "Parse error: {}", e),
            Error::EntityNotFound(name) => write!(f, "Entity not found: {}", name),
            Error::OutOfRange { index, len } => {
                write!(f, "Row {} not in range (0..{})", index, len)
            }
            Error::NoResults => write!(f, "No results"),
            Error::InvalidRowNumber(text) => write!(f, "Invalid row number: [{}]", text),
            Error::UnknownDatabaseAlias(alias) => write!(f, "Invalid db alias: [{}]", alias),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::ExternalCommand { program, message } => {
                write!(f, "Could not run {}: {}", program, message)
            }
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Io(e) => Some(e),
            Error::Storage(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

/// A specialized `Result` type for mtgdb operations.
pub type Result<T> = std::result::Result<T, Error>;
