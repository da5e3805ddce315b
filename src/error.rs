//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by address book operations and persistence.
#[derive(Error, Debug)]
pub enum AddressBookError {
    /// A required argument was missing or failed validation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The backing file does not exist
    #[error("File not found: {0}")]
    NotFound(String),

    /// Underlying read or write failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored line could not be turned back into a contact
    #[error("Malformed record on line {line}: {source}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: CodecError,
    },
}

impl From<ValidationError> for AddressBookError {
    fn from(err: ValidationError) -> Self {
        AddressBookError::InvalidArgument(err.to_string())
    }
}

/// Errors that can occur while decoding a single stored line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The line holds fewer fields than a record needs
    #[error("expected {expected} fields, found {found}")]
    MissingFields { expected: usize, found: usize },

    /// A phone or email field failed validation
    #[error("{0}")]
    InvalidField(#[from] ValidationError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with CodecError
pub type CodecResult<T> = Result<T, CodecError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
