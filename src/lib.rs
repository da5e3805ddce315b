//! Address Book - an in-memory contact book with a flat text file format.
//!
//! Contacts are built from validated, immutable value objects and kept in an
//! ordered list that supports adding, removing by value and linear search
//! over individual fields or any substring of a contact.
//!
//! # Architecture
//!
//! - **domain**: Phone number and email value objects plus their validators
//! - **models**: Contact names, postal addresses and contact entries
//! - **book**: The address book and its search criteria
//! - **codec**: The one-line-per-contact text format
//! - **storage**: Text source/sink traits and the file-backed store
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

pub use book::{AddressBook, SearchCriterion};
pub use config::Config;
pub use domain::{EmailAddress, PhoneNumber, ValidationError};
pub use error::{AddressBookError, AddressBookResult, CodecError, ConfigError};
pub use models::{ContactEntry, ContactName, PostalAddress};
pub use storage::{FileStore, TextSink, TextSource};
