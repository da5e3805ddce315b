//! Domain value objects and validators.
//!
//! This module contains type-safe wrappers for phone numbers and email
//! addresses. These value objects validate at construction time, so an
//! invalid phone number or email address can never be represented.

pub mod email;
pub mod errors;
pub mod phone;
pub(crate) mod text;
pub mod validators;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
pub use validators::{is_valid_email_address, is_valid_phone_number};
