//! Search criteria for linear scans over an address book.

use crate::codec::encode;
use crate::domain::text::{contains_ignore_case, eq_ignore_case};
use crate::domain::{EmailAddress, PhoneNumber};
use crate::models::{ContactEntry, ContactName, PostalAddress};

/// What to look for when scanning an address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCriterion {
    /// Case-insensitive substring of any field.
    Substring(String),

    /// Whole name, compared with [`ContactName`] equality.
    FullName(ContactName),

    /// Exact first name.
    FirstName(String),

    /// Exact last name.
    LastName(String),

    PhoneNumber(PhoneNumber),

    PostalAddress(PostalAddress),

    EmailAddress(EmailAddress),

    /// Whole note, ignoring case.
    Note(String),
}

impl SearchCriterion {
    /// Returns true if `entry` satisfies this criterion.
    pub fn matches(&self, entry: &ContactEntry) -> bool {
        match self {
            Self::Substring(text) => contains_ignore_case(&encode(entry), text),
            Self::FullName(name) => entry.name() == name,
            Self::FirstName(first) => entry.name().first_name() == first,
            Self::LastName(last) => entry.name().last_name() == last,
            Self::PhoneNumber(phone) => entry.phone_number() == phone,
            Self::PostalAddress(address) => entry.postal_address() == address,
            Self::EmailAddress(email) => entry.email() == email,
            Self::Note(note) => eq_ignore_case(entry.note(), note),
        }
    }
}
