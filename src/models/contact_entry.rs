//! A single record in the address book.

use super::{ContactName, PostalAddress};
use crate::domain::text::{eq_ignore_case, hash_ignore_case};
use crate::domain::{EmailAddress, PhoneNumber};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An immutable contact record.
///
/// `name` and `phone_number` are required; the postal address, email and
/// note default to empty values. Two entries are equal when every field is
/// equal under its own type's equality, with the note compared ignoring case.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
/// use address_book::models::{ContactEntry, ContactName};
///
/// let entry = ContactEntry::builder(
///     ContactName::builder("Joey").last_name("Tribbiani").build(),
///     PhoneNumber::new("555-0100").unwrap(),
/// )
/// .note("How you doin'?")
/// .build();
///
/// assert_eq!(entry.name().first_name(), "Joey");
/// assert!(entry.email().is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactEntry {
    name: ContactName,
    phone_number: PhoneNumber,
    #[serde(default)]
    postal_address: PostalAddress,
    #[serde(default)]
    email: EmailAddress,
    #[serde(default)]
    note: String,
}

impl ContactEntry {
    /// Start building an entry from its required name and phone number.
    pub fn builder(name: ContactName, phone_number: PhoneNumber) -> ContactEntryBuilder {
        ContactEntryBuilder {
            entry: ContactEntry {
                name,
                phone_number,
                postal_address: PostalAddress::default(),
                email: EmailAddress::default(),
                note: String::new(),
            },
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    pub fn postal_address(&self) -> &PostalAddress {
        &self.postal_address
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn note(&self) -> &str {
        &self.note
    }
}

impl PartialEq for ContactEntry {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.phone_number == other.phone_number
            && self.postal_address == other.postal_address
            && self.email == other.email
            && eq_ignore_case(&self.note, &other.note)
    }
}

impl Eq for ContactEntry {}

impl Hash for ContactEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.phone_number.hash(state);
        self.postal_address.hash(state);
        self.email.hash(state);
        hash_ignore_case(&self.note, state);
    }
}

impl fmt::Display for ContactEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.phone_number.is_empty() {
            write!(f, " | phone: {}", self.phone_number)?;
        }
        if !self.email.is_empty() {
            write!(f, " | email: {}", self.email)?;
        }
        if !self.postal_address.is_empty() {
            write!(f, " | address: {}", self.postal_address)?;
        }
        if !self.note.is_empty() {
            write!(f, " | note: {}", self.note)?;
        }
        Ok(())
    }
}

/// Builder for [`ContactEntry`].
///
/// The builder takes ownership of every value it is given, so the built
/// entry never shares state with the caller.
#[derive(Debug, Clone)]
#[must_use]
pub struct ContactEntryBuilder {
    entry: ContactEntry,
}

impl ContactEntryBuilder {
    pub fn postal_address(mut self, postal_address: PostalAddress) -> Self {
        self.entry.postal_address = postal_address;
        self
    }

    pub fn email(mut self, email: EmailAddress) -> Self {
        self.entry.email = email;
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.entry.note = note.into();
        self
    }

    pub fn build(self) -> ContactEntry {
        self.entry
    }
}
