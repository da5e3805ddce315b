//! The in-memory contact collection.

use super::search::SearchCriterion;
use crate::codec;
use crate::domain::{EmailAddress, PhoneNumber};
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::{ContactEntry, ContactName, PostalAddress};
use crate::storage::{TextSink, TextSource};
use std::fmt;
use tracing::debug;

/// An ordered list of contact entries.
///
/// Insertion order is kept and duplicates are allowed. Entries have no
/// identity of their own: removal and every search compare by value, and
/// every search is a linear scan that returns matches in stored order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    entries: Vec<ContactEntry>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an address book holding `entries` in the given order.
    pub fn from_entries(entries: Vec<ContactEntry>) -> Self {
        Self { entries }
    }

    /// Load an address book from `source`.
    pub fn open<S>(source: &S) -> AddressBookResult<Self>
    where
        S: TextSource + ?Sized,
    {
        codec::load(source).map(Self::from_entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in stored order.
    pub fn entries(&self) -> &[ContactEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContactEntry> {
        self.entries.iter()
    }

    /// Append an entry. Duplicates are stored separately.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::InvalidArgument` if no entry is given.
    pub fn add(&mut self, entry: impl Into<Option<ContactEntry>>) -> AddressBookResult<()> {
        let entry = entry.into().ok_or_else(missing_entry)?;
        debug!("Adding contact: {}", entry.name());
        self.entries.push(entry);
        Ok(())
    }

    /// Remove the first stored entry equal to `entry`.
    ///
    /// Returns `Ok(false)` when no stored entry is equal; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::InvalidArgument` if no entry is given.
    pub fn remove<'a>(
        &mut self,
        entry: impl Into<Option<&'a ContactEntry>>,
    ) -> AddressBookResult<bool> {
        let entry = entry.into().ok_or_else(missing_entry)?;
        match self.entries.iter().position(|stored| stored == entry) {
            Some(index) => {
                self.entries.remove(index);
                debug!("Removed contact at position {}", index);
                Ok(true)
            }
            None => {
                debug!("Contact not found for removal: {}", entry.name());
                Ok(false)
            }
        }
    }

    /// Every entry satisfying `criterion`, in stored order.
    pub fn search(&self, criterion: &SearchCriterion) -> Vec<&ContactEntry> {
        let results: Vec<&ContactEntry> = self
            .entries
            .iter()
            .filter(|entry| criterion.matches(entry))
            .collect();
        debug!("Search {:?} matched {} contacts", criterion, results.len());
        results
    }

    /// Entries with any field containing `text`, ignoring case.
    pub fn search_by_substring(&self, text: &str) -> Vec<&ContactEntry> {
        self.search(&SearchCriterion::Substring(text.to_string()))
    }

    /// Entries whose whole name equals `name`, ignoring case.
    pub fn search_by_full_name(&self, name: &ContactName) -> Vec<&ContactEntry> {
        self.search(&SearchCriterion::FullName(name.clone()))
    }

    /// Entries whose first name is exactly `first_name`.
    pub fn search_by_first_name(&self, first_name: &str) -> Vec<&ContactEntry> {
        self.search(&SearchCriterion::FirstName(first_name.to_string()))
    }

    /// Entries whose last name is exactly `last_name`.
    pub fn search_by_last_name(&self, last_name: &str) -> Vec<&ContactEntry> {
        self.search(&SearchCriterion::LastName(last_name.to_string()))
    }

    pub fn search_by_phone_number(&self, phone: &PhoneNumber) -> Vec<&ContactEntry> {
        self.search(&SearchCriterion::PhoneNumber(phone.clone()))
    }

    pub fn search_by_postal_address(&self, address: &PostalAddress) -> Vec<&ContactEntry> {
        self.search(&SearchCriterion::PostalAddress(address.clone()))
    }

    pub fn search_by_email_address(&self, email: &EmailAddress) -> Vec<&ContactEntry> {
        self.search(&SearchCriterion::EmailAddress(email.clone()))
    }

    /// Entries whose note equals `note`, ignoring case.
    pub fn search_by_note(&self, note: &str) -> Vec<&ContactEntry> {
        self.search(&SearchCriterion::Note(note.to_string()))
    }

    /// Write every entry to `sink`, replacing what it held before.
    pub fn save<S>(&self, sink: &S) -> AddressBookResult<()>
    where
        S: TextSink + ?Sized,
    {
        codec::save(&self.entries, sink).map(|_| ())
    }

    /// Read the entries stored in `source`.
    ///
    /// This book is left untouched; use [`AddressBook::open`] or
    /// [`AddressBook::from_entries`] to work with the result.
    pub fn load<S>(source: &S) -> AddressBookResult<Vec<ContactEntry>>
    where
        S: TextSource + ?Sized,
    {
        codec::load(source)
    }
}

fn missing_entry() -> AddressBookError {
    AddressBookError::InvalidArgument("missing contact entry".to_string())
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AddressBook [{} contacts]", self.entries.len())
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a ContactEntry;
    type IntoIter = std::slice::Iter<'a, ContactEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
