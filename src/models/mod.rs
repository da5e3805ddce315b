//! Contact record models.
//!
//! This module contains the composite value objects stored in an address
//! book: names, postal addresses and the contact entry that ties them to a
//! phone number, email address and note. All of them are immutable once
//! built; a change means building a replacement.

pub mod contact_entry;
pub mod contact_name;
pub mod postal_address;

pub use contact_entry::{ContactEntry, ContactEntryBuilder};
pub use contact_name::{ContactName, ContactNameBuilder};
pub use postal_address::{PostalAddress, PostalAddressBuilder};
