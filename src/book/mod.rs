//! Address book storage and search.

mod address_book;
pub mod search;

pub use address_book::AddressBook;
pub use search::SearchCriterion;
