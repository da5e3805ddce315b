use crate::error::AddressBookResult;

/// Source of previously stored address book text.
///
/// Implementations report `AddressBookError::NotFound` when there is nothing
/// stored yet and `AddressBookError::Io` when reading fails.
pub trait TextSource {
    /// Where the text comes from, for log messages.
    fn location(&self) -> String;

    /// Read the whole stored text.
    fn read_text(&self) -> AddressBookResult<String>;
}

/// Destination for address book text.
///
/// Writing replaces whatever was stored before.
pub trait TextSink {
    /// Where the text goes, for log messages.
    fn location(&self) -> String;

    /// Replace the stored text with `text`.
    fn write_text(&self, text: &str) -> AddressBookResult<()>;
}
