//! Line-oriented text format for contact entries.
//!
//! Each entry becomes one line of twelve fields, every field followed by
//! `" ;;"`:
//!
//! ```text
//! first ;;last ;;middle ;;phone ;;apt ;;street ;;city ;;state ;;zip ;;country ;;email ;;note ;;
//! ```
//!
//! Field values are written as-is. A value containing `;;` cannot be read
//! back, and leading or trailing whitespace on a value is lost on decode.
//! A value containing a line break would split its record, so [`save`]
//! refuses such entries before writing anything.

use crate::domain::{EmailAddress, PhoneNumber};
use crate::error::{AddressBookError, AddressBookResult, CodecError, CodecResult};
use crate::models::{ContactEntry, ContactName, PostalAddress};
use crate::storage::{TextSink, TextSource};

/// Written after every field, including the last one.
pub const FIELD_SEPARATOR: &str = " ;;";

/// Token used to split a stored line back into fields.
const SPLIT_TOKEN: &str = ";;";

/// Number of fields in one stored record.
pub const FIELD_COUNT: usize = 12;

/// The stored fields of `entry`, in file order.
fn fields(entry: &ContactEntry) -> [&str; FIELD_COUNT] {
    let name = entry.name();
    let address = entry.postal_address();
    [
        name.first_name(),
        name.last_name(),
        name.middle_name(),
        entry.phone_number().as_str(),
        address.apt(),
        address.street(),
        address.city(),
        address.state(),
        address.zip(),
        address.country(),
        entry.email().as_str(),
        entry.note(),
    ]
}

/// Encode an entry as a single newline-terminated line.
pub fn encode(entry: &ContactEntry) -> String {
    let fields = fields(entry);
    let mut line = String::with_capacity(fields.iter().map(|f| f.len() + 3).sum::<usize>() + 1);
    for field in fields {
        line.push_str(field);
        line.push_str(FIELD_SEPARATOR);
    }
    line.push('\n');
    line
}

/// Decode one stored line back into an entry.
///
/// Fields after the twelfth are ignored.
///
/// # Errors
///
/// Returns `CodecError::MissingFields` when the line has fewer than twelve
/// fields and `CodecError::InvalidField` when the phone or email field fails
/// validation.
pub fn decode(line: &str) -> CodecResult<ContactEntry> {
    let tokens: Vec<&str> = line
        .trim_end_matches(['\n', '\r'])
        .split(SPLIT_TOKEN)
        .map(str::trim)
        .take(FIELD_COUNT)
        .collect();

    let [first, last, middle, phone, apt, street, city, state, zip, country, email, note] =
        <[&str; FIELD_COUNT]>::try_from(tokens.as_slice()).map_err(|_| {
            CodecError::MissingFields {
                expected: FIELD_COUNT,
                found: tokens.len(),
            }
        })?;

    let name = ContactName::builder(first)
        .last_name(last)
        .middle_name(middle)
        .build();
    let address = PostalAddress::builder(country)
        .apt(apt)
        .street(street)
        .city(city)
        .state(state)
        .zip(zip)
        .build();

    Ok(ContactEntry::builder(name, PhoneNumber::new(phone)?)
        .postal_address(address)
        .email(EmailAddress::new(email)?)
        .note(note)
        .build())
}

/// Encode `entries` in order and write them to `sink`, replacing its content.
///
/// # Errors
///
/// Returns `AddressBookError::InvalidArgument` if any field of any entry
/// contains `\n` or `\r`; the sink is not written in that case.
pub fn save<'a, I, S>(entries: I, sink: &S) -> AddressBookResult<usize>
where
    I: IntoIterator<Item = &'a ContactEntry>,
    S: TextSink + ?Sized,
{
    let mut text = String::new();
    let mut count = 0;
    for entry in entries {
        if fields(entry).iter().any(|f| f.contains(['\n', '\r'])) {
            return Err(AddressBookError::InvalidArgument(format!(
                "contact {} has a field containing a line break",
                entry.name()
            )));
        }
        text.push_str(&encode(entry));
        count += 1;
    }
    sink.write_text(&text)?;
    tracing::info!("Saved {} contacts to {}", count, sink.location());
    Ok(count)
}

/// Read every stored entry from `source`, in stored order.
///
/// Blank lines are skipped. The first bad line aborts the whole load; no
/// partial list is returned.
pub fn load<S>(source: &S) -> AddressBookResult<Vec<ContactEntry>>
where
    S: TextSource + ?Sized,
{
    let text = source.read_text()?;
    let mut entries = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let entry = decode(line).map_err(|err| {
            tracing::warn!("Failed to decode line {}: {}", index + 1, err);
            AddressBookError::MalformedRecord {
                line: index + 1,
                source: err,
            }
        })?;
        entries.push(entry);
    }

    tracing::info!("Loaded {} contacts from {}", entries.len(), source.location());
    Ok(entries)
}
