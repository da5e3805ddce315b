//! PhoneNumber value object.

use super::errors::ValidationError;
use super::validators::is_valid_phone_number;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for phone numbers.
///
/// Only digits and the dial characters `*`, `#`, `+` and `-` are allowed.
/// The empty string is accepted and means the number is unknown.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1-212-555-0100").unwrap();
/// assert_eq!(phone.as_str(), "+1-212-555-0100");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number contains any
    /// character outside `[0-9*#+-]`.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !is_valid_phone_number(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("+1-212-555-0100").unwrap();
        assert_eq!(phone.as_str(), "+1-212-555-0100");
    }

    #[test]
    fn test_phone_empty_is_allowed() {
        let phone = PhoneNumber::new("").unwrap();
        assert!(phone.is_empty());
        assert_eq!(phone, PhoneNumber::default());
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneNumber::new("no digits").is_err());
        assert!(PhoneNumber::new("+1 (555) 123-4567").is_err());
        assert!(PhoneNumber::new("555.123.4567").is_err());
        assert!(PhoneNumber::new("*#06#").is_ok());
        assert!(PhoneNumber::new("+14155551234").is_ok());
    }

    #[test]
    fn test_phone_error_carries_input() {
        let err = PhoneNumber::new("555-CALL").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("555-CALL".to_string()));
    }

    #[test]
    fn test_phone_equality_is_exact() {
        assert_eq!(PhoneNumber::new("555").unwrap(), PhoneNumber::new("555").unwrap());
        assert_ne!(PhoneNumber::new("555").unwrap(), PhoneNumber::new("+555").unwrap());
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("+1-555-1234").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"+1-555-1234\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn prop_valid_phone_is_kept_verbatim(raw in "[-0-9*#+]*") {
            let phone = PhoneNumber::new(raw.clone()).unwrap();
            prop_assert_eq!(phone.as_str(), raw.as_str());
        }

        #[test]
        fn prop_foreign_char_is_rejected(raw in "[-0-9*#+]*[a-zA-Z ().][-0-9*#+]*") {
            prop_assert!(PhoneNumber::new(raw).is_err());
        }
    }
}
