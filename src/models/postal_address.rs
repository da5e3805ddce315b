//! Postal address of a contact.

use crate::domain::text::{eq_ignore_case, hash_ignore_case};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A postal address. Only the country is required.
///
/// Equality ignores case and does not look at the zip code: two addresses
/// that differ only in `zip` compare equal. Stored files rely on this, so
/// the zip stays out of `PartialEq` and `Hash`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostalAddress {
    street: String,
    apt: String,
    city: String,
    state: String,
    zip: String,
    country: String,
}

impl PostalAddress {
    /// Start building an address from its required country.
    pub fn builder(country: impl Into<String>) -> PostalAddressBuilder {
        PostalAddressBuilder {
            address: PostalAddress {
                country: country.into(),
                ..Default::default()
            },
        }
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn apt(&self) -> &str {
        &self.apt
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// True when every field, country included, is empty.
    pub fn is_empty(&self) -> bool {
        [
            &self.street,
            &self.apt,
            &self.city,
            &self.state,
            &self.zip,
            &self.country,
        ]
        .iter()
        .all(|field| field.is_empty())
    }
}

impl PartialEq for PostalAddress {
    fn eq(&self, other: &Self) -> bool {
        eq_ignore_case(&self.apt, &other.apt)
            && eq_ignore_case(&self.street, &other.street)
            && eq_ignore_case(&self.city, &other.city)
            && eq_ignore_case(&self.state, &other.state)
            && eq_ignore_case(&self.country, &other.country)
    }
}

impl Eq for PostalAddress {}

impl Hash for PostalAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ignore_case(&self.apt, state);
        hash_ignore_case(&self.street, state);
        hash_ignore_case(&self.city, state);
        hash_ignore_case(&self.state, state);
        hash_ignore_case(&self.country, state);
    }
}

impl fmt::Display for PostalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            &self.apt,
            &self.street,
            &self.city,
            &self.state,
            &self.zip,
            &self.country,
        ];
        let mut first = true;
        for part in parts.into_iter().filter(|p| !p.is_empty()) {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(part)?;
            first = false;
        }
        Ok(())
    }
}

/// Builder for [`PostalAddress`]. Unset optional fields default to empty.
#[derive(Debug, Clone)]
#[must_use]
pub struct PostalAddressBuilder {
    address: PostalAddress,
}

impl PostalAddressBuilder {
    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.address.street = street.into();
        self
    }

    pub fn apt(mut self, apt: impl Into<String>) -> Self {
        self.address.apt = apt.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.address.city = city.into();
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.address.state = state.into();
        self
    }

    pub fn zip(mut self, zip: impl Into<String>) -> Self {
        self.address.zip = zip.into();
        self
    }

    pub fn build(self) -> PostalAddress {
        self.address
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn central_perk(zip: &str) -> PostalAddress {
        PostalAddress::builder("USA")
            .street("90 Bedford St")
            .apt("19")
            .city("New York")
            .state("NY")
            .zip(zip)
            .build()
    }

    #[test]
    fn test_builder_defaults_optional_fields() {
        let address = PostalAddress::builder("Italy").build();
        assert_eq!(address.country(), "Italy");
        assert_eq!(address.street(), "");
        assert_eq!(address.apt(), "");
        assert_eq!(address.city(), "");
        assert_eq!(address.state(), "");
        assert_eq!(address.zip(), "");
        assert!(!address.is_empty());
        assert!(PostalAddress::default().is_empty());
    }

    #[test]
    fn test_equality_ignores_zip() {
        assert_eq!(central_perk("10014"), central_perk("99999"));
    }

    #[test]
    fn test_hash_ignores_zip() {
        let mut set = HashSet::new();
        set.insert(central_perk("10014"));
        assert!(set.contains(&central_perk("00000")));
    }

    #[test]
    fn test_equality_ignores_case() {
        let shouty = PostalAddress::builder("usa")
            .street("90 BEDFORD ST")
            .apt("19")
            .city("new york")
            .state("ny")
            .build();
        assert_eq!(shouty, central_perk("10014"));
    }

    #[test]
    fn test_equality_checks_other_fields() {
        let other_apt = PostalAddress::builder("USA")
            .street("90 Bedford St")
            .apt("20")
            .city("New York")
            .state("NY")
            .build();
        assert_ne!(other_apt, central_perk("10014"));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            central_perk("10014").to_string(),
            "19, 90 Bedford St, New York, NY, 10014, USA"
        );
    }
}
