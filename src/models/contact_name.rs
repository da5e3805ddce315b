//! Name of a contact.

use crate::domain::text::{eq_ignore_case, hash_ignore_case};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A contact's name: a required first name plus optional last and middle names.
///
/// Names compare equal when all three parts match ignoring case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactName {
    first_name: String,
    last_name: String,
    middle_name: String,
}

impl ContactName {
    /// Start building a name from its required first name.
    pub fn builder(first_name: impl Into<String>) -> ContactNameBuilder {
        ContactNameBuilder {
            first_name: first_name.into(),
            last_name: String::new(),
            middle_name: String::new(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn middle_name(&self) -> &str {
        &self.middle_name
    }
}

impl PartialEq for ContactName {
    fn eq(&self, other: &Self) -> bool {
        eq_ignore_case(&self.first_name, &other.first_name)
            && eq_ignore_case(&self.last_name, &other.last_name)
            && eq_ignore_case(&self.middle_name, &other.middle_name)
    }
}

impl Eq for ContactName {}

impl Hash for ContactName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ignore_case(&self.first_name, state);
        hash_ignore_case(&self.last_name, state);
        hash_ignore_case(&self.middle_name, state);
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [&self.first_name, &self.middle_name, &self.last_name];
        let mut first = true;
        for part in parts.into_iter().filter(|p| !p.is_empty()) {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(part)?;
            first = false;
        }
        Ok(())
    }
}

/// Builder for [`ContactName`]. Unset optional parts default to empty.
#[derive(Debug, Clone)]
#[must_use]
pub struct ContactNameBuilder {
    first_name: String,
    last_name: String,
    middle_name: String,
}

impl ContactNameBuilder {
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn middle_name(mut self, middle_name: impl Into<String>) -> Self {
        self.middle_name = middle_name.into();
        self
    }

    pub fn build(self) -> ContactName {
        ContactName {
            first_name: self.first_name,
            last_name: self.last_name,
            middle_name: self.middle_name,
        }
    }
}
