//! Pattern checks for phone numbers and email addresses.
//!
//! Both validators accept the empty string, which stands for "not provided".

use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-0-9*#+]+$").expect("Failed to compile phone regex"));

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9_-]+\.[a-zA-Z0-9_.-]+$")
        .expect("Failed to compile email regex")
});

/// Returns true if `phone` is empty or made only of digits and `*#+-`.
pub fn is_valid_phone_number(phone: &str) -> bool {
    phone.is_empty() || PHONE_REGEX.is_match(phone)
}

/// Returns true if `email` is empty or looks like `local@domain.tld`.
pub fn is_valid_email_address(email: &str) -> bool {
    email.is_empty() || EMAIL_REGEX.is_match(email)
}
