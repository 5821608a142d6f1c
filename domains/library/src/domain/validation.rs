//! Validation helpers and constants for API handlers

use regex::Regex;

lazy_static::lazy_static! {
    /// ISBN-13 validation regex: exactly 13 digits, no separators
    pub static ref ISBN13_REGEX: Regex = Regex::new(r"^\d{13}$").unwrap();
}

/// Check whether a string is a bare 13-digit ISBN
pub fn is_isbn13(value: &str) -> bool {
    ISBN13_REGEX.is_match(value)
}
