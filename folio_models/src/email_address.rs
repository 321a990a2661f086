use std::sync::LazyLock;

use regex::Regex;

use crate::macros::nutype_string;

/// A local part, an `@` and a domain containing at least one dot, without
/// any whitespace.
pub static EMAIL_ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

nutype_string!(EmailAddress(validate(regex = EMAIL_ADDRESS_REGEX)));

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self
    }
}
