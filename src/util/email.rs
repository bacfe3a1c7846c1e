use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld`: a permissive shape check, not RFC 5322.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// Whether `address` looks like an email address.
pub fn validate_email(address: &str) -> bool {
    EMAIL_PATTERN.is_match(address)
}
