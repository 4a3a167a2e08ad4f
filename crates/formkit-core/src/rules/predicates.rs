//! Stock predicates for common format checks.

use super::checks::PredicateCheck;
use regex::Regex;
use std::sync::OnceLock;

// Pre-compiled regex patterns
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        // RFC 5322 simplified email regex
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
        ).unwrap()
    })
}

/// Email shape check.
pub fn email() -> PredicateCheck {
    PredicateCheck::new(|value| email_regex().is_match(value)).with_message("Invalid email")
}

/// All-digits check for phone-style numeric inputs.
pub fn digits() -> PredicateCheck {
    PredicateCheck::new(|value| value.chars().all(|c| c.is_ascii_digit()))
        .with_message("Must contain digits only")
}
