//! Pure predicate checks applied to extracted candidates before a field is
//! accepted. All of these are total functions: they never fail, they only
//! answer yes or no.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email shape regex")
});

static NAME_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z\s\-']{1,49}$").expect("name shape regex"));

/// True iff `s` has `local@domain.tld` shape with a non-empty local part
/// and a domain containing at least one dot.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_SHAPE.is_match(s)
}

/// True iff, after stripping separators, the digit count is 10-15.
/// A leading `+` country-code marker is allowed and not counted.
pub fn is_valid_phone(s: &str) -> bool {
    let digits = s.chars().filter(|c| c.is_ascii_digit()).count();
    (10..=15).contains(&digits)
}

/// True iff 1950 <= y <= 2030
pub fn is_valid_year(y: i32) -> bool {
    (1950..=2030).contains(&y)
}

/// True iff `s` looks like a person's name: starts with a letter, only
/// letters, spaces, hyphens, and apostrophes, 2-50 characters.
pub fn is_valid_name(s: &str) -> bool {
    NAME_SHAPE.is_match(s)
}
