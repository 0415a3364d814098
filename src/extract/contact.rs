use crate::patterns::PatternLibrary;
use crate::validate;

/// Extract the first syntactically valid email address, lowercased.
///
/// No disambiguation between multiple addresses: scanning stops at the
/// first candidate the validator accepts.
pub fn extract_email(transcript: &str, patterns: &PatternLibrary) -> Option<String> {
    patterns
        .email
        .find_iter(transcript)
        .map(|m| m.as_str())
        .find(|candidate| validate::is_valid_email(candidate))
        .map(|candidate| candidate.to_lowercase())
}

/// Extract the first phone-shaped match that passes validation, with
/// separators stripped. A leading `+` is preserved.
pub fn extract_phone(transcript: &str, patterns: &PatternLibrary) -> Option<String> {
    patterns
        .phone
        .find_iter(transcript)
        .map(|m| m.as_str().trim())
        .find(|candidate| validate::is_valid_phone(candidate))
        .map(normalize_phone)
}

fn normalize_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> &'static PatternLibrary {
        PatternLibrary::global()
    }

    #[test]
    fn test_email_first_match_lowercased() {
        let result = extract_email("write to Priya.S@Example.COM anytime", patterns());
        assert_eq!(result.as_deref(), Some("priya.s@example.com"));
    }

    #[test]
    fn test_email_none_when_absent() {
        assert_eq!(extract_email("no contact details here", patterns()), None);
    }

    #[test]
    fn test_email_skips_invalid_scans_to_valid() {
        // The first email-like token has no dotted domain and is never
        // a candidate; the dotted one is returned.
        let text = "ping me at bad@localhost or good@example.com";
        assert_eq!(
            extract_email(text, patterns()).as_deref(),
            Some("good@example.com")
        );
    }

    #[test]
    fn test_phone_normalizes_separators() {
        let result = extract_phone("call +91-98765 43210 after six", patterns());
        assert_eq!(result.as_deref(), Some("+919876543210"));
    }

    #[test]
    fn test_phone_rejects_short_digit_runs() {
        assert_eq!(extract_phone("room 123 4567", patterns()), None);
    }

    #[test]
    fn test_phone_parenthesized_area_code() {
        let result = extract_phone("my number is (555) 123-4567", patterns());
        assert_eq!(result.as_deref(), Some("5551234567"));
    }
}
