use crate::patterns::PatternLibrary;

/// Plausible range for years of work experience
const MAX_EXPERIENCE_YEARS: u32 = 50;

/// Extract years of work experience.
///
/// The surface patterns are tried in priority order; the first pattern
/// with an in-range match decides, regardless of what later patterns
/// would have found. The value is normalized to "<n> years".
pub fn extract_experience(transcript: &str, patterns: &PatternLibrary) -> Option<String> {
    for pattern in &patterns.experience {
        if let Some(caps) = pattern.captures(transcript) {
            let years: u32 = caps[1].parse().ok()?;
            if years >= 1 && years <= MAX_EXPERIENCE_YEARS {
                return Some(format!("{} years", years));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> &'static PatternLibrary {
        PatternLibrary::global()
    }

    #[test]
    fn test_years_of_experience_phrase() {
        let result = extract_experience("I have 3 years of experience in backend", patterns());
        assert_eq!(result.as_deref(), Some("3 years"));
    }

    #[test]
    fn test_experience_of_phrase() {
        let result = extract_experience("total experience of 7 years across two jobs", patterns());
        assert_eq!(result.as_deref(), Some("7 years"));
    }

    #[test]
    fn test_plus_suffix_and_yrs_abbreviation() {
        let result = extract_experience("about 5+ yrs experience with cloud", patterns());
        assert_eq!(result.as_deref(), Some("5 years"));
    }

    #[test]
    fn test_pattern_priority_decides() {
        // Both the first and third ladder rungs could match; the first
        // rung wins even though the third appears earlier in the text.
        let text = "spent 9 years working abroad, and I have 4 years of experience in Rust";
        assert_eq!(
            extract_experience(text, patterns()).as_deref(),
            Some("4 years")
        );
    }

    #[test]
    fn test_out_of_range_years_rejected() {
        assert_eq!(extract_experience("I have 0 years of experience", patterns()), None);
        assert_eq!(
            extract_experience("I have 80 years of experience", patterns()),
            None
        );
    }

    #[test]
    fn test_no_experience_mention() {
        assert_eq!(extract_experience("I enjoy hiking and chess", patterns()), None);
    }
}
