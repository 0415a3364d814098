use crate::models::{Annotation, EntityLabel};
use crate::patterns::PatternLibrary;
use crate::patterns::vocab::{EXCLUDED_LOCATION_SET, SKILL_SET};

use super::title_case;

/// Minimum length for a location candidate; anything shorter is noise
const MIN_LOCATION_LEN: usize = 3;

/// Extract the candidate's location with two-tier resolution.
///
/// Tier 1 matches the curated city gazetteer directly against the
/// transcript; tier 2 falls back to GPE spans from the analyzer. Both
/// tiers reject candidates colliding with the skills vocabulary, so a
/// language name that doubles as a toponym never becomes a location.
pub fn extract_location(
    transcript: &str,
    patterns: &PatternLibrary,
    annotation: Option<&Annotation>,
) -> Option<String> {
    // Tier 1: known city names, first non-colliding match
    for caps in patterns.city.captures_iter(transcript) {
        let city = caps[1].to_lowercase();
        if !SKILL_SET.contains(city.as_str()) {
            return Some(title_case(&city));
        }
    }

    // Tier 2: GPE spans, longest surviving candidate wins
    let annotation = annotation?;
    annotation
        .spans_with_label(EntityLabel::Gpe)
        .map(|span| span.text.trim())
        .filter(|text| is_location_candidate(text))
        .max_by_key(|text| text.len())
        .map(title_case)
}

fn is_location_candidate(text: &str) -> bool {
    let lower = text.to_lowercase();
    text.len() >= MIN_LOCATION_LEN
        && !text.chars().any(|c| c.is_ascii_digit())
        && !EXCLUDED_LOCATION_SET.contains(lower.as_str())
}
