use std::collections::BTreeSet;

use crate::patterns::vocab::{MULTI_WORD_SKILLS, SKILL_SET};

use super::title_case;

/// Extract recognized skills.
///
/// Single-word skills are found by tokenizing the transcript once and
/// doing an O(1) set-membership lookup per token; multi-word skills by a
/// substring scan of the lowercased transcript. Matches are deduplicated,
/// title-cased, sorted alphabetically, and comma-joined.
pub fn extract_skills(transcript: &str) -> Option<String> {
    let lower = transcript.to_lowercase();
    let mut found: BTreeSet<String> = BTreeSet::new();

    for token in lower.split_whitespace() {
        let token = trim_token(token);
        if SKILL_SET.contains(token) {
            found.insert(title_case(token));
        }
    }

    for skill in MULTI_WORD_SKILLS.iter() {
        if lower.contains(skill) {
            found.insert(title_case(skill));
        }
    }

    if found.is_empty() {
        None
    } else {
        Some(found.into_iter().collect::<Vec<_>>().join(", "))
    }
}

/// Strip phrase punctuation from token edges without touching characters
/// that belong to skill names ("c++", "c#", ".net").
fn trim_token(token: &str) -> &str {
    token
        .trim_start_matches(['"', '(', ',', ';', ':', '!', '?'])
        .trim_end_matches(['"', ')', ',', '.', ';', ':', '!', '?'])
}
