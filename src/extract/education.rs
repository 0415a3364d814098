use crate::models::{Annotation, EntityLabel};
use crate::patterns::PatternLibrary;
use crate::patterns::vocab::{
    GRADUATION_KEYWORDS, INSTITUTION_KEYWORDS, SPECIALIZATIONS_LONGEST_FIRST,
};
use crate::validate;

use super::title_case;

/// Context radius, in bytes, searched for a degree-level abbreviation
/// around an explicit "degree in ..." mention
const LEVEL_WINDOW: usize = 200;

/// Length bounds for an acceptable college name
const COLLEGE_MIN_LEN: usize = 5;
const COLLEGE_MAX_LEN: usize = 100;

/// Phrases that leak into ORG spans from the surrounding speech
const LEAD_IN_PHRASES: &[&str] = &[
    "i graduated from",
    "graduated from",
    "i studied at",
    "studied at",
    "i am from",
    "from",
    "at",
];

/// Cues that mark a sentence as talking about skills rather than
/// education; specializations found there are not degree subjects
const SKILL_CUES: &[&str] = &["skill", "know", "expert", "proficient", "worked with", "good at"];

/// Extract the graduation year.
///
/// Years inside graduation-context sentences win; when several valid
/// years share that context the most recent one is returned. Without a
/// context hit (or without sentence segmentation at all) the whole
/// transcript is scanned under the same validity rule.
pub fn extract_graduation_year(
    transcript: &str,
    patterns: &PatternLibrary,
    annotation: Option<&Annotation>,
) -> Option<i32> {
    if let Some(annotation) = annotation {
        let mut best: Option<i32> = None;
        for sentence in &annotation.sentences {
            let lower = sentence.text.to_lowercase();
            if !GRADUATION_KEYWORDS.iter().any(|k| lower.contains(k)) {
                continue;
            }
            for caps in patterns.year.captures_iter(&sentence.text) {
                if let Ok(year) = caps[1].parse::<i32>() {
                    if validate::is_valid_year(year) {
                        best = Some(best.map_or(year, |b| b.max(year)));
                    }
                }
            }
        }
        if best.is_some() {
            return best;
        }
    }

    let mut best: Option<i32> = None;
    for caps in patterns.year.captures_iter(transcript) {
        if let Ok(year) = caps[1].parse::<i32>() {
            if validate::is_valid_year(year) {
                best = Some(best.map_or(year, |b| b.max(year)));
            }
        }
    }
    best
}

/// Extract the college from ORG spans.
///
/// Only spans mentioning an institution keyword qualify; lead-in speech
/// fragments are stripped and the first span with a plausible length wins.
pub fn extract_college(annotation: Option<&Annotation>) -> Option<String> {
    let annotation = annotation?;

    for span in annotation.spans_with_label(EntityLabel::Org) {
        let lower = span.text.to_lowercase();
        if !INSTITUTION_KEYWORDS.iter().any(|k| lower.contains(k)) {
            continue;
        }

        let cleaned = strip_lead_in(span.text.trim());
        let bare_keyword = INSTITUTION_KEYWORDS.contains(&cleaned.to_lowercase().as_str());
        if (COLLEGE_MIN_LEN..=COLLEGE_MAX_LEN).contains(&cleaned.len()) && !bare_keyword {
            return Some(cleaned.to_string());
        }
    }

    None
}

fn strip_lead_in(text: &str) -> &str {
    for phrase in LEAD_IN_PHRASES {
        let n = phrase.len();
        if text.len() > n + 1
            && text.is_char_boundary(n)
            && text[..n].eq_ignore_ascii_case(phrase)
            && text.as_bytes()[n] == b' '
        {
            return text[n + 1..].trim_start();
        }
    }
    text
}

/// Extract the degree, the most involved field.
///
/// Resolution ladder:
/// (a) explicit "degree in <specialization>" phrasing, matched against
///     the specialization table longest-first, with the degree level
///     taken from the nearest abbreviation in a bounded context window;
/// (b) a degree abbreviation in some sentence, combined with a
///     specialization found in the same or an adjacent sentence;
/// (c) the bare abbreviation when no specialization is nearby;
/// (d) nothing.
/// Step (a) is pure regex; (b) and (c) need sentence segmentation.
pub fn extract_degree(
    transcript: &str,
    patterns: &PatternLibrary,
    annotation: Option<&Annotation>,
) -> Option<String> {
    // (a) explicit "degree in <specialization>"
    if let Some(caps) = patterns.degree_in.captures(transcript) {
        let mentioned = caps[1].trim().to_lowercase();
        let matched = SPECIALIZATIONS_LONGEST_FIRST
            .iter()
            .find(|spec| contains_phrase(&mentioned, spec));
        if let Some(spec) = matched {
            let mention_at = caps.get(0).expect("whole match").start();
            return Some(match nearest_level(transcript, mention_at, patterns) {
                Some(level) => format!("{} in {}", level, title_case(spec)),
                None => title_case(spec),
            });
        }
    }

    // (b)/(c) work sentence by sentence
    let annotation = annotation?;
    let sentences = &annotation.sentences;

    for (idx, sentence) in sentences.iter().enumerate() {
        let Some(level) = sentence_level(&sentence.text, patterns) else {
            continue;
        };

        // (b) specialization in the same or an adjacent sentence,
        // longer phrases always preferred over their substrings
        for spec in SPECIALIZATIONS_LONGEST_FIRST.iter() {
            for nidx in neighborhood(idx, sentences.len()) {
                let neighbor = sentences[nidx].text.to_lowercase();
                if nidx != idx && SKILL_CUES.iter().any(|cue| neighbor.contains(cue)) {
                    continue;
                }
                if contains_phrase(&neighbor, spec) {
                    return Some(format!("{} in {}", level, title_case(spec)));
                }
            }
        }

        // (c) abbreviation alone
        return Some(level.to_string());
    }

    None
}

/// First degree abbreviation in the sentence, by pattern priority.
/// The generic "bachelor"/"master" forms are level hints for step (a)
/// only; plain speech uses them too often ("master python") to treat
/// them as a degree mention on their own.
fn sentence_level(text: &str, patterns: &PatternLibrary) -> Option<&'static str> {
    patterns
        .degree_abbrev
        .iter()
        .filter(|(_, canonical)| !matches!(*canonical, "Bachelor's" | "Master's"))
        .find(|(re, _)| re.is_match(text))
        .map(|(_, canonical)| *canonical)
}

/// The degree abbreviation closest to `mention`, searched in a bounded
/// window on both sides
fn nearest_level(
    transcript: &str,
    mention: usize,
    patterns: &PatternLibrary,
) -> Option<&'static str> {
    let mut start = mention.saturating_sub(LEVEL_WINDOW);
    while !transcript.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (mention + LEVEL_WINDOW).min(transcript.len());
    while !transcript.is_char_boundary(end) {
        end += 1;
    }
    let window = &transcript[start..end];
    let mention_rel = mention - start;

    let mut best: Option<(usize, &'static str)> = None;
    for (re, canonical) in &patterns.degree_abbrev {
        for m in re.find_iter(window) {
            let dist = m.start().abs_diff(mention_rel);
            if best.map_or(true, |(d, _)| dist < d) {
                best = Some((dist, canonical));
            }
        }
    }
    best.map(|(_, canonical)| canonical)
}

/// Same sentence first, then the previous and next ones
fn neighborhood(idx: usize, len: usize) -> Vec<usize> {
    let mut indices = vec![idx];
    if idx > 0 {
        indices.push(idx - 1);
    }
    if idx + 1 < len {
        indices.push(idx + 1);
    }
    indices
}

/// Word-bounded containment: "it" must not match inside "digital"
fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    for (pos, _) in haystack.match_indices(phrase) {
        let before_ok = haystack[..pos]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let after_ok = haystack[pos + phrase.len()..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
    }
    false
}
