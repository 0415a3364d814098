pub mod contact;
pub mod education;
pub mod experience;
pub mod location;
pub mod name;
pub mod skills;

use tracing::{debug, warn};

use crate::analyzer::{EntityAnalyzer, LexiconAnalyzer};
use crate::models::CandidateRecord;
use crate::patterns::PatternLibrary;

/// Sentences mentioning any of these are kept in the analyzer digest
const DIGEST_KEYWORDS: &[&str] = &[
    "name",
    "i am",
    "my name",
    "from",
    "location",
    "live",
    "college",
    "university",
    "degree",
    "graduated",
    "graduate",
    "studied",
    "year",
];

/// Bounds the text handed to the analyzer for very long transcripts
#[derive(Debug, Clone)]
pub struct DigestConfig {
    /// Transcripts at or below this many bytes are analyzed whole
    pub max_full_text: usize,
    /// Maximum keyword-relevant sentences included in the digest
    pub max_relevant_sentences: usize,
    /// Leading and trailing sentences always included
    pub edge_sentences: usize,
    /// Sentences shorter than this are kept as likely introductions
    pub short_sentence_len: usize,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            max_full_text: 2000,
            max_relevant_sentences: 25,
            edge_sentences: 3,
            short_sentence_len: 100,
        }
    }
}

/// Read-only context shared by all extraction calls: the precompiled
/// pattern library and the entity-analyzer backend. Built once at
/// startup and passed in explicitly; extraction itself holds no state.
pub struct ExtractionContext {
    pub patterns: &'static PatternLibrary,
    pub analyzer: Box<dyn EntityAnalyzer>,
    pub digest: DigestConfig,
}

impl ExtractionContext {
    /// Context with a caller-chosen analyzer backend
    pub fn with_analyzer(analyzer: Box<dyn EntityAnalyzer>) -> Self {
        Self {
            patterns: PatternLibrary::global(),
            analyzer,
            digest: DigestConfig::default(),
        }
    }

    /// Context with the built-in lexicon analyzer
    pub fn lexicon() -> Self {
        Self::with_analyzer(Box::new(LexiconAnalyzer::new()))
    }
}

/// Run the full extraction pipeline over one transcript.
///
/// Always returns a record: an empty transcript yields all-`None`
/// fields, an unavailable analyzer only degrades the entity-dependent
/// ones. Every field extractor runs exactly once.
pub async fn extract_candidate(transcript: &str, ctx: &ExtractionContext) -> CandidateRecord {
    let mut record = CandidateRecord::default();

    if transcript.trim().is_empty() {
        warn!("transcript is empty, returning blank record");
        return record;
    }

    let patterns = ctx.patterns;

    // 1. Cheap regex passes first, so a slow or missing analyzer never
    //    costs us these fields
    record.email = contact::extract_email(transcript, patterns);
    record.phone = contact::extract_phone(transcript, patterns);
    record.experience = experience::extract_experience(transcript, patterns);
    record.skills = skills::extract_skills(transcript);

    // 2. One analyzer invocation over a bounded digest
    let digest = build_digest(transcript, &ctx.digest);
    let annotation = match ctx.analyzer.annotate(&digest).await {
        Ok(annotation) => Some(annotation),
        Err(err) => {
            warn!(
                backend = ctx.analyzer.name(),
                "entity analysis unavailable ({err}), continuing with regex-only fields"
            );
            None
        }
    };
    let annotation = annotation.as_ref();

    // 3. Entity-dependent passes against the single cached result
    record.name = name::extract_name(annotation);
    record.location = location::extract_location(transcript, patterns, annotation);
    record.graduation_year = education::extract_graduation_year(transcript, patterns, annotation);
    record.college = education::extract_college(annotation);
    record.degree = education::extract_degree(transcript, patterns, annotation);

    debug!(fields = record.populated_fields(), "extraction complete");
    record
}

/// For long transcripts, keep only keyword-relevant sentences plus the
/// leading and trailing context so entity-analysis cost stays bounded.
fn build_digest(transcript: &str, config: &DigestConfig) -> String {
    if transcript.len() <= config.max_full_text {
        return transcript.to_string();
    }

    // A crude split is fine here: the digest only bounds analyzer cost,
    // the analyzer re-segments whatever it receives
    let sentences: Vec<&str> = transcript
        .split(['.', '!', '?', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let relevant: Vec<&str> = sentences
        .iter()
        .copied()
        .filter(|s| {
            let lower = s.to_lowercase();
            DIGEST_KEYWORDS.iter().any(|k| lower.contains(k)) || s.len() < config.short_sentence_len
        })
        .take(config.max_relevant_sentences)
        .collect();

    if relevant.is_empty() {
        let mut end = config.max_full_text.min(transcript.len());
        while !transcript.is_char_boundary(end) {
            end -= 1;
        }
        return transcript[..end].to_string();
    }

    let mut parts = relevant;
    parts.extend(sentences.iter().copied().take(config.edge_sentences));
    let tail_from = sentences.len().saturating_sub(config.edge_sentences);
    parts.extend(sentences[tail_from..].iter().copied());
    parts.join(". ")
}

/// Capitalize the first letter of every word, the rest lowercased
pub(crate) fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() && !prev_alpha {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        prev_alpha = c.is_alphabetic();
    }
    out
}
