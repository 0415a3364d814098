//! Built-in rule-based entity tagger.
//!
//! Tags PERSON spans from introduction cues, ORG spans from capitalized
//! institution runs, and GPE spans from a toponym gazetteer. No external
//! model, never unavailable; precision over recall. The field extractors
//! apply their own vocabulary filters on top of these spans.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::models::{Annotation, EntityLabel, EntitySpan, Sentence};
use crate::patterns::vocab::{INSTITUTION_KEYWORDS, NON_NAME_SET, TOPONYM_SET};

use super::{AnalyzerError, EntityAnalyzer};

/// Introduction phrases that precede a speaker's own name
static NAME_CUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:my name is|i am|i'm|this is|myself)\s+").expect("name cue regex")
});

/// Connector words allowed inside an institution run
const RUN_CONNECTORS: &[&str] = &["of", "and", "for", "the"];

/// Maximum tokens captured for a person name
const MAX_NAME_TOKENS: usize = 4;

/// Rule-based analyzer backed by the crate's vocabularies
pub struct LexiconAnalyzer;

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntityAnalyzer for LexiconAnalyzer {
    async fn annotate(&self, text: &str) -> Result<Annotation, AnalyzerError> {
        Ok(annotate(text))
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

/// Segment and tag without any external model
fn annotate(text: &str) -> Annotation {
    let sentences = segment_sentences(text);
    let mut spans = Vec::new();

    for (idx, sentence) in sentences.iter().enumerate() {
        let words = tokenize(&sentence.text);
        tag_persons(sentence, idx, &words, &mut spans);
        tag_orgs(sentence, idx, &words, &mut spans);
        tag_gpes(sentence, idx, &words, &mut spans);
    }

    Annotation {
        spans: resolve_overlaps(spans),
        sentences,
    }
}

/// Split into sentences on terminal punctuation.
///
/// Conservative rule: a period only ends a sentence when followed by
/// whitespace and a capitalized continuation (or end of text), so degree
/// abbreviations ("B.E. in 2015") and email addresses survive intact.
/// Newlines always break. Unpunctuated speech collapses to one sentence.
fn segment_sentences(text: &str) -> Vec<Sentence> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let (_, c) = chars[i];
        let is_terminal = matches!(c, '.' | '!' | '?');
        let is_newline = c == '\n';

        if is_terminal || is_newline {
            // Absorb a run of terminal punctuation ("..", "?!")
            let mut j = i + 1;
            while j < chars.len() && matches!(chars[j].1, '.' | '!' | '?') {
                j += 1;
            }
            let end = if j < chars.len() { chars[j].0 } else { text.len() };

            let breaks = if is_newline || j >= chars.len() {
                true
            } else {
                let mut k = j;
                let mut saw_space = false;
                while k < chars.len() && chars[k].1.is_whitespace() {
                    saw_space = true;
                    k += 1;
                }
                saw_space && (k >= chars.len() || chars[k].1.is_uppercase())
            };

            if breaks {
                push_sentence(text, start, end, &mut sentences);
                start = end;
                i = j;
                continue;
            }
        }
        i += 1;
    }

    push_sentence(text, start, text.len(), &mut sentences);
    sentences
}

fn push_sentence(text: &str, start: usize, end: usize, sentences: &mut Vec<Sentence>) {
    let raw = &text[start..end];
    let leading = raw.len() - raw.trim_start().len();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    sentences.push(Sentence {
        text: trimmed.to_string(),
        start: start + leading,
        end: start + leading + trimmed.len(),
    });
}

/// A whitespace token with edge punctuation trimmed
struct Word<'a> {
    text: &'a str,
    /// Byte offset of the trimmed token within the sentence text
    start: usize,
    end: usize,
    /// Raw token ended with phrase-breaking punctuation
    trailing_break: bool,
}

impl Word<'_> {
    fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(|c| c.is_uppercase())
    }

    fn lower(&self) -> String {
        self.text.to_lowercase()
    }
}

fn tokenize(text: &str) -> Vec<Word<'_>> {
    const EDGE_PUNCT: &[char] = &[',', '.', ';', ':', '!', '?', '"', '(', ')'];
    const BREAK_PUNCT: &[char] = &[',', '.', ';', ':', '!', '?'];

    let mut words = Vec::new();
    let mut token_start: Option<usize> = None;

    let boundary = std::iter::once((text.len(), ' '));
    for (i, c) in text.char_indices().chain(boundary) {
        if c.is_whitespace() {
            if let Some(s) = token_start.take() {
                let raw = &text[s..i];
                let trailing_break = raw.ends_with(BREAK_PUNCT);
                let left = raw.trim_start_matches(EDGE_PUNCT);
                let start = s + (raw.len() - left.len());
                let trimmed = left.trim_end_matches(EDGE_PUNCT);
                if !trimmed.is_empty() {
                    words.push(Word {
                        text: trimmed,
                        start,
                        end: start + trimmed.len(),
                        trailing_break,
                    });
                }
            }
        } else if token_start.is_none() {
            token_start = Some(i);
        }
    }

    words
}

/// PERSON spans: a capitalized run right after an introduction cue, or a
/// sentence-initial capitalized run followed by "here"/"speaking".
fn tag_persons(sentence: &Sentence, idx: usize, words: &[Word<'_>], spans: &mut Vec<EntitySpan>) {
    for cue in NAME_CUE.find_iter(&sentence.text) {
        let first = words.iter().position(|w| w.start >= cue.end());
        if let Some(first) = first {
            if let Some((start, end)) = capitalized_run(words, first, MAX_NAME_TOKENS) {
                push_span(sentence, idx, start, end, EntityLabel::Person, spans);
            }
        }
    }

    // "<Name> here" / "<Name> speaking" openings
    if let Some((start, end)) = capitalized_run(words, 0, MAX_NAME_TOKENS) {
        let last = words
            .iter()
            .position(|w| w.end == end)
            .expect("run ends on a token");
        if let Some(next) = words.get(last + 1) {
            if matches!(next.lower().as_str(), "here" | "speaking") {
                push_span(sentence, idx, start, end, EntityLabel::Person, spans);
            }
        }
    }
}

/// Collect a run of capitalized, non-stopword tokens starting at `from`.
/// A token carrying trailing punctuation closes the run.
fn capitalized_run(words: &[Word<'_>], from: usize, max_tokens: usize) -> Option<(usize, usize)> {
    let mut end = None;
    let mut start = None;

    for word in words.iter().skip(from).take(max_tokens) {
        if !word.is_capitalized() || NON_NAME_SET.contains(word.lower().as_str()) {
            break;
        }
        if start.is_none() {
            start = Some(word.start);
        }
        end = Some(word.end);
        if word.trailing_break {
            break;
        }
    }

    start.zip(end)
}

/// ORG spans: capitalized runs (connector words allowed inside) that
/// mention an institution keyword, e.g. "ABC Institute of Technology".
fn tag_orgs(sentence: &Sentence, idx: usize, words: &[Word<'_>], spans: &mut Vec<EntitySpan>) {
    let mut i = 0;
    while i < words.len() {
        if !words[i].is_capitalized() {
            i += 1;
            continue;
        }

        // Extend the run; connectors may join but not end it
        let mut run: Vec<usize> = vec![i];
        let mut j = i;
        while j + 1 < words.len() && !words[j].trailing_break {
            let next = &words[j + 1];
            let is_connector = RUN_CONNECTORS.contains(&next.lower().as_str());
            if next.is_capitalized() || is_connector {
                run.push(j + 1);
                j += 1;
            } else {
                break;
            }
        }
        while run
            .last()
            .is_some_and(|&k| RUN_CONNECTORS.contains(&words[k].lower().as_str()))
        {
            run.pop();
        }

        if run.len() >= 2 {
            let mentions_institution = run
                .iter()
                .any(|&k| INSTITUTION_KEYWORDS.contains(&words[k].lower().as_str()));
            if mentions_institution {
                let start = words[run[0]].start;
                let end = words[*run.last().expect("non-empty run")].end;
                push_span(sentence, idx, start, end, EntityLabel::Org, spans);
            }
        }

        i = j + 1;
    }
}

/// GPE spans: gazetteer lookup, bigrams before unigrams so "new york"
/// or "tamil nadu" is not split. Casing is not required; speech-to-text
/// output often lowercases place names.
fn tag_gpes(sentence: &Sentence, idx: usize, words: &[Word<'_>], spans: &mut Vec<EntitySpan>) {
    let mut consumed = vec![false; words.len()];

    for i in 0..words.len().saturating_sub(1) {
        if words[i].trailing_break {
            continue;
        }
        let bigram = format!("{} {}", words[i].lower(), words[i + 1].lower());
        if TOPONYM_SET.contains(bigram.as_str()) {
            push_span(
                sentence,
                idx,
                words[i].start,
                words[i + 1].end,
                EntityLabel::Gpe,
                spans,
            );
            consumed[i] = true;
            consumed[i + 1] = true;
        }
    }

    for (i, word) in words.iter().enumerate() {
        if !consumed[i] && TOPONYM_SET.contains(word.lower().as_str()) {
            push_span(sentence, idx, word.start, word.end, EntityLabel::Gpe, spans);
        }
    }
}

fn push_span(
    sentence: &Sentence,
    idx: usize,
    rel_start: usize,
    rel_end: usize,
    label: EntityLabel,
    spans: &mut Vec<EntitySpan>,
) {
    spans.push(EntitySpan {
        text: sentence.text[rel_start..rel_end].to_string(),
        label,
        start: sentence.start + rel_start,
        end: sentence.start + rel_end,
        sentence: idx,
    });
}

/// Drop spans contained in or overlapping a longer span, longest wins.
/// Keeps "Delhi University" (ORG) over the "Delhi" (GPE) inside it.
fn resolve_overlaps(mut spans: Vec<EntitySpan>) -> Vec<EntitySpan> {
    spans.sort_by(|a, b| {
        let len_a = a.end - a.start;
        let len_b = b.end - b.start;
        len_b.cmp(&len_a).then(a.start.cmp(&b.start))
    });

    let mut kept: Vec<EntitySpan> = Vec::new();
    for span in spans {
        let overlaps = kept.iter().any(|k| span.start < k.end && k.start < span.end);
        if !overlaps {
            kept.push(span);
        }
    }

    kept.sort_by_key(|s| s.start);
    kept
}
