use serde::{Deserialize, Serialize};

/// Entity category assigned by the analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    /// A person's name
    Person,
    /// An organization (company, institution)
    Org,
    /// A geopolitical entity (country, region, city)
    Gpe,
}

impl EntityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Org => "ORG",
            Self::Gpe => "GPE",
        }
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A labeled substring identified by the entity analyzer.
///
/// Offsets are byte positions into the analyzed text. Spans are derived
/// once per transcript and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitySpan {
    /// The matched text
    pub text: String,
    /// Entity category
    pub label: EntityLabel,
    /// Start byte offset in the analyzed text
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Index of the containing sentence
    pub sentence: usize,
}

/// A sentence produced by the analyzer's segmentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence text, trimmed
    pub text: String,
    /// Start byte offset in the analyzed text
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

/// Result of one analyzer invocation: typed entity spans plus sentence
/// segmentation over the same text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Annotation {
    /// All entity spans in document order
    pub spans: Vec<EntitySpan>,
    /// All sentences in document order
    pub sentences: Vec<Sentence>,
}

impl Annotation {
    /// Iterate over spans with the given label, in document order
    pub fn spans_with_label(&self, label: EntityLabel) -> impl Iterator<Item = &EntitySpan> {
        self.spans.iter().filter(move |s| s.label == label)
    }

    /// The sentence containing the given span, if the index is valid
    pub fn sentence_of(&self, span: &EntitySpan) -> Option<&Sentence> {
        self.sentences.get(span.sentence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_with_label_filters() {
        let annotation = Annotation {
            spans: vec![
                EntitySpan {
                    text: "Priya Sharma".to_string(),
                    label: EntityLabel::Person,
                    start: 11,
                    end: 23,
                    sentence: 0,
                },
                EntitySpan {
                    text: "Chennai".to_string(),
                    label: EntityLabel::Gpe,
                    start: 40,
                    end: 47,
                    sentence: 0,
                },
            ],
            sentences: vec![Sentence {
                text: "My name is Priya Sharma, I live in Chennai.".to_string(),
                start: 0,
                end: 43,
            }],
        };

        let persons: Vec<_> = annotation.spans_with_label(EntityLabel::Person).collect();
        assert_eq!(persons.len(), 1);
        assert_eq!(persons[0].text, "Priya Sharma");

        let sentence = annotation.sentence_of(persons[0]).unwrap();
        assert!(sentence.text.contains("Priya"));
    }

    #[test]
    fn test_label_display() {
        assert_eq!(EntityLabel::Person.to_string(), "PERSON");
        assert_eq!(EntityLabel::Gpe.as_str(), "GPE");
    }
}
