use crate::models::{Annotation, EntityLabel};
use crate::patterns::vocab::NON_NAME_SET;
use crate::validate;

use super::title_case;

/// Extract the candidate's name from PERSON spans.
///
/// Entirely analyzer-dependent: with no annotation there is no name.
/// Spans made up of greetings, fillers, or pronouns are filtered out;
/// the first span passing the name-shape rule wins.
pub fn extract_name(annotation: Option<&Annotation>) -> Option<String> {
    let annotation = annotation?;

    annotation
        .spans_with_label(EntityLabel::Person)
        .map(|span| span.text.trim())
        .filter(|text| !is_non_name(text))
        .find(|text| validate::is_valid_name(text))
        .map(title_case)
}

/// True when every word of the span is a known non-name word.
/// Vacuously true for blank spans, which is the rejection we want.
fn is_non_name(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.split_whitespace().all(|w| NON_NAME_SET.contains(w))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntitySpan, Sentence};

    fn annotation_with_persons(names: &[&str]) -> Annotation {
        let spans = names
            .iter()
            .map(|name| EntitySpan {
                text: name.to_string(),
                label: EntityLabel::Person,
                start: 0,
                end: name.len(),
                sentence: 0,
            })
            .collect();
        Annotation {
            spans,
            sentences: vec![Sentence {
                text: "stub".to_string(),
                start: 0,
                end: 4,
            }],
        }
    }

    #[test]
    fn test_first_valid_person_wins() {
        let annotation = annotation_with_persons(&["Priya Sharma", "Ravi Kumar"]);
        assert_eq!(
            extract_name(Some(&annotation)).as_deref(),
            Some("Priya Sharma")
        );
    }

    #[test]
    fn test_greetings_and_fillers_filtered() {
        let annotation = annotation_with_persons(&["Hello", "Good Morning", "Asha Rao"]);
        assert_eq!(extract_name(Some(&annotation)).as_deref(), Some("Asha Rao"));
    }

    #[test]
    fn test_shape_rule_rejects_degenerate_spans() {
        let annotation = annotation_with_persons(&["X", "12345"]);
        assert_eq!(extract_name(Some(&annotation)), None);
    }

    #[test]
    fn test_no_annotation_means_no_name() {
        assert_eq!(extract_name(None), None);
    }

    #[test]
    fn test_name_is_title_cased() {
        let annotation = annotation_with_persons(&["priya sharma"]);
        assert_eq!(
            extract_name(Some(&annotation)).as_deref(),
            Some("Priya Sharma")
        );
    }
}
