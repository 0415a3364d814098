use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::models::{Annotation, EntityLabel, EntitySpan, Sentence};

use super::{AnalyzerError, EntityAnalyzer};

/// Configuration for a remote NER service
#[derive(Debug, Clone)]
pub struct RemoteAnalyzerConfig {
    /// Service endpoint (from DOSSIER_NER_URL env var)
    pub endpoint: String,
    /// Optional bearer token (from DOSSIER_NER_API_KEY env var)
    pub api_key: Option<String>,
}

impl RemoteAnalyzerConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self, AnalyzerError> {
        let endpoint = std::env::var("DOSSIER_NER_URL").map_err(|_| {
            AnalyzerError::Unavailable("DOSSIER_NER_URL environment variable not set".to_string())
        })?;

        Ok(Self {
            endpoint,
            api_key: std::env::var("DOSSIER_NER_API_KEY").ok(),
        })
    }

    /// Create with an explicit endpoint
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            api_key: None,
        }
    }
}

/// Entity analyzer backed by a remote NER HTTP service.
///
/// Posts the text and maps the service's typed spans onto [`Annotation`].
/// Any transport or shape failure surfaces as [`AnalyzerError`] and is
/// absorbed by the orchestrator's degrade path.
pub struct RemoteAnalyzer {
    client: Client,
    config: RemoteAnalyzerConfig,
}

impl RemoteAnalyzer {
    pub fn new(config: RemoteAnalyzerConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl EntityAnalyzer for RemoteAnalyzer {
    async fn annotate(&self, text: &str) -> Result<Annotation, AnalyzerError> {
        let request = NerRequest {
            text,
            labels: &["PERSON", "ORG", "GPE"],
        };

        let mut builder = self.client.post(&self.config.endpoint).json(&request);
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AnalyzerError::Malformed(format!(
                "NER service error: {} - {}",
                status, body
            )));
        }

        let response: NerResponse = response.json().await?;
        Ok(into_annotation(response))
    }

    fn name(&self) -> &str {
        "remote"
    }
}

#[derive(Debug, Serialize)]
struct NerRequest<'a> {
    text: &'a str,
    labels: &'a [&'a str],
}

#[derive(Debug, Deserialize)]
struct NerResponse {
    #[serde(default)]
    entities: Vec<NerEntity>,
    #[serde(default)]
    sentences: Vec<NerSentence>,
}

#[derive(Debug, Deserialize)]
struct NerEntity {
    text: String,
    label: String,
    start: usize,
    end: usize,
    /// Some services omit this; resolved from offsets when absent
    #[serde(default)]
    sentence: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct NerSentence {
    text: String,
    start: usize,
    end: usize,
}

/// Map the wire response onto the crate's annotation model, dropping
/// entity types we do not consume.
fn into_annotation(response: NerResponse) -> Annotation {
    let sentences: Vec<Sentence> = response
        .sentences
        .into_iter()
        .map(|s| Sentence {
            text: s.text,
            start: s.start,
            end: s.end,
        })
        .collect();

    let spans = response
        .entities
        .into_iter()
        .filter_map(|e| {
            let label = map_label(&e.label)?;
            let sentence = e
                .sentence
                .unwrap_or_else(|| containing_sentence(&sentences, e.start));
            Some(EntitySpan {
                text: e.text,
                label,
                start: e.start,
                end: e.end,
                sentence,
            })
        })
        .collect();

    Annotation { spans, sentences }
}

fn map_label(label: &str) -> Option<EntityLabel> {
    match label.to_ascii_uppercase().as_str() {
        "PERSON" | "PER" => Some(EntityLabel::Person),
        "ORG" | "ORGANIZATION" => Some(EntityLabel::Org),
        "GPE" | "LOC" | "LOCATION" => Some(EntityLabel::Gpe),
        _ => None,
    }
}

fn containing_sentence(sentences: &[Sentence], offset: usize) -> usize {
    sentences
        .iter()
        .position(|s| offset >= s.start && offset < s.end)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_label_aliases() {
        assert_eq!(map_label("PERSON"), Some(EntityLabel::Person));
        assert_eq!(map_label("per"), Some(EntityLabel::Person));
        assert_eq!(map_label("LOC"), Some(EntityLabel::Gpe));
        assert_eq!(map_label("DATE"), None);
    }

    #[test]
    fn test_into_annotation_resolves_sentence_from_offsets() {
        let response = NerResponse {
            entities: vec![NerEntity {
                text: "Pune".to_string(),
                label: "GPE".to_string(),
                start: 20,
                end: 24,
                sentence: None,
            }],
            sentences: vec![
                NerSentence {
                    text: "I code.".to_string(),
                    start: 0,
                    end: 7,
                },
                NerSentence {
                    text: "I live in Pune.".to_string(),
                    start: 8,
                    end: 30,
                },
            ],
        };

        let annotation = into_annotation(response);
        assert_eq!(annotation.spans.len(), 1);
        assert_eq!(annotation.spans[0].sentence, 1);
    }

    #[test]
    fn test_into_annotation_drops_unknown_labels() {
        let response = NerResponse {
            entities: vec![NerEntity {
                text: "2015".to_string(),
                label: "DATE".to_string(),
                start: 0,
                end: 4,
                sentence: Some(0),
            }],
            sentences: vec![],
        };

        assert!(into_annotation(response).spans.is_empty());
    }
}
