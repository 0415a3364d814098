pub mod lexicon;
pub mod remote;

pub use lexicon::LexiconAnalyzer;
pub use remote::{RemoteAnalyzer, RemoteAnalyzerConfig};

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::models::Annotation;

/// Errors surfaced by an entity-analyzer backend.
///
/// The orchestrator absorbs all of these: entity-dependent fields degrade
/// to `None` and the extraction call still returns a record.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The backend cannot be reached or is not configured
    #[error("analyzer backend unavailable: {0}")]
    Unavailable(String),
    /// The backend was reached but the request failed
    #[error("analyzer request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The backend answered with output we cannot interpret
    #[error("analyzer returned malformed output: {0}")]
    Malformed(String),
}

/// Narrow seam over natural-language entity recognition.
///
/// One capability: segment the text into sentences and tag typed entity
/// spans. Any backend (rule-based tagger, statistical model, remote
/// service) can sit behind this trait without the field extractors
/// noticing. Invoked exactly once per extraction call.
#[async_trait]
pub trait EntityAnalyzer: Send + Sync {
    /// Segment `text` into sentences and tag PERSON/ORG/GPE spans
    async fn annotate(&self, text: &str) -> Result<Annotation, AnalyzerError>;

    /// Short backend name for logging
    fn name(&self) -> &str;
}

/// Backend that refuses every invocation. Used to run the pipeline in
/// regex-only mode: the orchestrator's degrade path does the rest.
pub struct DisabledAnalyzer;

#[async_trait]
impl EntityAnalyzer for DisabledAnalyzer {
    async fn annotate(&self, _text: &str) -> Result<Annotation, AnalyzerError> {
        Err(AnalyzerError::Unavailable(
            "entity analysis disabled".to_string(),
        ))
    }

    fn name(&self) -> &str {
        "disabled"
    }
}

/// Wraps a backend whose underlying model is not safe for concurrent
/// inference. All invocations pass through a single critical section;
/// callers that only need the regex extractors are unaffected.
pub struct SerializedAnalyzer<A> {
    inner: A,
    gate: Mutex<()>,
}

impl<A: EntityAnalyzer> SerializedAnalyzer<A> {
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            gate: Mutex::new(()),
        }
    }
}

#[async_trait]
impl<A: EntityAnalyzer> EntityAnalyzer for SerializedAnalyzer<A> {
    async fn annotate(&self, text: &str) -> Result<Annotation, AnalyzerError> {
        let _guard = self.gate.lock().await;
        self.inner.annotate(text).await
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
