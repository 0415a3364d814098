pub mod analyzer;
pub mod extract;
pub mod io;
pub mod models;
pub mod patterns;
pub mod store;
pub mod transcribe;
pub mod validate;

pub use analyzer::{
    AnalyzerError, DisabledAnalyzer, EntityAnalyzer, LexiconAnalyzer, RemoteAnalyzer,
    RemoteAnalyzerConfig, SerializedAnalyzer,
};
pub use extract::{extract_candidate, DigestConfig, ExtractionContext};
pub use io::{read_transcript, render_record, write_record};
pub use models::{
    Annotation, CandidateRecord, EntityLabel, EntitySpan, Sentence, StoredCandidate,
};
pub use patterns::PatternLibrary;
pub use store::{CandidateStore, StoreError};
pub use transcribe::{TranscribeError, TranscriberConfig, TranscriptionClient};
