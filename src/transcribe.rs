//! Thin client for the external speech-to-text collaborator. The service
//! is treated as an opaque function from audio bytes to text; everything
//! interesting happens downstream in the extraction pipeline.

use std::path::Path;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// Audio container formats accepted for transcription
pub const ALLOWED_AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a", "mp4", "ogg", "flac", "webm"];

/// Maximum audio upload size in bytes (500 MB)
pub const MAX_AUDIO_BYTES: u64 = 500 * 1024 * 1024;

/// Errors from audio validation or the transcription service
#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("audio file not found: {0}")]
    NotFound(String),
    #[error("file type not allowed: .{0} (allowed: mp3, wav, m4a, mp4, ogg, flac, webm)")]
    UnsupportedFormat(String),
    #[error("audio file is empty")]
    Empty,
    #[error("audio file too large: {size} bytes (maximum {max})")]
    TooLarge { size: u64, max: u64 },
    #[error("transcription service not configured: {0}")]
    NotConfigured(String),
    #[error("transcription request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("transcription service error: {status} - {body}")]
    Service { status: u16, body: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Configuration for the transcription service client
#[derive(Debug, Clone)]
pub struct TranscriberConfig {
    /// Service endpoint (from DOSSIER_TRANSCRIBE_URL env var)
    pub endpoint: String,
    /// API key (from DOSSIER_TRANSCRIBE_API_KEY env var)
    pub api_key: String,
    /// Optional language hint; auto-detect when None
    pub language: Option<String>,
}

impl TranscriberConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self, TranscribeError> {
        let endpoint = std::env::var("DOSSIER_TRANSCRIBE_URL").map_err(|_| {
            TranscribeError::NotConfigured(
                "DOSSIER_TRANSCRIBE_URL environment variable not set".to_string(),
            )
        })?;
        let api_key = std::env::var("DOSSIER_TRANSCRIBE_API_KEY").map_err(|_| {
            TranscribeError::NotConfigured(
                "DOSSIER_TRANSCRIBE_API_KEY environment variable not set".to_string(),
            )
        })?;

        Ok(Self {
            endpoint,
            api_key,
            language: std::env::var("DOSSIER_TRANSCRIBE_LANGUAGE").ok(),
        })
    }

    /// Create with custom settings
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            endpoint,
            api_key,
            language: None,
        }
    }
}

/// Client for a speech-to-text HTTP service that accepts raw audio bytes
/// and answers with the transcript text
pub struct TranscriptionClient {
    client: Client,
    config: TranscriberConfig,
}

impl TranscriptionClient {
    pub fn new(config: TranscriberConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Validate and transcribe an audio file, returning the trimmed text
    pub async fn transcribe_file(&self, path: &Path) -> Result<String, TranscribeError> {
        let extension = validate_audio_path(path)?;
        let bytes = tokio::fs::read(path).await?;

        info!(
            "Transcribing {:?} ({:.2} MB)",
            path,
            bytes.len() as f64 / (1024.0 * 1024.0)
        );

        let mut request = self
            .client
            .post(&self.config.endpoint)
            .header("authorization", format!("Token {}", self.config.api_key))
            .header("content-type", content_type_for(&extension))
            .body(bytes);

        if let Some(language) = &self.config.language {
            request = request.query(&[("language", language.as_str())]);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TranscribeError::Service { status, body });
        }

        let response: TranscriptionResponse = response.json().await?;
        let transcript = response.text.trim().to_string();
        info!("Transcription complete, {} characters", transcript.len());
        Ok(transcript)
    }
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    #[serde(default)]
    text: String,
}

/// Check the extension allow-list and size limits, returning the
/// lowercased extension
pub fn validate_audio_path(path: &Path) -> Result<String, TranscribeError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if !ALLOWED_AUDIO_EXTENSIONS.contains(&extension.as_str()) {
        return Err(TranscribeError::UnsupportedFormat(extension));
    }

    let metadata = std::fs::metadata(path)
        .map_err(|_| TranscribeError::NotFound(path.display().to_string()))?;

    if metadata.len() == 0 {
        return Err(TranscribeError::Empty);
    }
    if metadata.len() > MAX_AUDIO_BYTES {
        return Err(TranscribeError::TooLarge {
            size: metadata.len(),
            max: MAX_AUDIO_BYTES,
        });
    }

    Ok(extension)
}

fn content_type_for(extension: &str) -> &'static str {
    match extension {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "m4a" => "audio/mp4",
        "mp4" => "video/mp4",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        "webm" => "audio/webm",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_unsupported_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interview.txt");
        std::fs::write(&path, b"not audio").unwrap();

        let err = validate_audio_path(&path).unwrap_err();
        assert!(matches!(err, TranscribeError::UnsupportedFormat(ext) if ext == "txt"));
    }

    #[test]
    fn test_missing_file_rejected() {
        let err = validate_audio_path(Path::new("/nonexistent/interview.mp3")).unwrap_err();
        assert!(matches!(err, TranscribeError::NotFound(_)));
    }

    #[test]
    fn test_empty_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interview.wav");
        std::fs::File::create(&path).unwrap();

        let err = validate_audio_path(&path).unwrap_err();
        assert!(matches!(err, TranscribeError::Empty));
    }

    #[test]
    fn test_valid_audio_accepted_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interview.MP3");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"fake audio bytes").unwrap();

        assert_eq!(validate_audio_path(&path).unwrap(), "mp3");
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type_for("mp3"), "audio/mpeg");
        assert_eq!(content_type_for("webm"), "audio/webm");
    }
}
