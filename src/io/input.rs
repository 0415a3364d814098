use std::path::Path;

use anyhow::{Context, Result};

/// Read a transcript text file.
///
/// The content is returned as-is; the extraction pipeline handles empty
/// or whitespace-only input itself.
pub fn read_transcript(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript: {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_transcript_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "My name is Ravi Kumar.").unwrap();

        let content = read_transcript(file.path()).unwrap();
        assert_eq!(content, "My name is Ravi Kumar.");
    }

    #[test]
    fn test_read_transcript_missing_file() {
        let result = read_transcript(Path::new("/nonexistent/transcript.txt"));
        assert!(result.is_err());
    }
}
