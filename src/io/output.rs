use std::path::Path;

use anyhow::{Context, Result};

use crate::models::CandidateRecord;

/// Write a candidate record to a JSON file
pub fn write_record(record: &CandidateRecord, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    serde_json::to_writer_pretty(file, record).context("Failed to write record JSON")?;
    Ok(())
}

/// Render a candidate record as pretty JSON for terminal output
pub fn render_record(record: &CandidateRecord) -> Result<String> {
    serde_json::to_string_pretty(record).context("Failed to render record JSON")
}
