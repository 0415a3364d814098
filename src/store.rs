//! File-backed candidate store. Assigns an id and creation timestamp,
//! sanitizes and validates incoming records, and offers the small CRUD
//! surface the CLI needs. Deliberately a flat JSON file, not a database.

use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::models::{CandidateRecord, StoredCandidate};
use crate::validate;

/// Field length caps applied before persisting
const MAX_NAME_LEN: usize = 100;
const MAX_EMAIL_LEN: usize = 100;
const MAX_PHONE_LEN: usize = 20;
const MAX_COLLEGE_LEN: usize = 200;
const MAX_DEGREE_LEN: usize = 100;
const MAX_EXPERIENCE_LEN: usize = 50;
const MAX_LOCATION_LEN: usize = 100;
const MAX_TRANSCRIPT_LEN: usize = 50_000;

/// Maximum skills kept per candidate
const MAX_SKILLS: usize = 20;

/// Errors from the candidate store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid candidate data: {0}")]
    Invalid(String),
    #[error("candidate not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// Candidate store over a single JSON file
pub struct CandidateStore {
    path: PathBuf,
}

impl CandidateStore {
    /// Open a store at the given path; the file is created on first write
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sanitize, validate, and persist a record; returns the stored
    /// candidate with its assigned id and timestamp
    pub fn create(
        &self,
        record: CandidateRecord,
        transcript: Option<&str>,
    ) -> Result<StoredCandidate, StoreError> {
        let record = sanitize_record(record);
        validate_record(&record)?;

        let stored = StoredCandidate {
            id: Uuid::new_v4().to_string(),
            record,
            transcript: transcript
                .map(|t| sanitize_string(t, MAX_TRANSCRIPT_LEN))
                .filter(|t| !t.is_empty()),
            created_at: Utc::now(),
        };

        let mut all = self.load()?;
        all.push(stored.clone());
        self.save(&all)?;

        info!(id = %stored.id, "candidate stored");
        Ok(stored)
    }

    /// Fetch a candidate by id
    pub fn get(&self, id: &str) -> Result<Option<StoredCandidate>, StoreError> {
        Ok(self.load()?.into_iter().find(|c| c.id == id))
    }

    /// All candidates, newest first
    pub fn list(&self) -> Result<Vec<StoredCandidate>, StoreError> {
        let mut all = self.load()?;
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    /// Delete a candidate by id; true if something was removed
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut all = self.load()?;
        let before = all.len();
        all.retain(|c| c.id != id);
        let deleted = all.len() != before;
        if deleted {
            self.save(&all)?;
            info!(id, "candidate deleted");
        }
        Ok(deleted)
    }

    fn load(&self) -> Result<Vec<StoredCandidate>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, candidates: &[StoredCandidate]) -> Result<(), StoreError> {
        let file = std::fs::File::create(&self.path)?;
        serde_json::to_writer_pretty(file, candidates)?;
        Ok(())
    }
}

/// Collapse whitespace and truncate every string field to its cap;
/// fields left empty by the cleanup become `None`
fn sanitize_record(record: CandidateRecord) -> CandidateRecord {
    CandidateRecord {
        name: sanitize_field(record.name, MAX_NAME_LEN),
        email: sanitize_field(record.email, MAX_EMAIL_LEN),
        phone: sanitize_field(record.phone, MAX_PHONE_LEN),
        college: sanitize_field(record.college, MAX_COLLEGE_LEN),
        degree: sanitize_field(record.degree, MAX_DEGREE_LEN),
        graduation_year: record.graduation_year,
        experience: sanitize_field(record.experience, MAX_EXPERIENCE_LEN),
        location: sanitize_field(record.location, MAX_LOCATION_LEN),
        skills: record.skills.map(|s| sanitize_skills(&s)).filter(|s| !s.is_empty()),
    }
}

fn sanitize_field(value: Option<String>, max_len: usize) -> Option<String> {
    value
        .map(|v| sanitize_string(&v, max_len))
        .filter(|v| !v.is_empty())
}

fn sanitize_string(value: &str, max_len: usize) -> String {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.len() <= max_len {
        return collapsed;
    }
    let mut end = max_len;
    while !collapsed.is_char_boundary(end) {
        end -= 1;
    }
    collapsed[..end].trim_end().to_string()
}

/// Dedupe, sort, and cap the comma-joined skill list
fn sanitize_skills(skills: &str) -> String {
    let mut list: Vec<&str> = skills
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    list.sort_unstable();
    list.dedup();
    list.truncate(MAX_SKILLS);
    list.join(", ")
}

/// Reject records whose populated fields fail the shared validators
fn validate_record(record: &CandidateRecord) -> Result<(), StoreError> {
    if let Some(email) = &record.email {
        if !validate::is_valid_email(email) {
            return Err(StoreError::Invalid("invalid email format".to_string()));
        }
    }
    if let Some(phone) = &record.phone {
        if !validate::is_valid_phone(phone) {
            return Err(StoreError::Invalid("invalid phone number format".to_string()));
        }
    }
    if let Some(year) = record.graduation_year {
        if !validate::is_valid_year(year) {
            return Err(StoreError::Invalid("invalid graduation year".to_string()));
        }
    }
    if let Some(name) = &record.name {
        if !validate::is_valid_name(name) {
            return Err(StoreError::Invalid("invalid name format".to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, CandidateStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CandidateStore::open(dir.path().join("candidates.json"));
        (dir, store)
    }

    fn sample_record() -> CandidateRecord {
        CandidateRecord {
            name: Some("Priya Sharma".to_string()),
            email: Some("priya@example.com".to_string()),
            graduation_year: Some(2018),
            skills: Some("Python, React".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_and_get_roundtrip() {
        let (_dir, store) = store();
        let stored = store.create(sample_record(), Some("the transcript")).unwrap();

        let fetched = store.get(&stored.id).unwrap().unwrap();
        assert_eq!(fetched.record, stored.record);
        assert_eq!(fetched.transcript.as_deref(), Some("the transcript"));
    }

    #[test]
    fn test_list_newest_first() {
        let (_dir, store) = store();
        let first = store.create(sample_record(), None).unwrap();
        let second = store.create(sample_record(), None).unwrap();

        let all = store.list().unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].created_at >= all[1].created_at);
        // Both survived the roundtrip
        let ids: Vec<&str> = all.iter().map(|c| c.id.as_str()).collect();
        assert!(ids.contains(&first.id.as_str()));
        assert!(ids.contains(&second.id.as_str()));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (_dir, store) = store();
        let stored = store.create(sample_record(), None).unwrap();

        assert!(store.delete(&stored.id).unwrap());
        assert!(!store.delete(&stored.id).unwrap());
        assert!(store.get(&stored.id).unwrap().is_none());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let (_dir, store) = store();
        let record = CandidateRecord {
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };

        let err = store.create(record, None).unwrap_err();
        assert!(matches!(err, StoreError::Invalid(msg) if msg.contains("email")));
    }

    #[test]
    fn test_invalid_year_rejected() {
        let (_dir, store) = store();
        let record = CandidateRecord {
            graduation_year: Some(1890),
            ..Default::default()
        };

        assert!(store.create(record, None).is_err());
    }

    #[test]
    fn test_skills_deduped_and_capped() {
        let many: Vec<String> = (0..30).map(|i| format!("skill{:02}", i)).collect();
        let skills = format!("{}, {}", many.join(", "), "skill00");
        assert_eq!(sanitize_skills(&skills).matches(',').count(), MAX_SKILLS - 1);
    }

    #[test]
    fn test_sanitize_collapses_whitespace() {
        assert_eq!(sanitize_string("  Priya   Sharma \n", 100), "Priya Sharma");
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        let (_dir, store) = store();
        assert!(store.list().unwrap().is_empty());
    }
}
