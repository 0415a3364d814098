use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured candidate record assembled by the extraction pipeline.
///
/// Every field is independently optional: `None` means "not found in the
/// transcript" and is never conflated with an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// Candidate's full name
    pub name: Option<String>,
    /// Email address, lowercased
    pub email: Option<String>,
    /// Phone number with separators stripped
    pub phone: Option<String>,
    /// College or university name
    pub college: Option<String>,
    /// Degree, e.g. "B.Tech in Computer Science"
    pub degree: Option<String>,
    /// Graduation year (1950-2030)
    pub graduation_year: Option<i32>,
    /// Years of work experience, e.g. "3 years"
    pub experience: Option<String>,
    /// City or region the candidate is based in
    pub location: Option<String>,
    /// Comma-joined, alphabetically sorted skill list
    pub skills: Option<String>,
}

impl CandidateRecord {
    /// Number of fields that were successfully extracted
    pub fn populated_fields(&self) -> usize {
        [
            self.name.is_some(),
            self.email.is_some(),
            self.phone.is_some(),
            self.college.is_some(),
            self.degree.is_some(),
            self.graduation_year.is_some(),
            self.experience.is_some(),
            self.location.is_some(),
            self.skills.is_some(),
        ]
        .iter()
        .filter(|&&set| set)
        .count()
    }

    /// True if no field was extracted
    pub fn is_empty(&self) -> bool {
        self.populated_fields() == 0
    }
}

/// A candidate record persisted by the store, with its assigned identity
/// and the transcript it was extracted from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredCandidate {
    /// Store-assigned identifier (UUID)
    pub id: String,
    /// The extracted record
    #[serde(flatten)]
    pub record: CandidateRecord,
    /// Source transcript, truncated by the store's sanitizer
    pub transcript: Option<String>,
    /// Creation timestamp (UTC)
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_empty() {
        let record = CandidateRecord::default();
        assert!(record.is_empty());
        assert_eq!(record.populated_fields(), 0);
    }

    #[test]
    fn test_populated_fields_counts_set_fields() {
        let record = CandidateRecord {
            email: Some("a@b.co".to_string()),
            graduation_year: Some(2018),
            ..Default::default()
        };
        assert_eq!(record.populated_fields(), 2);
        assert!(!record.is_empty());
    }

    #[test]
    fn test_record_serializes_absent_fields_as_null() {
        let record = CandidateRecord {
            name: Some("Priya Sharma".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], "Priya Sharma");
        assert!(json["email"].is_null());
        assert!(json["skills"].is_null());
    }
}
