//! End-to-end extraction scenarios over the full pipeline with the
//! built-in analyzer backend.

use dossier::{extract_candidate, ExtractionContext};

#[tokio::test]
async fn test_end_to_end_interview_scenario() {
    let transcript = "My name is Priya Sharma, I studied B.Tech in Computer Science at \
                      ABC Institute of Technology, graduated in 2018, I have 3 years of \
                      experience, I know Python and React, reach me at priya@example.com.";

    let ctx = ExtractionContext::lexicon();
    let record = extract_candidate(transcript, &ctx).await;

    assert_eq!(record.name.as_deref(), Some("Priya Sharma"));
    assert_eq!(record.email.as_deref(), Some("priya@example.com"));
    assert_eq!(record.graduation_year, Some(2018));
    assert_eq!(record.experience.as_deref(), Some("3 years"));
    assert_eq!(record.skills.as_deref(), Some("Python, React"));
    assert_eq!(
        record.college.as_deref(),
        Some("ABC Institute of Technology")
    );

    let degree = record.degree.expect("degree extracted");
    assert!(degree.contains("B.Tech"), "degree was {degree:?}");
    assert!(degree.contains("Computer Science"), "degree was {degree:?}");

    assert_eq!(record.phone, None);
    assert_eq!(record.location, None);
}

#[tokio::test]
async fn test_empty_transcript_yields_all_null_record() {
    let ctx = ExtractionContext::lexicon();
    let record = extract_candidate("", &ctx).await;

    assert!(record.is_empty());
    // None, never an empty string
    assert_eq!(record.skills, None);
    assert_eq!(record.email, None);
}

#[tokio::test]
async fn test_no_matches_means_none_not_empty_string() {
    let ctx = ExtractionContext::lexicon();
    let record = extract_candidate("the weather was nice and we talked for a while", &ctx).await;

    assert_eq!(record.name, None);
    assert_eq!(record.email, None);
    assert_eq!(record.phone, None);
    assert_eq!(record.college, None);
    assert_eq!(record.degree, None);
    assert_eq!(record.graduation_year, None);
    assert_eq!(record.experience, None);
    assert_eq!(record.location, None);
    assert_eq!(record.skills, None);
}

#[tokio::test]
async fn test_single_email_extracted_exactly() {
    let ctx = ExtractionContext::lexicon();
    let record = extract_candidate(
        "you can always write to me at ravi.kumar+jobs@mail.example.org if needed",
        &ctx,
    )
    .await;

    assert_eq!(
        record.email.as_deref(),
        Some("ravi.kumar+jobs@mail.example.org")
    );
}

#[tokio::test]
async fn test_extraction_is_byte_identical_across_runs() {
    let transcript = "My name is Asha Rao, I studied B.Sc in physics at Riverside College, \
                      graduated in 2016, I know python and sql, I live in pune.";
    let ctx = ExtractionContext::lexicon();

    let first = extract_candidate(transcript, &ctx).await;
    let second = extract_candidate(transcript, &ctx).await;

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[tokio::test]
async fn test_skill_toponym_never_becomes_location() {
    let ctx = ExtractionContext::lexicon();
    let record = extract_candidate(
        "I know java and python, most of my projects run on linux.",
        &ctx,
    )
    .await;

    assert_eq!(record.location, None);
    let skills = record.skills.expect("skills extracted");
    assert!(skills.contains("Java"));
}

#[tokio::test]
async fn test_specialization_tie_break_prefers_longer_phrase() {
    let ctx = ExtractionContext::lexicon();
    let record = extract_candidate(
        "I completed my B.Tech in computer science engineering, computer science \
         was my favorite part of it.",
        &ctx,
    )
    .await;

    assert_eq!(
        record.degree.as_deref(),
        Some("B.Tech in Computer Science Engineering")
    );
}

#[tokio::test]
async fn test_graduation_context_beats_unrelated_year() {
    let ctx = ExtractionContext::lexicon();
    let record = extract_candidate(
        "I graduated in 2015. In 1999 my family moved to a different city.",
        &ctx,
    )
    .await;

    assert_eq!(record.graduation_year, Some(2015));
}

#[tokio::test]
async fn test_city_location_extracted() {
    let ctx = ExtractionContext::lexicon();
    let record = extract_candidate(
        "My name is Ravi, I am from Chennai, and I know python.",
        &ctx,
    )
    .await;

    assert_eq!(record.location.as_deref(), Some("Chennai"));
    assert_eq!(record.name.as_deref(), Some("Ravi"));
}

#[tokio::test]
async fn test_phone_extracted_and_normalized() {
    let ctx = ExtractionContext::lexicon();
    let record = extract_candidate("my number is +91 98765 43210, call anytime", &ctx).await;

    assert_eq!(record.phone.as_deref(), Some("+919876543210"));
}
