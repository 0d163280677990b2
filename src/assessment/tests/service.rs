use std::sync::Arc;

use super::common::*;
use crate::assessment::scoring::ScoringError;
use crate::assessment::service::{AssessmentService, AssessmentServiceError};

#[test]
fn middle_options_across_a_toy_catalog_total_twelve() {
    let (service, store) = build_service(toy_catalog());

    let record = service
        .submit(submission_selecting(service.catalog(), 1))
        .expect("submission succeeds");

    assert_eq!(record.total_score, 12);
    for section in &record.sections {
        assert_eq!(section.subtotal, 4);
        for question in &section.questions {
            assert_eq!(question.points, 2);
        }
    }
    // 2 question rows + 1 comment row per section.
    assert_eq!(store.rows().len(), 9);
}

#[test]
fn blank_country_is_rejected_and_nothing_persists() {
    let (service, store) = build_service(toy_catalog());
    let mut submission = submission_selecting(service.catalog(), 1);
    submission.country = String::new();

    let err = service.submit(submission).expect_err("country is blank");
    assert!(matches!(err, AssessmentServiceError::Validation(_)));
    assert!(store.rows().is_empty());
}

#[test]
fn invalid_selection_is_rejected_and_nothing_persists() {
    let (service, store) = build_service(toy_catalog());
    let mut submission = submission_selecting(service.catalog(), 0);
    submission.sections[1].answers[0] =
        crate::assessment::scoring::Answer::Selected("Perfectly".to_string());

    let err = service.submit(submission).expect_err("option is unknown");
    assert!(matches!(
        err,
        AssessmentServiceError::Scoring(ScoringError::InvalidSelection { .. })
    ));
    assert!(store.rows().is_empty());
}

#[test]
fn section_count_must_match_catalog() {
    let (service, _) = build_service(toy_catalog());
    let mut submission = submission_selecting(service.catalog(), 0);
    submission.sections.pop();

    let err = service.submit(submission).expect_err("a section is missing");
    assert!(matches!(
        err,
        AssessmentServiceError::Scoring(ScoringError::SectionCountMismatch {
            expected: 3,
            actual: 2,
        })
    ));
}

#[test]
fn preview_scores_without_persisting() {
    let (service, store) = build_service(toy_catalog());

    let record = service
        .preview(submission_selecting(service.catalog(), 2))
        .expect("preview succeeds");

    assert_eq!(record.total_score, 18);
    assert!(store.rows().is_empty());
}

#[test]
fn store_failure_surfaces_a_generic_notice() {
    let service = AssessmentService::new(Arc::new(toy_catalog()), Arc::new(UnavailableStore));

    let err = service
        .submit(submission_selecting(service.catalog(), 1))
        .expect_err("store is unavailable");

    assert!(matches!(err, AssessmentServiceError::Persistence(_)));
    // The message shown to the respondent never carries store detail.
    assert_eq!(err.to_string(), "could not save assessment results");
}

#[test]
fn fully_unanswered_submission_is_tolerated() {
    let (service, store) = build_service(toy_catalog());
    let mut submission = submission_selecting(service.catalog(), 0);
    for section in &mut submission.sections {
        for answer in &mut section.answers {
            *answer = crate::assessment::scoring::Answer::Unanswered;
        }
    }

    let record = service.submit(submission).expect("submission succeeds");
    assert_eq!(record.total_score, 0);
    assert_eq!(record.maturity.label(), "Ad-hoc supply planning");
    assert_eq!(store.rows().len(), 9);
}
