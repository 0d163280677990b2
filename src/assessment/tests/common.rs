use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::assessment::catalog::{Catalog, Question, Section};
use crate::assessment::record::ResultRow;
use crate::assessment::scoring::{Answer, SectionResponse};
use crate::assessment::service::{AssessmentService, AssessmentSubmission};
use crate::assessment::store::{ResultStore, StoreError};

/// Catalog with 3 sections of 2 questions each (6 questions, max score 18).
pub(super) fn toy_catalog() -> Catalog {
    let section = |name: &str, prefix: &str| {
        Section::new(
            name,
            vec![
                Question::new(
                    &format!("{prefix}-1"),
                    "How mature is the first practice",
                    ["Not at all", "Somewhat", "Fully"],
                ),
                Question::new(
                    &format!("{prefix}-2"),
                    "How mature is the second practice",
                    ["Never", "Sometimes", "Always"],
                ),
            ],
        )
    };
    Catalog::new(vec![
        section("Alpha", "alpha"),
        section("Beta", "beta"),
        section("Gamma", "gamma"),
    ])
}

/// Submission answering every question with the option at `index`.
pub(super) fn submission_selecting(catalog: &Catalog, index: usize) -> AssessmentSubmission {
    let sections = catalog
        .sections()
        .iter()
        .map(|section| SectionResponse {
            answers: section
                .questions
                .iter()
                .map(|question| Answer::Selected(question.options[index].clone()))
                .collect(),
            comment: format!("{} looks stable this quarter", section.name),
        })
        .collect();

    AssessmentSubmission {
        country: "Kenya".to_string(),
        assessor_name: "Jane Doe".to_string(),
        organization: "MOH".to_string(),
        review_period: "Q1 2024".to_string(),
        assessed_on: Some(Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap()),
        sections,
        participants: "Jane Doe (MOH), John Doe (CHAI)".to_string(),
    }
}

pub(super) fn build_service(
    catalog: Catalog,
) -> (AssessmentService<MemoryResultStore>, Arc<MemoryResultStore>) {
    let store = Arc::new(MemoryResultStore::default());
    let service = AssessmentService::new(Arc::new(catalog), store.clone());
    (service, store)
}

#[derive(Default, Clone)]
pub(super) struct MemoryResultStore {
    rows: Arc<Mutex<Vec<ResultRow>>>,
}

impl MemoryResultStore {
    pub(super) fn rows(&self) -> Vec<ResultRow> {
        self.rows.lock().expect("store mutex poisoned").clone()
    }
}

impl ResultStore for MemoryResultStore {
    fn append(&self, rows: &[ResultRow]) -> Result<(), StoreError> {
        self.rows
            .lock()
            .expect("store mutex poisoned")
            .extend_from_slice(rows);
        Ok(())
    }
}

pub(super) struct UnavailableStore;

impl ResultStore for UnavailableStore {
    fn append(&self, _rows: &[ResultRow]) -> Result<(), StoreError> {
        Err(StoreError::Unavailable(
            "sheet quota exceeded for service account".to_string(),
        ))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
