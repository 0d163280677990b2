use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::catalog::Section;
use super::classification::MaturityBands;
use super::record::AssessmentRecord;
use super::service::{AssessmentService, AssessmentServiceError, AssessmentSubmission};
use super::store::ResultStore;

/// Router builder exposing the catalog and the submission endpoints.
pub fn assessment_router<S>(service: Arc<AssessmentService<S>>) -> Router
where
    S: ResultStore + 'static,
{
    Router::new()
        .route("/api/v1/catalog", get(catalog_handler::<S>))
        .route("/api/v1/assessments", post(submit_handler::<S>))
        .route(
            "/api/v1/assessments/preview",
            post(preview_handler::<S>),
        )
        .with_state(service)
}

/// Catalog payload served to the UI collaborator.
#[derive(Debug, Serialize)]
pub struct CatalogView {
    pub sections: Vec<Section>,
    pub question_count: usize,
    pub max_score: u32,
    pub bands: MaturityBands,
}

#[derive(Debug, Serialize)]
pub struct SectionSubtotalView {
    pub section: String,
    pub subtotal: u32,
}

/// Summary returned for scored submissions.
#[derive(Debug, Serialize)]
pub struct AssessmentResultView {
    pub country: String,
    pub review_period: String,
    pub total_score: u32,
    pub max_score: u32,
    pub maturity_level: &'static str,
    pub section_subtotals: Vec<SectionSubtotalView>,
}

impl AssessmentResultView {
    pub fn from_record(record: &AssessmentRecord, max_score: u32) -> Self {
        Self {
            country: record.metadata.country.clone(),
            review_period: record.metadata.review_period.clone(),
            total_score: record.total_score,
            max_score,
            maturity_level: record.maturity.label(),
            section_subtotals: record
                .sections
                .iter()
                .map(|section| SectionSubtotalView {
                    section: section.section.clone(),
                    subtotal: section.subtotal,
                })
                .collect(),
        }
    }
}

pub(crate) async fn catalog_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
) -> Response
where
    S: ResultStore + 'static,
{
    let catalog = service.catalog();
    let view = CatalogView {
        sections: catalog.sections().to_vec(),
        question_count: catalog.question_count(),
        max_score: catalog.max_score(),
        bands: service.bands(),
    };
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response
where
    S: ResultStore + 'static,
{
    let max_score = service.catalog().max_score();
    match service.submit(submission) {
        Ok(record) => {
            let view = AssessmentResultView::from_record(&record, max_score);
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn preview_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response
where
    S: ResultStore + 'static,
{
    let max_score = service.catalog().max_score();
    match service.preview(submission) {
        Ok(record) => {
            let view = AssessmentResultView::from_record(&record, max_score);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: AssessmentServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    let status = match error {
        AssessmentServiceError::Scoring(_) | AssessmentServiceError::Validation(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        // Detail stays in the logs; the client only sees the generic notice.
        AssessmentServiceError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, axum::Json(payload)).into_response()
}
