//! Maturity assessment core: question catalog, answer scoring, maturity
//! classification, record assembly, and the append-only result store.

pub mod catalog;
pub mod classification;
pub mod record;
pub mod router;
pub mod scoring;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, Question, Section};
pub use classification::{MaturityBands, MaturityLevel};
pub use record::{AssessmentRecord, MissingRequiredField, ResultRow, SubmissionMetadata};
pub use router::{assessment_router, AssessmentResultView, CatalogView};
pub use scoring::{
    score_section, Answer, ScoredQuestion, ScoringError, SectionResponse, SectionResult,
};
pub use service::{AssessmentService, AssessmentServiceError, AssessmentSubmission};
pub use store::{CsvResultStore, ResultStore, StoreError};
