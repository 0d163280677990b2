use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::catalog::Catalog;
use super::classification::MaturityBands;
use super::record::{AssessmentRecord, MissingRequiredField, SubmissionMetadata};
use super::scoring::{score_section, ScoringError, SectionResponse};
use super::store::{ResultStore, StoreError};

/// Raw submission as collected by the UI collaborator: required metadata,
/// one response block per catalog section in order, and the free-text
/// participant list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub country: String,
    pub assessor_name: String,
    pub organization: String,
    pub review_period: String,
    /// Defaults to the time of submission when the collaborator omits it.
    #[serde(default)]
    pub assessed_on: Option<DateTime<Utc>>,
    pub sections: Vec<SectionResponse>,
    #[serde(default)]
    pub participants: String,
}

/// Error raised by the submission pipeline.
///
/// Store failures keep their detail as a source for the logs but display a
/// generic notice, so credential or quota information never reaches the
/// respondent.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Validation(#[from] MissingRequiredField),
    #[error("could not save assessment results")]
    Persistence(#[source] StoreError),
}

/// Service composing the catalog, maturity bands, and result store.
pub struct AssessmentService<S> {
    catalog: Arc<Catalog>,
    bands: MaturityBands,
    store: Arc<S>,
}

impl<S> AssessmentService<S>
where
    S: ResultStore + 'static,
{
    /// Build a service whose bands are derived from the catalog size, so
    /// catalog variants stay consistently calibrated.
    pub fn new(catalog: Arc<Catalog>, store: Arc<S>) -> Self {
        let bands = MaturityBands::for_catalog(&catalog);
        Self::with_bands(catalog, bands, store)
    }

    pub fn with_bands(catalog: Arc<Catalog>, bands: MaturityBands, store: Arc<S>) -> Self {
        Self {
            catalog,
            bands,
            store,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn bands(&self) -> MaturityBands {
        self.bands
    }

    /// Score and classify a submission without persisting anything, for the
    /// results view shown before final submission.
    pub fn preview(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self.assemble(submission)?;
        Ok(record)
    }

    /// Validate, score, assemble, and append one submission to the store.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self.assemble(submission)?;
        let rows = record.rows();

        if let Err(err) = self.store.append(&rows) {
            error!(error = %err, rows = rows.len(), "failed to append assessment rows");
            return Err(AssessmentServiceError::Persistence(err));
        }

        info!(
            country = %record.metadata.country,
            review_period = %record.metadata.review_period,
            total_score = record.total_score,
            maturity = record.maturity.label(),
            "assessment persisted"
        );
        Ok(record)
    }

    fn assemble(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let sections = self.catalog.sections();
        if submission.sections.len() != sections.len() {
            return Err(ScoringError::SectionCountMismatch {
                expected: sections.len(),
                actual: submission.sections.len(),
            }
            .into());
        }

        let metadata = SubmissionMetadata {
            country: submission.country,
            assessor_name: submission.assessor_name,
            organization: submission.organization,
            review_period: submission.review_period,
            assessed_on: submission.assessed_on.unwrap_or_else(Utc::now),
        };

        let mut results = Vec::with_capacity(sections.len());
        for (section, response) in sections.iter().zip(&submission.sections) {
            results.push(score_section(section, response)?);
        }

        let record =
            AssessmentRecord::assemble(metadata, results, submission.participants, &self.bands)?;
        Ok(record)
    }
}
