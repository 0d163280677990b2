use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::classification::{MaturityBands, MaturityLevel};
use super::scoring::SectionResult;

/// Identifying fields captured once per submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionMetadata {
    pub country: String,
    pub assessor_name: String,
    pub organization: String,
    pub review_period: String,
    pub assessed_on: DateTime<Utc>,
}

/// A required metadata field was blank at submission time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("required field '{field}' is empty")]
pub struct MissingRequiredField {
    pub field: &'static str,
}

impl SubmissionMetadata {
    fn validate(&self) -> Result<(), MissingRequiredField> {
        let required = [
            ("country", &self.country),
            ("assessor_name", &self.assessor_name),
            ("organization", &self.organization),
            ("review_period", &self.review_period),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(MissingRequiredField { field });
            }
        }
        Ok(())
    }
}

/// One finalized assessment: metadata, every section result, the grand
/// total, and the maturity band. Immutable once assembled; persisted by
/// appending rows, never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub metadata: SubmissionMetadata,
    pub sections: Vec<SectionResult>,
    pub participants: String,
    pub total_score: u32,
    pub maturity: MaturityLevel,
}

impl AssessmentRecord {
    /// Merge section results with submission metadata into one record,
    /// computing the total and its maturity band.
    pub fn assemble(
        metadata: SubmissionMetadata,
        sections: Vec<SectionResult>,
        participants: String,
        bands: &MaturityBands,
    ) -> Result<Self, MissingRequiredField> {
        metadata.validate()?;
        let total_score = sections.iter().map(|section| section.subtotal).sum();
        let maturity = bands.classify(total_score);
        Ok(Self {
            metadata,
            sections,
            participants,
            total_score,
            maturity,
        })
    }

    /// Flatten the record into the normalized long form the store expects:
    /// one row per question plus one comment row per section, each carrying
    /// the once-per-submission fields.
    pub fn rows(&self) -> Vec<ResultRow> {
        let mut rows = Vec::new();
        for section in &self.sections {
            for question in &section.questions {
                rows.push(self.row(
                    &section.section,
                    &question.prompt,
                    question.answer.selected().unwrap_or_default(),
                    Some(question.points),
                ));
            }
            rows.push(self.row(
                &section.section,
                &format!("{} Comments", section.section),
                &section.comment,
                None,
            ));
        }
        rows
    }

    fn row(&self, section: &str, question: &str, answer: &str, score: Option<u8>) -> ResultRow {
        ResultRow {
            country: self.metadata.country.clone(),
            assessor_name: self.metadata.assessor_name.clone(),
            organization: self.metadata.organization.clone(),
            review_period: self.metadata.review_period.clone(),
            assessed_on: self.metadata.assessed_on,
            section: section.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            score,
            total_score: self.total_score,
            maturity_level: self.maturity.label().to_string(),
            participants: self.participants.clone(),
        }
    }
}

/// One persisted row of the shared results table. Submission-level fields
/// are repeated on every row so the table stays flat for downstream
/// aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub country: String,
    pub assessor_name: String,
    pub organization: String,
    pub review_period: String,
    pub assessed_on: DateTime<Utc>,
    pub section: String,
    pub question: String,
    pub answer: String,
    pub score: Option<u8>,
    pub total_score: u32,
    pub maturity_level: String,
    pub participants: String,
}
