use serde::{Deserialize, Serialize};

use super::catalog::{Question, Section};

/// A respondent's answer to one question.
///
/// Unanswered is kept distinct from a scored answer all the way into the
/// persisted record; an answer text outside the option set is an error, not
/// a third value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Answer {
    Unanswered,
    Selected(String),
}

impl Answer {
    pub fn selected(&self) -> Option<&str> {
        match self {
            Answer::Unanswered => None,
            Answer::Selected(text) => Some(text),
        }
    }
}

impl From<Option<String>> for Answer {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(text) => Answer::Selected(text),
            None => Answer::Unanswered,
        }
    }
}

impl From<Answer> for Option<String> {
    fn from(value: Answer) -> Self {
        match value {
            Answer::Unanswered => None,
            Answer::Selected(text) => Some(text),
        }
    }
}

/// Error raised while converting answers to points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("selected option '{selected}' is not among the choices for question {question}")]
    InvalidSelection { question: String, selected: String },
    #[error("section '{section}' expects {expected} answers, got {actual}")]
    AnswerCountMismatch {
        section: String,
        expected: usize,
        actual: usize,
    },
    #[error("submission covers {actual} sections, catalog has {expected}")]
    SectionCountMismatch { expected: usize, actual: usize },
}

impl Question {
    /// Points for an answer: 0 when unanswered, otherwise the option's
    /// position in the fixed maturity ordering plus one.
    pub fn score(&self, answer: &Answer) -> Result<u8, ScoringError> {
        match answer {
            Answer::Unanswered => Ok(0),
            Answer::Selected(text) => self
                .options
                .iter()
                .position(|option| option == text)
                .map(|index| index as u8 + 1)
                .ok_or_else(|| ScoringError::InvalidSelection {
                    question: self.key.clone(),
                    selected: text.clone(),
                }),
        }
    }
}

/// Answers and comment collected for one section, in question order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionResponse {
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub comment: String,
}

/// One scored question inside a section result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredQuestion {
    pub key: String,
    pub prompt: String,
    pub answer: Answer,
    pub points: u8,
}

/// Aggregated output for one section: ordered scored questions, the comment,
/// and the subtotal. The comment never contributes to the subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionResult {
    pub section: String,
    pub questions: Vec<ScoredQuestion>,
    pub comment: String,
    pub subtotal: u32,
}

/// Score one section's answers against its catalog definition.
pub fn score_section(
    section: &Section,
    response: &SectionResponse,
) -> Result<SectionResult, ScoringError> {
    if response.answers.len() != section.questions.len() {
        return Err(ScoringError::AnswerCountMismatch {
            section: section.name.clone(),
            expected: section.questions.len(),
            actual: response.answers.len(),
        });
    }

    let mut questions = Vec::with_capacity(section.questions.len());
    let mut subtotal: u32 = 0;

    for (question, answer) in section.questions.iter().zip(&response.answers) {
        let points = question.score(answer)?;
        subtotal += u32::from(points);
        questions.push(ScoredQuestion {
            key: question.key.clone(),
            prompt: question.prompt.clone(),
            answer: answer.clone(),
            points,
        });
    }

    Ok(SectionResult {
        section: section.name.clone(),
        questions,
        comment: response.comment.clone(),
        subtotal,
    })
}
