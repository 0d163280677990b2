use super::common::*;
use crate::assessment::catalog::Catalog;
use crate::assessment::scoring::{score_section, Answer, ScoringError, SectionResponse};

#[test]
fn every_option_scores_its_position_plus_one() {
    let catalog = Catalog::standard();
    for section in catalog.sections() {
        for question in &section.questions {
            for (index, option) in question.options.iter().enumerate() {
                let answer = Answer::Selected(option.clone());
                assert_eq!(
                    question.score(&answer).expect("option is valid"),
                    index as u8 + 1,
                    "question {}",
                    question.key
                );
            }
        }
    }
}

#[test]
fn unanswered_scores_zero() {
    let catalog = toy_catalog();
    let question = &catalog.sections()[0].questions[0];
    assert_eq!(question.score(&Answer::Unanswered), Ok(0));
}

#[test]
fn unknown_option_is_rejected() {
    let catalog = toy_catalog();
    let question = &catalog.sections()[0].questions[0];
    let answer = Answer::Selected("Extremely".to_string());

    let err = question.score(&answer).expect_err("option is not listed");
    assert_eq!(
        err,
        ScoringError::InvalidSelection {
            question: question.key.clone(),
            selected: "Extremely".to_string(),
        }
    );
}

#[test]
fn scoring_is_pure() {
    let catalog = toy_catalog();
    let question = &catalog.sections()[0].questions[1];
    let answer = Answer::Selected(question.options[2].clone());

    let first = question.score(&answer);
    let second = question.score(&answer);
    assert_eq!(first, second);
    assert_eq!(first, Ok(3));
}

#[test]
fn subtotal_is_sum_of_question_scores() {
    let catalog = toy_catalog();
    let section = &catalog.sections()[0];
    let response = SectionResponse {
        answers: vec![
            Answer::Selected(section.questions[0].options[0].clone()),
            Answer::Selected(section.questions[1].options[2].clone()),
        ],
        comment: "long comment that must not affect the subtotal".to_string(),
    };

    let result = score_section(section, &response).expect("section scores");
    assert_eq!(result.subtotal, 1 + 3);
    assert_eq!(result.questions[0].points, 1);
    assert_eq!(result.questions[1].points, 3);
    assert_eq!(result.comment, response.comment);
}

#[test]
fn comment_never_contributes_to_subtotal() {
    let catalog = toy_catalog();
    let section = &catalog.sections()[0];
    let answers = vec![
        Answer::Selected(section.questions[0].options[1].clone()),
        Answer::Unanswered,
    ];

    let with_comment = score_section(
        section,
        &SectionResponse {
            answers: answers.clone(),
            comment: "extensive notes".to_string(),
        },
    )
    .expect("section scores");
    let without_comment = score_section(
        section,
        &SectionResponse {
            answers,
            comment: String::new(),
        },
    )
    .expect("section scores");

    assert_eq!(with_comment.subtotal, 2);
    assert_eq!(with_comment.subtotal, without_comment.subtotal);
}

#[test]
fn answer_count_must_match_question_count() {
    let catalog = toy_catalog();
    let section = &catalog.sections()[0];
    let response = SectionResponse {
        answers: vec![Answer::Unanswered],
        comment: String::new(),
    };

    let err = score_section(section, &response).expect_err("one answer is missing");
    assert_eq!(
        err,
        ScoringError::AnswerCountMismatch {
            section: "Alpha".to_string(),
            expected: 2,
            actual: 1,
        }
    );
}

#[test]
fn standard_catalog_has_expected_shape() {
    let catalog = Catalog::standard();
    assert_eq!(catalog.sections().len(), 5);
    assert_eq!(catalog.question_count(), 34);
    assert_eq!(catalog.max_score(), 102);

    let extended = Catalog::with_gesi();
    assert_eq!(extended.sections().len(), 6);
    assert_eq!(extended.question_count(), 40);
    assert_eq!(extended.max_score(), 120);
}
