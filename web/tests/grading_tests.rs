/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the quiz scoring function

use app_core::types::{MAnswer, MQuestion};
use uuid::Uuid;
use web::endpoints::quiz::{SubmittedAnswer, score_submission};

/// Builds a question with the given answer texts; the answer at
/// `correct` is the flagged one.
fn make_question(answers: &[&str], correct: usize) -> (MQuestion, Vec<MAnswer>) {
    let question = MQuestion {
        id: Uuid::new_v4(),
        quiz_id: Uuid::new_v4(),
        text: "What does the borrow checker do?".to_string(),
    };

    let answers = answers
        .iter()
        .enumerate()
        .map(|(i, text)| MAnswer {
            id: Uuid::new_v4(),
            question_id: question.id,
            text: text.to_string(),
            is_correct: i == correct,
        })
        .collect();

    (question, answers)
}

fn correct_submission(questions: &[(MQuestion, Vec<MAnswer>)]) -> Vec<SubmittedAnswer> {
    questions
        .iter()
        .map(|(question, answers)| SubmittedAnswer {
            question_id: question.id,
            answer_id: answers.iter().find(|a| a.is_correct).unwrap().id,
        })
        .collect()
}

fn wrong_submission(questions: &[(MQuestion, Vec<MAnswer>)]) -> Vec<SubmittedAnswer> {
    questions
        .iter()
        .map(|(question, answers)| SubmittedAnswer {
            question_id: question.id,
            answer_id: answers.iter().find(|a| !a.is_correct).unwrap().id,
        })
        .collect()
}

#[test]
fn test_all_correct_scores_100() {
    let questions: Vec<_> = (0..4).map(|_| make_question(&["a", "b", "c"], 1)).collect();
    let submitted = correct_submission(&questions);

    let result = score_submission(&questions, &submitted).unwrap();

    assert_eq!(result.correct, 4);
    assert_eq!(result.total, 4);
    assert_eq!(result.score, 100.0);
    assert!(result.passed);
}

#[test]
fn test_all_wrong_scores_0() {
    let questions: Vec<_> = (0..4).map(|_| make_question(&["a", "b"], 0)).collect();
    let submitted = wrong_submission(&questions);

    let result = score_submission(&questions, &submitted).unwrap();

    assert_eq!(result.correct, 0);
    assert_eq!(result.score, 0.0);
    assert!(!result.passed);
}

#[test]
fn test_pass_threshold_is_inclusive() {
    // 4 of 5 correct is exactly 80 and passes.
    let questions: Vec<_> = (0..5).map(|_| make_question(&["a", "b"], 0)).collect();
    let mut submitted = correct_submission(&questions);
    submitted[4] = wrong_submission(&questions[4..])[0];

    let result = score_submission(&questions, &submitted).unwrap();

    assert_eq!(result.correct, 4);
    assert_eq!(result.score, 80.0);
    assert!(result.passed);
}

#[test]
fn test_just_below_threshold_fails() {
    // 3 of 5 correct is 60 and fails.
    let questions: Vec<_> = (0..5).map(|_| make_question(&["a", "b"], 0)).collect();
    let mut submitted = correct_submission(&questions);
    submitted[3] = wrong_submission(&questions[3..4])[0];
    submitted[4] = wrong_submission(&questions[4..])[0];

    let result = score_submission(&questions, &submitted).unwrap();

    assert_eq!(result.correct, 3);
    assert_eq!(result.score, 60.0);
    assert!(!result.passed);
}

#[test]
fn test_empty_quiz_is_rejected() {
    assert!(score_submission(&[], &[]).is_none());
}

#[test]
fn test_empty_submission_scores_0() {
    let questions: Vec<_> = (0..3).map(|_| make_question(&["a", "b"], 0)).collect();

    let result = score_submission(&questions, &[]).unwrap();

    assert_eq!(result.correct, 0);
    assert_eq!(result.score, 0.0);
    assert!(!result.passed);
}

#[test]
fn test_unknown_question_ids_do_not_count() {
    let questions: Vec<_> = (0..2).map(|_| make_question(&["a", "b"], 0)).collect();

    let submitted = vec![SubmittedAnswer {
        question_id: Uuid::new_v4(),
        answer_id: questions[0].1[0].id,
    }];

    let result = score_submission(&questions, &submitted).unwrap();

    assert_eq!(result.correct, 0);
    assert!(!result.passed);
}

#[test]
fn test_question_without_correct_answer_counts_against_total() {
    let mut questions: Vec<_> = (0..2).map(|_| make_question(&["a", "b"], 0)).collect();
    let submitted = correct_submission(&questions);

    // Flag nothing correct on the second question.
    for answer in &mut questions[1].1 {
        answer.is_correct = false;
    }

    let result = score_submission(&questions, &submitted).unwrap();

    assert_eq!(result.correct, 1);
    assert_eq!(result.total, 2);
    assert_eq!(result.score, 50.0);
    assert!(!result.passed);
}

#[test]
fn test_submitted_answer_deserialization() {
    let json = r#"{"question_id":"6f8a2f1e-26c6-4d0e-9b3c-2b9c6f3f5d10","answer_id":"0e1f2a3b-4c5d-6e7f-8a9b-0c1d2e3f4a5b"}"#;

    let submitted: SubmittedAnswer = serde_json::from_str(json).unwrap();
    assert_eq!(
        submitted.question_id.to_string(),
        "6f8a2f1e-26c6-4d0e-9b3c-2b9c6f3f5d10"
    );
}
