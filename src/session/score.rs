//! Scoring of a finished session.

use crate::models::Question;

use super::state::QuizSession;

/// Final tally of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub correct_count: usize,
    pub total: usize,
}

impl QuizResult {
    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.correct_count as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Per-question outcome shown on the result screen.
#[derive(Debug, Clone, Copy)]
pub struct AnswerReview<'a> {
    pub question: &'a Question,
    pub answer: Option<&'a str>,
    pub is_correct: bool,
}

/// Count answers equal to their question's correct answer.
///
/// Unset answers count as wrong. Pure and idempotent.
pub fn score(session: &QuizSession) -> QuizResult {
    let correct_count = session
        .answers()
        .iter()
        .zip(session.questions())
        .filter(|(answer, question)| is_correct(answer.as_deref(), question))
        .count();

    QuizResult {
        correct_count,
        total: session.total_questions(),
    }
}

pub fn review(session: &QuizSession) -> Vec<AnswerReview<'_>> {
    session
        .answers()
        .iter()
        .zip(session.questions())
        .map(|(answer, question)| {
            let answer = answer.as_deref();
            AnswerReview {
                question,
                answer,
                is_correct: is_correct(answer, question),
            }
        })
        .collect()
}

fn is_correct(answer: Option<&str>, question: &Question) -> bool {
    answer.is_some_and(|choice| question.is_correct(choice))
}
