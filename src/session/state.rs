//! Session state and navigation.

use thiserror::Error;
use tracing::debug;

use crate::models::Question;

use super::score::{QuizResult, score};
use super::timer::{TickOutcome, Timer};

/// Seconds granted per question when no override is configured.
pub const DEFAULT_SECONDS_PER_QUESTION: u32 = 30;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("a quiz needs at least one question")]
    Empty,
}

/// One run of a quiz, from start to scored completion.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    answers: Vec<Option<String>>,
    timer: Timer,
}

impl QuizSession {
    /// Begin a session at the first question with every answer unset and the
    /// timer running for `questions.len() * seconds_per_question` seconds.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if `questions` is empty.
    pub fn start(questions: Vec<Question>, seconds_per_question: u32) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        let total_seconds = u32::try_from(questions.len())
            .unwrap_or(u32::MAX)
            .saturating_mul(seconds_per_question);
        let mut timer = Timer::new();
        timer.start(total_seconds);

        debug!(questions = questions.len(), total_seconds, "session started");

        Ok(Self {
            answers: vec![None; questions.len()],
            questions,
            current_index: 0,
            timer,
        })
    }

    /// Record `choice` for the current question, replacing any earlier answer.
    pub fn record_answer(&mut self, choice: impl Into<String>) {
        self.answers[self.current_index] = Some(choice.into());
    }

    pub fn go_next(&mut self) {
        if !self.is_last() {
            self.current_index += 1;
        }
    }

    pub fn go_prev(&mut self) {
        if !self.is_first() {
            self.current_index -= 1;
        }
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index == self.questions.len() - 1
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn current_answer(&self) -> Option<&str> {
        self.answers[self.current_index].as_deref()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// 1-based position for display.
    pub fn current_question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Option<String>] {
        &self.answers
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.timer.remaining_seconds()
    }

    /// Forward one elapsed second to the session timer.
    pub fn tick(&mut self) -> TickOutcome {
        self.timer.tick()
    }

    /// Stop the timer and score the session.
    pub fn submit(&mut self) -> QuizResult {
        self.timer.cancel();
        score(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::TimerStatus;

    fn questions(count: usize) -> Vec<Question> {
        (0..count)
            .map(|i| Question::new(format!("Question {}", i), ["a", "b", "c", "d"], "a"))
            .collect()
    }

    #[test]
    fn test_start_initializes_state() {
        let session = QuizSession::start(questions(3), DEFAULT_SECONDS_PER_QUESTION).unwrap();

        assert_eq!(session.current_index(), 0);
        assert!(session.answers().iter().all(Option::is_none));
        assert_eq!(session.remaining_seconds(), 90);
        assert!(session.timer().is_running());
    }

    #[test]
    fn test_start_rejects_empty_quiz() {
        let err = QuizSession::start(Vec::new(), DEFAULT_SECONDS_PER_QUESTION).unwrap_err();
        assert_eq!(err, SessionError::Empty);
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut session = QuizSession::start(questions(3), 30).unwrap();
        let moves = [true, true, true, true, false, true, false, false, false, false, true];

        for forward in moves {
            if forward {
                session.go_next();
            } else {
                session.go_prev();
            }
            assert!(session.current_index() < session.total_questions());
        }
    }

    #[test]
    fn test_boundaries_are_no_ops() {
        let mut session = QuizSession::start(questions(2), 30).unwrap();

        assert!(session.is_first());
        session.go_prev();
        assert_eq!(session.current_index(), 0);

        session.go_next();
        assert!(session.is_last());
        session.go_next();
        session.go_next();
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_single_question_is_first_and_last() {
        let session = QuizSession::start(questions(1), 30).unwrap();
        assert!(session.is_first());
        assert!(session.is_last());
    }

    #[test]
    fn test_record_answer_overwrites() {
        let mut session = QuizSession::start(questions(2), 30).unwrap();
        session.record_answer("a");
        session.record_answer("b");
        assert_eq!(session.current_answer(), Some("b"));

        session.go_next();
        assert_eq!(session.current_answer(), None);
        session.go_prev();
        assert_eq!(session.current_answer(), Some("b"));
    }

    #[test]
    fn test_submit_cancels_timer() {
        let mut session = QuizSession::start(questions(2), 30).unwrap();
        session.record_answer("a");
        let result = session.submit();

        assert_eq!(result.correct_count, 1);
        assert_eq!(session.timer().status(), TimerStatus::Cancelled);
        assert_eq!(session.tick(), TickOutcome::Idle);
    }
}
