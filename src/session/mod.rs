//! Quiz session core: state, navigation, countdown and scoring.

mod score;
mod state;
mod timer;

pub use score::{AnswerReview, QuizResult, review, score};
pub use state::{DEFAULT_SECONDS_PER_QUESTION, QuizSession, SessionError};
pub use timer::{TickOutcome, Timer, TimerStatus, format_clock};
