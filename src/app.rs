use tracing::{info, warn};

use crate::config::{Config, MAX_QUESTIONS, MIN_QUESTIONS};
use crate::models::{Difficulty, Question};
use crate::provider::{ProviderError, QuizRequest};
use crate::session::{QuizResult, QuizSession, TickOutcome};

const NUM_OPTIONS: usize = 4;
const SAMPLE_TITLE: &str = "Sample Quiz";

/// Which provider a fetch should go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizSource {
    Sample,
    Remote,
}

/// A fetch the event loop has to run on the app's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchJob {
    pub source: QuizSource,
    pub request: QuizRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    ApiKey,
    Topic,
    Difficulty,
    Count,
    Sample,
}

impl SetupField {
    const ORDER: [SetupField; 5] = [
        SetupField::ApiKey,
        SetupField::Topic,
        SetupField::Difficulty,
        SetupField::Count,
        SetupField::Sample,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|field| *field == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_text(self) -> bool {
        matches!(self, SetupField::ApiKey | SetupField::Topic)
    }
}

/// The quiz settings form.
#[derive(Debug, Clone)]
pub struct SetupForm {
    pub api_key: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub count: usize,
    pub use_sample: bool,
    pub focus: SetupField,
    pub error: Option<String>,
}

impl SetupForm {
    fn from_config(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone().unwrap_or_default(),
            topic: config.topic.clone(),
            difficulty: config.difficulty,
            count: config.count.clamp(MIN_QUESTIONS, MAX_QUESTIONS),
            use_sample: config.use_sample,
            focus: SetupField::Topic,
            error: None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn push_char(&mut self, c: char) {
        match self.focus {
            SetupField::ApiKey => self.api_key.push(c),
            SetupField::Topic => self.topic.push(c),
            _ => return,
        }
        self.error = None;
    }

    pub fn pop_char(&mut self) {
        match self.focus {
            SetupField::ApiKey => self.api_key.pop(),
            SetupField::Topic => self.topic.pop(),
            _ => return,
        };
        self.error = None;
    }

    /// Step the focused choice field forward or back.
    pub fn adjust(&mut self, forward: bool) {
        match self.focus {
            SetupField::Difficulty => {
                self.difficulty = if forward {
                    self.difficulty.next()
                } else {
                    self.difficulty.previous()
                };
            }
            SetupField::Count => {
                self.count = if forward {
                    (self.count + 1).min(MAX_QUESTIONS)
                } else {
                    self.count.saturating_sub(1).max(MIN_QUESTIONS)
                };
            }
            SetupField::Sample => self.use_sample = !self.use_sample,
            SetupField::ApiKey | SetupField::Topic => {}
        }
    }

    fn request(&self) -> QuizRequest {
        let api_key = self.api_key.trim();
        QuizRequest {
            topic: self.topic.trim().to_string(),
            difficulty: self.difficulty,
            count: self.count,
            api_key: (!api_key.is_empty()).then(|| api_key.to_string()),
        }
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitReason {
    Manual,
    TimeUp,
}

#[derive(Debug, Clone)]
pub struct ActiveQuiz {
    pub title: String,
    pub session: QuizSession,
    /// Option under the cursor, not necessarily the recorded answer.
    pub cursor: usize,
}

impl ActiveQuiz {
    fn sync_cursor(&mut self) {
        self.cursor = self
            .session
            .current_answer()
            .and_then(|answer| self.session.current_question().option_index(answer))
            .unwrap_or(0);
    }
}

#[derive(Debug, Clone)]
pub struct FinishedQuiz {
    pub title: String,
    pub session: QuizSession,
    pub result: QuizResult,
    pub reason: SubmitReason,
    pub scroll: usize,
}

#[derive(Debug, Clone)]
pub enum AppState {
    Setup,
    /// A fetch is in flight; generating again is disabled.
    Loading { title: String },
    Quiz(ActiveQuiz),
    Result(FinishedQuiz),
}

pub struct App {
    pub state: AppState,
    form: SetupForm,
    defaults: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            state: AppState::Setup,
            form: SetupForm::from_config(&config),
            defaults: config,
        }
    }

    pub fn form(&self) -> &SetupForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SetupForm {
        &mut self.form
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, AppState::Quiz(_))
    }

    /// Validate the form and move to the loading screen.
    ///
    /// Returns the fetch to run, or `None` if the form is incomplete or a
    /// fetch is already pending.
    pub fn generate(&mut self) -> Option<FetchJob> {
        if !matches!(self.state, AppState::Setup) {
            return None;
        }

        let request = self.form.request();
        let source = if self.form.use_sample {
            QuizSource::Sample
        } else {
            if request.api_key.is_none() {
                self.form.error = Some("Please enter your API key.".to_string());
                return None;
            }
            if request.topic.is_empty() {
                self.form.error = Some("Don't forget to enter the quiz topic.".to_string());
                return None;
            }
            QuizSource::Remote
        };

        let title = match source {
            QuizSource::Sample => SAMPLE_TITLE.to_string(),
            QuizSource::Remote => format!("Quiz: {}", request.topic),
        };

        self.form.error = None;
        self.state = AppState::Loading { title };
        Some(FetchJob { source, request })
    }

    /// Handle the outcome of a fetch started by [`App::generate`].
    pub fn on_quiz_fetched(&mut self, result: Result<Vec<Question>, ProviderError>) {
        let AppState::Loading { title } = &self.state else {
            warn!("ignoring quiz that arrived outside the loading screen");
            return;
        };
        let title = title.clone();

        let questions = match result {
            Ok(questions) => questions,
            Err(err) => {
                warn!(%err, "quiz fetch failed");
                self.fail_setup(format!("Something went wrong: {}", err));
                return;
            }
        };

        match QuizSession::start(questions, self.defaults.seconds_per_question) {
            Ok(session) => {
                info!(%title, questions = session.total_questions(), "quiz started");
                self.state = AppState::Quiz(ActiveQuiz {
                    title,
                    session,
                    cursor: 0,
                });
            }
            Err(err) => self.fail_setup(format!("Something went wrong: {}", err)),
        }
    }

    fn fail_setup(&mut self, message: String) {
        self.form.error = Some(message);
        self.state = AppState::Setup;
    }

    /// One second elapsed. Submits automatically when the timer runs out.
    pub fn on_tick(&mut self) {
        let AppState::Quiz(quiz) = &mut self.state else {
            return;
        };

        if quiz.session.tick() == TickOutcome::Expired {
            info!("time is up");
            self.finish(SubmitReason::TimeUp);
        }
    }

    /// Manual submit, available on the last question only.
    pub fn submit(&mut self) {
        if let AppState::Quiz(quiz) = &self.state {
            if quiz.session.is_last() {
                self.finish(SubmitReason::Manual);
            }
        }
    }

    fn finish(&mut self, reason: SubmitReason) {
        let (title, mut session) = match std::mem::replace(&mut self.state, AppState::Setup) {
            AppState::Quiz(ActiveQuiz { title, session, .. }) => (title, session),
            other => {
                self.state = other;
                return;
            }
        };

        let result = session.submit();
        info!(
            correct = result.correct_count,
            total = result.total,
            ?reason,
            "quiz submitted"
        );
        self.state = AppState::Result(FinishedQuiz {
            title,
            session,
            result,
            reason,
            scroll: 0,
        });
    }

    pub fn select_next_option(&mut self) {
        if let AppState::Quiz(quiz) = &mut self.state {
            quiz.cursor = (quiz.cursor + 1) % NUM_OPTIONS;
        }
    }

    pub fn select_previous_option(&mut self) {
        if let AppState::Quiz(quiz) = &mut self.state {
            quiz.cursor = (quiz.cursor + NUM_OPTIONS - 1) % NUM_OPTIONS;
        }
    }

    /// Record the option under the cursor as the answer.
    pub fn answer_selected(&mut self) {
        if let AppState::Quiz(quiz) = &self.state {
            let cursor = quiz.cursor;
            self.answer_option(cursor);
        }
    }

    pub fn answer_option(&mut self, index: usize) {
        if let AppState::Quiz(quiz) = &mut self.state {
            let Some(choice) = quiz.session.current_question().options.get(index).cloned() else {
                return;
            };
            quiz.session.record_answer(choice);
            quiz.cursor = index;
        }
    }

    pub fn next_question(&mut self) {
        if let AppState::Quiz(quiz) = &mut self.state {
            quiz.session.go_next();
            quiz.sync_cursor();
        }
    }

    pub fn previous_question(&mut self) {
        if let AppState::Quiz(quiz) = &mut self.state {
            quiz.session.go_prev();
            quiz.sync_cursor();
        }
    }

    pub fn scroll_results_down(&mut self) {
        if let AppState::Result(finished) = &mut self.state {
            let max_scroll = finished.session.total_questions().saturating_sub(1);
            finished.scroll = (finished.scroll + 1).min(max_scroll);
        }
    }

    pub fn scroll_results_up(&mut self) {
        if let AppState::Result(finished) = &mut self.state {
            finished.scroll = finished.scroll.saturating_sub(1);
        }
    }

    /// Drop the session and go back to a fresh form, keeping the API key.
    pub fn restart(&mut self) {
        if matches!(self.state, AppState::Loading { .. }) {
            return;
        }

        let api_key = std::mem::take(&mut self.form.api_key);
        self.form = SetupForm::from_config(&self.defaults);
        self.form.api_key = api_key;
        self.state = AppState::Setup;
    }
}
