//! # ai-quiz
//!
//! A terminal quiz that asks a generative-AI service for multiple-choice
//! questions on any topic, then runs a timed quiz and scores it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ai_quiz::{Config, Quiz, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::new(Config {
//!         use_sample: true,
//!         ..Config::default()
//!     })?;
//!
//!     quiz.run().await
//! }
//! ```

mod app;
pub mod config;
mod input;
pub mod logging;
mod models;
pub mod provider;
pub mod session;
pub mod terminal;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

pub use app::{ActiveQuiz, App, AppState, FetchJob, FinishedQuiz, QuizSource, SetupField, SetupForm, SubmitReason};
pub use config::Config;
pub use models::{Difficulty, Question};
pub use provider::{GeminiProvider, ProviderError, QuizProvider, QuizRequest, SampleProvider};

use input::Control;

const TICK_PERIOD: Duration = Duration::from_secs(1);

type FetchResult = Result<Vec<Question>, ProviderError>;

/// Error type for running the application.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to set up logging: {0}")]
    Logging(String),
    #[error("failed to set up the quiz provider: {0}")]
    Provider(#[from] ProviderError),
}

/// A quiz application bound to its providers.
pub struct Quiz {
    app: App,
    sample: Arc<dyn QuizProvider>,
    remote: Arc<dyn QuizProvider>,
}

impl Quiz {
    /// Build the application with the sample provider and a Gemini client.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Provider` if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, QuizError> {
        let remote = GeminiProvider::new(config.gemini.clone())?;
        Ok(Self::with_providers(config, Arc::new(SampleProvider), Arc::new(remote)))
    }

    /// Build the application with custom providers.
    pub fn with_providers(
        config: Config,
        sample: Arc<dyn QuizProvider>,
        remote: Arc<dyn QuizProvider>,
    ) -> Self {
        Self {
            app: App::new(config),
            sample,
            remote,
        }
    }

    /// Take over the terminal and run until the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = self.run_event_loop(&mut term).await;
        terminal::restore()?;
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    fn provider(&self, source: QuizSource) -> Arc<dyn QuizProvider> {
        match source {
            QuizSource::Sample => Arc::clone(&self.sample),
            QuizSource::Remote => Arc::clone(&self.remote),
        }
    }

    async fn run_event_loop(&mut self, terminal: &mut terminal::AppTerminal) -> Result<(), QuizError> {
        let (tx, mut rx) = mpsc::unbounded_channel::<FetchResult>();
        let mut events = EventStream::new();
        let mut ticker = time::interval(TICK_PERIOD);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            terminal.draw(|frame| ui::render(frame, &self.app))?;

            tokio::select! {
                event = events.next() => {
                    let Some(event) = event else {
                        break;
                    };
                    let Event::Key(key) = event? else {
                        continue;
                    };
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }

                    match input::handle_key(&mut self.app, key) {
                        Control::Continue => {}
                        Control::Quit => break,
                        Control::Fetch(job) => self.spawn_fetch(job, tx.clone()),
                    }
                }
                _ = ticker.tick() => {
                    self.app.on_tick();
                }
                Some(result) = rx.recv() => {
                    self.app.on_quiz_fetched(result);
                    if self.app.is_playing() {
                        ticker.reset();
                    }
                }
            }
        }

        info!("quitting");
        Ok(())
    }

    /// Run `job` off the event loop and deliver its result through `tx`.
    fn spawn_fetch(&self, job: FetchJob, tx: mpsc::UnboundedSender<FetchResult>) {
        let provider = self.provider(job.source);
        debug!(source = ?job.source, "fetching quiz");

        tokio::spawn(async move {
            let result = provider.fetch_quiz(&job.request).await;
            let _ = tx.send(result);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FakeProvider {
        outcome: fn() -> FetchResult,
    }

    #[async_trait]
    impl QuizProvider for FakeProvider {
        async fn fetch_quiz(&self, _request: &QuizRequest) -> FetchResult {
            (self.outcome)()
        }
    }

    fn blocked() -> FetchResult {
        Err(ProviderError::Blocked {
            reason: "SAFETY".to_string(),
            ratings: "N/A".to_string(),
        })
    }

    fn two_questions() -> FetchResult {
        Ok(vec![
            Question::new("Capital of France?", ["Paris", "Rome", "Madrid", "Lisbon"], "Paris"),
            Question::new("Largest planet?", ["Mars", "Venus", "Jupiter", "Earth"], "Jupiter"),
        ])
    }

    fn quiz_with(outcome: fn() -> FetchResult) -> Quiz {
        Quiz::with_providers(
            Config {
                api_key: Some("key".to_string()),
                ..Config::default()
            },
            Arc::new(SampleProvider),
            Arc::new(FakeProvider { outcome }),
        )
    }

    async fn fetch(quiz: &mut Quiz) {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let job = quiz.app_mut().generate().unwrap();
        quiz.spawn_fetch(job, tx);
        let result = rx.recv().await.unwrap();
        quiz.app_mut().on_quiz_fetched(result);
    }

    #[tokio::test]
    async fn test_remote_quiz_starts_session() {
        let mut quiz = quiz_with(two_questions);
        fetch(&mut quiz).await;

        let AppState::Quiz(active) = &quiz.app().state else {
            panic!("expected quiz screen");
        };
        assert_eq!(active.title, "Quiz: Basic Math");
        assert_eq!(active.session.total_questions(), 2);
        assert_eq!(active.session.remaining_seconds(), 60);
    }

    #[tokio::test]
    async fn test_blocked_quiz_reports_reason() {
        let mut quiz = quiz_with(blocked);
        fetch(&mut quiz).await;

        assert!(matches!(quiz.app().state, AppState::Setup));
        let error = quiz.app().form().error.clone().unwrap();
        assert!(error.contains("SAFETY"));
    }

    #[tokio::test]
    async fn test_sample_toggle_bypasses_remote() {
        let mut quiz = quiz_with(blocked);
        quiz.app_mut().form_mut().use_sample = true;
        fetch(&mut quiz).await;

        let AppState::Quiz(active) = &quiz.app().state else {
            panic!("expected quiz screen");
        };
        assert_eq!(active.title, "Sample Quiz");
        assert_eq!(active.session.total_questions(), 4);
    }
}
