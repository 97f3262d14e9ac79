//! Runtime configuration.

use std::env;
use std::path::PathBuf;

use crate::models::Difficulty;
use crate::provider::GeminiConfig;
use crate::session::DEFAULT_SECONDS_PER_QUESTION;

pub const MIN_QUESTIONS: usize = 1;
pub const MAX_QUESTIONS: usize = 20;

/// Settings the application starts with.
///
/// The topic, difficulty, count and sample flag prefill the setup form and
/// are what the form returns to on restart.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub topic: String,
    pub difficulty: Difficulty,
    pub count: usize,
    pub use_sample: bool,
    pub seconds_per_question: u32,
    pub gemini: GeminiConfig,
    pub log_file: PathBuf,
}

impl Config {
    pub fn default_log_file() -> PathBuf {
        env::temp_dir().join("ai-quiz.log")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            topic: "Basic Math".to_string(),
            difficulty: Difficulty::Easy,
            count: 4,
            use_sample: false,
            seconds_per_question: DEFAULT_SECONDS_PER_QUESTION,
            gemini: GeminiConfig::default(),
            log_file: Self::default_log_file(),
        }
    }
}
