//! Quiz source providers.
//!
//! A provider turns a [`QuizRequest`] into an ordered list of questions,
//! either from the built-in sample set or from the Gemini text-generation API.

mod gemini;
mod parse;
mod sample;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Difficulty, Question};

pub use gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig, GeminiProvider};
pub use parse::parse_questions;
pub use sample::{SampleProvider, sample_questions};

/// Errors emitted while fetching a quiz.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProviderError {
    #[error("{0}")]
    Configuration(String),
    #[error("quiz generation was blocked by the AI service. Reason: {reason} (details: {ratings})")]
    Blocked { reason: String, ratings: String },
    #[error("the AI service returned an unexpected response: {0}")]
    MalformedResponse(String),
    #[error("the AI service responded with status {0}")]
    UpstreamStatus(reqwest::StatusCode),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Arguments of a quiz fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub topic: String,
    pub difficulty: Difficulty,
    pub count: usize,
    pub api_key: Option<String>,
}

impl QuizRequest {
    /// The API key, if one was supplied and is not blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[async_trait]
pub trait QuizProvider: Send + Sync {
    /// Fetch the questions for `request`, in the order they should be asked.
    async fn fetch_quiz(&self, request: &QuizRequest) -> Result<Vec<Question>, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(api_key: Option<&str>) -> QuizRequest {
        QuizRequest {
            topic: "Rust".to_string(),
            difficulty: Difficulty::Easy,
            count: 4,
            api_key: api_key.map(String::from),
        }
    }

    #[test]
    fn test_credential_ignores_blank_keys() {
        assert_eq!(request(None).credential(), None);
        assert_eq!(request(Some("   ")).credential(), None);
        assert_eq!(request(Some(" key ")).credential(), Some("key"));
    }

    #[test]
    fn test_blocked_message_carries_reason() {
        let err = ProviderError::Blocked {
            reason: "SAFETY".to_string(),
            ratings: "HARASSMENT: HIGH".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("SAFETY"));
        assert!(message.contains("HARASSMENT: HIGH"));
    }
}
