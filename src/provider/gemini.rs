//! Gemini `generateContent` client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::models::Question;

use super::{ProviderError, QuizProvider, QuizRequest, parse_questions};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];
const SAFETY_THRESHOLD: &str = "BLOCK_MEDIUM_AND_ABOVE";

#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub base_url: String,
    pub model: String,
    /// Language the questions, options and answers are written in.
    pub language: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            language: "English".to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
}

impl GeminiProvider {
    /// # Errors
    ///
    /// Returns `ProviderError::Network` if the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn build_request(&self, request: &QuizRequest) -> GenerateRequest {
        GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: Some(system_instruction(&self.config.language)),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(user_prompt(request, &self.config.language)),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
            safety_settings: SAFETY_CATEGORIES
                .into_iter()
                .map(|category| SafetySetting {
                    category,
                    threshold: SAFETY_THRESHOLD,
                })
                .collect(),
        }
    }
}

#[async_trait]
impl QuizProvider for GeminiProvider {
    async fn fetch_quiz(&self, request: &QuizRequest) -> Result<Vec<Question>, ProviderError> {
        let api_key = request
            .credential()
            .ok_or_else(|| ProviderError::Configuration("no API key was provided".to_string()))?;
        if request.topic.trim().is_empty() {
            return Err(ProviderError::Configuration(
                "the quiz topic is missing".to_string(),
            ));
        }
        if request.count == 0 {
            return Err(ProviderError::Configuration(
                "the quiz needs at least one question".to_string(),
            ));
        }

        info!(
            topic = %request.topic,
            difficulty = %request.difficulty,
            count = request.count,
            model = %self.config.model,
            "requesting quiz from Gemini"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&self.build_request(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Gemini rejected the request");
            return Err(ProviderError::UpstreamStatus(status));
        }

        let body = response.text().await?;
        let text = extract_text(&body)?;
        let questions = parse_questions(&text).inspect_err(|err| warn!(%err, "unusable quiz payload"))?;

        info!(received = questions.len(), "quiz generated");
        Ok(questions)
    }
}

fn system_instruction(language: &str) -> String {
    format!(
        r#"You are an assistant that writes quizzes. You generate quizzes from the topic, difficulty level and number of questions you are given.
The answer MUST be a valid JSON array. Each object in the array is one question and must follow this structure:
{{
  "question": "Question text",
  "options": ["Option A", "Option B", "Option C", "Option D"],
  "correctAnswer": "Exact text of the correct option, which must be one of the options."
}}
All content (questions, options, correct answers) MUST be written in {language}, in clear and natural language.
Do not include any text outside the JSON array (no introductions, conclusions or markdown such as ```json).
Only the JSON array. Make sure every string inside the JSON is correctly escaped."#
    )
}

fn user_prompt(request: &QuizRequest, language: &str) -> String {
    format!(
        "Create a quiz about \"{}\".\n\
         The quiz must have exactly {} questions.\n\
         The questions must be {}.\n\
         Each question must have 4 multiple-choice options.\n\
         Give the correct answer for each question, following the JSON structure.\n\
         All quiz content (questions, options, answers) MUST be in {}.",
        request.topic.trim(),
        request.count,
        request.difficulty.prompt_description(),
        language
    )
}

/// Pull the generated text out of a `generateContent` response body.
fn extract_text(body: &str) -> Result<String, ProviderError> {
    let response: GenerateResponse = serde_json::from_str(body).map_err(|err| {
        ProviderError::MalformedResponse(format!("unreadable response envelope: {}", err))
    })?;

    if let Some(feedback) = &response.prompt_feedback {
        if let Some(reason) = &feedback.block_reason {
            warn!(%reason, "prompt blocked");
            return Err(ProviderError::Blocked {
                reason: reason.clone(),
                ratings: summarize_ratings(&feedback.safety_ratings),
            });
        }
    }

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(ProviderError::MalformedResponse(
            "the response was empty".to_string(),
        ));
    };

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() && candidate.finish_reason.as_deref() == Some("SAFETY") {
        return Err(ProviderError::Blocked {
            reason: "SAFETY".to_string(),
            ratings: summarize_ratings(&candidate.safety_ratings),
        });
    }

    Ok(text)
}

fn summarize_ratings(ratings: &[SafetyRating]) -> String {
    if ratings.is_empty() {
        return "N/A".to_string();
    }

    ratings
        .iter()
        .map(|rating| {
            let category = rating
                .category
                .strip_prefix("HARM_CATEGORY_")
                .unwrap_or(&rating.category);
            format!("{}: {}", category, rating.probability)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Debug, Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
    #[serde(default)]
    safety_ratings: Vec<SafetyRating>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
    #[serde(default)]
    safety_ratings: Vec<SafetyRating>,
}

#[derive(Debug, Deserialize)]
struct SafetyRating {
    category: String,
    probability: String,
}
