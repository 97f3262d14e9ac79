use async_trait::async_trait;

use crate::models::Question;

use super::{ProviderError, QuizProvider, QuizRequest};

/// Built-in arithmetic quiz, available without an API key.
pub fn sample_questions(count: usize) -> Vec<Question> {
    let all = [
        Question::new("What is 1 + 1?", ["1", "2", "3", "4"], "2"),
        Question::new("What is 2 + 2?", ["2", "3", "4", "5"], "4"),
        Question::new("What is 3 + 3?", ["4", "5", "6", "7"], "6"),
        Question::new("What is 4 + 4?", ["6", "7", "8", "9"], "8"),
    ];
    let take = count.clamp(1, all.len());
    all.into_iter().take(take).collect()
}

/// Serves [`sample_questions`], ignoring topic, difficulty and credential.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleProvider;

#[async_trait]
impl QuizProvider for SampleProvider {
    async fn fetch_quiz(&self, request: &QuizRequest) -> Result<Vec<Question>, ProviderError> {
        Ok(sample_questions(request.count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    #[test]
    fn test_truncates_to_requested_count() {
        assert_eq!(sample_questions(2).len(), 2);
        assert_eq!(sample_questions(4).len(), 4);
        assert_eq!(sample_questions(10).len(), 4);
    }

    #[test]
    fn test_never_empty() {
        let questions = sample_questions(0);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "What is 1 + 1?");
    }

    #[test]
    fn test_answers_are_among_options() {
        for question in sample_questions(4) {
            assert!(question.correct_index().is_some());
        }
    }

    #[tokio::test]
    async fn test_needs_no_credential() {
        let request = QuizRequest {
            topic: String::new(),
            difficulty: Difficulty::Hard,
            count: 3,
            api_key: None,
        };
        let questions = SampleProvider.fetch_quiz(&request).await.unwrap();
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[2].correct_answer, "6");
    }
}
