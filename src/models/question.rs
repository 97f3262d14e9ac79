use serde::{Deserialize, Serialize};

/// A multiple-choice question as produced by a quiz provider.
///
/// The wire shape is `{"question": ..., "options": [..4], "correctAnswer": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    pub options: [String; 4],
    pub correct_answer: String,
}

impl Question {
    pub fn new(text: impl Into<String>, options: [&str; 4], correct_answer: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: options.map(String::from),
            correct_answer: correct_answer.into(),
        }
    }

    /// Whether `choice` is exactly the correct option.
    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_answer == choice
    }

    /// Index of the correct option, if the answer is one of the options.
    pub fn correct_index(&self) -> Option<usize> {
        self.option_index(&self.correct_answer)
    }

    pub fn option_index(&self, choice: &str) -> Option<usize> {
        self.options.iter().position(|option| option == choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{"question":"What is 1 + 1?","options":["1","2","3","4"],"correctAnswer":"2"}"#;
        let question: Question = serde_json::from_str(json).unwrap();

        assert_eq!(question.text, "What is 1 + 1?");
        assert_eq!(question.correct_index(), Some(1));
        assert!(question.is_correct("2"));
        assert!(!question.is_correct("3"));
    }

    #[test]
    fn test_rejects_wrong_option_count() {
        let json = r#"{"question":"Q","options":["a","b","c"],"correctAnswer":"a"}"#;
        assert!(serde_json::from_str::<Question>(json).is_err());
    }

    #[test]
    fn test_serializes_camel_case() {
        let question = Question::new("Q", ["a", "b", "c", "d"], "c");
        let json = serde_json::to_string(&question).unwrap();
        assert!(json.contains("\"question\":\"Q\""));
        assert!(json.contains("\"correctAnswer\":\"c\""));
    }
}
