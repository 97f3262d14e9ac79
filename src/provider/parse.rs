use crate::models::Question;

use super::ProviderError;

/// Parse the text returned by a provider into questions.
///
/// The text must be a non-empty JSON array of question records, and every
/// record's correct answer must be one of its options. The number of
/// questions is not checked against the request, and options are assumed
/// to be distinct.
///
/// # Errors
///
/// Returns `ProviderError::MalformedResponse` for empty text, invalid JSON,
/// an empty array, or a correct answer missing from its options.
pub fn parse_questions(text: &str) -> Result<Vec<Question>, ProviderError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ProviderError::MalformedResponse(
            "the response was empty".to_string(),
        ));
    }

    let questions: Vec<Question> = serde_json::from_str(text)
        .map_err(|err| ProviderError::MalformedResponse(format!("invalid quiz JSON: {}", err)))?;

    if questions.is_empty() {
        return Err(ProviderError::MalformedResponse(
            "the quiz contained no questions".to_string(),
        ));
    }

    if let Some(position) = questions.iter().position(|q| q.correct_index().is_none()) {
        return Err(ProviderError::MalformedResponse(format!(
            "question {} has a correct answer that is not one of its options",
            position + 1
        )));
    }

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_malformed(text: &str) {
        match parse_questions(text) {
            Err(ProviderError::MalformedResponse(_)) => {}
            other => panic!("expected malformed response, got {:?}", other),
        }
    }

    #[test]
    fn test_parses_in_order() {
        let text = r#"[
            {"question": "First?", "options": ["a", "b", "c", "d"], "correctAnswer": "b"},
            {"question": "Second?", "options": ["e", "f", "g", "h"], "correctAnswer": "h"}
        ]"#;
        let questions = parse_questions(text).unwrap();

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].text, "First?");
        assert_eq!(questions[1].correct_answer, "h");
    }

    #[test]
    fn test_empty_array_is_malformed() {
        assert_malformed("[]");
    }

    #[test]
    fn test_non_json_is_malformed() {
        assert_malformed("Sure! Here is your quiz:");
    }

    #[test]
    fn test_blank_text_is_malformed() {
        assert_malformed("");
        assert_malformed("  \n ");
    }

    #[test]
    fn test_object_instead_of_array_is_malformed() {
        assert_malformed(r#"{"question": "Q", "options": ["a", "b", "c", "d"], "correctAnswer": "a"}"#);
    }

    #[test]
    fn test_missing_field_is_malformed() {
        assert_malformed(r#"[{"question": "Q", "options": ["a", "b", "c", "d"]}]"#);
    }

    #[test]
    fn test_correct_answer_outside_options_is_malformed() {
        assert_malformed(r#"[{"question": "Q", "options": ["a", "b", "c", "d"], "correctAnswer": "z"}]"#);
    }

    #[test]
    fn test_count_is_not_enforced() {
        let text = r#"[{"question": "Only one", "options": ["a", "b", "c", "d"], "correctAnswer": "a"}]"#;
        assert_eq!(parse_questions(text).unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_options_are_trusted() {
        let text = r#"[{"question": "Q", "options": ["a", "a", "b", "c"], "correctAnswer": "a"}]"#;
        let questions = parse_questions(text).unwrap();
        assert_eq!(questions[0].correct_index(), Some(0));
    }
}
