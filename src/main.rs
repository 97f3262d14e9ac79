use std::path::PathBuf;
use std::time::Duration;

use ai_quiz::config::{MAX_QUESTIONS, MIN_QUESTIONS};
use ai_quiz::provider::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig};
use ai_quiz::{Config, Difficulty, Quiz, logging};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Gemini model used to generate questions
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Base URL of the Gemini REST API
    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Topic prefilled in the setup form
    #[arg(short, long, default_value = "Basic Math")]
    topic: String,

    /// Difficulty prefilled in the setup form
    #[arg(short, long, value_enum, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Number of questions prefilled in the setup form
    #[arg(
        short,
        long,
        default_value_t = 4,
        value_parser = clap::value_parser!(u64).range(MIN_QUESTIONS as u64..=MAX_QUESTIONS as u64)
    )]
    count: u64,

    /// Start with the built-in sample quiz selected
    #[arg(long)]
    sample: bool,

    /// Language the generated quiz is written in
    #[arg(long, default_value = "English")]
    language: String,

    /// Seconds allowed per question
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
    seconds_per_question: u32,

    /// Timeout for the generation request, in seconds
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,

    /// File that receives the application log
    #[arg(long, env = "AI_QUIZ_LOG")]
    log_file: Option<PathBuf>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            api_key: args.api_key,
            topic: args.topic,
            difficulty: args.difficulty,
            count: args.count as usize,
            use_sample: args.sample,
            seconds_per_question: args.seconds_per_question,
            gemini: GeminiConfig {
                base_url: args.base_url,
                model: args.model,
                language: args.language,
                timeout: Duration::from_secs(args.timeout_secs),
            },
            log_file: args.log_file.unwrap_or_else(Config::default_log_file),
        }
    }
}

#[tokio::main]
async fn main() {
    let config = Config::from(Args::parse());

    if let Err(e) = logging::init(&config.log_file) {
        eprintln!("Warning: {}", e);
    }

    let quiz = match Quiz::new(config) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = quiz.run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from(Args::try_parse_from(["ai-quiz"]).unwrap());
        assert_eq!(config.seconds_per_question, 30);
        assert_eq!(config.count, 4);
        assert_eq!(config.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_rejects_zero_seconds_per_question() {
        assert!(Args::try_parse_from(["ai-quiz", "--seconds-per-question", "0"]).is_err());

        let args = Args::try_parse_from(["ai-quiz", "--seconds-per-question", "1"]).unwrap();
        assert_eq!(args.seconds_per_question, 1);
    }

    #[test]
    fn test_rejects_unknown_difficulty() {
        assert!(Args::try_parse_from(["ai-quiz", "--difficulty", "extreme"]).is_err());

        let args = Args::try_parse_from(["ai-quiz", "--difficulty", "hard"]).unwrap();
        assert_eq!(args.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_rejects_count_out_of_range() {
        assert!(Args::try_parse_from(["ai-quiz", "--count", "0"]).is_err());
        assert!(Args::try_parse_from(["ai-quiz", "--count", "21"]).is_err());
    }
}
