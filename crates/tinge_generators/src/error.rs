//! Generator error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("prompt must not be empty")]
    EmptyPrompt,

    #[error("generation failed: {0}")]
    Failed(String),

    #[error("generator not found: {0}")]
    GeneratorNotFound(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prompt_message() {
        assert_eq!(
            GeneratorError::EmptyPrompt.to_string(),
            "prompt must not be empty"
        );
    }

    #[test]
    fn failed_carries_reason() {
        let err = GeneratorError::Failed("backend unreachable".to_string());
        assert_eq!(err.to_string(), "generation failed: backend unreachable");
    }

    #[test]
    fn not_found_names_generator() {
        let err = GeneratorError::GeneratorNotFound("openai".to_string());
        assert!(err.to_string().contains("openai"));
    }
}
