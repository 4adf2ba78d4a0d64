//! Error types for Bias Core

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BiasError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Invalid model output: {0}")]
    InvalidModelOutput(String),
}

pub type BiasResult<T> = Result<T, BiasError>;

/// Trim a headline and reject it if nothing is left
pub fn validate_headline(headline: &str) -> BiasResult<&str> {
    let trimmed = headline.trim();
    if trimmed.is_empty() {
        return Err(BiasError::InvalidInput("Headline cannot be empty".into()));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_headline() {
        assert_eq!(validate_headline("  Markets rally  ").unwrap(), "Markets rally");
        assert!(matches!(validate_headline("   \n"), Err(BiasError::InvalidInput(_))));
        assert!(validate_headline("").is_err());
    }
}
