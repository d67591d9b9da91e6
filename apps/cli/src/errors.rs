use thiserror::Error;

use crate::extract::ExtractError;
use crate::llm_client::LlmError;

/// Application-level error type.
///
/// Every variant is terminal for the current action only — the session stays
/// usable, the driver reports the message and returns to the prompt.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Authentication failed: check your API key")]
    Authentication,

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Auth => AppError::Authentication,
            LlmError::EmptyContent => {
                AppError::MalformedResponse("model returned empty content".to_string())
            }
            other => AppError::Provider(other.to_string()),
        }
    }
}
