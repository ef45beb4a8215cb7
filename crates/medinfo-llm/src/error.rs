//! Typed errors for completion calls.

use async_openai::error::OpenAIError;
use thiserror::Error;

/// Errors that can occur while requesting a completion.
#[derive(Error, Debug)]
pub enum LlmError {
    /// The request could not be constructed.
    #[error("invalid completion request: {0}")]
    InvalidRequest(String),

    /// Network-level failure: connect error, TLS failure, or timeout.
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote service answered with an error payload.
    #[error("API error: {0}")]
    Api(String),

    /// The response body did not match the expected completion shape.
    #[error("unexpected response shape: {0}")]
    UnexpectedResponse(String),

    /// The response decoded but carried no message content.
    #[error("completion response contained no content")]
    MissingContent,
}

impl From<OpenAIError> for LlmError {
    fn from(err: OpenAIError) -> Self {
        match err {
            OpenAIError::Reqwest(e) => LlmError::Transport(e.to_string()),
            OpenAIError::ApiError(e) => LlmError::Api(e.to_string()),
            OpenAIError::JSONDeserialize(e) => LlmError::UnexpectedResponse(e.to_string()),
            OpenAIError::InvalidArgument(msg) => LlmError::InvalidRequest(msg),
            other => LlmError::Transport(other.to_string()),
        }
    }
}
