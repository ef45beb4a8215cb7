//! OpenAI-compatible chat client bound to the Groq API.

use std::time::{Duration, Instant};

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::info;

use crate::error::LlmError;

/// Base URL of Groq's OpenAI-compatible endpoint.
pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Timeout applied uniformly to every completion call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// A single completion exchange: an optional system message and one user message.
#[derive(Debug, Clone)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub system_prompt: Option<&'a str>,
    pub user_prompt: &'a str,
}

/// Client for Groq's chat-completion API.
///
/// Immutable after construction and safe to share across concurrent requests.
pub struct GroqClient {
    client: Client<OpenAIConfig>,
}

impl GroqClient {
    /// Creates a client bound to the given API key and the Groq endpoint.
    ///
    /// The key is not validated here; an empty or wrong key surfaces as an
    /// authentication failure on the first call.
    pub fn new(api_key: &str) -> Self {
        Self::with_api_base(api_key, GROQ_API_BASE)
    }

    /// Creates a client against an alternative OpenAI-compatible endpoint.
    pub fn with_api_base(api_key: &str, api_base: &str) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_base);

        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            client: Client::with_config(config).with_http_client(http_client),
        }
    }

    /// Sends a completion request and returns the first choice's message content.
    pub async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, LlmError> {
        let start = Instant::now();
        let messages = build_messages(request)?;

        let completion = CreateChatCompletionRequestArgs::default()
            .model(request.model)
            .messages(messages)
            .build()?;

        let response = self.client.chat().create(completion).await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(LlmError::MissingContent)?;

        info!(
            "LLM: {}ms, model: {}",
            start.elapsed().as_millis(),
            request.model
        );

        Ok(content)
    }
}

/// Builds the message list: optional system prompt followed by the user prompt.
fn build_messages(
    request: &CompletionRequest<'_>,
) -> Result<Vec<ChatCompletionRequestMessage>, OpenAIError> {
    let mut messages = Vec::with_capacity(2);

    if let Some(system) = request.system_prompt {
        messages.push(ChatCompletionRequestMessage::System(
            ChatCompletionRequestSystemMessageArgs::default()
                .content(system)
                .build()?,
        ));
    }

    messages.push(ChatCompletionRequestMessage::User(
        ChatCompletionRequestUserMessageArgs::default()
            .content(request.user_prompt)
            .build()?,
    ));

    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::{build_messages, CompletionRequest};
    use async_openai::types::ChatCompletionRequestMessage;

    #[test]
    fn system_prompt_precedes_user_prompt() {
        let request = CompletionRequest {
            model: "llama-3.1-8b-instant",
            system_prompt: Some("persona"),
            user_prompt: "question",
        };

        let messages = build_messages(&request).unwrap();
        assert_eq!(messages.len(), 2);
        assert!(matches!(messages[0], ChatCompletionRequestMessage::System(_)));
        assert!(matches!(messages[1], ChatCompletionRequestMessage::User(_)));
    }

    #[test]
    fn user_only_when_no_system_prompt() {
        let request = CompletionRequest {
            model: "llama-3.1-8b-instant",
            system_prompt: None,
            user_prompt: "question",
        };

        let messages = build_messages(&request).unwrap();
        assert_eq!(messages.len(), 1);
        assert!(matches!(messages[0], ChatCompletionRequestMessage::User(_)));
    }
}
