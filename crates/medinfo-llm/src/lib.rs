//! Groq completion client for the MedInfo Assist relay.
//!
//! This crate provides the single remote-call abstraction used by the HTTP
//! handlers:
//!
//! - [`GroqClient`] — OpenAI-compatible chat-completion client bound to the
//!   Groq API
//! - [`CompletionRequest`] — model, optional system prompt, user prompt
//! - [`LlmError`] — typed failure union (transport, API, response shape)
//!
//! # Example
//!
//! ```rust,ignore
//! use medinfo_llm::{CompletionRequest, GroqClient};
//!
//! let client = GroqClient::new("gsk_...");
//! let content = client
//!     .complete(&CompletionRequest {
//!         model: "llama-3.1-8b-instant",
//!         system_prompt: None,
//!         user_prompt: "Bonjour",
//!     })
//!     .await?;
//! ```

mod client;
mod error;

pub use client::{CompletionRequest, GroqClient, GROQ_API_BASE};
pub use error::LlmError;
