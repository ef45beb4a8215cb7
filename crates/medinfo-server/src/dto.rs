//! Data transfer objects for HTTP message serialization.

use serde::{Deserialize, Serialize};

/// Request body for `/analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Successful `/analyze` response.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub original_text: String,
    pub simplified_text: String,
    pub model_used: String,
}

/// Request body for `/advice`.
#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    pub question: String,
}

/// Successful `/advice` response.
#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub question: String,
    pub advice: String,
    pub model_used: String,
}

/// Payload returned by the liveness root.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}
