//! Preventive-health advice handler.

use std::sync::Arc;

use axum::{extract::State, Json};
use medinfo_llm::CompletionRequest;
use tracing::info;

use crate::dto::{AdviceRequest, AdviceResponse};
use crate::error::AppError;
use crate::{prompts, ServerState, COMPLETION_MODEL};

/// Answers a health question with a short preventive recommendation.
///
/// The question is forwarded and echoed as-is; no trimming on this route.
pub async fn advice(
    State(state): State<Arc<ServerState>>,
    Json(payload): Json<AdviceRequest>,
) -> Result<Json<AdviceResponse>, AppError> {
    info!(
        "Advice request: {}...",
        payload.question.get(..50).unwrap_or(&payload.question)
    );

    let prompt = prompts::health_advice(&payload.question);
    let advice = state
        .groq
        .complete(&CompletionRequest {
            model: COMPLETION_MODEL,
            system_prompt: None,
            user_prompt: &prompt,
        })
        .await?;

    Ok(Json(AdviceResponse {
        question: payload.question,
        advice,
        model_used: COMPLETION_MODEL.to_string(),
    }))
}
