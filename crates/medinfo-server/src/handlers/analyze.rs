//! Medical-text simplification handler.

use std::sync::Arc;

use axum::{extract::State, Json};
use medinfo_llm::CompletionRequest;
use tracing::info;

use crate::dto::{AnalyzeRequest, AnalyzeResponse};
use crate::error::AppError;
use crate::{prompts, ServerState, COMPLETION_MODEL};

/// Rewrites a medical text in lay language.
///
/// Empty input (after trimming) is rejected before any remote call.
pub async fn analyze(
    State(state): State<Arc<ServerState>>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let text = payload.text.trim();
    if text.is_empty() {
        return Err(AppError::EmptyText);
    }

    info!("Analyze request: {}...", text.get(..50).unwrap_or(text));

    let prompt = prompts::simplification(text);
    let simplified = state
        .groq
        .complete(&CompletionRequest {
            model: COMPLETION_MODEL,
            system_prompt: Some(prompts::SIMPLIFIER_PERSONA),
            user_prompt: &prompt,
        })
        .await?;

    Ok(Json(AnalyzeResponse {
        original_text: text.to_string(),
        simplified_text: simplified.trim().to_string(),
        model_used: format!("{COMPLETION_MODEL} (Groq)"),
    }))
}
