//! HTTP route handlers for the relay service.

pub mod advice;
pub mod analyze;

use axum::Json;

use crate::dto::WelcomeResponse;

/// Liveness root: static welcome payload, no remote dependency.
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Bienvenue sur MedInfo Assist API".to_string(),
    })
}
