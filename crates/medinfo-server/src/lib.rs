//! HTTP relay service for the MedInfo Assist API.
//!
//! Two completion-backed routes (`/analyze`, `/advice`) and a liveness root.
//! The router is assembled here so integration tests can drive exactly what
//! the binary serves.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod prompts;

use std::env;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use medinfo_llm::GroqClient;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Chat model submitted to Groq by both completion routes.
pub const COMPLETION_MODEL: &str = "llama-3.1-8b-instant";

/// Shared server state accessible from all handlers.
pub struct ServerState {
    pub groq: GroqClient,
}

/// Builds the state from process environment.
///
/// `GROQ_API_KEY` is not validated here; a missing key surfaces as an
/// authentication failure on the first remote call.
pub fn state_from_env() -> ServerState {
    let api_key = env::var("GROQ_API_KEY").unwrap_or_default();
    ServerState {
        groq: GroqClient::new(&api_key),
    }
}

/// Assembles the router with CORS and request tracing.
pub fn build_app(state: Arc<ServerState>) -> Router {
    // Wide open for development, credentials included; restrict the origins
    // before exposing this publicly. tower-http rejects the `Any` constants
    // together with credentials, hence the mirror forms.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/analyze", post(handlers::analyze::analyze))
        .route("/advice", post(handlers::advice::advice))
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/", get(handlers::root))
        .layer(cors)
        .with_state(state)
}
