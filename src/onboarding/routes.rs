//! REST endpoints for launch routing, the page catalog and the completion flag.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use super::model::ExitAction;
use super::router::{LaunchIntent, LaunchRouter};
use super::state::OnboardingSession;

/// Shared state for onboarding routes.
#[derive(Clone)]
pub struct OnboardingRouteState {
    pub router: LaunchRouter,
}

#[derive(Debug, Deserialize)]
struct ExitRequest {
    action: ExitAction,
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "hub-onboarding"
    }))
}

/// GET /api/launch
///
/// Query parameters are launch extras and come back untouched.
async fn launch(
    State(state): State<OnboardingRouteState>,
    Query(extras): Query<BTreeMap<String, String>>,
) -> impl IntoResponse {
    let decision = state.router.evaluate(LaunchIntent::new(extras)).await;
    let route = decision.route();
    Json(serde_json::json!({
        "route": route,
        "extras": decision.into_intent().extras,
    }))
}

/// GET /api/onboarding/pages
async fn list_pages(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    let catalog = state.router.catalog();
    Json(serde_json::json!({
        "count": catalog.count(),
        "pages": catalog.pages(),
    }))
}

/// GET /api/onboarding/pages/{position}
///
/// 404 for any position outside the catalog: negatives, values past
/// `i64`, and segments that are not numbers at all.
async fn get_page(
    State(state): State<OnboardingRouteState>,
    Path(raw): Path<String>,
) -> impl IntoResponse {
    let lookup = match raw.parse::<i64>() {
        Ok(position) => state.router.catalog().get(position).map_err(|e| e.to_string()),
        Err(_) => Err(format!(
            "Page position {raw:?} out of range (count is {})",
            state.router.catalog().count()
        )),
    };
    match lookup {
        Ok(page) => Json(serde_json::json!(page)).into_response(),
        Err(error) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": error})),
        )
            .into_response(),
    }
}

/// GET /api/onboarding/status
async fn get_status(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "onboarding_completed": state.router.gate().is_complete().await,
    }))
}

/// POST /api/onboarding/exit
///
/// The client owns the pager; the server only performs the exit itself.
async fn exit_onboarding(
    State(state): State<OnboardingRouteState>,
    Json(request): Json<ExitRequest>,
) -> impl IntoResponse {
    let session = OnboardingSession::new(
        Arc::clone(state.router.catalog()),
        state.router.gate().clone(),
    );
    let handoff = session.exit(request.action).await;
    Json(handoff)
}

/// POST /api/onboarding/reset
async fn reset(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    let persisted = state.router.gate().reset().await;
    info!(persisted, "Onboarding flag reset");
    Json(serde_json::json!({
        "onboarding_completed": false,
        "persisted": persisted,
    }))
}

/// Build the onboarding REST routes.
pub fn onboarding_routes(state: OnboardingRouteState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/launch", get(launch))
        .route("/api/onboarding/pages", get(list_pages))
        .route("/api/onboarding/pages/{position}", get(get_page))
        .route("/api/onboarding/status", get(get_status))
        .route("/api/onboarding/exit", post(exit_onboarding))
        .route("/api/onboarding/reset", post(reset))
        .with_state(state)
}
