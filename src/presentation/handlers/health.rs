use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{LlmClient, TranscriptionEngine};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub scaffold: bool,
    pub tiers: Vec<String>,
}

pub async fn health_handler<E, L>(State(state): State<AppState<E, L>>) -> impl IntoResponse
where
    E: TranscriptionEngine + 'static,
    L: LlmClient + 'static,
{
    let tiers = state
        .transcription_service
        .tiers()
        .iter()
        .map(|t| t.name.clone())
        .collect();

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            scaffold: state.scaffold_config.enabled,
            tiers,
        }),
    )
}
