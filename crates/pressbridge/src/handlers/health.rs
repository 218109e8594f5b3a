//! Health check endpoints.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Asset mode detection (hot file or manifest readable)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Report which asset mode a page render would use.
///
/// Returns 503 when neither a hot file nor a usable manifest is present.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Response {
    match state.assets.mode(&state.asset_options) {
        Ok(mode) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "assets": mode.name(),
                "debug": state.config.debug,
            })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "assets": "unavailable",
                "debug": state.config.debug,
                "error": e.to_string(),
            })),
        )
            .into_response(),
    }
}
