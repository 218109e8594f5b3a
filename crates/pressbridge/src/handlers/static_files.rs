//! Static file serving handler for compiled build assets.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::fs;

use crate::state::AppState;

/// Serve a file from the build directory under the public directory.
pub async fn serve_build(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Response {
    if filename
        .split('/')
        .any(|segment| segment.is_empty() || segment == "." || segment == "..")
    {
        return (StatusCode::NOT_FOUND, "Not found").into_response();
    }

    let build_dir = state
        .assets
        .environment()
        .build_dir(&state.asset_options);
    let file_path = build_dir.join(&filename);

    match fs::read(&file_path) {
        Ok(contents) => {
            // Hashed bundle names never change content, so they can be cached forever
            let is_hashed = filename.contains('-') && !filename.ends_with(".map");
            let cache_control = if is_hashed {
                "public, max-age=31536000, immutable"
            } else {
                "public, max-age=3600"
            };

            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, content_type(&filename)),
                    (header::CACHE_CONTROL, cache_control),
                ],
                contents,
            )
                .into_response()
        }
        Err(e) => {
            tracing::debug!(path = %file_path.display(), error = %e, "Build file not found");
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}

fn content_type(filename: &str) -> &'static str {
    match filename.rsplit('.').next() {
        Some("js") | Some("mjs") => "application/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("map") | Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}
