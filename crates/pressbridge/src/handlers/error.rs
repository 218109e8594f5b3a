use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pressbridge_vite::ViteError;

use crate::templates::{DiagnosticTemplate, HtmlTemplate};

/// Application error type that wraps `anyhow::Error`.
///
/// Asset errors only reach this point in debug mode, so they are shown as
/// a readable diagnostic page instead of a bare message.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Application error");

        if let Some(ViteError::Asset(error)) = self.0.downcast_ref::<ViteError>() {
            let page = HtmlTemplate(DiagnosticTemplate {
                title: "[Vite] Asset error",
                message: error.to_string(),
            });
            return (StatusCode::INTERNAL_SERVER_ERROR, page).into_response();
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {}", self.0),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
