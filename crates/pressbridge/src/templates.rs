//! Askama views: the page shell and the asset diagnostic page.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Template wrapper that converts Askama templates into HTML responses.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {err}"),
            )
                .into_response(),
        }
    }
}

/// Root view of every full page load.
#[derive(Template)]
#[template(path = "app.html")]
pub struct AppTemplate<'a> {
    pub title: &'a str,
    /// Pre-rendered `<link>`/`<script>` tags.
    pub head: String,
    /// Pre-rendered page root element carrying the escaped payload.
    pub root: String,
}

/// Visible diagnostic shown when asset registration fails in debug mode.
#[derive(Template)]
#[template(path = "diagnostic.html")]
pub struct DiagnosticTemplate<'a> {
    pub title: &'a str,
    pub message: String,
}
