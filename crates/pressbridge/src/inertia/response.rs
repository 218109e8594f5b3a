//! Turning a negotiated page into an HTTP response.

use axum::{
    http::{HeaderName, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use pressbridge_core::inertia::{
    build_payload, page_root, respond, PagePayload, Props, RenderDecision, DEFAULT_ROOT_ID,
};
use pressbridge_vite::AssetQueue;

use super::extractor::Inertia;
use crate::handlers::AppError;
use crate::templates::{AppTemplate, HtmlTemplate};

impl Inertia {
    /// Render `component` with `props`.
    ///
    /// Client navigations get the JSON payload. Full page loads get the
    /// root view with the entry point assets and the embedded payload.
    pub async fn render(self, component: &str, props: Props) -> Result<Response, AppError> {
        let shared = self.context.take_shared();
        let payload = build_payload(component, props, shared, &self.request);

        tracing::debug!(
            component,
            url = %payload.url,
            props = payload.props.len(),
            "Rendering page"
        );

        match respond(payload, &self.request.headers) {
            decision @ RenderDecision::Json(_) => Ok(json_response(&decision)),
            RenderDecision::Shell(payload) => self.render_shell(&payload).await,
        }
    }

    async fn render_shell(&self, payload: &PagePayload) -> Result<Response, AppError> {
        let mut queue = AssetQueue::new();
        if let Some(assets) = self
            .state
            .assets
            .register_checked(&self.state.asset_options)
            .await?
        {
            queue.enqueue(assets);
        }

        let root = page_root(payload, DEFAULT_ROOT_ID, "")?;

        Ok(HtmlTemplate(AppTemplate {
            title: &self.state.config.app_name,
            head: queue.render(),
            root,
        })
        .into_response())
    }
}

fn json_response(decision: &RenderDecision) -> Response {
    let mut response = Json(decision.payload()).into_response();
    for &(name, value) in decision.response_headers() {
        response.headers_mut().insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    response
}
