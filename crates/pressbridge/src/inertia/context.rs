//! Per-request shared props.

use std::sync::{Arc, Mutex, PoisonError};

use axum::{
    extract::{Request, State},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use pressbridge_core::inertia::{is_client_navigation, Prop, Props, SharedProps, RESPONSE_HEADERS};

use super::extractor::request_headers;
use crate::state::AppState;

/// Shared props accumulated while one request is handled.
///
/// Stored as a request extension; clones point at the same accumulator.
#[derive(Clone, Default)]
pub struct InertiaContext {
    shared: Arc<Mutex<SharedProps>>,
}

impl InertiaContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn share(&self, key: impl Into<String>, prop: impl Into<Prop>) {
        self.shared
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .share(key, prop);
    }

    /// Take the accumulated props for the page being rendered.
    pub fn take_shared(&self) -> Props {
        self.shared
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

/// Middleware that gives every request its own [`InertiaContext`].
///
/// Props shared here are visible to every page of the application. Client
/// navigation responses also get `Vary`/`X-Inertia`, even when the handler
/// answered with something other than a page.
pub async fn inertia_context(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let context = InertiaContext::new();
    context.share("appName", Prop::value(state.config.app_name.clone()));
    request.extensions_mut().insert(context);

    let navigation = is_client_navigation(&request_headers(request.headers()));
    let mut response = next.run(request).await;

    if navigation {
        for (name, value) in RESPONSE_HEADERS {
            response.headers_mut().insert(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            );
        }
    }

    response
}
