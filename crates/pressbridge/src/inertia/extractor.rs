//! Axum extractor for Inertia page rendering.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use pressbridge_core::inertia::{PageRequest, Prop, RequestHeaders};

use super::context::InertiaContext;
use crate::state::AppState;

/// Copy the inbound headers into the transport-neutral view.
///
/// Values that are not valid UTF-8 are skipped.
pub fn request_headers(headers: &HeaderMap) -> RequestHeaders {
    RequestHeaders::from_pairs(headers.iter().filter_map(|(name, value)| {
        value
            .to_str()
            .ok()
            .map(|value| (name.as_str(), value.to_string()))
    }))
}

/// Everything a handler needs to render an Inertia page.
pub struct Inertia {
    pub(super) state: AppState,
    pub(super) request: PageRequest,
    pub(super) context: InertiaContext,
}

impl Inertia {
    /// Share a prop with the page rendered for this request.
    pub fn share(&self, key: impl Into<String>, prop: impl Into<Prop>) {
        self.context.share(key, prop);
    }
}

impl FromRequestParts<AppState> for Inertia {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let url = parts.uri.path().to_string();

        let context = match parts.extensions.get::<InertiaContext>() {
            Some(context) => context.clone(),
            None => {
                tracing::warn!(url = %url, "No Inertia context on request, shared props are empty");
                InertiaContext::new()
            }
        };

        Ok(Self {
            state: state.clone(),
            request: PageRequest::new(
                url,
                state.config.asset_version.clone(),
                request_headers(&parts.headers),
            ),
            context,
        })
    }
}
