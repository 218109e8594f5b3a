//! The JSON-vs-shell render decision.

use super::headers::{is_client_navigation, RequestHeaders};
use super::page::PagePayload;

/// Headers attached to every JSON page response.
pub const RESPONSE_HEADERS: [(&str, &str); 2] = [("vary", "Accept"), ("x-inertia", "true")];

/// How a page payload leaves the server.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderDecision {
    /// Client navigation: JSON body plus [`RESPONSE_HEADERS`].
    Json(PagePayload),
    /// Full page load: render the root view with the payload embedded.
    Shell(PagePayload),
}

impl RenderDecision {
    pub fn payload(&self) -> &PagePayload {
        match self {
            Self::Json(payload) | Self::Shell(payload) => payload,
        }
    }

    /// Response headers the transport must set for this decision.
    pub fn response_headers(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Json(_) => &RESPONSE_HEADERS,
            Self::Shell(_) => &[],
        }
    }
}

/// Decide how to answer the request carrying `headers`.
pub fn respond(payload: PagePayload, headers: &RequestHeaders) -> RenderDecision {
    if is_client_navigation(headers) {
        RenderDecision::Json(payload)
    } else {
        RenderDecision::Shell(payload)
    }
}
