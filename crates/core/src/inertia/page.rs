//! Page payload construction.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::headers::{partial_reload, RequestHeaders};
use super::props::{merge_props, resolve_props, Props};

/// The page object sent to the client runtime.
///
/// Serialized as `{ "component", "props", "url", "version" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagePayload {
    pub component: String,
    pub props: Map<String, Value>,
    pub url: String,
    pub version: String,
}

impl PagePayload {
    /// Serialize to the JSON wire format.
    pub fn to_json(&self) -> Result<String, super::InertiaError> {
        serde_json::to_string(self).map_err(|e| super::InertiaError::Serialization(e.to_string()))
    }
}

/// What the negotiator needs to know about the current request.
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
    /// Current request path, e.g. `/posts`.
    pub url: String,
    /// Asset version of the running deployment.
    pub version: String,
    pub headers: RequestHeaders,
}

impl PageRequest {
    pub fn new(url: impl Into<String>, version: impl Into<String>, headers: RequestHeaders) -> Self {
        Self {
            url: url.into(),
            version: version.into(),
            headers,
        }
    }
}

/// Keep the props this response should carry.
///
/// A partial reload of `component` keeps exactly the requested keys, lazy
/// ones included. Anything else is a full prop set minus lazy props.
pub fn filter_props(component: &str, props: Props, headers: &RequestHeaders) -> Props {
    match partial_reload(headers, component) {
        Some(only) => props
            .into_iter()
            .filter(|(key, _)| only.iter().any(|requested| requested == key))
            .collect(),
        None => props.into_iter().filter(|(_, prop)| !prop.is_lazy()).collect(),
    }
}

/// Build the page payload for `component`.
///
/// Explicit props override shared props, partial-reload filtering is
/// applied, then every remaining producer is evaluated exactly once.
pub fn build_payload(
    component: &str,
    explicit: Props,
    shared: Props,
    request: &PageRequest,
) -> PagePayload {
    let merged = merge_props(explicit, shared);
    let filtered = filter_props(component, merged, &request.headers);

    PagePayload {
        component: component.to_string(),
        props: resolve_props(filtered),
        url: request.url.clone(),
        version: request.version.clone(),
    }
}
