//! Case-insensitive view over inbound request headers.

use std::collections::HashMap;

/// `X-Requested-With` header name (normalized).
pub const X_REQUESTED_WITH: &str = "x-requested-with";
/// `X-Inertia` header name (normalized).
pub const X_INERTIA: &str = "x-inertia";
/// `X-Inertia-Partial-Data` header name (normalized).
pub const X_INERTIA_PARTIAL_DATA: &str = "x-inertia-partial-data";
/// `X-Inertia-Partial-Component` header name (normalized).
pub const X_INERTIA_PARTIAL_COMPONENT: &str = "x-inertia-partial-component";

const XML_HTTP_REQUEST: &str = "XMLHttpRequest";
const INERTIA_TRUE: &str = "true";

/// Request headers with names folded to lowercase.
///
/// Transports disagree on header casing, so every name is normalized on
/// insert and on lookup. A missing header is simply `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    headers: HashMap<String, String>,
}

impl RequestHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(name, value)` pairs. Later duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut headers = Self::new();
        for (name, value) in pairs {
            headers.insert(name, value);
        }
        headers
    }

    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

/// Whether the request comes from an already-booted client runtime.
///
/// Requires both the XHR marker and the `X-Inertia: true` marker.
pub fn is_client_navigation(headers: &RequestHeaders) -> bool {
    headers.get(X_REQUESTED_WITH) == Some(XML_HTTP_REQUEST)
        && headers.get(X_INERTIA) == Some(INERTIA_TRUE)
}

/// Keys requested by a partial reload of `component`, if any.
///
/// Returns `Some` only when the partial component equals `component` and
/// the partial data header names at least one key.
pub fn partial_reload(headers: &RequestHeaders, component: &str) -> Option<Vec<String>> {
    if headers.get(X_INERTIA_PARTIAL_COMPONENT)? != component {
        return None;
    }

    let keys: Vec<String> = headers
        .get(X_INERTIA_PARTIAL_DATA)?
        .split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .collect();

    if keys.is_empty() {
        None
    } else {
        Some(keys)
    }
}
