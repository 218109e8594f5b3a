//! Request/props negotiation for the Inertia protocol.
//!
//! Everything here is a pure transformation: request headers and props go
//! in, a [`PagePayload`] and a [`RenderDecision`] come out.

mod error;
mod headers;
mod markup;
mod page;
mod props;
mod response;

pub use error::{InertiaError, Result};
pub use headers::{
    is_client_navigation, partial_reload, RequestHeaders, X_INERTIA, X_INERTIA_PARTIAL_COMPONENT,
    X_INERTIA_PARTIAL_DATA, X_REQUESTED_WITH,
};
pub use markup::{escape_html, page_root, DEFAULT_ROOT_ID};
pub use page::{build_payload, filter_props, PagePayload, PageRequest};
pub use props::{merge_props, resolve_props, Producer, Prop, Props, SharedProps};
pub use response::{respond, RenderDecision, RESPONSE_HEADERS};
