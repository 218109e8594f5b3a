//! Axum adapter for the Inertia negotiator in `pressbridge_core`.
//!
//! - [`inertia_context`] middleware creates the per-request shared props
//! - [`Inertia`] extractor carries the request view into handlers
//! - [`Inertia::render`] negotiates JSON vs the HTML page shell

mod context;
mod extractor;
mod response;

pub use context::{inertia_context, InertiaContext};
pub use extractor::Inertia;
