//! Inertia error types (pure - no I/O variants).

use thiserror::Error;

/// Errors raised while producing the page payload.
///
/// Header negotiation itself never fails; a missing or malformed header is
/// just a negative signal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InertiaError {
    #[error("Page serialization failed: {0}")]
    Serialization(String),
}

/// Result type for Inertia operations.
pub type Result<T> = std::result::Result<T, InertiaError>;
