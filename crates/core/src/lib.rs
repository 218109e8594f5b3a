//! Pure Inertia protocol logic - no I/O, no async, no side effects.
//!
//! This crate provides:
//! - Case-insensitive request header inspection
//! - The `Prop` tree with deferred and lazy producers
//! - Page payload construction with partial-reload filtering
//! - The JSON-vs-shell render decision and page root markup
//!
//! # Example
//!
//! ```
//! use pressbridge_core::inertia::{build_payload, PageRequest, Prop, Props, RequestHeaders};
//!
//! let headers = RequestHeaders::from_pairs([("X-Inertia", "true")]);
//! let request = PageRequest::new("/posts", "v1", headers);
//!
//! let mut props = Props::new();
//! props.insert("title".to_string(), Prop::value("Posts"));
//! props.insert("stats".to_string(), Prop::lazy(|| serde_json::json!({ "views": 10 })));
//!
//! let payload = build_payload("Posts/Index", props, Props::new(), &request);
//! assert_eq!(payload.props["title"], "Posts");
//! assert!(payload.props.get("stats").is_none());
//! ```

pub mod inertia;
