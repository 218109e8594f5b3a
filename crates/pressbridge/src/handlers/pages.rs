//! Demo pages rendered through the Inertia adapter.

use axum::response::Response;
use pressbridge_core::inertia::{Prop, Props};
use serde::Serialize;
use serde_json::json;

use super::AppError;
use crate::inertia::Inertia;

#[derive(Debug, Clone, Serialize)]
struct Post {
    id: u32,
    title: &'static str,
    excerpt: &'static str,
    comments: u32,
}

const POSTS: [Post; 3] = [
    Post {
        id: 1,
        title: "Hello world",
        excerpt: "Welcome to the site.",
        comments: 2,
    },
    Post {
        id: 2,
        title: "Serving pages as JSON",
        excerpt: "Client navigations only fetch props.",
        comments: 0,
    },
    Post {
        id: 3,
        title: "Hot reloading assets",
        excerpt: "The dev server announces itself through the hot file.",
        comments: 5,
    },
];

/// GET / - Home page.
///
/// `stats` is lazy and only sent when a partial reload asks for it.
pub async fn home(inertia: Inertia) -> Result<Response, AppError> {
    let mut props = Props::new();
    props.insert("greeting".to_string(), Prop::value("Welcome"));
    props.insert(
        "latest".to_string(),
        Prop::deferred(|| json!(POSTS.last().map(|post| post.title))),
    );
    props.insert(
        "stats".to_string(),
        Prop::lazy(|| {
            let comments: u32 = POSTS.iter().map(|post| post.comments).sum();
            json!({ "posts": POSTS.len(), "comments": comments })
        }),
    );

    inertia.render("Home", props).await
}

/// GET /posts - Post listing.
pub async fn posts(inertia: Inertia) -> Result<Response, AppError> {
    inertia.share("section", json!("blog"));

    let mut props = Props::new();
    props.insert(
        "posts".to_string(),
        Prop::deferred(|| serde_json::to_value(POSTS).unwrap_or_default()),
    );
    props.insert("total".to_string(), Prop::value(POSTS.len()));

    inertia.render("Posts/Index", props).await
}
