use std::time::Duration;

use axum::{http::StatusCode, middleware, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        health::{healthz, livez},
        pages::{home, posts},
        static_files::serve_build,
    },
    inertia::inertia_context,
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let build_route = format!(
        "/{}/{{*filename}}",
        state.asset_options.build_directory.trim_matches('/')
    );

    // Pages get a fresh Inertia context per request
    let pages = Router::new()
        .route("/", get(home))
        .route("/posts", get(posts))
        .layer(middleware::from_fn_with_state(state.clone(), inertia_context));

    Router::new()
        .merge(pages)
        .route(&build_route, get(serve_build))
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;

    use axum::{
        body::Body,
        http::{Request, Response, StatusCode},
    };
    use http_body_util::BodyExt;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;

    const MANIFEST: &str = r#"{
        "resources/js/app.js": {
            "file": "assets/app-abc123.js",
            "css": ["assets/app-abc123.css"]
        }
    }"#;

    fn test_state(dir: &TempDir, vars: &[(&str, &str)]) -> AppState {
        let mut vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        vars.insert(
            "PRESSBRIDGE_ROOT".to_string(),
            dir.path().display().to_string(),
        );
        vars.insert("PRESSBRIDGE_ASSET_VERSION".to_string(), "v1".to_string());
        vars.insert("PRESSBRIDGE_APP_NAME".to_string(), "Blog".to_string());

        AppState::new(Config::from_lookup(|key| vars.get(key).cloned())).unwrap()
    }

    fn built_project() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("public/build/assets")).unwrap();
        fs::write(dir.path().join("public/build/manifest.json"), MANIFEST).unwrap();
        fs::write(
            dir.path().join("public/build/assets/app-abc123.js"),
            "console.log('app')",
        )
        .unwrap();
        dir
    }

    fn navigation(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header("X-Requested-With", "XMLHttpRequest")
            .header("X-Inertia", "true")
            .body(Body::empty())
            .unwrap()
    }

    fn page_load(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_string(response: Response<Body>) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_client_navigation_gets_json() {
        let dir = built_project();
        let app = create_app(test_state(&dir, &[]));

        let response = app.oneshot(navigation("/posts?page=1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["vary"], "Accept");
        assert_eq!(response.headers()["x-inertia"], "true");

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["component"], "Posts/Index");
        assert_eq!(json["url"], "/posts");
        assert_eq!(json["version"], "v1");
        assert_eq!(json["props"]["appName"], "Blog");
        assert_eq!(json["props"]["section"], "blog");
        assert_eq!(json["props"]["total"], 3);
        assert_eq!(json["props"]["posts"][0]["title"], "Hello world");
    }

    #[tokio::test]
    async fn test_navigation_drops_lazy_props() {
        let dir = built_project();
        let app = create_app(test_state(&dir, &[]));

        let response = app.oneshot(navigation("/")).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();

        assert_eq!(json["props"]["greeting"], "Welcome");
        assert_eq!(json["props"]["latest"], "Hot reloading assets");
        assert!(json["props"].get("stats").is_none());
    }

    #[tokio::test]
    async fn test_full_load_drops_lazy_props() {
        let dir = built_project();
        let app = create_app(test_state(&dir, &[]));

        let html = body_string(app.oneshot(page_load("/")).await.unwrap()).await;

        assert!(html.contains("&quot;greeting&quot;:&quot;Welcome&quot;"));
        assert!(html.contains("&quot;url&quot;:&quot;/&quot;"));
        assert!(!html.contains("&quot;stats&quot;"));
    }

    #[tokio::test]
    async fn test_partial_reload_returns_requested_props() {
        let dir = built_project();
        let app = create_app(test_state(&dir, &[]));

        let request = Request::builder()
            .uri("/")
            .header("X-Requested-With", "XMLHttpRequest")
            .header("X-Inertia", "true")
            .header("X-Inertia-Partial-Component", "Home")
            .header("X-Inertia-Partial-Data", "stats")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();

        assert_eq!(
            json["props"],
            serde_json::json!({ "stats": { "posts": 3, "comments": 7 } })
        );
    }

    #[tokio::test]
    async fn test_page_load_renders_shell_with_assets() {
        let dir = built_project();
        let app = create_app(test_state(&dir, &[]));

        let response = app.oneshot(page_load("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get("x-inertia").is_none());

        let html = body_string(response).await;
        assert!(html.contains("<title>Blog</title>"));
        assert!(html.contains(r#"id="app" data-page="{&quot;component&quot;:&quot;Home&quot;"#));
        assert!(html.contains(r#"src="/build/assets/app-abc123.js""#));
        assert!(html.contains(r#"href="/build/assets/app-abc123.css""#));
        assert!(html.contains(r#"type="module""#));
    }

    #[tokio::test]
    async fn test_page_load_uses_dev_server_when_hot() {
        let dir = built_project();
        fs::write(dir.path().join("public/hot"), "http://localhost:5173\n").unwrap();
        let app = create_app(test_state(&dir, &[]));

        let html = body_string(app.oneshot(page_load("/posts")).await.unwrap()).await;

        assert!(html.contains(r#"src="http://localhost:5173/@vite/client""#));
        assert!(html.contains(r#"src="http://localhost:5173/resources/js/app.js""#));
        assert!(html.contains("RefreshRuntime"));
    }

    #[tokio::test]
    async fn test_missing_manifest_skipped_outside_debug() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_app(test_state(&dir, &[]));

        let response = app.oneshot(page_load("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("data-page="));
        assert!(!html.contains("<script"));
    }

    #[tokio::test]
    async fn test_missing_manifest_is_diagnostic_in_debug() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_app(test_state(&dir, &[("PRESSBRIDGE_DEBUG", "1")]));

        let response = app.oneshot(page_load("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let html = body_string(response).await;
        assert!(html.contains("[Vite] Asset error"));
        assert!(html.contains("manifest"));
    }

    #[tokio::test]
    async fn test_debug_navigation_ignores_assets() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_app(test_state(&dir, &[("PRESSBRIDGE_DEBUG", "1")]));

        let response = app.oneshot(navigation("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_serve_build_file() {
        let dir = built_project();
        let app = create_app(test_state(&dir, &[]));

        let response = app
            .oneshot(page_load("/build/assets/app-abc123.js"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["cache-control"],
            "public, max-age=31536000, immutable"
        );
        assert_eq!(body_string(response).await, "console.log('app')");
    }

    #[tokio::test]
    async fn test_serve_build_rejects_traversal() {
        let dir = built_project();
        let app = create_app(test_state(&dir, &[]));

        let response = app
            .oneshot(page_load("/build/assets/../manifest.json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_healthz_reports_mode() {
        let dir = built_project();
        let app = create_app(test_state(&dir, &[]));

        let response = app.clone().oneshot(page_load("/healthz")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["assets"], "built");

        let empty = tempfile::tempdir().unwrap();
        let app = create_app(test_state(&empty, &[]));
        let response = app.oneshot(page_load("/healthz")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_livez() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_app(test_state(&dir, &[]));

        let response = app.oneshot(page_load("/livez")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
