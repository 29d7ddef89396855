// ABOUTME: Optional bearer token check for the tallybook API routes.
// ABOUTME: Installed as route middleware only when a token is configured.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Let /api requests through only if they carry `Authorization: Bearer <token>`.
/// Other paths pass unchecked.
pub async fn require_bearer(State(token): State<Arc<str>>, req: Request, next: Next) -> Response {
    if !is_api_path(req.uri().path()) {
        return next.run(req).await;
    }

    let authorized = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .is_some_and(|t| t == &*token);

    if authorized {
        return next.run(req).await;
    }

    tracing::warn!("rejected unauthenticated request to {}", req.uri().path());
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({ "error": "unauthorized" })),
    )
        .into_response()
}

fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

#[cfg(test)]
mod tests {
    use super::is_api_path;
    use crate::app_state::AppState;
    use crate::routes::create_router;
    use axum::Router;
    use axum::body::Body;
    use axum::http::StatusCode;
    use http::Request;
    use std::sync::Arc;
    use tallybook_store::RecordStore;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn protected_router() -> (TempDir, Router) {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::open(dir.path().join("expenses.json")).unwrap();
        let app = create_router(
            Arc::new(AppState::new(store)),
            Some("test-token-123".to_string()),
        );
        (dir, app)
    }

    #[tokio::test]
    async fn rejects_without_token() {
        let (_dir, app) = protected_router();

        let resp = app
            .oneshot(Request::get("/api/records").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn rejects_wrong_token() {
        let (_dir, app) = protected_router();

        let resp = app
            .oneshot(
                Request::get("/api/summary")
                    .header("authorization", "Bearer wrong-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn allows_valid_token() {
        let (_dir, app) = protected_router();

        let resp = app
            .oneshot(
                Request::get("/api/summary")
                    .header("authorization", "Bearer test-token-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn rejected_post_stores_nothing() {
        let (dir, app) = protected_router();

        let resp = app
            .oneshot(
                Request::post("/api/records")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"title":"sneaky","amount":1,"date":"2024-01-15"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let content = std::fs::read_to_string(dir.path().join("expenses.json")).unwrap();
        assert_eq!(content, "[]");
    }

    #[tokio::test]
    async fn unrouted_api_paths_still_require_token() {
        for uri in ["/api", "/api/nothing", "/api/records/extra"] {
            let (_dir, app) = protected_router();

            let resp = app
                .oneshot(Request::get(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{uri} should be protected");
        }
    }

    #[tokio::test]
    async fn unrouted_api_path_with_token_is_404() {
        let (_dir, app) = protected_router();

        let resp = app
            .oneshot(
                Request::get("/api/nothing")
                    .header("authorization", "Bearer test-token-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn api_prefix_matching() {
        assert!(is_api_path("/api"));
        assert!(is_api_path("/api/summary"));
        assert!(!is_api_path("/apiary"));
        assert!(!is_api_path("/healthz"));
    }

    #[tokio::test]
    async fn healthz_is_exempt() {
        let (_dir, app) = protected_router();

        let resp = app
            .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
    }
}
