use axum::{middleware, routing::get, Router};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use crate::system;

pub async fn health() -> &'static str {
    "ok"
}

/// Health check plus the frontend bundle. Unknown paths get `index.html`
/// so the client router can resolve `/` and `/<id>`.
pub fn configure_routes(assets_dir: &Path) -> Router {
    let index = ServeFile::new(assets_dir.join("index.html"));
    let assets = ServeDir::new(assets_dir).fallback(index);

    Router::new()
        .route("/health", get(health))
        .fallback_service(assets)
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><title>catalog</title>";

    fn bundle() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log(1);").unwrap();
        dir
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        assert_eq!(health().await, "ok");

        let dir = bundle();
        let (status, body) = get(configure_routes(dir.path()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_existing_asset_is_served() {
        let dir = bundle();
        let (status, body) = get(configure_routes(dir.path()), "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log(1);");
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let dir = bundle();
        for uri in ["/", "/p-1", "/some/unknown/path"] {
            let (status, body) = get(configure_routes(dir.path()), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, INDEX, "{uri}");
        }
    }
}
