use crate::http::health_check_controller::HealthCheckController;
use crate::http::hello_controller::HelloController;
use crate::http::static_controller::StaticController;
use anyhow::Result;
use axum::Router;
use axum::routing::get;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::trace::DefaultMakeSpan;
use tower_http::trace::TraceLayer;

pub struct HttpServer {
    port: u16,
    asset_dir: PathBuf,
}

impl HttpServer {
    const DEFAULT_LISTENER_ADDR: [u8; 4] = [0, 0, 0, 0];

    const PORT_ENV_VAR: &str = "PORT";
    const DEFAULT_PORT: u16 = 3000;

    const ASSET_DIR_ENV_VAR: &str = "STATIC_ASSETS_DIR";
    const DEFAULT_ASSET_DIR: &str = "client/dist";

    pub fn from_env() -> Self {
        tracing::debug!("Initializing the HTTP server");

        let port = std::env::var(Self::PORT_ENV_VAR)
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(Self::DEFAULT_PORT);
        let asset_dir = std::env::var(Self::ASSET_DIR_ENV_VAR)
            .map_or_else(|_| PathBuf::from(Self::DEFAULT_ASSET_DIR), PathBuf::from);

        Self { port, asset_dir }
    }

    pub fn start(&self) -> Vec<JoinHandle<()>> {
        tracing::info!("Starting the HTTP server on port {}", self.port);

        let port = self.port;
        let asset_dir = self.asset_dir.clone();

        vec![tokio::spawn(async move {
            let () = Self::worker_axum(port, asset_dir)
                .await
                .expect("Failed to start Axum server");
        })]
    }

    pub(crate) fn create_router(asset_dir: PathBuf) -> Router {
        let trace_layer =
            TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::new().include_headers(true));

        // Construct the routes
        Router::new()
            .route(
                "/api/hello",
                get(HelloController::get_hello_endpoint_handler),
            )
            .route(
                "/api/health",
                get(HealthCheckController::get_status_endpoint_handler),
            )
            .fallback(StaticController::static_asset_endpoint_handler)
            .layer(trace_layer)
            .with_state(Arc::new(asset_dir))
    }

    async fn worker_axum(port: u16, asset_dir: PathBuf) -> Result<()> {
        let router = Self::create_router(asset_dir);

        let addr = SocketAddr::from((Self::DEFAULT_LISTENER_ADDR, port));
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Starting HTTP Server on {}", listener.local_addr()?);

        axum::serve(listener, router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::http::StatusCode;
    use axum::response::Response;
    use tower::ServiceExt as _;

    async fn send_get(router: Router, uri: &str) -> Response {
        router
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request should build"),
            )
            .await
            .expect("router should answer")
    }

    async fn body_string(response: Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");

        String::from_utf8(body.to_vec()).expect("body should be UTF-8")
    }

    #[tokio::test]
    async fn hello_route_answers_through_the_router() {
        let asset_dir = tempfile::tempdir().expect("tempdir");
        let router = HttpServer::create_router(asset_dir.path().to_path_buf());

        let response = send_get(router, "/api/hello").await;

        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await)
            .expect("body should be JSON");
        assert_eq!(body["message"], "Hello from Azure DevOps CI/CD Tutorial!");
    }

    #[tokio::test]
    async fn unknown_api_route_returns_404() {
        let asset_dir = tempfile::tempdir().expect("tempdir");
        let router = HttpServer::create_router(asset_dir.path().to_path_buf());

        let response = send_get(router, "/api/nonexistent").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn root_answers_200_without_a_built_bundle() {
        let asset_dir = tempfile::tempdir().expect("tempdir");
        let router = HttpServer::create_router(asset_dir.path().to_path_buf());

        let response = send_get(router, "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("frontend bundle"));
    }

    #[tokio::test]
    async fn root_serves_the_built_bundle_when_present() {
        let asset_dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            asset_dir.path().join("index.html"),
            "<html><body>bundle entry point</body></html>",
        )
        .expect("fixture should write");
        let router = HttpServer::create_router(asset_dir.path().to_path_buf());

        let response = send_get(router, "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("content-type")
                .expect("content type should be set"),
            "text/html; charset=utf-8"
        );
        assert!(body_string(response).await.contains("bundle entry point"));
    }

    #[tokio::test]
    async fn exact_asset_is_served_with_its_content_type() {
        let asset_dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir(asset_dir.path().join("assets")).expect("fixture dir");
        std::fs::write(
            asset_dir.path().join("assets").join("app.js"),
            "console.log(\"ready\");",
        )
        .expect("fixture should write");
        let router = HttpServer::create_router(asset_dir.path().to_path_buf());

        let response = send_get(router, "/assets/app.js").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("content-type")
                .expect("content type should be set"),
            "text/javascript"
        );
    }

    #[tokio::test]
    async fn client_side_route_falls_back_to_the_bundle_entry_point() {
        let asset_dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            asset_dir.path().join("index.html"),
            "<html><body>bundle entry point</body></html>",
        )
        .expect("fixture should write");
        let router = HttpServer::create_router(asset_dir.path().to_path_buf());

        let response = send_get(router, "/dashboard").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("bundle entry point"));
    }

    #[tokio::test]
    async fn parent_directory_traversal_is_rejected() {
        let asset_dir = tempfile::tempdir().expect("tempdir");
        let router = HttpServer::create_router(asset_dir.path().to_path_buf());

        let response = send_get(router, "/../Cargo.toml").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_get_unmatched_route_returns_404() {
        let asset_dir = tempfile::tempdir().expect("tempdir");
        let router = HttpServer::create_router(asset_dir.path().to_path_buf());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/anything")
                    .body(Body::empty())
                    .expect("request should build"),
            )
            .await
            .expect("router should answer");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
