use crate::application::APPLICATION_NAME;
use axum::body::Body;
use axum::extract::Request;
use axum::extract::State;
use axum::http::Method;
use axum::http::StatusCode;
use axum::http::header;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Response;
use std::ffi::OsStr;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::LazyLock;

static FALLBACK_COUNTER: LazyLock<opentelemetry::metrics::Counter<u64>> = LazyLock::new(|| {
    opentelemetry::global::meter(APPLICATION_NAME)
        .u64_counter("http_server_fallback_requests")
        .with_description("Number of fallback requests")
        .build()
});

static STATIC_ASSET_COUNTER: LazyLock<opentelemetry::metrics::Counter<u64>> = LazyLock::new(|| {
    opentelemetry::global::meter(APPLICATION_NAME)
        .u64_counter("http_server_static_asset_requests")
        .with_description("Number of static asset requests")
        .build()
});

pub struct StaticController;

impl StaticController {
    const INDEX_FILE: &str = "index.html";

    // Served when no frontend bundle has been built yet, so `GET /`
    // still answers 200
    const PLACEHOLDER_PAGE: &str = "<!DOCTYPE html>\n<html>\n  <head><title>Azure DevOps CI/CD Tutorial</title></head>\n  <body>\n    <h1>Azure DevOps CI/CD Tutorial</h1>\n    <p>The frontend bundle has not been built yet.</p>\n  </body>\n</html>\n";

    #[tracing::instrument(skip(asset_dir))]
    pub async fn static_asset_endpoint_handler(
        State(asset_dir): State<Arc<PathBuf>>,
        req: Request<Body>,
    ) -> Response {
        let request_path = req.uri().path();
        let method = req.method();

        // API routes never degrade to asset serving
        if request_path.starts_with("/api/") || (*method != Method::GET && *method != Method::HEAD)
        {
            tracing::warn!(
                "Unexpected route targeted: {} {}",
                req.method(),
                request_path
            );

            FALLBACK_COUNTER.add(1, &[]);

            return (StatusCode::NOT_FOUND, "Unexpected route").into_response();
        }

        STATIC_ASSET_COUNTER.add(1, &[]);

        Self::serve_asset(&asset_dir, request_path).await
    }

    async fn serve_asset(asset_dir: &Path, request_path: &str) -> Response {
        let Some(relative_path) = Self::sanitize_path(request_path) else {
            tracing::warn!("Rejecting traversal in asset path: {}", request_path);

            return (StatusCode::NOT_FOUND, "Unexpected route").into_response();
        };

        let candidate = if relative_path.as_os_str().is_empty() {
            asset_dir.join(Self::INDEX_FILE)
        } else {
            asset_dir.join(relative_path)
        };

        if let Ok(contents) = tokio::fs::read(&candidate).await {
            return Self::asset_response(&candidate, contents);
        }

        // Unknown paths resolve to the bundle entry point so client-side
        // routes reload correctly
        let index = asset_dir.join(Self::INDEX_FILE);
        match tokio::fs::read(&index).await {
            Ok(contents) => Self::asset_response(&index, contents),
            Err(_) => Html(Self::PLACEHOLDER_PAGE).into_response(),
        }
    }

    fn sanitize_path(request_path: &str) -> Option<PathBuf> {
        let relative_path = Path::new(request_path.trim_start_matches('/'));

        relative_path
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
            .then(|| relative_path.to_path_buf())
    }

    fn asset_response(asset_path: &Path, contents: Vec<u8>) -> Response {
        let content_type = Self::content_type_for(asset_path);

        ([(header::CONTENT_TYPE, content_type)], contents).into_response()
    }

    fn content_type_for(asset_path: &Path) -> &'static str {
        match asset_path.extension().and_then(OsStr::to_str) {
            Some("html") => "text/html; charset=utf-8",
            Some("js") => "text/javascript",
            Some("css") => "text/css",
            Some("json") => "application/json",
            Some("svg") => "image/svg+xml",
            Some("png") => "image/png",
            Some("ico") => "image/x-icon",
            _ => "application/octet-stream",
        }
    }
}
