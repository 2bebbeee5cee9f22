use crate::application::APPLICATION_NAME;
use axum::Json;
use axum::response::IntoResponse;
use common::api::HelloResponse;
use std::sync::LazyLock;

static HELLO_COUNTER: LazyLock<opentelemetry::metrics::Counter<u64>> = LazyLock::new(|| {
    opentelemetry::global::meter(APPLICATION_NAME)
        .u64_counter("http_server_hello_requests")
        .with_description("Number of hello requests")
        .build()
});

pub struct HelloController;

impl HelloController {
    // The greeting is fixed: every call returns the same message text
    const GREETING_MESSAGE: &str = "Hello from Azure DevOps CI/CD Tutorial!";

    #[allow(clippy::unused_async)]
    #[tracing::instrument(level = "debug")]
    pub async fn get_hello_endpoint_handler() -> impl IntoResponse {
        tracing::debug!("Greeting the frontend");

        HELLO_COUNTER.add(1, &[]);

        Json(HelloResponse::new(Self::GREETING_MESSAGE))
    }
}
