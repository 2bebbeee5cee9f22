use crate::application::APPLICATION_NAME;
use anyhow::Result;
use common::api::HealthResponse;
use common::api::HelloResponse;
use std::sync::LazyLock;

static REQUEST_SENT_COUNTER: LazyLock<opentelemetry::metrics::Counter<u64>> = LazyLock::new(|| {
    opentelemetry::global::meter(APPLICATION_NAME)
        .u64_counter("api_client_requests_sent")
        .with_description("Number of requests sent to the backend")
        .build()
});
static REQUEST_ERROR_COUNTER: LazyLock<opentelemetry::metrics::Counter<u64>> =
    LazyLock::new(|| {
        opentelemetry::global::meter(APPLICATION_NAME)
            .u64_counter("api_client_requests_error")
            .with_description("Number of backend requests that encountered an error")
            .build()
    });

#[derive(Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
    base_uri: String,
}

impl ApiClient {
    const BACKEND_URI_ENV_VAR: &str = "BACKEND_URI";
    const DEFAULT_BACKEND_URI: &str = "http://127.0.0.1:3000";

    const HELLO_PATH: &str = "/api/hello";
    const HEALTH_PATH: &str = "/api/health";

    pub fn from_env() -> Self {
        let backend_uri = std::env::var(Self::BACKEND_URI_ENV_VAR)
            .unwrap_or_else(|_| Self::DEFAULT_BACKEND_URI.to_string());

        Self::new(backend_uri)
    }

    pub fn new(base_uri: impl Into<String>) -> Self {
        tracing::debug!("Initializing the API client");

        Self {
            http_client: reqwest::Client::new(),
            base_uri: base_uri.into(),
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_hello(&self) -> Result<HelloResponse> {
        self.get_json(Self::HELLO_PATH).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_health(&self) -> Result<HealthResponse> {
        self.get_json(Self::HEALTH_PATH).await
    }

    /// Fan-out to both endpoints, fan-in on completion. Both requests
    /// run concurrently and both must resolve; the first failure
    /// short-circuits the join.
    #[tracing::instrument(skip(self))]
    pub async fn get_dashboard(&self) -> Result<(HelloResponse, HealthResponse)> {
        futures::try_join!(self.get_hello(), self.get_health())
    }

    async fn get_json<T>(&self, path: &'static str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        tracing::debug!("Requesting {}", path);

        REQUEST_SENT_COUNTER.add(1, &[opentelemetry::KeyValue::new("endpoint", path)]);

        let result = async {
            let response = self
                .http_client
                .get(format!("{}{path}", self.base_uri))
                .send()
                .await?
                .error_for_status()?;

            Ok(response.json::<T>().await?)
        }
        .await;

        if result.is_err() {
            REQUEST_ERROR_COUNTER.add(1, &[opentelemetry::KeyValue::new("endpoint", path)]);
        }

        result
    }
}
