use common::api::HealthResponse;
use common::api::HelloResponse;

/// One immutable snapshot of what the terminal shows. Transitions build
/// a new snapshot; fields are never mutated in place, and stale data
/// survives a failed fetch so the last good payload stays visible.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    loading: bool,
    message: Option<String>,
    health: Option<HealthResponse>,
    error: Option<String>,
}

impl ViewState {
    pub const CONNECT_FAILURE_MESSAGE: &str = "Failed to connect to the server";
    pub const REFRESH_FAILURE_MESSAGE: &str = "Failed to refresh data";

    pub const fn initial() -> Self {
        Self {
            loading: true,
            message: None,
            health: None,
            error: None,
        }
    }

    pub const fn loading(&self) -> bool {
        self.loading
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub const fn health(&self) -> Option<&HealthResponse> {
        self.health.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Re-enter loading for a refresh cycle, keeping whatever was
    /// already fetched.
    pub fn with_loading(&self) -> Self {
        Self {
            loading: true,
            ..self.clone()
        }
    }

    /// The initial join resolved: store both payloads and clear any
    /// previous error.
    pub fn with_dashboard(&self, hello: &HelloResponse, health: &HealthResponse) -> Self {
        Self {
            loading: false,
            message: Some(hello.message().to_string()),
            health: Some(health.clone()),
            error: None,
        }
    }

    /// The initial join failed: surface the fixed connection error.
    pub fn with_load_failure(&self) -> Self {
        Self {
            loading: false,
            message: self.message.clone(),
            health: self.health.clone(),
            error: Some(Self::CONNECT_FAILURE_MESSAGE.to_string()),
        }
    }

    /// A refresh resolved: only the hello payload changes.
    pub fn with_message(&self, hello: &HelloResponse) -> Self {
        Self {
            loading: false,
            message: Some(hello.message().to_string()),
            health: self.health.clone(),
            error: None,
        }
    }

    /// A refresh failed: surface the fixed refresh error, health
    /// untouched.
    pub fn with_refresh_failure(&self) -> Self {
        Self {
            loading: false,
            message: self.message.clone(),
            health: self.health.clone(),
            error: Some(Self::REFRESH_FAILURE_MESSAGE.to_string()),
        }
    }
}
