use core::fmt;

// Wire models shared by the backend service and the frontend client.

/// Stamps responses with the instant they were built, in the same shape
/// JavaScript's `Date.toISOString()` produces (UTC, millisecond
/// precision, `Z` suffix).
fn current_timestamp() -> String {
    chrono::Utc::now()
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct HelloResponse {
    message: String,
    timestamp: String,
}

impl HelloResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: current_timestamp(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

impl fmt::Display for HelloResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(encoded) => write!(f, "{encoded}"),
            Err(_) => Ok(()),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatusEnum {
    Healthy,
}

impl HealthStatusEnum {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
        }
    }
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct HealthResponse {
    status: HealthStatusEnum,
    version: String,
    timestamp: String,
}

impl HealthResponse {
    pub fn healthy(version: impl Into<String>) -> Self {
        Self {
            status: HealthStatusEnum::Healthy,
            version: version.into(),
            timestamp: current_timestamp(),
        }
    }

    pub const fn status(&self) -> HealthStatusEnum {
        self.status
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

impl fmt::Display for HealthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(encoded) => write!(f, "{encoded}"),
            Err(_) => Ok(()),
        }
    }
}
