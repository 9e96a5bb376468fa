use std::time::Duration;

/// Solver endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/solve";

/// Connection settings for [`SolveClient`](crate::SolveClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Full URL the cube is posted to.
    pub endpoint: String,
    /// Upper bound on establishing the connection.
    ///
    /// Ignored on `wasm32`, where the browser owns connection handling.
    pub connect_timeout: Duration,
    /// Upper bound on the whole request.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            connect_timeout: Duration::from_secs(2),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Returns a default configuration posting to `endpoint`.
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}
