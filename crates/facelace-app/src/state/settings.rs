use std::time::Duration;

use facelace_client::{ClientConfig, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};

/// Environment variable that replaces the built-in solver endpoint on native builds.
#[cfg_attr(target_arch = "wasm32", expect(dead_code))]
pub(crate) const ENDPOINT_ENV: &str = "FACELACE_SOLVER_URL";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub(crate) solver: SolverSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct SolverSettings {
    pub(crate) endpoint: String,
    pub(crate) timeout_secs: u64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: ClientConfig::default().timeout.as_secs(),
        }
    }
}

impl SolverSettings {
    pub(crate) const MIN_TIMEOUT_SECS: u64 = 1;
    pub(crate) const MAX_TIMEOUT_SECS: u64 = 300;

    #[must_use]
    pub(crate) fn client_config(&self) -> ClientConfig {
        let endpoint = self.endpoint.trim();
        let endpoint = if endpoint.is_empty() {
            default_endpoint()
        } else {
            endpoint.to_owned()
        };
        let timeout_secs = self
            .timeout_secs
            .clamp(Self::MIN_TIMEOUT_SECS, Self::MAX_TIMEOUT_SECS);
        ClientConfig {
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
            ..ClientConfig::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_endpoint() -> String {
    endpoint_or_default(std::env::var(ENDPOINT_ENV).ok())
}

#[cfg(target_arch = "wasm32")]
fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_owned()
}

#[cfg_attr(target_arch = "wasm32", expect(dead_code))]
fn endpoint_or_default(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_value_overrides_endpoint() {
        assert_eq!(
            endpoint_or_default(Some(" http://solver.local/solve ".to_owned())),
            "http://solver.local/solve"
        );
        assert_eq!(endpoint_or_default(Some(String::new())), DEFAULT_ENDPOINT);
        assert_eq!(endpoint_or_default(None), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_client_config_clamps_and_falls_back() {
        let settings = SolverSettings {
            endpoint: "   ".to_owned(),
            timeout_secs: 0,
        };
        let config = settings.client_config();
        assert!(!config.endpoint.trim().is_empty());
        assert_eq!(config.timeout, Duration::from_secs(1));
    }

    #[test]
    fn test_default_timeout_is_thirty_seconds() {
        let settings = SolverSettings {
            endpoint: "http://example.invalid/solve".to_owned(),
            ..SolverSettings::default()
        };
        assert_eq!(settings.timeout_secs, 30);
        assert_eq!(settings.client_config().endpoint, "http://example.invalid/solve");
    }
}
