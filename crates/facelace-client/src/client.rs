use facelace_store::CubeString;
use serde::Serialize;

use crate::{ClientConfig, Solution, SolveError, interpret_response};

#[derive(Debug, Serialize)]
struct SolveRequestBody<'a> {
    cube: &'a str,
}

/// HTTP client for the remote solver.
///
/// One request is made per call; failures are not retried.
#[derive(Debug, Clone)]
pub struct SolveClient {
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::blocking::Client,
    #[cfg(target_arch = "wasm32")]
    client: reqwest::Client,
    endpoint: String,
}

impl SolveClient {
    /// Builds a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Transport`] if the HTTP client cannot be built.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(config: &ClientConfig) -> Result<Self, SolveError> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Builds a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Transport`] if the HTTP client cannot be built.
    #[cfg(target_arch = "wasm32")]
    pub fn new(config: &ClientConfig) -> Result<Self, SolveError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Returns the URL requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts `cube` to the solver and waits for its answer.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Transport`] if the solver cannot be reached,
    /// times out, or answers with a body that is not JSON, and
    /// [`SolveError::Rejected`] if it refuses the cube.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn solve(&self, cube: &CubeString) -> Result<Solution, SolveError> {
        log::debug!("posting cube to {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&SolveRequestBody {
                cube: cube.as_str(),
            })
            .send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        log::debug!("solver answered HTTP {status}");
        interpret_response(status, &body)
    }

    /// Posts `cube` to the solver and waits for its answer.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Transport`] if the solver cannot be reached or
    /// answers with a body that is not JSON, and [`SolveError::Rejected`] if
    /// it refuses the cube.
    #[cfg(target_arch = "wasm32")]
    pub async fn solve_async(&self, cube: &CubeString) -> Result<Solution, SolveError> {
        log::debug!("posting cube to {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&SolveRequestBody {
                cube: cube.as_str(),
            })
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        log::debug!("solver answered HTTP {status}");
        interpret_response(status, &body)
    }
}
