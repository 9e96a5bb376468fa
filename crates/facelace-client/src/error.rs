/// Failure to get a usable answer from the solver.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum TransportError {
    /// The request could not be sent or the response could not be read.
    ///
    /// Covers refused connections and timeouts.
    #[display("{_0}")]
    Http(reqwest::Error),
    /// The response body was not JSON.
    #[display("malformed response body: {_0}")]
    MalformedBody(serde_json::Error),
}

/// Errors returned by [`SolveClient`](crate::SolveClient) and
/// [`interpret_response`](crate::interpret_response).
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum SolveError {
    /// The solver could not be reached or its answer could not be read.
    #[display("solver transport failure: {_0}")]
    Transport(TransportError),
    /// The solver answered but refused the cube.
    #[display("{message}")]
    Rejected {
        /// HTTP status of the response.
        status: u16,
        /// The solver's `error` text, or a generic description.
        message: String,
    },
}

impl SolveError {
    /// Returns whether the solver could not be reached.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<TransportError> for SolveError {
    fn from(err: TransportError) -> Self {
        Self::Transport(err)
    }
}

impl From<reqwest::Error> for SolveError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.into())
    }
}

impl From<serde_json::Error> for SolveError {
    fn from(err: serde_json::Error) -> Self {
        Self::Transport(err.into())
    }
}
