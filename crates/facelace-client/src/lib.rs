//! Remote solver client and solution playback.
//!
//! A validated cube description is sent to a solving service as
//! `POST <endpoint>` with the JSON body `{"cube": "<54 letters>"}`. The
//! service answers with `{"solution": "R U R' ..."}` on success or
//! `{"error": "..."}` on failure, possibly with HTTP 200 in both cases.
//!
//! - [`SolveClient`]: issues the request. Native targets use a blocking
//!   client; `wasm32` uses the fetch-backed async client.
//! - [`interpret_response`]: maps a status code and body to a [`Solution`]
//!   or a [`SolveError`]. Kept free of I/O so it can be tested directly.
//! - [`MoveList`] and [`MovePlayback`]: the solution's moves and a cursor
//!   for stepping through them.
//!
//! # Example
//!
//! ```
//! use facelace_client::{MovePlayback, SolveError, interpret_response};
//!
//! let solution = interpret_response(200, r#"{"solution": "R U R'"}"#).unwrap();
//! assert_eq!(solution.moves.len(), 3);
//!
//! let mut playback = MovePlayback::default();
//! playback.load(solution.moves);
//! assert!(playback.next());
//! assert_eq!(playback.current(), Some((1, "U")));
//!
//! let err = interpret_response(200, r#"{"error": "Invalid cube"}"#).unwrap_err();
//! assert!(matches!(err, SolveError::Rejected { status: 200, .. }));
//! ```

mod client;
mod config;
mod error;
mod moves;
mod playback;
mod response;

pub use self::{
    client::SolveClient,
    config::{ClientConfig, DEFAULT_ENDPOINT},
    error::{SolveError, TransportError},
    moves::{MoveList, Solution},
    playback::MovePlayback,
    response::interpret_response,
};
