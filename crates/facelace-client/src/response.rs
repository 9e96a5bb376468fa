use serde::Deserialize;
use serde_json::Value;

use crate::{MoveList, Solution, SolveError};

#[derive(Debug, Deserialize)]
struct SolveResponseBody {
    #[serde(default)]
    solution: Option<String>,
    // `moves` and `message` are informational; a mistyped one is ignored.
    #[serde(default)]
    moves: Option<Value>,
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

/// Interprets a solver response.
///
/// The body must be JSON. A non-2xx status or an `error` field means the
/// solver refused the cube, whatever the status. Otherwise the `solution`
/// field holds the moves; a missing `solution` is an empty move list.
///
/// # Errors
///
/// Returns [`SolveError::Transport`] for a body that is not JSON, and
/// [`SolveError::Rejected`] when the solver refused the cube. The rejection
/// carries the server's `error` text, or `solver returned HTTP <status>` when
/// there is none.
pub fn interpret_response(status: u16, body: &str) -> Result<Solution, SolveError> {
    let parsed: SolveResponseBody = serde_json::from_str(body)?;

    let success = (200..300).contains(&status);
    if !success || parsed.error.is_some() {
        let message = match parsed.error {
            Some(Value::String(text)) => text,
            Some(Value::Null) | None => format!("solver returned HTTP {status}"),
            Some(other) => other.to_string(),
        };
        return Err(SolveError::Rejected { status, message });
    }

    Ok(Solution {
        moves: MoveList::parse(parsed.solution.as_deref().unwrap_or_default()),
        reported_moves: parsed
            .moves
            .as_ref()
            .and_then(Value::as_u64)
            .and_then(|n| usize::try_from(n).ok()),
        message: parsed
            .message
            .as_ref()
            .and_then(Value::as_str)
            .map(str::to_owned),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_with_extras() {
        let body = r#"{"solution": "R U R' U'", "moves": 4, "message": "Solved in 4 moves!"}"#;
        let solution = interpret_response(200, body).unwrap();
        assert_eq!(solution.moves.to_string(), "R U R' U'");
        assert_eq!(solution.reported_moves, Some(4));
        assert_eq!(solution.message.as_deref(), Some("Solved in 4 moves!"));
    }

    #[test]
    fn test_mistyped_extras_keep_the_solution() {
        for body in [
            r#"{"solution": "R U", "moves": "2"}"#,
            r#"{"solution": "R U", "moves": -1}"#,
            r#"{"solution": "R U", "message": 5}"#,
            r#"{"solution": "R U", "moves": 2.5, "message": ["x"]}"#,
        ] {
            let solution = interpret_response(200, body).unwrap();
            assert_eq!(solution.moves.to_string(), "R U", "body: {body}");
            assert_eq!(solution.reported_moves, None, "body: {body}");
            assert_eq!(solution.message, None, "body: {body}");
        }
    }

    #[test]
    fn test_empty_solution_string_is_empty_move_list() {
        let solution = interpret_response(200, r#"{"solution": ""}"#).unwrap();
        assert!(solution.moves.is_empty());
    }

    #[test]
    fn test_server_error_with_error_text() {
        let err = interpret_response(500, r#"{"error": "invalid cube"}"#).unwrap_err();
        match err {
            SolveError::Rejected { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "invalid cube");
            }
            SolveError::Transport(_) => panic!("expected rejection"),
        }
    }

    #[test]
    fn test_missing_solution_is_empty() {
        let solution = interpret_response(200, "{}").unwrap();
        assert!(solution.moves.is_empty());
        assert_eq!(solution.reported_moves, None);
    }

    #[test]
    fn test_error_field_on_ok_status() {
        let err = interpret_response(200, r#"{"error": "Invalid cube configuration: x"}"#)
            .unwrap_err();
        match err {
            SolveError::Rejected { status, message } => {
                assert_eq!(status, 200);
                assert_eq!(message, "Invalid cube configuration: x");
            }
            SolveError::Transport(_) => panic!("expected rejection"),
        }
    }

    #[test]
    fn test_error_status_without_error_field() {
        let err = interpret_response(503, r#"{"detail": "down"}"#).unwrap_err();
        assert_eq!(err.to_string(), "solver returned HTTP 503");
        assert!(!err.is_transport());
    }

    #[test]
    fn test_error_status_wins_over_solution() {
        let err = interpret_response(500, r#"{"solution": "R"}"#).unwrap_err();
        assert!(matches!(err, SolveError::Rejected { status: 500, .. }));
    }

    #[test]
    fn test_non_string_error_is_rendered() {
        let err = interpret_response(422, r#"{"error": {"field": "cube"}}"#).unwrap_err();
        assert_eq!(err.to_string(), r#"{"field":"cube"}"#);
    }

    #[test]
    fn test_non_json_body_is_transport_failure() {
        let err = interpret_response(200, "<html>Bad Gateway</html>").unwrap_err();
        assert!(err.is_transport());
        let err = interpret_response(502, "").unwrap_err();
        assert!(err.is_transport());
    }
}
