use std::collections::VecDeque;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use facelace_client::{ClientConfig, SolveClient, SolveError};
use facelace_store::{CubeState, CubeString, encode};
use serde_json::{Value, json};

#[derive(Debug, Clone)]
struct ScriptedResponse {
    status: u16,
    content_type: &'static str,
    body: String,
}

impl ScriptedResponse {
    fn json(status: u16, body: &Value) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
struct RecordedRequest {
    request_line: String,
    content_type: Option<String>,
    body: String,
}

struct ServerHarness {
    endpoint: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    stop: Arc<AtomicBool>,
    join_handle: Option<thread::JoinHandle<()>>,
}

impl ServerHarness {
    fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    fn client(&self) -> SolveClient {
        SolveClient::new(&ClientConfig::with_endpoint(&self.endpoint)).expect("build client")
    }
}

impl Drop for ServerHarness {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.join_handle.take() {
            let _ = handle.join();
        }
    }
}

fn find_header_end(bytes: &[u8]) -> Option<usize> {
    bytes.windows(4).position(|window| window == b"\r\n\r\n")
}

fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut bytes = Vec::new();
    let mut buf = [0_u8; 4096];
    let mut content_length = 0_usize;
    let mut header_end = None;

    stream.set_read_timeout(Some(Duration::from_secs(2))).ok()?;

    loop {
        let read = stream.read(&mut buf).ok()?;
        if read == 0 {
            break;
        }
        bytes.extend_from_slice(&buf[..read]);

        if header_end.is_none()
            && let Some(pos) = find_header_end(&bytes)
        {
            header_end = Some(pos + 4);
            let header_text = String::from_utf8_lossy(&bytes[..pos]).to_string();
            for line in header_text.lines() {
                if line.to_ascii_lowercase().starts_with("content-length:")
                    && let Some(value) = line.split(':').nth(1)
                {
                    content_length = value.trim().parse().unwrap_or(0);
                }
            }
        }

        if let Some(end) = header_end
            && bytes.len() >= end + content_length
        {
            break;
        }
    }

    let end = header_end?;
    let header_text = String::from_utf8_lossy(&bytes[..end]).to_string();
    let mut lines = header_text.lines();
    let request_line = lines.next()?.to_string();
    let content_type = lines
        .find(|line| line.to_ascii_lowercase().starts_with("content-type:"))
        .and_then(|line| line.split_once(':'))
        .map(|(_, value)| value.trim().to_string());
    let body = String::from_utf8_lossy(&bytes[end..end + content_length]).to_string();

    Some(RecordedRequest {
        request_line,
        content_type,
        body,
    })
}

fn write_response(stream: &mut TcpStream, response: &ScriptedResponse) {
    let payload = format!(
        "HTTP/1.1 {} Scripted\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        response.content_type,
        response.body.len(),
        response.body
    );
    let _ = stream.write_all(payload.as_bytes());
    let _ = stream.flush();
}

fn start_scripted_server(responses: Vec<ScriptedResponse>) -> ServerHarness {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
    listener
        .set_nonblocking(true)
        .expect("set nonblocking listener");

    let endpoint = format!("http://{}/solve", listener.local_addr().expect("local addr"));
    let stop = Arc::new(AtomicBool::new(false));
    let requests = Arc::new(Mutex::new(Vec::new()));
    let mut queue = VecDeque::from(responses);

    let stop_clone = Arc::clone(&stop);
    let requests_clone = Arc::clone(&requests);

    let join_handle = thread::spawn(move || {
        while !stop_clone.load(Ordering::SeqCst) {
            match listener.accept() {
                Ok((mut stream, _addr)) => {
                    let _ = stream.set_nonblocking(false);
                    if let Some(request) = read_request(&mut stream) {
                        requests_clone
                            .lock()
                            .expect("requests lock")
                            .push(request);
                        let response = queue
                            .pop_front()
                            .unwrap_or_else(|| ScriptedResponse::text(500, "script exhausted"));
                        write_response(&mut stream, &response);
                    }
                }
                Err(error) if error.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                Err(_) => break,
            }
        }
    });

    ServerHarness {
        endpoint,
        requests,
        stop,
        join_handle: Some(join_handle),
    }
}

fn solved_cube() -> CubeString {
    encode(&CubeState::solved()).expect("solved cube encodes")
}

#[test]
fn posts_cube_as_json_and_parses_solution() {
    let server = start_scripted_server(vec![ScriptedResponse::json(
        200,
        &json!({ "solution": "R U R' U'", "moves": 4, "message": "Solved in 4 moves!" }),
    )]);

    let solution = server.client().solve(&solved_cube()).expect("solve");
    assert_eq!(solution.moves.len(), 4);
    assert_eq!(solution.moves.get(2), Some("R'"));
    assert_eq!(solution.reported_moves, Some(4));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].request_line.starts_with("POST /solve "));
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
    let body: Value = serde_json::from_str(&requests[0].body).expect("request body is JSON");
    assert_eq!(body, json!({ "cube": solved_cube().as_str() }));
}

#[test]
fn error_field_with_ok_status_is_rejection() {
    let server = start_scripted_server(vec![ScriptedResponse::json(
        200,
        &json!({ "error": "Invalid cube configuration: Error. There is not exactly one facelet of each colour" }),
    )]);

    let err = server.client().solve(&solved_cube()).unwrap_err();
    match err {
        SolveError::Rejected { status, message } => {
            assert_eq!(status, 200);
            assert!(message.starts_with("Invalid cube configuration"));
        }
        SolveError::Transport(err) => panic!("unexpected transport error: {err}"),
    }
}

#[test]
fn server_error_without_body_text_uses_status() {
    let server = start_scripted_server(vec![ScriptedResponse::json(
        500,
        &json!({ "detail": "Internal Server Error" }),
    )]);

    let err = server.client().solve(&solved_cube()).unwrap_err();
    assert_eq!(err.to_string(), "solver returned HTTP 500");
}

#[test]
fn non_json_body_is_transport_failure() {
    let server = start_scripted_server(vec![ScriptedResponse::text(200, "Bad Gateway")]);

    let err = server.client().solve(&solved_cube()).unwrap_err();
    assert!(err.is_transport());
}

#[test]
fn refused_connection_is_transport_failure() {
    // Bind and drop to get a port nobody listens on.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe");
        listener.local_addr().expect("local addr").port()
    };
    let client = SolveClient::new(&ClientConfig::with_endpoint(format!(
        "http://127.0.0.1:{port}/solve"
    )))
    .expect("build client");

    let err = client.solve(&solved_cube()).unwrap_err();
    assert!(err.is_transport());
}
