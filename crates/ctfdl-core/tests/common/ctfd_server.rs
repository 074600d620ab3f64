//! Minimal HTTP/1.1 server standing in for a CTFd instance in integration tests.
//!
//! Serves a fixed route table (exact request target first, then the path with
//! the query stripped); anything else is 404. Every request head is recorded
//! so tests can assert on paths and credential headers.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub body: Vec<u8>,
    pub content_type: &'static str,
    /// If true, omit `Content-Length` and end the body by closing the connection.
    pub omit_length: bool,
    /// Pause between the response head and the body.
    pub delay: Option<Duration>,
}

impl Route {
    /// 200 with `{"success": true, "data": <data>}`.
    pub fn data(data: serde_json::Value) -> Self {
        let body = serde_json::json!({ "success": true, "data": data });
        Self::raw(200, body.to_string().into_bytes(), "application/json")
    }

    pub fn file(body: impl Into<Vec<u8>>) -> Self {
        Self::raw(200, body.into(), "application/octet-stream")
    }

    pub fn status(status: u16) -> Self {
        Self::raw(status, b"{\"success\": false}".to_vec(), "application/json")
    }

    pub fn raw(status: u16, body: Vec<u8>, content_type: &'static str) -> Self {
        Self {
            status,
            body,
            content_type,
            omit_length: false,
            delay: None,
        }
    }

    pub fn without_length(mut self) -> Self {
        self.omit_length = true;
        self
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request target as sent, query included.
    pub target: String,
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or("")
    }
}

pub struct CtfdServer {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl CtfdServer {
    /// Base URL with trailing slash, e.g. "http://127.0.0.1:12345/".
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests whose path (query stripped) equals `path`.
    pub fn hits(&self, path: &str) -> usize {
        self.requests().iter().filter(|r| r.path() == path).count()
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(routes: Vec<(&str, Route)>) -> CtfdServer {
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, route)| (path.to_string(), route))
            .collect(),
    );
    let requests = Arc::new(Mutex::new(Vec::new()));
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let recorded = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let recorded = Arc::clone(&recorded);
            thread::spawn(move || handle(stream, &routes, &recorded));
        }
    });
    CtfdServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

fn handle(
    mut stream: TcpStream,
    routes: &HashMap<String, Route>,
    recorded: &Mutex<Vec<RecordedRequest>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let Some(head) = read_head(&mut stream) else {
        return;
    };
    let Some(request) = parse_head(&head) else {
        return;
    };
    let route = routes
        .get(&request.target)
        .or_else(|| routes.get(request.path()))
        .cloned();
    recorded.lock().unwrap().push(request);

    let route = route.unwrap_or_else(|| Route::status(404));
    let mut response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nConnection: close\r\n",
        route.status,
        reason(route.status),
        route.content_type
    );
    if !route.omit_length {
        response.push_str(&format!("Content-Length: {}\r\n", route.body.len()));
    }
    response.push_str("\r\n");
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
    if let Some(delay) = route.delay {
        thread::sleep(delay);
    }
    let _ = stream.write_all(&route.body);
    let _ = stream.flush();
    let _ = stream.shutdown(std::net::Shutdown::Write);
}

fn read_head(stream: &mut TcpStream) -> Option<String> {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    while !data.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return None,
            Ok(n) => data.extend_from_slice(&buf[..n]),
        }
        if data.len() > 64 * 1024 {
            return None;
        }
    }
    String::from_utf8(data).ok()
}

fn parse_head(head: &str) -> Option<RecordedRequest> {
    let mut lines = head.lines();
    let request_line = lines.next()?;
    let target = request_line.split_whitespace().nth(1)?.to_string();
    let headers = lines
        .take_while(|l| !l.trim().is_empty())
        .filter_map(|l| l.split_once(':'))
        .map(|(n, v)| (n.trim().to_string(), v.trim().to_string()))
        .collect();
    Some(RecordedRequest { target, headers })
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
