//! Minimal HTTP/1.1 server that answers GET with scripted redirects, for
//! integration tests.
//!
//! Built-in route: `/hop/N` redirects (302) to `/hop/N-1`; `/hop/0` answers
//! 200 with a body. Extra routes can be scripted per path. Every request
//! path is recorded.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub enum Route {
    /// Redirect status with an optional `Location` header.
    Redirect { status: u16, location: Option<String> },
    /// Plain response with a body.
    Status(u16),
}

pub struct RedirectServer {
    /// e.g. "http://127.0.0.1:12345"
    pub base: String,
    /// e.g. "127.0.0.1:12345"
    pub host: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl RedirectServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server with only the built-in `/hop/N` route.
pub fn start() -> RedirectServer {
    start_with_routes(Vec::new())
}

/// Starts a server in a background thread. The server runs until the process exits.
pub fn start_with_routes(routes: Vec<(&str, Route)>) -> RedirectServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, route)| (path.to_string(), route))
            .collect(),
    );
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let recorded = Arc::clone(&recorded);
            thread::spawn(move || handle(stream, &routes, &recorded));
        }
    });
    RedirectServer {
        base: format!("http://127.0.0.1:{}", port),
        host: format!("127.0.0.1:{}", port),
        requests,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, Route>,
    recorded: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (method, path) = parse_request_line(request);
    recorded.lock().unwrap().push(path.to_string());

    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nConnection: close\r\n\r\n");
        return;
    }

    let route = routes.get(path).cloned().or_else(|| hop_route(path));
    let response = match route {
        Some(Route::Redirect { status, location }) => {
            let location = location
                .map(|l| format!("Location: {}\r\n", l))
                .unwrap_or_default();
            format!(
                "HTTP/1.1 {} Redirect\r\n{}Content-Length: 0\r\nConnection: close\r\n\r\n",
                status, location
            )
        }
        Some(Route::Status(status)) => page(status),
        None => page(200),
    };
    let _ = stream.write_all(response.as_bytes());
}

/// `/hop/N`: redirect to `/hop/N-1`, or a page at `/hop/0`.
fn hop_route(path: &str) -> Option<Route> {
    let n: usize = path.strip_prefix("/hop/")?.parse().ok()?;
    if n == 0 {
        return Some(Route::Status(200));
    }
    Some(Route::Redirect {
        status: 302,
        location: Some(format!("/hop/{}", n - 1)),
    })
}

fn page(status: u16) -> String {
    let body = "<html>".to_string() + &"x".repeat(32 * 1024) + "</html>";
    format!(
        "HTTP/1.1 {} Page\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    )
}

/// Returns (method, path) from the request line.
fn parse_request_line(request: &str) -> (&str, &str) {
    let line = request.lines().next().unwrap_or("");
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/");
    (method, path)
}
