//! Shared helpers for integration tests: a minimal HTTP/1.1 stub server.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// One request as the stub saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Recorded {
    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Running stub: its base URL and every request received so far.
pub struct Stub {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<Recorded>>>,
}

impl Stub {
    pub fn recorded(&self) -> Vec<Recorded> {
        self.requests.lock().expect("requests lock").clone()
    }
}

/// What: Start a stub server answering with `route(request)`.
///
/// Inputs:
/// - `route`: Maps a request to `(status, json_body)`.
///
/// Output:
/// - Handle with the base URL (`http://127.0.0.1:<port>`).
///
/// Details:
/// - One response per connection (`Connection: close`).
pub async fn spawn_stub<F>(route: F) -> Stub
where
    F: Fn(&Recorded) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    let requests = Arc::new(Mutex::new(Vec::new()));
    let route = Arc::new(route);
    let log = Arc::clone(&requests);
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let route = Arc::clone(&route);
            let log = Arc::clone(&log);
            tokio::spawn(async move {
                let _ = read_request(stream, route.as_ref(), &log).await;
            });
        }
    });
    Stub {
        base_url: format!("http://{addr}"),
        requests,
    }
}

async fn read_request<F>(
    mut stream: TcpStream,
    route: &F,
    log: &Mutex<Vec<Recorded>>,
) -> Option<()>
where
    F: Fn(&Recorded) -> (u16, String),
{
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };
    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut start = lines.next()?.split_whitespace();
    let method = start.next()?.to_string();
    let path = start.next()?.to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|l| l.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();
    let len = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);
    while buf.len() < header_end + len {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let end = buf.len().min(header_end + len);
    let body = String::from_utf8_lossy(&buf[header_end..end]).to_string();
    let req = Recorded {
        method,
        path,
        headers,
        body,
    };
    let (status, payload) = route(&req);
    log.lock().expect("requests lock").push(req);
    let reason = match status {
        200 => "OK",
        201 => "Created",
        404 => "Not Found",
        _ => "Error",
    };
    let resp = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{payload}",
        payload.len()
    );
    stream.write_all(resp.as_bytes()).await.ok()?;
    stream.shutdown().await.ok()?;
    Some(())
}

/// JSON for `n` posts with ids `1..=n`, owners cycling through 1..=3.
pub fn posts_json(n: u64) -> String {
    let posts: Vec<String> = (1..=n)
        .map(|id| {
            format!(
                r#"{{"userId":{},"id":{id},"title":"title {id}","body":"body {id}"}}"#,
                (id - 1) % 3 + 1
            )
        })
        .collect();
    format!("[{}]", posts.join(","))
}
