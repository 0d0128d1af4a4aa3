//! Shared utilities for integration testing.

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::put;
use axum::Router;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Start a mock status endpoint whose responses come from `f`.
///
/// Returns the bound address; the listener runs until the test ends.
pub async fn start_programmable_target<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let mut request = [0u8; 1024];
                        let _ = socket.read(&mut request).await;

                        let (status, body) = f().await;
                        let status_text = match status {
                            200 => "200 OK",
                            401 => "401 Unauthorized",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a mock status endpoint that always returns `body` with 200.
pub async fn start_mock_target(body: &'static str) -> SocketAddr {
    start_programmable_target(move || async move { (200, body.to_string()) }).await
}

/// Start a target that accepts connections but never answers.
pub async fn start_silent_target() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    addr
}

/// Address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// One request received by the mock Pushgateway.
#[derive(Debug, Clone)]
pub struct ReceivedPush {
    pub job: String,
    pub content_type: String,
    pub body: String,
}

#[derive(Clone)]
struct GatewayState {
    pushes: Arc<Mutex<Vec<ReceivedPush>>>,
    status: StatusCode,
}

/// Mock Pushgateway that records every grouping PUT.
pub struct MockGateway {
    pub addr: SocketAddr,
    pushes: Arc<Mutex<Vec<ReceivedPush>>>,
}

impl MockGateway {
    /// Start a gateway answering every push with `status`.
    pub async fn start(status: StatusCode) -> Self {
        let pushes = Arc::new(Mutex::new(Vec::new()));
        let state = GatewayState {
            pushes: pushes.clone(),
            status,
        };

        let app = Router::new()
            .route("/metrics/job/{job}", put(record_push))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, pushes }
    }

    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn pushes(&self) -> Vec<ReceivedPush> {
        self.pushes.lock().unwrap().clone()
    }

    /// Wait until at least `n` pushes arrived or `timeout` elapses.
    pub async fn wait_for(&self, n: usize, timeout: Duration) -> Vec<ReceivedPush> {
        let deadline = tokio::time::Instant::now() + timeout;
        while self.pushes.lock().unwrap().len() < n && tokio::time::Instant::now() < deadline {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        self.pushes()
    }
}

async fn record_push(
    State(state): State<GatewayState>,
    Path(job): Path<String>,
    headers: HeaderMap,
    body: String,
) -> StatusCode {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    state.pushes.lock().unwrap().push(ReceivedPush {
        job,
        content_type,
        body,
    });
    state.status
}

/// Value of the sample line for `name` in an exposition payload.
pub fn sample_value(payload: &str, name: &str) -> Option<f64> {
    payload
        .lines()
        .filter(|line| !line.starts_with('#'))
        .find_map(|line| {
            let mut parts = line.split_whitespace();
            (parts.next() == Some(name)).then(|| parts.next())?
        })
        .and_then(|v| v.parse().ok())
}

/// In-memory log sink for a `tracing_subscriber` fmt layer.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Capture log output of the current thread until the guard drops.
pub fn capture_logs() -> (SharedBuf, tracing::subscriber::DefaultGuard) {
    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    (buf, tracing::subscriber::set_default(subscriber))
}
