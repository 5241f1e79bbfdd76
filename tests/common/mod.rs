//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

use form_relay::config::RelayConfig;
use form_relay::http::HttpServer;
use form_relay::lifecycle::Shutdown;

/// One HTTP request as seen by a mock destination.
#[allow(dead_code)]
pub struct CapturedRequest {
    /// Request line plus headers, verbatim.
    pub head: String,
    /// Body bytes, verbatim.
    pub body: Vec<u8>,
}

/// Start a mock destination returning a fixed status and body.
#[allow(dead_code)]
pub async fn start_mock_destination(addr: SocketAddr, status: u16, body: &'static str) {
    serve_destination(addr, status, body, None).await;
}

/// Start a mock destination that also reports every request it receives.
#[allow(dead_code)]
pub async fn start_capture_destination(
    addr: SocketAddr,
    status: u16,
    body: &'static str,
    captured: mpsc::UnboundedSender<CapturedRequest>,
) {
    serve_destination(addr, status, body, Some(captured)).await;
}

async fn serve_destination(
    addr: SocketAddr,
    status: u16,
    body: &'static str,
    captured: Option<mpsc::UnboundedSender<CapturedRequest>>,
) {
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let captured = captured.clone();
                    tokio::spawn(async move {
                        let request = read_request(&mut socket).await;
                        if let (Some(tx), Some(request)) = (captured, request) {
                            let _ = tx.send(request);
                        }

                        let status_text = match status {
                            200 => "200 OK",
                            400 => "400 Bad Request",
                            404 => "404 Not Found",
                            429 => "429 Too Many Requests",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// Read one HTTP request off the socket.
async fn read_request(socket: &mut TcpStream) -> Option<CapturedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        if let Some(pos) = find_subslice(&buf, b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..pos]).to_string();
            let content_length = head
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.trim()
                        .eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);

            let body_start = pos + 4;
            while buf.len() < body_start + content_length {
                let n = socket.read(&mut chunk).await.ok()?;
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }

            let body_end = (body_start + content_length).min(buf.len());
            return Some(CapturedRequest {
                head,
                body: buf[body_start..body_end].to_vec(),
            });
        }

        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Baseline relay configuration for tests: rate limiting off so individual
/// tests opt in explicitly.
#[allow(dead_code)]
pub fn test_config(relay_addr: SocketAddr, destination: &str) -> RelayConfig {
    let mut config = RelayConfig::default();
    config.listener.bind_address = relay_addr.to_string();
    config.forward.destination_url = destination.to_string();
    config.rate_limit.enabled = false;
    config
}

/// Spawn a relay with the given configuration; the returned coordinator
/// stops it.
#[allow(dead_code)]
pub async fn spawn_relay(config: RelayConfig) -> Shutdown {
    let addr: SocketAddr = config.listener.bind_address.parse().unwrap();
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let listener = TcpListener::bind(addr).await.unwrap();
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    tokio::time::sleep(Duration::from_millis(200)).await;
    shutdown
}

/// Non-pooled client so each test drives fresh connections.
#[allow(dead_code)]
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
