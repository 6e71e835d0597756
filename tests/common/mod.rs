//! Shared utilities for integration and load testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use blog_insights::config::ServiceConfig;
use blog_insights::http::HttpServer;
use blog_insights::lifecycle::Shutdown;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Start a programmable mock upstream on an ephemeral port.
///
/// Every accepted connection runs `f` and writes its `(status, body)` back as
/// a JSON response.
#[allow(dead_code)]
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
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
                        // Drain the request head before answering.
                        let mut buf = [0u8; 4096];
                        let _ = socket.read(&mut buf).await;

                        let (status, body) = f().await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            429 => "429 Too Many Requests",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\n\
                             Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Default configuration pointed at `upstream_url`, with retries kept fast.
#[allow(dead_code)]
pub fn test_config(upstream_url: &str) -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.listener.bind_host = "127.0.0.1".into();
    config.upstream.url = upstream_url.to_string();
    config.upstream.admin_secret = "test-secret".into();
    config.retries.max_attempts = 3;
    config.retries.base_delay_ms = 0;
    config
}

/// Start the service on an ephemeral port; triggering the returned
/// `Shutdown` stops it.
#[allow(dead_code)]
pub async fn spawn_service(config: ServiceConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config).expect("server should build");

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Plain client that bypasses any proxy configured in the environment.
#[allow(dead_code)]
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

#[allow(dead_code)]
pub fn sample_blogs_json() -> String {
    serde_json::json!({
        "blogs": [
            {"id": "1", "title": "Privacy matters", "image_url": "a.png"},
            {"id": "2", "title": "Rust async in depth", "image_url": "b.png"},
            {"id": "3", "title": "privacy by default", "image_url": "c.png"},
            {"id": "4", "title": "Rust async in depth", "image_url": "d.png"}
        ]
    })
    .to_string()
}
