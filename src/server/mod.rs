// Server module entry point
// Listener setup, connection serving and graceful shutdown

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the module is exposed as server_loop
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used items
pub use listener::create_reusable_listener;
pub use server_loop::start_server_loop;
pub use signal::{start_signal_handler, SignalHandler};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppState, Config};
    use crate::theses::Theses;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    fn builtin_state() -> AppState {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::load_from(dir.path().join("none").to_str().unwrap()).unwrap();
        config.logging.access_log = false;
        AppState::new(config, Theses::builtin("en").unwrap())
    }

    async fn raw_request(addr: std::net::SocketAddr, request: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn test_serves_requests_and_shuts_down() {
        let listener = create_reusable_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();

        let signals = SignalHandler::new();
        let server = tokio::spawn(start_server_loop(
            listener,
            Arc::new(builtin_state()),
            signals.subscribe(),
        ));

        let response = raw_request(
            addr,
            "GET /1 HTTP/1.1\r\nHost: localhost\r\nAccept-Language: de\r\nConnection: close\r\n\r\n",
        )
        .await;
        assert!(response.starts_with("HTTP/1.1 200 OK"), "{response}");
        assert!(response.contains("content-language: de"));
        assert!(response.contains("Märkte sind Gespräche."));

        let response = raw_request(
            addr,
            "GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        )
        .await;
        assert!(response.starts_with("HTTP/1.1 302 Found"), "{response}");
        assert!(response.contains("location: /"));

        signals.trigger_shutdown("test");
        tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .expect("server did not stop")
            .unwrap();
    }

    #[tokio::test]
    async fn test_drain_returns_when_idle() {
        let active = std::sync::atomic::AtomicUsize::new(0);
        let remaining = server_loop::drain_connections(&active, Duration::from_secs(5)).await;
        assert_eq!(remaining, 0);
    }

    #[tokio::test]
    async fn test_drain_gives_up_after_grace() {
        let active = std::sync::atomic::AtomicUsize::new(2);
        let remaining = server_loop::drain_connections(&active, Duration::from_millis(10)).await;
        assert_eq!(remaining, 2);
    }
}
