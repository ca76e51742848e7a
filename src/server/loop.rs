// Server loop module
// Accepts connections until shutdown, then drains in-flight requests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::watch;

use super::connection::accept_connection;
use super::signal::wait_for_shutdown;
use crate::config::AppState;
use crate::logger;

/// How often the drain phase re-checks the active connection count
const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Main accept loop
///
/// Runs until `shutdown` becomes `true` (or its sender is dropped), then
/// closes the listener and waits up to `write_timeout` seconds for active
/// connections to finish.
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    mut shutdown: watch::Receiver<bool>,
) {
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(
                            stream,
                            peer_addr,
                            &state,
                            &active_connections,
                            shutdown.clone(),
                        );
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = wait_for_shutdown(&mut shutdown) => {
                break;
            }
        }
    }

    drop(listener);
    logger::log_shutdown_complete(active_connections.load(Ordering::SeqCst));

    let grace = Duration::from_secs(state.config.performance.write_timeout);
    drain_connections(&active_connections, grace).await;
}

/// Wait until every active connection has finished or `grace` elapses.
///
/// Returns the number of connections still open when it gave up.
pub async fn drain_connections(active: &AtomicUsize, grace: Duration) -> usize {
    let deadline = tokio::time::Instant::now() + grace;

    loop {
        let remaining = active.load(Ordering::SeqCst);
        if remaining == 0 {
            return 0;
        }
        if tokio::time::Instant::now() >= deadline {
            logger::log_warning(&format!(
                "Shutdown grace period elapsed with {remaining} connection(s) still open"
            ));
            return remaining;
        }
        tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
    }
}
