// Signal handling module
//
// Supported signals:
// - SIGTERM: Graceful shutdown
// - SIGINT:  Graceful shutdown (Ctrl+C)
//
// Configuration and the thesis collection are fixed for the lifetime of the
// process, so there is no reload signal.

use tokio::sync::watch;

use crate::logger;

/// Signal handler state
pub struct SignalHandler {
    /// Set to `true` once shutdown has been requested
    shutdown: watch::Sender<bool>,
}

impl SignalHandler {
    pub fn new() -> Self {
        let (shutdown, _) = watch::channel(false);
        Self { shutdown }
    }

    /// Receiver that observes the shutdown flag
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.shutdown.subscribe()
    }

    /// Request shutdown; later calls are no-ops
    pub fn trigger_shutdown(&self, reason: &str) {
        if !*self.shutdown.borrow() {
            logger::log_shutdown_requested(reason);
        }
        self.shutdown.send_replace(true);
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Start signal handlers (Unix)
///
/// Spawns a background task that waits for SIGTERM or SIGINT and flips the
/// shutdown flag.
#[cfg(unix)]
pub fn start_signal_handler(handler: std::sync::Arc<SignalHandler>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let (mut sigterm, mut sigint) =
            match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
                (Ok(term), Ok(int)) => (term, int),
                (Err(e), _) | (_, Err(e)) => {
                    logger::log_error(&format!("Failed to register signal handlers: {e}"));
                    wait_for_ctrl_c(&handler).await;
                    return;
                }
            };

        tokio::select! {
            _ = sigterm.recv() => handler.trigger_shutdown("SIGTERM"),
            _ = sigint.recv() => handler.trigger_shutdown("SIGINT"),
        }
    });
}

/// Non-Unix fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(handler: std::sync::Arc<SignalHandler>) {
    tokio::spawn(async move {
        wait_for_ctrl_c(&handler).await;
    });
}

/// Resolves to `true` once shutdown starts, `false` if the sender is gone
pub async fn wait_for_shutdown(shutdown: &mut watch::Receiver<bool>) -> bool {
    shutdown.wait_for(|stopping| *stopping).await.is_ok()
}

async fn wait_for_ctrl_c(handler: &SignalHandler) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => handler.trigger_shutdown("Ctrl+C"),
        Err(e) => logger::log_error(&format!("Failed to listen for Ctrl+C: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trigger_shutdown_notifies_subscribers() {
        let handler = SignalHandler::new();
        let mut rx = handler.subscribe();
        assert!(!*rx.borrow());

        handler.trigger_shutdown("test");
        handler.trigger_shutdown("test again");

        assert!(wait_for_shutdown(&mut rx).await);
        assert!(*handler.subscribe().borrow());
    }
}
