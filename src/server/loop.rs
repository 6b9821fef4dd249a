// Server loop module
// Accepts connections until shutdown is requested, then drains

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::time::Instant;

use super::connection::accept_connection;
use super::signal::SignalHandler;
use crate::config::AppState;
use crate::logger;

const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Accept loop for the SSR server
///
/// Returns once a shutdown signal has been received and in-flight
/// connections have finished or the drain deadline has passed.
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    signals: Arc<SignalHandler>,
) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &state),
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            () = signals.shutdown.notified() => break,
        }
    }

    drop(listener);
    let grace = Duration::from_secs(state.config.performance.write_timeout);
    drain_connections(&state, grace).await;
}

/// Wait for active connections to reach zero, up to `grace`
async fn drain_connections(state: &AppState, grace: Duration) {
    let deadline = Instant::now() + grace;
    loop {
        let active = state.active_connections.load(Ordering::SeqCst);
        if active == 0 {
            logger::log_info("All connections closed");
            return;
        }
        if Instant::now() >= deadline {
            logger::log_warning(&format!(
                "Shutdown grace period elapsed with {active} connection(s) still open"
            ));
            return;
        }
        tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
    }
}
