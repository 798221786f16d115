//! # Interrupt Handling
//!
//! External interrupt signals are turned into a flag that the session loop
//! checks between operations. No pager state is touched from signal context.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Shared "stop now" request set by the signal watcher
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag {
    raised: Arc<AtomicBool>,
}

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }
}

/// Spawn a task that raises `flag` on SIGINT (and SIGTERM on Unix).
///
/// Must be called from inside a tokio runtime. Installing the handlers
/// replaces the default "terminate immediately" action, so the session gets
/// the chance to restore the terminal before exiting.
pub fn spawn_interrupt_watcher(flag: InterruptFlag) -> JoinHandle<()> {
    tokio::spawn(async move {
        match wait_for_interrupt().await {
            Ok(name) => {
                tracing::info!("Received {}, shutting down", name);
                flag.raise();
            }
            Err(e) => tracing::warn!("Failed to listen for interrupt signals: {}", e),
        }
    })
}

#[cfg(unix)]
async fn wait_for_interrupt() -> std::io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result.map(|_| "SIGINT"),
        _ = terminate.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn wait_for_interrupt() -> std::io::Result<&'static str> {
    tokio::signal::ctrl_c().await.map(|_| "Ctrl+C")
}
