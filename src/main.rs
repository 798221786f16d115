//! # scrollmore Main Entry Point
//!
//! Startup order: parse arguments, open the controlling terminal, load the
//! file, then hand everything to the session. Any startup failure is printed
//! to stderr and exits with status 1.

use anyhow::{Context, Result};
use scrollmore::cmd_args::CommandLineArgs;
use scrollmore::config::{self, PagerConfig};
use scrollmore::io::{TerminalEventStream, TerminalRenderStream};
use scrollmore::signals::{spawn_interrupt_watcher, InterruptFlag};
use scrollmore::{Document, PagerSession};
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing_subscriber();

    let cmd_args = CommandLineArgs::parse();

    let events = TerminalEventStream::open()?;
    let document = Document::open(cmd_args.file())?;

    let interrupt = InterruptFlag::new();
    let watcher = spawn_interrupt_watcher(interrupt.clone());

    let mut session = PagerSession::new(
        document,
        events,
        TerminalRenderStream::new(),
        PagerConfig::default(),
    )?
    .with_interrupt_flag(interrupt);

    // The session blocks on the keyboard, so it gets its own thread while the
    // runtime keeps listening for signals.
    let exit = tokio::task::spawn_blocking(move || session.run())
        .await
        .context("paging session panicked")??;

    watcher.abort();
    tracing::debug!("Exiting after {:?}", exit);
    Ok(())
}

fn init_tracing_subscriber() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(config::get_log_level()))
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
}

/// Build the log filter; an unset or unparsable level keeps only errors
fn log_filter(level: Option<String>) -> EnvFilter {
    let level = level.unwrap_or_else(|| "error".to_string());
    EnvFilter::try_new(format!("{level},tokio=warn")).unwrap_or_else(|_| EnvFilter::new("error"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_defaults_to_errors_only() {
        let filter = log_filter(None).to_string();
        assert!(filter.contains("error"));
        assert!(filter.contains("tokio=warn"));
    }

    #[test]
    fn log_filter_accepts_a_level_from_the_environment() {
        let filter = log_filter(Some("debug".to_string())).to_string();
        assert!(filter.contains("debug"));
    }

    #[test]
    fn log_filter_survives_garbage() {
        let _filter = log_filter(Some("[[[not a filter".to_string()));
    }
}
