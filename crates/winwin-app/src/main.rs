//! winwin: runs the window orchestrator against a simulated host and
//! speaks its request/broadcast protocol as JSON lines on stdio.

mod boot;
mod cli;
mod session;

use std::process::ExitCode;
use std::sync::Arc;

use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;
use winwin_common::EventBus;
use winwin_tiling::{ArrangeSettings, Orchestrator, OrchestratorHandle};

const REQUEST_QUEUE: usize = 32;
const OUTPUT_QUEUE: usize = 256;

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    // Config is read before logging is up; its error is reported below.
    let (config, config_error) = boot::load_config(args.config.as_deref());

    let env_filter = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (filter, filter_warning) = cli::log_filter(
        env_filter.as_deref(),
        args.log_level.as_deref(),
        config.logging.level.directive(),
    );
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    tracing::info!("winwin v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(warning) = filter_warning {
        tracing::warn!("{warning}");
    }
    match (&config_error, &args.config) {
        (Some(e), _) => tracing::warn!("Config load failed, using defaults: {e}"),
        (None, Some(path)) => tracing::info!("Using config override: {}", path.display()),
        (None, None) => {}
    }

    let host = Arc::new(boot::build_host(args.screen, &args.windows));
    let store = boot::ratio_store(args.ratio_file.as_deref());
    let bus = Arc::new(EventBus::default());
    let settings = ArrangeSettings::from_config(&config);
    tracing::info!(
        default_left = settings.default_ratio.left,
        merge_width = settings.merge_width,
        "orchestrator configured"
    );
    let orchestrator = Arc::new(Orchestrator::new(host, store, bus.clone(), settings));

    let (handle, requests) = OrchestratorHandle::channel(REQUEST_QUEUE);
    let (out_tx, out_rx) = mpsc::channel(OUTPUT_QUEUE);

    let writer = tokio::spawn(session::write_lines(out_rx, tokio::io::stdout()));
    let forwarder = tokio::spawn(session::forward_broadcasts(bus.subscribe(), out_tx.clone()));
    let runner = tokio::spawn(async move { orchestrator.run(requests).await });

    let served = session::serve(BufReader::new(tokio::io::stdin()), handle, out_tx).await;

    if let Err(e) = runner.await {
        tracing::error!("orchestrator task failed: {e}");
    }
    if let Err(e) = forwarder.await {
        tracing::error!("broadcast forwarder failed: {e}");
    }
    match writer.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::warn!("stdout closed: {e}"),
        Err(e) => tracing::error!("output task failed: {e}"),
    }

    match served {
        Ok(count) => {
            tracing::info!(requests = count, "Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("session ended with error: {e}");
            ExitCode::FAILURE
        }
    }
}
