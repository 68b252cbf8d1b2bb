//! Boba TUI entry point.
//!
//! # Usage
//!
//! ```bash
//! # Talk to a running assistant service
//! boba-tui --endpoint http://localhost:5000
//!
//! # Offline demo with canned answers
//! boba-tui
//! ```

use std::{
    error::Error,
    fs::OpenOptions,
    path::PathBuf,
    sync::{Arc, Mutex},
    time::Duration,
};

use boba_app::{Runtime, Session, Transport, WidgetConfig};
use boba_transport::{CannedTransport, HttpTransport, HttpTransportConfig};
use boba_tui::TerminalDriver;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Boba terminal chat widget
#[derive(Parser, Debug)]
#[command(name = "boba-tui")]
#[command(about = "Terminal chat widget for the SMK TI Bazma school assistant")]
#[command(version)]
struct Args {
    /// Base URL of the assistant service (requests go to `<endpoint>/api/chat`)
    ///
    /// If not provided, runs in demo mode with an offline canned responder.
    #[arg(short, long, env = "BOBA_ENDPOINT")]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "BOBA_TIMEOUT_SECS", default_value = "30")]
    timeout_secs: u64,

    /// Delay in milliseconds before quick suggestions return after a reply
    #[arg(long, env = "BOBA_SETTLE_MS", default_value = "500")]
    settle_ms: u64,

    /// Artificial reply latency in demo mode, in milliseconds
    #[arg(long, env = "BOBA_DEMO_LATENCY_MS", default_value = "800")]
    demo_latency_ms: u64,

    /// Log file (the terminal belongs to the UI)
    #[arg(long, env = "BOBA_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = WidgetConfig::default().with_settle_delay(Duration::from_millis(args.settle_ms));
    let session = Session::new(config);

    match &args.endpoint {
        Some(endpoint) => {
            let http_config = HttpTransportConfig::new(endpoint.as_str())
                .with_timeout(Duration::from_secs(args.timeout_secs));
            let transport = HttpTransport::new(&http_config)?;
            tracing::info!(url = %transport.url(), "using assistant service");
            run(transport, session).await
        },
        None => {
            tracing::info!("no endpoint configured, using canned responder");
            let transport =
                CannedTransport::new().with_latency(Duration::from_millis(args.demo_latency_ms));
            run(transport, session).await
        },
    }
}

async fn run<T: Transport>(transport: T, session: Session) -> Result<(), Box<dyn Error>> {
    let driver = TerminalDriver::new()?;
    let session = Runtime::new(driver, Arc::new(transport), session).run().await?;

    tracing::info!(messages = session.transcript().len(), "widget closed");
    Ok(())
}

fn init_logging(args: &Args) -> Result<(), Box<dyn Error>> {
    let path = args.log_file.clone().unwrap_or_else(|| std::env::temp_dir().join("boba-tui.log"));
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();

    tracing::info!(log_file = %path.display(), "Boba TUI starting");
    Ok(())
}
