//! gobike API server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ axum Router ──▶ /api/users   ──┐
//!                         │          /api/routes  ──┼──▶ Response envelope
//!                         │          /api/rides   ──┘
//!                         │
//!                         ▼
//!                  Logger (Arc, shared)
//!                         │  lock → rotate if date changed → append line
//!                         ▼
//!                  <log dir>/YYYY_MM_DD.log
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use gobike_server::http::HttpServer;
use gobike_server::lifecycle::startup::{self, StartupError};
use gobike_server::lifecycle::{wait_for_signal, DrainOutcome, Shutdown};
use gobike_server::observability::logging::init_diagnostics;
use gobike_server::{log_error, log_fatal, log_info, log_warn};

#[derive(Parser)]
#[command(name = "gobike-server")]
#[command(about = "gobike API server", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "config/gobike.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("startup error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_diagnostics();

    let config = startup::load_configuration(Some(cli.config.as_path()))?;
    let logger = startup::init_logger(&config)?;
    startup::log_startup(&logger, &config);

    let address = config.server.bind_address();
    let listener = match TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(source) => {
            log_fatal!(logger, "Server failed to start: {}", source);
            logger.close();
            return Err(StartupError::Bind { address, source }.into());
        }
    };

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, logger.clone());
    let server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    match wait_for_signal().await {
        Ok(signal) => log_info!(logger, "Received {}, shutting down server...", signal),
        Err(e) => log_error!(logger, "Signal handler failed ({}), shutting down server...", e),
    }
    shutdown.trigger();

    let result = match shutdown.drain(server_task).await {
        DrainOutcome::Completed(Ok(())) => {
            log_info!(logger, "Server exited properly");
            Ok(())
        }
        DrainOutcome::Completed(Err(e)) => {
            log_error!(logger, "Server error during shutdown: {}", e);
            Err(e.into())
        }
        DrainOutcome::Aborted(e) => {
            log_error!(logger, "Server task aborted: {}", e);
            Err(e.into())
        }
        DrainOutcome::TimedOut => {
            log_warn!(
                logger,
                "Server forced to shutdown after {}s",
                shutdown.grace().as_secs()
            );
            Ok(())
        }
    };

    logger.close();
    result
}
