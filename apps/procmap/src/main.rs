//! # procmap - Process Support Map
//!
//! The main binary for the procmap pipeline.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                  apps/procmap (THE BINARY)                │
//! │                                                           │
//! │   ┌─────────────┐   ┌──────────────┐   ┌──────────────┐   │
//! │   │    CLI      │   │    Config    │   │   Logging    │   │
//! │   │   (clap)    │   │    (toml)    │   │  (tracing)   │   │
//! │   └──────┬──────┘   └──────┬───────┘   └──────────────┘   │
//! │          └─────────┬───────┘                              │
//! │                    ▼                                      │
//! │            ┌───────────────┐                              │
//! │            │ procmap-core  │                              │
//! │            │  (THE LOGIC)  │                              │
//! │            └───────────────┘                              │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Full pipeline with default paths
//! procmap
//!
//! # Individual stages
//! procmap extract --workbook excel/process_map.xlsx --csv-dir csv/
//! procmap render --output dist/process_support_map.html
//! procmap export -o dist/matrix.json
//! ```

use clap::Parser;
use procmap::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Initialize tracing: PROCMAP_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("PROCMAP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "procmap=debug"
    } else {
        "procmap=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
