//! # Bestiary - Monster Threat Analytics
//!
//! The command-line front end for `bestiary-core`.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │           apps/bestiary (THE BINARY)         │
//! │                                              │
//! │  ┌──────────┐   ┌──────────┐   ┌──────────┐  │
//! │  │   CLI    │   │  Config  │   │ Logging  │  │
//! │  │  (clap)  │   │  (toml)  │   │(tracing) │  │
//! │  └────┬─────┘   └────┬─────┘   └────┬─────┘  │
//! │       └──────────────┼──────────────┘        │
//! │                      ▼                       │
//! │              ┌───────────────┐               │
//! │              │ bestiary-core │               │
//! │              │  (THE LOGIC)  │               │
//! │              └───────────────┘               │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! bestiary summary
//! bestiary -f monsters.json --json-mode bands
//! bestiary sum 2 3
//! ```

use bestiary::cli::{self, Cli};
use bestiary::config::{AppConfig, LogFormat};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = Cli::parse();

    let config = AppConfig::resolve(cli.config.as_deref(), |key| std::env::var(key).ok());

    // Logging comes up before the config error is reported, with defaults if needed.
    match &config {
        Ok(config) => init_tracing(config.log_format, &config.log_filter(cli.verbose)),
        Err(_) => init_tracing(LogFormat::Text, &AppConfig::default().log_filter(cli.verbose)),
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(&cli, &config) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the global subscriber. `RUST_LOG` overrides `fallback_filter`.
fn init_tracing(format: LogFormat, fallback_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| fallback_filter.into());

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Print the Bestiary banner to stderr.
fn print_banner() {
    eprintln!(
        r#"
  ┳┓┏┓┏┓┏┳┓┳┏┓┳┓┓┏
  ┣┫┣ ┗┓ ┃ ┃┣┫┣┫┗┫
  ┻┛┗┛┗┛ ┻ ┻┛┗┛┗┗┛

  Monster Threat Analytics v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
