//! Nimbus - conversational weather assistant
//!
//! Main entry point for the Nimbus CLI.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

mod commands;

use commands::{ask, chat, tools};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// Nimbus - ask about the weather in plain language
#[derive(Parser)]
#[command(name = "nimbus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config file (default: <config dir>/nimbus/config.toml)
    #[arg(short, long, global = true, env = "NIMBUS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enter interactive chat mode (default)
    Chat(chat::ChatArgs),

    /// Ask a one-shot question
    Ask(ask::AskArgs),

    /// List the weather tools available to the assistant
    Tools(tools::ToolsArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine.
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let _guard = init_tracing(cli.verbose);

    let loaded = nimbus_config::load_config(cli.config.as_deref())?;
    if let Some(ref path) = loaded.source {
        tracing::debug!(path = %path.display(), "using config file");
    }

    let ctx = commands::Context {
        config: loaded.config,
        verbose: cli.verbose,
    };

    match cli.command {
        Some(Commands::Chat(args)) => chat::run(args, &ctx).await,
        Some(Commands::Ask(args)) => ask::run(args, &ctx).await,
        Some(Commands::Tools(args)) => tools::run(args, &ctx).await,
        None => chat::run(chat::ChatArgs::default(), &ctx).await,
    }
}

/// Console (human-readable, stderr) + daily-rotating JSON file.
///
/// `RUST_LOG` replaces the console filter when set.
fn init_tracing(verbose: bool) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    let console_filter = if verbose {
        "nimbus=debug,nimbus_agent=debug,nimbus_llm=debug,nimbus_mcp=debug,nimbus_config=debug,warn"
    } else {
        "nimbus=info,warn"
    };
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(console_filter));

    let log_dir = dirs::data_local_dir()
        .map(|d| d.join("nimbus").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"));
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("nimbus")
        .filename_suffix("log")
        .build(&log_dir)
        .ok();

    let (file_layer, guard) = match appender {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_writer(writer).with_filter(EnvFilter::new(
                "nimbus=trace,nimbus_agent=trace,nimbus_llm=trace,nimbus_mcp=trace,nimbus_config=trace,info",
            ));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(console_filter),
        )
        .with(file_layer)
        .init();

    guard
}
