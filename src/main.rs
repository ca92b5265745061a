use clap::Parser;
use taskd::commands::Cli;
use taskd::libs::messages::macros::{is_debug_mode, set_debug_mode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        set_debug_mode(true);
        EnvFilter::new("debug")
    } else {
        let fallback = if is_debug_mode() { "debug" } else { "info" };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    };
    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    if let Err(e) = cli.menu().await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}
