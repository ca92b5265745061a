pub mod init;
pub mod serve;

use crate::libs::config::Config;
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Where `init --write-config` writes when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "taskd.json";

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve(serve::ServeArgs),
    #[command(about = "Create the database schema and exit")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log at debug level regardless of RUST_LOG
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Settings shared by every subcommand.
///
/// Without `--config` no file is read and the built-in defaults apply.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// SQLite database file (overrides the configuration file)
    #[arg(short, long)]
    pub database: Option<PathBuf>,
}

impl Cli {
    pub async fn menu(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Serve(args)) => serve::cmd(args).await,
            Some(Commands::Init(args)) => init::cmd(args),
            None => serve::cmd(serve::ServeArgs::default()).await,
        }
    }
}

impl ConfigArgs {
    /// Resolves the effective configuration: defaults, then the `--config`
    /// file if one was given, then `--database` and the given listen override.
    pub fn load(&self, listen: Option<SocketAddr>) -> anyhow::Result<Config> {
        let config = match &self.config {
            Some(path) => Config::read(path)?,
            None => Config::default(),
        };

        Ok(config.with_overrides(self.database.clone(), listen))
    }
}

/// Parses a `--listen` value such as `127.0.0.1:3000` or `:3000`.
pub fn parse_listen(value: &str) -> Result<SocketAddr, String> {
    let value = match value.strip_prefix(':') {
        Some(port) => format!("0.0.0.0:{}", port),
        None => value.to_string(),
    };
    value.parse().map_err(|e| format!("invalid listen address '{}': {}", value, e))
}
