use super::{serve::open_store, ConfigArgs, CONFIG_FILE_NAME};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Also write the effective configuration to the configuration file
    #[arg(short, long)]
    pub write_config: bool,
}

pub fn cmd(args: InitArgs) -> anyhow::Result<()> {
    let config = args.config.load(None)?;
    open_store(&config)?;

    if args.write_config {
        let path = args.config.config.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        config.save(path)?;
    }

    Ok(())
}
