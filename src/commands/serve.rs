use super::{parse_listen, ConfigArgs};
use crate::db::{db::Db, tasks::Tasks};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_info, server};
use clap::Args;
use std::net::SocketAddr;

#[derive(Debug, Default, Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Address to listen on, e.g. 127.0.0.1:3000 or :3000 (overrides the configuration file)
    #[arg(short, long, value_parser = parse_listen)]
    pub listen: Option<SocketAddr>,
}

pub async fn cmd(args: ServeArgs) -> anyhow::Result<()> {
    let config = args.config.load(args.listen)?;
    let tasks = open_store(&config)?;

    server::serve(config.listen, tasks).await
}

/// Opens the database and prepares the schema. Failure here is fatal to the caller.
pub fn open_store(config: &Config) -> anyhow::Result<Tasks> {
    let db = Db::open(&config.database).map_err(|e| msg_error_anyhow!(Message::DbInitFailed(e.to_string())))?;
    let tasks = Tasks::init(db).map_err(|e| msg_error_anyhow!(Message::DbInitFailed(e.to_string())))?;
    msg_info!(Message::DbOpened(config.database.display().to_string()));
    msg_info!(Message::DbSchemaReady(tasks.count()?));

    Ok(tasks)
}
