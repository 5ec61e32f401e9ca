use anyhow::Result;
use tracing_subscriber::EnvFilter;

use mtpoll::collector::snapshot::collect_full;
use mtpoll::collector::MtSnmp;
use mtpoll::config::AppConfig;
use mtpoll::formatter::JsonFormatter;
use mtpoll::snmp::create_v2c_client;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load()?;
    let target = config.target();

    tracing::info!(%target, "опрашиваем устройство");

    let client = create_v2c_client(&target, &config.community(), config.timeout()).await?;
    let mut mt = MtSnmp::new(client);

    let snapshot = collect_full(&mut mt).await;
    if !snapshot.errors.is_empty() {
        tracing::warn!(failed = snapshot.errors.len(), "часть таблиц не собралась");
    }

    println!("{}", JsonFormatter::to_json_string(&target, snapshot)?);

    Ok(())
}
