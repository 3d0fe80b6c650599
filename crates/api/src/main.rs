use anyhow::Context;

use expenses_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("failed to load configuration")?;
    expenses_observability::init(config.log_format);

    expenses_api::server::run(config).await
}
