use anyhow::Context;
use vhub::domain::config::ApiConfig;
use vhub::kernel::config::load_config;
use vhub_logger::Logger;
use vhub_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig =
        load_config(Some("server")).context("Critical: Configuration is malformed")?;

    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &cfg.logging)?;

    Server::builder().config(cfg).build().await?.run().await
}
