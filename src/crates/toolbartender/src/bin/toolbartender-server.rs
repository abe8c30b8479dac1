//! toolbartender server binary
//!
//! Standalone HTTP server for goal parsing and plan compilation.
//! Configuration comes from `toolbartender.toml` (or `TB_CONFIG`) with
//! `TB_*` environment overrides.

use anyhow::Context;
use toolbartender::ServerConfig;
use tooling::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load(None).context("failed to load server configuration")?;
    init_tracing(config.log_level())?;

    tracing::info!(level = %config.log_level(), "configuration loaded");
    toolbartender::serve(config).await?;
    Ok(())
}
