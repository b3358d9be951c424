//! Bollinger Bands Breakout Strategy Main Entry Point

use anyhow::Result;
use bollinger_breakout::BollingerBreakoutStrategy;
use clap::Parser;
use strategy_shared::{run_strategy_service, ServiceArgs, ServiceSpec};

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServiceArgs::parse();

    run_strategy_service::<BollingerBreakoutStrategy>(
        ServiceSpec {
            service_name: "bollinger_breakout",
            config_env_var: "BOLLINGER_STRATEGY_CONFIG_PATH",
            default_config_path: "configs/bollinger_breakout.toml",
        },
        args,
    )
    .await?;

    Ok(())
}
