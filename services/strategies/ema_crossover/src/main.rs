//! EMA Crossover Strategy Main Entry Point

use anyhow::Result;
use clap::Parser;
use ema_crossover::EmaCrossoverStrategy;
use strategy_shared::{run_strategy_service, ServiceArgs, ServiceSpec};

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServiceArgs::parse();

    run_strategy_service::<EmaCrossoverStrategy>(
        ServiceSpec {
            service_name: "ema_crossover",
            config_env_var: "EMA_CROSSOVER_CONFIG_PATH",
            default_config_path: "configs/ema_crossover.toml",
        },
        args,
    )
    .await?;

    Ok(())
}
