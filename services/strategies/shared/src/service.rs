//! Service entry point shared by the strategy binaries

use crate::config::{load_config, resolve_config_path, ServiceConfig};
use crate::logging::init_strategy_logging;
use crate::paper::PaperStrategyManager;
use crate::runner::{run_feed, FeedSource, ReplaySummary};
use crate::traits::Strategy;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct ServiceArgs {
    /// Path to configuration file (overrides the config path env var)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON-lines feed to replay; stdin when neither this nor [feed].path is set
    #[arg(short, long)]
    pub feed: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Enable JSON logging format
    #[arg(long)]
    pub json_logs: bool,
}

/// Where a strategy binary looks for its configuration
pub struct ServiceSpec {
    pub service_name: &'static str,
    pub config_env_var: &'static str,
    pub default_config_path: &'static str,
}

/// Load config, initialise logging, build `S` and replay the feed into it
/// against a paper account.
pub async fn run_strategy_service<S: Strategy>(
    spec: ServiceSpec,
    args: ServiceArgs,
) -> Result<Option<ReplaySummary>> {
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| resolve_config_path(spec.config_env_var, spec.default_config_path));
    let config: ServiceConfig = load_config(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;

    let log_level = args
        .log_level
        .clone()
        .or_else(|| config.strategy.log_level.clone())
        .unwrap_or_else(|| "info".to_string());
    init_strategy_logging(spec.service_name, &log_level, args.json_logs)?;

    info!(
        "Configuration loaded from {}: strategy {}",
        config_path.display(),
        config.strategy.name
    );
    if !config.strategy.enabled {
        info!("Strategy {} is disabled, exiting", config.strategy.name);
        return Ok(None);
    }

    let mut strategy = S::initialize(&config.strategy.params)
        .with_context(|| format!("Failed to initialise {}", spec.service_name))?;
    let mut manager = PaperStrategyManager::new(config.paper.clone());

    let source = FeedSource::from(args.feed.or(config.feed.path));
    let summary = run_feed(&mut strategy, &mut manager, source).await?;

    info!(
        "Replay finished: {} candles, {} trades, {} failed, {} malformed, {} orders",
        summary.candles,
        summary.trades,
        summary.failed_events,
        summary.malformed_lines,
        summary.metrics.orders_submitted
    );
    info!(
        "Paper account: quote={} base={} fills={}",
        manager.quote_balance(),
        manager.base_balance(),
        manager.fills().len()
    );

    Ok(Some(summary))
}
