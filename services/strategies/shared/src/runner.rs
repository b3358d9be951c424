//! JSON-lines feed replay
//!
//! Drives a [`Strategy`] from a stream of [`FeedEvent`] lines, one event at a time.
//! The strategy itself stays synchronous; only reading the feed and waiting for
//! Ctrl-C happen on the async runtime.

use crate::traits::{Strategy, StrategyManager, StrategyMetrics};
use crate::types::FeedEvent;
use anyhow::{Context, Result};
use std::future::Future;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub enum FeedSource {
    Stdin,
    File(PathBuf),
}

impl From<Option<PathBuf>> for FeedSource {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(FeedSource::Stdin, FeedSource::File)
    }
}

/// Outcome of a feed replay
#[derive(Debug, Clone, Default)]
pub struct ReplaySummary {
    pub candles: u64,
    pub trades: u64,
    /// Events whose handler returned an error
    pub failed_events: u64,
    /// Lines that did not parse as a feed event
    pub malformed_lines: u64,
    /// Stopped by a shutdown signal before the end of the feed
    pub interrupted: bool,
    pub metrics: StrategyMetrics,
}

/// Replay `source` into `strategy` until EOF or Ctrl-C
pub async fn run_feed(
    strategy: &mut dyn Strategy,
    manager: &mut dyn StrategyManager,
    source: FeedSource,
) -> Result<ReplaySummary> {
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    };

    match source {
        FeedSource::Stdin => {
            info!("Reading feed from stdin");
            run_reader(strategy, manager, BufReader::new(tokio::io::stdin()), shutdown).await
        }
        FeedSource::File(path) => {
            info!("Reading feed from {}", path.display());
            let file = tokio::fs::File::open(&path)
                .await
                .with_context(|| format!("Failed to open feed {}", path.display()))?;
            run_reader(strategy, manager, BufReader::new(file), shutdown).await
        }
    }
}

/// Replay lines from `reader` until EOF or until `shutdown` resolves.
///
/// A failing event is logged and counted, then the replay continues with the next
/// one. `on_start` and `on_stop` errors abort the replay.
pub async fn run_reader<R, F>(
    strategy: &mut dyn Strategy,
    manager: &mut dyn StrategyManager,
    reader: R,
    shutdown: F,
) -> Result<ReplaySummary>
where
    R: AsyncBufRead + Unpin,
    F: Future<Output = ()>,
{
    let mut summary = ReplaySummary::default();
    let mut lines = reader.lines();
    tokio::pin!(shutdown);

    strategy
        .on_start()
        .with_context(|| format!("{} failed to start", strategy.name()))?;

    loop {
        let line = tokio::select! {
            biased;
            _ = &mut shutdown => {
                info!("Shutdown requested, stopping feed replay");
                summary.interrupted = true;
                break;
            }
            line = lines.next_line() => line.context("Failed to read feed")?,
        };

        let Some(line) = line else {
            debug!("Feed exhausted");
            break;
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let event: FeedEvent = match serde_json::from_str(line) {
            Ok(event) => event,
            Err(e) => {
                warn!("Skipping malformed feed line: {}", e);
                summary.malformed_lines += 1;
                continue;
            }
        };

        let outcome = match &event {
            FeedEvent::Candle(candle) => {
                summary.candles += 1;
                strategy.on_candle(manager, candle)
            }
            FeedEvent::Trade(trade) => {
                summary.trades += 1;
                strategy.on_trade(manager, trade)
            }
        };

        if let Err(e) = outcome {
            warn!("Error processing feed event: {}", e);
            summary.failed_events += 1;
        }
    }

    strategy
        .on_stop()
        .with_context(|| format!("{} failed to stop", strategy.name()))?;
    summary.metrics = strategy.metrics();

    Ok(summary)
}
