//! Strategy configuration utilities

use crate::error::{Result, StrategyError};
use crate::paper::PaperConfig;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Undecoded strategy parameters, as found under `[strategy.params]`
pub type RawParams = serde_json::Map<String, serde_json::Value>;

/// Typed strategy parameters
pub trait StrategyParams: DeserializeOwned {
    /// Validate configuration
    fn validate(&self) -> Result<()>;
}

/// Decode a raw parameter map into typed params and validate them
pub fn decode_params<P: StrategyParams>(raw: &RawParams) -> Result<P> {
    let params: P = serde_json::from_value(serde_json::Value::Object(raw.clone()))?;
    params.validate()?;
    Ok(params)
}

/// Largest window or period a strategy may be configured with
pub const MAX_PERIOD: usize = 100_000;

/// Reject zero-length and oversized windows and periods
pub fn require_period(field: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(StrategyError::configuration(format!(
            "{field} must be positive"
        )));
    }
    if value > MAX_PERIOD {
        return Err(StrategyError::configuration(format!(
            "{field} must not exceed {MAX_PERIOD}, got {value}"
        )));
    }
    Ok(())
}

/// Load configuration from TOML file
pub fn load_config<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Pick the config path from `env_var`, falling back to `default_path`
pub fn resolve_config_path(env_var: &str, default_path: &str) -> PathBuf {
    match std::env::var(env_var) {
        Ok(path) if !path.trim().is_empty() => {
            debug!("Using config path from {}: {}", env_var, path);
            PathBuf::from(path)
        }
        _ => PathBuf::from(default_path),
    }
}

/// Common strategy configuration fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseStrategyConfig {
    pub name: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub log_level: Option<String>,
    #[serde(default)]
    pub params: RawParams,
}

fn default_enabled() -> bool {
    true
}

impl Default for BaseStrategyConfig {
    fn default() -> Self {
        Self {
            name: "unnamed_strategy".to_string(),
            enabled: true,
            log_level: Some("info".to_string()),
            params: RawParams::new(),
        }
    }
}

/// Where the candle/trade feed is read from; stdin when no path is set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedConfig {
    pub path: Option<PathBuf>,
}

/// Full service configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub strategy: BaseStrategyConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub paper: PaperConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[derive(Debug, Deserialize)]
    struct WindowParams {
        window_size: usize,
    }

    impl StrategyParams for WindowParams {
        fn validate(&self) -> Result<()> {
            require_period("window_size", self.window_size)
        }
    }

    fn raw(json: serde_json::Value) -> RawParams {
        json.as_object().cloned().unwrap()
    }

    #[test]
    fn test_decode_params() {
        let params: WindowParams = decode_params(&raw(serde_json::json!({"window_size": 20}))).unwrap();
        assert_eq!(params.window_size, 20);
    }

    #[test]
    fn test_decode_failure_is_descriptive() {
        let err = decode_params::<WindowParams>(&raw(serde_json::json!({"window_size": "twenty"})))
            .unwrap_err();
        assert!(matches!(err, StrategyError::ParamDecode(_)));
        assert!(err.to_string().starts_with("Failed to decode params"));

        let err = decode_params::<WindowParams>(&RawParams::new()).unwrap_err();
        assert!(err.to_string().contains("window_size"));
    }

    #[test]
    fn test_validation_failure() {
        let err = decode_params::<WindowParams>(&raw(serde_json::json!({"window_size": 0})))
            .unwrap_err();
        assert!(matches!(err, StrategyError::Configuration { .. }));
    }

    #[test]
    fn test_period_bounds() {
        assert!(require_period("window_size", 1).is_ok());
        assert!(require_period("window_size", MAX_PERIOD).is_ok());

        let err = require_period("window_size", MAX_PERIOD + 1).unwrap_err();
        assert!(matches!(err, StrategyError::Configuration { .. }));
        assert!(err.to_string().contains("must not exceed"));
    }

    #[test]
    fn test_load_service_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[strategy]
name = "bollinger_breakout"
log_level = "debug"

[strategy.params]
window_size = 20
stddev = 2.0
pair = "BTC/USD"

[feed]
path = "data/candles.jsonl"

[paper]
quote_balance = "2500"
"#
        )
        .unwrap();

        let config: ServiceConfig = load_config(file.path()).unwrap();
        assert_eq!(config.strategy.name, "bollinger_breakout");
        assert!(config.strategy.enabled);
        assert_eq!(config.strategy.params["window_size"], 20);
        assert_eq!(config.strategy.params["pair"], "BTC/USD");
        assert_eq!(config.feed.path, Some(PathBuf::from("data/candles.jsonl")));
        assert_eq!(config.paper.quote_balance, dec!(2500));
        assert_eq!(config.paper.base_balance, dec!(0));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result: anyhow::Result<ServiceConfig> = load_config("/nonexistent/strategy.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_config_path_default() {
        let path = resolve_config_path(
            "STRATEGY_SHARED_TEST_UNSET_CONFIG_PATH",
            "configs/default.toml",
        );
        assert_eq!(path, PathBuf::from("configs/default.toml"));
    }
}
