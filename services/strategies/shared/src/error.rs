//! Error taxonomy shared by all strategies

use thiserror::Error;

/// Failures reported by the external position/order service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManagerError {
    #[error("Position query failed for {pair}: {message}")]
    PositionQuery { pair: String, message: String },

    #[error("Size query failed for {pair}: {message}")]
    SizingQuery { pair: String, message: String },

    #[error("Order rejected: {reason}")]
    OrderRejected { reason: String },

    #[error("Service unavailable: {message}")]
    Unavailable { message: String },
}

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Failed to decode params: {0}")]
    ParamDecode(#[from] serde_json::Error),

    /// Service errors pass through untouched
    #[error(transparent)]
    Service(#[from] ManagerError),
}

impl StrategyError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid pair '{input}': expected BASE/QUOTE")]
pub struct PairParseError {
    pub input: String,
}

pub type Result<T> = std::result::Result<T, StrategyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_is_transparent() {
        let inner = ManagerError::OrderRejected {
            reason: "insufficient funds".to_string(),
        };
        let err = StrategyError::from(inner.clone());

        assert_eq!(err.to_string(), inner.to_string());
        assert!(matches!(err, StrategyError::Service(ManagerError::OrderRejected { .. })));
    }

    #[test]
    fn test_configuration_error_formatting() {
        let err = StrategyError::configuration("window_size must be positive");
        assert_eq!(
            err.to_string(),
            "Configuration error: window_size must be positive"
        );
    }
}
