//! Indicator engine errors.
//!
//! Too little data is never an error here; indicators simply come back empty.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Invalid numeric format: {0}")]
    InvalidNumericFormat(String),

    #[error("Price bars out of order: bar {index} is not after its predecessor")]
    UnorderedBars { index: usize },
}

impl IndicatorError {
    pub fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
