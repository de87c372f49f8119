//! Error types for pricing, fetching and configuration

use std::path::PathBuf;
use thiserror::Error;

/// Invalid input to the pure pricing functions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PriceError {
    /// NaN or infinite input where a number is required.
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    /// Exchange rate that is not finite and positive.
    #[error("exchange rate must be finite and positive, got {0}")]
    InvalidRate(f64),
}

impl PriceError {
    /// Fail with [`PriceError::NotFinite`] unless `value` is finite.
    pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<f64, PriceError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(PriceError::NotFinite { field, value })
        }
    }
}

/// Failure while retrieving products or cart entries.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure, including timeouts.
    #[cfg(feature = "fetch")]
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// No product with the requested id.
    #[error("product {id} not found")]
    NotFound { id: u64 },

    /// The response body did not have the expected shape.
    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl FetchError {
    /// Whether this error means the requested record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }
}

/// Configuration could not be loaded or is invalid.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
