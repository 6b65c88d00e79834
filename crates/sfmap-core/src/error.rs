use thiserror::Error;

/// Errors raised by the extraction pipeline.
///
/// Everything below the document root degrades to empty results or omitted
/// fields, so the only hard failure is a missing document.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
