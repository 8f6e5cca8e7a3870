use thiserror::Error;

use crate::config::ConfigError;
use crate::indicators::error::ValidationError;

/// Failure of a whole analysis pass.
///
/// Only input validation and configuration problems end a pass. Short history
/// and undefined values never do.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid price series: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
