//! Error types for the study planner.

use thiserror::Error;

/// Date parsing errors. Never fatal: the extractor downgrades them to warnings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("Unparseable date: {0:?}")]
    Unparseable(String),
}

/// Planner errors
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Provider not configured: {0}")]
    ProviderNotConfigured(String),

    #[error("Provider request failed: {0}")]
    ProviderRequestFailed(String),

    #[error("Provider authentication failed: {0}")]
    ProviderAuthFailed(String),

    #[error("Provider rate limit exceeded: {0}")]
    ProviderRateLimit(String),

    #[error("Provider model not found: {0}")]
    ProviderModelNotFound(String),

    #[error("Response does not match the requested schema: {0}")]
    SchemaMismatch(String),

    #[error("Batch for weeks {start_week}..{end} failed: {reason}", end = .start_week + .count.saturating_sub(1))]
    BatchFailed {
        start_week: u32,
        count: u32,
        reason: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlannerError {
    /// True for failures of the generation service itself (transport, auth,
    /// limits, non-conforming responses). These are fatal to the enclosing call.
    pub fn is_external_fault(&self) -> bool {
        match self {
            PlannerError::ProviderError(_)
            | PlannerError::ProviderNotConfigured(_)
            | PlannerError::ProviderRequestFailed(_)
            | PlannerError::ProviderAuthFailed(_)
            | PlannerError::ProviderRateLimit(_)
            | PlannerError::ProviderModelNotFound(_)
            | PlannerError::SchemaMismatch(_) => true,
            PlannerError::BatchFailed { .. } => true,
            _ => false,
        }
    }
}

impl From<config::ConfigError> for PlannerError {
    fn from(err: config::ConfigError) -> Self {
        PlannerError::ConfigError(err.to_string())
    }
}
