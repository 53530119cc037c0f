//! Error types for plan validation and aggregation

use thiserror::Error;

/// Errors raised while validating inputs or aggregating series
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// An input parameter failed validation
    #[error("invalid input: {field}: {reason}")]
    InvalidInput {
        /// Name of the offending parameter
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

impl ProjectionError {
    pub(crate) fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
