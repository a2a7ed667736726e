//! Error types
//!
//! Nothing here is fatal: configuration errors are surfaced when settings are
//! loaded, behavior errors are logged and the offending call becomes a no-op.

use thiserror::Error;

/// Invalid or unreadable tuning data
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_durability must be positive, got {0}")]
    NonPositiveDurability(f32),
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("success_threshold must be positive, got {0}")]
    NonPositiveThreshold(f32),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
}

/// A behavior could not run because a required reference is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BehaviorError {
    #[error("shield anchor not assigned, cannot activate shield")]
    MissingAnchor,
}

/// Reject negative values for a named field
pub(crate) fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value < 0.0 || value.is_nan() {
        Err(ConfigError::Negative { field, value })
    } else {
        Ok(())
    }
}
