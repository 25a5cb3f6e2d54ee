//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Mount prefix segments must be literal, non-empty path segments
//! - Listener names must be usable inside a token
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: CodecConfig → Result<(), Vec<ValidationError>>

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::CodecConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("mount prefix must have at least one segment")]
    EmptyMountPrefix,

    #[error("mount prefix segment {index} is invalid: '{segment}'")]
    InvalidMountSegment { index: usize, segment: String },

    #[error("listener interface name must not be empty")]
    EmptyListenerName,

    #[error("listener interface '{0}' contains '.' or '-'")]
    InvalidListenerName(String),

    #[error("listener interface '{0}' is listed twice")]
    DuplicateListener(String),

    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &CodecConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.mount.prefix.is_empty() {
        errors.push(ValidationError::EmptyMountPrefix);
    }
    for (index, segment) in config.mount.prefix.iter().enumerate() {
        if let Err(e) = validate_mount_segment(index, segment) {
            errors.push(e);
        }
    }

    let mut seen = HashSet::new();
    for name in &config.listeners.interfaces {
        if name.is_empty() {
            errors.push(ValidationError::EmptyListenerName);
        } else if name.contains(['.', '-', '&', '=', '#']) {
            errors.push(ValidationError::InvalidListenerName(name.clone()));
        } else if !seen.insert(name.as_str()) {
            errors.push(ValidationError::DuplicateListener(name.clone()));
        }
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A mount segment must be a non-empty literal that survives `Url::parse`.
pub fn validate_mount_segment(index: usize, segment: &str) -> Result<(), ValidationError> {
    if segment.is_empty() || segment.contains(['/', '?', '&', '#']) {
        return Err(ValidationError::InvalidMountSegment {
            index,
            segment: segment.to_string(),
        });
    }
    Ok(())
}
