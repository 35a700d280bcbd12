//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business/domain failures (validation,
/// lifecycle rules, missing records). Infrastructure failures pass through as
/// the opaque `Storage` variant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed or missing required input (bad identity code, field-length
    /// overflow, past start time, ...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The operation is well-formed but forbidden by lifecycle state
    /// (e.g. deleting an event that has already started).
    #[error("business rule violated: {0}")]
    BusinessRule(String),

    /// A referenced event or registration does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// An identifier failed to parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Opaque storage failure; not part of the domain taxonomy and surfaced
    /// as-is for generic handling at the transport layer.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn business_rule(msg: impl Into<String>) -> Self {
        Self::BusinessRule(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
