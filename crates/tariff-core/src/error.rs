//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the tariff reasoner. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Input errors name the offending field and the rejected value.
//! - Collaborator errors name the rules engine or retriever that failed,
//!   so a report can say which data source was missing.
//! - Format errors for identifiers live in [`ValidationError`] and convert
//!   into [`TariffError`] via `?`.

use thiserror::Error;

/// Top-level error type for the tariff reasoner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TariffError {
    /// A declared value or rate is outside its permitted range.
    #[error("invalid input for {field}: {reason}")]
    InvalidInput {
        /// Name of the rejected input (e.g. `declared_value`).
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// A rules engine or policy retriever could not produce a quote.
    #[error("collaborator {collaborator} unavailable: {reason}")]
    CollaboratorUnavailable {
        /// Name of the collaborator that failed.
        collaborator: String,
        /// Failure detail.
        reason: String,
    },

    /// Identifier format validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl TariffError {
    /// Shorthand for [`TariffError::InvalidInput`].
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Shorthand for [`TariffError::CollaboratorUnavailable`].
    pub fn unavailable(collaborator: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CollaboratorUnavailable {
            collaborator: collaborator.into(),
            reason: reason.into(),
        }
    }
}

/// Identifier format errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// HTS code is not dot-separated digits with 4 to 10 digits in total.
    #[error("invalid HTS code: \"{0}\" (expected dot-separated digits, 4-10 digits total, e.g. 8542.31.0000)")]
    InvalidHtsCode(String),

    /// Country code is not a two-letter ISO 3166-1 alpha-2 code.
    #[error("invalid country code: \"{0}\" (expected ISO 3166-1 alpha-2, e.g. TW)")]
    InvalidCountryCode(String),
}
