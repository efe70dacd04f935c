//! Custom error types for FinanceHub
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for FinanceHub operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// A calculation was asked to work on inputs outside its domain
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Stored data contradicts itself (unknown payer, zero budget, ...)
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FinanceError {
    /// Create a "not found" error for an entity type
    pub fn not_found(entity_type: &'static str, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for groups
    pub fn group_not_found(identifier: impl Into<String>) -> Self {
        Self::not_found("Group", identifier)
    }

    /// Create a "not found" error for budgets
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::not_found("Budget", identifier)
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an invalid-input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if this is a data-integrity error
    pub fn is_data_integrity(&self) -> bool {
        matches!(self, Self::DataIntegrity(_))
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for FinanceHub operations
pub type FinanceResult<T> = Result<T, FinanceError>;
