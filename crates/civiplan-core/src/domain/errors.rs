//! Domain error types
//!
//! This module defines error types specific to domain operations,
//! including validation failures and invalid calendar ranges.

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A date range whose end precedes its start
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange {
        /// The start date as written
        start: String,
        /// The end date as written
        end: String,
    },

    /// Unknown project status label
    #[error("Unknown project status: {0}")]
    UnknownStatus(String),

    /// Unknown resource type label
    #[error("Unknown resource type: {0}")]
    UnknownResourceType(String),

    /// Generic validation failure
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}
