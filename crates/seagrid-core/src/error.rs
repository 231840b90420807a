// File: crates/seagrid-core/src/error.rs
// Summary: Error types for grid configuration and colour parsing.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Bounds or step cannot produce a grid. Nothing was generated.
    #[error("invalid grid configuration: {0}")]
    InvalidConfiguration(String),
    /// A layer with a line limit refused a grid that would exceed it.
    #[error("grid would draw {lines} lines, layer limit is {limit}")]
    TooManyLines { lines: usize, limit: usize },
}

impl GridError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        GridError::InvalidConfiguration(reason.into())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("colour must start with '#': {0:?}")]
    MissingHash(String),
    #[error("colour must have 6 or 8 hex digits: {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in colour {0:?}")]
    BadDigit(String),
}

/// Why a vessel record was left out of the normalized set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("record is not a JSON object")]
    NotAnObject,
    #[error("record has no MMSI")]
    MissingMmsi,
    #[error("vessel {0} has no position")]
    MissingPosition(String),
    #[error("vessel {0} reports no fix (zero latitude or longitude)")]
    NoFix(String),
}
