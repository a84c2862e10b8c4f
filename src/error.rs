//! Error types for the directory and receipt workflow.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for directory and receipt operations.
#[derive(Debug, Error)]
pub enum FisError {
    #[error("Customer name is empty")]
    EmptyName,

    #[error("Customer already exists: {name}")]
    Duplicate { name: String },

    #[error("{field} must be a positive number, got {value}")]
    InvalidAmount { field: &'static str, value: f64 },

    #[error("Failed to write customer store {path}: {source}")]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode customer store: {0}")]
    StoreEncode(#[from] serde_json::Error),

    #[error("Failed to write receipt {path}: {source}")]
    ReceiptWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Print dispatch failed: {message}")]
    Print { message: String },
}

/// Policy class of an error, used by callers to decide how to surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Operator input problem: show a notice, keep running.
    Validation,
    /// Store or receipt file problem: log it, abort the current action.
    Persistence,
    /// Print dispatch problem: log only, the saved receipt stands.
    Print,
}

impl FisError {
    /// Get the policy class for this error.
    pub fn class(&self) -> ErrorClass {
        match self {
            FisError::EmptyName
            | FisError::Duplicate { .. }
            | FisError::InvalidAmount { .. } => ErrorClass::Validation,
            FisError::StoreWrite { .. }
            | FisError::StoreEncode(_)
            | FisError::ReceiptWrite { .. } => ErrorClass::Persistence,
            FisError::Print { .. } => ErrorClass::Print,
        }
    }
}

/// Result type alias for directory and receipt operations.
pub type Result<T> = std::result::Result<T, FisError>;
