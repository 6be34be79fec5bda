//! Custom error types for keystore-toolkit
//!
//! Errors that end an invocation (a store that cannot be opened, a config
//! file that does not parse) live next to errors scoped to a single alias.
//! The per-alias kinds never bubble up through `ToolkitError`; the snapshot
//! builder and the merger turn them into report values instead.

use thiserror::Error;

/// Top-level error type for keystore-toolkit
#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("Store access error: {0}")]
    StoreAccess(#[from] StoreAccessError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Report generation error: {0}")]
    Report(#[from] ReportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A store could not be opened or decrypted; no snapshot can be built from it
#[derive(Error, Debug)]
pub enum StoreAccessError {
    #[error("Failed to open store {path}: {message}")]
    Open { path: String, message: String },

    #[error("Failed to decrypt store {path} (wrong password?): {message}")]
    Decrypt { path: String, message: String },

    #[error("Unsupported store format for {path}: {message}")]
    UnsupportedFormat { path: String, message: String },

    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },
}

/// One certificate could not be encoded for fingerprinting
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("certificate has no encoded bytes")]
    Empty,

    #[error("malformed certificate: {message}")]
    Malformed { message: String },

    #[error("{len} trailing bytes after certificate")]
    TrailingData { len: usize },
}

/// A store adapter refused a mutation or could not be written back
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Certificate for alias \"{alias}\" rejected: {message}")]
    InvalidCertificate { alias: String, message: String },

    #[error("Failed to write store {path}: {message}")]
    Write { path: String, message: String },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Report rendering errors
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to serialize report: {message}")]
    Serialize { message: String },
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::Serialize {
            message: err.to_string(),
        }
    }
}

/// Result type alias using ToolkitError
pub type Result<T> = std::result::Result<T, ToolkitError>;
