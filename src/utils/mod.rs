//! Utility modules for keystore-toolkit
//!
//! This module contains the error types shared by the engine, the store
//! adapters and the command runner.

pub mod error;

pub use error::{
    ConfigError, EncodingError, ReportError, Result, StoreAccessError, StoreError, ToolkitError,
};
