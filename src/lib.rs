//! Keystore-Toolkit Library
//!
//! Compares certificate keystores and copies trusted certificates between
//! them:
//! - SHA-256 fingerprinting of stored certificates
//! - Snapshots of PKCS#12 keystores and certificate directories
//! - Four-way diff: identical, removed, added, changed
//! - Additive import that never overwrites an existing alias
//!
//! # Usage
//!
//! ```rust,ignore
//! use keystore_toolkit::cert_ops::{diff, StoreSnapshot};
//! use keystore_toolkit::models::TableSelector;
//! use keystore_toolkit::store::open_store;
//!
//! let old = StoreSnapshot::build(open_store("old.p12".as_ref(), "changeit")?.as_ref());
//! let new = StoreSnapshot::build(open_store("new.p12".as_ref(), "changeit")?.as_ref());
//! let result = diff(&old, &new, &[TableSelector::All]);
//! ```

pub mod cert_ops;
pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use cert_ops::{diff, fingerprint, merge, StoreSnapshot};
pub use cli::Cli;
pub use config::Settings;
pub use models::{Category, CertificateEntry, DiffResult, MergeOutcome, MergeReport};
pub use store::{CertificateStore, MemoryStore};
pub use utils::{Result, ToolkitError};
