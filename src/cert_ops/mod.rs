//! Keystore comparison and import engine
//!
//! - [`fingerprint`]: SHA-256 content identity of one certificate
//! - [`StoreSnapshot`]: alias → entry mapping captured from a store
//! - [`diff`]: four-way classification of two snapshots
//! - [`merge`]: additive, conflict-avoiding import between stores

pub mod diff;
pub mod fingerprint;
pub mod merge;
pub mod runner;
pub mod snapshot;

pub use diff::diff;
pub use fingerprint::{digest, fingerprint};
pub use merge::merge;
pub use snapshot::{certificate_entry, SkipReason, SkippedEntry, StoreSnapshot};
