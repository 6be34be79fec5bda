//! Data models for keystore-toolkit
//!
//! Value types produced by the engine: snapshot entries, diff results and
//! import reports. None of them refer back to the store they came from.

pub mod certificate;
pub mod diff_result;
pub mod merge_report;

pub use certificate::{CertificateEntry, Fingerprint};
pub use diff_result::{Category, DiffResult, TableSelector};
pub use merge_report::{MergeItem, MergeOutcome, MergeReport};
