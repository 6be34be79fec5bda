//! Certificate entry types

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Lower-case hex SHA-256 digest of a certificate's DER encoding
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Wrap an already hex-encoded digest
    pub(crate) fn from_hex(hex: String) -> Self {
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One trust-store record as captured in a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateEntry {
    /// Key of the entry within its store
    pub alias: String,
    /// Content identity used for comparison
    pub fingerprint: Fingerprint,
    /// First CN component of the subject, empty when there is none
    pub common_name: String,
    /// Start of the validity period (informational only)
    pub not_before: DateTime<Utc>,
    /// End of the validity period (informational only)
    pub not_after: DateTime<Utc>,
}

impl CertificateEntry {
    /// Whether two entries carry byte-identical certificates
    pub fn same_content(&self, other: &CertificateEntry) -> bool {
        self.fingerprint == other.fingerprint
    }
}
