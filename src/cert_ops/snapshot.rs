//! Store snapshots
//!
//! A snapshot walks a store once and keeps, per alias, the fingerprint and
//! descriptive fields of its certificate. It owns its data outright, so the
//! store may be dropped or mutated afterwards.

use super::fingerprint::{digest, parse_certificate};
use crate::models::CertificateEntry;
use crate::store::{CertificateStore, EntryKind};
use crate::utils::EncodingError;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;
use std::fmt;
use x509_parser::prelude::*;

/// Why an alias did not make it into a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The entry holds a private key, not a bare trusted certificate
    NotACertificate,
    /// The store lists the alias but holds an entry kind it cannot read
    UnsupportedEntry,
    /// The certificate could not be decoded
    Encoding(EncodingError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotACertificate => write!(f, "not a trusted certificate entry"),
            SkipReason::UnsupportedEntry => write!(f, "unsupported entry type"),
            SkipReason::Encoding(e) => write!(f, "{}", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub alias: String,
    pub reason: SkipReason,
}

/// Immutable alias → certificate mapping captured from one store
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    name: String,
    entries: HashMap<String, CertificateEntry>,
    skipped: Vec<SkippedEntry>,
}

impl StoreSnapshot {
    /// Walk every alias of `store` once
    ///
    /// Never fails: entries that cannot take part in a comparison are
    /// listed in [`StoreSnapshot::skipped`] instead.
    pub fn build(store: &dyn CertificateStore) -> Self {
        let mut entries = HashMap::new();
        let mut skipped = Vec::new();

        for alias in store.aliases() {
            match read_entry(store, &alias) {
                Ok(entry) => {
                    entries.insert(alias, entry);
                }
                Err(reason) => {
                    tracing::warn!("skipping \"{}\" in {}: {}", alias, store.name(), reason);
                    skipped.push(SkippedEntry { alias, reason });
                }
            }
        }

        skipped.sort_by(|a, b| a.alias.cmp(&b.alias));
        tracing::debug!(
            "snapshot of {}: {} entries, {} skipped",
            store.name(),
            entries.len(),
            skipped.len()
        );

        Self {
            name: store.name().to_string(),
            entries,
            skipped,
        }
    }

    /// Assemble a snapshot from ready-made entries
    pub fn from_entries(
        name: impl Into<String>,
        entries: impl IntoIterator<Item = CertificateEntry>,
    ) -> Self {
        Self {
            name: name.into(),
            entries: entries
                .into_iter()
                .map(|entry| (entry.alias.clone(), entry))
                .collect(),
            skipped: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, alias: &str) -> Option<&CertificateEntry> {
        self.entries.get(alias)
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.entries.contains_key(alias)
    }

    /// Entries in no particular order
    pub fn entries(&self) -> impl Iterator<Item = &CertificateEntry> {
        self.entries.values()
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aliases left out of the snapshot, sorted by alias
    pub fn skipped(&self) -> &[SkippedEntry] {
        &self.skipped
    }
}

fn read_entry(store: &dyn CertificateStore, alias: &str) -> Result<CertificateEntry, SkipReason> {
    match store.entry_kind(alias) {
        Some(EntryKind::TrustedCertificate) => {}
        Some(EntryKind::PrivateKey) => return Err(SkipReason::NotACertificate),
        None => return Err(SkipReason::UnsupportedEntry),
    }

    let der = store
        .certificate(alias)
        .ok_or(SkipReason::Encoding(EncodingError::Empty))?;

    certificate_entry(alias, &der).map_err(SkipReason::Encoding)
}

/// Build the snapshot entry for one DER certificate
pub fn certificate_entry(alias: &str, der: &[u8]) -> Result<CertificateEntry, EncodingError> {
    let cert = parse_certificate(der)?;

    let common_name = cert
        .subject()
        .iter_common_name()
        .next()
        .and_then(|cn| cn.as_str().ok())
        .unwrap_or_default()
        .to_string();

    Ok(CertificateEntry {
        alias: alias.to_string(),
        fingerprint: digest(der),
        common_name,
        not_before: asn1_time_to_datetime(cert.validity().not_before)?,
        not_after: asn1_time_to_datetime(cert.validity().not_after)?,
    })
}

fn asn1_time_to_datetime(time: ASN1Time) -> Result<DateTime<Utc>, EncodingError> {
    Utc.timestamp_opt(time.timestamp(), 0)
        .single()
        .ok_or_else(|| EncodingError::Malformed {
            message: "Invalid timestamp in certificate".to_string(),
        })
}
