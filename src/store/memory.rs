//! In-memory certificate store

use super::{CertificateStore, EntryKind};
use crate::utils::StoreError;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
enum MemoryEntry {
    Certificate(Vec<u8>),
    PrivateKey { chain: Vec<Vec<u8>> },
}

/// Store backed by a map; `persist` is a no-op
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    name: String,
    entries: BTreeMap<String, MemoryEntry>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Builder-style insert of a trusted certificate
    pub fn with_certificate(mut self, alias: &str, der: impl Into<Vec<u8>>) -> Self {
        self.insert_certificate(alias, der);
        self
    }

    /// Insert or replace a trusted certificate
    pub fn insert_certificate(&mut self, alias: &str, der: impl Into<Vec<u8>>) {
        self.entries
            .insert(alias.to_string(), MemoryEntry::Certificate(der.into()));
    }

    /// Insert or replace a private-key entry holding `chain` (leaf first)
    pub fn insert_key_entry(&mut self, alias: &str, chain: Vec<Vec<u8>>) {
        self.entries
            .insert(alias.to_string(), MemoryEntry::PrivateKey { chain });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CertificateStore for MemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    fn aliases(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    fn entry_kind(&self, alias: &str) -> Option<EntryKind> {
        self.entries.get(alias).map(|entry| match entry {
            MemoryEntry::Certificate(_) => EntryKind::TrustedCertificate,
            MemoryEntry::PrivateKey { .. } => EntryKind::PrivateKey,
        })
    }

    fn certificate(&self, alias: &str) -> Option<Vec<u8>> {
        match self.entries.get(alias)? {
            MemoryEntry::Certificate(der) => Some(der.clone()),
            MemoryEntry::PrivateKey { chain } => chain.first().cloned(),
        }
    }

    fn set_certificate(&mut self, alias: &str, der: Vec<u8>) -> Result<(), StoreError> {
        self.insert_certificate(alias, der);
        Ok(())
    }

    fn persist(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_entry_exposes_leaf() {
        let mut store = MemoryStore::new("mem");
        store.insert_key_entry("server", vec![vec![1, 2], vec![3, 4]]);

        assert_eq!(store.entry_kind("server"), Some(EntryKind::PrivateKey));
        assert_eq!(store.certificate("server"), Some(vec![1, 2]));
        assert!(store.contains_alias("server"));
        assert!(!store.contains_alias("client"));
    }

    #[test]
    fn test_set_certificate() {
        let mut store = MemoryStore::new("mem");
        store.set_certificate("root", vec![9]).unwrap();
        assert_eq!(store.entry_kind("root"), Some(EntryKind::TrustedCertificate));
        assert_eq!(store.aliases(), vec!["root".to_string()]);
        assert!(store.persist().is_ok());
    }
}
