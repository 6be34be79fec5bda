//! PKCS#12 keystore adapter
//!
//! Reads and writes keystores with `p12-keystore`. Private-key entries are
//! kept intact on write-back; the adapter itself only ever adds trusted
//! certificate entries.

use super::reader::{self, DetectedFormat};
use super::{CertificateStore, EntryKind};
use crate::utils::{StoreAccessError, StoreError};
use p12_keystore::{Certificate, KeyStore, KeyStoreEntry};
use std::path::{Path, PathBuf};

/// A PKCS#12 keystore loaded from (and persisted to) a file
pub struct Pkcs12Store {
    path: PathBuf,
    name: String,
    password: String,
    keystore: KeyStore,
}

impl Pkcs12Store {
    /// Open and decrypt an existing keystore
    pub fn open(path: &Path, password: &str) -> Result<Self, StoreAccessError> {
        let data = std::fs::read(path).map_err(|e| StoreAccessError::Open {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        match reader::detect_format_from_bytes(&data) {
            Some(DetectedFormat::Pem) | Some(DetectedFormat::Der) => {
                return Err(StoreAccessError::UnsupportedFormat {
                    path: path.display().to_string(),
                    message: "file holds a single certificate, not a keystore".to_string(),
                });
            }
            _ => {}
        }

        let keystore =
            KeyStore::from_pkcs12(&data, password).map_err(|e| StoreAccessError::Decrypt {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!("opened {} with {} aliases", path.display(), keystore.entries().count());

        Ok(Self::with_keystore(path, password, keystore))
    }

    /// Start an empty keystore that will be written to `path`
    pub fn create(path: &Path, password: &str) -> Self {
        Self::with_keystore(path, password, KeyStore::new())
    }

    fn with_keystore(path: &Path, password: &str, keystore: KeyStore) -> Self {
        Self {
            path: path.to_path_buf(),
            name: path.display().to_string(),
            password: password.to_string(),
            keystore,
        }
    }

    fn find(&self, alias: &str) -> Option<&KeyStoreEntry> {
        self.keystore
            .entries()
            .find(|(name, _)| {
                let name: &str = name;
                name == alias
            })
            .map(|(_, entry)| entry)
    }
}

impl CertificateStore for Pkcs12Store {
    fn name(&self) -> &str {
        &self.name
    }

    fn aliases(&self) -> Vec<String> {
        self.keystore
            .entries()
            .map(|(alias, _)| alias.to_string())
            .collect()
    }

    fn entry_kind(&self, alias: &str) -> Option<EntryKind> {
        self.find(alias).and_then(|entry| match entry {
            KeyStoreEntry::Certificate(_) => Some(EntryKind::TrustedCertificate),
            KeyStoreEntry::PrivateKeyChain(_) => Some(EntryKind::PrivateKey),
            KeyStoreEntry::Secret(_) => None,
        })
    }

    fn certificate(&self, alias: &str) -> Option<Vec<u8>> {
        self.find(alias).and_then(|entry| match entry {
            KeyStoreEntry::Certificate(cert) => Some(cert.as_der().to_vec()),
            KeyStoreEntry::PrivateKeyChain(chain) => {
                chain.chain().first().map(|cert| cert.as_der().to_vec())
            }
            KeyStoreEntry::Secret(_) => None,
        })
    }

    fn set_certificate(&mut self, alias: &str, der: Vec<u8>) -> Result<(), StoreError> {
        let cert = Certificate::from_der(&der).map_err(|e| StoreError::InvalidCertificate {
            alias: alias.to_string(),
            message: e.to_string(),
        })?;
        self.keystore.add_entry(alias, KeyStoreEntry::Certificate(cert));
        Ok(())
    }

    fn persist(&self) -> Result<(), StoreError> {
        let data = self
            .keystore
            .writer(&self.password)
            .write()
            .map_err(|e| StoreError::Write {
                path: self.name.clone(),
                message: format!("Failed to serialize PKCS#12: {}", e),
            })?;

        std::fs::write(&self.path, data).map_err(|e| StoreError::Write {
            path: self.name.clone(),
            message: e.to_string(),
        })?;

        tracing::info!("saved keystore {}", self.name);
        Ok(())
    }
}
