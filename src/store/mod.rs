//! Certificate store adapters
//!
//! The engine only sees stores through [`CertificateStore`]. Adapters:
//! - [`MemoryStore`]: in-memory map, used by tests and as a scratch store
//! - [`Pkcs12Store`]: a PKCS#12 keystore file (Java `cacerts` and friends)
//! - [`DirectoryStore`]: a directory of PEM/DER certificate files

pub mod alias_list;
pub mod directory;
pub mod memory;
pub mod pkcs12;
pub mod reader;

pub use alias_list::{parse_alias_list, read_alias_file};
pub use directory::DirectoryStore;
pub use memory::MemoryStore;
pub use pkcs12::Pkcs12Store;
pub use reader::DetectedFormat;

use crate::utils::{StoreAccessError, StoreError};
use std::path::Path;

/// Kind of record held under an alias
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A bare trusted certificate
    TrustedCertificate,
    /// A private key with its certificate chain
    PrivateKey,
}

/// Alias-addressed collection of certificates
pub trait CertificateStore {
    /// Human-readable name used in messages (usually the path)
    fn name(&self) -> &str;

    /// Every alias in the store, in no particular order
    fn aliases(&self) -> Vec<String>;

    /// Kind of the entry under `alias`, `None` if absent
    fn entry_kind(&self, alias: &str) -> Option<EntryKind>;

    /// DER bytes of the certificate under `alias`
    ///
    /// For private-key entries this is the leaf of the chain.
    fn certificate(&self, alias: &str) -> Option<Vec<u8>>;

    fn contains_alias(&self, alias: &str) -> bool {
        self.entry_kind(alias).is_some()
    }

    /// Store a trusted certificate under `alias`
    fn set_certificate(&mut self, alias: &str, der: Vec<u8>) -> Result<(), StoreError>;

    /// Write the store back to its underlying medium
    fn persist(&self) -> Result<(), StoreError>;
}

/// Open a store by path: directories become a [`DirectoryStore`], anything
/// else is read as PKCS#12
pub fn open_store(
    path: &Path,
    password: &str,
) -> Result<Box<dyn CertificateStore>, StoreAccessError> {
    if path.is_dir() {
        Ok(Box::new(DirectoryStore::open(path)?))
    } else {
        Ok(Box::new(Pkcs12Store::open(path, password)?))
    }
}

/// Open a store, creating an empty PKCS#12 keystore if `path` does not exist
pub fn open_or_create_store(
    path: &Path,
    password: &str,
) -> Result<Box<dyn CertificateStore>, StoreAccessError> {
    if path.exists() {
        open_store(path, password)
    } else {
        tracing::info!("{} does not exist, starting an empty keystore", path.display());
        Ok(Box::new(Pkcs12Store::create(path, password)))
    }
}
