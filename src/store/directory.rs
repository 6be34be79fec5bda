//! Directory-of-certificates store
//!
//! Each `.pem`, `.crt`, `.cer` or `.der` file in the directory is one alias
//! (its file stem). A PEM bundle holding several certificates yields the
//! aliases `stem[0]`, `stem[1]`, and so on.
//!
//! Files are read in name order and the first file to claim an alias keeps
//! it. New certificates go to `<alias>.pem` and never replace a file that is
//! already there.

use super::reader;
use super::{CertificateStore, EntryKind};
use crate::utils::{StoreAccessError, StoreError};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

const CERT_EXTENSIONS: [&str; 4] = ["pem", "crt", "cer", "der"];

pub struct DirectoryStore {
    dir: PathBuf,
    name: String,
    certificates: BTreeMap<String, Vec<u8>>,
    files: BTreeSet<PathBuf>,
    pending: BTreeSet<String>,
}

impl DirectoryStore {
    /// Load every certificate file in `dir` (non-recursive)
    pub fn open(dir: &Path) -> Result<Self, StoreAccessError> {
        let read_dir = std::fs::read_dir(dir).map_err(|e| StoreAccessError::Open {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;

        let mut paths = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| StoreAccessError::Read {
                path: dir.display().to_string(),
                message: e.to_string(),
            })?;
            let path = entry.path();
            if path.is_file() && has_certificate_extension(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        let mut certificates = BTreeMap::new();
        for path in &paths {
            let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
                continue;
            };

            let data = reader::read_file(path)?;
            match reader::read_certificates_from_bytes(&data, path) {
                Ok(certs) if certs.len() == 1 => {
                    let der = certs.into_iter().next().unwrap_or_default();
                    claim(&mut certificates, stem, der, path);
                }
                Ok(certs) => {
                    for (i, der) in certs.into_iter().enumerate() {
                        claim(&mut certificates, format!("{}[{}]", stem, i), der, path);
                    }
                }
                Err(e) => {
                    // Keep the raw bytes so the snapshot reports the entry as unencodable
                    tracing::warn!("{}", e);
                    claim(&mut certificates, stem, data, path);
                }
            }
        }

        tracing::debug!("loaded {} certificates from {}", certificates.len(), dir.display());

        Ok(Self {
            dir: dir.to_path_buf(),
            name: dir.display().to_string(),
            certificates,
            files: paths.into_iter().collect(),
            pending: BTreeSet::new(),
        })
    }

    fn file_for(&self, alias: &str) -> PathBuf {
        self.dir.join(format!("{}.pem", alias))
    }
}

/// Insert unless an earlier file already claimed `alias`
fn claim(
    certificates: &mut BTreeMap<String, Vec<u8>>,
    alias: String,
    der: Vec<u8>,
    path: &Path,
) {
    match certificates.entry(alias) {
        Entry::Vacant(slot) => {
            slot.insert(der);
        }
        Entry::Occupied(slot) => {
            tracing::warn!(
                "{}: alias \"{}\" already loaded from another file, ignoring",
                path.display(),
                slot.key()
            );
        }
    }
}

fn has_certificate_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| CERT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn is_safe_file_stem(alias: &str) -> bool {
    !alias.is_empty()
        && alias != "."
        && alias != ".."
        && !alias.contains(['/', '\\', '\0'])
}

impl CertificateStore for DirectoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    fn aliases(&self) -> Vec<String> {
        self.certificates.keys().cloned().collect()
    }

    fn entry_kind(&self, alias: &str) -> Option<EntryKind> {
        self.certificates
            .contains_key(alias)
            .then_some(EntryKind::TrustedCertificate)
    }

    fn certificate(&self, alias: &str) -> Option<Vec<u8>> {
        self.certificates.get(alias).cloned()
    }

    fn set_certificate(&mut self, alias: &str, der: Vec<u8>) -> Result<(), StoreError> {
        if !is_safe_file_stem(alias) {
            return Err(StoreError::InvalidCertificate {
                alias: alias.to_string(),
                message: "alias cannot be used as a file name".to_string(),
            });
        }
        let target = self.file_for(alias);
        if self.files.contains(&target) || target.exists() {
            return Err(StoreError::InvalidCertificate {
                alias: alias.to_string(),
                message: format!("{} already exists", target.display()),
            });
        }
        self.certificates.insert(alias.to_string(), der);
        self.pending.insert(alias.to_string());
        Ok(())
    }

    fn persist(&self) -> Result<(), StoreError> {
        for alias in &self.pending {
            let Some(der) = self.certificates.get(alias) else {
                continue;
            };
            let path = self.file_for(alias);
            std::fs::write(&path, reader::encode_pem_certificate(der)).map_err(|e| {
                StoreError::Write {
                    path: path.display().to_string(),
                    message: e.to_string(),
                }
            })?;
        }
        tracing::info!("wrote {} certificates to {}", self.pending.len(), self.name);
        Ok(())
    }
}
