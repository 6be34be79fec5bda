//! Certificate file reading and format detection
//!
//! Sniffs PEM, DER and PKCS#12 content so that adapters can tell a loose
//! certificate file from a keystore container.

use crate::utils::StoreAccessError;
use std::path::Path;
use x509_parser::prelude::*;

/// Detected content format of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedFormat {
    Pem,
    Der,
    Pkcs12,
}

impl std::fmt::Display for DetectedFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectedFormat::Pem => write!(f, "PEM"),
            DetectedFormat::Der => write!(f, "DER"),
            DetectedFormat::Pkcs12 => write!(f, "PKCS#12"),
        }
    }
}

/// Detect format from raw bytes
pub fn detect_format_from_bytes(data: &[u8]) -> Option<DetectedFormat> {
    if let Ok(text) = std::str::from_utf8(data) {
        if text.contains("-----BEGIN ") {
            return Some(DetectedFormat::Pem);
        }
    }

    // ASN.1 SEQUENCE wrapping the pkcs7-data OID
    if data.len() > 4 && data[0] == 0x30 && is_likely_pkcs12(data) {
        return Some(DetectedFormat::Pkcs12);
    }

    if X509Certificate::from_der(data).is_ok() {
        return Some(DetectedFormat::Der);
    }

    None
}

/// Heuristic to distinguish PKCS#12 from a plain DER certificate.
fn is_likely_pkcs12(data: &[u8]) -> bool {
    // 06 09 2a 86 48 86 f7 0d 01 07 01
    let pkcs7_data_oid: [u8; 11] = [
        0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x07, 0x01,
    ];
    let search_len = data.len().min(50);
    data[..search_len]
        .windows(pkcs7_data_oid.len())
        .any(|w| w == pkcs7_data_oid)
}

/// Read a whole file, mapping failures to a store access error
pub fn read_file(path: &Path) -> Result<Vec<u8>, StoreAccessError> {
    std::fs::read(path).map_err(|e| StoreAccessError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Extract DER certificates from PEM or DER file contents
///
/// DER input is returned as-is without validation; fingerprinting decides
/// whether it is a well-formed certificate.
pub fn read_certificates_from_bytes(
    data: &[u8],
    path: &Path,
) -> Result<Vec<Vec<u8>>, StoreAccessError> {
    match detect_format_from_bytes(data) {
        Some(DetectedFormat::Pem) => read_pem_certificates(data, path),
        Some(DetectedFormat::Pkcs12) => Err(StoreAccessError::UnsupportedFormat {
            path: path.display().to_string(),
            message: "PKCS#12 container where a certificate file was expected".to_string(),
        }),
        Some(DetectedFormat::Der) | None => Ok(vec![data.to_vec()]),
    }
}

/// Read all CERTIFICATE blocks from PEM data
fn read_pem_certificates(data: &[u8], path: &Path) -> Result<Vec<Vec<u8>>, StoreAccessError> {
    let pems = ::pem::parse_many(data).map_err(|e| StoreAccessError::Read {
        path: path.display().to_string(),
        message: format!("Failed to parse PEM: {}", e),
    })?;

    let certs: Vec<Vec<u8>> = pems
        .into_iter()
        .filter_map(|p| match p.tag() {
            "CERTIFICATE" => Some(p.into_contents()),
            "TRUSTED CERTIFICATE" => Some(strip_trust_data(p.into_contents())),
            _ => None,
        })
        .collect();

    if certs.is_empty() {
        return Err(StoreAccessError::Read {
            path: path.display().to_string(),
            message: "No CERTIFICATE blocks found in PEM file".to_string(),
        });
    }

    Ok(certs)
}

/// OpenSSL `TRUSTED CERTIFICATE` blocks append trust settings after the
/// certificate; keep only the certificate itself
fn strip_trust_data(mut contents: Vec<u8>) -> Vec<u8> {
    let cert_len = X509Certificate::from_der(&contents)
        .ok()
        .map(|(rest, _)| contents.len() - rest.len());
    if let Some(len) = cert_len {
        contents.truncate(len);
    }
    contents
}

/// Encode DER certificate bytes as a PEM CERTIFICATE block
pub fn encode_pem_certificate(der: &[u8]) -> String {
    ::pem::encode(&::pem::Pem::new("CERTIFICATE", der.to_vec()))
}
