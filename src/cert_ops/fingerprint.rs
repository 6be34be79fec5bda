//! Certificate fingerprinting
//!
//! A fingerprint is the lower-case hex SHA-256 of the certificate exactly as
//! the store encodes it (DER). Nothing is re-encoded before hashing.

use crate::models::Fingerprint;
use crate::utils::EncodingError;
use sha2::{Digest, Sha256};
use x509_parser::prelude::*;

/// Fingerprint one DER-encoded certificate
///
/// Fails if the bytes are not exactly one well-formed X.509 certificate.
pub fn fingerprint(der: &[u8]) -> Result<Fingerprint, EncodingError> {
    parse_certificate(der)?;
    Ok(digest(der))
}

/// SHA-256 of raw bytes, hex-encoded; no structural checks
pub fn digest(bytes: &[u8]) -> Fingerprint {
    Fingerprint::from_hex(hex::encode(Sha256::digest(bytes)))
}

/// Decode `der`, insisting on a single complete certificate
pub(crate) fn parse_certificate(der: &[u8]) -> Result<X509Certificate<'_>, EncodingError> {
    if der.is_empty() {
        return Err(EncodingError::Empty);
    }

    let (rest, cert) = X509Certificate::from_der(der).map_err(|e| EncodingError::Malformed {
        message: e.to_string(),
    })?;

    if !rest.is_empty() {
        return Err(EncodingError::TrailingData { len: rest.len() });
    }

    Ok(cert)
}
