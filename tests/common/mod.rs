#![allow(dead_code)]

use keystore_toolkit::store::{CertificateStore, Pkcs12Store};
use std::path::{Path, PathBuf};

pub const PASSWORD: &str = "changeit";

pub const ALPHA_SHA256: &str = "19003e0c8ded7d2a1b198687bc715cc5f14d1fb4092fd95d5f5d5e41b6f62910";
pub const ALPHA_RENEWED_SHA256: &str =
    "0b9c51415d4bb9552050eb00df743497705a3ff4f432816ff0cec7c8312d925c";
pub const BETA_SHA256: &str = "68d0215dd550a7373765be48d5823de15d58cac0237f69a77fe2f2b593b7c96d";

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// DER bytes of `tests/fixtures/<name>.der`
pub fn der(name: &str) -> Vec<u8> {
    std::fs::read(fixtures_dir().join(format!("{}.der", name))).expect("fixture exists")
}

/// Write a PKCS#12 truststore holding `(alias, fixture)` certificate entries
pub fn write_truststore(path: &Path, entries: &[(&str, &str)]) {
    let mut store = Pkcs12Store::create(path, PASSWORD);
    for (alias, fixture) in entries {
        store
            .set_certificate(alias, der(fixture))
            .expect("fixture is a valid certificate");
    }
    store.persist().expect("truststore written");
}

pub fn keystore_toolkit_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_keystore-toolkit"))
}

/// Write a PKCS#12 keystore holding the alpha key with its certificate under
/// `key_alias`, next to `(alias, fixture)` trusted certificate entries
pub fn write_keystore_with_key(path: &Path, key_alias: &str, trusted: &[(&str, &str)]) {
    use p12_keystore::{Certificate, KeyStore, KeyStoreEntry, PrivateKeyChain};

    let mut keystore = KeyStore::new();
    let leaf = Certificate::from_der(&der("alpha")).expect("fixture is a valid certificate");
    let chain = PrivateKeyChain::new(der("alpha-key"), b"alpha-local-key-id", vec![leaf]);
    keystore.add_entry(key_alias, KeyStoreEntry::PrivateKeyChain(chain));
    for (alias, fixture) in trusted {
        let cert = Certificate::from_der(&der(fixture)).expect("fixture is a valid certificate");
        keystore.add_entry(alias, KeyStoreEntry::Certificate(cert));
    }

    let data = keystore.writer(PASSWORD).write().expect("keystore encoded");
    std::fs::write(path, data).expect("keystore written");
}
