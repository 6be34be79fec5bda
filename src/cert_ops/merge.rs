//! Conflict-aware import of certificates between stores

use crate::models::{MergeOutcome, MergeReport};
use crate::store::CertificateStore;
use std::collections::HashSet;

/// Copy the requested aliases from `source` into `destination`
///
/// Aliases are processed in the given order, each independently, and a
/// repeated alias is reported once at its first position. An alias
/// already present in the destination is never overwritten. Only the leaf
/// certificate is copied, never a chain or a private key. Nothing is
/// persisted; that is left to the caller.
pub fn merge<I, S>(
    source: &dyn CertificateStore,
    destination: &mut dyn CertificateStore,
    aliases: I,
) -> MergeReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = MergeReport::default();
    let mut seen = HashSet::new();

    for alias in aliases {
        let alias = alias.as_ref();
        if !seen.insert(alias.to_string()) {
            continue;
        }
        let outcome = import_one(source, destination, alias);
        tracing::debug!("{}: {}", alias, outcome);
        report.record(alias, outcome);
    }

    report
}

fn import_one(
    source: &dyn CertificateStore,
    destination: &mut dyn CertificateStore,
    alias: &str,
) -> MergeOutcome {
    if !source.contains_alias(alias) {
        return MergeOutcome::NotFoundInSource;
    }
    if destination.contains_alias(alias) {
        return MergeOutcome::SkippedAlreadyExists;
    }

    let Some(der) = source.certificate(alias) else {
        return MergeOutcome::Failed {
            reason: format!("no certificate stored under \"{}\"", alias),
        };
    };

    match destination.set_certificate(alias, der) {
        Ok(()) => MergeOutcome::Imported,
        Err(e) => MergeOutcome::Failed {
            reason: e.to_string(),
        },
    }
}
