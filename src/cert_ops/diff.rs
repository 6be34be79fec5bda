//! Snapshot comparison
//!
//! Classifies aliases of two snapshots into identical, removed, added and
//! changed. Only requested categories are computed.

use super::snapshot::StoreSnapshot;
use crate::models::{Category, CertificateEntry, DiffResult, TableSelector};

/// Compare `old` against `new` for the requested categories
///
/// Each category lists entries sorted by alias. `removed` and `identical`
/// carry the old entry, `added` and `changed` the new one.
pub fn diff(old: &StoreSnapshot, new: &StoreSnapshot, requested: &[TableSelector]) -> DiffResult {
    let mut result = DiffResult::default();

    for category in TableSelector::expand(requested) {
        let mut entries: Vec<CertificateEntry> = match category {
            Category::Identical => old
                .entries()
                .filter(|o| new.get(&o.alias).is_some_and(|n| n.same_content(o)))
                .cloned()
                .collect(),
            Category::Removed => old
                .entries()
                .filter(|o| !new.contains(&o.alias))
                .cloned()
                .collect(),
            Category::Added => new
                .entries()
                .filter(|n| !old.contains(&n.alias))
                .cloned()
                .collect(),
            Category::Changed => new
                .entries()
                .filter(|n| old.get(&n.alias).is_some_and(|o| !o.same_content(n)))
                .cloned()
                .collect(),
        };

        // String ordering is byte-wise, which for UTF-8 is code-point order
        entries.sort_by(|a, b| a.alias.cmp(&b.alias));
        result.push(category, entries);
    }

    result
}
