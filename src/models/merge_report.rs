//! Import (merge) report types

use serde::Serialize;
use std::fmt;

/// What happened to one requested alias during an import
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MergeOutcome {
    /// Copied into the destination
    Imported,
    /// The source has no entry under this alias
    NotFoundInSource,
    /// The destination already holds this alias; left untouched
    SkippedAlreadyExists,
    /// The destination rejected the certificate
    Failed { reason: String },
}

impl MergeOutcome {
    pub fn is_imported(&self) -> bool {
        matches!(self, MergeOutcome::Imported)
    }
}

impl fmt::Display for MergeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeOutcome::Imported => write!(f, "imported"),
            MergeOutcome::NotFoundInSource => write!(f, "not found in source"),
            MergeOutcome::SkippedAlreadyExists => write!(f, "already exists in destination"),
            MergeOutcome::Failed { reason } => write!(f, "failed ({})", reason),
        }
    }
}

/// Outcome for one alias
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeItem {
    pub alias: String,
    #[serde(flatten)]
    pub outcome: MergeOutcome,
}

/// Per-alias outcomes of an import, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    items: Vec<MergeItem>,
}

impl MergeReport {
    pub(crate) fn record(&mut self, alias: &str, outcome: MergeOutcome) {
        self.items.push(MergeItem {
            alias: alias.to_string(),
            outcome,
        });
    }

    pub fn items(&self) -> &[MergeItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Outcome recorded for an alias
    pub fn outcome(&self, alias: &str) -> Option<&MergeOutcome> {
        self.items
            .iter()
            .find(|item| item.alias == alias)
            .map(|item| &item.outcome)
    }

    pub fn imported_count(&self) -> usize {
        self.items.iter().filter(|i| i.outcome.is_imported()).count()
    }

    pub fn not_found_count(&self) -> usize {
        self.count(|o| matches!(o, MergeOutcome::NotFoundInSource))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, MergeOutcome::SkippedAlreadyExists))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, MergeOutcome::Failed { .. }))
    }

    /// Whether the destination was mutated and needs persisting
    pub fn has_changes(&self) -> bool {
        self.imported_count() > 0
    }

    fn count(&self, predicate: impl Fn(&MergeOutcome) -> bool) -> usize {
        self.items.iter().filter(|i| predicate(&i.outcome)).count()
    }
}
