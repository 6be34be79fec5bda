//! Diff classification types

use super::CertificateEntry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relationship of an alias between an old and a new snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Present in both, same fingerprint
    Identical,
    /// Present only in the old snapshot
    Removed,
    /// Present only in the new snapshot
    Added,
    /// Present in both, different fingerprint
    Changed,
}

impl Category {
    /// Every category, in presentation order
    pub const ALL: [Category; 4] = [
        Category::Identical,
        Category::Removed,
        Category::Added,
        Category::Changed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Identical => "identical",
            Category::Removed => "removed",
            Category::Added => "added",
            Category::Changed => "changed",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category as requested by a caller, where `all` stands for all four
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TableSelector {
    Identical,
    Removed,
    Added,
    Changed,
    All,
}

impl TableSelector {
    /// Resolve a list of selectors into distinct categories in presentation order
    pub fn expand(selectors: &[TableSelector]) -> Vec<Category> {
        if selectors.contains(&TableSelector::All) {
            return Category::ALL.to_vec();
        }
        Category::ALL
            .into_iter()
            .filter(|category| selectors.iter().any(|s| s.category() == Some(*category)))
            .collect()
    }

    fn category(&self) -> Option<Category> {
        match self {
            TableSelector::Identical => Some(Category::Identical),
            TableSelector::Removed => Some(Category::Removed),
            TableSelector::Added => Some(Category::Added),
            TableSelector::Changed => Some(Category::Changed),
            TableSelector::All => None,
        }
    }
}

/// Outcome of comparing two snapshots
///
/// Holds exactly the requested categories, in presentation order. A
/// requested category with no members is kept as an empty sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    sections: Vec<(Category, Vec<CertificateEntry>)>,
}

impl DiffResult {
    pub(crate) fn push(&mut self, category: Category, entries: Vec<CertificateEntry>) {
        self.sections.push((category, entries));
    }

    /// Entries of a category, or `None` if it was not requested
    pub fn get(&self, category: Category) -> Option<&[CertificateEntry]> {
        self.sections
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, entries)| entries.as_slice())
    }

    /// Aliases of a category in output order, or `None` if it was not requested
    pub fn aliases(&self, category: Category) -> Option<Vec<&str>> {
        self.get(category)
            .map(|entries| entries.iter().map(|e| e.alias.as_str()).collect())
    }

    /// Categories present in the result
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.sections.iter().map(|(c, _)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[CertificateEntry])> {
        self.sections.iter().map(|(c, e)| (*c, e.as_slice()))
    }

    /// Whether any present category other than `identical` has members
    pub fn has_differences(&self) -> bool {
        self.iter()
            .any(|(category, entries)| category != Category::Identical && !entries.is_empty())
    }
}
