//! Output formatting module
//!
//! Renders diff results and import reports:
//! - Plain console listing (the default)
//! - JSON export
//! - Tables using comfy-table
//!
//! Renderers return strings; printing is left to the command runner.

pub mod json;
pub mod tables;
pub mod terminal;

pub use json::{render_diff_json, render_merge_json};
pub use tables::render_diff_tables;
pub use terminal::{
    format_instant, render_diff_console, render_merge_console, render_skipped,
    PersistStatus,
};

use serde::Deserialize;
use std::collections::BTreeSet;

/// Output format for results
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per certificate (default)
    Console,
    /// JSON document
    Json,
    /// Rich terminal tables
    Table,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Console => write!(f, "console"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

/// Descriptive field that can be shown next to each alias
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, clap::ValueEnum,
)]
pub enum ExtraField {
    /// Subject common name
    #[serde(rename = "cn", alias = "commonName")]
    #[value(name = "cn", alias = "commonName")]
    CommonName,
    /// Start of validity
    #[serde(rename = "nb", alias = "notBefore")]
    #[value(name = "nb", alias = "notBefore")]
    NotBefore,
    /// End of validity
    #[serde(rename = "na", alias = "notAfter")]
    #[value(name = "na", alias = "notAfter")]
    NotAfter,
}

/// Set of extra fields a renderer should include
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraFields(BTreeSet<ExtraField>);

impl ExtraFields {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self::from_iter([
            ExtraField::CommonName,
            ExtraField::NotBefore,
            ExtraField::NotAfter,
        ])
    }

    pub fn contains(&self, field: ExtraField) -> bool {
        self.0.contains(&field)
    }

    /// Selected fields in canonical order (cn, nb, na)
    pub fn iter(&self) -> impl Iterator<Item = ExtraField> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<ExtraField> for ExtraFields {
    fn from_iter<T: IntoIterator<Item = ExtraField>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
