//! JSON output formatter

use super::{format_instant, ExtraField, ExtraFields};
use crate::models::{CertificateEntry, DiffResult, MergeReport};
use crate::utils::ReportError;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// One alias with only the selected extra fields
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonRow<'a> {
    alias: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    common_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    not_before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    not_after: Option<String>,
}

impl<'a> JsonRow<'a> {
    fn new(entry: &'a CertificateEntry, fields: &ExtraFields) -> Self {
        Self {
            alias: &entry.alias,
            common_name: fields
                .contains(ExtraField::CommonName)
                .then_some(entry.common_name.as_str()),
            not_before: fields
                .contains(ExtraField::NotBefore)
                .then(|| format_instant(&entry.not_before)),
            not_after: fields
                .contains(ExtraField::NotAfter)
                .then(|| format_instant(&entry.not_after)),
        }
    }
}

/// Category → rows, serialized in the diff's category order
struct JsonDiff<'a> {
    result: &'a DiffResult,
    fields: &'a ExtraFields,
}

impl Serialize for JsonDiff<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (category, entries) in self.result.iter() {
            let rows: Vec<JsonRow<'_>> = entries
                .iter()
                .map(|entry| JsonRow::new(entry, self.fields))
                .collect();
            map.serialize_entry(category.as_str(), &rows)?;
        }
        map.end()
    }
}

/// Render a diff as pretty-printed JSON
pub fn render_diff_json(result: &DiffResult, fields: &ExtraFields) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(&JsonDiff { result, fields })?)
}

/// Render an import report as pretty-printed JSON
pub fn render_merge_json(report: &MergeReport) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}
