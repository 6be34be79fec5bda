//! Console output formatting

use super::{ExtraField, ExtraFields};
use crate::cert_ops::StoreSnapshot;
use crate::models::{CertificateEntry, DiffResult, MergeOutcome, MergeReport};
use chrono::{DateTime, SecondsFormat, Utc};
use console::style;

/// What happened to the destination after an import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistStatus {
    /// Written back to disk
    Saved,
    /// Left alone because of `--dry-run`
    DryRun,
    /// Nothing was imported, so nothing was written
    Unchanged,
}

/// Instants render as RFC 3339 in UTC, second precision
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Render a diff as `=== category ===` blocks, one line per alias
pub fn render_diff_console(result: &DiffResult, fields: &ExtraFields) -> String {
    let mut out = String::new();

    for (category, entries) in result.iter() {
        out.push_str(&format!(
            "{}\n",
            style(format!("=== {} ===", category)).cyan().bold()
        ));
        if entries.is_empty() {
            out.push_str(&format!("  {}\n", style("<empty>").dim()));
            continue;
        }
        for entry in entries {
            out.push_str(&format!("  {}\n", entry_line(entry, fields)));
        }
    }

    out
}

fn entry_line(entry: &CertificateEntry, fields: &ExtraFields) -> String {
    let mut line = format!("alias={}", entry.alias);
    for field in fields.iter() {
        match field {
            ExtraField::CommonName => line.push_str(&format!(" cn={}", entry.common_name)),
            ExtraField::NotBefore => {
                line.push_str(&format!(" nb={}", format_instant(&entry.not_before)))
            }
            ExtraField::NotAfter => {
                line.push_str(&format!(" na={}", format_instant(&entry.not_after)))
            }
        }
    }
    line
}

/// Warnings for entries a snapshot had to leave out
pub fn render_skipped(snapshot: &StoreSnapshot) -> String {
    snapshot
        .skipped()
        .iter()
        .map(|skipped| {
            format!(
                "{} {}: skipped \"{}\" ({})\n",
                style("⚠").yellow(),
                snapshot.name(),
                skipped.alias,
                skipped.reason
            )
        })
        .collect()
}

/// Render an import report, one line per requested alias
pub fn render_merge_console(
    report: &MergeReport,
    source: &str,
    destination: &str,
    status: PersistStatus,
) -> String {
    let mut out = String::new();

    for item in report.items() {
        let line = match &item.outcome {
            MergeOutcome::Imported => {
                format!("{} imported alias \"{}\"", style("✓").green(), item.alias)
            }
            MergeOutcome::NotFoundInSource => format!(
                "{} alias \"{}\" not found in {}",
                style("⚠").yellow(),
                item.alias,
                source
            ),
            MergeOutcome::SkippedAlreadyExists => format!(
                "{} alias \"{}\" already exists in target {}, skipping",
                style("⚠").yellow(),
                item.alias,
                destination
            ),
            MergeOutcome::Failed { reason } => format!(
                "{} alias \"{}\" could not be imported: {}",
                style("✗").red(),
                item.alias,
                reason
            ),
        };
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str(&format!(
        "{} imported, {} skipped, {} not found, {} failed\n",
        report.imported_count(),
        report.skipped_count(),
        report.not_found_count(),
        report.failed_count()
    ));

    let footer = match status {
        PersistStatus::Saved => format!("Saved keystore: {}", destination),
        PersistStatus::DryRun => format!("Dry run: {} left unchanged", destination),
        PersistStatus::Unchanged => format!("Nothing imported: {} left unchanged", destination),
    };
    out.push_str(&format!("{}\n", style(footer).bold()));

    out
}
