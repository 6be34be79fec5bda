//! Runner for the compare and import commands
//!
//! Opens the stores, drives the engine and hands results to the output
//! formatters. Store handles are dropped as soon as their snapshot exists.

use crate::cert_ops::{diff, merge, StoreSnapshot};
use crate::cli::{CompareArgs, ImportArgs};
use crate::config::Settings;
use crate::models::{DiffResult, MergeReport, TableSelector};
use crate::output::{self, ExtraFields, OutputFormat, PersistStatus};
use crate::store::{self, read_alias_file};
use crate::utils::Result;
use anyhow::Context;
use std::path::Path;

/// Result of comparing two stores
pub struct Comparison {
    pub old: StoreSnapshot,
    pub new: StoreSnapshot,
    pub result: DiffResult,
}

/// Snapshot both stores and diff them for the requested tables
pub fn compare_paths(
    old: &Path,
    new: &Path,
    password: &str,
    tables: &[TableSelector],
) -> Result<Comparison> {
    let old = StoreSnapshot::build(store::open_store(old, password)?.as_ref());
    let new = StoreSnapshot::build(store::open_store(new, password)?.as_ref());
    let result = diff(&old, &new, tables);
    Ok(Comparison { old, new, result })
}

/// Result of an import
pub struct Import {
    pub report: MergeReport,
    pub status: PersistStatus,
    pub source: String,
    pub destination: String,
}

/// Copy `aliases` from the store at `source` into the store at `destination`
///
/// The destination is created empty if it does not exist, and persisted
/// only when something was imported and `dry_run` is off.
pub fn import_paths(
    source: &Path,
    destination: &Path,
    password: &str,
    aliases: &[String],
    dry_run: bool,
) -> Result<Import> {
    let source_store = store::open_store(source, password)?;
    let mut destination_store = store::open_or_create_store(destination, password)?;

    let report = merge(source_store.as_ref(), destination_store.as_mut(), aliases);

    let status = if dry_run {
        PersistStatus::DryRun
    } else if report.has_changes() {
        destination_store.persist()?;
        PersistStatus::Saved
    } else {
        PersistStatus::Unchanged
    };

    Ok(Import {
        report,
        status,
        source: source_store.name().to_string(),
        destination: destination_store.name().to_string(),
    })
}

/// Run the `compare` command
pub fn run_compare(args: &CompareArgs, settings: &Settings) -> anyhow::Result<()> {
    let password = args
        .password
        .as_deref()
        .unwrap_or(&settings.store.password);
    let tables = args
        .tables
        .clone()
        .unwrap_or_else(|| settings.compare.tables.clone());
    let format = args.format.unwrap_or(settings.compare.format);
    let fields: ExtraFields = args
        .extra
        .clone()
        .unwrap_or_else(|| settings.compare.extra.clone())
        .into_iter()
        .collect();

    let comparison = compare_paths(&args.old, &args.new, password, &tables).with_context(|| {
        format!(
            "comparing {} with {}",
            args.old.display(),
            args.new.display()
        )
    })?;

    match format {
        OutputFormat::Json => {
            println!("{}", output::render_diff_json(&comparison.result, &fields)?);
        }
        OutputFormat::Console | OutputFormat::Table => {
            eprint!("{}", output::render_skipped(&comparison.old));
            eprint!("{}", output::render_skipped(&comparison.new));
            let rendered = if format == OutputFormat::Table {
                output::render_diff_tables(&comparison.result, &fields)
            } else {
                output::render_diff_console(&comparison.result, &fields)
            };
            print!("{}", rendered);
        }
    }

    Ok(())
}

/// Run the `import` command
pub fn run_import(args: &ImportArgs, settings: &Settings) -> anyhow::Result<MergeReport> {
    let password = args
        .password
        .as_deref()
        .unwrap_or(&settings.store.password);
    let format = args.format.unwrap_or(OutputFormat::Console);

    let aliases = read_alias_file(&args.input_file)
        .with_context(|| format!("reading alias list {}", args.input_file.display()))?;
    if aliases.is_empty() {
        tracing::warn!("{} lists no aliases", args.input_file.display());
    }

    let import = import_paths(&args.old, &args.new, password, &aliases, args.dry_run)
        .with_context(|| {
            format!(
                "importing from {} into {}",
                args.old.display(),
                args.new.display()
            )
        })?;

    match format {
        OutputFormat::Json => println!("{}", output::render_merge_json(&import.report)?),
        OutputFormat::Console | OutputFormat::Table => print!(
            "{}",
            output::render_merge_console(
                &import.report,
                &import.source,
                &import.destination,
                import.status
            )
        ),
    }

    Ok(import.report)
}
