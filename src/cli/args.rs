//! CLI argument definitions using clap

use crate::models::TableSelector;
use crate::output::{ExtraField, OutputFormat};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "keystore-toolkit")]
#[command(version)]
#[command(
    about = "Compare two certificate keystores and import certificates between them",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommand,

    /// Settings file (default: config/default.toml if present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum SubCommand {
    /// Compare two keystores and show identical / removed / added / changed
    Compare(CompareArgs),

    /// Import a list of aliases from the OLD keystore into the NEW keystore
    Import(ImportArgs),
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Path to the OLD keystore (PKCS#12 file or certificate directory)
    #[arg(short, long, value_name = "PATH")]
    pub old: PathBuf,

    /// Path to the NEW keystore (PKCS#12 file or certificate directory)
    #[arg(short, long, value_name = "PATH")]
    pub new: PathBuf,

    /// Password for both keystores [default: changeit]
    #[arg(short, long)]
    pub password: Option<String>,

    /// Which tables to display [default: removed,added,changed]
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub tables: Option<Vec<TableSelector>>,

    /// Output format [default: console]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Additional certificate fields to show [default: nb]
    #[arg(short = 'x', long, value_enum, value_delimiter = ',')]
    pub extra: Option<Vec<ExtraField>>,
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Source keystore
    #[arg(short, long, value_name = "PATH")]
    pub old: PathBuf,

    /// Target keystore (created if missing)
    #[arg(short, long, value_name = "PATH")]
    pub new: PathBuf,

    /// Password for both keystores [default: changeit]
    #[arg(short, long)]
    pub password: Option<String>,

    /// Text file: one alias per line (no delimiters)
    #[arg(short, long = "input-file", value_name = "FILE")]
    pub input_file: PathBuf,

    /// Report what would be imported without saving the target
    #[arg(long)]
    pub dry_run: bool,

    /// Output format [default: console]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}
