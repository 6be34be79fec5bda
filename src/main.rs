//! Keystore Toolkit - compare certificate keystores and import between them

use clap::Parser;
use console::style;
use keystore_toolkit::cert_ops::runner;
use keystore_toolkit::cli::{Cli, SubCommand};
use keystore_toolkit::config;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for results
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = config::load_config(cli.config.as_deref())?;

    match &cli.command {
        SubCommand::Compare(args) => runner::run_compare(args, &settings),
        SubCommand::Import(args) => {
            let report = runner::run_import(args, &settings)?;
            tracing::debug!("import finished with {} outcomes", report.len());
            Ok(())
        }
    }
}
