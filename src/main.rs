//! persona-synth - Synthetic employee profiles for retrieval demos
//!
//! Generates a JSON array of fictional professionals (tech cohort by a fixed
//! hierarchy distribution, then a non-tech cohort), each carrying an ACE
//! projection for embedding, and audits existing profile files.

mod batch;
mod cli;
mod config;
mod error;
mod logging;
mod profile;
mod version;

use std::path::Path;

use clap::Parser;
use tracing::{error, info};

use crate::batch::BatchDriver;
use crate::cli::{Cli, Commands};
use crate::config::SynthConfig;
use crate::error::{Error, Result};
use crate::logging::LogGuards;

fn main() {
    // Parse CLI arguments first (before logging, so we know verbosity)
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!(error = %e.format_for_log(), "Command failed");
        eprint!("{}", e.format_for_terminal());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Version => {
            version::print_version();
            return Ok(());
        }
        Commands::Config { subcommand } => {
            // Config commands use minimal logging
            logging::init_simple(tracing::Level::WARN)?;
            return handle_config_command(subcommand.clone());
        }
        Commands::Audit { file, config } => {
            let config = SynthConfig::load(config.as_deref())?;
            let _log_guards = init_logging_from_config(&config, cli.verbose, cli.quiet)?;
            return run_audit(Path::new(file));
        }
        Commands::Generate { .. } => {}
    }

    let config_path = match &cli.command {
        Commands::Generate { config, .. } => config.clone(),
        _ => None,
    };

    let mut config = SynthConfig::load(config_path.as_deref())?;
    config.apply_cli_overrides(&cli.command.overrides())?;

    // The guards must be kept alive for the lifetime of the program
    let _log_guards = init_logging_from_config(&config, cli.verbose, cli.quiet)?;

    let build = version::build_info();
    info!(version = %build.version_line(), "Starting persona-synth");

    run_generate(&config, !cli.quiet)
}

/// Initialize logging from configuration
fn init_logging_from_config(config: &SynthConfig, verbose: u8, quiet: bool) -> Result<LogGuards> {
    logging::init_logging(&config.logging, verbose, quiet)
}

fn run_generate(config: &SynthConfig, progress: bool) -> Result<()> {
    let output = config.output_path();
    let compact = config.compact_path();

    info!(
        output = %output.display(),
        compact = ?compact,
        seed = ?config.generation.seed,
        non_tech_count = config.generation.non_tech_count,
        shuffle = config.generation.shuffle,
        "Generating profiles"
    );

    BatchDriver::new(config.generation.clone())
        .with_progress(progress)
        .run(&output, compact.as_deref())?;

    Ok(())
}

fn run_audit(path: &Path) -> Result<()> {
    let profiles = batch::load_profiles(path)?;
    info!(path = %path.display(), count = profiles.len(), "Auditing profiles");

    let report = batch::audit::audit(&profiles);
    print!("{}", report);

    if report.is_clean() {
        Ok(())
    } else {
        Err(Error::AuditFailed {
            path: path.to_path_buf(),
            violations: report.violations.len(),
        })
    }
}

/// Handle configuration subcommands
fn handle_config_command(subcommand: cli::ConfigSubcommand) -> Result<()> {
    use cli::ConfigSubcommand;

    match subcommand {
        ConfigSubcommand::Show { config } => {
            let cfg = SynthConfig::load(config.as_deref())?;
            println!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigSubcommand::Init { path, force } => {
            config::init_config(path.as_deref(), force)?;
        }
        ConfigSubcommand::Validate { config } => {
            SynthConfig::load(config.as_deref())?;
            println!("Configuration is valid.");
        }
    }

    Ok(())
}
