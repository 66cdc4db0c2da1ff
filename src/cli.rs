//! CLI argument parsing using clap v4
//!
//! Defines the command-line interface for persona-synth.

use clap::{Parser, Subcommand};

use crate::config::CliOverrides;

/// persona-synth - Synthetic employee profiles for retrieval demos
///
/// Generates a JSON array of fictional professionals, each with a compact
/// ACE projection ready for embedding, and audits existing files against
/// the dataset invariants.
#[derive(Parser, Debug)]
#[command(name = "persona-synth")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a batch of profiles and write it to disk
    Generate {
        /// Path to configuration file
        #[arg(short, long, env = "PERSONA_SYNTH_CONFIG")]
        config: Option<String>,

        /// Output path for the profiles array
        #[arg(short, long)]
        output: Option<String>,

        /// Also write the flat persona export to this path
        #[arg(long)]
        compact: Option<String>,

        /// Seed for a reproducible batch
        #[arg(long)]
        seed: Option<u64>,

        /// Number of non-tech profiles to append
        #[arg(long)]
        non_tech_count: Option<usize>,

        /// Shuffle the finished batch
        #[arg(long)]
        shuffle: bool,
    },

    /// Check an existing profiles file against the dataset invariants
    Audit {
        /// Profiles file to audit
        file: String,

        /// Path to configuration file (only `[logging]` applies)
        #[arg(short, long, env = "PERSONA_SYNTH_CONFIG")]
        config: Option<String>,
    },

    /// Display version and build information
    Version,

    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

impl Commands {
    /// Command-line values that override the loaded configuration
    pub fn overrides(&self) -> CliOverrides {
        match self {
            Commands::Generate {
                output,
                compact,
                seed,
                non_tech_count,
                shuffle,
                ..
            } => CliOverrides {
                output: output.clone(),
                compact: compact.clone(),
                seed: *seed,
                non_tech_count: *non_tech_count,
                shuffle: *shuffle,
            },
            _ => CliOverrides::default(),
        }
    }
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigSubcommand {
    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Initialize a new configuration file
    Init {
        /// Path where to create the config file
        #[arg(short, long)]
        path: Option<String>,

        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        config: Option<String>,
    },
}
