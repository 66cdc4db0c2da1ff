//! Configuration system for persona-synth
//!
//! Supports multiple configuration sources with the following precedence (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables (PERSONA_SYNTH_* prefix)
//! 3. Configuration file (TOML)
//! 4. Default values

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Main generator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    /// Where generated files are written
    pub output: OutputSettings,

    /// Batch shape and randomness
    pub generation: GenerationSettings,

    /// Logging configuration
    pub logging: LoggingSettings,
}

/// Output file settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Path of the full profiles JSON array
    pub path: String,

    /// Optional path for the flat persona export
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compact_path: Option<String>,
}

/// Batch generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Seed for a reproducible batch (unset = fresh entropy)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Number of non-tech profiles appended after the tech cohort
    pub non_tech_count: usize,

    /// Shuffle the finished batch instead of keeping cohort/role order
    pub shuffle: bool,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Log file path (empty = no file logging)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Maximum log file size in MB before rotation
    pub max_file_size_mb: u64,

    /// Number of rotated log files to keep
    pub max_files: u32,

    /// Enable JSON formatted logging
    pub json_format: bool,
}

/// Values supplied on the command line for a single run
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output: Option<String>,
    pub compact: Option<String>,
    pub seed: Option<u64>,
    pub non_tech_count: Option<usize>,
    pub shuffle: bool,
}

// Default implementations

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: "profiles.json".to_string(),
            compact_path: None,
        }
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            seed: None,
            non_tech_count: 50,
            shuffle: false,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            max_file_size_mb: 100,
            max_files: 5,
            json_format: false,
        }
    }
}

impl SynthConfig {
    /// Load configuration from file with environment variable overrides
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut config = Self::default();

        // 1. Load from config file if it exists
        let config_file = Self::find_config_file(config_path)?;
        if let Some(path) = config_file {
            debug!(path = %path.display(), "Loading configuration file");
            let content = fs::read_to_string(&path).map_err(|e| Error::io_read(&path, e))?;
            config = toml::from_str(&content).map_err(Error::config_parse)?;
            info!(path = %path.display(), "Configuration loaded from file");
        }

        // 2. Apply environment variable overrides
        config.apply_env_overrides();

        // 3. Expand paths
        config.expand_paths();

        // 4. Validate
        config.validate()?;

        Ok(config)
    }

    /// Find the configuration file to use
    fn find_config_file(explicit_path: Option<&str>) -> Result<Option<PathBuf>> {
        // If explicit path provided, use it (error if not found)
        if let Some(path) = explicit_path {
            let path = PathBuf::from(expand_path(path));
            if path.exists() {
                return Ok(Some(path));
            } else {
                return Err(Error::config_not_found(path));
            }
        }

        let search_paths = [
            PathBuf::from("persona-synth.toml"),
            dirs::config_dir()
                .map(|p| p.join("persona-synth").join("config.toml"))
                .unwrap_or_default(),
            dirs::home_dir()
                .map(|p| p.join(".persona-synth").join("config.toml"))
                .unwrap_or_default(),
        ];

        for path in &search_paths {
            if !path.as_os_str().is_empty() && path.exists() {
                debug!(path = %path.display(), "Found configuration file");
                return Ok(Some(path.clone()));
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(None)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // Output settings
        if let Ok(val) = std::env::var("PERSONA_SYNTH_OUTPUT") {
            self.output.path = val;
        }
        if let Ok(val) = std::env::var("PERSONA_SYNTH_COMPACT_OUTPUT") {
            self.output.compact_path = Some(val);
        }

        // Generation settings
        if let Ok(val) = std::env::var("PERSONA_SYNTH_SEED") {
            if let Ok(n) = val.parse() {
                self.generation.seed = Some(n);
            }
        }
        if let Ok(val) = std::env::var("PERSONA_SYNTH_NON_TECH_COUNT") {
            if let Ok(n) = val.parse() {
                self.generation.non_tech_count = n;
            }
        }
        if let Ok(val) = std::env::var("PERSONA_SYNTH_SHUFFLE") {
            self.generation.shuffle = val.to_lowercase() == "true" || val == "1";
        }

        // Logging settings
        if let Ok(val) = std::env::var("PERSONA_SYNTH_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = std::env::var("PERSONA_SYNTH_LOG_FILE") {
            self.logging.file = Some(val);
        }
        if let Ok(val) = std::env::var("PERSONA_SYNTH_LOG_JSON") {
            self.logging.json_format = val.to_lowercase() == "true" || val == "1";
        }
    }

    /// Apply command-line values, then re-validate
    pub fn apply_cli_overrides(&mut self, overrides: &CliOverrides) -> Result<()> {
        if let Some(ref path) = overrides.output {
            self.output.path = expand_path(path);
        }
        if let Some(ref path) = overrides.compact {
            self.output.compact_path = Some(expand_path(path));
        }
        if let Some(seed) = overrides.seed {
            self.generation.seed = Some(seed);
        }
        if let Some(count) = overrides.non_tech_count {
            self.generation.non_tech_count = count;
        }
        if overrides.shuffle {
            self.generation.shuffle = true;
        }
        self.validate()
    }

    /// Expand ~ and other path variables
    fn expand_paths(&mut self) {
        self.output.path = expand_path(&self.output.path);

        if let Some(ref path) = self.output.compact_path {
            self.output.compact_path = Some(expand_path(path));
        }
        if let Some(ref file) = self.logging.file {
            self.logging.file = Some(expand_path(file));
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.output.path.trim().is_empty() {
            return Err(Error::config_field_invalid(
                "output.path",
                "Output path cannot be empty",
            ));
        }

        if let Some(ref compact) = self.output.compact_path {
            if compact.trim().is_empty() {
                return Err(Error::config_field_invalid(
                    "output.compact_path",
                    "Compact output path cannot be empty",
                ));
            }
            if Path::new(compact) == Path::new(&self.output.path) {
                return Err(Error::config_field_invalid(
                    "output.compact_path",
                    "Compact output path must differ from the profiles output path",
                ));
            }
        }

        // Validate log level
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::config_field_invalid(
                "logging.level",
                format!(
                    "Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    valid_levels.join(", ")
                ),
            ));
        }

        Ok(())
    }

    /// Get the profiles output path as a PathBuf
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output.path)
    }

    /// Get the compact output path, if configured
    pub fn compact_path(&self) -> Option<PathBuf> {
        self.output.compact_path.as_ref().map(PathBuf::from)
    }
}

/// Expand ~ and environment variables in paths
fn expand_path(path: &str) -> String {
    shellexpand::full(path)
        .unwrap_or_else(|_| std::borrow::Cow::Borrowed(path))
        .into_owned()
}

/// Initialize a new configuration file
pub fn init_config(path: Option<&str>, force: bool) -> Result<()> {
    let config_path = path
        .map(|p| PathBuf::from(expand_path(p)))
        .unwrap_or_else(|| PathBuf::from("persona-synth.toml"));

    // Check if file exists
    if config_path.exists() && !force {
        return Err(Error::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            config_path.display()
        )));
    }

    // Create parent directories
    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io_write(parent, e))?;
        }
    }

    fs::write(&config_path, generate_default_config())
        .map_err(|e| Error::io_write(&config_path, e))?;

    println!("Configuration file created: {}", config_path.display());
    Ok(())
}

/// Generate default configuration content with comments
fn generate_default_config() -> String {
    r#"# persona-synth configuration

[output]
# Path of the generated profiles array
path = "profiles.json"

# Flat persona export for the simulation front-end (comment out to disable)
# compact_path = "profiles_compact.json"

[generation]
# Seed for a reproducible batch (comment out for a fresh batch every run)
# seed = 42

# Number of non-tech profiles appended after the tech cohort
non_tech_count = 50

# Shuffle the batch instead of grouping by cohort and role
shuffle = false

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log file path (comment out to disable file logging)
# file = "~/.persona-synth/logs/persona-synth.log"

# Maximum log file size in MB before rotation
max_file_size_mb = 100

# Number of rotated log files to keep
max_files = 5

# Enable JSON formatted logging
json_format = false
"#
    .to_string()
}
