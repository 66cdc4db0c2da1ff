//! Common test utilities and fixtures
//!
//! Shared helpers for the CLI-level test suites

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::Value;

/// Get the path to the test fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get a path to a specific fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Get the valid config fixture path
pub fn valid_config_fixture() -> PathBuf {
    fixture_path("valid_config.toml")
}

/// Get the invalid config fixture path
pub fn invalid_config_fixture() -> PathBuf {
    fixture_path("invalid_config.toml")
}

/// Binary under test, run from `dir` so no stray config file is discovered
pub fn synth_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("persona-synth").unwrap();
    cmd.current_dir(dir);
    for var in [
        "PERSONA_SYNTH_CONFIG",
        "PERSONA_SYNTH_OUTPUT",
        "PERSONA_SYNTH_COMPACT_OUTPUT",
        "PERSONA_SYNTH_SEED",
        "PERSONA_SYNTH_NON_TECH_COUNT",
        "PERSONA_SYNTH_SHUFFLE",
        "PERSONA_SYNTH_LOG_LEVEL",
        "PERSONA_SYNTH_LOG_FILE",
        "PERSONA_SYNTH_LOG_JSON",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Run a quiet, seeded generation into `dir/<name>` and return its path
pub fn generate_seeded(dir: &Path, name: &str, seed: u64) -> PathBuf {
    let output = dir.join(name);
    synth_cmd(dir)
        .args(["--quiet", "generate", "--seed", seed.to_string().as_str(), "--output"])
        .arg(&output)
        .assert()
        .success();
    output
}

/// Parse a JSON file into a value
pub fn read_json(path: &Path) -> Value {
    let text = fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_dir_exists() {
        assert!(fixtures_dir().exists(), "Fixtures directory should exist");
    }

    #[test]
    fn test_valid_config_exists() {
        assert!(
            valid_config_fixture().exists(),
            "Valid config fixture should exist"
        );
    }

    #[test]
    fn test_invalid_config_exists() {
        assert!(
            invalid_config_fixture().exists(),
            "Invalid config fixture should exist"
        );
    }
}
