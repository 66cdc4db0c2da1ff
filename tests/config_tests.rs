//! Configuration system tests
//!
//! Tests configuration loading, validation, precedence and environment
//! overrides through the binary

mod common;

use std::fs;
use std::path::PathBuf;

use predicates::prelude::*;
use tempfile::TempDir;

use common::{invalid_config_fixture, read_json, synth_cmd, valid_config_fixture};

/// Test fixture for configuration testing
struct ConfigFixture {
    temp_dir: TempDir,
    config_path: PathBuf,
}

impl ConfigFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        Self {
            temp_dir,
            config_path,
        }
    }

    fn write_config(&self, content: &str) {
        fs::write(&self.config_path, content).unwrap();
    }

    fn path(&self) -> &str {
        self.config_path.to_str().unwrap()
    }

    fn dir(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }
}

// ─────────────────────────────────────────────────────────────────
// Valid Configuration Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_empty_config_uses_defaults() {
    let fixture = ConfigFixture::new();
    fixture.write_config("");

    synth_cmd(&fixture.dir())
        .args(["config", "show", "--config", fixture.path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("path = \"profiles.json\""))
        .stdout(predicate::str::contains("shuffle = false"));
}

#[test]
fn test_valid_fixture() {
    let dir = TempDir::new().unwrap();
    synth_cmd(dir.path())
        .args(["config", "validate", "--config"])
        .arg(valid_config_fixture())
        .assert()
        .success();
}

#[test]
fn test_generate_from_fixture() {
    let dir = TempDir::new().unwrap();
    synth_cmd(dir.path())
        .args(["generate", "--config"])
        .arg(valid_config_fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("Done! 320 profiles"));

    let profiles = read_json(&dir.path().join("out/profiles.json"));
    assert_eq!(profiles.as_array().unwrap().len(), 320);

    let compact = read_json(&dir.path().join("out/profiles_compact.json"));
    assert_eq!(compact.as_array().unwrap().len(), 320);
}

// ─────────────────────────────────────────────────────────────────
// Invalid Configuration Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_invalid_fixture() {
    let dir = TempDir::new().unwrap();
    synth_cmd(dir.path())
        .args(["config", "validate", "--config"])
        .arg(invalid_config_fixture())
        .assert()
        .code(10)
        .stderr(predicate::str::contains("E102"));
}

#[test]
fn test_malformed_toml() {
    let fixture = ConfigFixture::new();
    fixture.write_config("[output\npath = ");

    synth_cmd(&fixture.dir())
        .args(["config", "validate", "--config", fixture.path()])
        .assert()
        .code(10)
        .stderr(predicate::str::contains("E101"));
}

#[test]
fn test_invalid_log_level() {
    let fixture = ConfigFixture::new();
    fixture.write_config(
        r#"
[logging]
level = "chatty"
"#,
    );

    synth_cmd(&fixture.dir())
        .args(["config", "validate", "--config", fixture.path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("logging.level"));
}

#[test]
fn test_wrong_value_type() {
    let fixture = ConfigFixture::new();
    fixture.write_config(
        r#"
[generation]
non_tech_count = "many"
"#,
    );

    synth_cmd(&fixture.dir())
        .args(["config", "validate", "--config", fixture.path()])
        .assert()
        .code(10);
}

// ─────────────────────────────────────────────────────────────────
// Precedence Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let fixture = ConfigFixture::new();
    fixture.write_config(
        r#"
[generation]
non_tech_count = 5
"#,
    );

    synth_cmd(&fixture.dir())
        .env("PERSONA_SYNTH_NON_TECH_COUNT", "9")
        .args(["config", "show", "--config", fixture.path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("non_tech_count = 9"));
}

#[test]
fn test_cli_overrides_env() {
    let dir = TempDir::new().unwrap();
    synth_cmd(dir.path())
        .env("PERSONA_SYNTH_OUTPUT", "from-env.json")
        .env("PERSONA_SYNTH_NON_TECH_COUNT", "3")
        .args([
            "--quiet",
            "generate",
            "--seed",
            "4",
            "--output",
            "from-cli.json",
            "--non-tech-count",
            "1",
        ])
        .assert()
        .success();

    assert!(!dir.path().join("from-env.json").exists());
    let profiles = read_json(&dir.path().join("from-cli.json"));
    assert_eq!(profiles.as_array().unwrap().len(), 301);
}

#[test]
fn test_config_discovered_in_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("persona-synth.toml"),
        r#"
[output]
path = "discovered.json"

[generation]
seed = 11
non_tech_count = 0
"#,
    )
    .unwrap();

    synth_cmd(dir.path())
        .args(["--quiet", "generate"])
        .assert()
        .success();

    let profiles = read_json(&dir.path().join("discovered.json"));
    assert_eq!(profiles.as_array().unwrap().len(), 300);
}
