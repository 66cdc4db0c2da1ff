//! Stamps the binary with the commit it was built from and the build date.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let commit = git(&["rev-parse", "--short=8", "HEAD"]).unwrap_or_else(|| "unknown".into());
    let dirty = git(&["status", "--porcelain"]).map_or(false, |changes| !changes.is_empty());

    println!("cargo:rustc-env=PERSONA_SYNTH_COMMIT={}", commit);
    println!("cargo:rustc-env=PERSONA_SYNTH_DIRTY={}", u8::from(dirty));
    println!(
        "cargo:rustc-env=PERSONA_SYNTH_BUILT={}",
        chrono::Utc::now().format("%Y-%m-%d")
    );
    println!(
        "cargo:rustc-env=PERSONA_SYNTH_PROFILE={}",
        env::var("PROFILE").unwrap_or_else(|_| "unknown".into())
    );
}

/// Trimmed stdout of a successful git invocation
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
