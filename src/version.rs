//! What `persona-synth version` reports.
//!
//! Seeded output depends on the vocabularies compiled in, so the commit is
//! part of every version line.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: &'static str,
    /// Uncommitted changes were present at build time
    pub dirty: bool,
    /// UTC build date
    pub built: &'static str,
    pub profile: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            commit: env!("PERSONA_SYNTH_COMMIT"),
            dirty: env!("PERSONA_SYNTH_DIRTY") == "1",
            built: env!("PERSONA_SYNTH_BUILT"),
            profile: env!("PERSONA_SYNTH_PROFILE"),
        }
    }

    /// One-line form, e.g. `0.1.0 (3f2a9c1d, release)`.
    pub fn version_line(&self) -> String {
        let marker = if self.dirty { "+dirty" } else { "" };
        format!(
            "{} ({}{}, {})",
            self.version, self.commit, marker, self.profile
        )
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "persona-synth {}", self.version_line())?;
        writeln!(f, "  commit   {}", self.commit)?;
        if self.dirty {
            writeln!(f, "  tree     modified")?;
        }
        writeln!(f, "  built    {}", self.built)?;
        writeln!(f, "  profile  {}", self.profile)
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo::current()
}

pub fn print_version() {
    print!("{}", build_info());
}
