//! Batch generation and profile file IO.
//!
//! The driver walks the hierarchy distribution for the tech cohort, appends
//! the non-tech cohort, and writes the whole batch as one JSON array.

pub mod audit;
pub mod compact;

use std::fs;
use std::path::Path;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::GenerationSettings;
use crate::error::{Error, Result};
use crate::profile::hierarchy::tech_cohort_size;
use crate::profile::{Cohort, Profile, ProfileGenerator, HIERARCHY_DISTRIBUTION, NON_TECH_ROLES};

/// What a finished run produced
#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub total: usize,
    pub tech: usize,
    pub non_tech: usize,
}

/// Runs one generation pass and writes its outputs
pub struct BatchDriver {
    settings: GenerationSettings,
    progress: bool,
}

impl BatchDriver {
    pub fn new(settings: GenerationSettings) -> Self {
        Self {
            settings,
            progress: true,
        }
    }

    /// Toggle the stdout progress lines
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Generate the batch, write the profiles file and, when requested,
    /// the compact export.
    pub fn run(&self, output: &Path, compact_output: Option<&Path>) -> Result<BatchSummary> {
        let started = Instant::now();
        let mut rng = match self.settings.seed {
            Some(seed) => {
                info!(seed, "Using seeded random source");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        let profiles = self.generate(&mut rng);
        write_profiles(output, &profiles)?;

        if let Some(path) = compact_output {
            let personas = compact::project(&mut rng, &profiles);
            compact::write_personas(path, &personas)?;
        }

        let tech = profiles.iter().filter(|p| p.tipo.is_tech()).count();
        let summary = BatchSummary {
            total: profiles.len(),
            tech,
            non_tech: profiles.len() - tech,
        };

        info!(
            total = summary.total,
            tech = summary.tech,
            non_tech = summary.non_tech,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Batch complete"
        );

        if self.progress {
            println!(
                "Done! {} profiles generated in {}",
                summary.total,
                output.display()
            );
        }

        Ok(summary)
    }

    /// Build the in-memory batch: tech cohort grouped by role in table
    /// order, then the non-tech cohort.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Profile> {
        let non_tech_count = self.settings.non_tech_count;
        let mut profiles = Vec::with_capacity(tech_cohort_size() + non_tech_count);

        {
            let mut generator = ProfileGenerator::new(&mut *rng);

            self.announce("Generating tech profiles...");
            for &(role, count) in HIERARCHY_DISTRIBUTION {
                debug!(role = %role, count, "Generating role group");
                for _ in 0..count {
                    profiles.push(generator.generate(role, Cohort::Tech));
                }
            }

            self.announce("Generating non-tech profiles...");
            for _ in 0..non_tech_count {
                let role = generator.pick_role(NON_TECH_ROLES);
                profiles.push(generator.generate(role, Cohort::NonTech));
            }
        }

        if self.settings.shuffle {
            debug!("Shuffling batch");
            profiles.shuffle(rng);
        }

        profiles
    }

    fn announce(&self, line: &str) {
        if self.progress {
            println!("{}", line);
        }
    }
}

/// Write profiles as a pretty-printed JSON array, creating parent directories
pub fn write_profiles(path: &Path, profiles: &[Profile]) -> Result<()> {
    write_json(path, profiles)?;
    info!(path = %path.display(), count = profiles.len(), "Profiles saved");
    Ok(())
}

/// Load a profiles array previously written by [`write_profiles`]
pub fn load_profiles(path: &Path) -> Result<Vec<Profile>> {
    let content = fs::read_to_string(path).map_err(|e| Error::io_read(path, e))?;

    serde_json::from_str(&content).map_err(|e| Error::JsonDecode {
        path: path.to_path_buf(),
        source: e,
    })
}

pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io_write(parent, e))?;
        }
    }

    let json = serde_json::to_string_pretty(value).map_err(Error::JsonEncode)?;

    fs::write(path, json).map_err(|e| Error::io_write(path, e))
}
