//! Persona profile model and generation.
//!
//! A profile is sampled in one pass from static vocabularies: experience by
//! role, area and skills by cohort, psychology per dimension, then the ACE
//! projection over the finished fields.

pub mod ace;
pub mod generator;
pub mod hierarchy;
pub mod sampler;
pub mod types;
pub mod vocab;

pub use generator::ProfileGenerator;
pub use hierarchy::{Role, HIERARCHY_DISTRIBUTION, NON_TECH_ROLES};
pub use types::{Cohort, Profile};
pub use vocab::PsychDimension;
