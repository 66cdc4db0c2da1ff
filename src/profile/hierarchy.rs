//! Role hierarchy and the age/experience rule.
//!
//! Each role maps to three inclusive ranges (age, years at the current
//! company, years in the career). The ranges are sampled independently, so a
//! profile can end up with more company tenure than career tenure for roles
//! whose ranges overlap that way.

use std::fmt;
use std::ops::RangeInclusive;

use rand::Rng;

// ─────────────────────────────────────────────────────────────────
// Role
// ─────────────────────────────────────────────────────────────────

/// The twelve seniority levels of the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Intern,
    Trainee,
    Junior,
    MidLevel,
    Senior,
    Staff,
    TechLead,
    Coordinator,
    Manager,
    SeniorManager,
    Director,
    CLevel,
}

impl Role {
    /// All roles in hierarchy order.
    pub fn all() -> &'static [Role] {
        &[
            Role::Intern,
            Role::Trainee,
            Role::Junior,
            Role::MidLevel,
            Role::Senior,
            Role::Staff,
            Role::TechLead,
            Role::Coordinator,
            Role::Manager,
            Role::SeniorManager,
            Role::Director,
            Role::CLevel,
        ]
    }

    /// Title exported as `cargo`.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Intern => "Estagiário",
            Role::Trainee => "Trainee",
            Role::Junior => "Júnior",
            Role::MidLevel => "Pleno",
            Role::Senior => "Sênior",
            Role::Staff => "Especialista/Staff",
            Role::TechLead => "Tech Lead",
            Role::Coordinator => "Coordenador",
            Role::Manager => "Gerente",
            Role::SeniorManager => "Gerente Sênior",
            Role::Director => "Diretor",
            Role::CLevel => "C-Level",
        }
    }

    /// Exact label lookup.
    pub fn from_label(label: &str) -> Option<Role> {
        Role::all().iter().copied().find(|r| r.label() == label)
    }

    /// Senior leadership gets its area rewritten into a strategic form.
    pub fn is_leadership(&self) -> bool {
        matches!(self, Role::Director | Role::CLevel)
    }

    /// Roles whose tech skill pool includes the management vocabulary.
    ///
    /// "Gerente Sênior" is not listed; it only picks up management
    /// skills through a management-flavored area.
    pub fn manages_people(&self) -> bool {
        matches!(
            self,
            Role::Manager | Role::Coordinator | Role::Director | Role::CLevel
        )
    }

    /// Age and tenure ranges for this role.
    pub fn experience_band(&self) -> ExperienceBand {
        match self {
            Role::Intern => ExperienceBand::new(18..=25, 0..=0, 0..=0),
            Role::Trainee => ExperienceBand::new(22..=28, 0..=1, 0..=2),
            Role::Junior => ExperienceBand::new(20..=30, 0..=2, 0..=3),
            Role::MidLevel => ExperienceBand::new(24..=35, 2..=5, 2..=6),
            Role::Senior => ExperienceBand::new(28..=45, 5..=10, 5..=12),
            Role::Staff => ExperienceBand::new(30..=50, 8..=15, 8..=18),
            Role::TechLead => ExperienceBand::new(28..=45, 5..=10, 6..=15),
            Role::Coordinator => ExperienceBand::new(30..=45, 2..=8, 5..=12),
            Role::Manager => ExperienceBand::new(32..=50, 4..=10, 8..=15),
            Role::SeniorManager => ExperienceBand::new(35..=55, 5..=12, 10..=20),
            Role::Director => ExperienceBand::new(40..=60, 5..=15, 15..=25),
            Role::CLevel => ExperienceBand::new(40..=65, 5..=20, 15..=30),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ─────────────────────────────────────────────────────────────────
// Distribution tables
// ─────────────────────────────────────────────────────────────────

/// How many tech profiles each role contributes, in output order.
pub const HIERARCHY_DISTRIBUTION: &[(Role, usize)] = &[
    (Role::Intern, 20),
    (Role::Trainee, 15),
    (Role::Junior, 40),
    (Role::MidLevel, 50),
    (Role::Senior, 45),
    (Role::Staff, 30),
    (Role::TechLead, 25),
    (Role::Coordinator, 20),
    (Role::Manager, 20),
    (Role::SeniorManager, 15),
    (Role::Director, 10),
    (Role::CLevel, 10),
];

/// Roles the non-tech cohort draws from.
pub const NON_TECH_ROLES: &[Role] = &[
    Role::Intern,
    Role::Junior,
    Role::MidLevel,
    Role::Senior,
    Role::Coordinator,
    Role::Manager,
    Role::Director,
];

/// Total size of the tech cohort.
pub fn tech_cohort_size() -> usize {
    HIERARCHY_DISTRIBUTION.iter().map(|(_, count)| count).sum()
}

// ─────────────────────────────────────────────────────────────────
// Experience
// ─────────────────────────────────────────────────────────────────

/// Inclusive ranges a role's age and tenure are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceBand {
    pub age: RangeInclusive<u32>,
    pub company_years: RangeInclusive<u32>,
    pub career_years: RangeInclusive<u32>,
}

impl ExperienceBand {
    pub const fn new(
        age: RangeInclusive<u32>,
        company_years: RangeInclusive<u32>,
        career_years: RangeInclusive<u32>,
    ) -> Self {
        Self {
            age,
            company_years,
            career_years,
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Experience {
        Experience {
            age: rng.gen_range(self.age.clone()),
            company_years: rng.gen_range(self.company_years.clone()),
            career_years: rng.gen_range(self.career_years.clone()),
        }
    }
}

/// Sampled age and tenure for one profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub age: u32,
    pub company_years: u32,
    pub career_years: u32,
}

impl Experience {
    /// Used when a role label is not part of the hierarchy.
    pub const FALLBACK: Experience = Experience {
        age: 30,
        company_years: 5,
        career_years: 5,
    };
}

/// Sample age and tenure for a role label, falling back to
/// [`Experience::FALLBACK`] for labels outside the hierarchy.
pub fn sample_experience<R: Rng + ?Sized>(rng: &mut R, role_label: &str) -> Experience {
    match Role::from_label(role_label) {
        Some(role) => role.experience_band().sample(rng),
        None => Experience::FALLBACK,
    }
}

/// Render a year count the way profiles store tenure.
pub fn format_years(years: u32) -> String {
    format!("{} anos", years)
}

/// Inverse of [`format_years`].
pub fn parse_years(text: &str) -> Option<u32> {
    text.strip_suffix(" anos")?.trim().parse().ok()
}
