//! Dataset audit over a loaded profiles array.
//!
//! Re-checks the invariants the generator guarantees, so hand-edited or
//! foreign files can be validated before they are embedded.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use tracing::debug;
use uuid::Uuid;

use crate::profile::generator::first_word;
use crate::profile::hierarchy::parse_years;
use crate::profile::vocab::{
    HARD_SKILL_RANGE, NON_TECH_AREAS, NON_TECH_LEADERSHIP_PREFIX, TECH_AREAS,
    TECH_LEADERSHIP_PREFIX,
};
use crate::profile::{Cohort, Profile, PsychDimension, Role, NON_TECH_ROLES};

/// Which invariant a record broke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    DuplicateId,
    UnknownRole,
    HardSkillCount,
    HardSkillRepeated,
    LeadershipArea,
    AreaVocabulary,
    PsychologyTrait,
    MotivationMismatch,
    StaleAce,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::DuplicateId => "duplicate-id",
            Rule::UnknownRole => "unknown-role",
            Rule::HardSkillCount => "hard-skill-count",
            Rule::HardSkillRepeated => "hard-skill-repeated",
            Rule::LeadershipArea => "leadership-area",
            Rule::AreaVocabulary => "area-vocabulary",
            Rule::PsychologyTrait => "psychology-trait",
            Rule::MotivationMismatch => "motivation-mismatch",
            Rule::StaleAce => "stale-ace",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Position in the array
    pub index: usize,
    pub id: Uuid,
    pub rule: Rule,
    pub detail: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} [{}]: {}", self.index, self.id, self.rule, self.detail)
    }
}

/// Counts and violations for one file
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub total: usize,
    pub by_cohort: BTreeMap<Cohort, usize>,
    /// Hierarchy order; roles with no records are omitted
    pub by_role: Vec<(Role, usize)>,
    /// Records whose company tenure exceeds their career tenure
    pub tenure_inversions: usize,
    pub violations: Vec<Violation>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Profiles: {}", self.total)?;
        writeln!(f)?;
        writeln!(f, "By cohort:")?;
        for (cohort, count) in &self.by_cohort {
            writeln!(f, "  {:<20} {}", cohort.label(), count)?;
        }
        writeln!(f)?;
        writeln!(f, "By role:")?;
        for (role, count) in &self.by_role {
            writeln!(f, "  {:<20} {}", role.label(), count)?;
        }
        writeln!(f)?;
        writeln!(f, "Tenure inversions: {}", self.tenure_inversions)?;

        if self.is_clean() {
            writeln!(f, "Violations: none")?;
        } else {
            writeln!(f, "Violations: {}", self.violations.len())?;
            for violation in &self.violations {
                writeln!(f, "  {}", violation)?;
            }
        }
        Ok(())
    }
}

/// Audit a loaded batch
pub fn audit(profiles: &[Profile]) -> AuditReport {
    let mut report = AuditReport {
        total: profiles.len(),
        ..Default::default()
    };
    let mut role_counts: BTreeMap<usize, usize> = BTreeMap::new();
    let mut seen = HashSet::with_capacity(profiles.len());

    for (index, profile) in profiles.iter().enumerate() {
        let mut flag = |rule: Rule, detail: String| {
            report.violations.push(Violation {
                index,
                id: profile.id,
                rule,
                detail,
            });
        };

        *report.by_cohort.entry(profile.tipo).or_insert(0) += 1;

        if !seen.insert(profile.id) {
            flag(Rule::DuplicateId, "id already used by an earlier record".into());
        }

        let info = &profile.informacoes_basicas;
        let role = Role::from_label(&info.cargo);
        match role {
            Some(role) if profile.tipo.is_tech() || NON_TECH_ROLES.contains(&role) => {
                if let Some(position) = Role::all().iter().position(|r| *r == role) {
                    *role_counts.entry(position).or_insert(0) += 1;
                }
            }
            _ => flag(
                Rule::UnknownRole,
                format!("'{}' is not a {} role", info.cargo, profile.tipo),
            ),
        }

        let skills = &profile.habilidades.hard_skills;
        let (min, max) = HARD_SKILL_RANGE;
        if !(min..=max).contains(&skills.len()) {
            flag(
                Rule::HardSkillCount,
                format!("{} hard skills, expected {}..={}", skills.len(), min, max),
            );
        }
        let distinct: HashSet<&String> = skills.iter().collect();
        if distinct.len() != skills.len() {
            flag(Rule::HardSkillRepeated, format!("{:?}", skills));
        }

        if let Some(role) = role {
            check_area(profile.tipo, role, &info.area, &mut flag);
        }

        let psych = &profile.psicologia_comportamento;
        for dimension in PsychDimension::ALL {
            let value = psych.get(dimension);
            if !dimension.traits().contains(&value) {
                flag(
                    Rule::PsychologyTrait,
                    format!("'{}' is not a {} trait", value, dimension),
                );
            }
        }

        if profile.contexto.motivacao_atual != psych.motivators {
            flag(
                Rule::MotivationMismatch,
                format!(
                    "context says '{}', psychology says '{}'",
                    profile.contexto.motivacao_atual, psych.motivators
                ),
            );
        }

        if profile.ace_metadata != profile.ace_projection() {
            flag(
                Rule::StaleAce,
                "ace_metadata differs from the current fields".into(),
            );
        }

        if let (Some(company), Some(career)) = (
            parse_years(&info.tempo_empresa),
            parse_years(&info.tempo_carreira),
        ) {
            if company > career {
                report.tenure_inversions += 1;
            }
        }
    }

    report.by_role = role_counts
        .into_iter()
        .map(|(position, count)| (Role::all()[position], count))
        .collect();

    debug!(
        total = report.total,
        violations = report.violations.len(),
        inversions = report.tenure_inversions,
        "Audit finished"
    );

    report
}

/// Leadership areas must carry the cohort prefix over a known first word;
/// every other area must be a label of the cohort's own table.
fn check_area(cohort: Cohort, role: Role, area: &str, flag: &mut impl FnMut(Rule, String)) {
    let (table, prefix): (&[&str], &str) = match cohort {
        Cohort::Tech => (TECH_AREAS, TECH_LEADERSHIP_PREFIX),
        Cohort::NonTech => (NON_TECH_AREAS, NON_TECH_LEADERSHIP_PREFIX),
    };

    if role.is_leadership() {
        match area.strip_prefix(prefix) {
            Some(rest) => {
                if !table.iter().any(|label| first_word(label) == rest) {
                    flag(
                        Rule::AreaVocabulary,
                        format!("'{}' does not name a {} area", rest, cohort),
                    );
                }
            }
            None => flag(
                Rule::LeadershipArea,
                format!("'{}' lacks the '{}' prefix", area, prefix.trim_end()),
            ),
        }
    } else if !table.contains(&area) {
        flag(
            Rule::AreaVocabulary,
            format!("'{}' is not a {} area", area, cohort),
        );
    }
}
