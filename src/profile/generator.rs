//! Single-profile generation.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;
use uuid::{Builder, Uuid};

use super::ace;
use super::hierarchy::{format_years, sample_experience, Role};
use super::sampler::{gated, pick, sample_distinct};
use super::types::{BasicInfo, Cohort, Neurodivergence, Profile, Psychology, Skills, WorkContext};
use super::vocab::{
    SkillTrack, CAREER_ORIGINS, DEFAULT_TECH_TRACK, FIRST_NAMES, FRAMEWORKS, GENDERS,
    GENERIC_SKILLS, HARD_SKILL_RANGE, LAST_NAMES, LIGHT_FRAMEWORKS, LOCATIONS,
    MANAGEMENT_AREA_MARKER, NEURODIVERGENCE_GATE, NON_TECH_AGILE_OPINIONS, NON_TECH_AREAS,
    NON_TECH_CHALLENGES, NON_TECH_FRAMEWORK_EXPOSURE, NON_TECH_LEADERSHIP_PREFIX, NO_FRAMEWORK,
    PREVIOUS_EMPLOYERS, SOFT_SKILLS, TECH_AGILE_OPINIONS, TECH_AREAS, TECH_CHALLENGES,
    TECH_LEADERSHIP_PREFIX, UNIVERSITIES,
};

/// Builds profiles from a caller-owned random source.
///
/// Ids are drawn from the same source, so a seeded generator is fully
/// reproducible.
pub struct ProfileGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> ProfileGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform role draw for cohorts without a fixed distribution.
    ///
    /// Falls back to the first hierarchy role on an empty slice.
    pub fn pick_role(&mut self, roles: &[Role]) -> Role {
        roles.choose(&mut self.rng).copied().unwrap_or(Role::Intern)
    }

    /// Generate one fully populated profile.
    pub fn generate(&mut self, role: Role, cohort: Cohort) -> Profile {
        let experience = sample_experience(&mut self.rng, role.label());

        let first_name = pick(&mut self.rng, FIRST_NAMES);
        let last_name = pick(&mut self.rng, LAST_NAMES);

        let area = self.resolve_area(role, cohort);

        let gender = pick(&mut self.rng, GENDERS);
        let neurodivergence = gated(
            &mut self.rng,
            NEURODIVERGENCE_GATE,
            &Neurodivergence::CHOICES,
        );

        let psych = Psychology::from_fn(|dim| pick(&mut self.rng, dim.traits()).to_string());

        let pool = skill_pool(role, cohort, &area);
        let hard_skills = sample_distinct(
            &mut self.rng,
            &pool,
            HARD_SKILL_RANGE.0,
            HARD_SKILL_RANGE.1,
        );

        let context = self.synthesize_context(cohort, &psych.motivators);

        let info = BasicInfo {
            nome: format!("{} {}", first_name, last_name),
            genero: gender.to_string(),
            idade: experience.age,
            cargo: role.label().to_string(),
            area,
            tempo_empresa: format_years(experience.company_years),
            tempo_carreira: format_years(experience.career_years),
            formacao: pick(&mut self.rng, UNIVERSITIES).to_string(),
            localizacao: pick(&mut self.rng, LOCATIONS).to_string(),
            neurodivergencia: neurodivergence,
        };

        let skills = Skills {
            hard_skills,
            soft_skills: SOFT_SKILLS.iter().map(|s| s.to_string()).collect(),
        };

        let story = self.story(first_name, cohort);
        let ace_metadata = ace::summarize(&info, &psych, &skills, &context);
        let id = self.next_id();

        trace!(%id, role = %role, cohort = %cohort, area = %info.area, "Generated profile");

        Profile {
            id,
            tipo: cohort,
            informacoes_basicas: info,
            psicologia_comportamento: psych,
            habilidades: skills,
            contexto: context,
            historia: story,
            ace_metadata,
        }
    }

    /// Pick an area for the cohort and apply the leadership rewrite.
    fn resolve_area(&mut self, role: Role, cohort: Cohort) -> String {
        let table = if cohort.is_tech() {
            TECH_AREAS
        } else {
            NON_TECH_AREAS
        };
        let area = pick(&mut self.rng, table);

        if role.is_leadership() {
            let prefix = if cohort.is_tech() {
                TECH_LEADERSHIP_PREFIX
            } else {
                NON_TECH_LEADERSHIP_PREFIX
            };
            format!("{}{}", prefix, first_word(area))
        } else {
            area.to_string()
        }
    }

    fn synthesize_context(&mut self, cohort: Cohort, motivation: &str) -> WorkContext {
        let (framework, opinion, challenge) = match cohort {
            Cohort::Tech => {
                let framework = pick(&mut self.rng, FRAMEWORKS);
                let opinion = pick(&mut self.rng, TECH_AGILE_OPINIONS);
                let challenge = if self.rng.gen_bool(0.5) {
                    TECH_CHALLENGES[0]
                } else {
                    TECH_CHALLENGES[1]
                };
                (framework, opinion, challenge)
            }
            Cohort::NonTech => {
                let framework = if self.rng.gen_bool(NON_TECH_FRAMEWORK_EXPOSURE) {
                    pick(&mut self.rng, LIGHT_FRAMEWORKS)
                } else {
                    NO_FRAMEWORK
                };
                let opinion = pick(&mut self.rng, NON_TECH_AGILE_OPINIONS);
                let challenge = pick(&mut self.rng, NON_TECH_CHALLENGES);
                (framework, opinion, challenge)
            }
        };

        WorkContext {
            framework_preferido: framework.to_string(),
            opiniao_agil: opinion.to_string(),
            desafio_atual: challenge.to_string(),
            motivacao_atual: motivation.to_string(),
        }
    }

    fn story(&mut self, first_name: &str, cohort: Cohort) -> String {
        let field = if cohort.is_tech() {
            "de tecnologia"
        } else {
            "corporativa"
        };
        let origin = pick(&mut self.rng, CAREER_ORIGINS);
        let employers = self
            .rng
            .gen_range(PREVIOUS_EMPLOYERS.0..=PREVIOUS_EMPLOYERS.1);
        format!(
            "{} começou na área {} por {}. Já passou por {} empresas.",
            first_name, field, origin, employers
        )
    }

    fn next_id(&mut self) -> Uuid {
        Builder::from_random_bytes(self.rng.gen()).into_uuid()
    }
}

/// Vocabulary the hard skills are drawn from, resolved from the final area
/// label (after any leadership rewrite).
///
/// Tech areas with no matching first word fall back to the development
/// table; non-tech areas with no matching key fall back to the generic
/// table. Management skills are appended, never written back into the
/// static tables.
pub fn skill_pool(role: Role, cohort: Cohort, area: &str) -> Vec<&'static str> {
    match cohort {
        Cohort::Tech => {
            let track = SkillTrack::for_tech_area(area).unwrap_or(DEFAULT_TECH_TRACK);
            let mut pool = track.skills().to_vec();
            let managerial = area.contains(MANAGEMENT_AREA_MARKER) || role.manages_people();
            if managerial && track != SkillTrack::Management {
                pool.extend_from_slice(SkillTrack::Management.skills());
            }
            pool
        }
        Cohort::NonTech => SkillTrack::for_non_tech_area(area)
            .map(|track| track.skills().to_vec())
            .unwrap_or_else(|| GENERIC_SKILLS.to_vec()),
    }
}

pub(crate) fn first_word(label: &str) -> &str {
    label.split(' ').next().unwrap_or(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::hierarchy::parse_years;
    use crate::profile::vocab::PsychDimension;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn generator(seed: u64) -> ProfileGenerator<StdRng> {
        ProfileGenerator::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_basic_fields() {
        let mut gen = generator(1);
        let profile = gen.generate(Role::Senior, Cohort::Tech);

        assert_eq!(profile.tipo, Cohort::Tech);
        assert_eq!(profile.informacoes_basicas.cargo, "Sênior");
        assert!((28..=45).contains(&profile.informacoes_basicas.idade));
        let company = parse_years(&profile.informacoes_basicas.tempo_empresa).unwrap();
        let career = parse_years(&profile.informacoes_basicas.tempo_carreira).unwrap();
        assert!((5..=10).contains(&company));
        assert!((5..=12).contains(&career));
        assert!(GENDERS.contains(&profile.informacoes_basicas.genero.as_str()));
        assert_eq!(profile.habilidades.soft_skills, SOFT_SKILLS);
    }

    #[test]
    fn test_tech_area_comes_from_tech_table() {
        let mut gen = generator(2);
        for _ in 0..200 {
            let profile = gen.generate(Role::MidLevel, Cohort::Tech);
            let area = &profile.informacoes_basicas.area;
            assert!(TECH_AREAS.contains(&area.as_str()), "{}", area);
        }
    }

    #[test]
    fn test_leadership_area_rewrite() {
        let mut gen = generator(3);
        for role in [Role::Director, Role::CLevel] {
            for _ in 0..100 {
                let tech = gen.generate(role, Cohort::Tech);
                assert!(tech
                    .informacoes_basicas
                    .area
                    .starts_with(TECH_LEADERSHIP_PREFIX));
                let non_tech = gen.generate(role, Cohort::NonTech);
                assert!(non_tech
                    .informacoes_basicas
                    .area
                    .starts_with(NON_TECH_LEADERSHIP_PREFIX));
            }
        }
    }

    #[test]
    fn test_rewrite_uses_first_word() {
        let mut gen = generator(4);
        let labels: HashSet<String> = (0..500)
            .map(|_| gen.generate(Role::Director, Cohort::NonTech).informacoes_basicas.area)
            .collect();
        assert!(labels.contains("Diretoria de Recursos"));
        assert!(labels.iter().all(|l| !l.contains('(')));
    }

    #[test]
    fn test_hard_skills_bounds_and_uniqueness() {
        let mut gen = generator(5);
        for role in Role::all() {
            for cohort in [Cohort::Tech, Cohort::NonTech] {
                for _ in 0..30 {
                    let profile = gen.generate(*role, cohort);
                    let skills = &profile.habilidades.hard_skills;
                    assert!((3..=6).contains(&skills.len()), "{:?}", skills);
                    let unique: HashSet<_> = skills.iter().collect();
                    assert_eq!(unique.len(), skills.len());
                }
            }
        }
    }

    #[test]
    fn test_skill_pool_tracks() {
        assert_eq!(
            skill_pool(Role::Senior, Cohort::Tech, "Data Engineering"),
            SkillTrack::Data.skills()
        );
        assert_eq!(
            skill_pool(Role::Junior, Cohort::Tech, "Product Management"),
            SkillTrack::Product.skills()
        );

        // No table is keyed "DevOps/SRE", "Security/InfoSec", "UX/UI" or "Project".
        for area in [
            "DevOps/SRE",
            "Security/InfoSec",
            "UX/UI Design",
            "Project Management",
            "QA/Testing",
        ] {
            assert_eq!(
                skill_pool(Role::MidLevel, Cohort::Tech, area),
                DEFAULT_TECH_TRACK.skills(),
                "{}",
                area
            );
        }
    }

    #[test]
    fn test_skill_pool_appends_management() {
        let pool = skill_pool(Role::Manager, Cohort::Tech, "Data Science");
        assert_eq!(
            pool.len(),
            SkillTrack::Data.skills().len() + SkillTrack::Management.skills().len()
        );
        assert!(pool.contains(&"OKRs"));

        // No management for a senior manager in a plain area.
        let pool = skill_pool(Role::SeniorManager, Cohort::Tech, "Data Science");
        assert!(!pool.contains(&"Hiring"));

        // Static table untouched.
        assert_eq!(SkillTrack::Data.skills().len(), 11);
    }

    #[test]
    fn test_leadership_pool_uses_rewritten_area() {
        let mut expected = DEFAULT_TECH_TRACK.skills().to_vec();
        expected.extend_from_slice(SkillTrack::Management.skills());

        let pool = skill_pool(Role::Director, Cohort::Tech, "Gestão Estratégica de Data");
        assert_eq!(pool, expected);

        // Area label alone is enough to pull in management skills.
        let pool = skill_pool(Role::SeniorManager, Cohort::Tech, "Gestão Estratégica de Data");
        assert_eq!(pool, expected);

        let mut gen = generator(13);
        for _ in 0..400 {
            let profile = gen.generate(Role::Director, Cohort::Tech);
            for skill in &profile.habilidades.hard_skills {
                assert!(expected.contains(&skill.as_str()), "{}", skill);
            }
        }
    }

    #[test]
    fn test_non_tech_pool_fallback() {
        assert_eq!(
            skill_pool(Role::Manager, Cohort::NonTech, "Outros"),
            GENERIC_SKILLS
        );
        assert_eq!(
            skill_pool(Role::Director, Cohort::NonTech, "Diretoria de Recursos"),
            GENERIC_SKILLS
        );
        assert_eq!(
            skill_pool(Role::Director, Cohort::NonTech, "Diretoria de Marketing"),
            SkillTrack::Marketing.skills()
        );
        assert_eq!(
            skill_pool(Role::Junior, Cohort::NonTech, NON_TECH_AREAS[0]),
            SkillTrack::RecursosHumanos.skills()
        );
    }

    #[test]
    fn test_psychology_membership_and_motivation() {
        let mut gen = generator(6);
        for _ in 0..200 {
            let profile = gen.generate(Role::TechLead, Cohort::Tech);
            for dim in PsychDimension::ALL {
                let value = profile.psicologia_comportamento.get(dim);
                assert!(dim.traits().contains(&value), "{}: {}", dim, value);
            }
            assert_eq!(
                profile.contexto.motivacao_atual,
                profile.psicologia_comportamento.motivators
            );
        }
    }

    #[test]
    fn test_tech_context() {
        let mut gen = generator(7);
        let mut challenges = HashSet::new();
        for _ in 0..200 {
            let ctx = gen.generate(Role::Junior, Cohort::Tech).contexto;
            assert!(FRAMEWORKS.contains(&ctx.framework_preferido.as_str()));
            assert!(TECH_AGILE_OPINIONS.contains(&ctx.opiniao_agil.as_str()));
            assert!(TECH_CHALLENGES.contains(&ctx.desafio_atual.as_str()));
            challenges.insert(ctx.desafio_atual);
        }
        assert_eq!(challenges.len(), 2);
    }

    #[test]
    fn test_non_tech_context() {
        let mut gen = generator(8);
        let draws = 2_000;
        let mut without_framework = 0;
        for _ in 0..draws {
            let ctx = gen.generate(Role::Junior, Cohort::NonTech).contexto;
            if ctx.framework_preferido == NO_FRAMEWORK {
                without_framework += 1;
            } else {
                assert!(LIGHT_FRAMEWORKS.contains(&ctx.framework_preferido.as_str()));
            }
            assert!(NON_TECH_AGILE_OPINIONS.contains(&ctx.opiniao_agil.as_str()));
            assert!(NON_TECH_CHALLENGES.contains(&ctx.desafio_atual.as_str()));
        }
        let rate = without_framework as f64 / draws as f64;
        assert!(rate > 0.64 && rate < 0.76, "rate {}", rate);
    }

    #[test]
    fn test_story_template() {
        let mut gen = generator(9);
        let tech = gen.generate(Role::MidLevel, Cohort::Tech);
        let first_name = first_word(&tech.informacoes_basicas.nome);
        assert!(tech
            .historia
            .starts_with(&format!("{} começou na área de tecnologia por ", first_name)));
        assert!(tech.historia.ends_with(" empresas."));

        let corp = gen.generate(Role::Junior, Cohort::NonTech);
        assert!(corp.historia.contains("na área corporativa por "));
    }

    #[test]
    fn test_ace_matches_projection() {
        let mut gen = generator(10);
        let profile = gen.generate(Role::Staff, Cohort::Tech);
        assert_eq!(profile.ace_metadata, profile.ace_projection());
    }

    #[test]
    fn test_seeded_generators_agree() {
        let a = generator(99).generate(Role::Manager, Cohort::NonTech);
        let b = generator(99).generate(Role::Manager, Cohort::NonTech);
        assert_eq!(a, b);
        assert_eq!(a.id.get_version_num(), 4);
    }

    #[test]
    fn test_pick_role_stays_in_slice() {
        let mut gen = generator(12);
        for _ in 0..100 {
            let role = gen.pick_role(crate::profile::NON_TECH_ROLES);
            assert!(crate::profile::NON_TECH_ROLES.contains(&role));
        }
        assert_eq!(gen.pick_role(&[]), Role::Intern);
    }

    #[test]
    fn test_unique_ids() {
        let mut gen = generator(11);
        let ids: HashSet<Uuid> = (0..1_000)
            .map(|_| gen.generate(Role::Intern, Cohort::Tech).id)
            .collect();
        assert_eq!(ids.len(), 1_000);
    }
}
