//! Core profile record types.
//!
//! Field names and declaration order match the exported JSON layout, which
//! downstream retrieval tooling reads by key.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::vocab::PsychDimension;

// ─────────────────────────────────────────────────────────────────
// Cohort
// ─────────────────────────────────────────────────────────────────

/// Which generation pass (and vocabulary set) produced a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Cohort {
    #[serde(rename = "Tech")]
    Tech,
    #[serde(rename = "Non-Tech")]
    NonTech,
}

impl Cohort {
    pub fn label(&self) -> &'static str {
        match self {
            Cohort::Tech => "Tech",
            Cohort::NonTech => "Non-Tech",
        }
    }

    pub fn is_tech(&self) -> bool {
        matches!(self, Cohort::Tech)
    }
}

impl fmt::Display for Cohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ─────────────────────────────────────────────────────────────────
// Neurodivergence
// ─────────────────────────────────────────────────────────────────

/// Optional neurodivergence label. Absence is `None`, exported as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Neurodivergence {
    #[serde(rename = "TDAH")]
    Adhd,
    #[serde(rename = "Autismo (Nível 1)")]
    AutismLevel1,
    #[serde(rename = "Dislexia")]
    Dyslexia,
}

impl Neurodivergence {
    /// Second-stage choices once the gate opens; `None` entries are
    /// placeholders that still yield no value.
    pub const CHOICES: [Option<Neurodivergence>; 6] = [
        None,
        None,
        None,
        Some(Neurodivergence::Adhd),
        Some(Neurodivergence::AutismLevel1),
        Some(Neurodivergence::Dyslexia),
    ];
}

// ─────────────────────────────────────────────────────────────────
// Profile
// ─────────────────────────────────────────────────────────────────

/// One synthetic persona.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub tipo: Cohort,
    pub informacoes_basicas: BasicInfo,
    pub psicologia_comportamento: Psychology,
    pub habilidades: Skills,
    pub contexto: WorkContext,
    pub historia: String,
    pub ace_metadata: AceMetadata,
}

/// Demographics and position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub nome: String,
    pub genero: String,
    pub idade: u32,
    pub cargo: String,
    pub area: String,
    pub tempo_empresa: String,
    pub tempo_carreira: String,
    pub formacao: String,
    pub localizacao: String,
    pub neurodivergencia: Option<Neurodivergence>,
}

/// One trait per behavioral dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Psychology {
    #[serde(rename = "Estilo de Comunicação")]
    pub communication: String,
    #[serde(rename = "Abordagem ao Trabalho")]
    pub work_approach: String,
    #[serde(rename = "Gestão de Conflitos")]
    pub conflict_management: String,
    #[serde(rename = "Relação com Tecnologia")]
    pub technology_relation: String,
    #[serde(rename = "Liderança e Influência")]
    pub leadership: String,
    #[serde(rename = "Relação com Processos")]
    pub process_relation: String,
    #[serde(rename = "Gestão de Estresse")]
    pub stress_management: String,
    #[serde(rename = "Motivadores Principais")]
    pub motivators: String,
}

impl Psychology {
    /// Build from a per-dimension lookup.
    pub fn from_fn(mut trait_for: impl FnMut(PsychDimension) -> String) -> Self {
        Self {
            communication: trait_for(PsychDimension::Communication),
            work_approach: trait_for(PsychDimension::WorkApproach),
            conflict_management: trait_for(PsychDimension::ConflictManagement),
            technology_relation: trait_for(PsychDimension::TechnologyRelation),
            leadership: trait_for(PsychDimension::Leadership),
            process_relation: trait_for(PsychDimension::ProcessRelation),
            stress_management: trait_for(PsychDimension::StressManagement),
            motivators: trait_for(PsychDimension::Motivators),
        }
    }

    pub fn get(&self, dimension: PsychDimension) -> &str {
        match dimension {
            PsychDimension::Communication => &self.communication,
            PsychDimension::WorkApproach => &self.work_approach,
            PsychDimension::ConflictManagement => &self.conflict_management,
            PsychDimension::TechnologyRelation => &self.technology_relation,
            PsychDimension::Leadership => &self.leadership,
            PsychDimension::ProcessRelation => &self.process_relation,
            PsychDimension::StressManagement => &self.stress_management,
            PsychDimension::Motivators => &self.motivators,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub hard_skills: Vec<String>,
    pub soft_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkContext {
    pub framework_preferido: String,
    pub opiniao_agil: String,
    pub desafio_atual: String,
    pub motivacao_atual: String,
}

/// Attributes / Context / Execution views used for embedding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AceMetadata {
    #[serde(rename = "A")]
    pub attributes: String,
    #[serde(rename = "C")]
    pub context: String,
    #[serde(rename = "E")]
    pub execution: String,
    pub resumo_compacto: String,
    pub tags_busca: Vec<String>,
}
