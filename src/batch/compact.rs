//! Flat persona export for the simulation front-end.
//!
//! One record per profile with the behavioral fields lifted to the top level
//! and a cognitive bias attached.

use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::Result;
use crate::profile::sampler::pick;
use crate::profile::vocab::COGNITIVE_BIASES;
use crate::profile::Profile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactPersona {
    pub id: Uuid,
    pub nome: String,
    pub cargo: String,
    pub area: String,
    pub estilo_comunicacao: String,
    pub abordagem_trabalho: String,
    pub gestao_conflitos: String,
    pub gestao_estresse: String,
    pub opiniao_agil: String,
    pub desafio_atual: String,
    pub motivacao: String,
    pub framework_preferido: String,
    pub vies_cognitivo: String,
}

impl CompactPersona {
    pub fn from_profile(profile: &Profile, bias: &str) -> Self {
        let info = &profile.informacoes_basicas;
        let psych = &profile.psicologia_comportamento;
        let context = &profile.contexto;

        Self {
            id: profile.id,
            nome: info.nome.clone(),
            cargo: info.cargo.clone(),
            area: info.area.clone(),
            estilo_comunicacao: psych.communication.clone(),
            abordagem_trabalho: psych.work_approach.clone(),
            gestao_conflitos: psych.conflict_management.clone(),
            gestao_estresse: psych.stress_management.clone(),
            opiniao_agil: context.opiniao_agil.clone(),
            desafio_atual: context.desafio_atual.clone(),
            motivacao: context.motivacao_atual.clone(),
            framework_preferido: context.framework_preferido.clone(),
            vies_cognitivo: bias.to_string(),
        }
    }
}

/// Project every profile, drawing one bias per record.
pub fn project<R: Rng + ?Sized>(rng: &mut R, profiles: &[Profile]) -> Vec<CompactPersona> {
    profiles
        .iter()
        .map(|profile| CompactPersona::from_profile(profile, pick(&mut *rng, COGNITIVE_BIASES)))
        .collect()
}

pub fn write_personas(path: &Path, personas: &[CompactPersona]) -> Result<()> {
    super::write_json(path, personas)?;
    info!(path = %path.display(), count = personas.len(), "Compact personas saved");
    Ok(())
}
