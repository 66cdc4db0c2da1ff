//! ACE (Attributes, Context, Execution) projection.
//!
//! A deterministic, token-lean rendering of a profile for embedding and
//! retrieval. Separators and field order are consumed verbatim downstream.

use super::types::{AceMetadata, BasicInfo, Profile, Psychology, Skills, WorkContext};

/// Project the already-built parts of a profile into ACE views.
pub fn summarize(
    info: &BasicInfo,
    psych: &Psychology,
    skills: &Skills,
    context: &WorkContext,
) -> AceMetadata {
    let attributes = format!(
        "{} | {} | {} exp | {}",
        info.cargo,
        info.area,
        info.tempo_empresa,
        leading(&skills.hard_skills, 3)
    );

    let ctx = format!(
        "Desafio: {} | Motivação: {} | Framework: {}",
        context.desafio_atual, context.motivacao_atual, context.framework_preferido
    );

    let execution = format!(
        "{} | {} | {} | {}",
        psych.communication, psych.work_approach, psych.conflict_management, psych.leadership
    );

    let summary = format!(
        "[{}] {} ({}). {}, {}. Foca em {}.",
        info.cargo,
        info.nome,
        info.area,
        psych.communication,
        psych.work_approach,
        leading(&skills.hard_skills, 2)
    );

    AceMetadata {
        attributes,
        context: ctx,
        execution,
        resumo_compacto: summary,
        tags_busca: vec![
            info.cargo.clone(),
            info.area.clone(),
            psych.communication.clone(),
            psych.work_approach.clone(),
        ],
    }
}

impl Profile {
    /// Recompute the ACE views from the profile's current fields.
    pub fn ace_projection(&self) -> AceMetadata {
        summarize(
            &self.informacoes_basicas,
            &self.psicologia_comportamento,
            &self.habilidades,
            &self.contexto,
        )
    }
}

fn leading(items: &[String], count: usize) -> String {
    items
        .iter()
        .take(count)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_parts() -> (BasicInfo, Psychology, Skills, WorkContext) {
        let info = BasicInfo {
            nome: "Ana Silva".into(),
            genero: "Feminino".into(),
            idade: 31,
            cargo: "Pleno".into(),
            area: "Data Science".into(),
            tempo_empresa: "3 anos".into(),
            tempo_carreira: "5 anos".into(),
            formacao: "USP".into(),
            localizacao: "Recife, PE (Remoto)".into(),
            neurodivergencia: None,
        };
        let psych = Psychology {
            communication: "Conciso e objetivo".into(),
            work_approach: "Foco em qualidade".into(),
            conflict_management: "Racional".into(),
            technology_relation: "Pragmático".into(),
            leadership: "Mentor ativo".into(),
            process_relation: "Ágil purista".into(),
            stress_management: "Workaholic".into(),
            motivators: "Autonomia".into(),
        };
        let skills = Skills {
            hard_skills: vec![
                "Python".into(),
                "SQL".into(),
                "Spark".into(),
                "Airflow".into(),
            ],
            soft_skills: vec!["Comunicação".into()],
        };
        let context = WorkContext {
            framework_preferido: "Kanban".into(),
            opiniao_agil: "Cético".into(),
            desafio_atual: "Reestruturar o time após layoffs".into(),
            motivacao_atual: "Autonomia".into(),
        };
        (info, psych, skills, context)
    }

    #[test]
    fn test_exact_views() {
        let (info, psych, skills, context) = sample_parts();
        let ace = summarize(&info, &psych, &skills, &context);

        assert_eq!(
            ace.attributes,
            "Pleno | Data Science | 3 anos exp | Python, SQL, Spark"
        );
        assert_eq!(
            ace.context,
            "Desafio: Reestruturar o time após layoffs | Motivação: Autonomia | Framework: Kanban"
        );
        assert_eq!(
            ace.execution,
            "Conciso e objetivo | Foco em qualidade | Racional | Mentor ativo"
        );
        assert_eq!(
            ace.resumo_compacto,
            "[Pleno] Ana Silva (Data Science). Conciso e objetivo, Foco em qualidade. Foca em Python, SQL."
        );
        assert_eq!(
            ace.tags_busca,
            vec!["Pleno", "Data Science", "Conciso e objetivo", "Foco em qualidade"]
        );
    }

    #[test]
    fn test_short_skill_lists() {
        let (info, psych, mut skills, context) = sample_parts();
        skills.hard_skills.truncate(1);
        let ace = summarize(&info, &psych, &skills, &context);
        assert!(ace.attributes.ends_with("exp | Python"));
        assert!(ace.resumo_compacto.ends_with("Foca em Python."));
    }

    #[test]
    fn test_is_deterministic() {
        let (info, psych, skills, context) = sample_parts();
        assert_eq!(
            summarize(&info, &psych, &skills, &context),
            summarize(&info, &psych, &skills, &context)
        );
    }
}
