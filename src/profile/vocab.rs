//! Static vocabularies the generator samples from.
//!
//! Every table here is immutable.

use std::fmt;

// ─────────────────────────────────────────────────────────────────
// Identity
// ─────────────────────────────────────────────────────────────────

pub const FIRST_NAMES: &[&str] = &[
    "Ana", "Bruno", "Carlos", "Daniela", "Eduardo", "Fernanda", "Gabriel", "Helena", "Igor",
    "Julia", "Kai", "Lucas", "Mariana", "Nicolas", "Olivia", "Pedro", "Quentin", "Rafaela",
    "Samuel", "Tatiana", "Ulysses", "Vanessa", "Wagner", "Xavier", "Yasmin", "Zoe", "Ali",
    "Fatima", "Hiroshi", "Yuki", "Chen", "Wei", "Priya", "Rahul", "Kwame", "Amara", "Diego",
    "Sofia", "Mateo", "Valentina", "Alex", "Jordan", "Casey", "Taylor", "Morgan", "Riley",
    "Avery", "Quinn", "Skyler", "Dakota",
];

pub const LAST_NAMES: &[&str] = &[
    "Silva", "Santos", "Oliveira", "Souza", "Rodrigues", "Ferreira", "Alves", "Pereira", "Lima",
    "Gomes", "Costa", "Ribeiro", "Martins", "Carvalho", "Almeida", "Lopes", "Soares",
    "Fernandes", "Vieira", "Barbosa", "Tanaka", "Suzuki", "Kim", "Lee", "Singh", "Patel",
    "Muller", "Schmidt", "Dubois", "Leroy", "Smith", "Johnson", "Williams", "Brown", "Jones",
    "Garcia", "Martinez", "Hernandez", "Lopez", "Gonzalez",
];

pub const GENDERS: &[&str] = &["Masculino", "Feminino", "Não-binário"];

pub const UNIVERSITIES: &[&str] = &[
    "USP", "UNICAMP", "UFRJ", "UFMG", "PUC-SP", "PUC-RS", "FGV", "Mackenzie", "FIAP", "FATEC",
    "MIT", "Stanford", "Harvard", "Oxford", "Cambridge", "Tsinghua", "University of Tokyo",
    "Autodidata", "Bootcamp Ironhack", "Bootcamp Le Wagon", "Bootcamp Rocketseat",
    "Udemy/Coursera",
];

pub const LOCATIONS: &[&str] = &[
    "São Paulo, SP (Híbrido)",
    "São Paulo, SP (Presencial)",
    "Rio de Janeiro, RJ (Remoto)",
    "Belo Horizonte, MG (Remoto)",
    "Curitiba, PR (Híbrido)",
    "Florianópolis, SC (Remoto)",
    "Recife, PE (Remoto)",
    "Porto Alegre, RS (Híbrido)",
    "Brasília, DF (Presencial)",
    "Remoto (Nomade Digital)",
    "Campinas, SP (Híbrido)",
    "São José dos Campos, SP (Presencial)",
];

/// Probability that the neurodivergence attribute is drawn at all.
pub const NEURODIVERGENCE_GATE: f64 = 0.15;

// ─────────────────────────────────────────────────────────────────
// Skills
// ─────────────────────────────────────────────────────────────────

pub const SOFT_SKILLS: &[&str] = &[
    "Comunicação",
    "Liderança",
    "Resolução de Problemas",
    "Empatia",
    "Negociação",
];

/// Pool used for non-tech areas without a skill track.
pub const GENERIC_SKILLS: &[&str] = &["Comunicação", "Organização", "Office"];

/// Smallest and largest number of hard skills drawn per profile.
pub const HARD_SKILL_RANGE: (usize, usize) = (3, 6);

/// Named skill table an area draws its hard skills from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillTrack {
    Desenvolvimento,
    Data,
    DevOps,
    Product,
    Design,
    Management,
    Security,
    RecursosHumanos,
    Financeiro,
    Marketing,
    Vendas,
    Operacoes,
    Juridico,
}

impl SkillTrack {
    /// Tracks backing tech areas.
    pub const TECH: &'static [SkillTrack] = &[
        SkillTrack::Desenvolvimento,
        SkillTrack::Data,
        SkillTrack::DevOps,
        SkillTrack::Product,
        SkillTrack::Design,
        SkillTrack::Management,
        SkillTrack::Security,
    ];

    /// Tracks backing non-tech areas.
    pub const NON_TECH: &'static [SkillTrack] = &[
        SkillTrack::RecursosHumanos,
        SkillTrack::Financeiro,
        SkillTrack::Marketing,
        SkillTrack::Vendas,
        SkillTrack::Operacoes,
        SkillTrack::Juridico,
    ];

    /// Tech table keyed by the first space-separated word of `area`.
    pub fn for_tech_area(area: &str) -> Option<SkillTrack> {
        let word = area.split(' ').next().unwrap_or(area);
        SkillTrack::TECH.iter().copied().find(|t| t.key() == word)
    }

    /// First non-tech table whose key occurs anywhere in `area`.
    pub fn for_non_tech_area(area: &str) -> Option<SkillTrack> {
        SkillTrack::NON_TECH
            .iter()
            .copied()
            .find(|t| area.contains(t.key()))
    }

    /// Lookup key matched against area labels.
    pub fn key(&self) -> &'static str {
        match self {
            SkillTrack::Desenvolvimento => "Desenvolvimento",
            SkillTrack::Data => "Data",
            SkillTrack::DevOps => "DevOps",
            SkillTrack::Product => "Product",
            SkillTrack::Design => "Design",
            SkillTrack::Management => "Management",
            SkillTrack::Security => "Security",
            SkillTrack::RecursosHumanos => "Recursos Humanos",
            SkillTrack::Financeiro => "Financeiro",
            SkillTrack::Marketing => "Marketing",
            SkillTrack::Vendas => "Vendas",
            SkillTrack::Operacoes => "Operações",
            SkillTrack::Juridico => "Jurídico",
        }
    }

    pub fn skills(&self) -> &'static [&'static str] {
        match self {
            SkillTrack::Desenvolvimento => &[
                "Java", "Python", "JavaScript", "TypeScript", "React", "Node.js", "C#", ".NET",
                "Go", "Rust", "Docker", "Kubernetes", "AWS", "Azure",
            ],
            SkillTrack::Data => &[
                "Python", "SQL", "Spark", "Hadoop", "Pandas", "TensorFlow", "PyTorch", "Tableau",
                "PowerBI", "Airflow", "Snowflake",
            ],
            SkillTrack::DevOps => &[
                "Terraform", "Ansible", "Jenkins", "GitLab CI", "Prometheus", "Grafana", "Linux",
                "Bash", "Python", "Go",
            ],
            SkillTrack::Product => &[
                "Jira", "Confluence", "Figma", "Miro", "Google Analytics", "Amplitude", "SQL",
                "Roadmapping", "User Research",
            ],
            SkillTrack::Design => &[
                "Figma", "Adobe XD", "Sketch", "Photoshop", "Illustrator", "Prototyping",
                "User Testing", "HTML/CSS",
            ],
            SkillTrack::Management => &[
                "Scrum", "Kanban", "SAFe", "OKRs", "People Management", "Strategic Planning",
                "Budgeting", "Hiring",
            ],
            SkillTrack::Security => &[
                "OWASP", "Pen Testing", "Network Security", "Cryptography", "Compliance",
                "ISO 27001", "Python", "Bash",
            ],
            SkillTrack::RecursosHumanos => &[
                "Gestão de Pessoas", "Recrutamento e Seleção", "Legislação Trabalhista",
                "Treinamento", "Cultura Organizacional", "Negociação", "LinkedIn Recruiter",
            ],
            SkillTrack::Financeiro => &[
                "Excel Avançado", "Modelagem Financeira", "Contabilidade", "Auditoria", "SAP",
                "Gestão de Orçamento", "Matemática Financeira",
            ],
            SkillTrack::Marketing => &[
                "SEO", "Google Analytics", "Copywriting", "Gestão de Redes Sociais", "Branding",
                "Adobe Creative Suite", "CRM",
            ],
            SkillTrack::Vendas => &[
                "Negociação", "CRM (Salesforce/HubSpot)", "Prospecção", "Venda Consultiva",
                "Oratória", "Gestão de Pipeline",
            ],
            SkillTrack::Operacoes => &[
                "Gestão de Projetos", "Excel", "Organização", "Logística",
                "Gestão de Fornecedores", "Processos Administrativos",
            ],
            SkillTrack::Juridico => &[
                "Direito Contratual", "Compliance", "LGPD", "Propriedade Intelectual",
                "Negociação", "Redação Jurídica",
            ],
        }
    }
}

impl fmt::Display for SkillTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Tech areas without a track draw from this one.
pub const DEFAULT_TECH_TRACK: SkillTrack = SkillTrack::Desenvolvimento;

// ─────────────────────────────────────────────────────────────────
// Areas
// ─────────────────────────────────────────────────────────────────

pub const TECH_AREAS: &[&str] = &[
    "Desenvolvimento (Frontend)",
    "Desenvolvimento (Backend)",
    "Desenvolvimento (Full Stack)",
    "Desenvolvimento (Mobile)",
    "DevOps/SRE",
    "Data Engineering",
    "Data Science",
    "Security/InfoSec",
    "QA/Testing",
    "UX/UI Design",
    "Product Management",
    "Project Management",
    "Architecture",
    "Support/Customer Success",
];

pub const NON_TECH_AREAS: &[&str] = &[
    "Recursos Humanos (Recrutamento)",
    "Recursos Humanos (Business Partner)",
    "Recursos Humanos (Treinamento)",
    "Financeiro (Contas a Pagar)",
    "Financeiro (Planejamento)",
    "Financeiro (Controladoria)",
    "Marketing (Redes Sociais)",
    "Marketing (Branding)",
    "Marketing (Performance)",
    "Vendas (SDR)",
    "Vendas (Executivo de Contas)",
    "Vendas (Customer Success)",
    "Operações (Facilities)",
    "Operações (Administrativo)",
    "Jurídico (Contratos)",
    "Jurídico (Compliance)",
];

pub const TECH_LEADERSHIP_PREFIX: &str = "Gestão Estratégica de ";
pub const NON_TECH_LEADERSHIP_PREFIX: &str = "Diretoria de ";

/// Marker that flags an area label as management-flavored.
pub const MANAGEMENT_AREA_MARKER: &str = "Gestão";

// ─────────────────────────────────────────────────────────────────
// Context
// ─────────────────────────────────────────────────────────────────

pub const FRAMEWORKS: &[&str] = &[
    "Scrum",
    "Kanban",
    "SAFe",
    "LeSS",
    "XP",
    "Waterfall (Legacy)",
    "Shape Up",
];

pub const TECH_AGILE_OPINIONS: &[&str] = &["Entusiasta", "Cético", "Indiferente", "Pragmático"];

pub const NON_TECH_AGILE_OPINIONS: &[&str] =
    &["Curioso", "Confuso", "Indiferente", "Acha burocrático"];

/// Framework value for non-tech profiles with no exposure.
pub const NO_FRAMEWORK: &str = "N/A";

/// Probability that a non-tech profile has any framework exposure.
pub const NON_TECH_FRAMEWORK_EXPOSURE: f64 = 0.3;

pub const LIGHT_FRAMEWORKS: &[&str] = &["Kanban (Básico)", "Scrum (Ouvinte)", "Nenhum"];

pub const TECH_CHALLENGES: [&str; 2] = [
    "Entregar o projeto X dentro do prazo apertado",
    "Reestruturar o time após layoffs",
];

pub const NON_TECH_CHALLENGES: &[&str] = &[
    "Bater a meta do trimestre",
    "Organizar a festa de fim de ano",
    "Contratar 10 pessoas em 1 mês",
    "Reduzir custos operacionais",
    "Lidar com reclamações de clientes",
    "Implementar novo sistema de ERP",
];

pub const CAREER_ORIGINS: &[&str] =
    &["curiosidade", "necessidade", "indicação", "influência familiar"];

/// Inclusive bounds for the "companies worked at" figure in the story.
pub const PREVIOUS_EMPLOYERS: (u32, u32) = (1, 5);

pub const COGNITIVE_BIASES: &[&str] = &[
    "Viés de Confirmação: Favorece informações que confirmam suas crenças.",
    "Viés do Status Quo: Prefere manter as coisas como estão.",
    "Aversão à Perda: Medo de perder supera desejo de ganhar.",
    "Efeito Dunning-Kruger: Superestima próprias habilidades.",
    "Viés de Ancoragem: Depende demais da primeira informação recebida.",
    "Viés de Autoridade: Aceita opiniões de figuras de autoridade sem questionar.",
];

// ─────────────────────────────────────────────────────────────────
// Psychology
// ─────────────────────────────────────────────────────────────────

/// The eight behavioral dimensions, in export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PsychDimension {
    Communication,
    WorkApproach,
    ConflictManagement,
    TechnologyRelation,
    Leadership,
    ProcessRelation,
    StressManagement,
    Motivators,
}

impl PsychDimension {
    pub const ALL: [PsychDimension; 8] = [
        PsychDimension::Communication,
        PsychDimension::WorkApproach,
        PsychDimension::ConflictManagement,
        PsychDimension::TechnologyRelation,
        PsychDimension::Leadership,
        PsychDimension::ProcessRelation,
        PsychDimension::StressManagement,
        PsychDimension::Motivators,
    ];

    /// Key used in `psicologia_comportamento`.
    pub fn name(&self) -> &'static str {
        match self {
            PsychDimension::Communication => "Estilo de Comunicação",
            PsychDimension::WorkApproach => "Abordagem ao Trabalho",
            PsychDimension::ConflictManagement => "Gestão de Conflitos",
            PsychDimension::TechnologyRelation => "Relação com Tecnologia",
            PsychDimension::Leadership => "Liderança e Influência",
            PsychDimension::ProcessRelation => "Relação com Processos",
            PsychDimension::StressManagement => "Gestão de Estresse",
            PsychDimension::Motivators => "Motivadores Principais",
        }
    }

    pub fn traits(&self) -> &'static [&'static str] {
        match self {
            PsychDimension::Communication => &[
                "Direto e assertivo",
                "Diplomático e cauteloso",
                "Verboso e detalhista",
                "Conciso e objetivo",
                "Formal e estruturado",
                "Casual e flexível",
                "Proativo",
                "Reservado",
            ],
            PsychDimension::WorkApproach => &[
                "Metódico e planejador",
                "Improvisador e adaptável",
                "Foco em qualidade",
                "Foco em velocidade",
                "Inovador/experimental",
                "Conservador/tradicional",
                "Generalista",
                "Especialista",
                "Independente",
                "Colaborativo",
            ],
            PsychDimension::ConflictManagement => &[
                "Confrontador direto",
                "Evitador de conflitos",
                "Mediador natural",
                "Tomador de lados",
                "Focado em soluções",
                "Focado em causas",
                "Emocional",
                "Racional",
            ],
            PsychDimension::TechnologyRelation => &[
                "Early adopter",
                "Cético com novidades",
                "Pragmático",
                "Idealista tecnológico",
                "Code-first",
                "Architecture-first",
                "Open source enthusiast",
                "Enterprise-focused",
            ],
            PsychDimension::Leadership => &[
                "Líder nato",
                "Contribuidor individual",
                "Mentor ativo",
                "Focado na entrega",
                "Político/networker",
                "Técnico puro",
                "Visionário",
                "Executor",
            ],
            PsychDimension::ProcessRelation => &[
                "Seguidor rigoroso",
                "Questionador constante",
                "Criador de processos",
                "Anarquista metodológico",
                "Documentador compulsivo",
                "Código auto-explicativo",
                "Ágil purista",
                "Pragmático híbrido",
            ],
            PsychDimension::StressManagement => &[
                "Resiliente sob pressão",
                "Necessita ambiente estável",
                "Thrives no caos",
                "Precisa de previsibilidade",
                "Workaholic",
                "Work-life balance advocator",
            ],
            PsychDimension::Motivators => &[
                "Crescimento técnico",
                "Crescimento de carreira",
                "Impacto no produto",
                "Reconhecimento pessoal",
                "Estabilidade",
                "Desafios constantes",
                "Autonomia",
                "Direcionamento claro",
                "Propósito",
                "Dinheiro",
            ],
        }
    }
}

impl fmt::Display for PsychDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
