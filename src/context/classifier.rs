/*!
 * Keyword heuristics describing a sample of source texts.
 *
 * Two independent analyses run over the lower-cased concatenation of the
 * samples:
 * - pattern analysis picks a content type, tone, audience and a list of
 *   special considerations from fixed vocabularies
 * - domain detection weighs whole-word keyword hits per domain and derives a
 *   confidence percentage
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Confidence reported when no domain keyword matched
pub const DEFAULT_CONFIDENCE: u32 = 50;

/// Upper bound for a computed confidence
pub const MAX_CONFIDENCE: u32 = 95;

/// Closed set of content domains.
///
/// `Domain::ALL` is also the tie-break order: a domain only replaces the
/// current best on a strictly greater weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Educational,
    OccupationalHealthSafety,
    Technical,
    Corporate,
}

impl Domain {
    /// Enumeration and tie-break order
    pub const ALL: [Domain; 4] = [
        Domain::Educational,
        Domain::OccupationalHealthSafety,
        Domain::Technical,
        Domain::Corporate,
    ];

    /// Stable identifier
    pub fn key(&self) -> &'static str {
        match self {
            Self::Educational => "educational",
            Self::OccupationalHealthSafety => "occupational-health-safety",
            Self::Technical => "technical",
            Self::Corporate => "corporate",
        }
    }

    /// Label used in context blocks
    pub fn label(&self) -> &'static str {
        match self {
            Self::Educational => "Educational / e-learning",
            Self::OccupationalHealthSafety => "Occupational health and safety (PRL)",
            Self::Technical => "Technical",
            Self::Corporate => "Corporate / business",
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Educational => &[
                "course", "courses", "curso", "cursos", "lesson", "lessons", "lección",
                "lecciones", "module", "modules", "módulo", "módulos", "student", "students",
                "estudiante", "estudiantes", "learning", "aprendizaje", "quiz", "exam", "examen",
                "training", "formación", "evaluación", "assessment", "teacher", "profesor",
            ],
            Self::OccupationalHealthSafety => &[
                "prl", "safety", "seguridad", "risk", "risks", "riesgo", "riesgos", "hazard",
                "hazards", "peligro", "prevention", "prevención", "accident", "accidents",
                "accidente", "accidentes", "ergonomics", "ergonomía", "ergonómico", "ppe", "epi",
                "epis", "occupational", "laboral", "injury", "lesión",
            ],
            Self::Technical => &[
                "software", "hardware", "system", "systems", "sistema", "sistemas",
                "configuration", "configuración", "install", "installation", "instalación",
                "server", "servidor", "database", "network", "device", "devices", "dispositivo",
                "api", "technical", "técnico", "maintenance", "mantenimiento",
            ],
            Self::Corporate => &[
                "company", "empresa", "business", "negocio", "employee", "employees", "empleado",
                "empleados", "client", "clients", "cliente", "clientes", "management", "gestión",
                "policy", "política", "strategy", "estrategia", "corporate", "corporativo",
                "manager",
            ],
        }
    }
}

/// Whole-word, case-insensitive matcher per domain, in `Domain::ALL` order
static DOMAIN_MATCHERS: Lazy<Vec<(Domain, Regex)>> = Lazy::new(|| {
    Domain::ALL
        .iter()
        .map(|domain| {
            let alternation = domain
                .keywords()
                .iter()
                .map(|k| regex::escape(k))
                .collect::<Vec<_>>()
                .join("|");
            let pattern = format!(r"(?i)\b(?:{})\b", alternation);
            (*domain, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// Outcome of domain detection
#[derive(Debug, Clone, PartialEq)]
pub struct DomainClassification {
    pub domain: Domain,
    /// Keyword hits of the selected domain
    pub weight: usize,
    /// Percentage in `0..=95`; 50 when nothing matched
    pub confidence: u32,
    /// Hits per domain, in `Domain::ALL` order
    pub weights: Vec<(Domain, usize)>,
}

/// Rule applied during pattern analysis
struct PatternRule {
    pattern: Regex,
    content_type: Option<&'static str>,
    tone: Option<&'static str>,
    audience: Option<&'static str>,
    considerations: &'static [&'static str],
}

/// Pattern rules in evaluation order; later matches overwrite scalar fields
static PATTERN_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![
        // Course structure and learning vocabulary
        PatternRule {
            pattern: Regex::new(
                r"\b(?:learn\w*|lesson\w*|course\w*|module\w*|quiz\w*|student\w*|objective\w*|aprend\w*|curso\w*|lecci\w*)\b",
            )
            .unwrap(),
            content_type: Some("Training course content"),
            tone: Some("Clear, instructive and encouraging"),
            audience: Some("Learners"),
            considerations: &["learning flow"],
        },
        // Interface strings
        PatternRule {
            pattern: Regex::new(
                r"\b(?:click\w*|button\w*|select\w*|continue|next|submit|menu|screen|drag|pulsa\w*|siguiente|continuar)\b",
            )
            .unwrap(),
            content_type: Some("Interactive course interface"),
            tone: None,
            audience: None,
            considerations: &["UI elements", "interaction clarity"],
        },
        // Procedures and systems
        PatternRule {
            pattern: Regex::new(
                r"\b(?:system\w*|software|configur\w*|install\w*|device\w*|procedure\w*|specification\w*|sistema\w*|procedimiento\w*)\b",
            )
            .unwrap(),
            content_type: None,
            tone: Some("Precise and unambiguous"),
            audience: Some("Professionals with domain expertise"),
            considerations: &["technical accuracy"],
        },
        // Workplace safety
        PatternRule {
            pattern: Regex::new(
                r"\b(?:safety|hazard\w*|risk\w*|accident\w*|ergonom\w*|seguridad|riesgo\w*|prevenci\w*)\b",
            )
            .unwrap(),
            content_type: Some("Workplace safety training"),
            tone: Some("Clear, direct and safety-focused"),
            audience: Some("Workers and supervisors"),
            considerations: &[],
        },
        // Organisation and business
        PatternRule {
            pattern: Regex::new(
                r"\b(?:company|employee\w*|business|policy|policies|client\w*|empresa\w*|emplead\w*)\b",
            )
            .unwrap(),
            content_type: None,
            tone: Some("Professional and formal"),
            audience: Some("Company employees"),
            considerations: &[],
        },
    ]
});

/// Outcome of pattern analysis
#[derive(Debug, Clone, PartialEq)]
pub struct ContentAnalysis {
    pub content_type: String,
    pub tone: String,
    pub audience: String,
    /// Tags in first-detected order
    pub special_considerations: Vec<String>,
}

/// Lower-cased concatenation of all samples
fn combined_text(samples: &[String]) -> String {
    samples.join(" ").to_lowercase()
}

/// Default content type derived from the caller's hint, e.g. `Educational content`
fn content_type_from_hint(hint: &str) -> String {
    let hint = hint.trim();
    let mut chars = hint.chars();
    match chars.next() {
        Some(first) => format!("{}{} content", first.to_uppercase(), chars.as_str()),
        None => "General content".to_string(),
    }
}

/// Run the pattern rules over the samples
pub fn analyze_patterns(samples: &[String], content_type_hint: &str) -> ContentAnalysis {
    let text = combined_text(samples);
    let mut analysis = ContentAnalysis {
        content_type: content_type_from_hint(content_type_hint),
        tone: "Professional and clear".to_string(),
        audience: "General adult audience".to_string(),
        special_considerations: Vec::new(),
    };

    for rule in PATTERN_RULES.iter().filter(|r| r.pattern.is_match(&text)) {
        if let Some(content_type) = rule.content_type {
            analysis.content_type = content_type.to_string();
        }
        if let Some(tone) = rule.tone {
            analysis.tone = tone.to_string();
        }
        if let Some(audience) = rule.audience {
            analysis.audience = audience.to_string();
        }
        analysis
            .special_considerations
            .extend(rule.considerations.iter().map(|c| c.to_string()));
    }

    analysis
}

/// Weigh every domain and pick the heaviest
pub fn detect_domain(samples: &[String]) -> DomainClassification {
    let text = combined_text(samples);

    let weights: Vec<(Domain, usize)> = DOMAIN_MATCHERS
        .iter()
        .map(|(domain, matcher)| (*domain, matcher.find_iter(&text).count()))
        .collect();

    let mut selected = Domain::ALL[0];
    let mut max_weight = 0;
    for (domain, weight) in &weights {
        if *weight > max_weight {
            selected = *domain;
            max_weight = *weight;
        }
    }

    let confidence = if max_weight > 0 && !samples.is_empty() {
        let ratio = max_weight as f64 / samples.len() as f64 * 100.0;
        (ratio.round() as u32).min(MAX_CONFIDENCE)
    } else {
        DEFAULT_CONFIDENCE
    };

    DomainClassification {
        domain: selected,
        weight: max_weight,
        confidence,
        weights,
    }
}

/// Terminology guidance for a domain key; unknown keys get a generic phrase
pub fn terminology_approach(domain_key: &str) -> &'static str {
    match domain_key {
        "educational" => {
            "Use clear pedagogical vocabulary and keep learning objectives and assessment terms consistent across modules"
        }
        "occupational-health-safety" => {
            "Use the official occupational health and safety terminology of the target locale (regulations, PPE, risk categories) without paraphrasing"
        }
        "technical" => {
            "Keep product names, commands and established technical terms; translate descriptions precisely and consistently"
        }
        "corporate" => {
            "Follow standard business terminology and the organisation's established names for roles, departments and policies"
        }
        _ => "Use consistent, domain-appropriate terminology throughout",
    }
}
