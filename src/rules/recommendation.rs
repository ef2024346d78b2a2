use serde::{Deserialize, Serialize};

/// An unprioritized candidate recommendation, as emitted by a heuristic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draft {
    /// Short imperative title, unique per rule (dedup key).
    pub title: String,
    /// Human-readable justification, usually with counts from the
    /// matching collection.
    pub description: String,
    /// Recommendation category.
    pub category: Category,
    /// The heuristic's own severity estimate.
    pub impact: Level,
    /// Estimated remediation effort.
    pub effort: Level,
    /// Optional quantified benefit (e.g. "월 $45 절감 가능"). Presence
    /// influences priority resolution.
    pub quantitative_benefit: Option<String>,
}

/// A finalized recommendation: a draft plus its resolved priority.
/// Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub impact: Level,
    pub effort: Level,
    pub quantitative_benefit: Option<String>,
    pub priority: Priority,
}

impl Recommendation {
    pub fn from_draft(draft: Draft, priority: Priority) -> Self {
        Self {
            title: draft.title,
            description: draft.description,
            category: draft.category,
            impact: draft.impact,
            effort: draft.effort,
            quantitative_benefit: draft.quantitative_benefit,
            priority,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    SecurityRisk,
    CostImpact,
    Compliance,
    Performance,
    Monitoring,
    Optimization,
    BestPractice,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SecurityRisk => write!(f, "Security Risk"),
            Self::CostImpact => write!(f, "Cost Impact"),
            Self::Compliance => write!(f, "Compliance"),
            Self::Performance => write!(f, "Performance"),
            Self::Monitoring => write!(f, "Monitoring"),
            Self::Optimization => write!(f, "Optimization"),
            Self::BestPractice => write!(f, "Best Practice"),
        }
    }
}

/// Three-grade scale used for both impact and effort estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Final priority tier. Ordered so `max()` picks the most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Korean tier label used in rendered reports.
    pub fn label_ko(&self) -> &'static str {
        match self {
            Self::High => "높은 우선순위",
            Self::Medium => "중간 우선순위",
            Self::Low => "낮은 우선순위",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Analysis domain a heuristic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Networking,
    Compute,
    Security,
}

impl Domain {
    pub fn from_str_lenient(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "networking" | "network" | "net" => Some(Self::Networking),
            "compute" | "ec2" => Some(Self::Compute),
            "security" | "sec" => Some(Self::Security),
            _ => None,
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Networking => write!(f, "networking"),
            Self::Compute => write!(f, "compute"),
            Self::Security => write!(f, "security"),
        }
    }
}

/// Metadata about a heuristic rule, used for `list-rules` output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleMetadata {
    pub id: String,
    pub name: String,
    pub description: String,
    pub domain: Domain,
    pub category: Category,
    pub default_impact: Level,
    pub default_effort: Level,
}
