//! Discovery Areas
//!
//! The fixed enumerated topic areas of the structured discovery
//! questionnaire. Every session carries note history for all of them;
//! enumeration order is the order a consultant normally works through.

use serde::{Deserialize, Serialize};

/// One fixed topic area within the discovery questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryArea {
    /// What the prospect's business does and where it is headed
    BusinessOverview,
    /// Tools and systems the prospect runs today
    TechnologyStack,
    /// Where the current setup hurts
    PainPoints,
    /// What a solution must concretely do
    TechnicalRequirements,
    /// Money and time available for a change
    BudgetTimeline,
    /// Who decides, and how
    DecisionProcess,
}

impl DiscoveryArea {
    /// All areas, in questionnaire order
    pub fn all() -> &'static [DiscoveryArea] {
        &[
            DiscoveryArea::BusinessOverview,
            DiscoveryArea::TechnologyStack,
            DiscoveryArea::PainPoints,
            DiscoveryArea::TechnicalRequirements,
            DiscoveryArea::BudgetTimeline,
            DiscoveryArea::DecisionProcess,
        ]
    }

    /// Get the human-readable name shown to consultants and used as the
    /// key in completeness rollups
    pub fn display_name(&self) -> &'static str {
        match self {
            DiscoveryArea::BusinessOverview => "Business Overview & Goals",
            DiscoveryArea::TechnologyStack => "Current Technology Stack",
            DiscoveryArea::PainPoints => "Pain Points & Challenges",
            DiscoveryArea::TechnicalRequirements => "Technical Requirements",
            DiscoveryArea::BudgetTimeline => "Budget & Timeline",
            DiscoveryArea::DecisionProcess => "Decision Process & Stakeholders",
        }
    }

    /// Get the string form used for storage and wire payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscoveryArea::BusinessOverview => "business_overview",
            DiscoveryArea::TechnologyStack => "technology_stack",
            DiscoveryArea::PainPoints => "pain_points",
            DiscoveryArea::TechnicalRequirements => "technical_requirements",
            DiscoveryArea::BudgetTimeline => "budget_timeline",
            DiscoveryArea::DecisionProcess => "decision_process",
        }
    }

    /// Parse from the storage string form
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "business_overview" => Some(DiscoveryArea::BusinessOverview),
            "technology_stack" => Some(DiscoveryArea::TechnologyStack),
            "pain_points" => Some(DiscoveryArea::PainPoints),
            "technical_requirements" => Some(DiscoveryArea::TechnicalRequirements),
            "budget_timeline" => Some(DiscoveryArea::BudgetTimeline),
            "decision_process" => Some(DiscoveryArea::DecisionProcess),
            _ => None,
        }
    }
}

impl std::fmt::Display for DiscoveryArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
