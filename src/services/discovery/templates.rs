//! Question Templates
//!
//! The static per-area, per-depth question-template table. The elicitation
//! heuristics decide *whether* to ask and *what to target*; these templates
//! are the presentation-layer phrasing the generated question starts from.
//!
//! Depths 0 through 4 each carry a template per area; depth 5 is the
//! terminal ceiling and takes no template. The table is validated at
//! startup: a missing area/depth entry is a configuration error, never a
//! silent fallback to the opener.

use std::collections::HashMap;

use crate::utils::error::{AppError, AppResult};

use super::area::DiscoveryArea;

use dealscope_elicitation::MAX_QUESTIONS_PER_AREA;

/// Placeholder substituted with the prospect name when a question is rendered
pub const PROSPECT_PLACEHOLDER: &str = "{prospect}";

/// Static question-template table, depth-indexed per area
#[derive(Debug, Clone)]
pub struct QuestionTemplates {
    entries: HashMap<DiscoveryArea, Vec<String>>,
}

impl Default for QuestionTemplates {
    fn default() -> Self {
        Self::builtin()
    }
}

impl QuestionTemplates {
    /// The built-in template table shipped with the engine
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();

        entries.insert(
            DiscoveryArea::BusinessOverview,
            vec![
                "What does {prospect} do, and what are the big goals for the next year?".to_string(),
                "Which part of the business is growing or changing fastest right now?".to_string(),
                "How do you measure success for that part of the business?".to_string(),
                "What would hitting those goals change for the team day to day?".to_string(),
                "Is there anything about the business context we haven't touched that I should understand?".to_string(),
            ],
        );

        entries.insert(
            DiscoveryArea::TechnologyStack,
            vec![
                "Walk me through the tools and systems {prospect} relies on day to day.".to_string(),
                "Which of those systems do people spend the most time in?".to_string(),
                "How do those systems talk to each other today - integrations, exports, retyping?".to_string(),
                "Which system would you replace tomorrow if you could, and why?".to_string(),
                "Who maintains these systems internally, and where do they need outside help?".to_string(),
            ],
        );

        entries.insert(
            DiscoveryArea::PainPoints,
            vec![
                "Where does the current way of working hurt the most for {prospect}?".to_string(),
                "When that goes wrong, what does it actually cost you - time, money, customers?".to_string(),
                "How are people working around it today?".to_string(),
                "What have you already tried to fix it, and what happened?".to_string(),
                "If nothing changes in the next year, where does this end up?".to_string(),
            ],
        );

        entries.insert(
            DiscoveryArea::TechnicalRequirements,
            vec![
                "If we solved the biggest problem for {prospect}, what would the solution have to do?".to_string(),
                "What does it need to connect to - systems, data sources, partners?".to_string(),
                "Are there constraints we must respect - compliance, hosting, security reviews?".to_string(),
                "What volumes are we designing for - users, records, transactions?".to_string(),
                "What would make a solution a non-starter for your technical team?".to_string(),
            ],
        );

        entries.insert(
            DiscoveryArea::BudgetTimeline,
            vec![
                "How is {prospect} thinking about budget and timing for this?".to_string(),
                "Is there a budget range already set aside, or does that come after scoping?".to_string(),
                "What is driving the timeline - a contract, a season, something breaking?".to_string(),
                "What happens to the budget if this slips a quarter?".to_string(),
                "Who signs off on spend at this level, and what do they need to see?".to_string(),
            ],
        );

        entries.insert(
            DiscoveryArea::DecisionProcess,
            vec![
                "Who at {prospect} is involved in deciding on something like this?".to_string(),
                "How have similar decisions been made here before?".to_string(),
                "Who feels the problem most, and who controls the budget?".to_string(),
                "What could stall or kill this internally?".to_string(),
                "What does the evaluation process look like from here - steps, people, timing?".to_string(),
            ],
        );

        Self { entries }
    }

    /// Look up the template for an area at a depth
    pub fn get(&self, area: DiscoveryArea, depth: usize) -> Option<&str> {
        self.entries
            .get(&area)
            .and_then(|templates| templates.get(depth))
            .map(|s| s.as_str())
    }

    /// Substitute placeholders into a template
    pub fn render(template: &str, prospect: &str) -> String {
        template.replace(PROSPECT_PLACEHOLDER, prospect)
    }

    /// Startup configuration-completeness check.
    ///
    /// Every area must carry a template for every depth 0 through
    /// `MAX_QUESTIONS_PER_AREA - 1`. Returns a configuration error naming
    /// every missing area/depth pair.
    pub fn validate(&self) -> AppResult<()> {
        let mut missing: Vec<String> = Vec::new();

        for area in DiscoveryArea::all() {
            for depth in 0..MAX_QUESTIONS_PER_AREA {
                if self.get(*area, depth).is_none() {
                    missing.push(format!("{} depth {}", area.display_name(), depth));
                }
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::config(format!(
                "question template table is incomplete: missing {}",
                missing.join(", ")
            )))
        }
    }
}
