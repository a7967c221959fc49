//! Question Generation
//!
//! Depth-gated question generation for discovery sessions. For each area the
//! generator assesses the accumulated notes, asks the elicitation manager
//! whether the area still warrants questioning, and merges the resulting
//! depth guidance with the static template for that area and depth.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use dealscope_elicitation::{
    CompletenessReport, ElicitationDepthManager, NoteQuality, MAX_QUESTIONS_PER_AREA,
};

use crate::utils::error::AppResult;

use super::area::DiscoveryArea;
use super::session::DiscoverySession;
use super::templates::QuestionTemplates;

/// A question generated for the consultant to ask next
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryQuestion {
    /// Unique question ID
    pub id: String,
    /// Area this question belongs to
    pub area: DiscoveryArea,
    /// Depth within the area (0-based count of questions already asked)
    pub depth: usize,
    /// The question text to display, rendered from the area/depth template
    pub question: String,
    /// Elicitation guidance: what kind of answer the consultant should push for
    pub guidance: String,
    /// Optional hint shown alongside the input field
    pub hint: Option<String>,
}

/// Generates the next discovery question by combining elicitation
/// heuristics with the static question-template table.
pub struct QuestionGenerator {
    templates: QuestionTemplates,
    manager: ElicitationDepthManager,
}

impl QuestionGenerator {
    /// Create a generator, validating the template table up front.
    ///
    /// Fails with a configuration error if any area/depth template is
    /// missing, so holes surface at startup rather than mid-session.
    pub fn new(templates: QuestionTemplates) -> AppResult<Self> {
        templates.validate()?;
        Ok(Self {
            templates,
            manager: ElicitationDepthManager::new(),
        })
    }

    /// Create a generator backed by the built-in template table
    pub fn with_builtin_templates() -> AppResult<Self> {
        Self::new(QuestionTemplates::builtin())
    }

    /// Assess the combined notes for one area of a session
    pub fn area_quality(&self, session: &DiscoverySession, area: DiscoveryArea) -> NoteQuality {
        self.manager
            .assess_note_quality(&session.area(area).combined_notes())
    }

    /// Generate the next question for an area, or `None` when the area is
    /// done (ceiling reached, or its content no longer warrants probing).
    pub fn next_question(
        &self,
        session: &DiscoverySession,
        area: DiscoveryArea,
    ) -> Option<DiscoveryQuestion> {
        let depth = session.area(area).depth();
        let quality = self.area_quality(session, area);

        if !self.manager.should_continue_questioning(depth, &quality) {
            debug!(
                session_id = %session.id,
                area = area.as_str(),
                depth,
                "area complete, no further questions"
            );
            return None;
        }

        let template = self.templates.get(area, depth)?;
        let guidance = self.manager.depth_guidance(depth, &quality);

        debug!(
            session_id = %session.id,
            area = area.as_str(),
            depth,
            quality = %quality.overall_quality,
            "generated next discovery question"
        );

        Some(DiscoveryQuestion {
            id: Uuid::new_v4().to_string(),
            area,
            depth,
            question: QuestionTemplates::render(template, &session.prospect),
            guidance: guidance.to_string(),
            hint: Some(format!(
                "Question {} of at most {} for this area",
                depth + 1,
                MAX_QUESTIONS_PER_AREA
            )),
        })
    }

    /// The first area, in questionnaire order, that still warrants
    /// questioning. `None` means the discovery conversation is complete.
    pub fn next_area(&self, session: &DiscoverySession) -> Option<DiscoveryArea> {
        DiscoveryArea::all().iter().copied().find(|area| {
            let depth = session.area(*area).depth();
            let quality = self.area_quality(session, *area);
            self.manager.should_continue_questioning(depth, &quality)
        })
    }

    /// Session-level completeness rollup across all areas
    pub fn session_completeness(&self, session: &DiscoverySession) -> CompletenessReport {
        self.manager
            .calculate_discovery_completeness(&session.notes_by_area())
    }
}
