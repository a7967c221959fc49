//! Discovery Sessions
//!
//! Per-session, per-area note history. A session starts with one empty
//! progress record per fixed area; the consultant's recorded answers are
//! appended in order and never rewritten. Depth is simply the note count,
//! which is what the elicitation heuristics gate on.

use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::area::DiscoveryArea;

/// Ordered question/answer note history for one area in one session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaProgress {
    /// The topic area this progress belongs to
    pub area: DiscoveryArea,
    /// Free-text notes, one per answered question, in the order recorded
    pub notes: Vec<String>,
}

impl AreaProgress {
    /// Create empty progress for an area
    pub fn new(area: DiscoveryArea) -> Self {
        Self {
            area,
            notes: Vec::new(),
        }
    }

    /// Current depth: the number of questions answered so far
    pub fn depth(&self) -> usize {
        self.notes.len()
    }

    /// Append a note. Notes are never mutated or reordered after the fact.
    pub fn record_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    /// All notes joined for quality assessment
    pub fn combined_notes(&self) -> String {
        self.notes.join("\n")
    }
}

/// A discovery session for one prospect
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverySession {
    /// Unique session ID
    pub id: String,
    /// Prospect/company name
    pub prospect: String,
    /// Created timestamp (ISO-8601)
    pub created_at: String,
    /// Last updated timestamp (ISO-8601)
    pub updated_at: String,
    /// Per-area note history, one entry per fixed area, in questionnaire order
    pub areas: Vec<AreaProgress>,
}

impl DiscoverySession {
    /// Start a new session with empty progress for every area
    pub fn new(prospect: impl Into<String>) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            prospect: prospect.into(),
            created_at: now.clone(),
            updated_at: now,
            areas: DiscoveryArea::all()
                .iter()
                .map(|a| AreaProgress::new(*a))
                .collect(),
        }
    }

    /// Get the progress record for an area
    pub fn area(&self, area: DiscoveryArea) -> &AreaProgress {
        // Every fixed area is created at session start, so the lookup
        // cannot miss; index by enumeration order.
        &self.areas[Self::area_index(area)]
    }

    /// Record a consultant note against an area and touch the session
    pub fn record_note(&mut self, area: DiscoveryArea, note: impl Into<String>) {
        self.areas[Self::area_index(area)].record_note(note);
        self.updated_at = Utc::now().to_rfc3339();
    }

    /// Total notes recorded across all areas
    pub fn total_notes(&self) -> usize {
        self.areas.iter().map(|a| a.depth()).sum()
    }

    /// Export notes keyed by area display name, the shape the completeness
    /// aggregator consumes
    pub fn notes_by_area(&self) -> HashMap<String, Vec<String>> {
        self.areas
            .iter()
            .map(|a| (a.area.display_name().to_string(), a.notes.clone()))
            .collect()
    }

    /// Snapshot the session as JSON for handoff to the report pipeline
    pub fn snapshot(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "prospect": self.prospect,
            "createdAt": self.created_at,
            "updatedAt": self.updated_at,
            "totalNotes": self.total_notes(),
            "areas": self.areas.iter().map(|a| {
                serde_json::json!({
                    "area": a.area.as_str(),
                    "displayName": a.area.display_name(),
                    "depth": a.depth(),
                    "notes": a.notes,
                })
            }).collect::<Vec<_>>(),
        })
    }

    fn area_index(area: DiscoveryArea) -> usize {
        DiscoveryArea::all()
            .iter()
            .position(|a| *a == area)
            .unwrap_or(0)
    }
}
