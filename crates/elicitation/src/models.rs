//! Elicitation Models
//!
//! Data structures for note quality assessment and discovery completeness.

use serde::{Deserialize, Serialize};

/// Three-level quality classification for notes and sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    /// Strong signal coverage
    High,
    /// Partial signal coverage
    Medium,
    /// Little or no signal coverage
    Low,
}

impl QualityLevel {
    /// Classify from the number of true quality signals (out of four)
    pub fn from_signal_count(count: usize) -> Self {
        if count >= 3 {
            QualityLevel::High
        } else if count == 2 {
            QualityLevel::Medium
        } else {
            QualityLevel::Low
        }
    }

    /// Classify a session completeness percentage
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            QualityLevel::High
        } else if percentage >= 60 {
            QualityLevel::Medium
        } else {
            QualityLevel::Low
        }
    }

    /// Check if this level indicates strong coverage
    pub fn is_high(&self) -> bool {
        matches!(self, QualityLevel::High)
    }

    /// Points this level contributes toward the completeness rollup
    pub fn points(&self) -> u32 {
        match self {
            QualityLevel::High => 3,
            QualityLevel::Medium => 2,
            QualityLevel::Low => 1,
        }
    }
}

impl std::fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityLevel::High => write!(f, "high"),
            QualityLevel::Medium => write!(f, "medium"),
            QualityLevel::Low => write!(f, "low"),
        }
    }
}

/// Quality signals derived from a block of free-text discovery notes.
///
/// The four booleans are independent presence tests against fixed
/// vocabularies; `overall_quality` is always recomputed from them via
/// [`NoteQuality::from_signals`] and never stored separately, so the
/// classification cannot drift from the signals it summarizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteQuality {
    /// Text surfaced a risk/urgency/problem signal
    pub has_uncovered_complexity: bool,
    /// Text contains obligation language ("must", "need", "require", ...)
    pub has_specific_requirements: bool,
    /// Text contains a number adjacent to a unit (time, money, percent)
    pub has_quantification: bool,
    /// Text mentions systems, integrations, or other technical specifics
    pub has_technical_detail: bool,
    /// Derived classification: high if >= 3 signals, medium if exactly 2, else low
    pub overall_quality: QualityLevel,
}

impl NoteQuality {
    /// Build a quality record from the four signals, deriving the classification
    pub fn from_signals(
        has_uncovered_complexity: bool,
        has_specific_requirements: bool,
        has_quantification: bool,
        has_technical_detail: bool,
    ) -> Self {
        let count = [
            has_uncovered_complexity,
            has_specific_requirements,
            has_quantification,
            has_technical_detail,
        ]
        .iter()
        .filter(|&&s| s)
        .count();

        Self {
            has_uncovered_complexity,
            has_specific_requirements,
            has_quantification,
            has_technical_detail,
            overall_quality: QualityLevel::from_signal_count(count),
        }
    }

    /// Count of true signals (0-4)
    pub fn signal_count(&self) -> usize {
        [
            self.has_uncovered_complexity,
            self.has_specific_requirements,
            self.has_quantification,
            self.has_technical_detail,
        ]
        .iter()
        .filter(|&&s| s)
        .count()
    }
}

impl Default for NoteQuality {
    /// The zero value: all signals false, low quality.
    ///
    /// Callers with no notes yet must use this rather than omit the record.
    fn default() -> Self {
        Self::from_signals(false, false, false, false)
    }
}

/// Session-level completeness rollup across all discovery areas
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletenessReport {
    /// Rounded percentage of the maximum attainable points (0-100)
    pub percentage: u32,
    /// Classification of the percentage (>= 80 high, >= 60 medium)
    pub quality: QualityLevel,
    /// Human-readable descriptions of what is still missing, per area
    pub gaps: Vec<String>,
}
