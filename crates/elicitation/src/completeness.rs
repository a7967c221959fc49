//! Discovery Completeness Rollup
//!
//! Rolls per-area note quality up into a session-level completeness
//! percentage, classification, and list of gap descriptions. Recomputed on
//! demand from the raw notes; never stored.

use std::collections::HashMap;

use tracing::debug;

use crate::manager::{ElicitationDepthManager, MIN_QUESTIONS_PER_AREA};
use crate::models::{CompletenessReport, QualityLevel};

impl ElicitationDepthManager {
    /// Calculate session-level discovery completeness.
    ///
    /// Each area with fewer than [`MIN_QUESTIONS_PER_AREA`] notes contributes
    /// nothing and emits a "needs more exploration" gap; every other area
    /// contributes 3/2/1 points for high/medium/low combined note quality,
    /// plus targeted gaps for missing quantification and (for areas whose
    /// name contains "Tech") missing technical detail.
    ///
    /// The percentage is the rounded share of the maximum attainable points
    /// (`3 * area_count`). An empty area map yields 0% / low / no gaps.
    /// Areas are processed in sorted name order so gap output is
    /// deterministic regardless of map iteration order.
    pub fn calculate_discovery_completeness(
        &self,
        notes_per_area: &HashMap<String, Vec<String>>,
    ) -> CompletenessReport {
        if notes_per_area.is_empty() {
            return CompletenessReport {
                percentage: 0,
                quality: QualityLevel::Low,
                gaps: Vec::new(),
            };
        }

        let mut areas: Vec<(&String, &Vec<String>)> = notes_per_area.iter().collect();
        areas.sort_by(|a, b| a.0.cmp(b.0));

        let mut total_points: u32 = 0;
        let mut gaps: Vec<String> = Vec::new();

        for (area, notes) in &areas {
            if notes.len() < MIN_QUESTIONS_PER_AREA {
                gaps.push(format!(
                    "{}: needs more exploration ({}/{} minimum)",
                    area,
                    notes.len(),
                    MIN_QUESTIONS_PER_AREA
                ));
                continue;
            }

            let combined = notes.join("\n");
            let quality = self.assess_note_quality(&combined);
            total_points += quality.overall_quality.points();

            if !quality.has_quantification {
                gaps.push(format!(
                    "{}: missing quantification (numbers, timeframes, or budget)",
                    area
                ));
            }
            if area.contains("Tech") && !quality.has_technical_detail {
                gaps.push(format!("{}: needs technical specifics", area));
            }
        }

        let max_points = 3 * areas.len() as u32;
        let percentage = ((total_points as f64 / max_points as f64) * 100.0).round() as u32;
        let quality = QualityLevel::from_percentage(percentage);

        debug!(
            areas = areas.len(),
            percentage,
            gap_count = gaps.len(),
            "calculated discovery completeness"
        );

        CompletenessReport {
            percentage,
            quality,
            gaps,
        }
    }
}
