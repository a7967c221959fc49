//! Elicitation Depth Manager
//!
//! Gates how many questions get asked per discovery area and describes, in
//! words, what the next question should target. Uses a rule-based approach
//! with the fixed vocabularies from `vocabulary` for fast, deterministic,
//! zero-cost classification in the style of a keyword intent classifier.

use regex::Regex;
use tracing::debug;

use crate::models::NoteQuality;
use crate::vocabulary::{
    COMPLEXITY_PATTERNS, QUANTIFICATION_PATTERN, REQUIREMENT_PATTERNS, TECHNICAL_PATTERNS,
};

/// Floor: every area gets at least this many questions before content is
/// allowed to end it.
pub const MIN_QUESTIONS_PER_AREA: usize = 2;

/// Ceiling: hard stop per area, regardless of note quality, to keep the
/// conversation out of rabbit holes.
pub const MAX_QUESTIONS_PER_AREA: usize = 5;

/// Depth and quality heuristics for discovery questioning.
///
/// Compiles the signal vocabularies once at construction and holds no
/// mutable state; every operation is a pure function of its inputs, so a
/// single instance can be shared freely or rebuilt at will.
pub struct ElicitationDepthManager {
    complexity_patterns: Vec<Regex>,
    requirement_patterns: Vec<Regex>,
    technical_patterns: Vec<Regex>,
    quantification: Regex,
}

impl Default for ElicitationDepthManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ElicitationDepthManager {
    /// Create a new manager with compiled signal patterns.
    pub fn new() -> Self {
        Self {
            complexity_patterns: Self::compile_patterns(COMPLEXITY_PATTERNS),
            requirement_patterns: Self::compile_patterns(REQUIREMENT_PATTERNS),
            technical_patterns: Self::compile_patterns(TECHNICAL_PATTERNS),
            quantification: Regex::new(QUANTIFICATION_PATTERN).unwrap(),
        }
    }

    /// Assess a block of free-text notes for the four quality signals.
    ///
    /// Each signal is a presence test: one match anywhere in the text sets
    /// the flag. Empty text yields the zero value (all false, low).
    pub fn assess_note_quality(&self, text: &str) -> NoteQuality {
        NoteQuality::from_signals(
            Self::matches_any(&self.complexity_patterns, text),
            Self::matches_any(&self.requirement_patterns, text),
            self.quantification.is_match(text),
            Self::matches_any(&self.technical_patterns, text),
        )
    }

    /// Decide whether to keep questioning an area.
    ///
    /// Decision table, evaluated in order:
    /// 1. Below the floor (`depth < 2`): always continue.
    /// 2. At or past the ceiling (`depth >= 5`): always stop. The ceiling is
    ///    terminal: once an area reaches it, this returns false forever.
    /// 3. In between: continue only while the notes carry a complexity
    ///    signal that has not yet been pinned down into a specific
    ///    requirement.
    pub fn should_continue_questioning(&self, depth: usize, quality: &NoteQuality) -> bool {
        if depth < MIN_QUESTIONS_PER_AREA {
            return true;
        }
        if depth >= MAX_QUESTIONS_PER_AREA {
            debug!(depth, "area hit the question ceiling, stopping");
            return false;
        }
        quality.has_uncovered_complexity && !quality.has_specific_requirements
    }

    /// Describe the single most useful probing angle for the next question.
    ///
    /// Priority chain: numeric grounding is sought first, then technical
    /// depth, then concrete requirements, and complexity exploration last,
    /// so the guidance degrades toward "synthesize" as evidence
    /// accumulates. Advisory text only; it carries no control-flow effect.
    pub fn depth_guidance(&self, depth: usize, quality: &NoteQuality) -> &'static str {
        if depth == 0 {
            "Ask broadly but specific to their context to open up the area."
        } else if !quality.has_quantification {
            "Probe for concrete numbers: time spent, frequency, costs, or headcount."
        } else if !quality.has_technical_detail {
            "Dig into technical specifics: the systems, tools, and integrations involved."
        } else if !quality.has_specific_requirements {
            "Extract concrete requirements: what must change, and what success looks like."
        } else if quality.has_uncovered_complexity {
            "Explore why this is complex: dependencies, constraints, and past attempts."
        } else {
            "Synthesize and confirm your understanding, then wrap up this area."
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn compile_patterns(raw: &[&str]) -> Vec<Regex> {
        raw.iter().filter_map(|p| Regex::new(p).ok()).collect()
    }

    fn matches_any(patterns: &[Regex], text: &str) -> bool {
        patterns.iter().any(|p| p.is_match(text))
    }
}

// ============================================================================
// Tests
// ============================================================================
