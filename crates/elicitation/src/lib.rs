//! Dealscope Elicitation Heuristics
//!
//! Rule-based depth and quality heuristics for structured sales-discovery
//! questioning. This crate decides when to keep probing a discovery area
//! versus move on, scores free-text notes for completeness signal, and rolls
//! per-area quality up into a session-level completeness report:
//!
//! - `models` - Quality data types (QualityLevel, NoteQuality, CompletenessReport)
//! - `vocabulary` - Fixed keyword/pattern vocabularies behind the quality signals
//! - `manager` - ElicitationDepthManager (continue/stop gate, note assessment, depth guidance)
//! - `completeness` - Session-level completeness rollup
//!
//! Everything here is synchronous, CPU-only, and deterministic: no I/O, no
//! shared mutable state. The surrounding orchestration layer (question
//! templates, sessions, report assembly) lives in the main crate's
//! `services::discovery` module.

pub mod completeness;
pub mod manager;
pub mod models;
pub mod vocabulary;

// Re-export core model types
pub use models::{CompletenessReport, NoteQuality, QualityLevel};

// Re-export the manager
pub use manager::{ElicitationDepthManager, MAX_QUESTIONS_PER_AREA, MIN_QUESTIONS_PER_AREA};
