//! Discovery Service
//!
//! Structured sales-discovery questionnaire orchestration. Walks a prospect
//! through a fixed set of topic areas, gating question depth per area with
//! the elicitation heuristics and merging depth guidance with the static
//! question-template table.
//!
//! ## Architecture
//! - `area.rs` - The fixed enumerated discovery areas
//! - `session.rs` - Per-session, per-area append-only note history
//! - `templates.rs` - Static per-area/per-depth question templates with startup validation
//! - `question_gen.rs` - Depth-gated next-question and next-area selection
//! - `report.rs` - Discovery context block and report prompt assembly

pub mod area;
pub mod question_gen;
pub mod report;
pub mod session;
pub mod templates;

pub use area::DiscoveryArea;
pub use question_gen::{DiscoveryQuestion, QuestionGenerator};
pub use report::{build_report_prompt, format_discovery_context};
pub use session::{AreaProgress, DiscoverySession};
pub use templates::QuestionTemplates;
