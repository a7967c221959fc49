//! Dealscope - Discovery Engine Library
//!
//! Backend engine for the Dealscope sales-discovery tool. It drives the
//! structured questionnaire a consultant walks a prospect through:
//! - Discovery sessions with per-area, append-only note history
//! - Depth-gated question generation merging elicitation guidance with the
//!   static question-template table
//! - Session completeness rollups and report-context assembly
//!
//! The LLM completion client, website scraping, persistence, and UI live in
//! the surrounding application and consume this library.

pub mod services;
pub mod utils;

// Re-export the discovery surface
pub use services::discovery::{
    AreaProgress, DiscoveryArea, DiscoveryQuestion, DiscoverySession, QuestionGenerator,
    QuestionTemplates,
};
pub use utils::error::{AppError, AppResult};
