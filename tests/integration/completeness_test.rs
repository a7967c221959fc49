//! Completeness and Report Integration Tests
//!
//! Tests for the session-level completeness rollup and the report-context
//! assembly consumed by the (external) report-generation caller.

use dealscope::services::discovery::{
    build_report_prompt, format_discovery_context, DiscoveryArea, DiscoverySession,
    QuestionGenerator,
};
use dealscope_elicitation::QualityLevel;

const RESOLVED_NOTE: &str =
    "We need the ERP integration fixed; the broken sync costs 10 hours a week";

fn generator() -> QuestionGenerator {
    QuestionGenerator::with_builtin_templates().unwrap()
}

#[test]
fn test_fresh_session_scores_zero_with_a_gap_per_area() {
    let session = DiscoverySession::new("Acme");
    let report = generator().session_completeness(&session);

    assert_eq!(report.percentage, 0);
    assert_eq!(report.quality, QualityLevel::Low);
    assert_eq!(report.gaps.len(), DiscoveryArea::all().len());
    for gap in &report.gaps {
        assert!(gap.contains("needs more exploration"));
        assert!(gap.contains("0/2"));
    }
}

#[test]
fn test_completeness_rises_as_areas_are_explored() {
    let mut session = DiscoverySession::new("Acme");
    let generator = generator();

    let mut last_percentage = 0;
    for area in DiscoveryArea::all() {
        session.record_note(*area, RESOLVED_NOTE);
        session.record_note(*area, RESOLVED_NOTE);

        let report = generator.session_completeness(&session);
        assert!(
            report.percentage > last_percentage,
            "completeness did not rise after exploring {}",
            area
        );
        last_percentage = report.percentage;
    }

    assert_eq!(last_percentage, 100);
}

#[test]
fn test_partially_explored_session_is_medium_at_best() {
    let mut session = DiscoverySession::new("Acme");
    let generator = generator();

    // Fully explore four of six areas with high-quality notes:
    // 4 * 3 points of a possible 18 = 67%
    for area in DiscoveryArea::all().iter().take(4) {
        session.record_note(*area, RESOLVED_NOTE);
        session.record_note(*area, RESOLVED_NOTE);
    }

    let report = generator.session_completeness(&session);
    assert_eq!(report.percentage, 67);
    assert_eq!(report.quality, QualityLevel::Medium);
    assert_eq!(report.gaps.len(), 2);
}

#[test]
fn test_tech_area_gap_flows_through_to_report_context() {
    let mut session = DiscoverySession::new("Acme");
    let generator = generator();

    // Two vague notes in a Tech area: depth satisfied, substance missing
    session.record_note(DiscoveryArea::TechnologyStack, "They have some tools");
    session.record_note(DiscoveryArea::TechnologyStack, "Nobody likes them much");

    let report = generator.session_completeness(&session);
    assert!(report
        .gaps
        .iter()
        .any(|g| g.contains("Current Technology Stack") && g.contains("technical specifics")));

    let context = format_discovery_context(&session, &report);
    assert!(context.contains("## Known Gaps"));
    assert!(context.contains("needs technical specifics"));
}

#[test]
fn test_report_inputs_for_a_complete_session() {
    let mut session = DiscoverySession::new("Acme Logistics");
    let generator = generator();

    while let Some(area) = generator.next_area(&session) {
        session.record_note(area, RESOLVED_NOTE);
    }

    let report = generator.session_completeness(&session);
    assert_eq!(report.percentage, 100);
    assert_eq!(report.quality, QualityLevel::High);

    let context = format_discovery_context(&session, &report);
    assert!(context.contains("Discovery completeness: 100% (high)"));
    assert!(!context.contains("(not explored)"));

    let prompt = build_report_prompt(&session);
    assert!(prompt.contains("Acme Logistics"));
}
