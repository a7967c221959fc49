//! Report Context Assembly
//!
//! Formats a finished (or in-flight) discovery session into the context
//! block and instruction prompt consumed by the report-generation caller.
//! Pure string assembly; the LLM call itself lives outside this library.

use dealscope_elicitation::CompletenessReport;

use super::session::DiscoverySession;

/// Format a session as a `[DISCOVERY CONTEXT]` block.
///
/// Produces the structured text injected into the report-generation
/// conversation ahead of the narrative request, giving the writer the full
/// note history plus the completeness picture.
pub fn format_discovery_context(
    session: &DiscoverySession,
    completeness: &CompletenessReport,
) -> String {
    let mut parts = Vec::new();

    parts.push("[DISCOVERY CONTEXT]".to_string());
    parts.push(String::new());

    parts.push(format!("Prospect: {}", session.prospect));
    parts.push(format!(
        "Discovery completeness: {}% ({})",
        completeness.percentage, completeness.quality
    ));
    parts.push(String::new());

    for progress in &session.areas {
        parts.push(format!("## {}", progress.area.display_name()));
        if progress.notes.is_empty() {
            parts.push("(not explored)".to_string());
        } else {
            for note in &progress.notes {
                parts.push(format!("- {}", note));
            }
        }
        parts.push(String::new());
    }

    if !completeness.gaps.is_empty() {
        parts.push("## Known Gaps".to_string());
        for gap in &completeness.gaps {
            parts.push(format!("- {}", gap));
        }
        parts.push(String::new());
    }

    parts.push("[/DISCOVERY CONTEXT]".to_string());

    parts.join("\n")
}

/// Build the instruction prompt for the narrative business report.
///
/// The caller sends this together with the discovery context block to the
/// report-generation provider.
pub fn build_report_prompt(session: &DiscoverySession) -> String {
    format!(
        r#"You are a senior business consultant writing a discovery report for {prospect}.

Using ONLY the discovery context provided, write a narrative business report with the following sections:

## Executive Summary
Two or three paragraphs: who the prospect is, what they are trying to achieve, and the headline findings.

## Current Situation
Their business context and technology landscape as described in the notes.

## Key Challenges
The pain points surfaced during discovery, with their stated impact. Quote concrete numbers from the notes wherever they exist.

## Recommendations
Concrete next steps grounded in the prospect's stated requirements, budget, and timeline.

IMPORTANT:
- Do not invent facts that are not in the discovery context.
- Where the context lists known gaps, name them as open questions rather than guessing.
- Write for a business audience; keep technical detail precise but accessible."#,
        prospect = session.prospect,
    )
}
