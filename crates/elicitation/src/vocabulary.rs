//! Signal Vocabularies
//!
//! The fixed keyword/pattern vocabularies behind the four note-quality
//! signals. Each signal is a presence test: a single match anywhere in the
//! text sets the flag. The lists are deliberately hardcoded and inspectable;
//! editing a vocabulary changes scoring behavior and is a product decision,
//! not a refactor.

/// Risk, urgency, and problem language: the prospect has surfaced
/// complexity that has not necessarily been resolved into a requirement.
pub const COMPLEXITY_PATTERNS: &[&str] = &[
    r"(?i)\b(challenge|problem|issue|risk|concern)s?\b",
    r"(?i)\b(critical|urgent|blocker|blocked|bottleneck)s?\b",
    r"(?i)\b(struggle|struggling|difficult|painful|pain point)s?\b",
    r"(?i)\b(failure|failing|broken|outage|workaround)s?\b",
];

/// Obligation language: the conversation has produced a concrete,
/// actionable requirement.
pub const REQUIREMENT_PATTERNS: &[&str] = &[
    r"(?i)\b(must|should|shall)\b",
    r"(?i)\b(need|needs|needed|require|requires|required|requirement|requirements)\b",
    r"(?i)\b(have to|has to|essential|mandatory|non-negotiable)\b",
    r"(?i)\b(expect|expects|expected|want|wants)\b",
];

/// System and integration language: the notes carry technical specifics
/// rather than purely business framing.
pub const TECHNICAL_PATTERNS: &[&str] = &[
    r"(?i)\b(system|platform|software|application|infrastructure)s?\b",
    r"(?i)\b(integration|integrations|integrate|integrated|api|apis|database|databases|server|servers)\b",
    r"(?i)\b(crm|erp|saas|cloud|automation|automated)\b",
    r"(?i)\b(legacy|spreadsheet|spreadsheets|migration|workflow|workflows)\b",
];

/// Quantification: a digit run adjacent to a unit of time, money, or
/// percentage. A bare number without a unit does not count.
///
/// Tolerance decision: adjacency is all that is required, so "50%-ish" and
/// "approx 50 percent" both match, while "42" alone and "several weeks"
/// (no digits) do not.
pub const QUANTIFICATION_PATTERN: &str =
    r"(?i)\b\d[\d,.]*\s*(?:hours?|days?|weeks?|months?|dollars?|percent)\b|\d\s*%|\$\s*\d";
