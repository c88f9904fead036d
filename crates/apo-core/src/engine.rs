//! Evaluation pass: match every expected section to a parsed row and score it.

use crate::concepts::KeyConcepts;
use crate::errors::EvalError;
use crate::model::{AnswerKey, ParsedSection};
use crate::parse::parse_audit_output;
use crate::report::{normalized_score, EvalReport, SectionScore, MAX_POINTS_PER_SECTION};
use crate::verdict::{normalize_verdict, score_verdict};
use std::path::Path;

/// Placeholder verdict for a section the audit never mentions.
pub const MISSING: &str = "MISSING";

/// First parsed row whose name contains, or is contained in, the expected name.
///
/// Comparison is case-insensitive. When several rows qualify the earliest one
/// wins, even if a later row is a closer match.
pub fn match_section<'a>(expected: &str, rows: &'a [ParsedSection]) -> Option<&'a ParsedSection> {
    let expected = expected.to_lowercase();
    rows.iter().find(|row| {
        let name = row.name.to_lowercase();
        name.contains(expected.as_str()) || expected.contains(name.as_str())
    })
}

/// Score audit text against an answer key already in memory.
pub fn evaluate(audit_output: &str, key: &AnswerKey, concepts: &KeyConcepts) -> EvalReport {
    let rows = parse_audit_output(audit_output);
    tracing::debug!(case_id = %key.case_id, rows = rows.len(), "parsed audit table");

    let expected = key.expected_sections();
    let mut sections = Vec::with_capacity(expected.len());

    for exp in expected {
        let Some(row) = match_section(&exp.name, &rows) else {
            tracing::warn!(case_id = %key.case_id, section = %exp.name, "section missing from audit");
            sections.push(SectionScore {
                section: exp.name.clone(),
                expected: exp.verdict.clone(),
                actual: MISSING.to_string(),
                verdict_score: 0,
                reasoning_score: 0,
            });
            continue;
        };

        let verdict_score = score_verdict(&row.verdict, &exp.verdict);
        let reasoning_score = concepts.score_reasoning(&row.reason, &key.case_id, &exp.name);
        tracing::debug!(
            section = %exp.name,
            matched = %row.name,
            verdict_score,
            reasoning_score,
            "scored section"
        );

        sections.push(SectionScore {
            section: exp.name.clone(),
            expected: exp.verdict.clone(),
            actual: normalize_verdict(&row.verdict),
            verdict_score,
            reasoning_score,
        });
    }

    let total_points: u32 = sections.iter().map(SectionScore::points).sum();
    let max_points = sections.len() as u32 * MAX_POINTS_PER_SECTION;
    let score = normalized_score(total_points, max_points);

    tracing::info!(
        case_id = %key.case_id,
        score,
        total_points,
        max_points,
        "evaluation complete"
    );

    EvalReport {
        case_id: key.case_id.clone(),
        score,
        total_points,
        max_points,
        sections,
    }
}

/// Load the answer key from disk and score the audit text against it.
pub fn evaluate_path(
    audit_output: &str,
    answer_path: &Path,
    concepts: &KeyConcepts,
) -> Result<EvalReport, EvalError> {
    let key = AnswerKey::load(answer_path)?;
    Ok(evaluate(audit_output, &key, concepts))
}
