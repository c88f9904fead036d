use super::EvalReport;
use std::fmt::Write;

const RULE_WIDTH: usize = 50;
const SECTION_WIDTH: usize = 30;
const VERDICT_WIDTH: usize = 15;

/// Plain-text summary printed after the JSON report.
#[must_use]
pub fn render_summary(report: &EvalReport) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", rule);
    let _ = writeln!(out, "Case: {}", report.case_id);
    let _ = writeln!(
        out,
        "Score: {:.1}/100 ({}/{} points)",
        report.score, report.total_points, report.max_points
    );
    let _ = writeln!(out, "{}", rule);
    for s in &report.sections {
        let bonus = if s.reasoning_score > 0 { "+reason" } else { "" };
        let _ = writeln!(
            out,
            "  {:<sw$} {:<vw$} -> {:<vw$} [{}{}]",
            s.section,
            s.expected,
            s.actual,
            s.match_kind().label(),
            bonus,
            sw = SECTION_WIDTH,
            vw = VERDICT_WIDTH,
        );
    }
    out
}
