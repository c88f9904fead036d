use super::EvalReport;
use std::path::Path;

pub fn to_pretty_json(report: &EvalReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

pub fn write_json(report: &EvalReport, out: &Path) -> anyhow::Result<()> {
    std::fs::write(out, to_pretty_json(report)?)?;
    Ok(())
}
