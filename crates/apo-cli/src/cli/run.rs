use anyhow::Context;
use apo_core::report::{console, json};
use apo_core::{evaluate_path, KeyConcepts};

use super::args::Cli;
use crate::exit_codes;

pub fn run(args: Cli) -> anyhow::Result<i32> {
    if !args.rest.is_empty() {
        tracing::debug!(ignored = ?args.rest, "ignoring extra arguments");
    }

    let audit = std::fs::read_to_string(&args.audit_output).with_context(|| {
        format!(
            "failed to read audit output '{}'",
            args.audit_output.display()
        )
    })?;

    let concepts = match &args.concepts {
        Some(path) => KeyConcepts::load(path)?,
        None => KeyConcepts::builtin()?,
    };

    let report = evaluate_path(&audit, &args.answer_key, &concepts)?;

    println!("{}", json::to_pretty_json(&report)?);
    print!("{}", console::render_summary(&report));

    if let Some(out) = &args.output {
        json::write_json(&report, out)
            .with_context(|| format!("failed to write report to '{}'", out.display()))?;
        tracing::info!(path = %out.display(), "wrote report");
    }

    Ok(exit_codes::SUCCESS)
}
