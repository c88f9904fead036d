//! Markdown table extraction from free-form audit output.
//!
//! The parser is permissive: any line starting with `|` is a candidate row,
//! with no attempt to validate the table as a whole. Rows are read as
//! `| Section | Lines | Verdict | Reason |`; the lines column is ignored.

use crate::model::ParsedSection;

const HEADER_FIRST_CELL: &str = "Section";

pub fn parse_audit_output(text: &str) -> Vec<ParsedSection> {
    text.lines().filter_map(parse_row).collect()
}

fn parse_row(line: &str) -> Option<ParsedSection> {
    let line = line.trim();
    if !line.starts_with('|') {
        return None;
    }

    // Drop the segments outside the edge pipes.
    let segments: Vec<&str> = line.split('|').collect();
    let cells: Vec<&str> = segments[1..segments.len() - 1]
        .iter()
        .map(|c| c.trim())
        .collect();
    if cells.len() < 3 {
        return None;
    }

    let first = cells[0];
    if first == HEADER_FIRST_CELL || first.is_empty() || first.starts_with('-') {
        return None;
    }
    if cells.iter().all(|c| is_separator_cell(c)) {
        return None;
    }

    Some(ParsedSection {
        name: first.to_string(),
        verdict: cells[2].to_string(),
        reason: cells.get(3).map(|c| c.to_string()).unwrap_or_default(),
    })
}

// `---`, `:---`, `---:` and `:---:` all mark a separator row.
fn is_separator_cell(cell: &str) -> bool {
    cell.chars().all(|c| c == '-' || c == ':')
}
