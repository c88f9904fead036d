//! Verdict normalization and verdict scoring.
//!
//! Audits are free-form model output, so a verdict arrives as whatever the
//! model wrote (`"move to hook"`, `"**Keep**"`, `"→ delete"`). Everything is
//! folded into a canonical uppercase token before comparison.

/// Points for a verdict that matches the answer key exactly.
pub const EXACT_POINTS: u8 = 2;
/// Points for a verdict in the same coarse group as the answer key.
pub const NEAR_MISS_POINTS: u8 = 1;

/// Aliases that fold onto a canonical token. Keys are already cleaned.
const ALIASES: &[(&str, &str)] = &[
    ("MOVE", "MOVE_NESTED"),
    ("MOVE_TO_NESTED", "MOVE_NESTED"),
    ("MOVE_TO_HOOK", "MOVE_HOOK"),
    ("HOOK", "MOVE_HOOK"),
    ("DELETE", "REMOVE"),
    ("DROP", "REMOVE"),
];

/// Coarse category used for near-miss credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerdictGroup {
    Keep,
    Remove,
    Trim,
    Move,
}

/// A verdict after normalization.
///
/// Unrecognized verdicts are kept as their cleaned token; they simply have no
/// [`VerdictGroup`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalVerdict(String);

impl CanonicalVerdict {
    pub fn parse(raw: &str) -> Self {
        let cleaned = clean(raw);
        let token = ALIASES
            .iter()
            .find(|(alias, _)| *alias == cleaned)
            .map(|(_, canonical)| (*canonical).to_string())
            .unwrap_or(cleaned);
        Self(token)
    }

    pub fn group(&self) -> Option<VerdictGroup> {
        match self.0.as_str() {
            "KEEP" => Some(VerdictGroup::Keep),
            "REMOVE" => Some(VerdictGroup::Remove),
            "TRIM" => Some(VerdictGroup::Trim),
            "MOVE_NESTED" | "MOVE_HOOK" => Some(VerdictGroup::Move),
            _ => None,
        }
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Uppercase, drop arrow glyphs and markdown emphasis, join words with `_`.
fn clean(raw: &str) -> String {
    let mut v = raw.to_uppercase();
    // Removing one arrow can splice a new "->" together, so repeat until stable.
    loop {
        let next = v.replace('→', "").replace("->", "");
        if next == v {
            break;
        }
        v = next;
    }
    v.trim_matches(|c: char| c == '*' || c == '`' || c.is_whitespace())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Normalize a raw verdict to its canonical token.
pub fn normalize_verdict(raw: &str) -> String {
    CanonicalVerdict::parse(raw).into_string()
}

/// Score one verdict: 2 for exact, 1 for same group, 0 otherwise.
pub fn score_verdict(actual: &str, expected: &str) -> u8 {
    let a = CanonicalVerdict::parse(actual);
    let e = CanonicalVerdict::parse(expected);
    if a == e {
        return EXACT_POINTS;
    }
    match (a.group(), e.group()) {
        (Some(ga), Some(ge)) if ga == ge => NEAR_MISS_POINTS,
        _ => 0,
    }
}
