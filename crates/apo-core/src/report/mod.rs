pub mod console;
pub mod json;

use crate::verdict::{EXACT_POINTS, NEAR_MISS_POINTS};
use serde::{Deserialize, Serialize};

/// Two points for the verdict plus one for the reasoning bonus.
pub const MAX_POINTS_PER_SECTION: u32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalReport {
    pub case_id: String,
    /// Normalized 0..=100, one decimal.
    pub score: f64,
    pub total_points: u32,
    pub max_points: u32,
    pub sections: Vec<SectionScore>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScore {
    pub section: String,
    /// Verdict as written in the answer key.
    pub expected: String,
    /// Normalized verdict from the audit, or `MISSING`.
    pub actual: String,
    pub verdict_score: u8,
    pub reasoning_score: u8,
}

impl SectionScore {
    pub fn points(&self) -> u32 {
        u32::from(self.verdict_score) + u32::from(self.reasoning_score)
    }

    pub fn match_kind(&self) -> MatchKind {
        match self.verdict_score {
            EXACT_POINTS => MatchKind::Exact,
            NEAR_MISS_POINTS => MatchKind::Near,
            _ => MatchKind::Miss,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Near,
    Miss,
}

impl MatchKind {
    pub fn label(&self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Near => "near",
            MatchKind::Miss => "MISS",
        }
    }
}

/// `100 * achieved / possible` rounded to one decimal; 0 when nothing is possible.
pub fn normalized_score(achieved: u32, possible: u32) -> f64 {
    if possible == 0 {
        return 0.0;
    }
    let raw = f64::from(achieved) / f64::from(possible) * 100.0;
    (raw * 10.0).round() / 10.0
}
