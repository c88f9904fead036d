use crate::errors::EvalError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ground truth for one audit case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerKey {
    pub case_id: String,
    pub sections: Vec<ExpectedSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedSection {
    pub name: String,
    pub verdict: String,
}

impl AnswerKey {
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn load(path: &Path) -> Result<Self, EvalError> {
        let raw = std::fs::read_to_string(path).map_err(|e| EvalError::read(path, e))?;
        Self::from_json_str(&raw).map_err(|source| EvalError::AnswerKeyParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Expected sections keyed by name, in first-seen order.
    ///
    /// A repeated name keeps its first position but takes the later verdict.
    pub fn expected_sections(&self) -> Vec<&ExpectedSection> {
        let mut out: Vec<&ExpectedSection> = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            match out.iter_mut().find(|s| s.name == section.name) {
                Some(slot) => *slot = section,
                None => out.push(section),
            }
        }
        out
    }
}

/// One row pulled out of the audit's markdown table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSection {
    pub name: String,
    pub verdict: String,
    pub reason: String,
}
