//! Key-concept table and reasoning scorer.
//!
//! The table maps `case_id -> section name -> [concept substrings]`. A
//! built-in table covering the bundled cases is embedded at compile time;
//! a YAML or JSON file with the same shape can replace it.

use crate::errors::EvalError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const BUILTIN_CONCEPTS: &str = include_str!("../data/key_concepts.yaml");

/// Where a concept table came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConceptSource {
    BuiltIn,
    File(PathBuf),
}

impl std::fmt::Display for ConceptSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConceptSource::BuiltIn => write!(f, "builtin"),
            ConceptSource::File(path) => write!(f, "file:{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyConcepts {
    cases: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl KeyConcepts {
    /// The table for the bundled audit cases.
    pub fn builtin() -> Result<Self, EvalError> {
        Self::from_yaml_str(BUILTIN_CONCEPTS, &ConceptSource::BuiltIn)
    }

    /// Load a table from disk. JSON is accepted as a subset of YAML.
    pub fn load(path: &Path) -> Result<Self, EvalError> {
        let raw = std::fs::read_to_string(path).map_err(|e| EvalError::read(path, e))?;
        Self::from_yaml_str(&raw, &ConceptSource::File(path.to_path_buf()))
    }

    pub fn from_yaml_str(s: &str, source: &ConceptSource) -> Result<Self, EvalError> {
        let concepts: Self =
            serde_yaml::from_str(s).map_err(|e| EvalError::ConceptsParse {
                origin: source.to_string(),
                source: e,
            })?;
        concepts.validate(source)?;
        tracing::debug!(
            source = %source,
            cases = concepts.cases.len(),
            "loaded key concepts"
        );
        Ok(concepts)
    }

    // An empty concept would match every reason.
    fn validate(&self, source: &ConceptSource) -> Result<(), EvalError> {
        for (case_id, sections) in &self.cases {
            for (section, concepts) in sections {
                if concepts.iter().any(|c| c.trim().is_empty()) {
                    return Err(EvalError::InvalidConcepts {
                        origin: source.to_string(),
                        message: format!(
                            "empty concept for section '{}' in case '{}'",
                            section, case_id
                        ),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn insert(
        &mut self,
        case_id: impl Into<String>,
        section: impl Into<String>,
        concepts: Vec<String>,
    ) {
        self.cases
            .entry(case_id.into())
            .or_default()
            .insert(section.into(), concepts);
    }

    /// Concepts for one section; empty when the pair is unknown.
    pub fn concepts_for(&self, case_id: &str, section: &str) -> &[String] {
        self.cases
            .get(case_id)
            .and_then(|sections| sections.get(section))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn case_ids(&self) -> impl Iterator<Item = &str> {
        self.cases.keys().map(String::as_str)
    }

    /// 1 if the reason mentions any key concept for this section, else 0.
    ///
    /// Sections without concepts score 0; there is no bonus to earn.
    pub fn score_reasoning(&self, reason: &str, case_id: &str, section: &str) -> u8 {
        let concepts = self.concepts_for(case_id, section);
        if concepts.is_empty() {
            return 0;
        }
        let reason = reason.to_lowercase();
        let hit = concepts
            .iter()
            .any(|c| reason.contains(c.to_lowercase().as_str()));
        u8::from(hit)
    }
}
