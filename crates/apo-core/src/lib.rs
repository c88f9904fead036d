//! Scoring of CLAUDE.md audits against an answer key.
//!
//! An audit is free-form text containing a markdown table of
//! `| Section | Lines | Verdict | Reason |` rows. Each section in the answer
//! key is matched to a row by name, then scored on the verdict (exact or
//! near-miss) and on whether the reason mentions a key concept.

pub mod concepts;
pub mod engine;
pub mod errors;
pub mod model;
pub mod parse;
pub mod report;
pub mod verdict;

pub use concepts::{ConceptSource, KeyConcepts};
pub use engine::{evaluate, evaluate_path, match_section, MISSING};
pub use errors::EvalError;
pub use model::{AnswerKey, ExpectedSection, ParsedSection};
pub use parse::parse_audit_output;
pub use report::{EvalReport, MatchKind, SectionScore};
pub use verdict::{normalize_verdict, score_verdict, CanonicalVerdict, VerdictGroup};
