use apo_core::{evaluate, evaluate_path, AnswerKey, KeyConcepts, MISSING};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn mixed_quality_case_scores_per_section() {
    let audit = std::fs::read_to_string(fixture("case-02-audit.md")).unwrap();
    let concepts = KeyConcepts::builtin().unwrap();
    let report = evaluate_path(&audit, &fixture("case-02-answer.json"), &concepts).unwrap();

    assert_eq!(report.case_id, "case-02-mixed-quality");
    assert_eq!(report.max_points, 12);

    let legacy = &report.sections[0];
    assert_eq!(legacy.actual, "MOVE_NESTED");
    assert_eq!(legacy.verdict_score, 1);
    assert_eq!(legacy.reasoning_score, 0);

    let secrets = &report.sections[1];
    assert_eq!(secrets.verdict_score, 2);
    assert_eq!(secrets.reasoning_score, 1);

    let testing = &report.sections[2];
    assert_eq!(testing.actual, "TRIM");
    assert_eq!(testing.verdict_score, 2);
    assert_eq!(testing.reasoning_score, 1);

    let git = &report.sections[3];
    assert_eq!(git.actual, MISSING);
    assert_eq!(git.verdict_score + git.reasoning_score, 0);

    assert_eq!(report.total_points, 7);
    assert_eq!(report.score, 58.3);
}

#[test]
fn custom_concepts_replace_builtin_table() {
    let audit = std::fs::read_to_string(fixture("case-02-audit.md")).unwrap();
    let key = AnswerKey::load(&fixture("case-02-answer.json")).unwrap();
    let mut concepts = KeyConcepts::default();
    concepts.insert(
        "case-02-mixed-quality",
        "Never Modify Legacy API",
        vec!["legacy folder".to_string()],
    );

    let report = evaluate(&audit, &key, &concepts);
    assert_eq!(report.sections[0].reasoning_score, 1);
    assert_eq!(report.sections[1].reasoning_score, 0);
    assert_eq!(report.sections[2].reasoning_score, 0);
}

#[test]
fn section_order_follows_answer_key() {
    let audit = "\
| Testing | 1 | TRIM | generic |
| Secrets Management | 2 | KEEP | AWS |
";
    let key = AnswerKey::load(&fixture("case-02-answer.json")).unwrap();
    let report = evaluate(audit, &key, &KeyConcepts::builtin().unwrap());
    let names: Vec<&str> = report.sections.iter().map(|s| s.section.as_str()).collect();
    assert_eq!(
        names,
        vec!["Never Modify Legacy API", "Secrets Management", "Testing", "Git Workflow"]
    );
}
