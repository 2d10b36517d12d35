use std::collections::HashMap;

use cantor::core::Dimension;
use cantor::core::evaluate::{evaluate_consistency, export_results, run_evaluation_with};
use cantor::core::validation::{Category, Difficulty, ValidationQuestion};

static QUESTIONS: &[ValidationQuestion] = &[
    ValidationQuestion {
        id: "q1",
        category: Category::Mathematical,
        question: "Why are the reals uncountable?",
        expected_elements: &["diagonal argument", "countable"],
        forbidden_elements: &["obviously"],
        dimension: Dimension::MathematicalIntuition,
        difficulty: Difficulty::Basic,
    },
    ValidationQuestion {
        id: "q2",
        category: Category::Conflict,
        question: "Who opposed your appointment in Berlin?",
        expected_elements: &["Kronecker"],
        forbidden_elements: &[],
        dimension: Dimension::KroneckerConflict,
        difficulty: Difficulty::Basic,
    },
    ValidationQuestion {
        id: "q3",
        category: Category::Theological,
        question: "What lies beyond the transfinite?",
        expected_elements: &["Absolutum", "Transfinitum"],
        forbidden_elements: &[],
        dimension: Dimension::TheologicalFramework,
        difficulty: Difficulty::Advanced,
    },
];

fn responses(pairs: &[(&str, &str)]) -> HashMap<String, String>
{
    pairs
        .iter()
        .map(|(id, text)| (id.to_string(), text.to_string()))
        .collect()
}

#[test]
fn individual_results_snapshot()
{
    // Given: answers to q1 and q3 only, one using a forbidden word
    let answers = responses(&[
        ("q1", "The DIAGONAL   argument is obviously decisive."),
        ("q3", "Das Absolutum ist allein in Gott verwirklicht."),
    ]);

    // When
    let report = run_evaluation_with(QUESTIONS, &answers);

    // Then: q2 is skipped and scores are rounded to four places
    let v = serde_json::to_value(&report.individual_results).expect("serialize");
    insta::assert_yaml_snapshot!(v, @r#"
    - category: mathematical
      expected_found:
        - diagonal argument
      expected_missing:
        - countable
      forbidden_found:
        - obviously
      notes: ""
      question_id: q1
      score: 0.4
    - category: theological
      expected_found:
        - Absolutum
      expected_missing:
        - Transfinitum
      forbidden_found: []
      notes: ""
      question_id: q3
      score: 0.5
    "#);

    assert_eq!(report.overall_score, 0.45);
    assert_eq!(report.by_category.get("mathematical"), Some(&0.4));
    assert_eq!(report.bell_test_score, 1.0);
}

#[test]
fn unknown_question_ids_are_ignored()
{
    let answers = responses(&[("nope", "Georg Cantor went insane.")]);

    let report = run_evaluation_with(QUESTIONS, &answers);

    // No matched response means nothing scored and no Bell penalty.
    assert!(report.individual_results.is_empty());
    assert_eq!(report.overall_score, 0.0);
    assert_eq!(report.bell_test_score, 1.0);
}

#[test]
fn exported_report_round_trips()
{
    let tmp = tempfile::tempdir().expect("tempdir");
    let report = run_evaluation_with(QUESTIONS, &responses(&[("q2", "Kronecker, in Berlin.")]));

    let path = export_results(&report, tmp.path()).expect("export");

    assert!(path.ends_with("evaluation_results.json"));
    let back: cantor::core::EvaluationReport =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("parse");
    assert_eq!(back, report);
}

#[test]
fn consistent_answers_share_their_claims()
{
    let same = "Cantor proved the reals uncountable in 1874. He taught at Halle for decades.";
    assert_eq!(evaluate_consistency(&[same, same]), 1.0);

    let drifted = "Cantor proved the reals uncountable in 1874. He later moved to Berlin.";
    assert_eq!(evaluate_consistency(&[same, drifted]), 0.5);
}
