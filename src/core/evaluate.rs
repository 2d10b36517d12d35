//! Scoring of model responses against the validation bank.
//!
//! All matching is substring containment over normalized text (lower-cased,
//! whitespace runs collapsed to one space).

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::core::validation::{ValidationQuestion, validation_set};
use crate::core::vocabulary::Dimension;
use crate::error::Result;

/// Phrases from discredited popular accounts; any hit fails the Bell test.
const BELL_FABRICATIONS: &[&str] = &[
    "jewish",
    "oedipal",
    "father dominated",
    "driven mad",
    "died insane",
    "went insane",
    "driven insane",
];

/// Corpus-level coverage keywords, already lower-case.
fn coverage_keywords(dim: Dimension) -> &'static [&'static str] {
    match dim {
        Dimension::MathematicalIntuition => &[
            "diagonal",
            "cardinality",
            "cardinal",
            "ordinal",
            "transfinite",
            "aleph",
            "continuum hypothesis",
            "set theory",
            "uncountable",
            "power set",
            "well-ordered",
            "omega",
            "proof",
            "theorem",
            "bijection",
            "one-to-one",
        ],
        Dimension::TheologicalFramework => &[
            "god",
            "absolutum",
            "transfinitum",
            "divine",
            "aquinas",
            "thomism",
            "franzelin",
            "pantheism",
            "kant",
            "freedom",
            "platonic",
            "revelation",
            "spinoza",
            "leibniz",
            "theology",
        ],
        Dimension::KroneckerConflict => &[
            "kronecker",
            "finitist",
            "constructive",
            "berlin",
            "cholera",
            "journal",
            "blocked",
            "integers",
            "opposition",
            "corrupter",
        ],
        Dimension::PsychologicalLandscape => &[
            "depression",
            "hospital",
            "nervenklinik",
            "episode",
            "bipolar",
            "breakdown",
            "bacon",
            "shakespeare",
            "literary",
            "dignity",
        ],
        Dimension::PersonalContext => &[
            "halle",
            "dedekind",
            "mittag-leffler",
            "hilbert",
            "weierstrass",
            "vally",
            "family",
            "dmv",
            "congress",
            "st. petersburg",
            "lutheran",
        ],
    }
}

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence pattern compiles"));
static LONG_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{3,}").expect("number pattern compiles"));
static PROPER_NOUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]{2,}").expect("proper-noun pattern compiles"));

/// Minimum characters for a sentence to count as a claim.
const MIN_CLAIM_CHARS: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub question_id: String,
    pub category: String,
    pub score: f64,
    pub expected_found: Vec<String>,
    pub expected_missing: Vec<String>,
    pub forbidden_found: Vec<String>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub overall_score: f64,
    pub by_category: IndexMap<String, f64>,
    pub bell_test_score: f64,
    pub dimension_coverage: IndexMap<String, f64>,
    pub individual_results: Vec<EvaluationResult>,
}

pub fn normalize(text: &str) -> String {
    WHITESPACE.replace_all(&text.to_lowercase(), " ").into_owned()
}

/// Score one response: share of expected elements found, reduced by 20%
/// per forbidden element present, clamped to `[0, 1]`.
pub fn evaluate_response(question: &ValidationQuestion, response: &str) -> EvaluationResult {
    let norm = normalize(response);
    let contains = |elem: &str| norm.contains(&normalize(elem));

    let (found, missing): (Vec<&str>, Vec<&str>) = question
        .expected_elements
        .iter()
        .copied()
        .partition(|e| contains(e));
    let forbidden: Vec<&str> = question
        .forbidden_elements
        .iter()
        .copied()
        .filter(|e| contains(e))
        .collect();

    let total = question.expected_elements.len().max(1) as f64;
    let raw = found.len() as f64 / total;
    let penalty = 0.2 * forbidden.len() as f64;
    let score = (raw * (1.0 - penalty)).clamp(0.0, 1.0);

    EvaluationResult {
        question_id: question.id.to_string(),
        category: question.category.to_string(),
        score,
        expected_found: owned(found),
        expected_missing: owned(missing),
        forbidden_found: owned(forbidden),
        notes: String::new(),
    }
}

/// 1.0 when no fabrication phrase appears, else 0.0.
pub fn evaluate_bell_test(response: &str) -> f64 {
    let norm = normalize(response);
    if BELL_FABRICATIONS.iter().any(|f| norm.contains(f)) { 0.0 } else { 1.0 }
}

/// Fraction of each dimension's keywords that appear anywhere in `responses`.
pub fn evaluate_dimension_coverage<S: AsRef<str>>(responses: &[S]) -> IndexMap<String, f64> {
    let combined = normalize(
        &responses
            .iter()
            .map(|r| r.as_ref())
            .collect::<Vec<&str>>()
            .join(" "),
    );

    Dimension::ALL
        .into_iter()
        .map(|dim| {
            let keywords = coverage_keywords(dim);
            let hits = keywords.iter().filter(|kw| combined.contains(*kw)).count();
            (dim.to_string(), hits as f64 / keywords.len() as f64)
        })
        .collect()
}

/// Sentences likely to carry checkable facts: a 3+ digit number or a
/// capitalized word.
fn extract_claims(text: &str) -> HashSet<String> {
    SENTENCE_END
        .split(text)
        .map(str::trim)
        .filter(|s| s.chars().count() >= MIN_CLAIM_CHARS)
        .filter(|s| LONG_NUMBER.is_match(s) || PROPER_NOUN.is_match(s))
        .map(normalize)
        .collect()
}

/// Share of the first response's claims repeated verbatim in every other
/// response. Fewer than two responses, or no claims in the first, score 1.0.
pub fn evaluate_consistency<S: AsRef<str>>(responses: &[S]) -> f64 {
    let [first, rest @ ..] = responses else {
        return 1.0;
    };
    if rest.is_empty() {
        return 1.0;
    }

    let anchor = extract_claims(first.as_ref());
    if anchor.is_empty() {
        return 1.0;
    }
    let others: Vec<HashSet<String>> = rest.iter().map(|r| extract_claims(r.as_ref())).collect();

    let consistent = anchor
        .iter()
        .filter(|claim| others.iter().all(|set| set.contains(*claim)))
        .count();
    consistent as f64 / anchor.len() as f64
}

/// Evaluate responses keyed by question id against the full bank.
pub fn run_evaluation(responses: &HashMap<String, String>) -> EvaluationReport {
    run_evaluation_with(validation_set(), responses)
}

/// Evaluate against an explicit question list; questions without a response
/// are skipped.
#[instrument(skip_all, fields(questions = questions.len(), responses = responses.len()))]
pub fn run_evaluation_with(
    questions: &[ValidationQuestion],
    responses: &HashMap<String, String>,
) -> EvaluationReport {
    for id in responses.keys() {
        if !questions.iter().any(|q| q.id == id.as_str()) {
            warn!(question_id = %id, "response for unknown question ignored");
        }
    }

    let mut individual = Vec::new();
    let mut by_category: IndexMap<String, Vec<f64>> = IndexMap::new();
    let mut texts: Vec<&str> = Vec::new();

    for q in questions {
        let Some(response) = responses.get(q.id) else {
            continue;
        };
        let result = evaluate_response(q, response);
        by_category
            .entry(result.category.clone())
            .or_default()
            .push(result.score);
        texts.push(response);
        individual.push(result);
    }

    let overall = mean(individual.iter().map(|r| r.score)).unwrap_or(0.0);
    let bell = mean(texts.iter().map(|t| evaluate_bell_test(t))).unwrap_or(1.0);
    let coverage = evaluate_dimension_coverage(texts.as_slice());

    let report = EvaluationReport {
        overall_score: round4(overall),
        by_category: by_category
            .into_iter()
            .map(|(cat, scores)| (cat, round4(mean(scores).unwrap_or(0.0))))
            .collect(),
        bell_test_score: round4(bell),
        dimension_coverage: coverage.into_iter().map(|(d, v)| (d, round4(v))).collect(),
        individual_results: individual
            .into_iter()
            .map(|r| EvaluationResult { score: round4(r.score), ..r })
            .collect(),
    };

    info!(
        evaluated = report.individual_results.len(),
        overall = report.overall_score,
        bell = report.bell_test_score,
        "evaluation complete"
    );
    report
}

/// Write the report as pretty JSON to `out_dir/evaluation_results.json`.
pub fn export_results(report: &EvaluationReport, out_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join("evaluation_results.json");
    fs::write(&path, serde_json::to_string_pretty(report)?)?;
    info!(path = %path.display(), "exported evaluation results");
    Ok(path)
}

fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

fn owned(items: Vec<&str>) -> Vec<String> {
    items.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::{Category, Difficulty, by_id};

    fn question(expected: &'static [&'static str], forbidden: &'static [&'static str]) -> ValidationQuestion {
        ValidationQuestion {
            id: "t_01",
            category: Category::Mathematical,
            question: "?",
            expected_elements: expected,
            forbidden_elements: forbidden,
            dimension: Dimension::MathematicalIntuition,
            difficulty: Difficulty::Basic,
        }
    }

    #[test]
    fn all_expected_and_nothing_forbidden_scores_one() {
        let q = question(&["a b", "c"], &["x"]);
        let r = evaluate_response(&q, "A   B and C");
        assert_eq!(r.score, 1.0);
        assert_eq!(r.expected_found, vec!["a b", "c"]);
        assert!(r.expected_missing.is_empty());
    }

    #[test]
    fn no_expected_element_scores_zero() {
        let q = question(&["a", "b"], &[]);
        assert_eq!(evaluate_response(&q, "nothing here").score, 0.0);
    }

    #[test]
    fn two_of_five_without_forbidden_is_point_four() {
        let q = question(&["alpha", "beta", "gamma", "delta", "epsilon"], &[]);
        let r = evaluate_response(&q, "alpha and beta");
        assert!((r.score - 0.4).abs() < 1e-9);
        assert_eq!(r.expected_missing.len(), 3);
    }

    #[test]
    fn forbidden_elements_penalize_twenty_percent_each() {
        let q = question(&["alpha", "beta"], &["trivial", "obviously"]);
        let r = evaluate_response(&q, "alpha beta, trivial");
        assert!((r.score - 0.8).abs() < 1e-9);
        assert_eq!(r.forbidden_found, vec!["trivial"]);

        let r = evaluate_response(&q, "alpha beta, trivial and obviously so");
        assert!((r.score - 0.6).abs() < 1e-9);
    }

    #[test]
    fn bell_test() {
        assert_eq!(evaluate_bell_test("He was driven  MAD by infinity"), 0.0);
        assert_eq!(evaluate_bell_test("I continued working between episodes."), 1.0);
    }

    #[test]
    fn coverage_counts_keyword_share() {
        let cov = evaluate_dimension_coverage(&["Kronecker in Berlin", "blocked my journal"]);
        assert!((cov["kronecker_conflict"] - 0.4).abs() < 1e-9);
        assert_eq!(cov["personal_context"], 0.0);
        assert_eq!(cov.len(), 5);
    }

    #[test]
    fn consistency_edges() {
        assert_eq!(evaluate_consistency::<&str>(&[]), 1.0);
        assert_eq!(evaluate_consistency(&["Only one answer from Halle in 1874."]), 1.0);
        assert_eq!(evaluate_consistency(&["short.", "other."]), 1.0);
    }

    #[test]
    fn consistency_measures_repeated_claims() {
        let a = "I published the proof in 1874. Dedekind read my letters carefully.";
        let b = "I published the proof in 1874. Nobody else read anything.";
        assert_eq!(evaluate_consistency(&[a, a]), 1.0);
        assert_eq!(evaluate_consistency(&[a, b]), 0.5);
    }

    #[test]
    fn run_evaluation_skips_missing_and_rounds() {
        // Given
        let q = by_id("psych_01").unwrap();
        let responses = HashMap::from([
            (
                q.id.to_string(),
                "I continued working. The episodes were an interruption not destruction."
                    .to_string(),
            ),
            ("ghost_01".to_string(), "ignored".to_string()),
        ]);

        // When
        let report = run_evaluation(&responses);

        // Then
        assert_eq!(report.individual_results.len(), 1);
        assert_eq!(report.overall_score, 0.6);
        assert_eq!(report.by_category["psychological"], 0.6);
        assert_eq!(report.bell_test_score, 1.0);
    }

    #[test]
    fn empty_run_defaults() {
        let report = run_evaluation(&HashMap::new());
        assert_eq!(report.overall_score, 0.0);
        assert_eq!(report.bell_test_score, 1.0);
        assert!(report.by_category.is_empty());
        assert!(report.dimension_coverage.values().all(|v| *v == 0.0));
    }
}
