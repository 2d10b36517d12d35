use assert_fs::prelude::*;
use predicates::prelude::*;

mod util;
use util::{cantor_in, make_letter_fixture};

/// Seed the catalog and return the workspace.
fn seeded() -> assert_fs::TempDir
{
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    cantor_in(&tmp)
        .args(["--quiet", "db", "init"])
        .assert()
        .success();
    tmp
}

#[test]
fn db_init_seeds_catalog_and_status_reports_it()
{
    // Given: an empty workspace
    let tmp = assert_fs::TempDir::new().expect("tempdir");

    // When: initializing the catalog
    cantor_in(&tmp)
        .args(["db", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog ready:"));

    // Then: the database exists and status reports every tier
    tmp.child("catalog.db")
        .assert(predicate::path::exists());

    let out = cantor_in(&tmp)
        .args(["db", "status", "--json"])
        .output()
        .expect("run status");
    assert!(out.status.success());

    let stats: serde_json::Value = serde_json::from_slice(&out.stdout).expect("status is JSON");
    assert!(stats["total"].as_u64().unwrap_or(0) > 40, "{stats}");
    assert_eq!(stats["segments"], 0);
    assert!(stats["by_tier"]["8"].as_u64().unwrap_or(0) >= 1);
}

#[test]
fn repeated_init_does_not_duplicate_sources()
{
    // Given: a seeded catalog
    let tmp = seeded();
    let total = |tmp: &assert_fs::TempDir| {
        let out = cantor_in(tmp)
            .args(["db", "status", "--json"])
            .output()
            .expect("run status");
        let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
        v["total"].as_u64().expect("total")
    };
    let before = total(&tmp);

    // When: init runs again, with and without --force
    cantor_in(&tmp)
        .args(["--quiet", "db", "init"])
        .assert()
        .success();
    cantor_in(&tmp)
        .args(["--quiet", "db", "init", "--force"])
        .assert()
        .success();

    // Then: the source count is unchanged
    assert_eq!(total(&tmp), before);
}

#[test]
fn list_filters_by_tier()
{
    let tmp = seeded();

    let out = cantor_in(&tmp)
        .args(["db", "list", "--tier", "8", "--json"])
        .output()
        .expect("run list");
    assert!(out.status.success());

    let sources: Vec<serde_json::Value> = serde_json::from_slice(&out.stdout).expect("list is JSON");
    assert!(!sources.is_empty());
    assert!(sources.iter().all(|s| s["tier"] == 8));
    assert!(sources.iter().all(|s| s["weight"] == 0.0));
}

#[test]
fn list_rejects_out_of_range_tier()
{
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    cantor_in(&tmp)
        .args(["db", "list", "--tier", "9"])
        .assert()
        .failure();
}

#[test]
fn mark_unknown_source_fails()
{
    let tmp = seeded();
    cantor_in(&tmp)
        .args(["db", "mark", "99999", "acquired"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("99999"));
}

#[test]
fn segment_then_tag_then_build_training_files()
{
    // Given: a seeded catalog and an acquired correspondence
    let tmp = make_letter_fixture();
    cantor_in(&tmp)
        .args(["--quiet", "db", "init"])
        .assert()
        .success();

    // When: segmenting the letters into source 1
    cantor_in(&tmp)
        .args(["process", "segment", "letters", "--source-id", "1", "--format-hint", "letter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created 3 segments"));

    // And: tagging with the rule-based tagger
    cantor_in(&tmp)
        .args(["annotate", "tag", "--tagger", "rule"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tagged 3 segments"));

    // And: building llama-format training data
    cantor_in(&tmp)
        .args(["training", "build", "--format", "llama", "--seed", "7", "--out", "out"])
        .assert()
        .success();

    // Then: both files exist and hold chat records
    let train = tmp.child("out/cantor_llama.jsonl");
    let val = tmp.child("out/cantor_llama_val.jsonl");
    train.assert(predicate::path::exists());
    val.assert(predicate::path::exists());

    let text = std::fs::read_to_string(train.path()).expect("read train");
    let first: serde_json::Value =
        serde_json::from_str(text.lines().next().expect("at least one record")).expect("record is JSON");
    assert_eq!(first["messages"][0]["role"], "system");
    assert_eq!(first["messages"][2]["role"], "assistant");

    // And: the source moved to processed
    let out = cantor_in(&tmp)
        .args(["db", "list", "--status", "processed", "--json"])
        .output()
        .expect("run list");
    let processed: Vec<serde_json::Value> = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(processed.len(), 1);
    assert_eq!(processed[0]["id"], 1);
}

#[test]
fn resegmenting_requires_append()
{
    // Given: source 1 already segmented
    let tmp = make_letter_fixture();
    cantor_in(&tmp)
        .args(["--quiet", "db", "init"])
        .assert()
        .success();
    let segment = ["process", "segment", "letters", "--source-id", "1", "--format-hint", "letter"];
    cantor_in(&tmp)
        .args(segment)
        .assert()
        .success();

    // When: segmenting the same source again
    // Then: it is refused and nothing is duplicated
    cantor_in(&tmp)
        .args(segment)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--append"));
    let segments = |tmp: &assert_fs::TempDir| {
        let out = cantor_in(tmp)
            .args(["db", "status", "--json"])
            .output()
            .expect("run status");
        let stats: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
        stats["segments"].as_u64().expect("segments")
    };
    assert_eq!(segments(&tmp), 3);

    // When: appending explicitly
    cantor_in(&tmp)
        .args(segment)
        .arg("--append")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created 3 segments"));

    // Then: the new segments follow the old ones
    assert_eq!(segments(&tmp), 6);
}

#[test]
fn dry_run_segment_writes_nothing()
{
    let tmp = make_letter_fixture();
    cantor_in(&tmp)
        .args(["--quiet", "db", "init"])
        .assert()
        .success();

    cantor_in(&tmp)
        .args(["--dry-run", "process", "segment", "letters", "--source-id", "1", "--format-hint", "letter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would create 3 segments"));

    let out = cantor_in(&tmp)
        .args(["db", "status", "--json"])
        .output()
        .expect("run status");
    let stats: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(stats["segments"], 0);
}

#[test]
fn unsupported_extension_is_rejected()
{
    // Given: a PDF-like file as the only input
    let tmp = seeded();
    tmp.child("scan.pdf")
        .write_binary(b"%PDF-1.4")
        .expect("write pdf");

    // When / Then: nothing supported is found
    cantor_in(&tmp)
        .args(["process", "segment", "scan.pdf", "--source-id", "1"])
        .assert()
        .failure();
}

#[test]
fn training_build_on_empty_catalog_fails()
{
    let tmp = seeded();
    cantor_in(&tmp)
        .args(["training", "build", "--out", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no segments"));
}

#[test]
fn eval_questions_lists_the_bank()
{
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    cantor_in(&tmp)
        .args(["eval", "questions", "--category", "mathematical"])
        .assert()
        .success()
        .stdout(predicate::str::contains("math_01"))
        .stdout(predicate::str::contains("theo_").not());
}

#[test]
fn eval_run_scores_responses_and_flags_bell()
{
    // Given: one good answer and one repeating a fabrication
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    tmp.child("responses.jsonl")
        .write_str(concat!(
            r#"{"question_id": "math_01", "response": "Suppose we could list all reals; the diagonal argument lets us construct a real not on the list."}"#,
            "\n",
            r#"{"question_id": "math_02", "response": "Aleph is countable. He went insane, of course."}"#,
            "\n",
        ))
        .expect("write responses");

    // When
    cantor_in(&tmp)
        .args(["eval", "run", "--responses", "responses.jsonl", "--out", "report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("over 2 questions"))
        .stdout(predicate::str::contains("Dimension coverage"))
        .stdout(predicate::str::contains("mathematical_intuition"));

    // Then: the report is written with a halved Bell score
    let report: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(tmp.child("report/evaluation_results.json").path()).expect("read report"),
    )
    .expect("report is JSON");
    assert_eq!(report["bell_test_score"], 0.5);
    assert_eq!(report["individual_results"].as_array().map(Vec::len), Some(2));
}

#[test]
fn eval_run_reports_malformed_line_number()
{
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    tmp.child("responses.jsonl")
        .write_str("{\"question_id\": \"math_01\", \"response\": \"x\"}\nnot json\n")
        .expect("write responses");

    cantor_in(&tmp)
        .args(["eval", "run", "--responses", "responses.jsonl", "--out", "report"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("responses.jsonl:2"));
}

#[test]
fn training_generators_write_raw_and_formatted_files()
{
    let tmp = assert_fs::TempDir::new().expect("tempdir");

    // When: writing the dialogues and the pairs in alpaca format
    cantor_in(&tmp)
        .args(["training", "synthetic", "--format", "alpaca", "--out", "gen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("50 synthetic dialogues"))
        .stdout(predicate::str::contains("math_qa"));
    cantor_in(&tmp)
        .args(["training", "negative", "--format", "alpaca", "--out", "gen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("18 contrastive pairs (36 training records)"));

    // Then: raw and formatted files exist side by side
    tmp.child("gen/synthetic.jsonl")
        .assert(predicate::path::exists());
    tmp.child("gen/negative_examples.jsonl")
        .assert(predicate::path::exists());
    tmp.child("gen/cantor_alpaca_synthetic.jsonl")
        .assert(predicate::path::exists());

    let text = std::fs::read_to_string(tmp.child("gen/cantor_alpaca_contrastive.jsonl").path())
        .expect("read contrastive");
    assert_eq!(text.lines().count(), 36);
    let second: serde_json::Value =
        serde_json::from_str(text.lines().nth(1).expect("two records")).expect("record is JSON");
    assert_eq!(second["metadata"]["type"], "negative_rejection");
    assert!(second["instruction"]
        .as_str()
        .is_some_and(|s| s.starts_with("I've read that")));
}

#[test]
fn pipeline_runs_every_stage_on_an_acquired_collection()
{
    // Given: a seeded catalog with the correspondence attached to a tier-1 collection
    let tmp = make_letter_fixture();
    cantor_in(&tmp)
        .args(["--quiet", "db", "init"])
        .assert()
        .success();
    let out = cantor_in(&tmp)
        .args(["db", "list", "--tier", "1", "--json"])
        .output()
        .expect("run list");
    let sources: Vec<serde_json::Value> = serde_json::from_slice(&out.stdout).expect("json");
    let collection = sources
        .iter()
        .find(|s| s["format"] == "collection")
        .and_then(|s| s["id"].as_i64())
        .expect("a tier-1 collection");
    cantor_in(&tmp)
        .args(["--quiet", "db", "mark"])
        .arg(collection.to_string())
        .args(["--file", "letters/1874.txt"])
        .assert()
        .success();

    // When
    cantor_in(&tmp)
        .args(["pipeline", "--format", "chatml", "--out", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1/5"))
        .stdout(predicate::str::contains("3 segments created"))
        .stdout(predicate::str::contains("3 segments annotated"))
        .stdout(predicate::str::contains("Pipeline complete."));

    // Then: corpus, generated and split files are all written
    for name in [
        "cantor_chatml.jsonl",
        "cantor_chatml_val.jsonl",
        "cantor_chatml_synthetic.jsonl",
        "cantor_chatml_contrastive.jsonl",
        "synthetic.jsonl",
        "negative_examples.jsonl",
    ]
    {
        tmp.child("out")
            .child(name)
            .assert(predicate::path::exists());
    }

    // And: a second run finds nothing new to segment
    cantor_in(&tmp)
        .args(["pipeline", "--out", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 segments created"));
}

#[test]
fn init_writes_config_and_refuses_overwrite()
{
    let tmp = assert_fs::TempDir::new().expect("tempdir");

    cantor_in(&tmp)
        .arg("init")
        .assert()
        .success();
    tmp.child("cantor.toml")
        .assert(predicate::str::contains("db_path"));

    cantor_in(&tmp)
        .arg("init")
        .assert()
        .failure();
}

#[test]
fn completions_print_to_stdout()
{
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    cantor_in(&tmp)
        .args(["completions", "bash", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cantor"));
}
