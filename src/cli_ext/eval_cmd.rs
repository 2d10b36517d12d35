//! `cantor eval`: the validation bank and response scoring.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::Style;
use serde::Deserialize;
use tabled::{Table, Tabled};

use crate::cli::{AppContext, EvalCommand};
use crate::core::evaluate::{evaluate_consistency, export_results, run_evaluation};
use crate::core::validation::{by_category, export_validation_set, validation_set};
use crate::infra::config::Config;

pub fn run(
    cmd: EvalCommand,
    cfg: &Config,
    ctx: &AppContext,
) -> Result<()>
{
    match cmd
    {
        EvalCommand::Questions { category } =>
        {
            let questions: Vec<_> = match category
            {
                Some(c) => by_category(c).collect(),
                None => validation_set()
                    .iter()
                    .collect(),
            };
            let rows: Vec<QuestionRow> = questions
                .into_iter()
                .map(|q| QuestionRow {
                    id: q.id,
                    category: q
                        .category
                        .to_string(),
                    dimension: q
                        .dimension
                        .to_string(),
                    question: q.question,
                })
                .collect();
            println!("{}", Table::new(rows));
            Ok(())
        }
        EvalCommand::ExportQuestions { out } =>
        {
            let out = out.unwrap_or_else(|| cfg.output_dir());
            if ctx.dry_run
            {
                println!("Would write {} questions to {}", validation_set().len(), out.display());
                return Ok(());
            }
            let path = export_validation_set(&out)?;
            if !ctx.quiet
            {
                println!("{} {}", ctx.paint("Wrote", Style::new().green().bold()), path.display());
            }
            Ok(())
        }
        EvalCommand::Run { responses, out } => evaluate(&responses, out, cfg, ctx),
        EvalCommand::Consistency { responses } =>
        {
            let lines = read_responses(&responses)?;
            let texts: Vec<String> = lines
                .into_iter()
                .map(|l| l.response)
                .collect();
            let score = evaluate_consistency(texts.as_slice());
            println!("Consistency over {} responses: {score:.4}", texts.len());
            Ok(())
        }
    }
}

#[derive(Tabled)]
struct QuestionRow
{
    #[tabled(rename = "ID")]
    id: &'static str,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Dimension")]
    dimension: String,
    #[tabled(rename = "Question")]
    question: &'static str,
}

/// One line of a responses file.
#[derive(Debug, Deserialize)]
struct ResponseLine
{
    #[serde(default)]
    question_id: Option<String>,
    response: String,
}

fn read_responses(path: &Path) -> Result<Vec<ResponseLine>>
{
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read responses from {}", path.display()))?;

    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("{}:{}: malformed response line", path.display(), i + 1))
        })
        .collect()
}

#[derive(Tabled)]
struct CategoryRow
{
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Score")]
    score: String,
}

#[derive(Tabled)]
struct CoverageRow
{
    #[tabled(rename = "Dimension")]
    dimension: String,
    #[tabled(rename = "Coverage")]
    coverage: String,
}

fn evaluate(
    responses: &Path,
    out: Option<std::path::PathBuf>,
    cfg: &Config,
    ctx: &AppContext,
) -> Result<()>
{
    let mut by_id = HashMap::new();
    for line in read_responses(responses)?
    {
        let id = line
            .question_id
            .with_context(|| format!("{}: every line needs a question_id", responses.display()))?;
        by_id.insert(id, line.response);
    }

    let report = run_evaluation(&by_id);

    if !ctx.dry_run
    {
        let out = out.unwrap_or_else(|| cfg.output_dir());
        let path = export_results(&report, &out)?;
        if !ctx.quiet
        {
            println!("{} {}", ctx.paint("Wrote", Style::new().green().bold()), path.display());
        }
    }

    let rows: Vec<CategoryRow> = report
        .by_category
        .iter()
        .map(|(category, score)| CategoryRow { category: category.clone(), score: format!("{score:.4}") })
        .collect();
    println!("{}", Table::new(rows));

    let coverage: Vec<CoverageRow> = report
        .dimension_coverage
        .iter()
        .map(|(dimension, share)| CoverageRow { dimension: dimension.clone(), coverage: format!("{share:.4}") })
        .collect();
    println!("\n{}", ctx.paint("Dimension coverage", Style::new().bold()));
    println!("{}", Table::new(coverage));

    let bell_style = if report.bell_test_score < 1.0
    {
        Style::new().red().bold()
    }
    else
    {
        Style::new().green()
    };
    println!(
        "Overall: {:.4} over {} questions, Bell test: {}",
        report.overall_score,
        report
            .individual_results
            .len(),
        ctx.paint(format!("{:.4}", report.bell_test_score), bell_style)
    );
    Ok(())
}
