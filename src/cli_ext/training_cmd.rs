//! `cantor training`: weighted pool, stratified split and JSONL export,
//! plus the synthetic dialogues and contrastive pairs.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::Style;
use tabled::{Table, Tabled};
use tracing::instrument;

use crate::cli::{AppContext, BuildArgs, GenerateArgs, TrainingCommand};
use crate::cli_ext::db_cmd::open_store;
use crate::core::contrastive::{self, ContrastiveExample, all_contrastive, export_contrastive};
use crate::core::formatter::{Formatter, TrainingFormat};
use crate::core::synthetic::{self, SyntheticExample, all_synthetic, export_synthetic};
use crate::core::model::{Tier, tier_label};
use crate::core::sampler::{Split, TrainingPoolEntry, WeightedSampler};
use crate::infra::config::Config;
use crate::infra::store::CatalogStore;

pub fn run(
    cmd: TrainingCommand,
    cfg: &Config,
    ctx: &AppContext,
) -> Result<()>
{
    match cmd
    {
        TrainingCommand::Build(args) => build(args, cfg, ctx),
        TrainingCommand::Synthetic(args) =>
        {
            let (format, out_dir) = generate_target(&args, cfg);
            let examples = write_synthetic(&formatter_for(format, cfg), &out_dir, ctx)?;
            if !ctx.quiet
            {
                println!("{}", category_table(synthetic::category_counts(&examples)));
                println!("{} synthetic dialogues", examples.len());
            }
            Ok(())
        }
        TrainingCommand::Negative(args) =>
        {
            let (format, out_dir) = generate_target(&args, cfg);
            let examples = write_contrastive(&formatter_for(format, cfg), &out_dir, ctx)?;
            if !ctx.quiet
            {
                println!("{}", category_table(contrastive::category_counts(&examples)));
                println!(
                    "{} contrastive pairs ({} training records)",
                    examples.len(),
                    examples.len() * 2
                );
            }
            Ok(())
        }
    }
}

fn generate_target(
    args: &GenerateArgs,
    cfg: &Config,
) -> (TrainingFormat, PathBuf)
{
    let format = args
        .format
        .unwrap_or(cfg.training.format);
    let out_dir = args
        .out
        .clone()
        .unwrap_or_else(|| cfg.output_dir());
    (format, out_dir)
}

/// A formatter using the configured system prompt, if any.
pub(crate) fn formatter_for(
    format: TrainingFormat,
    cfg: &Config,
) -> Formatter
{
    let formatter = Formatter::new(format);
    match &cfg.training.system_prompt
    {
        Some(prompt) => formatter.with_system_prompt(prompt.as_str()),
        None => formatter,
    }
}

#[derive(Tabled)]
struct CategoryCount
{
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Count")]
    count: usize,
}

fn category_table(counts: BTreeMap<&'static str, usize>) -> Table
{
    Table::new(
        counts
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count }),
    )
}

/// Export the dialogues as `synthetic.jsonl` and `cantor_{format}_synthetic.jsonl`.
pub(crate) fn write_synthetic(
    formatter: &Formatter,
    out_dir: &Path,
    ctx: &AppContext,
) -> Result<Vec<SyntheticExample>>
{
    let examples = all_synthetic();
    if !ctx.dry_run
    {
        let raw = export_synthetic(&examples, out_dir).context("Failed to write synthetic dialogues")?;
        let formatted = formatter
            .export_synthetic(&examples, out_dir)
            .context("Failed to write formatted synthetic dialogues")?;
        if !ctx.quiet
        {
            println!("{} {}", ctx.paint("Wrote", Style::new().green().bold()), raw.display());
            println!("{} {}", ctx.paint("Wrote", Style::new().green().bold()), formatted.display());
        }
    }
    Ok(examples)
}

/// Export the pairs as `negative_examples.jsonl` and `cantor_{format}_contrastive.jsonl`.
pub(crate) fn write_contrastive(
    formatter: &Formatter,
    out_dir: &Path,
    ctx: &AppContext,
) -> Result<Vec<ContrastiveExample>>
{
    let examples = all_contrastive();
    if !ctx.dry_run
    {
        let raw = export_contrastive(&examples, out_dir).context("Failed to write contrastive pairs")?;
        let formatted = formatter
            .export_contrastive(&examples, out_dir)
            .context("Failed to write formatted contrastive pairs")?;
        if !ctx.quiet
        {
            println!("{} {}", ctx.paint("Wrote", Style::new().green().bold()), raw.display());
            println!("{} {}", ctx.paint("Wrote", Style::new().green().bold()), formatted.display());
        }
    }
    Ok(examples)
}

#[derive(Tabled)]
struct TierCount
{
    #[tabled(rename = "Tier")]
    tier: Tier,
    #[tabled(rename = "Description")]
    label: &'static str,
    #[tabled(rename = "Train")]
    train: usize,
    #[tabled(rename = "Validation")]
    validation: usize,
}

fn per_tier(split: &Split) -> Vec<TierCount>
{
    let mut counts: BTreeMap<Tier, (usize, usize)> = BTreeMap::new();
    let tally = |entries: &[TrainingPoolEntry], counts: &mut BTreeMap<Tier, (usize, usize)>, val: bool| {
        for e in entries
        {
            let c = counts
                .entry(e.tier())
                .or_default();
            if val
            {
                c.1 += 1;
            }
            else
            {
                c.0 += 1;
            }
        }
    };
    tally(&split.train, &mut counts, false);
    tally(&split.validation, &mut counts, true);

    counts
        .into_iter()
        .map(|(tier, (train, validation))| TierCount {
            tier,
            label: tier_label(tier),
            train,
            validation,
        })
        .collect()
}

#[instrument(skip(cfg, ctx))]
fn build(
    args: BuildArgs,
    cfg: &Config,
    ctx: &AppContext,
) -> Result<()>
{
    let format = args
        .format
        .unwrap_or(cfg.training.format);
    let oversample = args
        .oversample
        .unwrap_or(cfg.sampler.oversample);
    let val_ratio = args
        .val_ratio
        .unwrap_or(cfg.sampler.val_ratio);
    let seed = args
        .seed
        .unwrap_or(cfg.sampler.seed);
    let out_dir = args
        .out
        .unwrap_or_else(|| cfg.output_dir());

    let sampler =
        WeightedSampler::new(oversample)?.with_max_copies(args.max_copies.or(cfg.sampler.max_copies));

    let store = open_store(cfg)?;
    let segments = store.weighted_segments()?;
    if segments.is_empty()
    {
        anyhow::bail!("The catalog has no segments; run `cantor process segment` first");
    }

    let split = sampler.split_train_val(segments, val_ratio, seed)?;

    let formatter = formatter_for(format, cfg);

    if !ctx.dry_run
    {
        let train = formatter
            .export(&split.train, &out_dir, "")
            .context("Failed to write training file")?;
        let val = formatter
            .export(&split.validation, &out_dir, "_val")
            .context("Failed to write validation file")?;
        if !ctx.quiet
        {
            println!("{} {}", ctx.paint("Wrote", Style::new().green().bold()), train.display());
            println!("{} {}", ctx.paint("Wrote", Style::new().green().bold()), val.display());
        }
    }

    if !ctx.quiet
    {
        println!("{}", Table::new(per_tier(&split)));
        println!(
            "{} train / {} validation records ({format}, oversample {oversample}, seed {seed})",
            split.train.len(),
            split.validation.len()
        );
    }
    Ok(())
}
