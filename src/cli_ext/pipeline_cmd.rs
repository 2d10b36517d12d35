//! `cantor pipeline`: seed, segment, tag, generate and build in one run.
//!
//! Each stage only picks up work the previous runs left undone, so the
//! command can be repeated after acquiring more sources.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use owo_colors::Style;
use tracing::{info, instrument, warn};

use crate::cli::{AppContext, PipelineArgs};
use crate::cli_ext::db_cmd::open_store;
use crate::cli_ext::process_cmd::{progress_bar, split_files};
use crate::cli_ext::training_cmd::{formatter_for, write_contrastive, write_synthetic};
use crate::core::formatter::Formatter;
use crate::core::model::{AcquisitionStatus, Segment, Source};
use crate::core::sampler::WeightedSampler;
use crate::core::segment::{Segmenter, Splitter};
use crate::core::tagger::{RuleBasedTagger, tag_all_segments_with_progress};
use crate::infra::config::Config;
use crate::infra::seed::{seed_catalog, seed_sources};
use crate::infra::store::{CatalogStore, SourceFilter, SqliteStore};
use crate::infra::walk::SourceWalker;

const STEPS: usize = 5;

fn step(
    n: usize,
    title: &str,
    ctx: &AppContext,
)
{
    if !ctx.quiet
    {
        println!("{}", ctx.paint(format!("Step {n}/{STEPS}: {title}"), Style::new().cyan().bold()));
    }
}

fn detail(
    line: impl std::fmt::Display,
    ctx: &AppContext,
)
{
    if !ctx.quiet
    {
        println!("  {line}");
    }
}

#[instrument(skip_all)]
pub fn run(
    args: PipelineArgs,
    cfg: &Config,
    ctx: &AppContext,
) -> Result<()>
{
    let format = args
        .format
        .unwrap_or(cfg.training.format);
    let out_dir = args
        .out
        .unwrap_or_else(|| cfg.output_dir());

    if ctx.dry_run
    {
        println!(
            "Would seed up to {} sources into {}, segment acquired sources, tag with the rule tagger, \
             and write {format} training data to {}",
            seed_sources().len(),
            cfg.db_path()
                .display(),
            out_dir.display()
        );
        return Ok(());
    }

    let mut store = open_store(cfg)?;

    step(1, "Seed catalog", ctx);
    let seeded = seed_catalog(&mut store, false).context("Failed to seed catalog")?;
    let total = store
        .catalog_stats()?
        .total;
    detail(format!("{seeded} sources added, {total} in catalog"), ctx);

    step(2, "Segment acquired sources", ctx);
    let created = segment_acquired(&mut store, ctx)?;
    detail(format!("{created} segments created"), ctx);

    step(3, "Annotate segments", ctx);
    let summary = tag_all_segments_with_progress(&mut store, &RuleBasedTagger::new(), &ProgressBar::hidden())?;
    detail(
        format!("{} segments annotated, {} dropped as invalid", summary.tagged, summary.dropped),
        ctx,
    );

    step(4, "Generate synthetic and contrastive data", ctx);
    let formatter = formatter_for(format, cfg);
    let synthetic = write_synthetic(&formatter, &out_dir, ctx)?;
    detail(format!("{} synthetic dialogues", synthetic.len()), ctx);
    let contrastive = write_contrastive(&formatter, &out_dir, ctx)?;
    detail(format!("{} contrastive pairs", contrastive.len()), ctx);

    step(5, "Build training set", ctx);
    build_split(&store, &formatter, &out_dir, cfg, ctx)?;

    if !ctx.quiet
    {
        println!("{}", ctx.paint("Pipeline complete.", Style::new().green().bold()));
    }
    Ok(())
}

/// Segment every acquired source that has a file and no segments yet.
///
/// A source whose file cannot be read is skipped with a warning so one
/// bad path does not stop the rest of the run.
fn segment_acquired(
    store: &mut SqliteStore,
    ctx: &AppContext,
) -> Result<usize>
{
    let acquired = store.sources(SourceFilter {
        tier: None,
        status: Some(AcquisitionStatus::Acquired),
    })?;
    let walker = SourceWalker::new(&[])?;

    let mut created = 0;
    for source in acquired
    {
        let (Some(id), Some(file)) = (source.id, source.file_path.as_deref())
        else
        {
            continue;
        };
        if !store
            .segments_for_source(id)?
            .is_empty()
        {
            info!(source = id, "already segmented");
            continue;
        }

        let files = walker.walk(Path::new(file));
        if files.is_empty()
        {
            warn!(source = id, file, "no readable source file; skipping");
            continue;
        }

        let pb = progress_bar(files.len(), ctx);
        let segments = match split_source(&source, id, &files, &pb)
        {
            Ok(segments) => segments,
            Err(err) =>
            {
                pb.finish_and_clear();
                warn!(source = id, error = %err, "extraction failed; skipping");
                continue;
            }
        };
        pb.finish_and_clear();

        store
            .insert_segments(&segments)
            .with_context(|| format!("Failed to store segments of source {id}"))?;
        if !segments.is_empty()
        {
            store.update_status(id, AcquisitionStatus::Processed)?;
        }
        detail(format!("{}: {} segments", source.title, segments.len()), ctx);
        created += segments.len();
    }
    Ok(created)
}

fn split_source(
    source: &Source,
    id: i64,
    files: &[PathBuf],
    pb: &ProgressBar,
) -> Result<Vec<Segment>>
{
    let segmenter = Segmenter::new(id).language(&source.language);
    split_files(files, &segmenter, Splitter::for_format(source.format), 0, pb)
}

fn build_split(
    store: &SqliteStore,
    formatter: &Formatter,
    out_dir: &Path,
    cfg: &Config,
    ctx: &AppContext,
) -> Result<()>
{
    let segments = store.weighted_segments()?;
    if segments.is_empty()
    {
        detail(
            ctx.paint(
                "No segments available for the training set (acquire sources first)",
                Style::new().yellow(),
            ),
            ctx,
        );
        return Ok(());
    }

    let sampler =
        WeightedSampler::new(cfg.sampler.oversample)?.with_max_copies(cfg.sampler.max_copies);
    let split = sampler.split_train_val(segments, cfg.sampler.val_ratio, cfg.sampler.seed)?;

    let train = formatter
        .export(&split.train, out_dir, "")
        .context("Failed to write training file")?;
    let val = formatter
        .export(&split.validation, out_dir, "_val")
        .context("Failed to write validation file")?;
    detail(format!("{} training records -> {}", split.train.len(), train.display()), ctx);
    detail(format!("{} validation records -> {}", split.validation.len(), val.display()), ctx);
    Ok(())
}
