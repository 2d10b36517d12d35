//! `cantor process`: extraction, segmentation and parallel-text linking.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::Style;
use tabled::{Table, Tabled};
use tracing::{info, instrument};

use crate::cli::{AppContext, ProcessCommand};
use crate::cli_ext::db_cmd::open_store;
use crate::core::model::{AcquisitionStatus, Segment};
use crate::core::parallel::{flag_translation_discrepancy, link_parallel, parallel_candidates};
use crate::core::segment::{Segmenter, Splitter};
use crate::infra::config::Config;
use crate::infra::io::extract_text;
use crate::infra::store::CatalogStore;
use crate::infra::walk::SourceWalker;

pub fn run(
    cmd: ProcessCommand,
    cfg: &Config,
    ctx: &AppContext,
) -> Result<()>
{
    match cmd
    {
        ProcessCommand::Segment { path, source_id, format_hint, language, append } =>
        {
            let opts = SegmentOptions {
                format_hint: format_hint.as_deref(),
                language: language.as_deref(),
                append,
            };
            segment(&path, source_id, opts, cfg, ctx)
        }
        ProcessCommand::Link { apply } => link(apply, cfg, ctx),
        ProcessCommand::Flag { original, translation, note } =>
        {
            if ctx.dry_run
            {
                println!("Would flag segments {original} and {translation}");
                return Ok(());
            }
            let mut store = open_store(cfg)?;
            flag_translation_discrepancy(&mut store, original, translation, &note)?;
            if !ctx.quiet
            {
                println!("Flagged discrepancy between segments {original} and {translation}");
            }
            Ok(())
        }
    }
}

pub(crate) fn progress_bar(
    len: usize,
    ctx: &AppContext,
) -> ProgressBar
{
    if ctx.quiet
    {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb
}

/// Extract and split `files` in order, numbering segments from `first_ordering`.
pub(crate) fn split_files(
    files: &[PathBuf],
    segmenter: &Segmenter,
    splitter: Splitter,
    first_ordering: u32,
    pb: &ProgressBar,
) -> Result<Vec<Segment>>
{
    let mut next_ordering = first_ordering;
    let mut pending = Vec::new();
    for file in files
    {
        pb.set_message(
            file.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );
        let text =
            extract_text(file).with_context(|| format!("Failed to extract {}", file.display()))?;

        let mut segments = segmenter.split(&text, splitter);
        for seg in &mut segments
        {
            seg.ordering += next_ordering;
        }
        next_ordering += segments.len() as u32;
        info!(file = %file.display(), segments = segments.len(), "segmented");
        pending.extend(segments);
        pb.inc(1);
    }
    Ok(pending)
}

#[derive(Debug, Clone, Copy)]
struct SegmentOptions<'a>
{
    format_hint: Option<&'a str>,
    language: Option<&'a str>,
    append: bool,
}

/// Segment every supported file under `path` into the given source.
///
/// All files are extracted and split before anything is written; the
/// segments are then stored in one transaction. A source that already has
/// segments is refused unless `append` is set, in which case orderings
/// continue after the existing ones, file by file in sorted path order.
#[instrument(skip(cfg, ctx))]
fn segment(
    path: &Path,
    source_id: i64,
    opts: SegmentOptions<'_>,
    cfg: &Config,
    ctx: &AppContext,
) -> Result<()>
{
    let mut store = open_store(cfg)?;
    let source = store
        .source(source_id)?
        .with_context(|| format!("Source {source_id} is not in the catalog"))?;

    let existing = store.segments_for_source(source_id)?;
    if !existing.is_empty() && !opts.append
    {
        anyhow::bail!(
            "Source {source_id} already has {} segments; pass --append to add more",
            existing.len()
        );
    }
    let next_ordering = existing
        .iter()
        .map(|s| s.ordering + 1)
        .max()
        .unwrap_or(0);

    let splitter = opts
        .format_hint
        .map_or_else(|| Splitter::for_format(source.format), Splitter::for_hint);
    let segmenter =
        Segmenter::new(source_id).language(opts.language.unwrap_or(source.language.as_str()));

    let files = SourceWalker::new(&[])?.walk(path);
    if files.is_empty()
    {
        anyhow::bail!("No supported source files under {}", path.display());
    }

    let pb = progress_bar(files.len(), ctx);
    let pending = split_files(&files, &segmenter, splitter, next_ordering, &pb)?;
    pb.finish_and_clear();

    let total = pending.len();
    if !ctx.dry_run
    {
        store
            .insert_segments(&pending)
            .with_context(|| format!("Failed to store segments of source {source_id}"))?;
        if total > 0 && source.status != AcquisitionStatus::Excluded
        {
            store.update_status(source_id, AcquisitionStatus::Processed)?;
        }
    }

    if !ctx.quiet
    {
        let verb = if ctx.dry_run { "Would create" } else { "Created" };
        println!(
            "{} {total} segments from {} file(s) for \"{}\"",
            ctx.paint(verb, Style::new().green().bold()),
            files.len(),
            source.title
        );
    }
    Ok(())
}

#[derive(Tabled)]
struct CandidateRow
{
    #[tabled(rename = "Original")]
    original: i64,
    #[tabled(rename = "Lang")]
    original_language: String,
    #[tabled(rename = "Translation")]
    translation: i64,
    #[tabled(rename = "Lang ")]
    translation_language: String,
}

fn link(
    apply: Option<Vec<i64>>,
    cfg: &Config,
    ctx: &AppContext,
) -> Result<()>
{
    let mut store = open_store(cfg)?;

    if let Some(pair) = apply
    {
        let [a, b] = pair[..]
        else
        {
            anyhow::bail!("--apply takes exactly two segment ids");
        };
        if ctx.dry_run
        {
            println!("Would link segments {a} and {b}");
            return Ok(());
        }
        link_parallel(&mut store, a, b)?;
        if !ctx.quiet
        {
            println!("Linked segments {a} and {b}");
        }
        return Ok(());
    }

    let candidates = parallel_candidates(&store)?;
    if candidates.is_empty()
    {
        println!("No parallel-text candidates.");
        return Ok(());
    }

    let rows: Vec<CandidateRow> = candidates
        .into_iter()
        .map(|c| CandidateRow {
            original: c.original,
            original_language: c.original_language,
            translation: c.translation,
            translation_language: c.translation_language,
        })
        .collect();
    println!("{}", Table::new(rows));
    println!("\nLink a pair with: cantor process link --apply ORIGINAL TRANSLATION");
    Ok(())
}
