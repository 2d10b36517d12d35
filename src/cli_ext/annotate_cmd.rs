//! `cantor annotate`: batch tagging and the review queue.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::Style;
use tabled::{Table, Tabled};

use crate::cli::{AnnotateCommand, AppContext};
use crate::cli_ext::db_cmd::open_store;
use crate::core::tagger::{AssistedTagger, RuleBasedTagger, TagSummary, Tagger, tag_all_segments_with_progress};
use crate::infra::classifier::OpenAiClassifier;
use crate::infra::config::{Config, TaggerKind};
use crate::infra::store::{CatalogStore, ReviewItem};

pub fn run(
    cmd: AnnotateCommand,
    cfg: &Config,
    ctx: &AppContext,
) -> Result<()>
{
    match cmd
    {
        AnnotateCommand::Tag { tagger } => tag(tagger.unwrap_or(cfg.tagger.kind), cfg, ctx),
        AnnotateCommand::Review { limit, json } => review(limit, json, cfg),
    }
}

fn tag(
    kind: TaggerKind,
    cfg: &Config,
    ctx: &AppContext,
) -> Result<()>
{
    let mut store = open_store(cfg)?;

    if ctx.dry_run
    {
        let pending = store
            .tagging_queue()?
            .len();
        println!("Would tag {pending} segments with the {kind:?} tagger");
        return Ok(());
    }

    let tagger: Box<dyn Tagger> = match kind
    {
        TaggerKind::Rule => Box::new(RuleBasedTagger::new()),
        TaggerKind::Assisted =>
        {
            let client = OpenAiClassifier::from_config(&cfg.tagger)
                .context("Failed to build classification client")?;
            Box::new(AssistedTagger::new(client))
        }
    };

    let pb = if ctx.quiet
    {
        ProgressBar::hidden()
    }
    else
    {
        let pb = ProgressBar::new(0);
        if let Ok(style) =
            ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} tagged")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    };

    let TagSummary { tagged, dropped, rows } =
        tag_all_segments_with_progress(&mut store, tagger.as_ref(), &pb)?;

    if !ctx.quiet
    {
        println!(
            "{} {tagged} segments ({rows} annotation rows), {dropped} dropped as invalid",
            ctx.paint("Tagged", Style::new().green().bold()),
        );
    }
    Ok(())
}

#[derive(Tabled)]
struct ReviewRow
{
    #[tabled(rename = "Ann")]
    annotation_id: i64,
    #[tabled(rename = "Segment")]
    segment_id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Dimension")]
    dimension: String,
    #[tabled(rename = "Conf")]
    confidence: String,
    #[tabled(rename = "Subtags")]
    subtags: String,
}

impl From<ReviewItem> for ReviewRow
{
    fn from(item: ReviewItem) -> Self
    {
        Self {
            annotation_id: item.annotation_id,
            segment_id: item.segment_id,
            title: item.segment_title,
            dimension: item
                .dimension
                .to_string(),
            confidence: format!("{:.2}", item.confidence),
            subtags: item
                .subtags
                .join(", "),
        }
    }
}

fn review(
    limit: usize,
    json: bool,
    cfg: &Config,
) -> Result<()>
{
    let store = open_store(cfg)?;
    let items = store.review_queue(limit)?;

    if json
    {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }
    if items.is_empty()
    {
        println!("Nothing to review.");
        return Ok(());
    }

    let rows: Vec<ReviewRow> = items
        .into_iter()
        .map(ReviewRow::from)
        .collect();
    println!("{}", Table::new(rows));
    Ok(())
}
