//! `cantor db`: catalog creation, seeding and inspection.

use anyhow::{Context, Result};
use owo_colors::Style;
use tabled::{Table, Tabled};
use tracing::instrument;

use crate::cli::{AppContext, DbCommand};
use crate::core::model::{AcquisitionStatus, Source, tier_label, tier_weight};
use crate::infra::config::Config;
use crate::infra::seed::{seed_catalog, seed_sources};
use crate::infra::store::{CatalogStore, SourceFilter, SqliteStore};

/// Open the configured catalog, creating the schema if needed.
pub fn open_store(cfg: &Config) -> Result<SqliteStore>
{
    let path = cfg.db_path();
    SqliteStore::open(&path).with_context(|| format!("Failed to open catalog {}", path.display()))
}

#[instrument(skip_all)]
pub fn run(
    cmd: DbCommand,
    cfg: &Config,
    ctx: &AppContext,
) -> Result<()>
{
    match cmd
    {
        DbCommand::Init { force } => init(force, cfg, ctx),
        DbCommand::Status { json } => status(json, cfg, ctx),
        DbCommand::List { tier, status, json } =>
        {
            let filter = SourceFilter { tier, status: status.map(Into::into) };
            list(filter, json, cfg)
        }
        DbCommand::Mark { id, status, file } =>
        {
            let mut store = open_store(cfg)?;
            match (file, status)
            {
                (Some(file), _) =>
                {
                    let file = file.to_string_lossy();
                    if !ctx.dry_run
                    {
                        store.assign_file(id, &file)?;
                    }
                    if !ctx.quiet
                    {
                        println!("Source {id}: file {file}, status acquired");
                    }
                }
                (None, Some(status)) =>
                {
                    let status: AcquisitionStatus = status.into();
                    if !ctx.dry_run
                    {
                        store.update_status(id, status)?;
                    }
                    if !ctx.quiet
                    {
                        println!("Source {id}: status {status}");
                    }
                }
                (None, None) => anyhow::bail!("Either a status or --file is required"),
            }
            Ok(())
        }
    }
}

fn init(
    force: bool,
    cfg: &Config,
    ctx: &AppContext,
) -> Result<()>
{
    if ctx.dry_run
    {
        println!(
            "Would create {} and seed up to {} sources",
            cfg.db_path()
                .display(),
            seed_sources().len()
        );
        return Ok(());
    }

    let mut store = open_store(cfg)?;
    let inserted = seed_catalog(&mut store, force).context("Failed to seed catalog")?;

    if !ctx.quiet
    {
        let stats = store.catalog_stats()?;
        println!(
            "{} {} ({} new, {} total sources)",
            ctx.paint("Catalog ready:", Style::new().green().bold()),
            cfg.db_path()
                .display(),
            inserted,
            stats.total
        );
    }
    Ok(())
}

#[derive(Tabled)]
struct TierRow
{
    #[tabled(rename = "Tier")]
    tier: u8,
    #[tabled(rename = "Description")]
    label: &'static str,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "Sources")]
    count: usize,
}

#[derive(Tabled)]
struct StatusRow
{
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Sources")]
    count: usize,
}

fn status(
    json: bool,
    cfg: &Config,
    ctx: &AppContext,
) -> Result<()>
{
    let store = open_store(cfg)?;
    let stats = store.catalog_stats()?;

    if json
    {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let tiers: Vec<TierRow> = (1..=8)
        .map(|tier| TierRow {
            tier,
            label: tier_label(tier),
            weight: format!("{:.2}", tier_weight(tier)),
            count: stats
                .by_tier
                .get(&tier)
                .copied()
                .unwrap_or(0),
        })
        .collect();
    let statuses: Vec<StatusRow> = stats
        .by_status
        .iter()
        .map(|(status, count)| StatusRow { status: status.clone(), count: *count })
        .collect();

    println!("{}", ctx.paint("Sources by tier", Style::new().bold()));
    println!("{}", Table::new(tiers));
    println!("\n{}", ctx.paint("Sources by status", Style::new().bold()));
    println!("{}", Table::new(statuses));
    println!(
        "\nTotal: {} sources, {} segments ({} annotated)",
        stats.total, stats.segments, stats.annotated_segments
    );
    Ok(())
}

#[derive(Tabled)]
struct SourceRow
{
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Tier")]
    tier: u8,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Lang")]
    language: String,
    #[tabled(rename = "Status")]
    status: AcquisitionStatus,
}

impl From<&Source> for SourceRow
{
    fn from(s: &Source) -> Self
    {
        Self {
            id: s.id.unwrap_or_default(),
            tier: s.tier,
            title: truncate(&s.title, 60),
            author: s
                .author
                .clone()
                .unwrap_or_default(),
            language: s
                .language
                .clone(),
            status: s.status,
        }
    }
}

fn truncate(
    text: &str,
    max: usize,
) -> String
{
    if text.chars().count() <= max
    {
        return text.to_string();
    }
    let cut: String = text
        .chars()
        .take(max.saturating_sub(1))
        .collect();
    format!("{cut}…")
}

fn list(
    filter: SourceFilter,
    json: bool,
    cfg: &Config,
) -> Result<()>
{
    let store = open_store(cfg)?;
    let sources = store.sources(filter)?;

    if json
    {
        println!("{}", serde_json::to_string_pretty(&sources)?);
        return Ok(());
    }

    if sources.is_empty()
    {
        println!("No sources match.");
        return Ok(());
    }

    let rows: Vec<SourceRow> = sources
        .iter()
        .map(SourceRow::from)
        .collect();
    println!("{}", Table::new(rows));
    Ok(())
}
