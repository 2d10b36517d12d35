use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cantor::cli::{AppContext, Cli, Commands};
use cantor::cli_ext::{annotate_cmd, db_cmd, eval_cmd, pipeline_cmd, process_cmd, training_cmd};

fn init_tracing(ctx: &AppContext) {
    let default = if ctx.quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_env("CANTOR_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!ctx.no_color)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Build a context once, pass everywhere
    let ctx = AppContext {
        quiet: cli.quiet,
        no_color: cli.no_color,
        dry_run: cli.dry_run,
    };
    init_tracing(&ctx);

    let mut cfg = cantor::load_config(cli.config.as_deref())?;
    if let Some(db) = &cli.db {
        cfg.db_path = db.to_string_lossy().into_owned();
    }

    match cli.command {
        Commands::Db(args) => db_cmd::run(args.command, &cfg, &ctx),
        Commands::Process(args) => process_cmd::run(args.command, &cfg, &ctx),
        Commands::Annotate(args) => annotate_cmd::run(args.command, &cfg, &ctx),
        Commands::Training(args) => training_cmd::run(args.command, &cfg, &ctx),
        Commands::Pipeline(args) => pipeline_cmd::run(args, &cfg, &ctx),
        Commands::Eval(args) => eval_cmd::run(args.command, &cfg, &ctx),
        Commands::Init(args) => cantor::infra::config::init(args, &ctx),
        Commands::Completions(args) => cantor::completion::run(args, &ctx),
    }
}
