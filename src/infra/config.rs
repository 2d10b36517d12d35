use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::{AppContext, InitArgs};
use crate::core::formatter::TrainingFormat;

const CONFIG_FILES: [&str; 4] = ["cantor.toml", ".cantor.toml", "cantor.yaml", "cantor.json"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config
{
    /// Catalog database; `~` and `$VARS` are expanded
    pub db_path: String,

    /// Root for raw sources and generated output
    pub data_dir: String,

    pub sampler: SamplerConfig,

    pub tagger: TaggerConfig,

    pub training: TrainingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig
{
    pub oversample: f64,
    pub val_ratio: f64,
    pub seed: u64,

    /// Upper bound on copies for tiers 2-6; unset means uncapped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_copies: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TaggerKind
{
    Rule,
    Assisted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggerConfig
{
    pub kind: TaggerKind,
    pub model: String,

    /// Base URL of an OpenAI-compatible API
    pub endpoint: String,

    /// Environment variable holding the API key
    pub api_key_env: String,

    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig
{
    pub format: TrainingFormat,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
}

impl Default for Config
{
    fn default() -> Self
    {
        Self {
            db_path: "cantor.db".to_string(),
            data_dir: "data".to_string(),
            sampler: SamplerConfig::default(),
            tagger: TaggerConfig::default(),
            training: TrainingConfig::default(),
        }
    }
}

impl Default for SamplerConfig
{
    fn default() -> Self
    {
        Self { oversample: 3.0, val_ratio: 0.1, seed: 42, max_copies: None }
    }
}

impl Default for TaggerConfig
{
    fn default() -> Self
    {
        Self {
            kind: TaggerKind::Rule,
            model: "gpt-4o-mini".to_string(),
            endpoint: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for TrainingConfig
{
    fn default() -> Self
    {
        Self { format: TrainingFormat::Llama, system_prompt: None }
    }
}

impl Config
{
    pub fn db_path(&self) -> PathBuf
    {
        expand(&self.db_path)
    }

    pub fn data_dir(&self) -> PathBuf
    {
        expand(&self.data_dir)
    }

    /// Default output directory for training and evaluation files.
    pub fn output_dir(&self) -> PathBuf
    {
        self.data_dir()
            .join("training")
    }
}

fn expand(path: &str) -> PathBuf
{
    // Unknown variables leave the path as written
    shellexpand::full(path)
        .map(|p| PathBuf::from(p.as_ref()))
        .unwrap_or_else(|_| PathBuf::from(path))
}

/// Load configuration from an explicit file, or the first default file found
/// in the working directory, then apply `CANTOR__*` environment overrides.
pub fn load_config(explicit: Option<&Path>) -> Result<Config>
{
    let mut builder = config::Config::builder();

    if let Some(path) = explicit
    {
        builder = builder.add_source(config::File::from(path).required(true));
    }
    else if let Some(path) = CONFIG_FILES
        .iter()
        .find(|p| Path::new(p).exists())
    {
        builder = builder.add_source(config::File::with_name(path));
    }

    // CANTOR__SAMPLER__OVERSAMPLE=4 → sampler.oversample
    builder = builder.add_source(
        config::Environment::with_prefix("CANTOR")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    let cfg = builder
        .build()
        .context("Failed to load configuration")?;
    let parsed: Config = cfg
        .try_deserialize()
        .context("Failed to parse configuration")?;

    Ok(parsed)
}

pub fn init(
    args: InitArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let config_path = args
        .path
        .join("cantor.toml");

    if config_path.exists() && !args.force
    {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).context("Failed to serialize default config")?;

    if ctx.dry_run
    {
        println!("{toml_string}");
        return Ok(());
    }

    std::fs::write(&config_path, toml_string).context("Failed to write config file")?;

    if !ctx.quiet
    {
        println!("Created config file at {}", config_path.display());
    }
    Ok(())
}
