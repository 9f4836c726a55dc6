//! Get command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::utils::{render_value, OutputFormat};
use pathfinder::config::{ConfigResolver, ConfigSource, ResolverOptions, DEFAULT_CONFIG_DIR};

#[derive(Args)]
pub struct GetArgs {
    /// Dotted keyword to look up (e.g. paths.raw)
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Config file to load; repeat to merge several (later files win)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub configs: Vec<PathBuf>,

    /// Directory searched for configuration.yml/.json when no --config is given
    #[arg(long, value_name = "DIR", default_value = DEFAULT_CONFIG_DIR)]
    pub config_dir: PathBuf,

    /// Select this sub-tree before looking KEY up
    #[arg(short, long, value_name = "PATH")]
    pub select: Option<String>,

    /// How to print mappings and sequences
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

pub fn run(args: GetArgs) -> Result<()> {
    let source = match args.configs.len() {
        0 => ConfigSource::Default,
        1 => ConfigSource::File(args.configs[0].clone()),
        _ => ConfigSource::Files(args.configs.clone()),
    };
    let options = ResolverOptions::default().config_dir(&args.config_dir);

    let mut resolver =
        ConfigResolver::with_options(source, &options).context("Failed to load configuration")?;

    if let Some(path) = args.select.as_deref() {
        resolver.select(Some(path)).with_context(|| format!("Failed to select '{path}'"))?;
    }

    let value = resolver
        .lookup(&args.key)
        .with_context(|| format!("Failed to look up '{}'", args.key))?;
    println!("{}", render_value(value, args.format)?);

    Ok(())
}
