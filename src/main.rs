//! Tower icon generator.
//!
//! Reads `towers.json`, writes one placeholder SVG per tower into
//! `img/towers/` and records each icon path back into the document.
//!
//! Usage:
//!   cargo run --                      # defaults, same as running from the game data dir
//!   cargo run -- --input data/towers.json --out-dir data/img/towers
//!
//! An optional RON file (`tower_icons.ron` unless `--config` says otherwise)
//! can override paths, the type palette and icon geometry.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tower_icons::{generate, GeneratorConfig};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "tower_icons.ron";

#[derive(Parser, Debug)]
#[command(about = "Generate placeholder SVG icons for every tower in towers.json", version)]
struct Args {
    /// Tower document to read and rewrite.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Directory receiving the SVG icons.
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Prefix recorded in each tower's `image` field.
    #[arg(long)]
    image_prefix: Option<String>,
    /// RON config file. When omitted, `tower_icons.ron` is used if present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Debug-level logging (RUST_LOG takes precedence).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut cfg = load_config(args.config.as_deref())?;
    if let Some(input) = args.input {
        cfg.paths.input = input;
    }
    if let Some(out_dir) = args.out_dir {
        cfg.paths.output_dir = out_dir;
    }
    if let Some(prefix) = args.image_prefix {
        cfg.paths.image_prefix = prefix;
    }
    for w in cfg.validate() {
        warn!("config: {w}");
    }

    let report = generate(&cfg)
        .with_context(|| format!("generate tower icons from {:?}", cfg.paths.input))?;
    for line in report.summary_lines() {
        println!("{line}");
    }
    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<GeneratorConfig> {
    match explicit {
        Some(path) => GeneratorConfig::load_from_file(path)
            .map_err(|e| anyhow::anyhow!("{}: {e}", path.display())),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            let (cfg, err) = GeneratorConfig::load_or_default(DEFAULT_CONFIG_PATH);
            if let Some(e) = err {
                warn!("{DEFAULT_CONFIG_PATH}: {e}; using builtin defaults");
            }
            Ok(cfg)
        }
        None => {
            debug!("no {DEFAULT_CONFIG_PATH}; using builtin defaults");
            Ok(GeneratorConfig::default())
        }
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
