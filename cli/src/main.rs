//! `sift` command line front end.
//!
//! Reads settings from a TOML config file; flags override them per run.
//! Log output goes to stderr and honors `RUST_LOG`.

mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sift_search::SiftConfig;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Search file paths and text lines", long_about = None)]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List files under one or more directories
    Scan {
        #[arg(required = true)]
        roots: Vec<PathBuf>,

        /// Replace the saved path cache with the scanned paths
        #[arg(long)]
        save: bool,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Search file paths, using the path cache unless --dir is given
    Find {
        keyword: String,

        /// Scan this directory instead of using the path cache
        #[arg(short, long)]
        dir: Option<PathBuf>,

        #[command(flatten)]
        mode: ModeArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Search the lines of a file, or stdin when no file is given
    Grep {
        keyword: String,

        file: Option<PathBuf>,

        #[command(flatten)]
        mode: ModeArgs,
    },

    /// Print the edit distance between two strings
    Distance { a: String, b: String },
}

/// Search strategy overrides.
#[derive(Args, Debug, Default)]
struct ModeArgs {
    /// Match within an edit distance instead of by containment
    #[arg(short, long)]
    fuzzy: bool,

    /// Match whole items exactly by binary search over a sorted view
    #[arg(short, long, conflicts_with = "fuzzy")]
    sorted: bool,

    /// Maximum edit distance for --fuzzy
    #[arg(short = 'm', long)]
    max_distance: Option<usize>,
}

/// Directory walk overrides.
#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Maximum subdirectory level to descend into
    #[arg(long)]
    depth: Option<usize>,

    /// Only keep files with this extension (repeatable)
    #[arg(short, long = "ext")]
    extensions: Vec<String>,
}

fn load_config(path: &Path) -> Result<(SiftConfig, Vec<String>)> {
    let config = SiftConfig::load(path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    let problems = config.validate();
    Ok((config.with_defaults_for_invalid(), problems))
}

fn init_logging(level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, problems) = load_config(&cli.config)?;
    init_logging(&config.general.log_level);
    for problem in problems {
        tracing::warn!("invalid config value, using default: {problem}");
    }

    let mut out = std::io::stdout().lock();
    match cli.command {
        Command::Scan {
            roots,
            save,
            filter,
        } => commands::scan(&mut out, &config, &roots, save, &filter),
        Command::Find {
            keyword,
            dir,
            mode,
            filter,
        } => commands::find(&mut out, &config, keyword, dir, &mode, &filter),
        Command::Grep {
            keyword,
            file,
            mode,
        } => commands::grep(&mut out, &config, &keyword, file.as_deref(), &mode),
        Command::Distance { a, b } => commands::distance(&mut out, &a, &b),
    }
}
