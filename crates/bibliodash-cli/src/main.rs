//! bibliodash - Bibliometrics dashboard over OpenAlex publication data
//!
//! Collects per-topic publication statistics from OpenAlex and answers the
//! dashboard queries (metrics, trends, volume, articles) from the terminal.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;
mod config;
mod render;

use config::Config;

#[derive(Parser)]
#[command(name = "bibliodash")]
#[command(about = "Bibliometrics dashboard over OpenAlex publication data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file path (default: ./bibliodash.toml or ~/.config/bibliodash/config.toml)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Dataset file path or http(s) URL (overrides [data] path)
    #[arg(long, global = true)]
    data: Option<String>,

    /// Read timeout in seconds
    #[arg(long, global = true)]
    read_timeout: Option<u64>,

    /// Maximum retry attempts for transient failures
    #[arg(long, global = true)]
    max_retries: Option<u32>,
}

#[derive(Subcommand)]
enum Command {
    /// Collect the dataset from the OpenAlex API
    Collect(cmd::collect::CollectArgs),
    /// Total publications and growth per topic
    Metrics,
    /// Publications per topic and year
    Trends,
    /// Publications per topic for all years or one year
    Volume(cmd::volume::VolumeArgs),
    /// Top articles and keywords of a topic
    Articles(cmd::articles::ArticlesArgs),
    /// Write the full dashboard view as JSON
    Export(cmd::export::ExportArgs),
    /// Interactive session driven by line commands on stdin
    Explore,
    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Progress context (TTY auto-detect)
    let progress = Arc::new(bibliodash_core::ProgressContext::new());

    // Logging:
    //   TTY:     quiet (warn) unless --debug, progress bars show activity
    //   non-TTY: info unless --debug, logs are the only progress indicator
    let is_tty = progress.is_tty();
    let multi = if is_tty { Some(progress.multi()) } else { None };
    let quiet = if is_tty { !cli.debug } else { false };
    bibliodash_core::init_logging(quiet, cli.debug, multi)?;

    let mut config = if let Some(path) = cli.config {
        Config::from_file(&path)?
    } else {
        Config::load()?
    };
    if let Some(data) = cli.data {
        config.data.path = data;
    }

    // Apply HTTP settings (config file defaults, CLI overrides)
    if let Some(read_timeout) = cli.read_timeout {
        config.http.read_timeout = read_timeout;
    }
    if let Some(max_retries) = cli.max_retries {
        config.http.max_retries = max_retries;
    }
    bibliodash_core::set_http_config(bibliodash_core::HttpConfig {
        read_timeout: std::time::Duration::from_secs(config.http.read_timeout),
        max_retries: config.http.max_retries,
    });

    match cli.command {
        Command::Collect(args) => cmd::collect::run(args, &config, &progress),
        Command::Metrics => cmd::metrics::run(&config),
        Command::Trends => cmd::trends::run(&config),
        Command::Volume(args) => cmd::volume::run(args, &config),
        Command::Articles(args) => cmd::articles::run(args, &config),
        Command::Export(args) => cmd::export::run(args, &config),
        Command::Explore => cmd::explore::run(&config),
        Command::Config => cmd::config::run(&config),
    }
}
