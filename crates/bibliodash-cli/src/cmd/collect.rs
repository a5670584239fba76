//! Collect subcommand - build the dataset from the OpenAlex API

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use bibliodash_analytics::{DataSource, Dataset};
use bibliodash_core::{SharedProgress, fmt_num, install_signal_handlers};

use crate::config::Config;
use crate::render::print_summary;

#[derive(Args, Debug)]
pub struct CollectArgs {
    /// Output file (default: [data] path when it is a file, else data.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Topics to collect (comma-separated, overrides [openalex] topics)
    #[arg(short, long, value_delimiter = ',')]
    pub topics: Vec<String>,

    /// Contact address for the OpenAlex polite pool
    #[arg(long)]
    pub mailto: Option<String>,
}

fn output_path(args: &CollectArgs, config: &Config) -> PathBuf {
    if let Some(path) = &args.output {
        return path.clone();
    }
    match DataSource::parse(&config.data.path) {
        DataSource::File(path) => path,
        DataSource::Url(_) => PathBuf::from("data.json"),
    }
}

/// Write pretty JSON to `{path}.tmp`, then rename over `path`.
pub fn write_dataset(dataset: &Dataset, path: &Path) -> Result<()> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create {}", parent.display()))?;
    }

    let file = File::create(&tmp_path)
        .with_context(|| format!("Cannot create {}", tmp_path.display()))?;
    let mut writer = BufWriter::new(file);
    dataset.to_writer_pretty(&mut writer)?;
    writeln!(writer)?;
    writer.flush()?;
    drop(writer);

    fs::rename(&tmp_path, path)
        .with_context(|| format!("Cannot move dataset into {}", path.display()))?;
    Ok(())
}

pub fn run(args: CollectArgs, config: &Config, progress: &SharedProgress) -> Result<()> {
    let mut collect = config.collect_config()?;
    if !args.topics.is_empty() {
        collect.topics = args.topics.clone();
    }
    if args.mailto.is_some() {
        collect.mailto = args.mailto.clone();
    }
    let output = output_path(&args, config);

    install_signal_handlers().context("Cannot install signal handlers")?;

    log::info!("Collecting OpenAlex data");
    log::info!("  Topics: {}", collect.topics.join(", "));
    log::info!("  Output: {}", output.display());

    let (dataset, summary) = bibliodash_openalex::run(&collect, progress)?;
    write_dataset(&dataset, &output)?;

    print_summary(
        "OpenAlex",
        &[
            (
                "Units",
                format!(
                    "{}/{} ({} failed)",
                    summary.completed_units(),
                    summary.total_units,
                    summary.failed_units
                ),
            ),
            ("Topics", summary.topics.to_string()),
            ("Articles", fmt_num(summary.articles as u64)),
            ("Output", output.display().to_string()),
            ("Time", format!("{:.1}s", summary.elapsed.as_secs_f64())),
        ],
    );

    if summary.failed_units > 0 {
        log::warn!(
            "{} units failed and were recorded with count 0",
            summary.failed_units
        );
    }
    Ok(())
}
