//! Export subcommand - full dashboard view as JSON for a front end

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use super::open_dashboard;
use crate::config::Config;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long)]
    pub topic: Option<String>,

    #[arg(short, long, default_value = "all")]
    pub year: String,

    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Year of the volume chart, independent of --year
    #[arg(long, default_value = "all")]
    pub volume_year: String,
}

pub fn run(args: ExportArgs, config: &Config) -> Result<()> {
    let mut dashboard = open_dashboard(config)?;
    if let Some(topic) = &args.topic {
        dashboard.on_topic_selected(topic);
    }
    dashboard.on_year_filter_changed(&args.year);
    dashboard.on_search_changed(&args.search);
    dashboard.on_volume_year_changed(&args.volume_year);

    let view = dashboard.view();
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &view)?;
            writer.flush()?;
            log::info!("Wrote dashboard view to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            serde_json::to_writer_pretty(&mut out, &view)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
