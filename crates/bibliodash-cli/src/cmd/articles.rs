//! Articles subcommand - filtered top articles and ranked keywords of one topic

use std::io::Write;

use anyhow::Result;
use clap::Args;

use super::open_dashboard;
use crate::config::Config;
use crate::render::write_panel;

#[derive(Args, Debug)]
pub struct ArticlesArgs {
    /// Topic to list (default: [dashboard] default_topic or the first topic)
    #[arg(short, long)]
    pub topic: Option<String>,

    /// "all" or a year of the configured range
    #[arg(short, long, default_value = "all")]
    pub year: String,

    /// Case-insensitive substring of a title or keyword
    #[arg(short, long, default_value = "")]
    pub search: String,
}

pub fn run(args: ArticlesArgs, config: &Config) -> Result<()> {
    let mut dashboard = open_dashboard(config)?;
    if let Some(topic) = &args.topic {
        dashboard.on_topic_selected(topic);
    }
    dashboard.on_year_filter_changed(&args.year);
    let panel = dashboard.on_search_changed(&args.search);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}\n", dashboard.selection().topic)?;
    write_panel(&mut out, &panel)?;
    Ok(())
}
