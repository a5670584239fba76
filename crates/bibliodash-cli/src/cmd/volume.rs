//! Volume subcommand - publications per topic for all years or one year

use anyhow::Result;
use clap::Args;

use bibliodash_analytics::YearFilter;

use super::open_dashboard;
use crate::config::Config;
use crate::render::chart_table;

#[derive(Args, Debug)]
pub struct VolumeArgs {
    /// "all" or a year of the configured range
    #[arg(short, long, default_value = "all")]
    pub year: String,
}

pub fn run(args: VolumeArgs, config: &Config) -> Result<()> {
    let mut dashboard = open_dashboard(config)?;
    let chart = dashboard.on_volume_year_changed(&args.year);
    if let YearFilter::Unmatched(_) = dashboard.selection().volume_year_filter {
        log::warn!(
            "{:?} is not a year in {}, every topic shows 0",
            args.year,
            dashboard.settings().years
        );
    }
    println!("{}", chart_table(&chart));
    Ok(())
}
