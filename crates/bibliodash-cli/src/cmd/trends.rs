//! Trends subcommand - publications per topic and year

use anyhow::Result;

use super::open_dashboard;
use crate::config::Config;
use crate::render::trend_table;

pub fn run(config: &Config) -> Result<()> {
    let dashboard = open_dashboard(config)?;
    println!("{}", trend_table(&dashboard.trend()));
    Ok(())
}
