//! Metrics subcommand - total publications and growth per topic

use anyhow::Result;

use bibliodash_analytics::view::metric_cards;

use super::open_dashboard;
use crate::config::Config;
use crate::render::metrics_table;

pub fn run(config: &Config) -> Result<()> {
    let dashboard = open_dashboard(config)?;
    let years = dashboard.settings().years;
    let cards = metric_cards(&dashboard.metrics(), years);

    println!("{}", metrics_table(&cards));
    println!("Growth compares {} with {}", years.baseline(), years.comparison());
    Ok(())
}
