//! Subcommands

pub mod articles;
pub mod collect;
pub mod config;
pub mod explore;
pub mod export;
pub mod metrics;
pub mod trends;
pub mod volume;

use anyhow::{Context, Result};

use bibliodash_analytics::{DataSource, Dashboard, load_dataset};

use crate::config::Config;

/// Load the configured dataset and open a dashboard session on it.
///
/// Load failures are terminal, nothing is built from a partial dataset.
pub fn open_dashboard(config: &Config) -> Result<Dashboard> {
    let settings = config.dashboard_settings()?;
    let source = DataSource::parse(&config.data.path);
    let dataset =
        load_dataset(&source).with_context(|| format!("Failed to load dataset from {source}"))?;
    Ok(Dashboard::new(
        dataset,
        settings,
        config.dashboard.default_topic.as_deref(),
    ))
}
