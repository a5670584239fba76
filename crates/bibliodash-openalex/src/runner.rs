//! Collection run: every topic × every year, one unit at a time

use std::time::{Duration, Instant};

use bibliodash_analytics::{Dataset, TopicRecord, YearlyStat};
use bibliodash_core::{ProgressContext, is_shutdown_requested};

use crate::api::{WorksQuery, fetch_count, fetch_top_works};
use crate::config::CollectConfig;

/// Fetch count and top works of one (topic, year) unit
pub fn collect_unit(config: &CollectConfig, topic: &str, year: i32) -> anyhow::Result<YearlyStat> {
    let query = WorksQuery::new(config, topic, year)?;
    let count = fetch_count(&query, config)?;
    let articles = fetch_top_works(&query, config)?
        .into_iter()
        .map(|work| work.into_article(config))
        .collect();
    Ok(YearlyStat::new(year, count).with_articles(articles))
}

/// Run the OpenAlex collection
pub fn run(config: &CollectConfig, progress: &ProgressContext) -> anyhow::Result<(Dataset, RunSummary)> {
    run_with(config, progress, |topic, year| collect_unit(config, topic, year))
}

/// Drive `fetch` over all units.
///
/// A failed unit is logged and stored as `{year, count: 0, top_articles: []}`.
/// Shutdown requests abort the run without returning a partial dataset.
pub fn run_with(
    config: &CollectConfig,
    progress: &ProgressContext,
    mut fetch: impl FnMut(&str, i32) -> anyhow::Result<YearlyStat>,
) -> anyhow::Result<(Dataset, RunSummary)> {
    let start = Instant::now();
    let total_units = config.unit_count();

    if total_units == 0 {
        log::warn!("No topics to collect");
        return Ok((Dataset::new(), RunSummary::empty()));
    }

    log::info!(
        "Collecting {} topics x {} years ({}) from {}",
        config.topics.len(),
        config.years.len(),
        config.years,
        config.base_url
    );
    if config.mailto.is_none() {
        log::warn!("No mailto configured, OpenAlex will not use the polite pool");
    }

    let pb = progress.count_bar("openalex", total_units as u64);
    let mut dataset = Dataset::new();
    let mut failed_units = 0usize;
    let mut done = 0usize;

    for topic in &config.topics {
        let mut stats = Vec::with_capacity(config.years.len());

        for year in config.years.years() {
            if is_shutdown_requested() {
                pb.abandon_with_message("interrupted");
                anyhow::bail!("Interrupted after {done}/{total_units} units");
            }
            if done > 0 && !config.request_delay.is_zero() {
                std::thread::sleep(config.request_delay);
            }

            pb.set_message(format!("{topic} {year}"));
            let stat = match fetch(topic, year) {
                Ok(stat) => {
                    log::debug!(
                        "{topic} {year}: {} works, {} top articles",
                        stat.count,
                        stat.top_articles.len()
                    );
                    stat
                }
                Err(e) => {
                    log::warn!("{topic} {year}: {e:#}, recording 0");
                    failed_units += 1;
                    YearlyStat::new(year, 0)
                }
            };
            stats.push(stat);
            done += 1;
            pb.inc(1);
        }

        dataset.insert(topic.clone(), TopicRecord::new(stats));
    }

    pb.finish_and_clear();

    let summary = RunSummary {
        topics: dataset.len(),
        total_units,
        failed_units,
        articles: dataset.article_count(),
        elapsed: start.elapsed(),
    };
    summary.log();

    Ok((dataset, summary))
}

/// Summary of a collection run
#[derive(Debug)]
pub struct RunSummary {
    pub topics: usize,
    pub total_units: usize,
    pub failed_units: usize,
    pub articles: usize,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn empty() -> Self {
        Self {
            topics: 0,
            total_units: 0,
            failed_units: 0,
            articles: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn completed_units(&self) -> usize {
        self.total_units - self.failed_units
    }

    pub fn log(&self) {
        log::info!("=== Collection Summary ===");
        log::info!(
            "Units: {}/{} completed ({} failed)",
            self.completed_units(),
            self.total_units,
            self.failed_units
        );
        log::info!("Topics: {}, articles: {}", self.topics, self.articles);
        log::info!("Time: {:.1}s", self.elapsed.as_secs_f64());
    }
}
