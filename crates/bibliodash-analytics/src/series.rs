//! Chart series: per-topic counts over the year range, and per-topic volume

use crate::model::Dataset;
use crate::year::{YearFilter, YearRange};

/// Counts of one topic, aligned to [`TrendSeries::years`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSeries {
    pub topic: String,
    pub counts: Vec<u64>,
}

/// Time series for the line chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendSeries {
    /// Ascending years, the shared x axis
    pub years: Vec<i32>,
    /// One series per topic, in dataset order
    pub series: Vec<TopicSeries>,
}

impl TrendSeries {
    pub fn get(&self, topic: &str) -> Option<&[u64]> {
        self.series
            .iter()
            .find(|s| s.topic == topic)
            .map(|s| s.counts.as_slice())
    }
}

/// Bar chart value for one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeEntry {
    pub topic: String,
    pub value: u64,
}

/// Every topic gets exactly `years.len()` values; gaps are 0.
pub fn build_trend_series(dataset: &Dataset, years: YearRange) -> TrendSeries {
    let axis: Vec<i32> = years.years().collect();
    let series = dataset
        .iter()
        .map(|(topic, record)| TopicSeries {
            topic: topic.to_string(),
            counts: axis.iter().map(|&y| record.count_for_year(y)).collect(),
        })
        .collect();
    TrendSeries {
        years: axis,
        series,
    }
}

/// Total across all years, or the count of the selected year (0 if absent).
///
/// [`YearFilter::Unmatched`] yields 0 for every topic.
pub fn build_volume_series(dataset: &Dataset, filter: &YearFilter) -> Vec<VolumeEntry> {
    dataset
        .iter()
        .map(|(topic, record)| VolumeEntry {
            topic: topic.to_string(),
            value: match filter {
                YearFilter::All => record.total(),
                YearFilter::Year(year) => record.count_for_year(*year),
                YearFilter::Unmatched(_) => 0,
            },
        })
        .collect()
}
