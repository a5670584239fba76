//! Per-topic totals and growth between the first and last year of the range

use crate::model::Dataset;
use crate::year::YearRange;

/// Headline numbers for one topic.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicMetrics {
    pub topic: String,
    /// Sum of all yearly counts
    pub total: u64,
    /// Percentage change from baseline to comparison year; 0 when the baseline is 0
    pub growth_percent: f64,
}

impl TopicMetrics {
    /// `"+"` for zero or positive growth, empty otherwise (the number carries its own `-`).
    pub fn growth_sign(&self) -> &'static str {
        if self.growth_percent >= 0.0 { "+" } else { "" }
    }

    /// Growth rounded to whole percent with sign, e.g. `+150` or `-40`.
    ///
    /// Halves round away from zero (`12.5` shows as `+13`).
    pub fn growth_display(&self) -> String {
        format!("{}{:.0}", self.growth_sign(), self.growth_percent.round())
    }
}

/// `(c1 - c0) / c0 * 100`, defined as 0 when `c0 == 0`.
pub fn growth_percent(baseline: u64, comparison: u64) -> f64 {
    if baseline == 0 {
        return 0.0;
    }
    (comparison as f64 - baseline as f64) / baseline as f64 * 100.0
}

/// One entry per topic, in dataset order.
pub fn compute_metrics(dataset: &Dataset, years: YearRange) -> Vec<TopicMetrics> {
    dataset
        .iter()
        .map(|(topic, record)| TopicMetrics {
            topic: topic.to_string(),
            total: record.total(),
            growth_percent: growth_percent(
                record.count_for_year(years.baseline()),
                record.count_for_year(years.comparison()),
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TopicRecord, YearlyStat};
    use serde_json::json;

    #[test]
    fn example_dataset() {
        let dataset: Dataset = serde_json::from_value(json!({"AI": {"yearly_stats": [
            {"year": 2020, "count": 10, "top_articles": []},
            {"year": 2025, "count": 25, "top_articles": []}
        ]}}))
        .unwrap();

        let metrics = compute_metrics(&dataset, YearRange::default());
        assert_eq!(
            metrics,
            [TopicMetrics {
                topic: "AI".to_string(),
                total: 35,
                growth_percent: 150.0,
            }]
        );
        assert_eq!(metrics[0].growth_display(), "+150");
    }

    #[test]
    fn zero_baseline_means_zero_growth() {
        assert_eq!(growth_percent(0, 0), 0.0);
        assert_eq!(growth_percent(0, 10_000), 0.0);
    }

    #[test]
    fn missing_years_count_as_zero() {
        let dataset: Dataset = [
            ("NoBaseline", TopicRecord::new(vec![YearlyStat::new(2025, 40)])),
            ("NoComparison", TopicRecord::new(vec![YearlyStat::new(2020, 40)])),
            ("NoStats", TopicRecord::default()),
        ]
        .into_iter()
        .collect();

        let metrics = compute_metrics(&dataset, YearRange::default());
        assert_eq!(metrics[0].growth_percent, 0.0);
        assert_eq!(metrics[1].growth_percent, -100.0);
        assert_eq!(metrics[2].total, 0);
        assert_eq!(metrics[2].growth_percent, 0.0);
    }

    #[test]
    fn sign_rules() {
        let mut m = TopicMetrics {
            topic: "T".to_string(),
            total: 0,
            growth_percent: 0.0,
        };
        assert_eq!(m.growth_display(), "+0");
        m.growth_percent = -37.6;
        assert_eq!(m.growth_display(), "-38");
        m.growth_percent = 12.2;
        assert_eq!(m.growth_display(), "+12");
        m.growth_percent = -0.4;
        assert_eq!(m.growth_display(), "-0");
    }

    #[test]
    fn halves_round_away_from_zero() {
        // 8 -> 9 is exactly 12.5%
        let m = TopicMetrics {
            topic: "T".to_string(),
            total: 17,
            growth_percent: growth_percent(8, 9),
        };
        assert_eq!(m.growth_percent, 12.5);
        assert_eq!(m.growth_display(), "+13");

        let m = TopicMetrics {
            growth_percent: -12.5,
            ..m
        };
        assert_eq!(m.growth_display(), "-13");
    }

    #[test]
    fn output_follows_dataset_order() {
        let dataset: Dataset = ["B", "A", "C"]
            .into_iter()
            .map(|t| (t, TopicRecord::default()))
            .collect();
        let topics: Vec<String> = compute_metrics(&dataset, YearRange::default())
            .into_iter()
            .map(|m| m.topic)
            .collect();
        assert_eq!(topics, ["B", "A", "C"]);
    }

    #[test]
    fn custom_range_moves_reference_years() {
        let record = TopicRecord::new(vec![
            YearlyStat::new(2020, 1),
            YearlyStat::new(2021, 50),
            YearlyStat::new(2023, 100),
        ]);
        let dataset: Dataset = [("X", record)].into_iter().collect();
        let range = YearRange::new(2021, 2023).unwrap();
        assert_eq!(compute_metrics(&dataset, range)[0].growth_percent, 100.0);
    }
}
