//! OpenAlex collector configuration

use std::time::Duration;

use bibliodash_analytics::YearRange;

pub const DEFAULT_BASE_URL: &str = "https://api.openalex.org/";

/// Runtime configuration for one collection run
#[derive(Debug, Clone)]
pub struct CollectConfig {
    /// API root, joined with `works`
    pub base_url: String,
    /// Contact address for the OpenAlex polite pool
    pub mailto: Option<String>,
    /// Search terms, one dataset topic each, in output order
    pub topics: Vec<String>,
    pub years: YearRange,
    /// Most cited works kept per topic and year
    pub top_n: u32,
    /// Concepts kept as keywords per work
    pub max_keywords: usize,
    /// Abstracts longer than this are cut and end in `...`
    pub abstract_max_chars: usize,
    /// Pause between (topic, year) units
    pub request_delay: Duration,
    pub max_retries: u32,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            mailto: None,
            topics: vec![
                "Blockchain".to_string(),
                "Tokenization".to_string(),
                "Smart contract".to_string(),
            ],
            years: YearRange::default(),
            top_n: 5,
            max_keywords: 5,
            abstract_max_chars: 300,
            request_delay: Duration::from_millis(200),
            max_retries: 3,
        }
    }
}

impl CollectConfig {
    /// Number of (topic, year) units a run performs
    pub fn unit_count(&self) -> usize {
        self.topics.len() * self.years.len()
    }
}
