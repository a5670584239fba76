//! Current dashboard selection, passed explicitly into every query

use crate::model::Dataset;
use crate::year::YearFilter;

/// What the user has picked: topic, article year, search text, volume year.
///
/// The volume chart has its own year dropdown, independent of the year
/// buttons above the article list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub topic: String,
    pub year_filter: YearFilter,
    /// Lower-cased search text; blank means no filtering
    pub search_query: String,
    pub volume_year_filter: YearFilter,
}

impl Selection {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            year_filter: YearFilter::All,
            search_query: String::new(),
            volume_year_filter: YearFilter::All,
        }
    }

    /// Start-up selection: `preferred` when the dataset has it, else the first topic.
    pub fn initial(dataset: &Dataset, preferred: Option<&str>) -> Self {
        let topic = match preferred {
            Some(topic) if dataset.contains(topic) => topic,
            Some(topic) => {
                log::warn!("default topic {topic:?} not in dataset, using the first topic");
                dataset.first_topic().unwrap_or_default()
            }
            None => dataset.first_topic().unwrap_or_default(),
        };
        Self::new(topic)
    }

    pub fn with_year_filter(mut self, filter: YearFilter) -> Self {
        self.year_filter = filter;
        self
    }

    pub fn with_search(mut self, query: &str) -> Self {
        self.search_query = query.to_lowercase();
        self
    }

    pub fn with_volume_year_filter(mut self, filter: YearFilter) -> Self {
        self.volume_year_filter = filter;
        self
    }
}
