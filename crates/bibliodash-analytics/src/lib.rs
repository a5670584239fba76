//! Bibliodash Analytics - aggregation and filtering over a bibliometrics dataset
//!
//! The dataset maps research topics to yearly publication statistics. This
//! crate derives everything the dashboard shows from it:
//!
//! - [`metrics`]: total publications and growth between the range endpoints
//! - [`series`]: per-topic trend series and volume snapshots
//! - [`articles`]: year/search filtered article lists and keyword ranking
//! - [`dashboard`]: selection state with command handlers producing [`view`] models
//!
//! # Example
//!
//! ```
//! use bibliodash_analytics::{Dataset, YearRange, compute_metrics};
//!
//! let dataset: Dataset = serde_json::from_str(
//!     r#"{"AI": {"yearly_stats": [
//!         {"year": 2020, "count": 10, "top_articles": []},
//!         {"year": 2025, "count": 25, "top_articles": []}
//!     ]}}"#,
//! )
//! .unwrap();
//!
//! let metrics = compute_metrics(&dataset, YearRange::default());
//! assert_eq!(metrics[0].total, 35);
//! assert_eq!(metrics[0].growth_percent, 150.0);
//! ```

pub mod articles;
pub mod dashboard;
pub mod index;
pub mod loader;
pub mod metrics;
pub mod model;
pub mod selection;
pub mod series;
pub mod settings;
pub mod view;
pub mod year;

// Re-exports for convenience
pub use articles::{AnnotatedArticle, ArticleQuery, query_articles, rank_keywords};
pub use dashboard::Dashboard;
pub use index::YearIndex;
pub use loader::{DataSource, LoadError, load_dataset, parse_dataset};
pub use metrics::{TopicMetrics, compute_metrics, growth_percent};
pub use model::{Article, Dataset, TopicRecord, YearlyStat};
pub use selection::Selection;
pub use series::{TopicSeries, TrendSeries, VolumeEntry, build_trend_series, build_volume_series};
pub use settings::DashboardSettings;
pub use view::DashboardView;
pub use year::{YearFilter, YearRange};
