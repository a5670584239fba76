//! Dashboard session: immutable dataset + selection + command handlers
//!
//! Each handler updates one field of the selection and returns the view it
//! invalidates, recomputed from scratch.

use crate::articles::{ArticleQuery, query_articles};
use crate::metrics::{TopicMetrics, compute_metrics};
use crate::model::Dataset;
use crate::selection::Selection;
use crate::series::{TrendSeries, VolumeEntry, build_trend_series, build_volume_series};
use crate::settings::DashboardSettings;
use crate::view::{
    ArticlePanel, ChartData, DashboardView, SelectionView, article_panel, metric_cards,
    trend_chart, volume_chart,
};
use crate::year::YearFilter;

pub struct Dashboard {
    dataset: Dataset,
    settings: DashboardSettings,
    selection: Selection,
}

impl Dashboard {
    /// Start a session on `dataset`, selecting `default_topic` if present.
    pub fn new(dataset: Dataset, settings: DashboardSettings, default_topic: Option<&str>) -> Self {
        let selection = Selection::initial(&dataset, default_topic);
        log::debug!(
            "dashboard ready: {} topics, {} articles, topic {:?}",
            dataset.len(),
            dataset.article_count(),
            selection.topic
        );
        Self {
            dataset,
            settings,
            selection,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    fn parse_year(&self, raw: &str) -> YearFilter {
        YearFilter::parse(raw, self.settings.years)
    }

    // === Queries ===

    pub fn metrics(&self) -> Vec<TopicMetrics> {
        compute_metrics(&self.dataset, self.settings.years)
    }

    pub fn trend(&self) -> TrendSeries {
        build_trend_series(&self.dataset, self.settings.years)
    }

    pub fn volume(&self) -> Vec<VolumeEntry> {
        build_volume_series(&self.dataset, &self.selection.volume_year_filter)
    }

    pub fn articles(&self) -> ArticleQuery<'_> {
        query_articles(
            &self.dataset,
            self.settings.years,
            &self.selection,
            self.settings.keyword_limit,
        )
    }

    // === Views ===

    pub fn article_panel(&self) -> ArticlePanel {
        article_panel(&self.articles())
    }

    pub fn volume_chart(&self) -> ChartData {
        volume_chart(
            &self.volume(),
            &self.selection.volume_year_filter,
            &self.settings,
        )
    }

    pub fn trend_chart(&self) -> ChartData {
        trend_chart(&self.trend(), &self.settings)
    }

    pub fn view(&self) -> DashboardView {
        DashboardView {
            topics: self.dataset.topics().map(str::to_string).collect(),
            selection: SelectionView::from(&self.selection),
            metrics: metric_cards(&self.metrics(), self.settings.years),
            trend_chart: self.trend_chart(),
            volume_chart: self.volume_chart(),
            articles: self.article_panel(),
        }
    }

    // === Command handlers ===

    pub fn on_topic_selected(&mut self, topic: &str) -> ArticlePanel {
        if !self.dataset.contains(topic) {
            log::warn!("topic {topic:?} is not in the dataset");
        }
        self.selection.topic = topic.to_string();
        self.article_panel()
    }

    pub fn on_year_filter_changed(&mut self, raw: &str) -> ArticlePanel {
        self.selection.year_filter = self.parse_year(raw);
        self.article_panel()
    }

    pub fn on_search_changed(&mut self, text: &str) -> ArticlePanel {
        self.selection.search_query = text.to_lowercase();
        self.article_panel()
    }

    pub fn on_volume_year_changed(&mut self, raw: &str) -> ChartData {
        self.selection.volume_year_filter = self.parse_year(raw);
        self.volume_chart()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{NO_ARTICLES, NO_KEYWORDS};
    use serde_json::json;

    fn dashboard() -> Dashboard {
        let dataset: Dataset = serde_json::from_value(json!({
            "Blockchain": {"yearly_stats": [
                {"year": 2020, "count": 10, "top_articles": [
                    {"title": "Blockchain in supply chains", "url": "u1", "keywords": ["Supply chain", "Blockchain"]}
                ]},
                {"year": 2025, "count": 25, "top_articles": [
                    {"title": "Rollups", "url": "u2", "keywords": ["Scalability"]}
                ]}
            ]},
            "Smart contract": {"yearly_stats": [
                {"year": 2021, "count": 4, "top_articles": [
                    {"title": "Formal verification of smart contracts", "url": "u3", "keywords": ["Verification"]}
                ]}
            ]}
        }))
        .unwrap();
        Dashboard::new(dataset, DashboardSettings::default(), None)
    }

    #[test]
    fn starts_on_first_topic_with_everything_selected() {
        let dash = dashboard();
        assert_eq!(dash.selection().topic, "Blockchain");
        assert_eq!(dash.article_panel().articles.len(), 2);
        assert_eq!(dash.volume_chart().datasets[0].data, [35, 4]);
    }

    #[test]
    fn topic_handler_switches_articles() {
        let mut dash = dashboard();
        let panel = dash.on_topic_selected("Smart contract");
        assert_eq!(panel.articles.len(), 1);
        assert_eq!(panel.articles[0].year, 2021);
        assert_eq!(panel.keywords, ["verification"]);

        let panel = dash.on_topic_selected("Unknown");
        assert!(panel.articles.is_empty());
        assert_eq!(panel.empty_articles_message, Some(NO_ARTICLES));
        assert_eq!(panel.empty_keywords_message, Some(NO_KEYWORDS));
    }

    #[test]
    fn year_and_search_handlers_compose() {
        let mut dash = dashboard();
        let panel = dash.on_year_filter_changed("2025");
        assert_eq!(panel.articles.len(), 1);
        assert_eq!(panel.articles[0].title, "Rollups");

        let panel = dash.on_search_changed("ROLL");
        assert_eq!(panel.articles.len(), 1);
        assert_eq!(dash.selection().search_query, "roll");

        let panel = dash.on_year_filter_changed("all");
        assert_eq!(panel.articles.len(), 1);

        let panel = dash.on_search_changed("");
        assert_eq!(panel.articles.len(), 2);
    }

    #[test]
    fn volume_handler_is_independent_of_article_year() {
        let mut dash = dashboard();
        dash.on_year_filter_changed("2020");

        let chart = dash.on_volume_year_changed("2021");
        assert_eq!(chart.datasets[0].data, [0, 4]);
        assert_eq!(chart.datasets[0].label, "Publications in 2021");
        assert_eq!(dash.selection().year_filter, YearFilter::Year(2020));

        let chart = dash.on_volume_year_changed("not a year");
        assert_eq!(chart.datasets[0].data, [0, 0]);
    }

    #[test]
    fn full_view_serializes() {
        let dash = dashboard();
        let view = dash.view();
        assert_eq!(view.topics, ["Blockchain", "Smart contract"]);
        assert_eq!(view.metrics[0].growth_label, "+150% (2020-2025)");
        assert_eq!(view.metrics[1].growth_label, "+0% (2020-2025)");
        assert_eq!(view.trend_chart.datasets[0].data, [10, 0, 0, 0, 0, 25]);

        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["selection"]["year"], "all");
        assert_eq!(value["volumeChart"]["type"], "bar");
        assert_eq!(value["articles"]["keywords"][0], "supply chain");
    }
}
