//! Presentation-ready view models handed to a renderer
//!
//! Field names serialize in camelCase so the JSON can feed a Chart.js style
//! front end directly (`{type, labels, datasets}`).

use serde::Serialize;

use bibliodash_core::fmt_num;

use crate::articles::ArticleQuery;
use crate::metrics::TopicMetrics;
use crate::selection::Selection;
use crate::series::{TrendSeries, VolumeEntry};
use crate::settings::DashboardSettings;
use crate::year::{YearFilter, YearRange};

pub const NO_ABSTRACT: &str = "No abstract available.";
pub const NO_ARTICLES: &str = "No articles found matching your criteria.";
pub const NO_KEYWORDS: &str = "No keywords found for current selection.";

/// Alpha suffix appended to a line colour for its fill.
const FILL_ALPHA: &str = "20";
const LINE_TENSION: f64 = 0.4;
const BAR_RADIUS: u32 = 8;
/// Keywords shown on each article card
const CARD_KEYWORDS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCard {
    pub topic: String,
    pub total: u64,
    /// Total with thousands separators
    pub total_display: String,
    pub growth_percent: f64,
    /// e.g. `+150% (2020-2025)`
    pub growth_label: String,
    /// Growth is zero or positive (green), otherwise red
    pub positive: bool,
    pub tooltip: String,
}

pub fn metric_cards(metrics: &[TopicMetrics], years: YearRange) -> Vec<MetricCard> {
    metrics
        .iter()
        .map(|m| MetricCard {
            topic: m.topic.clone(),
            total: m.total,
            total_display: fmt_num(m.total),
            growth_percent: m.growth_percent,
            growth_label: format!("{}% ({years})", m.growth_display()),
            positive: m.growth_percent >= 0.0,
            tooltip: format!(
                "Total publications found in OpenAlex ({years}) for {}",
                m.topic
            ),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// One colour for the whole dataset, or one per data point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Colors {
    Single(String),
    PerPoint(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    pub background_color: Colors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    pub fill: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

/// Line chart: years on the x axis, one filled line per topic.
pub fn trend_chart(trend: &TrendSeries, settings: &DashboardSettings) -> ChartData {
    let datasets = trend
        .series
        .iter()
        .enumerate()
        .map(|(idx, series)| {
            let color = settings.color_for(idx);
            ChartDataset {
                label: series.topic.clone(),
                data: series.counts.clone(),
                border_color: Some(color.to_string()),
                background_color: Colors::Single(format!("{color}{FILL_ALPHA}")),
                tension: Some(LINE_TENSION),
                fill: true,
                border_radius: None,
            }
        })
        .collect();

    ChartData {
        kind: ChartKind::Line,
        labels: trend.years.iter().map(|y| y.to_string()).collect(),
        datasets,
    }
}

/// Bar chart: one bar per topic, a single dataset labelled by the year filter.
pub fn volume_chart(
    entries: &[VolumeEntry],
    filter: &YearFilter,
    settings: &DashboardSettings,
) -> ChartData {
    let label = match filter {
        YearFilter::All => format!("Total Publications ({})", settings.years),
        other => format!("Publications in {other}"),
    };

    ChartData {
        kind: ChartKind::Bar,
        labels: entries.iter().map(|e| e.topic.clone()).collect(),
        datasets: vec![ChartDataset {
            label,
            data: entries.iter().map(|e| e.value).collect(),
            border_color: None,
            background_color: Colors::PerPoint(
                (0..entries.len())
                    .map(|idx| settings.color_for(idx).to_string())
                    .collect(),
            ),
            tension: None,
            fill: false,
            border_radius: Some(BAR_RADIUS),
        }],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleCard {
    pub year: i32,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub url: String,
    pub keywords_top3: Vec<String>,
}

/// Article cards plus keyword tags, with the empty-state texts already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePanel {
    pub articles: Vec<ArticleCard>,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_articles_message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_keywords_message: Option<&'static str>,
}

pub fn article_panel(query: &ArticleQuery<'_>) -> ArticlePanel {
    let articles: Vec<ArticleCard> = query
        .articles
        .iter()
        .map(|a| ArticleCard {
            year: a.year,
            title: a.article.title.clone(),
            abstract_text: a
                .article
                .abstract_text
                .as_deref()
                .filter(|text| !text.is_empty())
                .unwrap_or(NO_ABSTRACT)
                .to_string(),
            url: a.article.url.clone(),
            keywords_top3: a
                .article
                .keywords
                .iter()
                .take(CARD_KEYWORDS)
                .cloned()
                .collect(),
        })
        .collect();

    ArticlePanel {
        empty_articles_message: articles.is_empty().then_some(NO_ARTICLES),
        empty_keywords_message: query.top_keywords.is_empty().then_some(NO_KEYWORDS),
        articles,
        keywords: query.top_keywords.clone(),
    }
}

/// Echo of the selection the view was built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionView {
    pub topic: String,
    pub year: String,
    pub search: String,
    pub volume_year: String,
}

impl From<&Selection> for SelectionView {
    fn from(selection: &Selection) -> Self {
        Self {
            topic: selection.topic.clone(),
            year: selection.year_filter.to_string(),
            search: selection.search_query.clone(),
            volume_year: selection.volume_year_filter.to_string(),
        }
    }
}

/// Everything a renderer needs for one frame of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub topics: Vec<String>,
    pub selection: SelectionView,
    pub metrics: Vec<MetricCard>,
    pub trend_chart: ChartData,
    pub volume_chart: ChartData,
    pub articles: ArticlePanel,
}
