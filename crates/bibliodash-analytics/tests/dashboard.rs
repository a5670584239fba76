//! End-to-end: dataset file on disk -> loader -> queries and views

use std::io::Write;

use bibliodash_analytics::{
    DataSource, Dashboard, DashboardSettings, Dataset, LoadError, YearFilter, YearRange,
    build_trend_series, build_volume_series, compute_metrics, load_dataset,
};
use tempfile::NamedTempFile;

const SAMPLE: &str = r#"{
  "Blockchain": {"yearly_stats": [
    {"year": 2020, "count": 120, "top_articles": [
      {"title": "A survey of blockchain consensus", "abstract": "Consensus protocols.",
       "url": "https://doi.org/10.1/a", "keywords": ["Consensus", "Blockchain", "Survey", "Distributed ledger"],
       "author": ["A. Author"], "pub_year": 2020}
    ]},
    {"year": 2021, "count": 150, "top_articles": null},
    {"year": 2023, "count": 210, "top_articles": [
      {"title": "Blockchain for health records", "abstract": null,
       "url": "https://doi.org/10.1/b", "keywords": ["Health", "blockchain"]}
    ]},
    {"year": 2025, "count": 300}
  ]},
  "Tokenization": {"yearly_stats": [
    {"year": 2020, "count": 0, "top_articles": []},
    {"year": 2025, "count": 42, "top_articles": []}
  ]},
  "Smart contract": {"yearly_stats": []}
}"#;

fn write_dataset(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(text.as_bytes()).unwrap();
    file
}

fn load(text: &str) -> Dataset {
    let file = write_dataset(text);
    let source = DataSource::parse(file.path().to_str().unwrap());
    load_dataset(&source).expect("dataset should load")
}

#[test]
fn loads_in_source_order() {
    let dataset = load(SAMPLE);
    let topics: Vec<&str> = dataset.topics().collect();
    assert_eq!(topics, ["Blockchain", "Tokenization", "Smart contract"]);
    assert_eq!(dataset.article_count(), 2);
}

#[test]
fn worked_example() {
    let dataset = load(
        r#"{"AI": {"yearly_stats": [{"year":2020,"count":10,"top_articles":[]},{"year":2025,"count":25,"top_articles":[]}]}}"#,
    );
    let metrics = compute_metrics(&dataset, YearRange::default());
    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics[0].topic, "AI");
    assert_eq!(metrics[0].total, 35);
    assert_eq!(metrics[0].growth_percent, 150.0);

    let range = YearRange::default();
    let y2020 = build_volume_series(&dataset, &YearFilter::parse("2020", range));
    assert_eq!(y2020[0].value, 10);
    let all = build_volume_series(&dataset, &YearFilter::parse("all", range));
    assert_eq!(all[0].value, 35);
}

#[test]
fn totals_agree_across_views() {
    let dataset = load(SAMPLE);
    let range = YearRange::default();
    let metrics = compute_metrics(&dataset, range);
    let volume = build_volume_series(&dataset, &YearFilter::All);
    let trend = build_trend_series(&dataset, range);

    assert_eq!(metrics.len(), dataset.len());
    for ((m, v), s) in metrics.iter().zip(&volume).zip(&trend.series) {
        assert_eq!(m.topic, v.topic);
        assert_eq!(m.topic, s.topic);
        assert_eq!(m.total, v.value);
        // Every stat here lies inside the range, so the trend sums to the total
        assert_eq!(m.total, s.counts.iter().sum::<u64>());
        assert_eq!(s.counts.len(), range.len());
    }

    // Zero baseline does not divide
    assert_eq!(metrics[1].growth_percent, 0.0);
    assert_eq!(metrics[2].total, 0);
}

#[test]
fn dashboard_session_over_loaded_file() {
    let dataset = load(SAMPLE);
    let mut dash = Dashboard::new(dataset, DashboardSettings::default(), Some("Blockchain"));

    let panel = dash.article_panel();
    assert_eq!(panel.articles.len(), 2);
    assert_eq!(panel.articles[0].year, 2020);
    assert_eq!(panel.articles[0].keywords_top3, ["Consensus", "Blockchain", "Survey"]);
    assert_eq!(panel.articles[1].abstract_text, "No abstract available.");
    assert_eq!(panel.keywords[0], "blockchain");

    let panel = dash.on_search_changed("health");
    assert_eq!(panel.articles.len(), 1);
    assert_eq!(panel.keywords, ["health", "blockchain"]);

    let panel = dash.on_topic_selected("Smart contract");
    assert!(panel.articles.is_empty());
    assert!(panel.empty_articles_message.is_some());

    let chart = dash.on_volume_year_changed("2025");
    assert_eq!(chart.datasets[0].data, [300, 42, 0]);
}

#[test]
fn malformed_file_aborts_load() {
    let file = write_dataset("{\"Blockchain\": [1, 2");
    let source = DataSource::parse(file.path().to_str().unwrap());
    match load_dataset(&source) {
        Err(LoadError::Parse(_)) => {}
        other => panic!("expected parse error, got {other:?}"),
    }
}
