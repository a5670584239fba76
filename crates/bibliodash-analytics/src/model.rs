//! Dataset model: topic → yearly statistics → top articles
//!
//! JSON shape:
//! ```json
//! {"Blockchain": {"yearly_stats": [
//!     {"year": 2020, "count": 812, "top_articles": [
//!         {"title": "...", "abstract": "...", "url": "...", "keywords": ["..."]}
//!     ]}
//! ]}}
//! ```
//!
//! Missing or `null` per-record fields fall back to defaults (0, empty) instead
//! of failing the load. Topic order is the order of keys in the source object.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::index::YearIndex;

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One highly cited work of a topic in a given year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,

    /// Author display names, as written by the collector
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub author: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pub_year: Option<i32>,
}

/// Publication count and top articles of one topic in one year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearlyStat {
    #[serde(default)]
    pub year: i32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub top_articles: Vec<Article>,
}

impl YearlyStat {
    pub fn new(year: i32, count: u64) -> Self {
        Self {
            year,
            count,
            top_articles: Vec::new(),
        }
    }

    pub fn with_articles(mut self, articles: Vec<Article>) -> Self {
        self.top_articles = articles;
        self
    }
}

#[derive(Serialize, Deserialize)]
struct TopicRecordRepr {
    #[serde(default, deserialize_with = "null_as_default")]
    yearly_stats: Vec<YearlyStat>,
}

/// All yearly statistics of one topic, with a year index built on construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "TopicRecordRepr", into = "TopicRecordRepr")]
pub struct TopicRecord {
    yearly_stats: Vec<YearlyStat>,
    by_year: YearIndex,
}

impl From<TopicRecordRepr> for TopicRecord {
    fn from(repr: TopicRecordRepr) -> Self {
        Self::new(repr.yearly_stats)
    }
}

impl From<TopicRecord> for TopicRecordRepr {
    fn from(record: TopicRecord) -> Self {
        Self {
            yearly_stats: record.yearly_stats,
        }
    }
}

impl TopicRecord {
    pub fn new(yearly_stats: Vec<YearlyStat>) -> Self {
        let by_year = YearIndex::build(&yearly_stats);
        Self {
            yearly_stats,
            by_year,
        }
    }

    /// Stats in source order (duplicates and out-of-range years included).
    pub fn yearly_stats(&self) -> &[YearlyStat] {
        &self.yearly_stats
    }

    /// Stat for `year`; the first entry wins when the source repeats a year.
    pub fn stat_for_year(&self, year: i32) -> Option<&YearlyStat> {
        self.by_year
            .position(year)
            .and_then(|idx| self.yearly_stats.get(idx))
    }

    /// Publication count for `year`, 0 when the year is absent.
    pub fn count_for_year(&self, year: i32) -> u64 {
        self.stat_for_year(year).map_or(0, |s| s.count)
    }

    /// Sum of `count` over every stat entry.
    pub fn total(&self) -> u64 {
        self.yearly_stats.iter().map(|s| s.count).sum()
    }
}

/// Immutable topic → record mapping in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    topics: Vec<(String, TopicRecord)>,
    by_name: FxHashMap<String, usize>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a topic at the end, or replace the record of an existing one in place.
    ///
    /// Replacement mirrors how a JSON object with a repeated key is read:
    /// the last value wins, the first position is kept.
    pub fn insert(&mut self, topic: impl Into<String>, record: TopicRecord) {
        let topic = topic.into();
        match self.by_name.get(&topic) {
            Some(&idx) => self.topics[idx].1 = record,
            None => {
                self.by_name.insert(topic.clone(), self.topics.len());
                self.topics.push((topic, record));
            }
        }
    }

    pub fn get(&self, topic: &str) -> Option<&TopicRecord> {
        self.by_name.get(topic).map(|&idx| &self.topics[idx].1)
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.by_name.contains_key(topic)
    }

    /// Topic names in display order.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|(name, _)| name.as_str())
    }

    pub fn first_topic(&self) -> Option<&str> {
        self.topics.first().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TopicRecord)> {
        self.topics.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Total number of articles across all topics and years.
    pub fn article_count(&self) -> usize {
        self.topics
            .iter()
            .flat_map(|(_, record)| record.yearly_stats())
            .map(|stat| stat.top_articles.len())
            .sum()
    }

    /// Write the dataset as indented JSON in the same shape it is read from.
    pub fn to_writer_pretty<W: std::io::Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, self)
    }
}

impl<S: Into<String>> FromIterator<(S, TopicRecord)> for Dataset {
    fn from_iter<I: IntoIterator<Item = (S, TopicRecord)>>(iter: I) -> Self {
        let mut dataset = Dataset::new();
        for (topic, record) in iter {
            dataset.insert(topic, record);
        }
        dataset
    }
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.topics.len()))?;
        for (topic, record) in &self.topics {
            map.serialize_entry(topic, record)?;
        }
        map.end()
    }
}

struct DatasetVisitor;

impl<'de> Visitor<'de> for DatasetVisitor {
    type Value = Dataset;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping topic names to {\"yearly_stats\": [...]}")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Dataset, A::Error> {
        let mut dataset = Dataset::new();
        while let Some((topic, record)) = access.next_entry::<String, Option<TopicRecord>>()? {
            dataset.insert(topic, record.unwrap_or_default());
        }
        Ok(dataset)
    }
}

impl<'de> Deserialize<'de> for Dataset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DatasetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Dataset {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn topic_order_follows_source() {
        let dataset: Dataset = serde_json::from_str(
            r#"{"Tokenization": {"yearly_stats": []},
                "Blockchain": {"yearly_stats": []},
                "Smart contract": {"yearly_stats": []}}"#,
        )
        .unwrap();
        let topics: Vec<&str> = dataset.topics().collect();
        assert_eq!(topics, ["Tokenization", "Blockchain", "Smart contract"]);
        assert_eq!(dataset.first_topic(), Some("Tokenization"));
    }

    #[test]
    fn missing_and_null_fields_default() {
        let dataset = parse(json!({
            "AI": {"yearly_stats": [
                {"year": 2021},
                {"year": 2022, "count": null, "top_articles": null},
                {"year": 2023, "count": 4, "top_articles": [{"title": "Only a title"}]}
            ]},
            "Empty": {},
            "Null": null
        }));

        let ai = dataset.get("AI").unwrap();
        assert_eq!(ai.count_for_year(2021), 0);
        assert!(ai.stat_for_year(2022).unwrap().top_articles.is_empty());

        let article = &ai.stat_for_year(2023).unwrap().top_articles[0];
        assert_eq!(article.title, "Only a title");
        assert_eq!(article.abstract_text, None);
        assert!(article.keywords.is_empty());
        assert!(article.url.is_empty());

        assert!(dataset.get("Empty").unwrap().yearly_stats().is_empty());
        assert!(dataset.get("Null").unwrap().yearly_stats().is_empty());
    }

    #[test]
    fn duplicate_year_first_wins_for_lookup() {
        let record = TopicRecord::new(vec![
            YearlyStat::new(2020, 10),
            YearlyStat::new(2020, 99),
            YearlyStat::new(2021, 5),
        ]);
        assert_eq!(record.count_for_year(2020), 10);
        assert_eq!(record.count_for_year(2024), 0);
        // Total sums every entry
        assert_eq!(record.total(), 114);
    }

    #[test]
    fn repeated_topic_key_keeps_position_last_value() {
        let dataset: Dataset = serde_json::from_str(
            r#"{"A": {"yearly_stats": [{"year": 2020, "count": 1}]},
                "B": {"yearly_stats": []},
                "A": {"yearly_stats": [{"year": 2020, "count": 2}]}}"#,
        )
        .unwrap();
        assert_eq!(dataset.topics().collect::<Vec<_>>(), ["A", "B"]);
        assert_eq!(dataset.get("A").unwrap().count_for_year(2020), 2);
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = serde_json::from_str::<Dataset>("[1, 2, 3]").unwrap_err();
        assert!(err.to_string().contains("topic names"));
    }

    #[test]
    fn serialize_keeps_shape_and_order() {
        let dataset: Dataset = [
            (
                "Zeta",
                TopicRecord::new(vec![YearlyStat::new(2020, 3).with_articles(vec![Article {
                    title: "T".into(),
                    url: "https://doi.org/10.1/x".into(),
                    keywords: vec!["K".into()],
                    ..Default::default()
                }])]),
            ),
            ("Alpha", TopicRecord::default()),
        ]
        .into_iter()
        .collect();

        let text = serde_json::to_string(&dataset).unwrap();
        assert!(text.find("Zeta").unwrap() < text.find("Alpha").unwrap());

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value["Zeta"]["yearly_stats"][0],
            json!({
                "year": 2020,
                "count": 3,
                "top_articles": [{"title": "T", "url": "https://doi.org/10.1/x", "keywords": ["K"]}]
            })
        );

        let reparsed: Dataset = serde_json::from_str(&text).unwrap();
        assert_eq!(reparsed, dataset);
    }

    #[test]
    fn collector_fields_survive() {
        let dataset = parse(json!({"AI": {"yearly_stats": [{"year": 2020, "count": 1, "top_articles": [
            {"title": "T", "author": ["Ada Lovelace"], "pub_year": 2020, "url": "u"}
        ]}]}}));
        let article = &dataset.get("AI").unwrap().yearly_stats()[0].top_articles[0];
        assert_eq!(article.author, ["Ada Lovelace"]);
        assert_eq!(article.pub_year, Some(2020));
        assert_eq!(dataset.article_count(), 1);
    }
}
