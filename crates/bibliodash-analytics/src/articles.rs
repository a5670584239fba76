//! Article collection, search filtering and keyword ranking for one topic
//!
//! 1. Collect `top_articles` for the selected year, or for every year of the
//!    range in ascending order, each annotated with its source year.
//! 2. Keep articles whose title or any keyword contains the search query
//!    (trimmed, case-insensitive substring match).
//! 3. Count lower-cased keywords over the kept articles and rank them by
//!    descending frequency. Equal counts keep first-occurrence order.

use rustc_hash::FxHashMap;

use crate::model::{Article, Dataset, TopicRecord};
use crate::selection::Selection;
use crate::year::{YearFilter, YearRange};

/// Default number of ranked keywords.
pub const DEFAULT_KEYWORD_LIMIT: usize = 15;

/// An article borrowed from the dataset, tagged with the year it was listed under.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotatedArticle<'a> {
    pub year: i32,
    pub article: &'a Article,
}

/// Articles to display and the keywords ranked over them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleQuery<'a> {
    pub articles: Vec<AnnotatedArticle<'a>>,
    pub top_keywords: Vec<String>,
}

impl ArticleQuery<'_> {
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// Normalize a raw search box value: trimmed and lower-cased.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Title or keyword substring match against an already normalized query.
///
/// An empty query matches everything.
pub fn matches_query(article: &Article, query: &str) -> bool {
    query.is_empty()
        || article.title.to_lowercase().contains(query)
        || article
            .keywords
            .iter()
            .any(|k| k.to_lowercase().contains(query))
}

fn collect_articles<'a>(
    record: &'a TopicRecord,
    filter: &YearFilter,
    years: YearRange,
) -> Vec<AnnotatedArticle<'a>> {
    let annotate = move |year: i32| {
        record
            .stat_for_year(year)
            .into_iter()
            .flat_map(move |stat| stat.top_articles.iter())
            .map(move |article| AnnotatedArticle { year, article })
    };

    match filter {
        YearFilter::All => years.years().flat_map(annotate).collect(),
        YearFilter::Year(year) => annotate(*year).collect(),
        YearFilter::Unmatched(_) => Vec::new(),
    }
}

/// Rank lower-cased keywords by frequency, most frequent first, at most `limit`.
///
/// Ties keep the order in which keywords were first seen while walking the
/// articles front to back.
pub fn rank_keywords(articles: &[AnnotatedArticle<'_>], limit: usize) -> Vec<String> {
    let mut slots: FxHashMap<String, usize> = FxHashMap::default();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for keyword in articles.iter().flat_map(|a| a.article.keywords.iter()) {
        let normalized = keyword.to_lowercase();
        match slots.get(&normalized) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(normalized.clone(), counts.len());
                counts.push((normalized, 1));
            }
        }
    }

    // Stable: equal counts stay in first-occurrence order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts.into_iter().map(|(keyword, _)| keyword).collect()
}

/// Run the article query described by `selection`.
///
/// Unknown topics give an empty result, never an error.
pub fn query_articles<'a>(
    dataset: &'a Dataset,
    years: YearRange,
    selection: &Selection,
    keyword_limit: usize,
) -> ArticleQuery<'a> {
    let Some(record) = dataset.get(&selection.topic) else {
        log::debug!("unknown topic {:?}, nothing to list", selection.topic);
        return ArticleQuery::default();
    };

    let query = normalize_query(&selection.search_query);
    let articles: Vec<AnnotatedArticle<'a>> =
        collect_articles(record, &selection.year_filter, years)
            .into_iter()
            .filter(|a| matches_query(a.article, &query))
            .collect();
    let top_keywords = rank_keywords(&articles, keyword_limit);

    ArticleQuery {
        articles,
        top_keywords,
    }
}
