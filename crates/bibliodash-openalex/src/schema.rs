//! OpenAlex `/works` response structures and their mapping to articles

use serde::Deserialize;
use serde_json::{Map, Value};

use bibliodash_analytics::Article;

use crate::abstract_decode::abstract_text;
use crate::config::CollectConfig;

const NO_TITLE: &str = "No Title";

/// One page of the works listing
#[derive(Debug, Deserialize)]
pub struct WorksResponse {
    pub meta: Meta,
    #[serde(default)]
    pub results: Vec<WorkRow>,
}

#[derive(Debug, Deserialize)]
pub struct Meta {
    /// Total hits for the filter, independent of page size
    #[serde(default)]
    pub count: u64,
}

/// Fields of an OpenAlex work the dataset needs
#[derive(Debug, Deserialize)]
pub struct WorkRow {
    /// OpenAlex ID (e.g., "https://openalex.org/W2741809807")
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub doi: Option<String>,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub publication_year: Option<i32>,

    #[serde(default)]
    pub abstract_inverted_index: Option<Map<String, Value>>,

    #[serde(default)]
    pub authorships: Vec<Authorship>,

    /// Concepts in relevance order
    #[serde(default)]
    pub concepts: Vec<Concept>,
}

#[derive(Debug, Deserialize)]
pub struct Authorship {
    #[serde(default)]
    pub author: Option<Author>,
}

#[derive(Debug, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Concept {
    #[serde(default)]
    pub display_name: Option<String>,
}

impl WorkRow {
    /// DOI link when present, the OpenAlex ID otherwise
    pub fn link(&self) -> &str {
        self.doi
            .as_deref()
            .filter(|doi| !doi.is_empty())
            .unwrap_or(&self.id)
    }

    pub fn into_article(self, config: &CollectConfig) -> Article {
        let abstract_text = abstract_text(
            self.abstract_inverted_index.as_ref(),
            config.abstract_max_chars,
        );
        let url = self.link().to_string();
        Article {
            title: self.display_name.unwrap_or_else(|| NO_TITLE.to_string()),
            abstract_text: Some(abstract_text),
            url,
            keywords: self
                .concepts
                .into_iter()
                .filter_map(|c| c.display_name)
                .take(config.max_keywords)
                .collect(),
            author: self
                .authorships
                .into_iter()
                .filter_map(|a| a.author?.display_name)
                .collect(),
            pub_year: self.publication_year,
        }
    }
}
