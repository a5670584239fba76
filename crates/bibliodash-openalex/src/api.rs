//! OpenAlex works API client

use anyhow::Context;
use bibliodash_core::{fetch_text, retry_with_backoff};
use reqwest::Url;

use crate::config::CollectConfig;
use crate::schema::{WorkRow, WorksResponse};

/// URL builder for the `/works` endpoint of one (topic, year) unit
#[derive(Debug, Clone)]
pub struct WorksQuery {
    base: Url,
}

impl WorksQuery {
    /// `works?filter=publication_year:{year},default.search:{topic}[&mailto=...]`
    pub fn new(config: &CollectConfig, topic: &str, year: i32) -> anyhow::Result<Self> {
        // Without a trailing slash `join` would replace the last path segment
        let root = if config.base_url.ends_with('/') {
            Url::parse(&config.base_url)
        } else {
            Url::parse(&format!("{}/", config.base_url))
        }
        .with_context(|| format!("Invalid OpenAlex base URL {:?}", config.base_url))?;
        let mut base = root.join("works").context("Cannot build works URL")?;
        {
            let mut query = base.query_pairs_mut();
            query.append_pair(
                "filter",
                &format!("publication_year:{year},default.search:{topic}"),
            );
            if let Some(mailto) = config.mailto.as_deref().filter(|m| !m.is_empty()) {
                query.append_pair("mailto", mailto);
            }
        }
        Ok(Self { base })
    }

    /// Smallest page; only `meta.count` is read
    pub fn count_url(&self) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut().append_pair("per_page", "1");
        url
    }

    /// Most cited works first
    pub fn top_works_url(&self, top_n: u32) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("sort", "cited_by_count:desc")
            .append_pair("per_page", &top_n.to_string());
        url
    }
}

/// GET + parse with retry on transient failures
pub fn get_works(url: &Url, max_retries: u32) -> anyhow::Result<WorksResponse> {
    let body = retry_with_backoff("openalex", max_retries, || fetch_text(url.as_str()))
        .context("OpenAlex request failed")?;
    serde_json::from_str(&body).context("Invalid OpenAlex works JSON")
}

/// Publication count for the unit
pub fn fetch_count(query: &WorksQuery, config: &CollectConfig) -> anyhow::Result<u64> {
    Ok(get_works(&query.count_url(), config.max_retries)?.meta.count)
}

/// Top cited works for the unit, at most `top_n`
pub fn fetch_top_works(query: &WorksQuery, config: &CollectConfig) -> anyhow::Result<Vec<WorkRow>> {
    let mut results = get_works(&query.top_works_url(config.top_n), config.max_retries)?.results;
    results.truncate(config.top_n as usize);
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn count_url_has_filter_and_mailto() {
        let config = CollectConfig {
            mailto: Some("me@example.org".into()),
            ..Default::default()
        };
        let query = WorksQuery::new(&config, "Smart contract", 2021).unwrap();
        let url = query.count_url();

        assert_eq!(url.host_str(), Some("api.openalex.org"));
        assert_eq!(url.path(), "/works");
        assert_eq!(
            pairs(&url),
            [
                (
                    "filter".to_string(),
                    "publication_year:2021,default.search:Smart contract".to_string()
                ),
                ("mailto".to_string(), "me@example.org".to_string()),
                ("per_page".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn top_works_url_sorts_by_citations() {
        let query = WorksQuery::new(&CollectConfig::default(), "Blockchain", 2020).unwrap();
        let url = query.top_works_url(5);
        let pairs = pairs(&url);
        // No mailto configured
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[1], ("sort".to_string(), "cited_by_count:desc".to_string()));
        assert_eq!(pairs[2], ("per_page".to_string(), "5".to_string()));
    }

    #[test]
    fn base_url_path_is_kept() {
        let config = CollectConfig {
            base_url: "http://localhost:8080/mirror".into(),
            ..Default::default()
        };
        let url = WorksQuery::new(&config, "Blockchain", 2020).unwrap().count_url();
        assert_eq!(url.path(), "/mirror/works");
    }

    #[test]
    fn invalid_base_url_is_an_error() {
        let config = CollectConfig {
            base_url: "not a url".into(),
            ..Default::default()
        };
        assert!(WorksQuery::new(&config, "Blockchain", 2020).is_err());
    }
}
