//! One-shot dataset loading from a local file or an HTTP(S) URL
//!
//! Loading either yields a complete [`Dataset`] or an error; nothing is built
//! from a partially read source and there is no retry.

use std::fmt;
use std::path::PathBuf;

use bibliodash_core::{StreamError, fetch_text};

use crate::model::Dataset;

/// Where the dataset JSON lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// `http://` and `https://` locations are URLs, everything else a path.
    pub fn parse(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            Self::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Failure to obtain a usable dataset.
#[derive(Debug)]
pub enum LoadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Http(StreamError),
    Parse(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Http(e) => write!(f, "cannot fetch dataset: {e}"),
            Self::Parse(e) => write!(f, "invalid dataset JSON: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Http(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<StreamError> for LoadError {
    fn from(e: StreamError) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Parse dataset JSON text.
pub fn parse_dataset(text: &str) -> Result<Dataset, LoadError> {
    Ok(serde_json::from_str(text)?)
}

/// Read and parse the dataset.
pub fn load_dataset(source: &DataSource) -> Result<Dataset, LoadError> {
    log::info!("Loading dataset from {source}");

    let text = match source {
        DataSource::File(path) => std::fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.clone(),
            source: e,
        })?,
        DataSource::Url(url) => fetch_text(url)?,
    };

    let dataset = parse_dataset(&text)?;
    if dataset.is_empty() {
        log::warn!("Dataset from {source} has no topics");
    }
    log::info!(
        "Loaded {} topics with {} articles",
        dataset.len(),
        dataset.article_count()
    );
    Ok(dataset)
}
