//! Bibliodash OpenAlex - builds the dashboard dataset from the OpenAlex works API
//!
//! For every configured topic and year this crate asks OpenAlex for the
//! publication count and the most cited works, and assembles the answers
//! into a [`Dataset`](bibliodash_analytics::Dataset).
//!
//! # Example
//!
//! ```no_run
//! use bibliodash_core::ProgressContext;
//! use bibliodash_openalex::{CollectConfig, run};
//!
//! let config = CollectConfig {
//!     topics: vec!["Blockchain".into()],
//!     mailto: Some("researcher@example.com".into()),
//!     ..Default::default()
//! };
//!
//! let (dataset, summary) = run(&config, &ProgressContext::new()).expect("Collection failed");
//! println!("{} topics, {} failed units", dataset.len(), summary.failed_units);
//! ```

pub mod abstract_decode;
pub mod api;
pub mod config;
pub mod runner;
pub mod schema;

// Re-exports for convenience
pub use config::CollectConfig;
pub use runner::{RunSummary, run};
