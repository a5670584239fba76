//! Config subcommand - print the effective configuration

use anyhow::Result;

use crate::config::Config;
use crate::render::print_summary;

pub fn run(config: &Config) -> Result<()> {
    let dashboard = &config.dashboard;
    let openalex = &config.openalex;

    print_summary(
        "Setting",
        &[
            ("Dataset", config.data.path.clone()),
            ("Years", format!("{}-{}", config.years.start, config.years.end)),
            (
                "Default topic",
                dashboard
                    .default_topic
                    .clone()
                    .unwrap_or_else(|| "(first topic)".to_string()),
            ),
            ("Keyword limit", dashboard.keyword_limit.to_string()),
            ("Palette", dashboard.palette.join(", ")),
            ("OA base URL", openalex.base_url.clone()),
            (
                "OA mailto",
                if openalex.mailto.is_some() {
                    "configured".to_string()
                } else {
                    "not set".to_string()
                },
            ),
            ("OA topics", openalex.topics.join(", ")),
            (
                "OA per unit",
                format!(
                    "{} works, {} keywords, {} abstract chars",
                    openalex.top_n, openalex.max_keywords, openalex.abstract_max_chars
                ),
            ),
            ("Request delay", format!("{}ms", openalex.request_delay_ms)),
            ("Read timeout", format!("{}s", config.http.read_timeout)),
            ("Max retries", config.http.max_retries.to_string()),
        ],
    );
    Ok(())
}
