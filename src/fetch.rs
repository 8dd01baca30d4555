//! Source page download

use std::time::Duration;

use log::info;

use crate::config::Config;
use crate::error::ScrapeError;

/// Fetch the configured page with one blocking GET.
///
/// The whole request, body included, is bounded by `timeout_secs`.
/// Transport errors and non-2xx statuses both map to [`ScrapeError::Fetch`].
pub fn fetch_html(config: &Config) -> Result<String, ScrapeError> {
    let agent = ureq::Agent::new_with_config(
        ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .user_agent(config.user_agent.as_str())
            .build(),
    );

    let url = config.sizes_url.trim();
    info!("Fetching {}", url);

    let fetch_error = |message: String| ScrapeError::Fetch {
        url: url.to_string(),
        message,
    };

    let resp = agent.get(url).call().map_err(|e| fetch_error(e.to_string()))?;
    if !resp.status().is_success() {
        return Err(fetch_error(format!("HTTP {}", resp.status())));
    }

    resp.into_body()
        .read_to_string()
        .map_err(|e| fetch_error(format!("failed to read body: {}", e)))
}
